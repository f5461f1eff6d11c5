//! Input table loading and numeric coercion.
//!
//! The input is a delimited table with a header row; field names bind,
//! field order does not. Every numeric column is coerced to `f64` once at
//! load time: an unparsable, missing, or non-finite cell becomes `0.0`
//! rather than an error. Bibliometric exports are sparse, and the rest of
//! the pipeline relies on fully populated records.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// One row of the input table: a researcher/query label plus the fifteen
/// numeric indicator columns.
///
/// The indicators themselves (h-index variants, g-index, e-index, coverage
/// percentages, citation rates) are opaque inputs here; nothing in this
/// crate computes them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "Query", default)]
    pub query: String,

    #[serde(rename = "Authors_Paper", deserialize_with = "lenient_f64", default)]
    pub authors_per_paper: f64,
    #[serde(rename = "Papers_Author", deserialize_with = "lenient_f64", default)]
    pub papers_per_author: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub h_index: f64,
    #[serde(rename = "hI_index", deserialize_with = "lenient_f64", default)]
    pub hi_index: f64,
    #[serde(rename = "hI_norm", deserialize_with = "lenient_f64", default)]
    pub hi_norm: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub hm_index: f64,
    #[serde(rename = "hA", deserialize_with = "lenient_f64", default)]
    pub ha_index: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub g_index: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub e_index: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub h_coverage: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub g_coverage: f64,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub star_count: f64,
    #[serde(rename = "Cites_Author", deserialize_with = "lenient_f64", default)]
    pub cites_per_author: f64,
    #[serde(rename = "Cites_Author_Year", deserialize_with = "lenient_f64", default)]
    pub cites_per_author_year: f64,
    #[serde(rename = "Papers", deserialize_with = "lenient_f64", default)]
    pub papers: f64,
}

/// Coercion with default: any cell that does not parse as a finite float
/// becomes `0.0`.
///
/// `"nan"` parses as a float but would poison every downstream mean, so
/// non-finite values are treated like any other unusable cell.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<String>::deserialize(deserializer)?;

    Ok(cell
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .unwrap_or(0.0))
}

/// Reads the whole table at `path` into memory.
///
/// A leading UTF-8 byte-order marker is tolerated, as are short rows
/// (missing trailing cells coerce to `0.0`). An unreadable file or
/// structurally malformed delimited data is fatal.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|inner| Error::AccessError {
        path: path.to_owned(),
        inner,
    })?;

    let records = parse_records(&raw).map_err(|inner| Error::CsvError {
        path: path.to_owned(),
        inner,
    })?;

    if crate::debug_enabled() {
        eprintln!(
            "bibaudit: loaded {} records from {}",
            records.len(),
            path.display()
        );
    }

    Ok(records)
}

fn parse_records(raw: &str) -> std::result::Result<Vec<Record>, csv::Error> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(raw.as_bytes());

    reader.deserialize().collect()
}
