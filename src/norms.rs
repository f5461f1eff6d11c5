//! Cohort baseline computation.
//!
//! Baselines are computed once, over the full dataset, before any record is
//! analyzed; a record's flags never feed back into them. Ratio series admit
//! only records whose denominator is strictly positive; excluded records
//! contribute to neither the mean nor the cut point of that series.

use serde::Serialize;

use crate::data::Record;
use crate::error::{Error, Result};
use crate::stats::Sample;

/// A cohort-wide baseline for one indicator: the arithmetic mean and the
/// decile cut point used as the flagging threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Norm {
    pub mean: f64,
    pub cutoff: f64,
}

/// The full set of cohort baselines, immutable once computed.
///
/// Upper-cut baselines (`cutoff` = 90th percentile): `authors_per_paper`,
/// `g_ratio`, `e_ratio`, `h_coverage`, `g_coverage`, `star_ratio`,
/// `cites_per_author_year`. Lower-cut baselines (`cutoff` = 10th
/// percentile): `hi_ratio`, `hm_ratio`, `ha_index`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Norms {
    pub authors_per_paper: Norm,
    pub hi_ratio: Norm,
    pub hm_ratio: Norm,
    pub ha_index: Norm,
    pub g_ratio: Norm,
    pub e_ratio: Norm,
    pub h_coverage: Norm,
    pub g_coverage: Norm,
    pub star_ratio: Norm,
    pub cites_per_author_year: Norm,
}

/// Which tail of the distribution a baseline cuts.
#[derive(Clone, Copy)]
enum Cut {
    Lower,
    Upper,
}

fn baseline(values: &[f64], metric: &'static str, cut: Cut) -> Result<Norm> {
    if values.is_empty() {
        return Err(Error::EmptySeries { metric });
    }

    let sample = Sample::new(values);

    // A lone observation has no spread to cut; the threshold degrades to
    // 0.0 and the corresponding screens go quiet.
    let cutoff = if values.len() > 1 {
        let deciles = sample.deciles();
        match cut {
            Cut::Lower => deciles.p10(),
            Cut::Upper => deciles.p90(),
        }
    } else {
        0.0
    };

    Ok(Norm {
        mean: sample.mean(),
        cutoff,
    })
}

impl Norms {
    /// Computes all baselines over `records`.
    ///
    /// An empty cohort, or a ratio series left empty by its
    /// positive-denominator filter, is an [`Error::EmptySeries`]; there is
    /// no meaningful default to substitute.
    pub fn from_records(records: &[Record]) -> Result<Norms> {
        let field = |get: fn(&Record) -> f64| -> Vec<f64> { records.iter().map(get).collect() };

        let ratio = |num: fn(&Record) -> f64, den: fn(&Record) -> f64| -> Vec<f64> {
            records
                .iter()
                .filter(|r| den(r) > 0.0)
                .map(|r| num(r) / den(r))
                .collect()
        };

        Ok(Norms {
            authors_per_paper: baseline(
                &field(|r| r.authors_per_paper),
                "Authors_Paper",
                Cut::Upper,
            )?,
            hi_ratio: baseline(
                &ratio(|r| r.hi_index, |r| r.h_index),
                "hI/h ratio",
                Cut::Lower,
            )?,
            hm_ratio: baseline(
                &ratio(|r| r.hm_index, |r| r.h_index),
                "hm/h ratio",
                Cut::Lower,
            )?,
            ha_index: baseline(&field(|r| r.ha_index), "hA", Cut::Lower)?,
            g_ratio: baseline(
                &ratio(|r| r.g_index, |r| r.h_index),
                "g/h ratio",
                Cut::Upper,
            )?,
            e_ratio: baseline(
                &ratio(|r| r.e_index, |r| r.h_index),
                "e/h ratio",
                Cut::Upper,
            )?,
            h_coverage: baseline(&field(|r| r.h_coverage), "h_coverage", Cut::Upper)?,
            g_coverage: baseline(&field(|r| r.g_coverage), "g_coverage", Cut::Upper)?,
            star_ratio: baseline(
                &ratio(|r| r.star_count, |r| r.papers),
                "star ratio",
                Cut::Upper,
            )?,
            cites_per_author_year: baseline(
                &field(|r| r.cites_per_author_year),
                "Cites_Author_Year",
                Cut::Upper,
            )?,
        })
    }
}
