//! Bottom-of-cohort ranking, one list per indicator.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::data::Record;

/// Severity direction of a ranked indicator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    HigherIsWorse,
    LowerIsWorse,
}

/// The indicators covered by the worst-performer report, in report order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Metric {
    AuthorsPerPaper,
    HiIndex,
    HmIndex,
    HaIndex,
    GIndex,
    EIndex,
    HCoverage,
    GCoverage,
    StarCount,
    CitesPerAuthorYear,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::AuthorsPerPaper,
        Metric::HiIndex,
        Metric::HmIndex,
        Metric::HaIndex,
        Metric::GIndex,
        Metric::EIndex,
        Metric::HCoverage,
        Metric::GCoverage,
        Metric::StarCount,
        Metric::CitesPerAuthorYear,
    ];

    /// Column name as it appears in the input table and the report.
    pub fn name(self) -> &'static str {
        match self {
            Metric::AuthorsPerPaper => "Authors_Paper",
            Metric::HiIndex => "hI_index",
            Metric::HmIndex => "hm_index",
            Metric::HaIndex => "hA",
            Metric::GIndex => "g_index",
            Metric::EIndex => "e_index",
            Metric::HCoverage => "h_coverage",
            Metric::GCoverage => "g_coverage",
            Metric::StarCount => "star_count",
            Metric::CitesPerAuthorYear => "Cites_Author_Year",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Metric::HiIndex | Metric::HmIndex | Metric::HaIndex => Direction::LowerIsWorse,
            _ => Direction::HigherIsWorse,
        }
    }

    /// Reads this indicator from a record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Metric::AuthorsPerPaper => record.authors_per_paper,
            Metric::HiIndex => record.hi_index,
            Metric::HmIndex => record.hm_index,
            Metric::HaIndex => record.ha_index,
            Metric::GIndex => record.g_index,
            Metric::EIndex => record.e_index,
            Metric::HCoverage => record.h_coverage,
            Metric::GCoverage => record.g_coverage,
            Metric::StarCount => record.star_count,
            Metric::CitesPerAuthorYear => record.cites_per_author_year,
        }
    }
}

/// Returns up to `count` records, worst first, for `metric`.
///
/// The sort is stable, so ties keep their input order. The input slice is
/// not reordered.
pub fn worst_performers<'a>(records: &'a [Record], metric: Metric, count: usize) -> Vec<&'a Record> {
    records
        .iter()
        .sorted_by(|a, b| {
            let ord = metric
                .value(a)
                .partial_cmp(&metric.value(b))
                // Arbitrary way to handle NaNs that coercion already rules out
                .unwrap_or(Ordering::Equal);

            match metric.direction() {
                Direction::HigherIsWorse => ord.reverse(),
                Direction::LowerIsWorse => ord,
            }
        })
        .take(count)
        .collect()
}
