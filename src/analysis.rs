//! Per-record screening against the cohort baselines.
//!
//! Each record runs through ten fixed screens, in a fixed order. A screen
//! compares one derived value (a raw indicator or an h-based ratio) to the
//! matching baseline cut point and, when crossed, yields a [`Flag`].
//!
//! The h-based ratios floor the denominator to 1 when the record's h-index
//! is zero, so a zero-h profile is compared on raw indicator values. The
//! baseline side handles zero denominators differently (it excludes those
//! records outright); unifying the two policies changes the flagged output.

use std::fmt;

use crate::data::Record;
use crate::norms::Norms;

/// Identifies which screen produced a [`Flag`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Check {
    AuthorsPerPaper,
    HiRatio,
    HmRatio,
    HaIndex,
    GRatio,
    ERatio,
    HCoverage,
    GCoverage,
    StarRatio,
    CitesPerAuthorYear,
}

/// One triggered screen: the observed value and the cut point it crossed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flag {
    pub check: Check,
    pub value: f64,
    pub cutoff: f64,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.check {
            Check::AuthorsPerPaper => write!(
                f,
                "High Authors_Paper: {:.1} (90th percentile: {:.1}) — May indicate inflated co-authorship.",
                self.value, self.cutoff
            ),
            Check::HiRatio => write!(
                f,
                "Low hI/h ratio: {:.2} (10th percentile: {:.2}) — Suggests low individual contribution.",
                self.value, self.cutoff
            ),
            Check::HmRatio => write!(
                f,
                "Low hm/h ratio: {:.2} (10th percentile: {:.2}) — Co-authorship heavily dilutes contribution.",
                self.value, self.cutoff
            ),
            Check::HaIndex => write!(
                f,
                "Low hA (authorship diversity): {:.1} (10th percentile: {:.1}) — Frequent repetition of same co-authors.",
                self.value, self.cutoff
            ),
            Check::GRatio => write!(
                f,
                "High g/h ratio: {:.2} (90th percentile: {:.2}) — Suggests few highly cited papers skew impact.",
                self.value, self.cutoff
            ),
            Check::ERatio => write!(
                f,
                "High e/h ratio: {:.2} (90th percentile: {:.2}) — Indicates uneven distribution in h-core.",
                self.value, self.cutoff
            ),
            Check::HCoverage => write!(
                f,
                "High h_coverage: {:.1}% (90th percentile: {:.1}%) — Citations highly concentrated in h-core.",
                self.value, self.cutoff
            ),
            Check::GCoverage => write!(
                f,
                "High g_coverage: {:.1}% (90th percentile: {:.1}%) — Impact clustered in top g papers.",
                self.value, self.cutoff
            ),
            Check::StarRatio => write!(
                f,
                "High Star Paper Ratio: {:.2} (90th percentile: {:.2}) — Reliance on few 'blockbuster' papers.",
                self.value, self.cutoff
            ),
            Check::CitesPerAuthorYear => write!(
                f,
                "High Cites/Author/Year: {:.2} (90th percentile: {:.2}) — Possible self-citation or tight citation circle.",
                self.value, self.cutoff
            ),
        }
    }
}

/// Screens one record against the cohort baselines.
///
/// Returns the triggered flags in screen order; an unremarkable record
/// yields an empty vector. The star-ratio screen only runs for records
/// with at least one paper.
pub fn analyze_profile(record: &Record, norms: &Norms) -> Vec<Flag> {
    let mut flags = Vec::new();

    let h_index = if record.h_index > 0.0 {
        record.h_index
    } else {
        1.0
    };

    if record.authors_per_paper > norms.authors_per_paper.cutoff {
        flags.push(Flag {
            check: Check::AuthorsPerPaper,
            value: record.authors_per_paper,
            cutoff: norms.authors_per_paper.cutoff,
        });
    }

    let hi_ratio = record.hi_index / h_index;
    if hi_ratio < norms.hi_ratio.cutoff {
        flags.push(Flag {
            check: Check::HiRatio,
            value: hi_ratio,
            cutoff: norms.hi_ratio.cutoff,
        });
    }

    let hm_ratio = record.hm_index / h_index;
    if hm_ratio < norms.hm_ratio.cutoff {
        flags.push(Flag {
            check: Check::HmRatio,
            value: hm_ratio,
            cutoff: norms.hm_ratio.cutoff,
        });
    }

    if record.ha_index < norms.ha_index.cutoff {
        flags.push(Flag {
            check: Check::HaIndex,
            value: record.ha_index,
            cutoff: norms.ha_index.cutoff,
        });
    }

    let g_ratio = record.g_index / h_index;
    if g_ratio > norms.g_ratio.cutoff {
        flags.push(Flag {
            check: Check::GRatio,
            value: g_ratio,
            cutoff: norms.g_ratio.cutoff,
        });
    }

    let e_ratio = record.e_index / h_index;
    if e_ratio > norms.e_ratio.cutoff {
        flags.push(Flag {
            check: Check::ERatio,
            value: e_ratio,
            cutoff: norms.e_ratio.cutoff,
        });
    }

    if record.h_coverage > norms.h_coverage.cutoff {
        flags.push(Flag {
            check: Check::HCoverage,
            value: record.h_coverage,
            cutoff: norms.h_coverage.cutoff,
        });
    }

    if record.g_coverage > norms.g_coverage.cutoff {
        flags.push(Flag {
            check: Check::GCoverage,
            value: record.g_coverage,
            cutoff: norms.g_coverage.cutoff,
        });
    }

    if record.papers > 0.0 {
        let star_ratio = record.star_count / record.papers;
        if star_ratio > norms.star_ratio.cutoff {
            flags.push(Flag {
                check: Check::StarRatio,
                value: star_ratio,
                cutoff: norms.star_ratio.cutoff,
            });
        }
    }

    if record.cites_per_author_year > norms.cites_per_author_year.cutoff {
        flags.push(Flag {
            check: Check::CitesPerAuthorYear,
            value: record.cites_per_author_year,
            cutoff: norms.cites_per_author_year.cutoff,
        });
    }

    flags
}
