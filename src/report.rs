//! Line-oriented report rendering.
//!
//! Two sections: the per-record analysis (one banner, numbered flags or a
//! no-flags notice, and a separator per record) and the worst-performers
//! listing (three entries per ranked indicator). Both are generic over
//! their sink so tests can render into a buffer.

use std::io::Write;

use crate::analysis::analyze_profile;
use crate::data::Record;
use crate::error::Result;
use crate::norms::Norms;
use crate::rank::{worst_performers, Metric};

const SEPARATOR_WIDTH: usize = 60;

/// Writes the per-record analysis section for `records`.
pub fn write_analysis<W: Write>(wtr: &mut W, records: &[Record], norms: &Norms) -> Result<()> {
    for record in records {
        let name = if record.query.is_empty() {
            "Unknown Researcher"
        } else {
            record.query.as_str()
        };

        writeln!(wtr)?;
        writeln!(wtr, "🔍 Analyzing: {}", name)?;

        let flags = analyze_profile(record, norms);
        if flags.is_empty() {
            writeln!(wtr, "✅ No red flags detected.")?;
        } else {
            for (i, flag) in flags.iter().enumerate() {
                writeln!(wtr, "⚠️ {}. {}", i + 1, flag)?;
            }
        }

        writeln!(wtr, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    Ok(())
}

/// Writes the worst-performer section over the full dataset.
pub fn write_worst_performers<W: Write>(wtr: &mut W, records: &[Record]) -> Result<()> {
    writeln!(wtr)?;
    writeln!(wtr, "📉 Top 3 Researchers with Worst Metrics:")?;

    for metric in Metric::ALL.iter().copied() {
        writeln!(wtr)?;
        writeln!(wtr, "🔻 Worst in {}:", metric.name())?;

        for (i, record) in worst_performers(records, metric, 3).iter().enumerate() {
            let name = if record.query.is_empty() {
                "Unknown"
            } else {
                record.query.as_str()
            };
            writeln!(
                wtr,
                "  {}. {}: {} = {:.2}",
                i + 1,
                name,
                metric.name(),
                metric.value(record)
            )?;
        }
    }

    Ok(())
}
