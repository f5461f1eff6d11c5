use std::io::Write;

use rand::prelude::*;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use bibaudit::error::Error;
use bibaudit::{analyze_profile, load_records, report, Check, Norms, Record};

const HEADER: &str = "Query,Authors_Paper,Papers_Author,h_index,hI_index,hI_norm,hm_index,hA,\
                      g_index,e_index,h_coverage,g_coverage,star_count,Cites_Author,\
                      Cites_Author_Year,Papers";

/// Writes a BOM-prefixed cohort of twelve rows: eleven with Authors_Paper
/// 1..=11 and a twelfth at 12, everything else identical.
fn write_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    file.write_all("\u{feff}".as_bytes()).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for i in 1..=12 {
        writeln!(
            file,
            "researcher-{:02},{},2.0,10,5,0.5,5,5,12,4,40,60,1,30,2,20",
            i, i
        )
        .unwrap();
    }

    file.flush().unwrap();
    file
}

fn render(records: &[Record], norms: &Norms) -> String {
    let mut out = Vec::new();
    report::write_analysis(&mut out, records, norms).unwrap();
    report::write_worst_performers(&mut out, records).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn end_to_end_flags_the_outlier() {
    let file = write_fixture();

    let records = load_records(file.path()).unwrap();
    assert_eq!(records.len(), 12);

    let norms = Norms::from_records(&records).unwrap();
    // Authors_Paper series [1..=12]: p90 is the value at rank 10.
    assert_eq!(norms.authors_per_paper.cutoff, 10.0);

    let flags = analyze_profile(&records[11], &norms);
    assert!(flags
        .iter()
        .any(|flag| flag.check == Check::AuthorsPerPaper));

    // No record at or below the cut point produces that flag.
    for record in &records[..10] {
        let flags = analyze_profile(record, &norms);
        assert!(!flags
            .iter()
            .any(|flag| flag.check == Check::AuthorsPerPaper));
    }

    let rendered = render(&records, &norms);
    assert!(rendered.contains("🔍 Analyzing: researcher-12"));
    assert!(rendered.contains("High Authors_Paper: 12.0 (90th percentile: 10.0)"));
    assert!(rendered.contains("✅ No red flags detected."));
    assert!(rendered.contains("📉 Top 3 Researchers with Worst Metrics:"));
    assert!(rendered.contains("🔻 Worst in Authors_Paper:"));
    assert!(rendered.contains("  1. researcher-12: Authors_Paper = 12.00"));
}

#[test]
fn pipeline_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for i in 0..40 {
        writeln!(
            file,
            "q{},{:.2},{:.2},{},{:.2},{:.2},{:.2},{:.2},{},{:.2},{:.2},{:.2},{},{:.2},{:.2},{}",
            i,
            rng.gen_range(1.0..20.0),
            rng.gen_range(0.1..5.0),
            rng.gen_range(1..40),
            rng.gen_range(0.5..20.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.5..20.0),
            rng.gen_range(0.5..20.0),
            rng.gen_range(1..60),
            rng.gen_range(0.0..30.0),
            rng.gen_range(10.0..90.0),
            rng.gen_range(10.0..90.0),
            rng.gen_range(0..10),
            rng.gen_range(1.0..500.0),
            rng.gen_range(0.1..40.0),
            rng.gen_range(1..200),
        )
        .unwrap();
    }
    file.flush().unwrap();

    let first_records = load_records(file.path()).unwrap();
    let second_records = load_records(file.path()).unwrap();
    assert_eq!(first_records, second_records);

    let first_norms = Norms::from_records(&first_records).unwrap();
    let second_norms = Norms::from_records(&second_records).unwrap();
    assert_eq!(first_norms, second_norms);

    assert_eq!(
        render(&first_records, &first_norms),
        render(&second_records, &second_norms)
    );
}

#[test]
fn sparse_cells_coerce_instead_of_failing() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Query,h_index,hI_index,hA,Papers,star_count").unwrap();
    writeln!(file, "full,10,5,3,20,2").unwrap();
    writeln!(file, "sparse,,n/a,,,").unwrap();
    file.flush().unwrap();

    let records = load_records(file.path()).unwrap();

    assert_eq!(records[1].h_index, 0.0);
    assert_eq!(records[1].hi_index, 0.0);
    assert_eq!(records[1].papers, 0.0);

    // The sparse record's zero denominators drop it from the ratio
    // baselines instead of contributing zeros.
    let norms = Norms::from_records(&records).unwrap();
    assert_eq!(norms.hi_ratio.mean, 0.5);
    assert_eq!(norms.star_ratio.mean, 0.1);
}

#[test]
fn missing_input_file_is_an_access_error() {
    match load_records("no-such-metrics-table.csv") {
        Err(Error::AccessError { path, .. }) => {
            assert_eq!(path.to_str(), Some("no-such-metrics-table.csv"));
        }
        other => panic!("expected AccessError, got {:?}", other.map(|_| ())),
    }
}
