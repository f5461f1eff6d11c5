use std::io::{self, Write};
use std::process;

use clap::{App, Arg};
use regex::Regex;

use bibaudit::error::Result;
use bibaudit::{load_records, report, Norms, Record};

/// The input consumed when no path is given on the command line.
const DEFAULT_INPUT: &str = "pop-metrics.csv";

struct Args {
    input: String,
    filter: Option<Regex>,
    export: bool,
}

fn main() {
    let args = parse_args();

    if let Err(err) = try_main(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn parse_args() -> Args {
    let matches = App::new("bibaudit")
        .about("Screens researcher bibliometric profiles against cohort baselines")
        .arg(
            Arg::with_name("input")
                .help("Delimited metrics table to audit")
                .index(1),
        )
        .arg(
            Arg::with_name("filter")
                .short("f")
                .long("filter")
                .takes_value(true)
                .value_name("REGEX")
                .help("Only analyze records whose label matches this regex"),
        )
        .arg(
            Arg::with_name("export")
                .long("export")
                .help("Print the computed baselines as JSON and exit"),
        )
        .get_matches();

    let filter = matches.value_of("filter").map(|pattern| {
        Regex::new(pattern).unwrap_or_else(|err| {
            eprintln!("Invalid filter regex: {}", err);
            process::exit(1);
        })
    });

    Args {
        input: matches.value_of("input").unwrap_or(DEFAULT_INPUT).to_string(),
        filter,
        export: matches.is_present("export"),
    }
}

fn try_main(args: &Args) -> Result<()> {
    let records = load_records(&args.input)?;
    let norms = Norms::from_records(&records)?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if args.export {
        serde_json::to_writer_pretty(&mut stdout, &norms)?;
        writeln!(stdout)?;
        return Ok(());
    }

    // The filter scopes the analysis section only; baselines and the
    // worst-performer ranking always cover the full dataset.
    match &args.filter {
        Some(filter) => {
            let subset: Vec<Record> = records
                .iter()
                .filter(|r| filter.is_match(&r.query))
                .cloned()
                .collect();
            report::write_analysis(&mut stdout, &subset, &norms)?;
        }
        None => report::write_analysis(&mut stdout, &records, &norms)?,
    }

    report::write_worst_performers(&mut stdout, &records)?;

    Ok(())
}
