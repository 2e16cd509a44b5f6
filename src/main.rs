mod cli;

use awsipmatch::{Error, Result};
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();
    cli::log::init(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch the AWS IP Ranges, resolve the target, and print the matching prefixes for each
/// address. The table is printed before a no-match outcome is returned.
fn run(args: &cli::Args) -> Result<()> {
    let target = args
        .target
        .as_deref()
        .ok_or_else(|| Error::Usage(cli::Args::command().render_usage().to_string()))?;

    let aws_ip_ranges = awsipmatch::get_ranges()?;
    let addresses = awsipmatch::resolve(target)?;

    let search_results = aws_ip_ranges.search(target, &addresses);
    cli::log::search_results(&search_results);

    cli::output::print_results(&search_results, &mut io::stdout().lock())?;

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&search_results, csv_file)?;
    }

    if search_results.any_match() {
        Ok(())
    } else {
        Err(Error::NoMatch {
            target: target.to_string(),
        })
    }
}
