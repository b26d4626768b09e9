//! `tweak`: natural-language nudges for stylesheets, HTML block splicing
//! and fenced assistant prompts.
//!
//! ```text
//! tweak fix make the border thinner
//! tweak get .nav-arrow font-size
//! tweak nudge .nav-arrow font-size grow --dry-run
//! tweak splice --source new-milestones.html --in-place
//! tweak ask change border padding to 5px
//! ```
//!
//! Exit codes: 0 on success, 1 when the request could not be applied,
//! 2 for usage errors.

mod cli;
mod commands;
mod config;
mod logging;
mod report;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use crate::cli::Cli;
use crate::report::Report;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut report = Report::stdout();
    match commands::run(cli, &mut report) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err);
            ExitCode::FAILURE
        }
    }
}
