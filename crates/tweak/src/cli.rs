//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tweak_css::TransformAction;

#[derive(Debug, Parser)]
#[command(
    name = "tweak",
    version,
    about = "Nudge stylesheet values, splice HTML blocks and hand fenced requests to an assistant"
)]
pub struct Cli {
    /// Configuration file (defaults to ./tweak.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interpret a plain-words request like "make the border thinner" and apply it
    Fix {
        #[arg(required = true, num_args = 1.., value_name = "REQUEST")]
        request: Vec<String>,

        /// Stylesheet to edit
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Report the change without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print a property's value from a selector's first rule block
    Get {
        selector: String,
        property: String,

        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Scale the numeric parts of one property
    Nudge {
        selector: String,
        property: String,

        #[arg(value_name = "shrink|grow|none")]
        action: TransformAction,

        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the contents of a marked HTML block with another file's block
    Splice {
        /// File holding the replacement block
        #[arg(long, value_name = "PATH")]
        source: PathBuf,

        /// Document to splice into
        #[arg(long, value_name = "PATH")]
        target: Option<PathBuf>,

        /// Opening tag that marks the block
        #[arg(long, value_name = "TAG")]
        marker: Option<String>,

        /// Where to write the result (defaults to <target>-new.<ext>)
        #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the target
        #[arg(long)]
        in_place: bool,
    },

    /// Send a request to the coding assistant as a narrowly scoped prompt
    Ask {
        #[arg(required = true, num_args = 1.., value_name = "REQUEST")]
        request: Vec<String>,

        /// Show the prompt and command without running the assistant
        #[arg(long)]
        dry_run: bool,
    },
}
