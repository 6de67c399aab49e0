pub mod report;
pub mod sample;

use std::path::PathBuf;

use clap::Parser;

use crate::error::FamilyResult;
use crate::import;

#[derive(Debug, Parser)]
#[command(name = "famtree")]
#[command(about = "Family tree demo: relationships, extended family and statistics")]
#[command(version)]
pub struct Cli {
    /// Family description (JSON) to load instead of the built-in sample family
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Member to report immediate and extended family for (repeatable)
    #[arg(short, long = "member")]
    pub members: Vec<String>,

    /// Month (1-12) to list birthdays for
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Render the family tree rooted at this member
    #[arg(short, long)]
    pub tree: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cli: &Cli) -> FamilyResult<()> {
    let (tree, members) = match &cli.file {
        Some(path) => {
            let (tree, _) = import::import_file(path)?;
            (tree, cli.members.clone())
        }
        None => {
            let members = if cli.members.is_empty() {
                sample::DEFAULT_MEMBERS.iter().map(|s| s.to_string()).collect()
            } else {
                cli.members.clone()
            };
            (sample::build()?, members)
        }
    };

    let report = report::build(&tree, &members, cli.month, cli.tree.as_deref())?;
    if cli.json {
        report::print_json(&report)
    } else {
        report::print_text(&report);
        Ok(())
    }
}
