use std::path::Path;

use clap::{ArgAction, Parser};
use eyre::Result;

use crate::ops::{self, GenerateOptions};
use crate::reports::{Report, TerminalOutput};

/// Extension trait for exiting on definition file errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for enumsmith_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "enumsmith")]
#[command(version, disable_version_flag = true)]
#[command(about = "Generate Go enum source files from YAML or JSON definitions")]
pub(crate) struct Cli {
    /// Overwrite enum files that already exist
    #[arg(short, long)]
    force: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    dry_run: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let report = ops::generate(GenerateOptions {
            root: Path::new("."),
            force: self.force,
            dry_run: self.dry_run,
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
