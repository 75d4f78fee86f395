//! Command line arguments and process exit codes.

use std::path::PathBuf;

use clap::Parser;

use crate::error::PlannerError;

/// Load a course catalog and browse it from an interactive menu.
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Course file used by the first "Load Data Structures" (`number,name[,prereq...]` per line)
    #[arg(env = "COURSE_PLANNER_CSV", value_hint = clap::ValueHint::FilePath)]
    pub csv_path: Option<PathBuf>,

    /// Course shown by the first "Print Course"
    pub course_id: Option<String>,

    /// Raise log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

/// Exit codes, following BSD `sysexits.h`.
pub mod exitcode {
    /// Input/output error.
    pub const IOERR: i32 = 74;
}

impl PlannerError {
    /// The exit code a process should report after this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlannerError::Io(_) => exitcode::IOERR,
        }
    }
}
