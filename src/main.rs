use std::io;

use clap::Parser;
use course_planner::cli::Cli;
use course_planner::planner::Planner;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdin = io::stdin();
    let mut planner = Planner::new(stdin.lock(), io::stdout().lock());
    if let Some(path) = cli.csv_path {
        planner = planner.with_csv_path(path);
    }
    if let Some(course_id) = cli.course_id {
        planner = planner.with_course_id(course_id);
    }

    if let Err(e) = planner.run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Logs go to stderr so they never interleave with the menu on stdout.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!(?filter, "logging initialised");
}
