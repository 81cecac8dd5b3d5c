use std::io::{stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use csv::Writer;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transfer_validator::engine::{BatchEngine, RowReport};
use transfer_validator::models::Field;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: transfer-validator [input].csv [log_level:optional] > [report].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let engine = BatchEngine::new();

    let timer = Instant::now();
    let reports = engine.run(path).await?;
    let duration = timer.elapsed();

    let failing = reports.iter().filter(|row| !row.report.is_valid()).count();
    info!("Validated {} instruction(s) in {duration:?}, {failing} failing", reports.len());

    write_reports_to_stdout(&reports)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_reports_to_stdout(reports: &[RowReport]) -> Result<()> {
    //NOTE: Error messages can contain commas, the csv writer takes care of quoting them
    let mut output = Writer::from_writer(stdout().lock());

    let mut header = vec!["row", "valid"];
    header.extend(Field::ALL.iter().map(Field::as_str));
    output.write_record(&header)?;

    for row in reports {
        let mut record = vec![row.row.to_string(), row.report.is_valid().to_string()];
        record.extend(row.report.results().map(|(_, result)| result.message().unwrap_or_default()));
        output.write_record(&record)?;
    }

    output.flush()?;

    Ok(())
}
