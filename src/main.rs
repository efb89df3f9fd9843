use clap::{CommandFactory, Parser};
use csv2sql::config::parse_batch_size;
use csv2sql::output::{ErrorResponse, SuccessResponse};
use csv2sql::{Config, Converter, Csv2SqlError, ShellResponse};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// csv2sql - Convert a CSV file into CREATE TABLE and INSERT statements
#[derive(Parser, Debug)]
#[command(name = "csv2sql")]
#[command(about = "Convert a CSV, semicolon or tab separated file into SQL statements")]
#[command(
    version,
    after_help = "The separator is detected from the first line and column types are inferred from the data.\nOn failure nothing is written and the message is printed to stderr."
)]
struct Args {
    /// Path to the input file
    input_path: Option<PathBuf>,

    /// Table name (default: input file name without extension)
    table_name: Option<String>,

    /// Output SQL file (default: output/output.sql)
    output_path: Option<PathBuf>,

    /// Rows per INSERT statement; non-numeric or non-positive disables batching
    #[arg(long = "batch", value_name = "N", value_parser = batch_value)]
    batch: Option<usize>,

    /// Prepend an auto-increment `id` primary key column
    #[arg(long = "with-id")]
    with_id: bool,

    /// Print a JSON response instead of a summary line
    #[arg(long = "json")]
    json: bool,
}

fn batch_value(value: &str) -> Result<usize, String> {
    Ok(parse_batch_size(value))
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    init_logging();

    let Some(input_path) = args.input_path else {
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::FAILURE;
    };

    let result = Config::new(input_path, args.table_name, args.output_path)
        .map(|config| {
            config
                .with_batch_size(args.batch.unwrap_or(0))
                .with_surrogate_id(args.with_id)
        })
        .and_then(|config| Converter::new(config).run());

    match result {
        Ok(report) if args.json => {
            let response = ShellResponse::Success(SuccessResponse::from_report(&report));
            println!("{}", response.to_json());
            ExitCode::SUCCESS
        }
        Ok(report) => {
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, args.json);
            ExitCode::FAILURE
        }
    }
}

fn report_error(error: &Csv2SqlError, json: bool) {
    if json {
        let response = ShellResponse::Error(ErrorResponse::from(error));
        eprintln!("{}", response.to_json());
    } else {
        eprintln!("Error: {}", error);
    }
}
