use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

mod cmd;
mod path_or_stdio;

use ast_error_detection::ErrorAnnotator;
use ast_error_detection::env::EnvConfig;
use colored::Colorize;

use crate::cmd::{OutputFormat, RenderOptions, emit, process};
use crate::path_or_stdio::PathOrStdio;

#[derive(Parser, Debug)]
#[command(version, about = "Label the errors in an AST edit script")]
struct Args {
    /// Edit script JSON file or "-" for stdin
    input: String,
    /// Output file or "-" for stdout
    output: Option<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Print the edit script as a tree of structural paths first
    #[arg(short, long)]
    tree: bool,
    /// Don't print the result to stdout; an output file is still written
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(
            tracing_subscriber::fmt::format::FmtSpan::ENTER
                | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
        )
        .init();

    let args = Args::parse();
    let env_config = EnvConfig::load();

    let input = PathOrStdio::from(args.input);
    let output = PathOrStdio::from(args.output.unwrap_or_else(|| "-".to_string()));
    let annotator = ErrorAnnotator::new(env_config.annotator_config());
    let options = RenderOptions {
        format: args.format,
        tree: args.tree,
    };

    let result = input
        .read_edit_script()
        .and_then(|edits| process(&edits, input.filepath(), &annotator, options))
        .and_then(|(report, rendered)| {
            let mut writer = output.writer()?;
            emit(&mut writer, &rendered, args.quiet && output == PathOrStdio::Stdio)?;
            Ok(report)
        });

    match result {
        Err(err) => {
            if env_config.is_debug_mode() {
                eprintln!("{:?}", err);
            } else {
                eprintln!("{}", format!("Error! {}", err).red());
            }
            Err(Box::new(err))
        }
        Ok(report) => {
            if report.has_errors() {
                exit(1)
            }
            Ok(())
        }
    }
}
