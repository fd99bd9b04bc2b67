use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use stepc::lexer::LexerError;
use stepc::report::{self, render_diagnostic};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the source file (reads stdin when omitted)
    file: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Only print the final report, not each diagnostic as it is raised
    #[arg(long, short)]
    quiet: bool,
}

fn read_source(file: &Option<String>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let text = match read_source(&cli.file) {
        Ok(text) => text,
        Err(err) => {
            let source = cli.file.as_deref().unwrap_or("<stdin>");
            eprintln!("{}", format!("Error: cannot read {source}: {err}").red());
            return ExitCode::from(3);
        }
    };

    let quiet = cli.quiet;
    let compile_result = stepc::compile_with_listener(&text, |diagnostic| {
        if !quiet {
            eprintln!("{}", render_diagnostic(diagnostic));
        }
    });

    let compilation = match compile_result {
        Ok(compilation) => compilation,
        Err(err) => {
            let msg = match err.downcast::<LexerError>() {
                Ok(lexer_err) => format!("Lexical Error: {lexer_err}"),
                Err(other) => format!("Error: {other:#}"),
            };
            eprintln!("{}", msg.red());
            return ExitCode::from(2);
        }
    };

    println!("{}", report::render(&compilation));

    if compilation.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
