//! fnlang - CLI
//!
//! `fnlang [--config <path>] [FILE...]` classifies every form in the given
//! files, or starts a REPL when no files are given.

use std::env;
use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use fnlang::expr::{free_variables, Classifier, Expression};
use fnlang::{Config, Reader};

/// Print welcome banner
fn print_banner() {
    println!(
        r#"
 fnlang - classify (fn [x] body) and (f a) forms
 Type '.help' for help, '.quit' to exit
"#
    );
}

/// Print help message
fn print_help() {
    println!(
        r#"
Commands:
  .help              Show this help message
  .quit              Exit fnlang
  .raw <form>        Show the untyped form as read
  .json <form>       Show the classified tree as JSON
  .free <form>       List the free variables of a form
  .clear             Clear screen

Forms:
  x                  Variable reference
  (fn [x] body)      Function literal with one parameter
  (f a)              Application

Examples:
  (fn [x] x)
  ((fn [x] x) a)
"#
    );
}

fn describe(expr: &Expression) -> String {
    format!("{}: {}", expr.kind(), expr)
}

/// One line of output: classified forms go to stdout, errors to stderr
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Out(String),
    Err(String),
}

fn labelled(label: Option<&str>, message: impl Display) -> String {
    match label {
        Some(label) => format!("{}: {}", label, message),
        None => message.to_string(),
    }
}

/// Read and classify every form in `text`. Rejected forms become error
/// lines prefixed with `label`; a read error aborts the whole text.
fn classify_source(text: &str, config: &Config, label: Option<&str>) -> fnlang::Result<Vec<Line>> {
    let forms = Reader::new(text)?.max_depth(config.max_depth).read_all()?;
    let classifier = Classifier::with_config(config);

    Ok(forms
        .iter()
        .map(|form| match classifier.classify(form) {
            Ok(expr) => Line::Out(describe(&expr)),
            Err(e) => Line::Err(labelled(label, e)),
        })
        .collect())
}

/// Classify every form of one file, labelling errors with its path
fn classify_file(file: &str, config: &Config) -> anyhow::Result<Vec<Line>> {
    let text = fs::read_to_string(file).with_context(|| format!("failed to read {}", file))?;
    debug!(file = %file, bytes = text.len(), "classifying file");

    Ok(classify_source(&text, config, Some(file))
        .unwrap_or_else(|e| vec![Line::Err(labelled(Some(file), e))]))
}

/// Print output lines. Returns false if any of them is an error.
fn print_lines(lines: &[Line]) -> bool {
    let mut all_ok = true;

    for line in lines {
        match line {
            Line::Out(text) => println!("{}", text),
            Line::Err(text) => {
                eprintln!("{}", text);
                all_ok = false;
            }
        }
    }

    all_ok
}

/// Handle special dot commands. Returns false when the REPL should stop.
fn handle_special_command(cmd: &str, config: &Config) -> anyhow::Result<bool> {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((cmd, ""));

    match name {
        ".help" => print_help(),
        ".quit" | ".exit" => return Ok(false),
        ".raw" => match Reader::new(rest).and_then(|r| r.max_depth(config.max_depth).read_one()) {
            Ok(raw) => println!("{:?}", raw),
            Err(e) => eprintln!("{}", e),
        },
        ".json" => match fnlang::parse_with(rest, config) {
            Ok(expr) => println!("{}", serde_json::to_string_pretty(&expr)?),
            Err(e) => eprintln!("{}", e),
        },
        ".free" => match fnlang::parse_with(rest, config) {
            Ok(expr) => {
                let free = free_variables(&expr);
                if free.is_empty() {
                    println!("closed");
                } else {
                    let names: Vec<String> = free.iter().map(|s| s.to_string()).collect();
                    println!("{}", names.join(" "));
                }
            }
            Err(e) => eprintln!("{}", e),
        },
        ".clear" => {
            // Clear screen (ANSI escape code)
            print!("\x1B[2J\x1B[1;1H");
            io::stdout().flush()?;
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Type '.help' for available commands.");
        }
    }

    Ok(true)
}

/// Main REPL loop
fn run_repl(config: &Config) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    if let Some(path) = &config.history_file {
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    print_banner();

    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() {
            &config.prompt
        } else {
            &config.continuation_prompt
        };

        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        };

        let trimmed = line.trim();

        if buffer.is_empty() {
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('.') {
                if let Err(e) = editor.add_history_entry(trimmed) {
                    debug!(error = %e, "history entry not added");
                }
                if !handle_special_command(trimmed, config)? {
                    break;
                }
                continue;
            }
        }

        buffer.push_str(&line);
        buffer.push('\n');

        match classify_source(&buffer, config, None) {
            // keep reading until the open form is closed
            Err(e) if e.is_incomplete() => continue,
            Err(e) => eprintln!("{}", e),
            Ok(lines) => {
                print_lines(&lines);
            }
        }

        if let Err(e) = editor.add_history_entry(buffer.trim_end()) {
            debug!(error = %e, "history entry not added");
        }
        buffer.clear();
    }

    if let Some(path) = &config.history_file {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Classify every form of every file. Returns false if anything failed.
fn run_files(files: &[String], config: &Config) -> anyhow::Result<bool> {
    let mut all_ok = true;

    for file in files {
        all_ok &= print_lines(&classify_file(file, config)?);
    }

    Ok(all_ok)
}

fn run() -> anyhow::Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = Config::new();
    let mut files = Vec::new();

    // Simple argument parsing
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            let Some(path) = args.get(i + 1) else {
                bail!("{} needs a path", args[i]);
            };
            config = Config::load_from_file(path)
                .with_context(|| format!("failed to load config {}", path))?;
            i += 2;
        } else {
            files.push(args[i].clone());
            i += 1;
        }
    }

    if files.is_empty() {
        run_repl(&config)?;
        Ok(true)
    } else {
        run_files(&files, &config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
