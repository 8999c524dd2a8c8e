use std::{collections::HashMap, fs, process};

use clap::Parser;
use expreval::interpreter::{evaluator::core::Context, parser::core::parse};

/// expreval evaluates a single numeric expression with variables, constants,
/// and builtin math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells expreval to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable before evaluation, e.g. `--bind x=3.5`. May be
    /// repeated.
    #[arg(short, long, value_name = "NAME=VALUE")]
    bind: Vec<String>,

    /// Prints how long evaluation took to stderr.
    #[arg(short, long)]
    timing: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let bindings = parse_bindings(&args.bind).unwrap_or_else(|message| {
                                                 eprintln!("{message}");
                                                 process::exit(1);
                                             });

    let expr = match parse(&source) {
        Ok(expr) => expr,
        Err(error) => {
            report_failure(&source, &error.to_string(), error.position(), error.suggestion());
            process::exit(1);
        },
    };

    let context = Context::new();
    let result = context.evaluate(&expr, Some(&bindings));

    if args.timing {
        eprintln!("evaluated in {:?}", result.execution_time());
    }

    match result.into_result() {
        Ok(value) => println!("{value}"),
        Err(error) => {
            report_failure(&source, &error.to_string(), error.position(), None);
            process::exit(1);
        },
    }
}

/// Parses `NAME=VALUE` pairs from the command line into a bindings map.
fn parse_bindings(pairs: &[String]) -> Result<HashMap<String, f64>, String> {
    let mut bindings = HashMap::with_capacity(pairs.len());

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            return Err(format!("Invalid binding '{pair}'. Expected the form NAME=VALUE."));
        };

        let value: f64 = value.parse()
                              .map_err(|_| {
                                  format!("Invalid value in binding '{pair}'. Expected a number.")
                              })?;

        bindings.insert(name.trim().to_string(), value);
    }

    Ok(bindings)
}

/// Prints the failing source line with a caret under the error position,
/// followed by the message and an optional remediation hint.
fn report_failure(source: &str, message: &str, position: usize, suggestion: Option<&str>) {
    let (line, column) = line_and_column(source, position);

    eprintln!("  {line}");
    eprintln!("  {}^", " ".repeat(column));
    eprintln!("{message}");

    if let Some(suggestion) = suggestion {
        eprintln!("help: {suggestion}");
    }
}

/// Finds the source line containing a byte offset and the character column of
/// the offset within that line.
fn line_and_column(source: &str, position: usize) -> (&str, usize) {
    let position = position.min(source.len());
    let start = source[..position].rfind('\n').map_or(0, |i| i + 1);
    let end = source[start..].find('\n').map_or(source.len(), |i| start + i);
    let column = source[start..position].chars().count();

    (&source[start..end], column)
}
