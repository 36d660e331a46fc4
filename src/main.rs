// skein - A small Lisp interpreter written in Rust
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::io::{self, Write};
use std::process;
use std::sync::Once;

use skein_core::config::parse_depth;
use skein_core::{Config, Interpreter};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command line.
struct Options {
    max_depth: Option<usize>,
    files: Vec<String>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --version flag
    if args.len() == 1 && (args[0] == "--version" || args[0] == "-v") {
        println!("Skein v{}", VERSION);
        return;
    }

    init_tracing();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: skein [--max-depth N] [FILE...]");
            process::exit(2);
        }
    };

    let mut config = Config::from_env();
    if let Some(depth) = options.max_depth {
        config = config.with_max_eval_depth(depth);
    }

    let interp = match Interpreter::with_config(config) {
        Ok(interp) => interp,
        Err(e) => {
            eprintln!("Failed to start interpreter: {}", e);
            process::exit(1);
        }
    };

    // If files provided, evaluate them; otherwise start REPL
    if options.files.is_empty() {
        run_repl(&interp);
    } else {
        run_files(&options.files, &interp);
    }
}

/// Install a tracing subscriber, but only when `RUST_LOG` asks for one.
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        max_depth: None,
        files: Vec::new(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--max-depth" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| "--max-depth requires a value".to_string())?;
                let depth = parse_depth(raw)
                    .ok_or_else(|| format!("invalid --max-depth '{}'", raw))?;
                options.max_depth = Some(depth);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown option '{}'", flag));
            }
            file => options.files.push(file.to_string()),
        }
    }
    Ok(options)
}

/// Evaluate a sequence of source files, stopping at the first failure
fn run_files(files: &[String], interp: &Interpreter) {
    if let Err((file_path, e)) = load_files(files, interp) {
        eprintln!("Error in '{}': {}", file_path, e);
        process::exit(1);
    }
}

/// Load each file in order, returning the first failing path and its error.
fn load_files<'a>(
    files: &'a [String],
    interp: &Interpreter,
) -> Result<(), (&'a str, skein_core::Error)> {
    for file_path in files {
        if let Err(e) = interp.load_file(file_path) {
            error!(file = %file_path, error = %e, "file failed to load");
            return Err((file_path.as_str(), e));
        }
    }
    Ok(())
}

/// Run the interactive REPL
fn run_repl(interp: &Interpreter) {
    println!("Skein v{}", VERSION);

    loop {
        print!("user> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }
                match interp.rep(input) {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        debug!(error = %e, "form failed");
                        eprintln!("Error: {}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("Read error: {}", e);
                break;
            }
        }
    }
}
