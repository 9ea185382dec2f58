mod debug_report;

use numerals::{Vocabulary, parse_to_float_with, parse_to_int_with, parse_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NUMERALS_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(config.verbose);

    let vocabulary = Vocabulary::english();
    for word in &config.exclude {
        if let Err(err) = vocabulary.set_ambiguous_word_enabled(word, false) {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }

    match config.mode {
        Mode::Text => {
            let report = parse_verbose_with(&config.input, &vocabulary);
            if config.trace {
                debug_report::print_report(&report, config.color);
            } else {
                println!("{}", report.output);
            }
        }
        Mode::Float => match parse_to_float_with(&config.input, &vocabulary) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        Mode::Int => match parse_to_int_with(&config.input, &vocabulary) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Float,
    Int,
}

struct CliConfig {
    input: String,
    mode: Mode,
    trace: bool,
    exclude: Vec<String>,
    color: bool,
    verbose: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut mode = Mode::Text;
    let mut trace = false;
    let mut exclude = Vec::new();
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numerals {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "-v" | "--verbose" => verbose = true,
            "--float" => mode = set_mode(mode, Mode::Float)?,
            "--int" => mode = set_mode(mode, Mode::Int)?,
            "--exclude" => {
                let value = args.next().ok_or_else(|| "error: --exclude expects a word".to_string())?;
                exclude.push(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--exclude=") => {
                exclude.push(arg.trim_start_matches("--exclude=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if trace && mode != Mode::Text {
        return Err("error: --trace cannot be combined with --float or --int".to_string());
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, mode, trace, exclude, color, verbose })
}

fn set_mode(current: Mode, requested: Mode) -> Result<Mode, String> {
    if current != Mode::Text && current != requested {
        return Err("error: --float and --int are mutually exclusive".to_string());
    }
    Ok(requested)
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let ambiguous = Vocabulary::ambiguous_words().collect::<Vec<_>>().join(", ");
    format!(
        "numerals {version}

Replace spelled-out numbers in text with their values.

Usage:
  numerals [OPTIONS] [--] <input...>
  numerals [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --float                    Read the whole input as one number, print a float.
  --int                      Read the whole input as one number, print an integer.
  --trace                    Show how every numeric run was reduced.
  --exclude <word>           Treat an ambiguous word as plain text ({ambiguous}).
                             May be repeated.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Log debug events to stderr ({log_env} overrides).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  The input is not exactly one number (--float/--int).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
