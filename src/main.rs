//! debt-settler CLI
//!
//! Work out who pays whom after a session from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle from comma-separated quantities
//! debt-settler settle --start "100, 150, 200" --end "90, 160, 200" --names "Alice, Bob, Charlie"
//!
//! # Settle a session file, output as JSON
//! debt-settler settle --input session.json --format json
//!
//! # Generate a random session for testing
//! debt-settler generate --participants 8
//! ```

use debt_settler::io::input::SessionInput;
use debt_settler::optimization::settlement::SettlementConfig;
use debt_settler::session::settle_session;
use debt_settler::simulation::session_generator::{generate_session, SessionConfig};
use log::debug;
use rust_decimal::Decimal;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"debt-settler — settle net balances into a short list of transfers

USAGE:
    debt-settler <COMMAND> [OPTIONS]

COMMANDS:
    settle      Compute the transfers that settle a session
    generate    Generate a random session (for testing)
    help        Show this message

OPTIONS (settle):
    --start <LIST>        Comma-separated starting quantities
    --end <LIST>          Comma-separated ending quantities
    --names <LIST>        Comma-separated display names (optional)
    --unit-value <N>      Value of one unit, e.g. a big blind in euros (optional)
    --input <FILE>        Read the fields above from a JSON session file
    --tolerance <N>       Accepted difference between totals (default: 0.000001)
    --format <FORMAT>     Output format: text (default) or json

OPTIONS (generate):
    --participants <N>    Number of participants (default: 6)
    --decimals <N>        Decimal places per quantity (default: 0)
    --output <FILE>       Write to file instead of stdout

EXAMPLES:
    debt-settler settle --start "100, 200" --end "150, 150"
    debt-settler settle --start "100, 150, 200" --end "90, 160, 200" --names "Alice, Bob, Charlie" --unit-value 0.5
    debt-settler settle --input session.json --format json
    debt-settler generate --participants 8 --output session.json"#
    );
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn option_value(args: &[String], i: usize, flag: &str, expected: &str) -> String {
    args.get(i)
        .cloned()
        .unwrap_or_else(|| fail(format!("{} requires {}", flag, expected)))
}

/// Session field flags set on the command line, which `--input` would replace.
fn field_flags_given(flags: &SessionInput) -> Vec<&'static str> {
    let mut given = Vec::new();
    if !flags.start.is_empty() {
        given.push("--start");
    }
    if !flags.end.is_empty() {
        given.push("--end");
    }
    if flags.names.is_some() {
        given.push("--names");
    }
    if flags.unit_value.is_some() {
        given.push("--unit-value");
    }
    given
}

fn load_session(path: &str) -> SessionInput {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)));

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{ "start": "100, 150, 200", "end": "90, 160, 200", "names": "Alice, Bob, Charlie", "unit_value": "0.5" }}"#
        );
        process::exit(1);
    })
}

fn cmd_settle(args: &[String]) {
    let mut input_path = None;
    let mut input = SessionInput::default();
    let mut config = SettlementConfig::default();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(option_value(args, i, "--input", "a file path"));
            }
            "--start" => {
                i += 1;
                input.start = option_value(args, i, "--start", "a comma-separated list");
            }
            "--end" => {
                i += 1;
                input.end = option_value(args, i, "--end", "a comma-separated list");
            }
            "--names" => {
                i += 1;
                input.names = Some(option_value(args, i, "--names", "a comma-separated list"));
            }
            "--unit-value" => {
                i += 1;
                input.unit_value = Some(option_value(args, i, "--unit-value", "a number"));
            }
            "--tolerance" => {
                i += 1;
                let raw = option_value(args, i, "--tolerance", "a number");
                config.tolerance = raw
                    .parse::<Decimal>()
                    .ok()
                    .filter(|t| *t >= Decimal::ZERO)
                    .unwrap_or_else(|| fail(format!("invalid tolerance '{}'", raw)));
            }
            "--format" => {
                i += 1;
                format = option_value(args, i, "--format", "'text' or 'json'");
            }
            _ => fail(format!("unknown option: {}", args[i])),
        }
        i += 1;
    }

    if let Some(path) = input_path {
        let flags = field_flags_given(&input);
        if !flags.is_empty() {
            fail(format!("--input cannot be combined with {}", flags.join(", ")));
        }
        input = load_session(&path);
    }

    let session = input.validate().unwrap_or_else(|e| fail(e));
    debug!("validated session with {} participants", session.start.len());
    let report = settle_session(&session, &config).unwrap_or_else(|e| fail(e));

    if format == "json" {
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| fail(format!("cannot serialize report: {}", e)));
        println!("{}", json);
    } else {
        print!("{}", report);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = SessionConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                config.participants = option_value(args, i, "--participants", "a number")
                    .parse()
                    .unwrap_or_else(|_| fail("--participants requires a number"));
            }
            "--decimals" => {
                i += 1;
                config.decimal_places = option_value(args, i, "--decimals", "a number")
                    .parse()
                    .unwrap_or_else(|_| fail("--decimals requires a number"));
            }
            "--output" => {
                i += 1;
                output_path = Some(option_value(args, i, "--output", "a file path"));
            }
            _ => fail(format!("unknown option: {}", args[i])),
        }
        i += 1;
    }

    let (start, end) = generate_session(&config);
    let join = |values: &[Decimal]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let session = SessionInput {
        start: join(&start),
        end: join(&end),
        names: None,
        unit_value: None,
    };

    let json = serde_json::to_string_pretty(&session)
        .unwrap_or_else(|e| fail(format!("cannot serialize session: {}", e)));

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| fail(format!("cannot write '{}': {}", path, e)));
        eprintln!(
            "Generated a session with {} participants → {}",
            config.participants, path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
