//! Mathematica lexer CLI.

use mmac::commands::{run_lex, run_stats};
use mmac::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let rest = &args[2..];

    let result: Result<(), CliError> = match command.as_str() {
        "lex" => {
            if rest.is_empty() {
                eprintln!("Usage: mma lex <path>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --format=<fmt>      Output: plain, scopes, json (default: plain)");
                print_lexer_options();
                std::process::exit(1);
            }
            run_lex(rest)
        }
        "stats" => {
            if rest.is_empty() {
                eprintln!("Usage: mma stats <path>... [options]");
                eprintln!();
                eprintln!("Options:");
                print_lexer_options();
                std::process::exit(1);
            }
            run_stats(rest)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("mma {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_lexer_options() {
    eprintln!("  --raw               Pattern tokens only, no annotation passes");
    eprintln!("  --no-scope          Skip Block/Module/With scope tracking");
    eprintln!("  --resolve=<mode>    Scope lookup: innermost, enclosing (default: innermost)");
}

fn print_usage() {
    println!("Mathematica lexer");
    println!();
    println!("Usage: mma <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <path>...        Tokenize files and print the tokens");
    println!("  stats <path>...      Count tokens per kind");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Directories are searched for .m, .wl, .nb, .ma and .cdf files.");
    println!();
    println!("Lexer options:");
    println!("  --raw               Pattern tokens only, no annotation passes");
    println!("  --no-scope          Skip Block/Module/With scope tracking");
    println!("  --resolve=<mode>    Scope lookup: innermost, enclosing (default: innermost)");
    println!("  --format=<fmt>      lex output: plain, scopes, json (default: plain)");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=mma_lexer=trace) to see lexer tracing.");
}
