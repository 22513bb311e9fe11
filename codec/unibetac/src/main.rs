//! Beta Code converter CLI.

use unibeta::Direction;
use unibetac::commands::{list_codepoints, run_convert};
use unibetac::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    if let Some(direction) = Direction::from_name(command) {
        if args.len() < 3 {
            eprintln!("Usage: unibeta {command} [options] (TEXT... | -f FILE...)");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  --tonos          Acute vowels as monotonic tonos letters (U+03AC)");
            eprintln!("  --oxia           Acute vowels as polytonic oxia letters (default)");
            eprintln!("  --capacity=<n>   Convert through an n-byte buffer, fail if it fills");
            eprintln!("  -f, --file <path>  Convert a file (repeatable)");
            std::process::exit(1);
        }
        if let Err(err) = run_convert(direction, &args[2..]) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        return;
    }

    match command.as_str() {
        "codepoints" => {
            if let Err(err) = list_codepoints(&args[2..]) {
                eprintln!("error: {err}");
                eprintln!("Usage: unibeta codepoints <text>");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("unibeta {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("error: {}", CliError::UnknownCommand(command.clone()));
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Greek Beta Code <-> UTF-8 converter");
    println!();
    println!("Usage: unibeta <command> [options]");
    println!();
    println!("Commands:");
    println!("  beta2greek <text>    Convert Beta Code to Greek");
    println!("  greek2beta <text>    Convert Greek to Beta Code");
    println!("  codepoints <text>    List the scalars of a string with their UTF-8 bytes");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Conversion options:");
    println!("  --tonos              Acute vowels as monotonic tonos letters");
    println!("  --oxia               Acute vowels as polytonic oxia letters (default)");
    println!("  --capacity=<n>       Convert through an n-byte buffer, fail if it fills");
    println!("  -f, --file <path>    Convert a file instead of TEXT (repeatable)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging (e.g. RUST_LOG=unibeta=debug)");
    println!("  UNIBETA_LOG_TREE     Indented span output when logging");
    println!();
    println!("Examples:");
    println!("  unibeta beta2greek 'lo/gos'         # λόγος");
    println!("  unibeta greek2beta λόγος            # lo/gos");
    println!("  unibeta beta2greek -f iliad.txt -f odyssey.txt");
    println!("  unibeta codepoints ἄνθρωπος");
}
