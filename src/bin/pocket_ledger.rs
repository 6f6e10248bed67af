use std::{env, path::PathBuf, process};

use pocket_ledger::{
    cli::{run_cli, CliOptions},
    init, version_banner,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = CliOptions::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-f" | "--file" => {
                let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                });
                options.ledger_file = Some(path);
            }
            "-V" | "--version" => {
                println!("{}", version_banner());
                return Ok(());
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown argument: {arg}");
                print_usage();
                process::exit(1);
            }
        }
    }

    run_cli(options)?;
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: pocket_ledger [--file <ledger.csv>] [--version] [--help]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  POCKET_LEDGER_HOME        data directory (default ~/.pocket_ledger)");
    eprintln!("  POCKET_LEDGER_CLI_SCRIPT  read one answer per line from stdin");
    eprintln!("  RUST_LOG                  log filter (default pocket_ledger=warn)");
}
