//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = nightowl_cli::run() {
        eprintln!("nightowl: {err}");
        std::process::exit(1);
    }
}
