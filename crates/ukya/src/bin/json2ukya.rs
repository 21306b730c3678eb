//! `json2ukya` — convert a JSON document to UKYA configuration text.
//!
//! Usage:
//!   json2ukya <input.json>
//!
//! Pass `-` to read the document from stdin. The UKYA text is written to
//! stdout; errors go to stderr with a non-zero exit code.

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("Usage: json2ukya <input.json>");
            std::process::exit(1);
        }
    };

    match ukya::cli::run(&path) {
        Ok(output) => {
            let mut stdout = io::stdout();
            if stdout.write_all(output.as_bytes()).is_err() || stdout.write_all(b"\n").is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
