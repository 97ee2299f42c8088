//! `recwire-verify` — check a golden vector file against the codecs.
//!
//! Usage:
//!   recwire-verify <vectors.json> [--codec fixed|tagged|compact_len]
//!
//! Prints one diagnostic line per failed vector, then the summary line.
//! Exit codes: 0 all vectors pass, 1 one or more vectors failed, 2 the
//! vector file could not be loaded.

use recwire::conformance::{load_vectors_file, run, CodecKind};
use std::path::PathBuf;
use std::process;

fn usage() -> ! {
    eprintln!("usage: recwire-verify <vectors.json> [--codec fixed|tagged|compact_len]");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut path: Option<PathBuf> = None;
    let mut filter: Option<CodecKind> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--codec" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("fixed") => filter = Some(CodecKind::Fixed),
                    Some("tagged") => filter = Some(CodecKind::Tagged),
                    Some("compact_len") => filter = Some(CodecKind::CompactLen),
                    Some(other) => {
                        eprintln!("Unknown codec: {other}");
                        process::exit(2);
                    }
                    None => usage(),
                }
            }
            arg => path = Some(PathBuf::from(arg)),
        }
        i += 1;
    }

    let Some(path) = path else { usage() };

    let vectors = match load_vectors_file(&path) {
        Ok(vectors) => vectors,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let report = run(&vectors, filter);
    for (name, failure) in report.failures() {
        println!("FAIL {name}: {failure}");
    }
    println!("{}", report.summary());
    process::exit(if report.all_passed() { 0 } else { 1 });
}
