//! Inspect a GPB file: validate the header and print the reference table.
//!
//! Run: `gpb-info <file.gpb>`

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use gpb_format::{read_ref_table, validate_header};

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();

    let mut args = env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: gpb-info <file.gpb>");
        return ExitCode::from(2);
    };

    if let Err(e) = run(&path) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(path: &str) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let mut reader = BufReader::new(file);

    if !validate_header(&mut reader).context("failed to read header")? {
        bail!("{path} is not a GPB file (magic mismatch)");
    }

    let refs = read_ref_table(&mut reader).context("failed to read reference table")?;
    println!("{path}: {} reference(s)", refs.len());
    for r in &refs {
        println!("  {:<32} type {:>4}  offset {:>10}", r.xref, r.type_id, r.offset);
    }
    Ok(())
}
