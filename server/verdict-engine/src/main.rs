//! Binary entrypoint: read one JSON CommitChange from stdin, write the
//! combined analysis JSON to stdout. Queue workers and batch importers call
//! this as a subprocess.

use std::io::{self, Read, Write};
use verdict_engine::{analyze, CommitChange};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "verdict-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let change: CommitChange = serde_json::from_str(&raw)?;

  let out = analyze(&change);
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
