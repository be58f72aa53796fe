//! Build script to embed the default solution list
//!
//! Turns `data/solutions.txt` into a const array so the binary runs from any
//! working directory.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const SOLUTIONS_PATH: &str = "data/solutions.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("solutions.rs");

    let content = fs::read_to_string(SOLUTIONS_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {SOLUTIONS_PATH}: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create solutions.rs: {e}"));

    writeln!(output, "/// Possible solutions ({} words)", words.len()).unwrap();
    writeln!(output, "pub const SOLUTIONS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();

    println!("cargo:rerun-if-changed={SOLUTIONS_PATH}");
}
