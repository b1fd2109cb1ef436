//! Build script to generate embedded word pools
//!
//! Reads the per-difficulty word pool files and generates Rust source code
//! with const arrays of `(word, clue)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_pool(
        "data/easy.txt",
        &Path::new(&out_dir).join("easy.rs"),
        "EASY",
        "Easy pool: three-letter industry acronyms (1 point)",
    );

    generate_word_pool(
        "data/medium.txt",
        &Path::new(&out_dir).join("medium.rs"),
        "MEDIUM",
        "Medium pool: five-to-seven-letter terms (2 points)",
    );

    generate_word_pool(
        "data/hard.txt",
        &Path::new(&out_dir).join("hard.rs"),
        "HARD",
        "Hard pool: long compound terms (3 points)",
    );

    // Rebuild if word pools change
    println!("cargo:rerun-if-changed=data/easy.txt");
    println!("cargo:rerun-if-changed=data/medium.txt");
    println!("cargo:rerun-if-changed=data/hard.txt");
}

fn generate_word_pool(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Each line is "WORD" or "WORD: clue text"
        match line.split_once(':') {
            Some((word, clue)) => {
                entries.push((word.trim().to_string(), Some(clue.trim().to_string())));
            }
            None => entries.push((line.to_string(), None)),
        }
    }
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(&str, Option<&str>)] = &["
    )
    .unwrap();

    for (word, clue) in entries {
        match clue {
            Some(clue) => writeln!(output, "    ({word:?}, Some({clue:?})),").unwrap(),
            None => writeln!(output, "    ({word:?}, None),").unwrap(),
        }
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
