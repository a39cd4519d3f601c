use std::path::PathBuf;

use clap::Parser;

use crate::generator::GenOptions;
use crate::opcodes::HexStyle;

/// Prints the CB-prefixed instruction table rows for the emulator's decoder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Pad opcode comments to two hex digits (0x06 instead of 0x6).
    #[arg(long)]
    pub zero_pad: bool,

    /// Wrap the rows in a `const <NAME>: [Instruction; 256]` item.
    #[arg(long, value_name = "NAME", value_parser = parse_table_name)]
    pub table_name: Option<String>,

    // Optional output path, stdout when none is given.
    #[arg(long)]
    pub output: Option<PathBuf>,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Accepts only names that can stand as the identifier of a `const` item.
fn parse_table_name(name: &str) -> Result<String, String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    };

    if !valid || name == "_" {
        return Err(format!("'{}' is not a valid Rust identifier", name));
    }
    if RUST_KEYWORDS.contains(&name) {
        return Err(format!("'{}' is a Rust keyword", name));
    }
    Ok(name.to_string())
}

impl Args {
    pub fn gen_options(&self) -> GenOptions {
        GenOptions {
            hex_style: if self.zero_pad {
                HexStyle::ZeroPadded
            } else {
                HexStyle::Bare
            },
            table_name: self.table_name.clone(),
        }
    }
}
