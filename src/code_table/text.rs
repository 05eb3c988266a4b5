//! The textual code table format: two lines per leaf, the decimal symbol followed by its
//! path. A root leaf has an empty path line.
//!
//! ```text
//! 70
//! 0
//! 67
//! 10
//! 68
//! 11
//! ```
use super::{deserialize, serialize, CodeEntry, CodeTableError};
use crate::tree::{Node, Symbol};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Writes the code table of `root` in pre-order.
pub fn write_table<W: fmt::Write>(root: &Node, out: &mut W) -> fmt::Result {
    for entry in serialize(root) {
        writeln!(out, "{}", entry.symbol)?;
        writeln!(out, "{}", entry.path)?;
    }
    Ok(())
}

pub fn to_text(root: &Node) -> String {
    let mut text = String::new();
    // formatting into a String does not fail
    let _ = write_table(root, &mut text);
    text
}

/// Splits a textual code table into its entries.
///
/// Trailing whitespace on a line and blank lines at the end of the table are ignored. A table
/// with a single entry may leave out the path line, its path is empty. In a longer table
/// every symbol line needs its path line.
pub fn parse_code_table(text: &str) -> Result<Vec<CodeEntry>, CodeTableError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    let malformed = |idx: usize| CodeTableError::MalformedCodeTable {
        line: idx + 1,
        content: lines.get(idx).map_or_else(String::new, |line| line.to_string()),
    };

    let mut entries = Vec::with_capacity(lines.len() / 2 + 1);
    for (idx, pair) in lines.chunks(2).enumerate() {
        let symbol_idx = idx * 2;
        let symbol = parse_symbol(pair[0]).ok_or_else(|| malformed(symbol_idx))?;
        let path = match pair.get(1) {
            Some(path) => *path,
            None if lines.len() == 1 => "",
            None => return Err(malformed(symbol_idx + 1)),
        };
        if !path.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(malformed(symbol_idx + 1));
        }
        entries.push(CodeEntry::new(symbol, path));
    }
    Ok(entries)
}

fn parse_symbol(line: &str) -> Option<Symbol> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Parses a textual code table and rebuilds its tree.
pub fn from_text(text: &str) -> Result<Node, CodeTableError> {
    deserialize(&parse_code_table(text)?)
}

/// Writes the textual code table of `root` to `out`.
#[cfg(feature = "std")]
pub fn save<W: std::io::Write>(root: &Node, mut out: W) -> std::io::Result<()> {
    out.write_all(to_text(root).as_bytes())?;
    out.flush()
}

/// Reads a textual code table from `input` and rebuilds its tree.
#[cfg(feature = "std")]
pub fn load<R: std::io::Read>(mut input: R) -> Result<Node, CodeTableError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    from_text(&text)
}
