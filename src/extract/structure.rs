//! Structure extraction: strict JSON decode of an embedded block first, then
//! a line-oriented parser over phrases like `O at (0, 0, 0)`, then the
//! formula-keyed default table. Total: every input yields a structure with at
//! least one atom.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extract::defaults;
use crate::extract::model::{Atom, MoleculeStructure};
use crate::extract::scan;

static COORDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("coords regex"));

pub fn extract_structure(text: &str, formula: &str) -> MoleculeStructure {
    if let Some(block) = scan::embedded_block(text, '{', '}') {
        match serde_json::from_str::<MoleculeStructure>(block) {
            Ok(mut decoded) if !decoded.atoms.is_empty() => {
                if decoded.description.trim().is_empty() {
                    decoded.description = placeholder_description(formula);
                }
                return decoded;
            }
            Ok(_) => debug!(formula, "decoded structure block has no atoms, using fallback"),
            Err(err) => debug!(formula, error = %err, "structure block is not valid JSON, using line parser"),
        }
    }
    parse_structure_lines(text, formula)
}

fn parse_structure_lines(text: &str, formula: &str) -> MoleculeStructure {
    let mut atoms: Vec<Atom> = text.lines().filter_map(parse_atom_line).collect();
    if atoms.is_empty() {
        atoms = defaults::atoms_for_formula(formula);
    }
    MoleculeStructure {
        atoms,
        description: placeholder_description(formula),
    }
}

/// Parses one `<element> at (<x>,<y>,<z>)` line. The `" at "` token must
/// occur exactly once; a line with several atoms packed onto it is discarded
/// whole, as is any line with a malformed piece. A bad line never produces a
/// partial atom.
fn parse_atom_line(line: &str) -> Option<Atom> {
    let splits = find_at_tokens(line);
    if splits.len() != 1 {
        return None;
    }
    let at = splits[0];
    let (left, right) = (&line[..at], &line[at + 4..]);

    let element = left.split_whitespace().next()?.to_string();

    let group = COORDS_RE.captures(right)?.get(1)?.as_str();
    let cleaned = group.replace(' ', "");
    let pieces: Vec<&str> = cleaned.split(',').collect();
    if pieces.len() != 3 {
        return None;
    }
    let mut position = [0.0f64; 3];
    for (slot, piece) in position.iter_mut().zip(&pieces) {
        *slot = piece.parse().ok()?;
    }
    Some(Atom { element, position })
}

/// Byte offsets of non-overlapping case-insensitive `" at "` matches. ASCII
/// comparison keeps the offsets valid in the original line.
fn find_at_tokens(line: &str) -> Vec<usize> {
    let bytes = line.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 4 <= bytes.len() {
        if bytes[i..i + 4].eq_ignore_ascii_case(b" at ") {
            found.push(i);
            i += 4;
        } else {
            i += 1;
        }
    }
    found
}

fn placeholder_description(formula: &str) -> String {
    format!("Molecular structure of {formula}")
}
