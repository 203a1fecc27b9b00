//! Hardcoded fallback structures and the default animation script. Served
//! when no API key is supplied, when the model call fails, or when nothing
//! usable could be extracted from the model's text.

use crate::extract::model::{AnimationSequence, Atom, MoleculeStructure};

pub const WATER_DESCRIPTION: &str =
    "Water (H₂O) molecule with oxygen at center and two hydrogen atoms.";

/// Atom list for a formula nothing could be extracted for. Recognized
/// formulas match case-insensitively; anything else becomes a single
/// placeholder atom labeled with the formula itself.
pub fn atoms_for_formula(formula: &str) -> Vec<Atom> {
    match formula.to_lowercase().as_str() {
        "h2o" => vec![
            Atom::new("O", [0.0, 0.0, 0.0]),
            Atom::new("H", [1.0, 0.0, 0.0]),
            Atom::new("H", [-1.0, 0.0, 0.0]),
        ],
        "co2" => vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("O", [1.2, 0.0, 0.0]),
            Atom::new("O", [-1.2, 0.0, 0.0]),
        ],
        "ch4" => vec![
            Atom::new("C", [0.0, 0.0, 0.0]),
            Atom::new("H", [1.0, 0.0, 0.0]),
            Atom::new("H", [-1.0, 0.0, 0.0]),
            Atom::new("H", [0.0, 1.0, 0.0]),
            Atom::new("H", [0.0, -1.0, 0.0]),
        ],
        _ => vec![Atom::new(formula, [0.0, 0.0, 0.0])],
    }
}

pub fn water_structure() -> MoleculeStructure {
    MoleculeStructure {
        atoms: atoms_for_formula("h2o"),
        description: WATER_DESCRIPTION.to_string(),
    }
}

pub fn default_animation() -> AnimationSequence {
    AnimationSequence::from_steps(vec![
        "Rotate the molecule 360 degrees around the Y-axis".to_string(),
        "Zoom in to show the oxygen atom".to_string(),
        "Zoom out to show the full molecule".to_string(),
        "Vibrate the hydrogen atoms slightly".to_string(),
        "Return to the original view".to_string(),
    ])
}
