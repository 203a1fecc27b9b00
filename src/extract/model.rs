use serde::{Deserialize, Serialize};

/// Number of steps every animation sequence is normalized to.
pub const ANIMATION_STEPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeStructure {
    pub atoms: Vec<Atom>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Self { element: element.into(), position }
    }
}

/// Exactly [`ANIMATION_STEPS`] non-empty step descriptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSequence(Vec<String>);

impl AnimationSequence {
    /// Normalizes an arbitrary step list: truncates past 5 entries, replaces
    /// blank entries, and pads with `"Animation step N"` up to 5.
    pub fn from_steps(steps: Vec<String>) -> Self {
        let mut out = Vec::with_capacity(ANIMATION_STEPS);
        for step in steps.into_iter().take(ANIMATION_STEPS) {
            if step.trim().is_empty() {
                out.push(placeholder_step(out.len()));
            } else {
                out.push(step);
            }
        }
        while out.len() < ANIMATION_STEPS {
            out.push(placeholder_step(out.len()));
        }
        Self(out)
    }

    pub fn steps(&self) -> &[String] {
        &self.0
    }
}

fn placeholder_step(current_len: usize) -> String {
    format!("Animation step {}", current_len + 1)
}
