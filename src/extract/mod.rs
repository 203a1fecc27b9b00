//! Tolerant extraction of molecule structures and animation scripts from
//! free-form model output. Both extractors are total: any input, including
//! empty or garbage text, yields a schema-valid result.

pub mod animation;
pub mod defaults;
pub mod model;
pub mod scan;
pub mod structure;

pub use animation::extract_animation;
pub use model::{AnimationSequence, Atom, MoleculeStructure};
pub use structure::extract_structure;
