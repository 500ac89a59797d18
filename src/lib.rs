//! Constraint-respecting sample data synthesis for declared schemas.
//!
//! Pipeline: raw declarations (`decl`) → validated registry (`schema`) →
//! recursive synthesis (`synth`, with per-field constraint extraction from
//! `constraints`) → a plain `serde_json::Value` tree, pretty-printed by the
//! caller or the CLI.

pub mod cli;
pub mod constraints;
pub mod decl;
pub mod schema;
pub mod synth;

pub use constraints::Constraints;
pub use schema::{Schema, SchemaError, SchemaSet, TypeShape};
pub use synth::{synthesize, SynthError, Synthesizer};
