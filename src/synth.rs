//! Value synthesis: the recursive schema walk.
//!
//! One call produces one plain JSON tree for a named schema. Dispatch over
//! `TypeShape` is ordered, and the order is the contract: overlapping
//! classifications (bool vs. integer, optional vs. everything else) resolve
//! to the most specific rule, listed first. See `synth_shape`.
//!
//! Design goals:
//! - Pure depth-first walk; no I/O, no shared state, `&mut self` only for
//!   the owned RNG.
//! - Broken schema contracts (unresolved reference, empty numeric range)
//!   propagate; unsupported shapes degrade to `null` locally.
//! - Injected, seedable randomness so fixtures reproduce.

pub mod fake;
pub mod num;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

use crate::constraints::{self, Constraints};
use crate::schema::{Schema, SchemaSet, TypeShape};

// ------------------------------- Policy ----------------------------------- //

/// Elements synthesized per sequence shape.
const LIST_LEN: usize = 3;
/// Entries synthesized per mapping shape (key collisions may collapse them).
const MAP_LEN: usize = 2;
/// Words per fallback sentence.
const SENTENCE_WORDS: usize = 4;
/// Text length bounds when a field declares none.
const TEXT_MIN_DEFAULT: u64 = 5;
const TEXT_MAX_DEFAULT: u64 = 15;
/// Integer range for fully dynamic values.
const ANY_INT_LO: i64 = 1;
const ANY_INT_HI: i64 = 1000;
/// Float range for fully dynamic values.
const ANY_FLOAT_LO: f64 = -999.99;
const ANY_FLOAT_HI: f64 = 999.99;

// ------------------------------- Errors ----------------------------------- //

/// Broken schema contracts. Unsupported shapes never land here; they degrade
/// to `null` inside the walk instead.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("no schema named `{0}` in the set")]
    UnresolvedSchema(String),

    #[error("empty integer range: derived lower bound {lo} exceeds upper bound {hi}")]
    EmptyIntRange { lo: i64, hi: i64 },

    #[error("empty float range: derived lower bound {lo} exceeds upper bound {hi}")]
    EmptyFloatRange { lo: f64, hi: f64 },

    #[error("field `{field}`: {source}")]
    InField {
        field: String,
        source: Box<SynthError>,
    },
}

// ----------------------------- Synthesizer -------------------------------- //

/// Produces one sample value per call from a resolved `SchemaSet`.
///
/// The RNG is owned and injected at construction: equal seeds over equal
/// schemas give equal output.
pub struct Synthesizer<'a> {
    set: &'a SchemaSet,
    rng: StdRng,
}

impl<'a> Synthesizer<'a> {
    pub fn new(set: &'a SchemaSet, seed: u64) -> Self {
        Self {
            set,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// OS-seeded variant for callers that do not need reproducibility.
    pub fn from_entropy(set: &'a SchemaSet) -> Self {
        Self {
            set,
            rng: StdRng::from_entropy(),
        }
    }

    /// Synthesize one value for the named schema.
    pub fn synthesize(&mut self, name: &str) -> Result<Value, SynthError> {
        let schema = self
            .set
            .get(name)
            .ok_or_else(|| SynthError::UnresolvedSchema(name.to_string()))?;
        self.synth_schema(schema, &Constraints::default())
    }

    /// Synthesize and pretty-print in one step.
    pub fn synthesize_pretty(&mut self, name: &str) -> Result<String, SynthError> {
        let value = self.synthesize(name)?;
        // string-keyed JSON tree; serialization cannot fail
        Ok(serde_json::to_string_pretty(&value).unwrap())
    }

    fn synth_schema(
        &mut self,
        schema: &Schema,
        inflight: &Constraints,
    ) -> Result<Value, SynthError> {
        match schema {
            // root alias: unwrap and recurse carrying the in-flight
            // constraints; the alias's own annotations apply only when none
            // are in flight
            Schema::Root(root) => {
                let own;
                let cons = if inflight.is_empty() {
                    own = constraints::extract(&root.annotations);
                    &own
                } else {
                    inflight
                };
                self.synth_shape(&root.shape, cons)
            }
            // record: every declared field, in declared order; zero fields
            // yield an empty object
            Schema::Record(rec) => {
                let mut out = Map::new();
                for field in &rec.fields {
                    let cons = constraints::extract(&field.annotations);
                    let value =
                        self.synth_shape(&field.shape, &cons)
                            .map_err(|e| SynthError::InField {
                                field: field.name.clone(),
                                source: Box::new(e),
                            })?;
                    out.insert(field.name.clone(), value);
                }
                Ok(Value::Object(out))
            }
        }
    }

    /// Shape dispatch, first matching rule wins. The numbering below is the
    /// priority contract.
    fn synth_shape(
        &mut self,
        shape: &TypeShape,
        cons: &Constraints,
    ) -> Result<Value, SynthError> {
        match shape {
            // 1) optional: absent and present are both first-class outcomes
            TypeShape::Optional(inner) => {
                if self.rng.gen_bool(0.5) {
                    Ok(Value::Null)
                } else {
                    self.synth_shape(inner, cons)
                }
            }

            // 2-3) schema reference: a root alias unwraps to a single value,
            //      a record recurses field by field
            TypeShape::Named(name) => {
                let schema = self
                    .set
                    .get(name)
                    .ok_or_else(|| SynthError::UnresolvedSchema(name.clone()))?;
                self.synth_schema(schema, cons)
            }

            // 4) enumeration: uniform member, stored value — never the
            //    symbolic name (non-empty after resolution)
            TypeShape::Enum(members) => {
                let member = &members[self.rng.gen_range(0..members.len())];
                Ok(member.value.clone())
            }

            // 5) sequence: fixed fan-out of LIST_LEN independent elements
            TypeShape::List(Some(item)) => {
                let mut out = Vec::with_capacity(LIST_LEN);
                for _ in 0..LIST_LEN {
                    out.push(self.synth_shape(item, cons)?);
                }
                Ok(Value::Array(out))
            }

            // 6) mapping: MAP_LEN word-keyed entries; colliding keys are not
            //    deduplicated up front, the object simply collapses them
            TypeShape::Map(value_shape) => {
                let mut out = Map::new();
                for _ in 0..MAP_LEN {
                    let key = fake::word(&mut self.rng);
                    let value = self.synth_shape(value_shape, cons)?;
                    out.insert(key, value);
                }
                Ok(Value::Object(out))
            }

            // 7) fixed tuple: one value per position, in order
            TypeShape::Tuple(elems) => {
                let mut out = Vec::with_capacity(elems.len());
                for elem in elems {
                    out.push(self.synth_shape(elem, cons)?);
                }
                Ok(Value::Array(out))
            }

            // 8) bool ahead of the numeric rules (bool is commonly an
            //    integer subtype; it must not materialize as a number)
            TypeShape::Bool => Ok(Value::Bool(self.rng.gen_bool(0.5))),

            // 9) integer in the derived inclusive interval
            TypeShape::Integer => {
                let (lo, hi) = num::int_interval(cons)?;
                Ok(Value::from(self.rng.gen_range(lo..=hi)))
            }

            // 10) float in the derived interval, two decimal digits
            TypeShape::Float => {
                let (lo, hi) = num::float_interval(cons)?;
                Ok(Value::from(num::round2(self.rng.gen_range(lo..=hi))))
            }

            // 11) text: exact length when the bounds pin it; otherwise
            //     readable filler capped at max(minL, maxL) — the lower
            //     bound is not guaranteed in the free-text case
            TypeShape::Text => {
                let min_len = cons.min_length.unwrap_or(TEXT_MIN_DEFAULT) as usize;
                let max_len = cons.max_length.unwrap_or(TEXT_MAX_DEFAULT) as usize;
                if min_len == max_len {
                    Ok(Value::String(fake::chars_exact(&mut self.rng, min_len)))
                } else {
                    let cap = min_len.max(max_len);
                    let mut s = fake::text(&mut self.rng, cap);
                    s.truncate(cap); // lexicon is ASCII, byte == char here
                    Ok(Value::String(s))
                }
            }

            // 12) bare list with no element shape: a few random words
            TypeShape::List(None) => {
                let words = (0..LIST_LEN)
                    .map(|_| Value::String(fake::word(&mut self.rng)))
                    .collect();
                Ok(Value::Array(words))
            }

            // 13) fully dynamic: representative primitive kinds, no bool
            TypeShape::Any => Ok(match self.rng.gen_range(0..4) {
                0 => Value::String(fake::word(&mut self.rng)),
                1 => Value::from(self.rng.gen_range(ANY_INT_LO..=ANY_INT_HI)),
                2 => Value::from(num::round2(
                    self.rng.gen_range(ANY_FLOAT_LO..=ANY_FLOAT_HI),
                )),
                _ => Value::String(fake::sentence(&mut self.rng, SENTENCE_WORDS)),
            }),

            // 14) nothing matched: silent null, not a failure
            TypeShape::Null => Ok(Value::Null),
        }
    }
}

/// One-shot convenience: seed, synthesize, done.
pub fn synthesize(set: &SchemaSet, name: &str, seed: u64) -> Result<Value, SynthError> {
    Synthesizer::new(set, seed).synthesize(name)
}

// ------------------------------- Tests ------------------------------------ //
