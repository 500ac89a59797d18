//! Constraint extraction.
//!
//! A field's annotations arrive as raw JSON objects. Extraction keeps only
//! the recognized bound names with non-null values and drops everything else
//! without error. Pure function of its input; absence of any constraint is a
//! valid, empty result.

use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::decl::RawAnnotation;

/// Flat conjunction of the recognized bounds for one field.
///
/// Length bounds apply to text, interval bounds to numerics. Both families
/// can coexist here (a mistyped field would do that); extraction copies them
/// without cross-checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub gt: Option<OrderedFloat<f64>>,
    pub ge: Option<OrderedFloat<f64>>,
    pub lt: Option<OrderedFloat<f64>>,
    pub le: Option<OrderedFloat<f64>>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }
}

/// Fold a field's raw annotation objects into one `Constraints`.
/// Later annotations win for a repeated key; null values never overwrite.
pub fn extract(annotations: &[RawAnnotation]) -> Constraints {
    let mut out = Constraints::default();
    for annotation in annotations {
        for (key, value) in annotation {
            match key.as_str() {
                "min_length" => out.min_length = value.as_u64().or(out.min_length),
                "max_length" => out.max_length = value.as_u64().or(out.max_length),
                "gt" => out.gt = num_bound(value).or(out.gt),
                "ge" => out.ge = num_bound(value).or(out.ge),
                "lt" => out.lt = num_bound(value).or(out.lt),
                "le" => out.le = num_bound(value).or(out.le),
                // unrecognized annotation kinds are ignored, not errors
                _ => {}
            }
        }
    }
    out
}

fn num_bound(v: &Value) -> Option<OrderedFloat<f64>> {
    v.as_f64().map(OrderedFloat)
}

// ------------------------------- Tests ------------------------------------ //
