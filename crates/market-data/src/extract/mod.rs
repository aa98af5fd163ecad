//! Price extraction from heterogeneous quote payloads.
//!
//! A payload is probed through an ordered list of [`CandidatePath`]s. Each path
//! is a pure, total walk over an opaque [`serde_json::Value`]; the first one that
//! lands on a usable scalar wins. Nothing here panics on missing keys, wrong
//! types or non-object payloads.
//!
//! ```text
//! closingPrices[last].close
//!   -> data.closingPrices[last].close
//!   -> results.closingPrices[last].close
//!   -> price
//!   -> "N/A"
//! ```

mod render;

use serde_json::Value;
use tracing::trace;

use crate::models::{ExtractedPrice, QuotePayload};

pub use render::render_scalar;

/// One hop of a candidate path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Object member lookup.
    Field(&'static str),
    /// Last element of an array.
    Last,
}

/// A named, ordered walk into a payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CandidatePath {
    label: &'static str,
    steps: &'static [Step],
}

impl CandidatePath {
    pub const fn new(label: &'static str, steps: &'static [Step]) -> Self {
        Self { label, steps }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Walk the path. `None` as soon as a hop does not apply.
    pub fn resolve<'a>(&self, payload: &'a Value) -> Option<&'a Value> {
        self.steps.iter().try_fold(payload, |value, step| match step {
            Step::Field(key) => value.get(*key),
            Step::Last => value.as_array()?.last(),
        })
    }

    /// Walk the path and render the value it lands on, if usable.
    pub fn probe(&self, payload: &Value) -> Option<String> {
        self.resolve(payload).and_then(render_scalar)
    }
}

use Step::{Field, Last};

/// Closing price candidates, in priority order.
pub const CLOSING_PRICE_PATHS: &[CandidatePath] = &[
    CandidatePath::new("closingPrices", &[Field("closingPrices"), Last, Field("close")]),
    CandidatePath::new(
        "data.closingPrices",
        &[Field("data"), Field("closingPrices"), Last, Field("close")],
    ),
    CandidatePath::new(
        "results.closingPrices",
        &[Field("results"), Field("closingPrices"), Last, Field("close")],
    ),
    CandidatePath::new("price", &[Field("price")]),
];

/// Exponential moving average candidates, in priority order.
pub const EMA_PATHS: &[CandidatePath] = &[
    CandidatePath::new("emaValue", &[Field("emaValue"), Last, Field("ema")]),
    CandidatePath::new(
        "data.emaValue",
        &[Field("data"), Field("emaValue"), Last, Field("ema")],
    ),
    CandidatePath::new(
        "results.emaValue",
        &[Field("results"), Field("emaValue"), Last, Field("ema")],
    ),
];

/// First-match-wins over `paths`. Returns the winning label with the value.
pub fn first_match(paths: &[CandidatePath], payload: &Value) -> Option<(&'static str, String)> {
    paths
        .iter()
        .find_map(|path| path.probe(payload).map(|value| (path.label(), value)))
}

/// Run `paths` against `payload`, falling back to `"N/A"`.
pub fn extract_with(paths: &[CandidatePath], payload: &QuotePayload) -> ExtractedPrice {
    match first_match(paths, payload.as_value()) {
        Some((label, value)) => {
            trace!("Extracted {} via {}", value, label);
            ExtractedPrice::Value(value)
        }
        None => ExtractedPrice::NotAvailable,
    }
}

/// Closing price of a quote payload.
pub fn extract_price(payload: &QuotePayload) -> ExtractedPrice {
    extract_with(CLOSING_PRICE_PATHS, payload)
}

/// Latest EMA value of an `/ema` payload.
pub fn extract_ema(payload: &QuotePayload) -> ExtractedPrice {
    extract_with(EMA_PATHS, payload)
}
