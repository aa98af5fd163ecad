/// Classification of the ways the selection-to-price pipeline can degrade.
///
/// None of these escape as a panic or an unhandled error: every kind resolves
/// to either "nothing changed" or the `"N/A"` placeholder.
///
/// # Behavior Summary
///
/// | Kind | Price path | Search path |
/// |------|------------|-------------|
/// | `Transport` | sentinel payload, renders `"N/A"` | previous list kept |
/// | `ShapeValidation` | n/a | response dropped, previous list kept |
/// | `ExtractionMiss` | renders `"N/A"` | n/a |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network error, timeout, undecodable body or non-success status.
    Transport,

    /// The body decoded but did not have the expected structure.
    ShapeValidation,

    /// A quote payload had no usable value on any candidate path.
    /// This is a valid terminal outcome, never an error value.
    ExtractionMiss,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::ShapeValidation => write!(f, "shape_validation"),
            Self::ExtractionMiss => write!(f, "extraction_miss"),
        }
    }
}
