//! Pipeline event types.

use serde::Serialize;

use tickerdeck_market_data::FailureKind;

/// Facts emitted by core components as selections, searches and price
/// requests progress.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A selection event was accepted into the active selection.
    SelectionChanged {
        generation: u64,
        name: String,
        symbol: String,
    },

    /// A selection event was refused (e.g. empty symbol).
    SelectionRejected { reason: String },

    /// A price request was issued for the selection at `generation`.
    PriceRequested {
        generation: u64,
        symbol: String,
        metric: String,
    },

    /// A price response was applied to the display.
    PriceResolved {
        generation: u64,
        symbol: String,
        metric: String,
        price: String,
    },

    /// A price response arrived after the selection moved on and was dropped.
    StalePriceDiscarded {
        generation: u64,
        current_generation: u64,
        symbol: String,
    },

    /// The quote request failed and the sentinel payload was used instead.
    QuoteTransportFailed { symbol: String, message: String },

    /// No candidate path produced a value; the display shows "N/A".
    ExtractionMissed { symbol: String, metric: String },

    /// A debounced search query was sent to the search host.
    SearchIssued { generation: u64, query: String },

    /// A validated search response replaced the displayed results.
    SearchResultsAccepted {
        generation: u64,
        query: String,
        count: usize,
    },

    /// A search failed; the previously displayed results were kept.
    SearchFailed {
        generation: u64,
        query: String,
        kind: FailureKind,
        message: String,
    },

    /// An in-flight search was cancelled by newer input.
    SearchSuperseded { generation: u64 },
}

impl PipelineEvent {
    /// Short machine name of the event, matching its serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectionChanged { .. } => "selection_changed",
            Self::SelectionRejected { .. } => "selection_rejected",
            Self::PriceRequested { .. } => "price_requested",
            Self::PriceResolved { .. } => "price_resolved",
            Self::StalePriceDiscarded { .. } => "stale_price_discarded",
            Self::QuoteTransportFailed { .. } => "quote_transport_failed",
            Self::ExtractionMissed { .. } => "extraction_missed",
            Self::SearchIssued { .. } => "search_issued",
            Self::SearchResultsAccepted { .. } => "search_results_accepted",
            Self::SearchFailed { .. } => "search_failed",
            Self::SearchSuperseded { .. } => "search_superseded",
        }
    }

    /// Failure classification, for events that record a degradation.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::QuoteTransportFailed { .. } => Some(FailureKind::Transport),
            Self::ExtractionMissed { .. } => Some(FailureKind::ExtractionMiss),
            Self::SearchFailed { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
