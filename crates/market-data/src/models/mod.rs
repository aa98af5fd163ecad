//! Market data models
//!
//! This module contains the core data types shared by the catalog, the
//! search client and the price extractor:
//! - `ticker` - Catalog metadata (TickerMetadata) and validated search records (RemoteTickerRecord)
//! - `payload` - Opaque quote payloads (QuotePayload) and the rendered result (ExtractedPrice)

mod payload;
mod ticker;

pub use payload::{ExtractedPrice, QuotePayload, NOT_AVAILABLE, SENTINEL_MESSAGE};
pub use ticker::{RemoteTickerRecord, TickerMetadata};
