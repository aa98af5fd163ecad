//! Pipeline events module.
//!
//! Provides the event types and the sink trait through which the selection,
//! search and price components report what they did. The surrounding
//! application wires a sink to its own logging or telemetry; emitting never
//! changes control flow.

mod pipeline_event;
mod sink;

pub use pipeline_event::*;
pub use sink::*;
