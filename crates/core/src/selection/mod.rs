//! Active selection state.
//!
//! - `model` - The `{ name, symbol }` value (ActiveSelection)
//! - `store` - The single shared container both selection components write
//!   and the price pipeline reads (SelectionStore)

mod model;
mod store;

pub use model::{ActiveSelection, DEFAULT_SELECTION_NAME, DEFAULT_SELECTION_SYMBOL};
pub use store::{SelectionStore, TaggedSelection};
