//! Network aggregation.
//!
//! Validates that a set of networks is contiguous and searches for the
//! supernet that covers a selected subset.

pub mod selection;
pub mod summarize;

pub use selection::{parse_selection, select_networks};
pub use summarize::{is_contiguous, summarize, summarize_exact, validate_contiguous};
