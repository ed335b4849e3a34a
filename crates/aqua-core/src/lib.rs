//! Shared foundations for the aqua-charts aggregators
//!
//! Every aggregator in the workspace reports failures through the single
//! [`Error`] type defined here and validates its input with the helpers in
//! [`validate`].

pub mod error;
pub mod validate;

pub use error::{Error, Result};
pub use validate::{ensure_finite, ensure_non_empty, ensure_positive, ensure_sorted, min_max};
