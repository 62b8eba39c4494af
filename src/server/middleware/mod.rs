//! Request/response processing outside the handlers.
//!
//! - `panic` - Converts handler panics into the 500 envelope
//! - `fallback` - Answers unknown routes with the 404 envelope

pub mod fallback;
pub mod panic;
