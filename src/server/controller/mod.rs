//! HTTP request handlers.
//!
//! Controllers extract and validate request input, call the service layer and wrap the
//! returned domain models as DTOs inside the JSON response envelopes.

pub mod flight;
