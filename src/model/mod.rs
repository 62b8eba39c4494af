//! Request and response shapes exchanged over the HTTP API.
//!
//! These types define the JSON contract only. Conversion to and from the server's domain
//! models happens in `server::model`.

pub mod api;
pub mod flight;
