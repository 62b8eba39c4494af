//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! actually assert on.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let flight = factory::create_flight(&db).await?;
//!
//! // Customize through the builder
//! let flight = factory::flight::FlightFactory::new(&db)
//!     .airline("Jetstar")
//!     .departure_airport("ZQN")
//!     .build()
//!     .await?;
//! ```

pub mod flight;
pub mod helpers;

pub use flight::create_flight;
