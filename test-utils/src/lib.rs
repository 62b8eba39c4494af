//! Flightboard Test Utils
//!
//! Provides shared testing utilities for the flightboard server. This crate offers a builder
//! pattern for creating test contexts backed by in-memory SQLite databases, plus factories for
//! inserting flight rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_flights() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let flight = factory::create_flight(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
