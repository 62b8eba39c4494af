//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform every SeaORM query, insert,
//! update and delete. They use entity models internally and return domain models, keeping the
//! entity types out of the service and controller layers.

pub mod flight;
