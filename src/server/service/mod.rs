//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! apply the business rules of each operation, such as page clamping and search predicate
//! composition, and work with domain models rather than DTOs or entity models.

pub mod flight;
