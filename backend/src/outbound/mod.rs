//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: process-local user and group mappings
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

pub mod memory;
