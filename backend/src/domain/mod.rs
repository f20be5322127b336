//! Domain primitives, validation, and directory operations.
//!
//! Purpose: define the user and group types, the rules a user payload must
//! satisfy, and the operations that mutate the directory. Nothing here knows
//! about HTTP; inbound adapters map [`Error`] to transport responses.
//!
//! Public surface:
//! - [`UserRecord`], [`UserId`], [`Group`]: stored entities.
//! - [`validate_user`]: payload checks for create and update.
//! - [`manager`]: validate-then-mutate operations over a store.
//! - [`DirectoryService`]: mutex-guarded implementation of the driving ports.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failures.

mod confirmation;
mod directory_service;
pub mod error;
mod group;
pub mod manager;
pub mod ports;
pub mod seed;
mod trace_id;
pub mod user;
mod validation;

pub use self::confirmation::Confirmation;
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::group::Group;
pub use self::seed::{DirectorySeed, SeedSummary};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{OperationKind, USER_FIELDS, UserId, UserRecord, UserValidationError};
pub use self::validation::validate_user;
