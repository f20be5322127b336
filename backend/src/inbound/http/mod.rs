//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod groups;
pub mod health;
pub mod index;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;
