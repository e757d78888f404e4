//! Application layer: ports and services around the domain.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
