//! Domain services: shared error type.

mod error;

pub use error::*;
