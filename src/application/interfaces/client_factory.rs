use std::sync::Arc;

use super::ChatClient;
use crate::domain::DomainError;

/// Resolves the credential and builds a [`ChatClient`] bound to it.
///
/// Called once per submission. Returns [`DomainError::Configuration`] when the
/// credential is missing; callers must not attempt any request in that case.
pub trait ClientFactory: Send + Sync {
    fn create(&self) -> Result<Arc<dyn ChatClient>, DomainError>;
}
