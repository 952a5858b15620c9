use thiserror::Error;

/// Errors from dynamic service type resolution.
///
/// The message of [`ResolveError::UnresolvableType`] is the exact diagnostic
/// line that [`crate::DynamicService::load_or_exit`] logs before terminating
/// the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The type registry has no entry for the given type name.
    #[error("Could not load message for: {0}")]
    UnresolvableType(String),
}

impl ResolveError {
    /// The fully-qualified type name that failed to resolve, including any
    /// `Request`/`Response` suffix.
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnresolvableType(name) => name,
        }
    }
}
