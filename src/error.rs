use thiserror::Error;

/// A destructive read was attempted on an empty [`Optional`](crate::option::Optional)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EmptyValueError {
    message: String,
}
impl EmptyValueError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
