use thiserror::Error;

/// One variant per observable error kind; the HTTP layer maps these to
/// status codes and never leaks store internals past `Store`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let e = ServiceError::not_found("BioData");
        assert_eq!(e.to_string(), "BioData not found");
    }
}
