//! Form guard
//!
//! The validation gate run before any busy-state change or network
//! traffic. A rejected submission never reaches the dispatcher.

use thiserror::Error;

use probe_domain::RequestDescriptor;

/// Validation failures that abort a submission locally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The endpoint input was empty or whitespace only.
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
}

/// Checks that a descriptor is complete enough to dispatch.
///
/// # Errors
///
/// Returns `ValidationError::EmptyEndpoint` when the trimmed endpoint is
/// empty.
pub fn validate(descriptor: &RequestDescriptor) -> Result<(), ValidationError> {
    if descriptor.has_empty_endpoint() {
        return Err(ValidationError::EmptyEndpoint);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use probe_domain::HttpMethod;

    #[test]
    fn test_whitespace_endpoint_is_rejected() {
        let descriptor = RequestDescriptor::build("  ", HttpMethod::Get, &[]);
        assert_eq!(validate(&descriptor), Err(ValidationError::EmptyEndpoint));
    }

    #[test]
    fn test_padded_endpoint_is_accepted_after_trim() {
        let descriptor = RequestDescriptor::build(" /foo ", HttpMethod::Get, &[]);
        assert_eq!(descriptor.endpoint, "/foo");
        assert_eq!(validate(&descriptor), Ok(()));
    }
}
