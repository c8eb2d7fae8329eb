use crate::Error;

/// The store answered with something the caller did not ask for, such as a
/// page of items in response to a single-item read.
#[derive(Debug)]
pub(super) struct InvalidResponse {
    pub(super) message: Box<str>,
}

impl Error {
    pub fn invalid_response(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResponse(InvalidResponse {
            message: message.into().into(),
        }))
    }
}

impl std::fmt::Display for InvalidResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid response from store: {}", self.message)
    }
}
