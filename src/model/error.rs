use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A page request did not succeed. Carries the remote service's message.
    #[error("request failed: {message}")]
    Request { message: String },

    /// The service kept returning continuation tokens past the configured page cap.
    #[error("page limit exceeded after {pages} page(s)")]
    PageLimitExceeded { pages: usize },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl ListError {
    pub fn request(message: impl Into<String>) -> Self {
        ListError::Request {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ListError::Config {
            message: message.into(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ListError::Request { message } | ListError::Config { message } => message.clone(),
            ListError::PageLimitExceeded { .. } => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_message() {
        let err = ListError::request("Access Denied");
        assert_eq!(err.message(), "Access Denied");
        assert_eq!(err.to_string(), "request failed: Access Denied");
    }

    #[test]
    fn test_page_limit_message() {
        let err = ListError::PageLimitExceeded { pages: 3 };
        assert_eq!(err.message(), "page limit exceeded after 3 page(s)");
    }
}
