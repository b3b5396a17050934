use crate::api::NetworkError;

/// Hint shown under every network failure.
pub const RETRY_HINT: &str = "Try again";

/// Title and message pair shown to the user as an alert or toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_network_error(error: &NetworkError) -> Self {
        Self::new(error.to_string(), RETRY_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_notice_carries_retry_hint() {
        let error = NetworkError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        let notice = Notice::from_network_error(&error);
        assert_eq!(notice.title, "Server returned 503: unavailable");
        assert_eq!(notice.message, "Try again");
    }
}
