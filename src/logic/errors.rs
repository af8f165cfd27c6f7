use std::error::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkError,    // status 0, no response
    NotFound,        // HTTP 404
    ServerError,     // any other non-2xx
    UnexpectedError, // status 0, e.g. malformed body
}

/// Classify an API error by its variant
pub fn classify_error(error: &ApiError) -> ErrorKind {
    match error {
        ApiError::Network => ErrorKind::NetworkError,
        ApiError::NotFound => ErrorKind::NotFound,
        ApiError::Server { .. } => ErrorKind::ServerError,
        ApiError::Unexpected(_) => ErrorKind::UnexpectedError,
    }
}

/// Short headline a business page can show for each kind of failure
pub fn user_facing_title(error: &ApiError) -> &'static str {
    match classify_error(error) {
        ErrorKind::NetworkError => "Unable to reach the server",
        ErrorKind::NotFound => "Business not found",
        ErrorKind::ServerError => match error.status() {
            500..=599 => "The server ran into a problem",
            _ => "The request was rejected",
        },
        ErrorKind::UnexpectedError => "Something went wrong",
    }
}

/// Describe an error by its most informative cause.
///
/// Walks the source chain looking for a `reqwest::Error`; if there is none,
/// the deepest (root cause) message is used.
pub fn format_error_message(error: &(dyn Error + 'static)) -> String {
    let mut current: Option<&(dyn Error + 'static)> = Some(error);

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        msg: &'static str,
        inner: Option<Box<Wrapped>>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.msg)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_classify_each_variant() {
        assert_eq!(classify_error(&ApiError::Network), ErrorKind::NetworkError);
        assert_eq!(classify_error(&ApiError::NotFound), ErrorKind::NotFound);
        assert_eq!(
            classify_error(&ApiError::Server {
                status: 500,
                message: "boom".to_string()
            }),
            ErrorKind::ServerError
        );
        assert_eq!(
            classify_error(&ApiError::Unexpected("bad json".to_string())),
            ErrorKind::UnexpectedError
        );
    }

    #[test]
    fn test_user_facing_title_splits_server_errors() {
        let internal = ApiError::Server {
            status: 502,
            message: String::new(),
        };
        let rejected = ApiError::Server {
            status: 400,
            message: String::new(),
        };
        assert_eq!(user_facing_title(&internal), "The server ran into a problem");
        assert_eq!(user_facing_title(&rejected), "The request was rejected");
        assert_eq!(user_facing_title(&ApiError::NotFound), "Business not found");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = Wrapped {
            msg: "custom error message",
            inner: None,
        };
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_format_shows_root_cause() {
        let err = Wrapped {
            msg: "Failed to fetch",
            inner: Some(Box::new(Wrapped {
                msg: "tcp connect error",
                inner: None,
            })),
        };
        assert_eq!(format_error_message(&err), "tcp connect error");
    }
}
