use http::StatusCode;
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};

pub(crate) type Result<T, E = Error> = core::result::Result<T, E>;

/// Crate specific error types.
#[derive(Clone, Debug)]
pub enum Error {
    /// Error was caused by something library internal. This only happens if something was
    /// implemented incorrectly (which hopefully should never be the case).
    Internal(ErrorContext),

    /// Some sort of error occurred while requesting the giphy api. This covers connection failures
    /// as well as responses with a non-2xx status code.
    Request {
        context: ErrorContext,
        status: Option<StatusCode>,
    },
    /// While decoding the api response body something went wrong.
    Decode(ErrorContext),

    /// Generally malformed or invalid user input.
    Input(ErrorContext),

    /// A single item endpoint answered successfully but did not contain an item.
    EmptyResponse(ErrorContext),

    /// A [`crate::common::Pagination`] was cancelled more than once.
    AlreadyClosed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Internal(context) => write!(f, "{}", context),
            Error::Request { context, .. } => write!(f, "{}", context),
            Error::Decode(context) => write!(f, "{}", context),
            Error::Input(context) => write!(f, "{}", context),
            Error::EmptyResponse(context) => write!(f, "{}", context),
            Error::AlreadyClosed => write!(f, "already closed"),
        }
    }
}

impl StdError for Error {}

impl Error {
    /// The http status code of the response which caused this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request { status, .. } => *status,
            _ => None,
        }
    }

    /// A [`Error::Request`] without a status code, e.g. for a failing custom middleware.
    pub fn request<C: Into<ErrorContext>>(context: C) -> Self {
        Error::Request {
            context: context.into(),
            status: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(ErrorContext::new(err.to_string()))
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::Internal(ErrorContext::new(format!(
            "could not encode query - {}",
            err
        )))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let mut context = ErrorContext::new(err.to_string());
        if let Some(url) = err.url() {
            context = context.with_url(url.as_str());
        }

        if err.is_request()
            || err.is_redirect()
            || err.is_timeout()
            || err.is_connect()
            || err.is_body()
            || err.is_status()
        {
            Error::Request {
                context,
                status: err.status(),
            }
        } else if err.is_decode() {
            Error::Decode(context)
        } else if err.is_builder() {
            Error::Internal(context)
        } else {
            Error::Internal(ErrorContext::new(format!(
                "Could not determine request error type - {}",
                err
            )))
        }
    }
}

/// Information about an [`Error`].
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub message: String,
    pub url: Option<String>,
    pub value: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(url) = &self.url {
            write!(f, " ({})", url)?;
        }
        if let Some(value) = &self.value {
            write!(f, ": {}", value)?;
        }

        Ok(())
    }
}

impl From<String> for ErrorContext {
    fn from(string: String) -> Self {
        ErrorContext::new(string)
    }
}

impl From<&str> for ErrorContext {
    fn from(str: &str) -> Self {
        ErrorContext::new(str)
    }
}

impl ErrorContext {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
            url: None,
            value: None,
        }
    }

    pub fn with_url<S: AsRef<str>>(mut self, url: S) -> Self {
        self.url = Some(url.as_ref().to_string());

        self
    }

    pub fn with_value(mut self, value: &[u8]) -> Self {
        self.value = Some(
            std::str::from_utf8(value)
                .unwrap_or("-- not displayable --")
                .to_string(),
        );

        self
    }
}

/// Classify the status of an api response. Every non-2xx status is terminal, the message is the
/// status line (e.g. `404 Not Found`).
pub(crate) fn check_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(Error::Request {
        context: ErrorContext::new(status.to_string()).with_url(redact_api_key(url)),
        status: Some(status),
    })
}

/// Decode a raw api response body.
pub(crate) fn decode_body<T: serde::de::DeserializeOwned>(url: &str, raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw).map_err(|e| {
        Error::Decode(
            ErrorContext::new(format!("{} at {}:{}", e, e.line(), e.column()))
                .with_url(redact_api_key(url))
                .with_value(raw),
        )
    })
}

/// Strip the value of the `api_key` query parameter so urls can be shown in errors and logs.
pub(crate) fn redact_api_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let redacted = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("api_key=") {
                "api_key=***"
            } else {
                pair
            }
        })
        .collect::<Vec<&str>>()
        .join("&");
    format!("{}?{}", base, redacted)
}
