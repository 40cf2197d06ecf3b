//! Error types for provider operations.
//!
//! A provider error always describes a single zone fetch; it never aborts the
//! refresh cycle it belongs to. The context payload carries enough to log a
//! useful warning without re-deriving it at the call site.

use std::fmt;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Structured context for provider errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch_aqi")
    pub operation: Option<String>,
    /// The zone the fetch was for
    pub zone: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether retrying the same fetch could plausibly succeed.
    /// Advisory only: nothing in this crate retries automatically.
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the zone name.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref zone) = self.zone {
            parts.push(format!("zone={}", zone));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure reaching the backend (DNS, connect, TLS).
    /// Typically transient.
    #[error("HTTP error: {message} {context}")]
    Http {
        message: String,
        context: ErrorContext,
    },

    /// The backend answered with a non-success status.
    #[error("Status error: {message} {context}")]
    Status {
        message: String,
        context: ErrorContext,
    },

    /// The response body could not be decoded into a reading.
    #[error("Decode error: {message} {context}")]
    Decode {
        message: String,
        context: ErrorContext,
    },

    /// The request did not complete within the configured timeout.
    #[error("Timeout error: {message} {context}")]
    Timeout {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Internal/unexpected errors.
    #[error("Internal error: {message} {context}")]
    Internal {
        message: String,
        context: ErrorContext,
    },
}

impl ProviderError {
    /// Create a transport error. Transport errors are retryable.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    /// Create a transport error with full context.
    pub fn http_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Http {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create a non-success status error.
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a non-success status error with context.
    pub fn status_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Status {
            message: message.into(),
            context,
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a decode error with context.
    pub fn decode_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Decode {
            message: message.into(),
            context,
        }
    }

    /// Create a timeout error. Timeouts are retryable.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            context: ErrorContext::default().retryable(),
        }
    }

    /// Create a timeout error with full context.
    pub fn timeout_with_context(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Timeout {
            message: message.into(),
            context: context.retryable(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { context, .. } => context.retryable,
            Self::Timeout { context, .. } => context.retryable,
            _ => false,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Http { context, .. } => context,
            Self::Status { context, .. } => context,
            Self::Decode { context, .. } => context,
            Self::Timeout { context, .. } => context,
            Self::Configuration { context, .. } => context,
            Self::Internal { context, .. } => context,
        }
    }

    /// Add or update the operation in the error context.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        match &mut self {
            Self::Http { context, .. }
            | Self::Status { context, .. }
            | Self::Decode { context, .. }
            | Self::Timeout { context, .. }
            | Self::Configuration { context, .. }
            | Self::Internal { context, .. } => {
                context.operation = Some(operation.into());
            }
        }
        self
    }
}

impl From<String> for ProviderError {
    fn from(s: String) -> Self {
        ProviderError::internal(s)
    }
}

impl From<&str> for ProviderError {
    fn from(s: &str) -> Self {
        ProviderError::internal(s.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let context = ErrorContext::default().with_details(
            err.url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "no url".to_string()),
        );

        if err.is_timeout() {
            ProviderError::timeout_with_context(err.to_string(), context)
        } else if err.is_decode() {
            ProviderError::decode_with_context(err.to_string(), context)
        } else {
            ProviderError::http_with_context(err.to_string(), context)
        }
    }
}
