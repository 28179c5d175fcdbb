use acctview_core_types::RequestId;
use thiserror::Error;

/// Result type alias using AcctViewError
pub type Result<T> = std::result::Result<T, AcctViewError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    list: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            list: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add list name context
    pub fn with_list(mut self, list: impl Into<String>) -> Self {
        self.list = Some(list.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn list(&self) -> Option<&str> {
        self.list.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(list) = &self.list {
            write!(f, " (list: {})", list)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised at the edges of the console: fixtures, config, export
///
/// The query pipeline itself is total and never produces these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcctViewError {
    /// List name not in the registry
    #[error("Unknown list: {name}")]
    UnknownList { name: String },

    /// Reading or writing a file failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Record fixture could not be decoded
    #[error("Invalid record data in {path}: {message}")]
    Fixture { path: String, message: String },

    /// Configuration is malformed or inconsistent
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Caller-supplied argument rejected
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl AcctViewError {
    pub fn io(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        AcctViewError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        AcctViewError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ExErrorKind {
        match self {
            AcctViewError::UnknownList { .. } => ExErrorKind::NotFound,
            AcctViewError::Io { .. } => ExErrorKind::Io,
            AcctViewError::Fixture { .. } | AcctViewError::Serialization { .. } => {
                ExErrorKind::Serialization
            }
            AcctViewError::Config { .. } => ExErrorKind::Config,
            AcctViewError::InvalidInput { .. } => ExErrorKind::InvalidInput,
        }
    }
}

impl From<AcctViewError> for ExError {
    fn from(err: AcctViewError) -> Self {
        let base = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            AcctViewError::UnknownList { name } => base.with_list(name),
            AcctViewError::Io { path, .. } | AcctViewError::Fixture { path, .. } => {
                base.with_path(path)
            }
            AcctViewError::Config { .. }
            | AcctViewError::InvalidInput { .. }
            | AcctViewError::Serialization { .. } => base,
        }
    }
}

impl From<serde_json::Error> for AcctViewError {
    fn from(err: serde_json::Error) -> Self {
        AcctViewError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AcctViewError {
    fn from(err: toml::de::Error) -> Self {
        AcctViewError::Config {
            message: err.to_string(),
        }
    }
}
