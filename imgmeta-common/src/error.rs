/// Type that allows to return data with the error
///
/// This is useful since commands like `new()` will take ownership of the data.
/// Using this as error type allows to continue using the data afterward.
pub struct ErrorWithData<E: std::error::Error> {
    err: E,
    data: Vec<u8>,
}

impl<E: std::error::Error> ErrorWithData<E> {
    pub fn new(err: E, data: Vec<u8>) -> Self {
        Self { err, data }
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn into_err(self) -> E {
        self.err
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn map_err<F: std::error::Error>(self, op: impl FnOnce(E) -> F) -> ErrorWithData<F> {
        ErrorWithData {
            err: op(self.err),
            data: self.data,
        }
    }
}

impl<E: std::error::Error> std::fmt::Debug for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWithData")
            .field("err", &self.err)
            .field("data", &format!("{} bytes", self.data.len()))
            .finish()
    }
}

impl<E: std::error::Error> std::fmt::Display for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl<E: std::error::Error> std::error::Error for ErrorWithData<E> {}

/// Failures of key parsing and tag store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TagError {
    #[error("Invalid key '{0}'")]
    InvalidKey(String),
    #[error("Key '{0}' not found")]
    KeyNotFound(String),
    #[error("Tag '{0}' is not repeatable")]
    NonRepeatableTag(String),
    #[error("Unknown namespace prefix '{0}'")]
    UnknownNamespacePrefix(String),
    #[error("Failed to decode value of '{key}': {reason}")]
    ValueDecode {
        key: String,
        raw: Vec<u8>,
        reason: String,
    },
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Failure of a value codec before it is attributed to a key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("{reason}")]
    Decode { raw: Vec<u8>, reason: String },
    #[error("{0}")]
    Invalid(String),
}

impl ValueError {
    pub fn decode(raw: &[u8], reason: impl ToString) -> Self {
        Self::Decode {
            raw: raw.to_vec(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid(reason: impl ToString) -> Self {
        Self::Invalid(reason.to_string())
    }

    /// Attributes the error to a key
    pub fn with_key(self, key: impl ToString) -> TagError {
        match self {
            Self::Decode { raw, reason } => TagError::ValueDecode {
                key: key.to_string(),
                raw,
                reason,
            },
            Self::Invalid(reason) => TagError::InvalidValue {
                key: key.to_string(),
                reason,
            },
        }
    }
}
