use derive_more::Display;
use latticedb_config::ConfigError;
use latticedb_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        Self::new(err.class.into(), err.origin.into(), err.message)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers and the binding layer.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Configuration could not be read or failed validation.
    Config,

    /// Persisted bytes disagree with the layout they claim.
    Corruption,

    /// A caller-supplied coordinate or argument is outside its domain.
    InvalidInput,

    Io,

    /// The store or the requested record does not exist.
    NotFound,

    /// A ratio could not be rendered as `f64`; exact counts remain available.
    PrecisionLoss,

    Unsupported,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::Corruption => Self::Corruption,
            ErrorClass::InvariantViolation => Self::InvalidInput,
            ErrorClass::Io => Self::Io,
            ErrorClass::NotFound => Self::NotFound,
            ErrorClass::PrecisionLoss => Self::PrecisionLoss,
            ErrorClass::Unsupported => Self::Unsupported,
        }
    }
}

///
/// ErrorOrigin
/// Public origin taxonomy.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Arith,
    Codec,
    Config,
    Grid,
    Interface,
    Store,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Arith => Self::Arith,
            CoreErrorOrigin::Codec => Self::Codec,
            CoreErrorOrigin::Grid => Self::Grid,
            CoreErrorOrigin::Interface => Self::Interface,
            CoreErrorOrigin::Store => Self::Store,
        }
    }
}
