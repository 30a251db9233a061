use crate::{arith::ArithError, codec::CodecError, grid::GridError, store::StoreError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Every subsystem error converts into this type at the crate boundary.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct an interface-origin invariant violation.
    pub(crate) fn interface_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Interface,
            message.into(),
        )
    }

    #[must_use]
    const fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    #[must_use]
    pub const fn is_precision_loss(&self) -> bool {
        matches!(self.class, ErrorClass::PrecisionLoss)
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<ArithError> for InternalError {
    fn from(err: ArithError) -> Self {
        Self::new(err.class(), ErrorOrigin::Arith, err.to_string())
            .with_detail(ErrorDetail::Arith(err))
    }
}

impl From<CodecError> for InternalError {
    fn from(err: CodecError) -> Self {
        Self::new(err.class(), ErrorOrigin::Codec, err.to_string())
    }
}

impl From<GridError> for InternalError {
    fn from(err: GridError) -> Self {
        Self::new(err.class(), ErrorOrigin::Grid, err.to_string())
            .with_detail(ErrorDetail::Grid(err))
    }
}

impl From<StoreError> for InternalError {
    fn from(err: StoreError) -> Self {
        Self::new(err.class(), ErrorOrigin::Store, err.to_string())
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
/// Only errors that are cheap to keep and useful to match on are attached.
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Arith(ArithError),

    #[error("{0}")]
    Grid(GridError),
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    Corruption,
    InvariantViolation,
    Io,
    NotFound,
    PrecisionLoss,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Corruption => "corruption",
            Self::InvariantViolation => "invariant_violation",
            Self::Io => "io",
            Self::NotFound => "not_found",
            Self::PrecisionLoss => "precision_loss",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Arith,
    Codec,
    Grid,
    Store,
    Interface,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Arith => "arith",
            Self::Codec => "codec",
            Self::Grid => "grid",
            Self::Store => "store",
            Self::Interface => "interface",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
