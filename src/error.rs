//! Tagged failure values for the IPv4 calculators.
//!
//! Every domain operation returns `Result<T, IpError>`; callers branch on the
//! result before touching the payload. The `kind` tag is stable and meant to
//! be shown next to the message.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Stable error tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IpValidation,
    IpRangeFailedToCidr,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::IpValidation => "IP_VALIDATION_ERROR",
            ErrorKind::IpRangeFailedToCidr => "IP_RANGE_FAILED_TO_CIDR_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of an address calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpError {
    /// Malformed or out-of-range textual input.
    #[error("{0}")]
    Validation(String),
    /// Addresses parsed fine but do not form a range.
    #[error("{0}")]
    RangeToCidr(String),
}

impl IpError {
    pub fn validation(msg: impl Into<String>) -> Self {
        IpError::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            IpError::Validation(_) => ErrorKind::IpValidation,
            IpError::RangeToCidr(_) => ErrorKind::IpRangeFailedToCidr,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            IpError::Validation(msg) | IpError::RangeToCidr(msg) => msg,
        }
    }
}

impl Serialize for IpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("IpError", 2)?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
