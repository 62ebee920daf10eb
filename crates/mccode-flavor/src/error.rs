use thiserror::Error;

use crate::{Attribute, ValueKind};

/// Errors raised while *reading* flavor names or override values.
///
/// Resolution itself never fails; these only come from the parsing
/// surfaces that feed [`crate::Overrides`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlavorError {
    #[error("unknown flavor '{0}' (expected neutron/mcstas or xray/mcxtrace)")]
    UnknownFlavor(String),

    #[error("unknown identity symbol '{0}'")]
    UnknownSymbol(String),

    #[error("malformed definition '{0}': expected NAME=VALUE")]
    MalformedDefine(String),

    #[error("{attribute} expects {expected}, got {found}")]
    KindMismatch {
        attribute: Attribute,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("invalid value '{value}' for {attribute}: {reason}")]
    InvalidValue {
        attribute: Attribute,
        value: String,
        reason: String,
    },
}

pub type FlavorResult<T> = Result<T, FlavorError>;
