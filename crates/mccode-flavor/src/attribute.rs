//! Attribute names and the values they can hold.

use std::fmt;
use std::str::FromStr;

use crate::{FlavorError, FlavorResult};

/// One named constant of a flavor profile.
///
/// Each attribute has a field name (`product_name`) and the preprocessor
/// symbol generated code knows it by (`MCCODE_STRING`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    ProductName,
    ReleaseDate,
    Version,
    ProductNameUpper,
    ParticleKind,
    ParticleCode,
    LibraryEnvVar,
    /// Defaults to the resolved `ProductNameUpper`, not to a literal.
    FlavorUpper,
    IsProjectBuild,
    LibraryTag,
}

/// Shape of an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Int,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Flag => "flag",
        })
    }
}

impl Attribute {
    /// Header order.
    pub const ALL: [Attribute; 10] = [
        Attribute::ProductName,
        Attribute::ReleaseDate,
        Attribute::Version,
        Attribute::ProductNameUpper,
        Attribute::ParticleKind,
        Attribute::ParticleCode,
        Attribute::LibraryEnvVar,
        Attribute::FlavorUpper,
        Attribute::IsProjectBuild,
        Attribute::LibraryTag,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Attribute::ProductName => "MCCODE_STRING",
            Attribute::ReleaseDate => "MCCODE_DATE",
            Attribute::Version => "MCCODE_VERSION",
            Attribute::ProductNameUpper => "MCCODE_NAME",
            Attribute::ParticleKind => "MCCODE_PARTICLE",
            Attribute::ParticleCode => "MCCODE_PARTICLE_CODE",
            Attribute::LibraryEnvVar => "MCCODE_LIBENV",
            Attribute::FlavorUpper => "FLAVOR_UPPER",
            Attribute::IsProjectBuild => "MCCODE_PROJECT",
            Attribute::LibraryTag => "FLAVOR_LIB",
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Attribute::ProductName => "product_name",
            Attribute::ReleaseDate => "release_date",
            Attribute::Version => "version",
            Attribute::ProductNameUpper => "product_name_upper",
            Attribute::ParticleKind => "particle_kind",
            Attribute::ParticleCode => "particle_code",
            Attribute::LibraryEnvVar => "library_env_var",
            Attribute::FlavorUpper => "flavor_upper",
            Attribute::IsProjectBuild => "is_project_build",
            Attribute::LibraryTag => "library_tag",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            Attribute::ParticleCode => ValueKind::Int,
            Attribute::IsProjectBuild => ValueKind::Flag,
            _ => ValueKind::Str,
        }
    }

    /// Interpret a raw textual value (as given on a command line) for this
    /// attribute.
    ///
    /// String values lose one pair of surrounding double quotes, so both
    /// `MCCODE_VERSION=4.1` and `MCCODE_VERSION="4.1"` mean the same thing.
    /// Flags accept `true`/`false` or `1`/`0`; other integers are rejected
    /// since a flag cannot carry them through to rendered output.
    pub fn parse_value(self, raw: &str) -> FlavorResult<Value> {
        match self.kind() {
            ValueKind::Str => Ok(Value::Str(strip_quotes(raw).to_string())),
            ValueKind::Int => raw
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| self.invalid(raw, e.to_string())),
            ValueKind::Flag => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Value::Flag(true)),
                "0" | "false" | "no" | "off" => Ok(Value::Flag(false)),
                _ => Err(self.invalid(raw, "expected 0/1 or true/false".into())),
            },
        }
    }

    fn invalid(self, raw: &str, reason: String) -> FlavorError {
        FlavorError::InvalidValue {
            attribute: self,
            value: raw.to_string(),
            reason,
        }
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Attribute {
    type Err = FlavorError;

    /// Accepts either the symbol (`MCCODE_VERSION`) or the field name
    /// (`version`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.symbol() == s || a.field_name() == s)
            .ok_or_else(|| FlavorError::UnknownSymbol(s.to_string()))
    }
}

/// A resolved or overriding value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Str(String),
    Int(i64),
    Flag(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Flag(_) => ValueKind::Flag,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Flag(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Flag(b)
    }
}
