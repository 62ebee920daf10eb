//! Flavor selection. Exactly one flavor is active per resolution.

use std::fmt;
use std::str::FromStr;

use crate::defaults::{self, Defaults};
use crate::FlavorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Flavor {
    /// McStas: neutron ray tracing.
    Neutron,
    /// McXtrace: x-ray tracing.
    Xray,
}

impl Flavor {
    pub const ALL: [Flavor; 2] = [Flavor::Neutron, Flavor::Xray];

    /// Built-in constant table for this flavor.
    pub fn defaults(self) -> &'static Defaults {
        match self {
            Flavor::Neutron => &defaults::NEUTRON,
            Flavor::Xray => &defaults::XRAY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Neutron => "neutron",
            Flavor::Xray => "xray",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = FlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neutron" | "mcstas" => Ok(Flavor::Neutron),
            "xray" | "x-ray" | "mcxtrace" => Ok(Flavor::Xray),
            _ => Err(FlavorError::UnknownFlavor(s.to_string())),
        }
    }
}
