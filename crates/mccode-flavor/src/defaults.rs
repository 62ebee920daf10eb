//! Built-in identity tables, one literal table per flavor.
//!
//! Generated simulation code expects these exact literals, so they are
//! spelled out twice rather than derived from one another.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub product_name: &'static str,
    pub release_date: &'static str,
    pub version: &'static str,
    pub product_name_upper: &'static str,
    pub particle_kind: &'static str,
    /// PDG Monte Carlo particle number.
    pub particle_code: i64,
    pub library_env_var: &'static str,
    pub is_project_build: bool,
    pub library_tag: &'static str,
}

pub const NEUTRON: Defaults = Defaults {
    product_name: "McStas",
    release_date: "2023-07-22",
    version: "4",
    product_name_upper: "MCSTAS",
    particle_kind: "neutron",
    particle_code: 2112,
    library_env_var: "MCSTAS",
    is_project_build: true,
    library_tag: "nlib",
};

pub const XRAY: Defaults = Defaults {
    product_name: "McXtrace",
    release_date: "2023-07-22",
    version: "4",
    product_name_upper: "MCXTRACE",
    particle_kind: "x-ray",
    particle_code: 22,
    library_env_var: "MCXTRACE",
    is_project_build: true,
    library_tag: "xlib",
};
