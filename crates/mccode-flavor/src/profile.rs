//! The resolved identity of one flavor.

use std::fmt;
use std::path::PathBuf;

use crate::{Attribute, Flavor, Overrides, Value};

/// Fully resolved identity constants. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlavorProfile {
    flavor: Flavor,
    product_name: String,
    release_date: String,
    version: String,
    product_name_upper: String,
    particle_kind: String,
    particle_code: i64,
    library_env_var: String,
    flavor_upper: String,
    is_project_build: bool,
    library_tag: String,
}

/// Build the profile for `flavor`, taking each attribute from `overrides`
/// when present and from the flavor's table otherwise.
///
/// Total: every attribute has a default, so this cannot fail.
pub fn resolve(flavor: Flavor, overrides: &Overrides) -> FlavorProfile {
    let d = flavor.defaults();

    let product_name_upper = pick(
        Attribute::ProductNameUpper,
        &overrides.product_name_upper,
        d.product_name_upper,
    );
    // FLAVOR_UPPER expands to MCCODE_NAME, i.e. whatever that resolved to.
    let flavor_upper = pick(
        Attribute::FlavorUpper,
        &overrides.flavor_upper,
        product_name_upper.as_str(),
    );

    FlavorProfile {
        flavor,
        product_name: pick(Attribute::ProductName, &overrides.product_name, d.product_name),
        release_date: pick(Attribute::ReleaseDate, &overrides.release_date, d.release_date),
        version: pick(Attribute::Version, &overrides.version, d.version),
        particle_kind: pick(
            Attribute::ParticleKind,
            &overrides.particle_kind,
            d.particle_kind,
        ),
        particle_code: pick(
            Attribute::ParticleCode,
            &overrides.particle_code,
            d.particle_code,
        ),
        library_env_var: pick(
            Attribute::LibraryEnvVar,
            &overrides.library_env_var,
            d.library_env_var,
        ),
        is_project_build: pick(
            Attribute::IsProjectBuild,
            &overrides.is_project_build,
            d.is_project_build,
        ),
        library_tag: pick(Attribute::LibraryTag, &overrides.library_tag, d.library_tag),
        product_name_upper,
        flavor_upper,
    }
}

fn pick<T, D>(attribute: Attribute, over: &Option<T>, default: D) -> T
where
    T: Clone + fmt::Debug,
    D: Into<T>,
{
    match over {
        Some(v) => {
            log::debug!("{} overridden: {:?}", attribute, v);
            v.clone()
        }
        None => default.into(),
    }
}

impl FlavorProfile {
    /// The flavor's built-in identity, no overrides applied.
    pub fn defaults(flavor: Flavor) -> Self {
        resolve(flavor, &Overrides::default())
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn product_name_upper(&self) -> &str {
        &self.product_name_upper
    }

    pub fn particle_kind(&self) -> &str {
        &self.particle_kind
    }

    pub fn particle_code(&self) -> i64 {
        self.particle_code
    }

    pub fn library_env_var(&self) -> &str {
        &self.library_env_var
    }

    pub fn flavor_upper(&self) -> &str {
        &self.flavor_upper
    }

    pub fn is_project_build(&self) -> bool {
        self.is_project_build
    }

    pub fn library_tag(&self) -> &str {
        &self.library_tag
    }

    pub fn get(&self, attribute: Attribute) -> Value {
        match attribute {
            Attribute::ProductName => Value::Str(self.product_name.clone()),
            Attribute::ReleaseDate => Value::Str(self.release_date.clone()),
            Attribute::Version => Value::Str(self.version.clone()),
            Attribute::ProductNameUpper => Value::Str(self.product_name_upper.clone()),
            Attribute::ParticleKind => Value::Str(self.particle_kind.clone()),
            Attribute::ParticleCode => Value::Int(self.particle_code),
            Attribute::LibraryEnvVar => Value::Str(self.library_env_var.clone()),
            Attribute::FlavorUpper => Value::Str(self.flavor_upper.clone()),
            Attribute::IsProjectBuild => Value::Flag(self.is_project_build),
            Attribute::LibraryTag => Value::Str(self.library_tag.clone()),
        }
    }

    /// All attributes with their resolved values, in header order.
    pub fn entries(&self) -> impl Iterator<Item = (Attribute, Value)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Installed support-library root, read from the variable named by
    /// `library_env_var` through `lookup`. Unset and empty both mean `None`.
    ///
    /// Callers normally pass `|name| std::env::var(name).ok()`.
    pub fn library_root<F>(&self, lookup: F) -> Option<PathBuf>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(&self.library_env_var) {
            Some(root) if !root.is_empty() => Some(PathBuf::from(root)),
            _ => {
                log::debug!("{} is not set", self.library_env_var);
                None
            }
        }
    }
}

impl fmt::Display for FlavorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (attribute, value) in self.entries() {
            writeln!(f, "{:<20} = {}", attribute.symbol(), value)?;
        }
        Ok(())
    }
}
