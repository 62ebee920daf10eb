//! Externally supplied values that take precedence over flavor defaults.

use crate::{Attribute, FlavorError, FlavorResult, Value};

/// Attribute values supplied before resolution.
///
/// An attribute is overridden iff its field is `Some`. Values are kept
/// verbatim: nothing here checks that a particle code is sensible or a
/// release date well-formed.
///
/// With the `serde` feature the JSON form accepts either field names or
/// preprocessor symbols as keys, e.g. `{"MCCODE_VERSION": "4.1"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Overrides {
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_STRING", skip_serializing_if = "Option::is_none")
    )]
    pub product_name: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_DATE", skip_serializing_if = "Option::is_none")
    )]
    pub release_date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_VERSION", skip_serializing_if = "Option::is_none")
    )]
    pub version: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_NAME", skip_serializing_if = "Option::is_none")
    )]
    pub product_name_upper: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_PARTICLE", skip_serializing_if = "Option::is_none")
    )]
    pub particle_kind: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_PARTICLE_CODE", skip_serializing_if = "Option::is_none")
    )]
    pub particle_code: Option<i64>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "MCCODE_LIBENV", skip_serializing_if = "Option::is_none")
    )]
    pub library_env_var: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "FLAVOR_UPPER", skip_serializing_if = "Option::is_none")
    )]
    pub flavor_upper: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "MCCODE_PROJECT",
            default,
            deserialize_with = "serde_flag::deserialize",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub is_project_build: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(alias = "FLAVOR_LIB", skip_serializing_if = "Option::is_none")
    )]
    pub library_tag: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Overrides::set`].
    pub fn with(mut self, attribute: Attribute, value: impl Into<Value>) -> FlavorResult<Self> {
        self.set(attribute, value)?;
        Ok(self)
    }

    /// Record an override. The value's kind must match the attribute's;
    /// no other conversion takes place.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<Value>) -> FlavorResult<()> {
        let value = value.into();
        let mismatch = |found: &Value| FlavorError::KindMismatch {
            attribute,
            expected: attribute.kind(),
            found: found.kind(),
        };

        match (attribute, value) {
            (Attribute::ParticleCode, Value::Int(n)) => self.particle_code = Some(n),
            (Attribute::IsProjectBuild, Value::Flag(b)) => self.is_project_build = Some(b),
            (attr, Value::Str(s)) => match self.str_slot(attr) {
                Some(slot) => *slot = Some(s),
                None => return Err(mismatch(&Value::Str(s))),
            },
            (_, other) => return Err(mismatch(&other)),
        }
        Ok(())
    }

    /// Record an override from raw text, parsed per the attribute's kind.
    pub fn set_raw(&mut self, attribute: Attribute, raw: &str) -> FlavorResult<()> {
        let value = attribute.parse_value(raw)?;
        self.set(attribute, value)
    }

    /// Record a compiler-style definition: `SYMBOL=VALUE`, or a bare
    /// `SYMBOL` which, as with `-D`, means `SYMBOL=1`.
    pub fn define(&mut self, definition: &str) -> FlavorResult<()> {
        let (name, raw) = match definition.split_once('=') {
            Some((name, raw)) => (name.trim(), raw),
            None => (definition.trim(), "1"),
        };
        if name.is_empty() {
            return Err(FlavorError::MalformedDefine(definition.to_string()));
        }
        let attribute: Attribute = name.parse()?;
        self.set_raw(attribute, raw)
    }

    pub fn get(&self, attribute: Attribute) -> Option<Value> {
        match attribute {
            Attribute::ParticleCode => self.particle_code.map(Value::Int),
            Attribute::IsProjectBuild => self.is_project_build.map(Value::Flag),
            attr => self.str_ref(attr).clone().map(Value::Str),
        }
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.get(attribute).is_some()
    }

    /// Overridden attributes with their values, in header order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Value)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(move |a| self.get(a).map(|v| (a, v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layer `other` on top of `self`; values present in `other` win.
    pub fn merge(&mut self, other: Overrides) {
        for (attribute, value) in other.iter() {
            // Kinds come from a well-typed Overrides, so this cannot mismatch.
            let _ = self.set(attribute, value);
        }
    }

    fn str_slot(&mut self, attribute: Attribute) -> Option<&mut Option<String>> {
        Some(match attribute {
            Attribute::ProductName => &mut self.product_name,
            Attribute::ReleaseDate => &mut self.release_date,
            Attribute::Version => &mut self.version,
            Attribute::ProductNameUpper => &mut self.product_name_upper,
            Attribute::ParticleKind => &mut self.particle_kind,
            Attribute::LibraryEnvVar => &mut self.library_env_var,
            Attribute::FlavorUpper => &mut self.flavor_upper,
            Attribute::LibraryTag => &mut self.library_tag,
            Attribute::ParticleCode | Attribute::IsProjectBuild => return None,
        })
    }

    fn str_ref(&self, attribute: Attribute) -> &Option<String> {
        const NONE: &Option<String> = &None;
        match attribute {
            Attribute::ProductName => &self.product_name,
            Attribute::ReleaseDate => &self.release_date,
            Attribute::Version => &self.version,
            Attribute::ProductNameUpper => &self.product_name_upper,
            Attribute::ParticleKind => &self.particle_kind,
            Attribute::LibraryEnvVar => &self.library_env_var,
            Attribute::FlavorUpper => &self.flavor_upper,
            Attribute::LibraryTag => &self.library_tag,
            Attribute::ParticleCode | Attribute::IsProjectBuild => NONE,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    /// `MCCODE_PROJECT` is `1` in the headers; accept `1`/`0` as well as JSON booleans.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Flag>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Flag::Bool(b)) => Ok(Some(b)),
            Some(Flag::Int(1)) => Ok(Some(true)),
            Some(Flag::Int(0)) => Ok(Some(false)),
            Some(Flag::Int(n)) => Err(D::Error::custom(format!(
                "MCCODE_PROJECT must be 0 or 1, got {}",
                n
            ))),
        }
    }
}
