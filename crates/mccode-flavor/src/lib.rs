#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
#![forbid(unsafe_code)]

//! Identity constants for the two McCode flavors.
//!
//! A [`FlavorProfile`] is built once by [`resolve`] from a [`Flavor`] and a
//! set of [`Overrides`]. Every attribute present in the overrides is taken
//! verbatim; everything else falls back to the flavor's built-in table.

mod attribute;
pub mod defaults;
mod error;
mod flavor;
mod overrides;
mod profile;
pub mod render;
mod validate;

pub use attribute::{Attribute, Value, ValueKind};
pub use defaults::Defaults;
pub use error::{FlavorError, FlavorResult};
pub use flavor::Flavor;
pub use overrides::Overrides;
pub use profile::{resolve, FlavorProfile};
pub use validate::{Issue, Severity};
