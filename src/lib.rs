//! Symbol-to-frequency schema generation for acoustic data transmission.
//!
//! Every symbol of a fixed text alphabet is assigned one or more audio
//! frequencies drawn from a ladder of valid bands. The resulting lookup
//! table is serialized as JSON for the audio encoder. Generation is
//! deterministic: the same profile always produces the same document.

pub mod alphabet;
pub mod bands;
pub mod config;
pub mod error;
pub mod generator;
pub mod io_utils;
pub mod profile;
pub mod schema;

pub use crate::config::BandPlan;
pub use crate::error::TonemapError;
pub use crate::generator::{banded_schema, cyclic_schema, mixed_schema};
pub use crate::profile::Profile;
pub use crate::schema::{FrequencyMap, Schema};
