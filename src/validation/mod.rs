//! Validation and normalization of candidate graph data models.
//!
//! The single entry point is [`validate`]: it takes a raw
//! [`DataModelData`](crate::models::candidate::DataModelData) and a
//! [`ValidationContext`], runs every entity-level and model-level check
//! without short-circuiting, and either returns a normalized
//! [`ValidatedModel`] or a [`ValidationReport`] listing every finding with
//! a typed [`Location`].

pub mod context;
pub mod data_model;
pub mod error;
mod node;
mod property;
mod relationship;

pub use context::ValidationContext;
pub use data_model::{ValidatedModel, validate};
pub use error::{
    EntityField, ErrorKind, GlobalCheck, Location, PropertyField, ValidationError,
    ValidationReport,
};
