//! Domain models for validated graph data models.
//!
//! The types in this module are only ever constructed by the validation
//! pass in [`crate::validation`]; downstream consumers treat them as
//! immutable values. Raw, unvalidated input lives in [`candidate`].

pub mod candidate;
pub mod data_model;
pub mod enums;
pub mod node;
pub mod property;
pub mod relationship;

pub use data_model::DataModel;
pub use enums::PropertyType;
pub use node::Node;
pub use property::Property;
pub use relationship::Relationship;
