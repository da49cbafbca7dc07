//! CRUD scaffold generator implementation
//!
//! Turns an entity name and `name:Type` field arguments into a Fluent model,
//! a route collection, a migration and two Leaf views.

pub mod entity;
pub mod field_spec;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use entity::EntityName;
pub use field_spec::{FieldSet, FieldSpec, ParseMode};
pub use generator::{ArtifactKind, ArtifactLayout, GeneratedFile, ScaffoldGenerator};
pub use helpers::TemplateHelpers;
