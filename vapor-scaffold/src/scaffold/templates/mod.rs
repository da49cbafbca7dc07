//! Artifact composers
//!
//! Pure functions from an entity name and its fields to the text of each
//! generated Swift or Leaf file. Nothing here performs I/O, and the same
//! input always yields the same output.

pub mod handler;
pub mod migration;
pub mod model;
pub mod views;

pub use handler::compose_handler;
pub use migration::compose_migration;
pub use model::compose_model;
pub use views::{compose_create_view, compose_list_view, compose_views, Views};
