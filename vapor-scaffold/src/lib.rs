//! vapor-scaffold: CRUD scaffold generator for Vapor applications
//!
//! Given an entity name and `name:Type` field declarations, generates a
//! Fluent model, a route collection, a migration and two Leaf views.
//!
//! ```
//! use vapor_scaffold::scaffold::{ParseMode, ScaffoldGenerator};
//!
//! let generator =
//!     ScaffoldGenerator::new("Post", &["title:String", "body:String"], ParseMode::Lenient)?;
//! let files = generator.generate();
//! assert_eq!(files.len(), 5);
//! assert!(files[0].content.contains("@Field(key: \"title\") var title: String"));
//! # Ok::<(), vapor_scaffold::ScaffoldError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod sink;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use scaffold::{
    ArtifactKind, EntityName, FieldSet, FieldSpec, GeneratedFile, ParseMode, ScaffoldGenerator,
};
pub use sink::{FileSink, FsSink};
