//! CRUD scaffold generator orchestrator
//!
//! Coordinates the composers to produce every file of a scaffold:
//! - Model (`Sources/App/Models/<Entity>.swift`)
//! - Controller (`Sources/App/Controllers/<Entity>Controller.swift`)
//! - Migration (`Sources/App/Migrations/Create<Entity>.swift`)
//! - List view (`Resources/Views/<plural>/index.leaf`)
//! - Create view (`Resources/Views/<plural>/create.leaf`)

use super::entity::EntityName;
use super::field_spec::{FieldSet, ParseMode};
use super::templates::{
    compose_create_view, compose_handler, compose_list_view, compose_migration, compose_model,
    compose_views, Views,
};
use crate::error::Result;
use std::fmt;
use std::path::PathBuf;

/// File extensions used for generated paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Extension of model, controller and migration files
    pub source_extension: String,
    /// Extension of view templates
    pub view_extension: String,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            source_extension: "swift".to_string(),
            view_extension: "leaf".to_string(),
        }
    }
}

/// Kind of generated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Fluent model class
    Model,
    /// Route collection with the CRUD handlers
    Controller,
    /// Schema migration
    Migration,
    /// Leaf list view
    ListView,
    /// Leaf create form
    CreateView,
}

impl ArtifactKind {
    /// Every kind, in generation order
    pub const ALL: [Self; 5] = [
        Self::Model,
        Self::Controller,
        Self::Migration,
        Self::ListView,
        Self::CreateView,
    ];

    /// Path of this artifact relative to the project root
    #[must_use]
    pub fn path(self, entity: &EntityName, layout: &ArtifactLayout) -> PathBuf {
        let ext = &layout.source_extension;
        let view_ext = &layout.view_extension;
        let plural = entity.plural();
        let path = match self {
            Self::Model => format!("Sources/App/Models/{entity}.{ext}"),
            Self::Controller => format!("Sources/App/Controllers/{entity}Controller.{ext}"),
            Self::Migration => format!("Sources/App/Migrations/Create{entity}.{ext}"),
            Self::ListView => format!("Resources/Views/{plural}/index.{view_ext}"),
            Self::CreateView => format!("Resources/Views/{plural}/create.{view_ext}"),
        };
        PathBuf::from(path)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Migration => "migration",
            Self::ListView => "list view",
            Self::CreateView => "create view",
        };
        f.write_str(label)
    }
}

/// CRUD scaffold generator
#[derive(Debug, Clone)]
pub struct ScaffoldGenerator {
    /// Entity name (e.g., "Post")
    entity: EntityName,
    /// Field declarations, in argument order
    fields: FieldSet,
    /// File extensions for generated paths
    layout: ArtifactLayout,
}

impl ScaffoldGenerator {
    /// Create a new scaffold generator from raw arguments
    ///
    /// # Arguments
    ///
    /// * `entity` - Name of the entity (e.g., "Post")
    /// * `field_args` - Field arguments (e.g., `["title:String", "views:Int"]`)
    /// * `mode` - Whether malformed field arguments are dropped or rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entity name is empty
    /// - A field argument is malformed and `mode` is [`ParseMode::Strict`]
    pub fn new<S: AsRef<str>>(entity: &str, field_args: &[S], mode: ParseMode) -> Result<Self> {
        let entity = EntityName::new(entity)?;
        let fields = FieldSet::parse(field_args, mode)?;
        Ok(Self::from_parts(entity, fields))
    }

    /// Create a generator from an already-parsed entity and field set
    #[must_use]
    pub fn from_parts(entity: EntityName, fields: FieldSet) -> Self {
        Self {
            entity,
            fields,
            layout: ArtifactLayout::default(),
        }
    }

    /// Use a different set of file extensions
    #[must_use]
    pub fn with_layout(mut self, layout: ArtifactLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The entity being scaffolded
    #[must_use]
    pub const fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// The parsed field declarations
    #[must_use]
    pub const fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Generate all scaffold files
    ///
    /// Files come back in a fixed order: model, controller, migration, list
    /// view, create view.
    #[must_use]
    pub fn generate(&self) -> Vec<GeneratedFile> {
        let Views { list, create } = compose_views(&self.entity, &self.fields);

        vec![
            self.file(ArtifactKind::Model, compose_model(&self.entity, &self.fields)),
            self.file(ArtifactKind::Controller, compose_handler(&self.entity, &self.fields)),
            self.file(ArtifactKind::Migration, compose_migration(&self.entity, &self.fields)),
            self.file(ArtifactKind::ListView, list),
            self.file(ArtifactKind::CreateView, create),
        ]
    }

    /// Generate a single file
    #[must_use]
    pub fn generate_one(&self, kind: ArtifactKind) -> GeneratedFile {
        let content = match kind {
            ArtifactKind::Model => compose_model(&self.entity, &self.fields),
            ArtifactKind::Controller => compose_handler(&self.entity, &self.fields),
            ArtifactKind::Migration => compose_migration(&self.entity, &self.fields),
            ArtifactKind::ListView => compose_list_view(&self.entity),
            ArtifactKind::CreateView => compose_create_view(&self.entity, &self.fields),
        };
        self.file(kind, content)
    }

    fn file(&self, kind: ArtifactKind, content: String) -> GeneratedFile {
        tracing::debug!(entity = %self.entity, %kind, bytes = content.len(), "composed artifact");
        let entity = &self.entity;
        let description = match kind {
            ArtifactKind::Model => format!("Fluent model for {entity}"),
            ArtifactKind::Controller => format!("Route collection for {entity}"),
            ArtifactKind::Migration => format!("Migration creating {}", entity.plural()),
            ArtifactKind::ListView => format!("List view for {entity}"),
            ArtifactKind::CreateView => format!("Create form for {entity}"),
        };
        GeneratedFile {
            kind,
            path: kind.path(entity, &self.layout),
            content,
            description,
        }
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Which artifact this is
    pub kind: ArtifactKind,
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}
