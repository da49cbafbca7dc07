//! Fluent migration composer

use crate::scaffold::entity::EntityName;
use crate::scaffold::field_spec::{FieldSet, FieldSpec};
use crate::scaffold::helpers::TemplateHelpers;

/// `.field("title", .string, .required)`
///
/// Every column is required; there is no way to declare an optional one.
fn field_directive(field: &FieldSpec) -> String {
    format!(
        ".field(\"{}\", .{}, .required)",
        field.name,
        field.column_type()
    )
}

/// Compose the `Create<Entity>` migration
#[must_use]
pub fn compose_migration(entity: &EntityName, fields: &FieldSet) -> String {
    let plural = entity.plural();
    let directives = TemplateHelpers::continuation_lines(&fields.fragments(field_directive), 12);

    format!(
        r#"import Fluent

struct Create{entity}: Migration {{
    func prepare(on database: Database) -> EventLoopFuture<Void> {{
        return database.schema("{plural}")
            .id(){directives}
            .create()
    }}

    func revert(on database: Database) -> EventLoopFuture<Void> {{
        return database.schema("{plural}").delete()
    }}
}}
"#
    )
}
