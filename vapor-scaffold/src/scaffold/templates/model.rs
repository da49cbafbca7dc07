//! Fluent model composer

use crate::scaffold::entity::EntityName;
use crate::scaffold::field_spec::{FieldSet, FieldSpec};
use crate::scaffold::helpers::TemplateHelpers;
use std::fmt::Write;

/// `@Field(key: "title") var title: String`
fn field_declaration(field: &FieldSpec) -> String {
    format!(
        "@Field(key: \"{name}\") var {name}: {ty}",
        name = field.name,
        ty = field.type_name
    )
}

/// `title: String`
fn init_parameter(field: &FieldSpec) -> String {
    format!("{}: {}", field.name, field.type_name)
}

/// `self.title = title`
fn init_assignment(field: &FieldSpec) -> String {
    format!("self.{0} = {0}", field.name)
}

/// Compose the model class for `entity`
///
/// One `@Field` declaration per field in input order, an `@ID` identity,
/// an empty initializer and a memberwise initializer taking an optional id.
/// Type tokens are emitted verbatim; the output only compiles if they name
/// real Swift types.
#[must_use]
pub fn compose_model(entity: &EntityName, fields: &FieldSet) -> String {
    let plural = entity.plural();

    let declarations = fields.fragments(field_declaration);
    let declarations = if declarations.is_empty() {
        String::new()
    } else {
        format!("    {}\n\n", TemplateHelpers::join_lines(&declarations, 4))
    };

    let parameters = fields
        .fragments(init_parameter)
        .iter()
        .fold(String::new(), |mut out, param| {
            let _ = write!(out, ", {param}");
            out
        });

    let assignments = TemplateHelpers::continuation_lines(&fields.fragments(init_assignment), 8);

    format!(
        r#"import Vapor
import Fluent

final class {entity}: Model, Content {{
    static let schema = "{plural}"

    @ID(key: .id)
    var id: UUID?

{declarations}    init() {{ }}

    init(id: UUID? = nil{parameters}) {{
        self.id = id{assignments}
    }}
}}
"#
    )
}
