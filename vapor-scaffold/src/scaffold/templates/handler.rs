//! Route collection (controller) composer

use crate::scaffold::entity::EntityName;
use crate::scaffold::field_spec::{FieldSet, FieldSpec};
use crate::scaffold::helpers::TemplateHelpers;

/// Compose the controller for `entity`
///
/// Routes are grouped under the plural path: `index` and `create` on the
/// collection, `show`, `update` and `delete` under `:id`. The update method
/// decodes every field from the request body at its own key.
#[must_use]
pub fn compose_handler(entity: &EntityName, fields: &FieldSet) -> String {
    let lower = entity.lower();
    let plural = entity.plural();

    let update_assignment = |field: &FieldSpec| {
        format!(
            "{lower}.{name} = try req.content.get({ty}.self, at: \"{name}\")",
            name = field.name,
            ty = field.type_name
        )
    };
    let assignments = TemplateHelpers::continuation_lines(&fields.fragments(update_assignment), 16);

    format!(
        r#"import Vapor
import Fluent

final class {entity}Controller: RouteCollection {{
    func boot(routes: RoutesBuilder) throws {{
        let {plural}Route = routes.grouped("{plural}")
        {plural}Route.get(use: index)
        {plural}Route.post(use: create)
        {plural}Route.group(":id") {{ {lower} in
            {lower}.get(use: show)
            {lower}.put(use: update)
            {lower}.delete(use: delete)
        }}
    }}

    func index(req: Request) throws -> EventLoopFuture<[{entity}]> {{
        return {entity}.query(on: req.db).all()
    }}

    func create(req: Request) throws -> EventLoopFuture<{entity}> {{
        let {lower} = try req.content.decode({entity}.self)
        return {lower}.save(on: req.db).map {{ {lower} }}
    }}

    func show(req: Request) throws -> EventLoopFuture<{entity}> {{
        return {entity}.find(req.parameters.get("id"), on: req.db)
            .unwrap(or: Abort(.notFound))
    }}

    func update(req: Request) throws -> EventLoopFuture<HTTPStatus> {{
        return {entity}.find(req.parameters.get("id"), on: req.db)
            .unwrap(or: Abort(.notFound)).flatMap {{ {lower} in{assignments}
                return {lower}.save(on: req.db).transform(to: .ok)
            }}
    }}

    func delete(req: Request) throws -> EventLoopFuture<HTTPStatus> {{
        return {entity}.find(req.parameters.get("id"), on: req.db)
            .unwrap(or: Abort(.notFound))
            .flatMap {{ {lower} in
                return {lower}.delete(on: req.db).transform(to: .ok)
            }}
    }}
}}
"#
    )
}
