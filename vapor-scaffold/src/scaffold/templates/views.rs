//! Leaf view composers

use crate::scaffold::entity::EntityName;
use crate::scaffold::field_spec::{FieldSet, FieldSpec};
use crate::scaffold::helpers::TemplateHelpers;

/// The two Leaf views generated for an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    /// `index.leaf`: one list item per entity
    pub list: String,
    /// `create.leaf`: form with one label and input per field
    pub create: String,
}

/// Compose the list view
///
/// Each item renders `#(<entity>.name)` regardless of the declared fields,
/// so the reference dangles when the entity has no `name` field.
#[must_use]
pub fn compose_list_view(entity: &EntityName) -> String {
    let lower = entity.lower();
    let plural = entity.plural();

    format!(
        r#"#extend("base") {{
    #export("title") {{ {entity} Index }}
    #export("body") {{
        <h1>{entity} Index</h1>
        <ul>
            #for({lower} in {plural}) {{
                <li>#({lower}.name)</li>
            }}
        </ul>
    }}
}}
"#
    )
}

/// Label and text input for one field; the input kind is always `text`
fn form_field(field: &FieldSpec) -> [String; 2] {
    let name = &field.name;
    let label = TemplateHelpers::capitalize(name);
    [
        format!("<label for=\"{name}\">{label}:</label>"),
        format!("<input type=\"text\" id=\"{name}\" name=\"{name}\">"),
    ]
}

/// Compose the create view: a form posting to the collection path
#[must_use]
pub fn compose_create_view(entity: &EntityName, fields: &FieldSet) -> String {
    let action = TemplateHelpers::to_route_path(entity.as_str());
    let lines: Vec<String> = fields.iter().flat_map(form_field).collect();
    let form_fields = TemplateHelpers::continuation_lines(&lines, 12);

    format!(
        r#"#extend("base") {{
    #export("title") {{ Create {entity} }}
    #export("body") {{
        <h1>Create {entity}</h1>
        <form action="{action}" method="post">{form_fields}
            <button type="submit">Create</button>
        </form>
    }}
}}
"#
    )
}

/// Compose both views
#[must_use]
pub fn compose_views(entity: &EntityName, fields: &FieldSet) -> Views {
    Views {
        list: compose_list_view(entity),
        create: compose_create_view(entity, fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_view() {
        let entity = EntityName::new("Post").unwrap();
        let content = compose_list_view(&entity);

        assert!(content.starts_with("#extend(\"base\") {"));
        assert!(content.contains("#export(\"title\") { Post Index }"));
        assert!(content.contains("#for(post in posts) {"));
        assert!(content.contains("<li>#(post.name)</li>"));
    }

    #[test]
    fn test_list_view_ignores_fields() {
        let entity = EntityName::new("Post").unwrap();
        let with_fields = compose_views(&entity, &FieldSet::parse_lenient(&["title:String"]));
        let without = compose_views(&entity, &FieldSet::new());
        assert_eq!(with_fields.list, without.list);
    }

    #[test]
    fn test_create_view_document() {
        let entity = EntityName::new("Post").unwrap();
        let fields = FieldSet::parse_lenient(&["title:String", "views:Int"]);
        let expected = r#"#extend("base") {
    #export("title") { Create Post }
    #export("body") {
        <h1>Create Post</h1>
        <form action="/posts" method="post">
            <label for="title">Title:</label>
            <input type="text" id="title" name="title">
            <label for="views">Views:</label>
            <input type="text" id="views" name="views">
            <button type="submit">Create</button>
        </form>
    }
}
"#;
        assert_eq!(compose_create_view(&entity, &fields), expected);
    }

    #[test]
    fn test_create_view_without_fields() {
        let entity = EntityName::new("Post").unwrap();
        let content = compose_create_view(&entity, &FieldSet::new());

        assert!(content.contains(
            "<form action=\"/posts\" method=\"post\">\n            <button type=\"submit\">Create</button>"
        ));
        assert!(!content.contains("<label"));
    }
}
