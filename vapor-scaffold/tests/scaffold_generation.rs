//! Integration tests for scaffold generation

use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vapor_scaffold::scaffold::templates::{
    compose_handler, compose_migration, compose_model, compose_views,
};
use vapor_scaffold::{
    ArtifactKind, EntityName, FieldSet, FileSink, FsSink, ParseMode, ScaffoldGenerator,
};

fn generator(entity: &str, fields: &[&str]) -> ScaffoldGenerator {
    ScaffoldGenerator::new(entity, fields, ParseMode::Lenient).unwrap()
}

fn content(generator: &ScaffoldGenerator, kind: ArtifactKind) -> String {
    generator.generate_one(kind).content
}

/// The `Post(title, body)` scenario end to end
#[test]
fn test_post_scenario() {
    let generator = generator("Post", &["title:String", "body:String"]);
    let files = generator.generate();
    assert_eq!(files.len(), 5);

    let model = &files[0].content;
    let title = model.find("@Field(key: \"title\") var title: String").unwrap();
    let body = model.find("@Field(key: \"body\") var body: String").unwrap();
    assert!(title < body);
    assert!(model.contains("@ID(key: .id)\n    var id: UUID?"));
    assert!(model.contains("init() { }"));
    assert!(model.contains("init(id: UUID? = nil, title: String, body: String)"));

    let controller = &files[1].content;
    assert!(controller.contains("routes.grouped(\"posts\")"));

    let migration = &files[2].content;
    assert_eq!(migration.matches(".required)").count(), 2);
    assert!(migration.contains("database.schema(\"posts\")"));

    assert!(files[3].content.contains("#for(post in posts)"));
    assert!(files[4].content.contains("<form action=\"/posts\" method=\"post\">"));
}

#[test]
fn test_pluralization_is_naive() {
    let generator = generator("Category", &["label:String"]);
    let files = generator.generate();

    assert!(files[0].content.contains("static let schema = \"categorys\""));
    assert!(files[2].content.contains("database.schema(\"categorys\")"));
    assert_eq!(files[3].path, PathBuf::from("Resources/Views/categorys/index.leaf"));
    assert!(files[4].content.contains("action=\"/categorys\""));
}

#[test]
fn test_malformed_fields_are_dropped() {
    let generator = generator("Foo", &["title:String", "bad_entry", "count:Int"]);
    assert_eq!(generator.fields().len(), 2);

    let migration = content(&generator, ArtifactKind::Migration);
    assert!(migration.contains(".field(\"title\", .string, .required)"));
    assert!(migration.contains(".field(\"count\", .int, .required)"));
    assert!(!migration.contains("bad_entry"));
}

#[test]
fn test_duplicate_field_overwrites() {
    let generator = generator("Foo", &["title:String", "title:Int"]);
    assert_eq!(generator.fields().len(), 1);

    let model = content(&generator, ArtifactKind::Model);
    assert_eq!(model.matches("@Field(").count(), 1);
    assert!(model.contains("var title: Int"));
}

#[test]
fn test_empty_field_set_keeps_structure() {
    let generator = generator("Foo", &["bad_entry"]);
    assert!(generator.fields().is_empty());

    let files = generator.generate();
    assert_eq!(files.len(), 5);

    let model = &files[0].content;
    assert!(model.contains("final class Foo: Model, Content {"));
    assert!(model.contains("init(id: UUID? = nil) {"));
    assert!(!model.contains("nil, )"));

    let controller = &files[1].content;
    assert!(controller.contains("func update(req: Request)"));

    let migration = &files[2].content;
    assert!(migration.contains(".id()\n            .create()"));

    let create_view = &files[4].content;
    assert!(create_view.contains("<button type=\"submit\">Create</button>"));
    assert!(!create_view.contains("<input"));

    for file in &files {
        assert_eq!(
            file.content.matches('{').count(),
            file.content.matches('}').count(),
            "unbalanced braces in {}",
            file.path.display()
        );
    }
}

#[test]
fn test_write_all_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let sink = FsSink::new(temp_dir.path());
    let generator = generator("Post", &["title:String", "body:String"]);
    let files = generator.generate();

    let written = sink.write_all(&files).unwrap();

    assert_eq!(written.len(), 5);
    for (file, path) in files.iter().zip(&written) {
        assert_eq!(path, &temp_dir.path().join(&file.path));
        assert_eq!(fs::read_to_string(path).unwrap(), file.content);
    }
}

#[test]
fn test_write_failure_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    // A file where the views directory should be blocks the last two writes
    fs::write(temp_dir.path().join("Resources"), "").unwrap();
    let sink = FsSink::new(temp_dir.path());
    let files = generator("Post", &["title:String"]).generate();

    assert!(sink.write_all(&files).is_err());
    assert!(temp_dir.path().join("Sources/App/Models/Post.swift").is_file());
    assert!(temp_dir.path().join("Sources/App/Migrations/CreatePost.swift").is_file());
}

fn field_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", "[A-Z][a-zA-Z]{0,8}"), 0..8)
}

proptest! {
    #[test]
    fn prop_composers_are_deterministic(
        entity in "[A-Z][a-zA-Z]{0,10}",
        fields in field_strategy(),
    ) {
        let entity = EntityName::new(entity).unwrap();
        let set: FieldSet = fields
            .iter()
            .map(|(name, ty)| vapor_scaffold::FieldSpec::new(name.as_str(), ty.as_str()))
            .collect();

        prop_assert_eq!(compose_model(&entity, &set), compose_model(&entity, &set));
        prop_assert_eq!(compose_handler(&entity, &set), compose_handler(&entity, &set));
        prop_assert_eq!(compose_migration(&entity, &set), compose_migration(&entity, &set));
        prop_assert_eq!(compose_views(&entity, &set), compose_views(&entity, &set));
    }

    #[test]
    fn prop_one_fragment_per_field(
        entity in "[A-Z][a-zA-Z]{0,10}",
        fields in field_strategy(),
    ) {
        let args: Vec<String> = fields.iter().map(|(name, ty)| format!("{name}:{ty}")).collect();
        let generator = ScaffoldGenerator::new(&entity, &args, ParseMode::Strict).unwrap();
        let count = generator.fields().len();
        let files = generator.generate();

        prop_assert_eq!(files[0].content.matches("@Field(key: ").count(), count);
        prop_assert_eq!(files[1].content.matches("try req.content.get(").count(), count);
        prop_assert_eq!(files[2].content.matches(".required)").count(), count);
        prop_assert_eq!(files[4].content.matches("<label for=").count(), count);
        prop_assert_eq!(files[4].content.matches("<input type=\"text\"").count(), count);

        let model = &files[0].content;
        let positions: Vec<usize> = generator
            .fields()
            .iter()
            .map(|f| model.find(&format!("@Field(key: \"{}\")", f.name)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
