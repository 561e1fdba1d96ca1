//! Tests for schema extraction from class files

use seedgen_schema::{FieldKind, SchemaExtractor, SeedError};
use tempfile::TempDir;
use tokio::fs;

const PRODUCT_CLASS: &str = r#"
using System;
using System.Collections.Generic;

namespace Shop.Domain
{
    /// <summary>Catalog product</summary>
    public class Product : EntityBase
    {
        public Guid Id { get; set; }
        public string Sku { get; set; }
        public String DisplayName { get; set; }
        public Int32 Stock { get; set; }
        public Boolean IsActive { get; set; }
        public string[] Labels { get; set; }
        public List<string> Aliases { get; set; }
        public Guid? CategoryId { get; set; }
        public DateTime CreatedAt { get; set; }

        public void Touch() { }
    }
}
"#;

/// Helper function to write a class file into a fresh directory
async fn write_class_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Product.cs");
    fs::write(&path, content).await.unwrap();
    (temp_dir, path)
}

#[tokio::test]
async fn test_extract_file() {
    let (_temp_dir, path) = write_class_file(PRODUCT_CLASS).await;

    let schema = SchemaExtractor::extract_file(&path).await.unwrap();

    assert_eq!(schema.entity_name, "Product");
    assert_eq!(
        schema.field_names(),
        vec!["Id", "Sku", "DisplayName", "Stock", "IsActive", "Labels", "Aliases", "CreatedAt"]
    );
}

#[tokio::test]
async fn test_types_are_preserved_verbatim() {
    let (_temp_dir, path) = write_class_file(PRODUCT_CLASS).await;
    let schema = SchemaExtractor::extract_file(&path).await.unwrap();

    let types: Vec<&str> = schema.fields.iter().map(|f| f.field_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["Guid", "string", "String", "Int32", "Boolean", "string[]", "List<string>", "DateTime"]
    );

    let kinds: Vec<FieldKind> = schema.fields.iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Guid,
            FieldKind::String,
            FieldKind::String,
            FieldKind::Int,
            FieldKind::Bool,
            FieldKind::StringArray,
            FieldKind::Other,
            FieldKind::Other,
        ]
    );
}

#[test]
fn test_extract_file_sync() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Tag.cs");
    std::fs::write(&path, "public class Tag { public string Label { get; set; } }").unwrap();

    let schema = SchemaExtractor::extract_file_sync(&path).unwrap();
    assert_eq!(schema.entity_name, "Tag");
    assert_eq!(schema.field_names(), vec!["Label"]);
}

#[tokio::test]
async fn test_missing_class_file() {
    let result = SchemaExtractor::extract_file(std::path::Path::new("/non/existent/Entity.cs")).await;
    assert!(matches!(result.unwrap_err(), SeedError::Io(_)));
}

#[test]
fn test_n_declarations_yield_n_fields_in_order() {
    let names: Vec<String> = (0..25).map(|i| format!("Field{}", i)).collect();
    let types = ["int", "string", "bool", "Guid", "string[]"];

    let mut source = String::from("public class Wide\n{\n");
    for (i, name) in names.iter().enumerate() {
        source.push_str(&format!("    public {} {} {{ get; set; }}\n", types[i % types.len()], name));
    }
    source.push('}');

    let schema = SchemaExtractor::extract(&source);
    assert_eq!(schema.len(), names.len());
    for (i, field) in schema.fields.iter().enumerate() {
        assert_eq!(field.name, names[i]);
        assert_eq!(field.field_type, types[i % types.len()]);
    }
}

#[test]
fn test_source_without_properties() {
    let schema = SchemaExtractor::extract("public class Empty { }");
    assert_eq!(schema.entity_name, "Empty");
    assert!(schema.is_empty());

    let schema = SchemaExtractor::extract("");
    assert_eq!(schema.entity_name, "YourEntity");
    assert!(schema.is_empty());
}

#[test]
fn test_comment_markers_in_initializers_do_not_hide_properties() {
    let source = r#"
public class Book
{
    public string Glob { get; set; } = "src/*.cs";
    public string Title { get; set; }
    public int Pages { get; set; }
}
"#;
    let schema = SchemaExtractor::extract(source);
    assert_eq!(schema.field_names(), vec!["Glob", "Title", "Pages"]);

    let schema = SchemaExtractor::extract(
        r#"public string Url { get; set; } = "http://x"; public string Name { get; set; }"#,
    );
    assert_eq!(schema.field_names(), vec!["Url", "Name"]);

    let schema = SchemaExtractor::extract(
        r#"public string Path { get; set; } = @"C:\""temp""\*"; public char Sep { get; set; } = '/'; public bool Done { get; set; }"#,
    );
    assert_eq!(schema.field_names(), vec!["Path", "Sep", "Done"]);
}

#[test]
fn test_comments_still_hide_declarations() {
    let source = r#"
public class Book
{
    // public string Draft { get; set; }
    /* public string Old { get; set; } */
    public string Title { get; set; }
}
"#;
    assert_eq!(SchemaExtractor::extract(source).field_names(), vec!["Title"]);
}
