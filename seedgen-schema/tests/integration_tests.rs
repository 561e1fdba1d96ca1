//! Integration tests for the full class -> CSV -> seed data workflow

use seedgen_schema::{build_sample, parse_csv, SchemaExtractor, SchemaStore};
use tempfile::TempDir;
use tokio::fs;

const ORDER_CLASS: &str = r#"
namespace Shop
{
    public class Order
    {
        public Guid Id { get; set; }
        public string Customer { get; set; }
        public int Quantity { get; set; }
        public bool Paid { get; set; }
        public string[] Notes { get; set; }
        public bool IsActive { get; set; }
    }
}
"#;

/// Helper function to create a project directory with a class file
async fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Order.cs"), ORDER_CLASS).await.unwrap();
    temp_dir
}

#[tokio::test]
async fn test_schema_survives_reload() {
    let temp_dir = create_project().await;
    let store = SchemaStore::new(temp_dir.path().join(".seedgen/schema.json"));

    let schema = SchemaExtractor::extract_file(&temp_dir.path().join("Order.cs")).await.unwrap();
    store.save(&schema).await.unwrap();

    let restored = store.load().await.unwrap().expect("schema was saved");
    assert_eq!(restored, schema);
    assert_eq!(restored.entity_name, "Order");
}

#[tokio::test]
async fn test_new_class_replaces_schema() {
    let temp_dir = create_project().await;
    let store = SchemaStore::new(temp_dir.path().join("schema.json"));

    store.save(&SchemaExtractor::extract(ORDER_CLASS)).await.unwrap();
    store
        .save(&SchemaExtractor::extract("public class Tag { public string Label { get; set; } }"))
        .await
        .unwrap();

    let restored = store.load().await.unwrap().unwrap();
    assert_eq!(restored.entity_name, "Tag");
    assert_eq!(restored.field_names(), vec!["Label"]);

    assert!(store.clear().await.unwrap());
    assert!(store.load().await.unwrap().is_none());
}

#[cfg(feature = "codegen")]
#[tokio::test]
async fn test_full_workflow() {
    use seedgen_schema::codegen::SeedDataGenerator;

    let temp_dir = create_project().await;
    let schema = SchemaExtractor::extract_file(&temp_dir.path().join("Order.cs")).await.unwrap();

    let sample = build_sample(&schema).unwrap();
    assert_eq!(sample.lines().next().unwrap(), "Id,Customer,Quantity,Paid,Notes,IsActive");

    let csv_path = temp_dir.path().join("orders.csv");
    fs::write(
        &csv_path,
        "Customer,Id,Quantity,Paid,Notes\n\
         \"ACME, Inc.\",aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee,3,TRUE,rush|gift\n\
         \n\
         Globex,ffffffff-0000-0000-0000-000000000000,many,no,\n",
    )
    .await
    .unwrap();

    let csv = parse_csv(&fs::read_to_string(&csv_path).await.unwrap());
    assert_eq!(csv.data_rows().len(), 2);

    let code = SeedDataGenerator::new().unwrap().generate(&schema, &csv).unwrap();
    let expected = r#"public static List<Order> SeedData => new List<Order>
{
    new Order {
        Id = new Guid("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"),
        IsActive = true,
        Customer = "ACME, Inc.",
        Quantity = 3,
        Paid = true,
        Notes = new string[] { "rush", "gift" },
    },
    new Order {
        Id = new Guid("ffffffff-0000-0000-0000-000000000000"),
        IsActive = true,
        Customer = "Globex",
        Quantity = 0,
        Paid = false,
        Notes = new string[] { "" },
    },
};"#;
    assert_eq!(code, expected);
}
