use super::state::require_schema;
use anyhow::Result;
use seedgen_schema::{Schema, SchemaStore};

/// Output format for the loaded schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
    Markdown,
}

pub async fn run(store: &SchemaStore, format: OutputFormat) -> Result<()> {
    let schema = require_schema(store).await?;
    print!("{}", render(&schema, format)?);
    Ok(())
}

pub fn render(schema: &Schema, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(schema)?),
        OutputFormat::Yaml => serde_yaml::to_string(schema)?,
        OutputFormat::Table => render_table(schema),
        OutputFormat::Markdown => render_markdown(schema),
    };
    Ok(output)
}

fn render_table(schema: &Schema) -> String {
    let name_width = schema
        .fields
        .iter()
        .map(|f| f.name.len())
        .chain(std::iter::once("Field".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("Entity: {}\n\n", schema.resolved_entity_name());
    out.push_str(&format!("{:<width$}  Type\n", "Field", width = name_width));
    out.push_str(&format!("{}  ----\n", "-".repeat(name_width)));
    for field in &schema.fields {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            field.name,
            field.field_type,
            width = name_width
        ));
    }
    out
}

fn render_markdown(schema: &Schema) -> String {
    let mut out = format!("# {}\n\n", schema.resolved_entity_name());
    out.push_str("| Field | Type | CSV format |\n");
    out.push_str("|-------|------|------------|\n");
    for tip in schema.format_tips() {
        out.push_str(&format!("| {} | `{}` | {} |\n", tip.name, tip.field_type, tip.hint));
    }
    out
}
