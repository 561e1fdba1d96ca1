//! Template definitions for code generation
//!
//! The seed-data template keeps block tags on the same line as output text,
//! so no line is ever standalone and the rendered layout is exactly what is
//! written here.

/// Seed-data listing template
pub const SEED_DATA_TEMPLATE: &str = include_str!("templates/seed_data.hbs");
