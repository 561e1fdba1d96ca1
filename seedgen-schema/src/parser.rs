//! Schema extraction from C# class source

use crate::scanner::{is_identifier_byte, Scanner, Token, TokenKind};
use crate::{Field, Result, Schema, DEFAULT_ENTITY_NAME};
use std::path::Path;

#[cfg(feature = "tokio")]
use tokio::fs;

/// Extracts the entity name and auto-properties from class source
pub struct SchemaExtractor;

impl SchemaExtractor {
    /// Extract a schema from class source text.
    ///
    /// The entity name comes from the first `public class <Name>`, falling back
    /// to `YourEntity`. Every `public <Type> <Name> { get; set; }` becomes a
    /// field, in source order, with its type kept verbatim.
    pub fn extract(source: &str) -> Schema {
        let tokens = Scanner::tokenize(source);

        let entity_name = (0..tokens.len())
            .find_map(|i| match_class(&tokens[i..]))
            .unwrap_or(DEFAULT_ENTITY_NAME);

        let mut schema = Schema::new(entity_name);
        let mut i = 0;
        while i < tokens.len() {
            match match_property(&tokens[i..]) {
                Some((field, consumed)) => {
                    log::debug!("Found property {} ({})", field.name, field.field_type);
                    schema.fields.push(field);
                    i += consumed;
                }
                None => i += 1,
            }
        }

        log::debug!(
            "Extracted {} field(s) for entity '{}'",
            schema.fields.len(),
            schema.entity_name
        );
        schema
    }

    /// Read and extract a class file
    #[cfg(feature = "tokio")]
    pub async fn extract_file(path: &Path) -> Result<Schema> {
        let contents = fs::read_to_string(path).await?;
        Ok(Self::extract(&contents))
    }

    /// Read and extract a class file (sync version)
    pub fn extract_file_sync(path: &Path) -> Result<Schema> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::extract(&contents))
    }
}

/// `public class <Name>` at the head of `tokens`
fn match_class<'a>(tokens: &[Token<'a>]) -> Option<&'a str> {
    match tokens {
        [public, class, name, ..]
            if public.is_word("public")
                && class.is_word("class")
                && class.spaced
                && name.spaced =>
        {
            // Generic decoration is not part of the name: `Box<T>` -> `Box`
            let text = name.text;
            let len = text
                .bytes()
                .position(|b| !is_identifier_byte(b))
                .unwrap_or(text.len());
            (len > 0).then(|| &text[..len])
        }
        _ => None,
    }
}

/// `public <Type> <Name> { get; set; }` at the head of `tokens`, with the
/// number of tokens it spans
fn match_property(tokens: &[Token<'_>]) -> Option<(Field, usize)> {
    match tokens {
        [public, ty, name, open, get, get_end, set, set_end, close, ..]
            if public.is_word("public")
                && ty.kind == TokenKind::Word
                && ty.spaced
                && name.is_identifier()
                && name.spaced
                && open.is_symbol('{')
                && get.is_word("get")
                && get_end.is_symbol(';')
                && !get_end.spaced
                && set.is_word("set")
                && set_end.is_symbol(';')
                && !set_end.spaced
                && close.is_symbol('}') =>
        {
            Some((Field::new(name.text, ty.text), 9))
        }
        _ => None,
    }
}
