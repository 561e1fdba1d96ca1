//! Tokenizer for C# class source
//!
//! Only the shapes needed to recognise `public class Name` and
//! `public Type Name { get; set; }` are modelled. Words are runs of
//! `[A-Za-z0-9_<>\[\]]`, string and character literals are single tokens,
//! every other non-space character is a one-character symbol, and comments
//! are skipped like whitespace.

/// Token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier-like run, including generic and array decoration
    Word,
    /// String or character literal, quotes and prefix included
    Literal,
    /// Any other single character
    Symbol,
}

/// A token borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Whitespace or a comment separates this token from the previous one
    pub spaced: bool,
}

impl<'a> Token<'a> {
    pub fn is_word(&self, text: &str) -> bool {
        self.kind == TokenKind::Word && self.text == text
    }

    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == TokenKind::Symbol && self.text.starts_with(symbol) && self.text.len() == symbol.len_utf8()
    }

    /// Word made only of `[A-Za-z0-9_]`
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Word && self.text.bytes().all(is_identifier_byte)
    }
}

pub fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_word_byte(b: u8) -> bool {
    is_identifier_byte(b) || matches!(b, b'<' | b'>' | b'[' | b']')
}

/// Streaming tokenizer over class source
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Tokenize the whole source
    pub fn tokenize(src: &'a str) -> Vec<Token<'a>> {
        Self::new(src).collect()
    }

    /// Skip whitespace and comments, reporting whether anything was skipped
    fn skip_trivia(&mut self) -> bool {
        let start = self.pos;

        loop {
            let rest = &self.src[self.pos..];

            if let Some(ch) = rest.chars().next().filter(|c| c.is_whitespace()) {
                self.pos += ch.len_utf8();
            } else if rest.starts_with("//") {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else if let Some(body) = rest.strip_prefix("/*") {
                self.pos += 2 + body.find("*/").map_or(body.len(), |end| end + 2);
            } else {
                break;
            }
        }

        self.pos > start
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let spaced = self.skip_trivia();
        let rest = &self.src[self.pos..];
        let first = rest.chars().next()?;

        let (kind, len) = if let Some(len) = literal_len(rest) {
            (TokenKind::Literal, len)
        } else if first.is_ascii() && is_word_byte(first as u8) {
            let len = rest.bytes().position(|b| !is_word_byte(b)).unwrap_or(rest.len());
            (TokenKind::Word, len)
        } else {
            (TokenKind::Symbol, first.len_utf8())
        };

        let text = &rest[..len];
        self.pos += len;

        Some(Token { kind, text, spaced })
    }
}

/// Byte length of the string or character literal at the start of `rest`.
///
/// Regular literals honour `\` escapes and end at the line break when left
/// open. Verbatim literals (`@"..."`) use `""` escapes and may span lines.
fn literal_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let prefix = bytes.iter().take_while(|&&b| b == b'@' || b == b'$').count();
    let quote = *bytes.get(prefix)?;

    if !matches!(quote, b'"' | b'\'') || (quote == b'\'' && prefix > 0) {
        return None;
    }
    let verbatim = bytes[..prefix].contains(&b'@');

    let mut i = prefix + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if !verbatim => i += 2,
            b'"' if verbatim && bytes.get(i + 1) == Some(&b'"') => i += 2,
            b'\n' if !verbatim => return Some(i),
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    Some(bytes.len())
}
