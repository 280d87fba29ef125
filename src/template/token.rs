//! Template tokenizer
//!
//! Splits a template into literal text and `{NAME}` / `{NAME_NN}` tokens in a
//! single left-to-right pass. A token name starts with `A-Z` and continues
//! with `A-Z`, `0-9` or `_`. Anything else in braces is literal text, so
//! `{{MES}` is a literal `{` followed by the `MES` token.

/// A piece of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged
    Literal(&'a str),
    /// A placeholder; `raw` includes the braces
    Token { name: &'a str, raw: &'a str },
}

/// Iterator over the segments of a template
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let bytes = self.input.as_bytes();
        let mut search = self.pos;

        while let Some(offset) = self.input[search..].find('{') {
            let open = search + offset;
            if let Some(close) = token_end(bytes, open) {
                if open > self.pos {
                    let literal = &self.input[self.pos..open];
                    self.pos = open;
                    return Some(Segment::Literal(literal));
                }
                self.pos = close + 1;
                return Some(Segment::Token {
                    name: &self.input[open + 1..close],
                    raw: &self.input[open..=close],
                });
            }
            search = open + 1;
        }

        let literal = &self.input[self.pos..];
        self.pos = self.input.len();
        Some(Segment::Literal(literal))
    }
}

/// Index of the closing brace when a valid token starts at `open`
fn token_end(bytes: &[u8], open: usize) -> Option<usize> {
    let first = *bytes.get(open + 1)?;
    if !first.is_ascii_uppercase() {
        return None;
    }

    let mut i = open + 2;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'}' => return Some(i),
            b'A'..=b'Z' | b'0'..=b'9' | b'_' => i += 1,
            _ => return None,
        }
    }
    None
}

/// Names of all tokens in a template, in order of appearance
pub fn token_names(template: &str) -> impl Iterator<Item = &str> {
    Tokenizer::new(template).filter_map(|segment| match segment {
        Segment::Token { name, .. } => Some(name),
        Segment::Literal(_) => None,
    })
}

/// Token name for the entry at a 1-based position: `CONTA_01`, `PIX_12`, `CONTA_100`
pub fn positional_token(prefix: &str, position: usize) -> String {
    format!("{}_{:02}", prefix, position)
}
