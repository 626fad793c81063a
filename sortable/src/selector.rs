use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::iter::Peekable;
use core::str::CharIndices;
use core::str::FromStr;

use crate::error::SelectorError;
use crate::{Document, NodeId};

/// A parsed selector used for the `items` and `handle` options.
///
/// Supported: comma-separated compound selectors made of a type selector (`li`, `*`), `#id`,
/// `.class`, `[attr]`, `[attr=value]` (value optionally quoted) and `:not(...)` over a list of
/// compound selectors. Combinators and every other pseudo-class are rejected at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    groups: Vec<Compound>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
    negations: Vec<Compound>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if !doc.tag(node).eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if doc.attribute(node, "id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| doc.has_class(node, c)) {
            return false;
        }
        let attributes_match = self.attributes.iter().all(|(name, value)| {
            match (doc.attribute(node, name), value) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
            }
        });
        attributes_match && !self.negations.iter().any(|n| n.matches(doc, node))
    }
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let groups = split_groups(source)
            .into_iter()
            .map(|(offset, part)| parse_compound(part, offset))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            source: source.trim().to_string(),
            groups,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.groups.iter().any(|g| g.matches(doc, node))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut s = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_ident(c) {
            break;
        }
        s.push(c);
        chars.next();
    }
    s
}

/// Splits on top-level commas, ignoring commas inside quotes or parentheses.
fn split_groups(source: &str) -> Vec<(usize, &str)> {
    let mut groups = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote = None;
    for (i, c) in source.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                groups.push((start, &source[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    groups.push((start, &source[start..]));
    groups
}

/// Byte offset in `s` of the `close` that balances an already consumed `open`,
/// skipping quoted text.
fn find_close(s: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == close && depth == 0 => return Some(i),
            None if c == close => depth -= 1,
            None if c == open => depth += 1,
            None => {}
        }
    }
    None
}

/// Advances `chars` past the character at byte offset `end`.
fn skip_through(chars: &mut Peekable<CharIndices<'_>>, end: usize) {
    for (j, _) in chars.by_ref() {
        if j == end {
            break;
        }
    }
}

fn parse_compound(part: &str, base: usize) -> Result<Compound, SelectorError> {
    let lead = part.len() - part.trim_start().len();
    let body = part.trim();
    if body.is_empty() {
        return Err(SelectorError::Empty);
    }
    let base = base + lead;
    let mut out = Compound::default();
    let mut chars = body.char_indices().peekable();

    while let Some(&(i, c)) = chars.peek() {
        match c {
            '*' if i == 0 => {
                chars.next();
            }
            c if is_ident(c) && i == 0 => {
                out.tag = Some(take_ident(&mut chars).to_ascii_lowercase());
            }
            '#' | '.' => {
                chars.next();
                let name = take_ident(&mut chars);
                if name.is_empty() {
                    return Err(SelectorError::UnexpectedChar {
                        ch: c,
                        offset: base + i,
                    });
                }
                if c == '#' {
                    out.id = Some(name);
                } else {
                    out.classes.push(name);
                }
            }
            '[' => {
                chars.next();
                let rest = &body[i + 1..];
                let Some(close) = find_close(rest, '[', ']') else {
                    return Err(SelectorError::Unterminated { offset: base + i });
                };
                let inner = &rest[..close];
                let (name, value) = match inner.split_once('=') {
                    Some((n, v)) => {
                        let v = v.trim();
                        let v = v
                            .strip_prefix('"')
                            .and_then(|v| v.strip_suffix('"'))
                            .or_else(|| v.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                            .unwrap_or(v);
                        (n.trim(), Some(v.to_string()))
                    }
                    None => (inner.trim(), None),
                };
                if name.is_empty() || !name.chars().all(is_ident) {
                    return Err(SelectorError::UnexpectedChar {
                        ch: '[',
                        offset: base + i,
                    });
                }
                out.attributes.push((name.to_ascii_lowercase(), value));
                skip_through(&mut chars, i + 1 + close);
            }
            ':' => {
                let Some(args) = body[i..].strip_prefix(":not(") else {
                    return Err(SelectorError::UnsupportedPseudo { offset: base + i });
                };
                let Some(close) = find_close(args, '(', ')') else {
                    return Err(SelectorError::Unterminated { offset: base + i });
                };
                let inner_base = base + i + ":not(".len();
                for (offset, part) in split_groups(&args[..close]) {
                    out.negations.push(parse_compound(part, inner_base + offset)?);
                }
                skip_through(&mut chars, i + ":not(".len() + close);
            }
            c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                return Err(SelectorError::Combinator { offset: base + i });
            }
            c => {
                return Err(SelectorError::UnexpectedChar {
                    ch: c,
                    offset: base + i,
                });
            }
        }
    }
    Ok(out)
}
