//! Path expressions over a record's JSON document.
//!
//! The language is deliberately small: member access and indexing.
//!
//! ```text
//! Placement.AvailabilityZone
//! NetworkInterfaces[0].PrivateIpAddress
//! SecurityGroups[-1]["GroupName"]
//! ```
//!
//! Parsing reports syntax problems as [`ExprError`]. Evaluation never fails;
//! a path that leads nowhere yields `None`.

use serde_json::Value;
use thiserror::Error;

/// Syntax error in a path expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at position {position}")]
pub struct ExprError {
    /// Byte offset into the expression
    pub position: usize,
    pub message: String,
}

impl ExprError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member, from `.name`, a leading `name` or `["name"]`
    Member(String),
    /// Array element; negative values count from the end
    Index(i64),
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Parse an expression.
    pub fn parse(expression: &str) -> Result<Self, ExprError> {
        Parser::new(expression).parse()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walk `document` along the path.
    pub fn evaluate<'v>(&self, document: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(document, |current, segment| match segment {
                Segment::Member(name) => current.as_object()?.get(name),
                Segment::Index(index) => {
                    let items = current.as_array()?;
                    let position = if *index < 0 {
                        items.len().checked_sub(index.unsigned_abs() as usize)?
                    } else {
                        *index as usize
                    };
                    items.get(position)
                }
            })
    }
}

struct Parser<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn parse(mut self) -> Result<Path, ExprError> {
        let mut segments = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            None => return Err(ExprError::new(self.pos, "empty expression")),
            Some('[') => segments.push(self.bracket()?),
            Some(_) => segments.push(Segment::Member(self.ident()?)),
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('.') => {
                    self.bump();
                    self.skip_whitespace();
                    segments.push(Segment::Member(self.ident()?));
                }
                Some('[') => segments.push(self.bracket()?),
                Some(c) => {
                    return Err(ExprError::new(
                        self.pos,
                        format!("unexpected character '{c}'"),
                    ))
                }
            }
        }

        Ok(Path { segments })
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn ident(&mut self) -> Result<String, ExprError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(c) => {
                return Err(ExprError::new(
                    start,
                    format!("expected identifier, found '{c}'"),
                ))
            }
            None => return Err(ExprError::new(start, "expected identifier")),
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.bump();
        }
        Ok(self.source[start..self.pos].to_string())
    }

    /// `[` index `]`, positioned on the opening bracket.
    fn bracket(&mut self) -> Result<Segment, ExprError> {
        self.bump();
        self.skip_whitespace();
        let segment = match self.peek() {
            Some(quote @ ('"' | '\'')) => Segment::Member(self.string(quote)?),
            Some(c) if c == '-' || c.is_ascii_digit() => Segment::Index(self.integer()?),
            Some(c) => {
                return Err(ExprError::new(
                    self.pos,
                    format!("expected index or string, found '{c}'"),
                ))
            }
            None => return Err(ExprError::new(self.pos, "unterminated '['")),
        };
        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(segment),
            Some(c) => Err(ExprError::new(
                self.pos - c.len_utf8(),
                format!("expected ']', found '{c}'"),
            )),
            None => Err(ExprError::new(self.pos, "unterminated '['")),
        }
    }

    fn integer(&mut self) -> Result<i64, ExprError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        self.source[start..self.pos]
            .parse()
            .map_err(|_| ExprError::new(start, "invalid index"))
    }

    fn string(&mut self, quote: char) -> Result<String, ExprError> {
        let start = self.pos;
        self.bump();
        let mut text = String::new();
        loop {
            match self.bump() {
                None => return Err(ExprError::new(start, "unterminated string")),
                Some('\\') => match self.bump() {
                    Some(c) if c == quote || c == '\\' => text.push(c),
                    Some(c) => {
                        text.push('\\');
                        text.push(c);
                    }
                    None => return Err(ExprError::new(start, "unterminated string")),
                },
                Some(c) if c == quote => return Ok(text),
                Some(c) => text.push(c),
            }
        }
    }
}
