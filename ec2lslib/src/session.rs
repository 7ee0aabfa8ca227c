//! Display sessions: choosing fields and showing records.
//!
//! A [`Listing`] is a command that produces records. It supplies default
//! fields for when the user names none, and headings for shorthand fields.
//! A [`DisplaySession`] holds the user's display choices and runs
//! projection and rendering for any listing.

use std::io::Write;

use tracing::debug;

use crate::field::{parse_fields, FieldSpec};
use crate::options::RenderConfig;
use crate::output::render;
use crate::project::project;
use crate::resolve::{tag_key, Resolvable};
use crate::Result;

/// A command whose records can be displayed.
pub trait Listing {
    type Record: Resolvable;

    /// Raw field tokens used when the user gives none.
    fn default_fields(&self) -> Vec<String>;

    /// Header for a shorthand field (one given without `Name=`).
    fn heading(&self, expression: &str) -> String {
        expression.to_string()
    }
}

/// The instance listing: `id`, `tags.Name` and `state` by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstanceListing;

impl Listing for InstanceListing {
    type Record = crate::source::Instance;

    fn default_fields(&self) -> Vec<String> {
        vec!["id".into(), "tags.Name".into(), "state".into()]
    }

    fn heading(&self, expression: &str) -> String {
        if expression == "id" {
            return "InstanceId".to_string();
        }
        if let Some(key) = tag_key(expression) {
            return key.to_string();
        }
        let mut chars = expression.chars();
        match chars.next() {
            Some(first) if expression.chars().count() >= 2 => {
                first.to_uppercase().chain(chars).collect()
            }
            _ => expression.to_string(),
        }
    }
}

/// Field choices made by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Raw field tokens; empty means the listing's defaults
    pub fields: Vec<String>,
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw field token.
    pub fn field(mut self, raw: impl Into<String>) -> Self {
        self.fields.push(raw.into());
        self
    }

    /// Add several raw field tokens.
    pub fn fields<S: Into<String>>(mut self, raw: impl IntoIterator<Item = S>) -> Self {
        self.fields.extend(raw.into_iter().map(Into::into));
        self
    }
}

/// User display choices plus rendering configuration.
#[derive(Debug, Clone, Default)]
pub struct DisplaySession {
    options: DisplayOptions,
    config: RenderConfig,
}

impl DisplaySession {
    pub fn new(options: DisplayOptions, config: RenderConfig) -> Self {
        Self { options, config }
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Fields to show for `listing`, with headings applied to shorthand fields.
    pub fn fields_for<L: Listing + ?Sized>(&self, listing: &L) -> Vec<FieldSpec> {
        let raw = if self.options.fields.is_empty() {
            listing.default_fields()
        } else {
            self.options.fields.clone()
        };

        parse_fields(raw.as_slice())
            .into_iter()
            .map(|field| {
                if field.is_shorthand() {
                    field.with_display_name(listing.heading(field.expression()))
                } else {
                    field
                }
            })
            .collect()
    }

    /// Project `records` and render them to `out`.
    pub fn show<L, W>(&self, out: &mut W, listing: &L, records: &[L::Record]) -> Result<()>
    where
        L: Listing + ?Sized,
        W: Write,
    {
        let fields = self.fields_for(listing);
        debug!(
            fields = fields.len(),
            records = records.len(),
            format = %self.config.format,
            "rendering listing"
        );
        let rows = project(&fields, records);
        render(out, &fields, &rows, &self.config)
    }
}
