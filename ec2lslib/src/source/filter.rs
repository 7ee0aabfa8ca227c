//! Record filtering by instance id and `EXPR=VALUE` conditions.
//!
//! Conditions use the same resolver as display fields, so anything that can
//! be shown can be filtered on. Filtering keeps the input order.

use tracing::trace;

use crate::error::Ec2lsError;
use crate::resolve::{resolve, MissPolicy, Resolvable};
use crate::Result;

/// One `EXPR=VALUE` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub expression: String,
    pub value: String,
}

impl Condition {
    /// Parse `EXPR=VALUE`, splitting on the first `=`.
    pub fn parse(token: &str) -> Result<Self> {
        let (expression, value) = token.split_once('=').ok_or_else(|| Ec2lsError::InvalidFilter {
            filter: token.to_string(),
            message: "expected EXPR=VALUE".to_string(),
        })?;
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(Ec2lsError::InvalidFilter {
                filter: token.to_string(),
                message: "empty expression".to_string(),
            });
        }
        Ok(Self {
            expression: expression.to_string(),
            value: value.to_string(),
        })
    }

    /// True if the resolved value equals the expected one. Misses resolve to "".
    pub fn matches<R: Resolvable + ?Sized>(&self, record: &R) -> bool {
        MissPolicy::Blank.cell(&resolve(&self.expression, record)) == self.value
    }
}

/// Which records to keep. An empty filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep only these ids (if non-empty)
    pub instance_ids: Vec<String>,
    /// All must match
    pub conditions: Vec<Condition>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance id to keep.
    pub fn instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_ids.push(id.into());
        self
    }

    /// Add an `EXPR=VALUE` condition.
    pub fn condition(mut self, token: &str) -> Result<Self> {
        self.conditions.push(Condition::parse(token)?);
        Ok(self)
    }

    /// Add multiple conditions.
    pub fn conditions<S: AsRef<str>>(mut self, tokens: &[S]) -> Result<Self> {
        for token in tokens {
            self = self.condition(token.as_ref())?;
        }
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.instance_ids.is_empty() && self.conditions.is_empty()
    }

    /// Check one record against every criterion.
    pub fn matches<R: Resolvable + ?Sized>(&self, record: &R) -> bool {
        if !self.instance_ids.is_empty() {
            let id = MissPolicy::Blank.cell(&resolve("id", record));
            if !self.instance_ids.iter().any(|wanted| *wanted == id) {
                trace!(%id, "filtered out by instance id");
                return false;
            }
        }

        match self.conditions.iter().find(|c| !c.matches(record)) {
            Some(failed) => {
                trace!(expression = %failed.expression, "filtered out by condition");
                false
            }
            None => true,
        }
    }

    /// Keep matching records, in order.
    pub fn apply<R: Resolvable>(&self, records: Vec<R>) -> Vec<R> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
