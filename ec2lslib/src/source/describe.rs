//! Reading `describe-instances` output.
//!
//! Input is the JSON the EC2 API returns for `DescribeInstances`, one page
//! after another:
//!
//! ```json
//! {"Reservations": [{"Instances": [{"InstanceId": "i-1", ...}]}], "NextToken": "..."}
//! {"Reservations": [...]}
//! ```
//!
//! Pages are flattened in order into a single list of [`Instance`] records.
//! A bare array of instance objects is accepted as a page too.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::instance::Instance;
use crate::error::Ec2lsError;
use crate::Result;

/// Input name meaning standard input.
pub const STDIN: &str = "-";

/// One top-level document: a describe-instances page, or a bare array of
/// instance objects.
#[derive(Debug)]
enum Document {
    Page(Page),
    Instances(Vec<Value>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Page {
    #[serde(default)]
    reservations: Vec<Reservation>,
    #[serde(default)]
    next_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reservation {
    #[serde(default)]
    instances: Vec<Value>,
}

impl Document {
    /// Anything that is not an array is read as a page.
    fn from_json(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Array(instances) => Ok(Document::Instances(instances)),
            other => serde_json::from_value(other).map(Document::Page),
        }
    }

    fn into_instances(self) -> Vec<Value> {
        match self {
            Document::Page(page) => page
                .reservations
                .into_iter()
                .flat_map(|reservation| reservation.instances)
                .collect(),
            Document::Instances(instances) => instances,
        }
    }
}

/// Parse every page in `reader`.
///
/// `input` names the source in error messages.
pub fn parse_instances<R: Read>(reader: R, input: &str) -> Result<Vec<Instance>> {
    let mut instances = Vec::new();

    let decode_error = |source: serde_json::Error| {
        if source.is_io() {
            Ec2lsError::Input {
                input: input.to_string(),
                source: io::Error::from(source),
            }
        } else {
            Ec2lsError::Decode {
                input: input.to_string(),
                source,
            }
        }
    };

    let values = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();
    for (number, value) in values.enumerate() {
        let page = value.and_then(Document::from_json).map_err(decode_error)?;

        if let Document::Page(Page {
            next_token: Some(token),
            ..
        }) = &page
        {
            debug!(page = number, next_token = %token, "page has a continuation token");
        }

        let before = instances.len();
        instances.extend(page.into_instances().into_iter().map(Instance::from_json));
        debug!(page = number, records = instances.len() - before, "read page");
    }

    debug!(input, records = instances.len(), "read instances");
    Ok(instances)
}

/// Open `input` for reading; [`STDIN`] means standard input.
pub fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
    if input == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(input).map_err(|source| Ec2lsError::Input {
        input: input.to_string(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Open and parse `input`.
pub fn read_instances(input: &str) -> Result<Vec<Instance>> {
    parse_instances(open_input(input)?, input)
}
