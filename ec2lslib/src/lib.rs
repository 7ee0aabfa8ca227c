//! # ec2lslib
//!
//! A display engine for listings of heterogeneous records, with an EC2
//! instance source built on top of it.
//!
//! ## Overview
//!
//! Users pick columns as `Name=expression` tokens. Each expression is resolved
//! against every record and the resulting rows are printed in one of four
//! formats. Records are opaque: anything implementing [`Resolvable`] can be
//! listed.
//!
//! The pipeline has four stages:
//!
//! - **Fields** ([`field`]): parse `Name=expression` tokens; never fails
//! - **Resolution** ([`resolve`], [`expr`], [`value`]): tag lookups, reserved
//!   accessors, then path expressions over the record's JSON document
//! - **Projection** ([`project`]): one row per record, one cell per field
//! - **Output** ([`output`]): `plain`, `simple`, `table` or `color`
//!
//! A [`DisplaySession`] ties the stages together for a [`Listing`].
//!
//! ## Failure isolation
//!
//! A cell that cannot be resolved is a [`ResolutionMiss`], not an error. It is
//! shown as an empty cell (or an `<error: ...>` marker with
//! [`MissPolicy::Marker`]) and the rest of the listing is unaffected. Only
//! input and output failures stop a listing ([`Ec2lsError`]).
//!
//! ## Example
//!
//! ```rust
//! use ec2lslib::{DisplayOptions, DisplaySession, InstanceListing, RenderConfig, RenderFormat};
//! use ec2lslib::source::parse_instances;
//!
//! let json = r#"{"Reservations": [{"Instances": [
//!     {"InstanceId": "i-1", "State": {"Name": "running"}, "Tags": [{"Key": "Name", "Value": "web"}]},
//!     {"InstanceId": "i-2", "State": {"Name": "stopped"}}
//! ]}]}"#;
//! let instances = parse_instances(json.as_bytes(), "example").unwrap();
//!
//! let session = DisplaySession::new(DisplayOptions::new(), RenderConfig::new(RenderFormat::Plain));
//! let mut out = Vec::new();
//! session.show(&mut out, &InstanceListing, &instances).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "i-1 web running\ni-2  stopped\n");
//! ```

pub mod error;
pub mod expr;
pub mod field;
pub mod options;
pub mod output;
pub mod project;
pub mod resolve;
pub mod session;
pub mod source;
pub mod value;

pub use error::Ec2lsError;
pub use expr::{ExprError, Path};
pub use field::{parse_fields, FieldSpec};
pub use options::{CellColors, ColorScheme, RenderConfig, RenderFormat};
pub use output::render;
pub use project::{project, Row};
pub use resolve::{resolve, MissPolicy, Resolution, ResolutionMiss, Resolvable};
pub use session::{DisplayOptions, DisplaySession, InstanceListing, Listing};
pub use source::{Instance, InstanceState, RecordFilter};
pub use value::FieldValue;

/// Result type for ec2lslib operations
pub type Result<T> = std::result::Result<T, Ec2lsError>;
