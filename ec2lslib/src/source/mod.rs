//! Instance sources: where records come from.
//!
//! - **Describe documents**: read `describe-instances` JSON pages from a file
//!   or stdin
//! - **Instances**: records with reserved `id`/`state` accessors and tags
//! - **Filtering**: keep records by id or `EXPR=VALUE` conditions
//!
//! ## Example
//!
//! ```rust,ignore
//! use ec2lslib::source::{read_instances, RecordFilter};
//!
//! let instances = read_instances("instances.json")?;
//! let filter = RecordFilter::new().condition("state=running")?;
//! let running = filter.apply(instances);
//! ```

pub mod describe;
pub mod filter;
pub mod instance;

pub use describe::{open_input, parse_instances, read_instances, STDIN};
pub use filter::{Condition, RecordFilter};
pub use instance::{Instance, InstanceState};
