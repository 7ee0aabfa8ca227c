//! # ec2ls
//!
//! A CLI for listing EC2 instances with user-chosen columns.
//!
//! ## Overview
//!
//! ec2ls is built on top of ec2lslib. It reads `describe-instances` JSON,
//! optionally filters the instances, and prints one row per instance with
//! the fields you ask for.
//!
//! ## Usage
//!
//! ```bash
//! # Default columns: InstanceId, Name, State
//! aws ec2 describe-instances | ec2ls
//!
//! # Pick columns; Name=expression sets the header
//! ec2ls -i instances.json -f id,Type=InstanceType,tags.Env,Zone=Placement.AvailabilityZone
//!
//! # Script-friendly output
//! ec2ls -i instances.json -o plain -f id,PrivateIpAddress --filter state=running
//! ```
//!
//! Output formats: `table` (default), `simple`, `color`, `plain`.

mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use console::style;
use ec2lslib::source::read_instances;
use ec2lslib::{DisplaySession, InstanceListing};
use tracing::{debug, info};

use crate::cli::{build_command, listing_matches, ListSettings};
use crate::logging::init_logging;

fn run(settings: ListSettings) -> anyhow::Result<()> {
    let instances = read_instances(&settings.input)?;
    let total = instances.len();

    let instances = settings.filter.apply(instances);
    info!(total, shown = instances.len(), input = %settings.input, "loaded instances");

    let session = DisplaySession::new(settings.display, settings.render);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.show(&mut out, &InstanceListing, &instances)?;

    debug!("listing complete");
    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err);
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let matches = listing_matches(&matches);

    let settings = match ListSettings::from_matches(matches) {
        Ok(settings) => settings,
        Err(err) => {
            report(&err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&settings.logging) {
        report(&err);
        return ExitCode::FAILURE;
    }

    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = %err, "listing failed");
            report(&err);
            ExitCode::FAILURE
        }
    }
}
