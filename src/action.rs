//! One complete invocation: check, write the output, report failure.

use std::io::Write;

use tracing::{error, info, warn};

use crate::Result;
use crate::check::{Checker, Options, Outcome};
use crate::config::Config;
use crate::context::Context;
use crate::lookup::Lookup;
use crate::output::{Encoding, OUTPUT_NAME, Sink};

/// Run the configured check for `context` and report it through `sink`.
///
/// The output value is always written. A configuration error additionally
/// marks the run as failed; the returned outcome carries it in
/// [`Outcome::fatal`].
pub async fn run<L, W>(
    config: &Config,
    context: &Context,
    lookup: &L,
    sink: &mut Sink<W>,
) -> Result<Outcome>
where
    L: Lookup + ?Sized,
    W: Write,
{
    let options = Options {
        allow_test_permission: config.check.allow_test_permission,
    };
    let outcome = Checker::new(lookup, options)
        .check(&config.check.required_permission, context)
        .await;

    let written = sink.set_output(OUTPUT_NAME, config.check.encoding.encode(&outcome));

    if let Some(err) = outcome.fatal() {
        error!("{err}");
        sink.fail(&err.to_string())?;
    } else {
        info!(
            actor = %context.actor,
            repository = %context.repository,
            required = %config.check.required_permission,
            sufficient = outcome.is_sufficient(),
            "Permission checked"
        );
    }

    written?;
    Ok(outcome)
}

/// Report an error that stopped the run before a check could happen.
///
/// Writes the negative output value so callers branching on it still deny,
/// then marks the run as failed.
pub fn abort<W: Write>(encoding: Encoding, err: &crate::Error, sink: &mut Sink<W>) {
    error!("{err}");
    if let Err(e) = sink.set_output(OUTPUT_NAME, encoding.negative()) {
        warn!("Failed to write output: {e}");
    }
    if let Err(e) = sink.fail(&err.to_string()) {
        warn!("Failed to report failure: {e}");
    }
}
