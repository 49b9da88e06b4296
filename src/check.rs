//! The permission check.
//!
//! One check validates the required level, asks the [`Lookup`] for the
//! actor's permission, and compares ranks on the active [`Scale`]. Every
//! failure becomes a non-sufficient [`Outcome`]; only a configuration error
//! is flagged as fatal so the caller can fail the run.

use tracing::debug;

use crate::Error;
use crate::context::Context;
use crate::lookup::Lookup;
use crate::permission::Scale;

/// Options for a single check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Append `test-only-superuser` to the scale for this check.
    pub allow_test_permission: bool,
}

/// Why a check could not reach a decision.
#[derive(Debug, thiserror::Error)]
pub enum Cause {
    /// The required permission name is not on the active scale.
    #[error(transparent)]
    Configuration(Error),

    /// The lookup failed.
    #[error("permission lookup failed: {0}")]
    Lookup(Error),

    /// The lookup succeeded but carried no permission.
    #[error("no permission in lookup response")]
    MissingData,
}

/// Result of one check.
#[derive(Debug)]
pub enum Outcome {
    Sufficient,
    Insufficient,
    Indeterminate(Cause),
}

impl Outcome {
    /// Only `Sufficient` grants access.
    pub fn is_sufficient(&self) -> bool {
        matches!(self, Outcome::Sufficient)
    }

    /// The configuration error to surface to the operator, if any.
    pub fn fatal(&self) -> Option<&Error> {
        match self {
            Outcome::Indeterminate(Cause::Configuration(err)) => Some(err),
            _ => None,
        }
    }
}

/// Checks one required level against the actor's permission.
pub struct Checker<'a, L: Lookup + ?Sized> {
    lookup: &'a L,
    options: Options,
}

impl<'a, L: Lookup + ?Sized> Checker<'a, L> {
    pub fn new(lookup: &'a L, options: Options) -> Self {
        Self { lookup, options }
    }

    /// Decide whether `context.actor` holds at least `required` on
    /// `context.repository`.
    pub async fn check(&self, required: &str, context: &Context) -> Outcome {
        let scale = Scale::new(self.options.allow_test_permission);
        debug!("Required permission: {required}");

        let Some(required) = scale.parse(required) else {
            return Outcome::Indeterminate(Cause::Configuration(Error::InvalidPermission {
                valid: scale.to_string(),
            }));
        };

        debug!("User name: {}", context.actor);

        let record = match self
            .lookup
            .collaborator_permission(&context.repository, &context.actor)
            .await
        {
            Ok(record) => record,
            Err(e) => {
                debug!("Exception: {e}");
                return Outcome::Indeterminate(Cause::Lookup(e));
            }
        };

        let Some(actual) = record.permission.as_deref().filter(|p| !p.is_empty()) else {
            debug!("No user permission found in response: {record:?}");
            return Outcome::Indeterminate(Cause::MissingData);
        };
        debug!("User permission: {actual}");

        let sufficient = scale.satisfies(required, actual);
        debug!("Is sufficient: {sufficient}");

        if sufficient {
            Outcome::Sufficient
        } else {
            Outcome::Insufficient
        }
    }
}

/// Run a single check with a one-off [`Checker`].
pub async fn check<L: Lookup + ?Sized>(
    required: &str,
    lookup: &L,
    context: &Context,
    options: Options,
) -> Outcome {
    Checker::new(lookup, options).check(required, context).await
}
