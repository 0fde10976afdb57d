//! Pass/fail decision for a step.

use sequent_domain::ObservedStatus;

/// Decides whether a step passed.
///
/// Only the status code is compared; the body never matters. A step without
/// a response never passes.
#[must_use]
pub fn evaluate(expected: u16, observed: ObservedStatus) -> bool {
    observed.code() == Some(expected)
}
