// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The seam between the bootstrap shim and the test framework.
//!
//! The framework is an external collaborator: the bootstrap only needs the
//! ability to construct a runnable context from an argument list and run it
//! to completion. Everything else the framework does is opaque.

/// How the test framework signals assertion failures.
///
/// Selected once per build; the two modes are mutually exclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FailureSignaling {
    /// Failures propagate by unwinding the stack.
    Unwind,
    /// Failures are reported as status codes, with no unwinding. This is the
    /// mode constrained embedded builds require.
    StatusCodes,
}

impl FailureSignaling {
    /// Returns the signaling mode selected for this build.
    ///
    /// Resolved from the `unwind` cargo feature at compile time; there is no
    /// runtime switch.
    pub const fn for_build() -> Self {
        if cfg!(feature = "unwind") {
            FailureSignaling::Unwind
        } else {
            FailureSignaling::StatusCodes
        }
    }
}

/// Aggregate outcome of a framework run.
///
/// The bootstrap discards this; it exists so a context can report honestly
/// and so callers other than the shim could inspect it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunOutcome {
    /// Every registered test passed (or none were registered).
    AllPassed,
    /// At least one registered test failed.
    SomeFailed,
}

/// An opaque, runnable test-framework context.
pub trait TestContext {
    /// Builds a context from the invocation arguments and the build's
    /// failure-signaling mode.
    ///
    /// `args` follows the framework's own CLI grammar; the bootstrap always
    /// passes [`crate::bootstrap::INVOCATION_ARGS`].
    fn from_invocation(args: &[&'static str], signaling: FailureSignaling) -> Self;

    /// Runs every test registered with the framework to completion and
    /// reports the aggregate outcome.
    fn run(&mut self) -> RunOutcome;
}
