// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The signature-independent core of the entry shim.
//!
//! Entry adapters (whatever signature the host runtime imposes) call
//! [`run_to_completion`]; everything that is not dictated by the entry
//! calling convention lives here.

use log::warn;

use crate::context::FailureSignaling;
use crate::context::TestContext;

/// Program-name placeholder handed to the framework in place of a real
/// executable path.
pub const PROGRAM_NAME: &str = "exe";

/// Asks the framework to report per-test durations.
pub const REPORT_DURATIONS: &str = "-d";

/// Asks the framework to report successful assertions as well as failures.
pub const REPORT_SUCCESSES: &str = "-s";

/// The fixed invocation arguments passed to every framework context.
///
/// Not configurable at runtime; there is no CLI surface in front of this.
pub const INVOCATION_ARGS: [&str; 3] = [PROGRAM_NAME, REPORT_DURATIONS, REPORT_SUCCESSES];

/// Constructs a fresh `C` from [`INVOCATION_ARGS`], runs every test
/// registered with it, and returns the status to hand back to the host
/// runtime.
///
/// The framework's own pass/fail outcome is reported on its output stream
/// and deliberately not propagated: the returned status is always 0. Each
/// call builds a new context; no state is carried between invocations.
pub fn run_to_completion<C: TestContext>() -> i32 {
    warn!("TEST_START");

    let mut ctx = C::from_invocation(&INVOCATION_ARGS, FailureSignaling::for_build());
    let _outcome = ctx.run();

    warn!("TEST_END");
    0
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::sync::atomic::AtomicU32;
    use core::sync::atomic::Ordering;

    use spin::Mutex;

    use super::*;
    use crate::context::RunOutcome;

    struct Invocation {
        args: Vec<String>,
        signaling: FailureSignaling,
    }

    static INVOCATIONS: Mutex<Vec<Invocation>> = Mutex::new(Vec::new());

    /// Double that records how the shim constructed it.
    struct RecordingContext;

    impl TestContext for RecordingContext {
        fn from_invocation(args: &[&'static str], signaling: FailureSignaling) -> Self {
            INVOCATIONS.lock().push(Invocation {
                args: args.iter().map(|a| a.to_string()).collect(),
                signaling,
            });
            RecordingContext
        }

        fn run(&mut self) -> RunOutcome {
            RunOutcome::AllPassed
        }
    }

    #[test]
    fn passes_fixed_invocation_arguments() {
        let before = INVOCATIONS.lock().len();
        assert_eq!(run_to_completion::<RecordingContext>(), 0);
        assert_eq!(run_to_completion::<RecordingContext>(), 0);

        let invocations = INVOCATIONS.lock();
        // Each call constructs its own fresh context.
        assert_eq!(invocations.len(), before + 2);
        for invocation in &invocations[before..] {
            assert_eq!(invocation.args, ["exe", "-d", "-s"]);
            #[cfg(not(feature = "unwind"))]
            assert_eq!(invocation.signaling, FailureSignaling::StatusCodes);
            #[cfg(feature = "unwind")]
            assert_eq!(invocation.signaling, FailureSignaling::Unwind);
        }
    }

    /// Double whose run reports a failure.
    struct FailingContext;

    impl TestContext for FailingContext {
        fn from_invocation(_args: &[&'static str], _signaling: FailureSignaling) -> Self {
            FailingContext
        }

        fn run(&mut self) -> RunOutcome {
            RunOutcome::SomeFailed
        }
    }

    #[test]
    fn status_is_zero_even_when_tests_fail() {
        assert_eq!(run_to_completion::<FailingContext>(), 0);
    }

    static RUNS: AtomicU32 = AtomicU32::new(0);

    /// Double that counts how many times it was run.
    struct CountingContext;

    impl TestContext for CountingContext {
        fn from_invocation(_args: &[&'static str], _signaling: FailureSignaling) -> Self {
            CountingContext
        }

        fn run(&mut self) -> RunOutcome {
            RUNS.fetch_add(1, Ordering::SeqCst);
            RunOutcome::AllPassed
        }
    }

    #[test]
    fn runs_the_context_exactly_once_per_call() {
        let before = RUNS.load(Ordering::SeqCst);
        run_to_completion::<CountingContext>();
        assert_eq!(RUNS.load(Ordering::SeqCst), before + 1);
    }
}
