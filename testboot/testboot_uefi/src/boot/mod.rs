// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// The `#[entry]` macro expands to an unsafe export attribute for the
// firmware entry symbol.
#![allow(unsafe_code)]

mod init;
mod rt;

use uefi::Status;
use uefi::entry;

use crate::context::IdleContext;

#[entry]
fn uefi_main() -> Status {
    if init::init().is_err() {
        return Status::ABORTED;
    }

    let _status = testboot_core::bootstrap::run_to_completion::<IdleContext>();

    // Entry-signature selection, resolved at compile time: hand a success
    // status back to the firmware, or park with nothing to report.
    #[cfg(feature = "entry-return")]
    return Status::SUCCESS;

    #[cfg(not(feature = "entry-return"))]
    loop {
        core::hint::spin_loop();
    }
}
