// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use core::fmt;
use core::fmt::Write;

use testboot_core::defs::TestbootError;
use testboot_core::defs::TestbootResult;
use testboot_core::logger::BootLogger;

/// Forwards log output to the firmware console.
struct ConsoleWriter;

impl fmt::Write for ConsoleWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        uefi::system::with_stdout(|out| out.write_str(s))
    }
}

static LOGGER: BootLogger<ConsoleWriter> = BootLogger::new(ConsoleWriter);

/// Brings up the ambient environment before any test runs.
pub fn init() -> TestbootResult<()> {
    testboot_core::logger::init(&LOGGER).map_err(|_| TestbootError::LoggerInstall)?;
    Ok(())
}
