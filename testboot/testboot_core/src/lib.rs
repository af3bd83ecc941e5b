// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Bootstrap support for running an embedded test framework at application
//! start.
//!
//! This crate owns no test logic. It builds the fixed invocation arguments,
//! hands them to an opaque framework context together with the build's
//! failure-signaling mode, runs the context to completion, and reports a
//! fixed success status to whatever entry adapter called it. Test discovery,
//! assertion evaluation, and result reporting all belong to the framework
//! behind the [`context::TestContext`] seam.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bootstrap;
pub mod context;
pub mod defs;
pub mod logger;
