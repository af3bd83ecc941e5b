// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![doc = include_str!("../README.md")]
#![cfg_attr(all(not(test), target_os = "uefi"), no_main)]
#![cfg_attr(all(not(test), target_os = "uefi"), no_std)]

// Actual entrypoint is `boot::uefi_main`, via the `#[entry]` macro.
#[cfg(any(test, not(target_os = "uefi")))]
fn main() {}

#[cfg(target_os = "uefi")]
mod boot;
pub mod context;
