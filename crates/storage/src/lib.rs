// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasks-storage: persistence backends for task records

mod adapter;
mod error;
mod filter;
mod json_file;
pub mod layout;
mod memory;
pub mod search;

pub use adapter::StorageAdapter;
pub use error::StoreError;
pub use filter::ListFilter;
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
