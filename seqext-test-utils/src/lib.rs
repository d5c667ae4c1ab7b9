// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test fixtures and instrumentation for the seqext workspace.
//!
//! This crate is meant for development and testing only, not for production
//! code. It provides:
//!
//! - [`ConcurrencyProbe`]: records the order in which probed asynchronous
//!   operations start and the maximum number that were ever live at the same
//!   time, so tests can assert strictly sequential, in-order execution.
//! - [`TestError`]: a comparable error type for injecting failures into
//!   fallible operations and asserting they surface unchanged.
//! - [`test_data`]: small document fixtures shared across integration tests.

pub mod probe;
pub mod test_data;
pub mod test_error;

pub use probe::ConcurrencyProbe;
pub use test_data::Document;
pub use test_error::TestError;
