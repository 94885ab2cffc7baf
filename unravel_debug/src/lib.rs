// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and document snapshots for unravel diagnostics.
//!
//! This crate provides development helpers on top of `unravel_core`:
//!
//! - [`pretty::PrettyPrintSink`]: a [`TraceSink`](unravel_core::trace::TraceSink)
//!   that writes one human-readable line per event.
//! - [`snapshot`]: JSON and indented-outline dumps of a document subtree,
//!   for comparing a tree before and after an edit.

pub mod pretty;
pub mod snapshot;
