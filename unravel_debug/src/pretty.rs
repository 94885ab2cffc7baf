// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use unravel_core::trace::{
    ExplodeBeginEvent, ExplodeEndEvent, ExplodeSkippedEvent, NodeClonedEvent, NodeRemovedEvent,
    PropertiesCopiedEvent, SkipReason, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    events: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, events: 0 }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, events: 0 }
    }

    /// Returns the number of events written so far.
    #[must_use]
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        self.events += 1;
        let _ = writeln!(self.writer, "{args}");
    }
}

fn reason(reason: SkipReason) -> String {
    match reason {
        SkipReason::Empty => "empty".to_owned(),
        SkipReason::MultipleChildren(n) => format!("children={n}"),
        SkipReason::UnsupportedChild(ty) => format!("unsupported={ty}"),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_explode_begin(&mut self, e: &ExplodeBeginEvent) {
        self.line(format_args!(
            "[explode:begin] component={} instance={} children={}",
            e.component, e.instance, e.child_count,
        ));
    }

    fn on_explode_skipped(&mut self, e: &ExplodeSkippedEvent) {
        self.line(format_args!(
            "[explode:skip] component={} {}",
            e.component,
            reason(e.reason),
        ));
    }

    fn on_properties_copied(&mut self, e: &PropertiesCopiedEvent) {
        self.line(format_args!(
            "[copy] {} -> {} fields={}",
            e.from, e.to, e.fields,
        ));
    }

    fn on_node_cloned(&mut self, e: &NodeClonedEvent) {
        self.line(format_args!(
            "[clone] {} -> {} parent={}",
            e.original, e.clone, e.parent,
        ));
    }

    fn on_node_removed(&mut self, e: &NodeRemovedEvent) {
        self.line(format_args!("[remove] {} {}", e.node, e.node_type));
    }

    fn on_explode_end(&mut self, e: &ExplodeEndEvent) {
        let wrapper = if e.wrapper_removed { "removed" } else { "kept" };
        self.line(format_args!(
            "[explode:end] component={} hoisted={} wrapper={wrapper}",
            e.component, e.hoisted,
        ));
    }
}
