// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for structural edits.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! edit operations such as [`explode_traced`](crate::explode::explode_traced)
//! call at each step. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use crate::node::{NodeId, NodeType};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why an explode left the document untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The component has no children.
    Empty,
    /// The component has more than one child.
    MultipleChildren(usize),
    /// The single child is neither a group nor a frame.
    UnsupportedChild(NodeType),
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an explode starts.
#[derive(Clone, Copy, Debug)]
pub struct ExplodeBeginEvent {
    /// Component being exploded.
    pub component: NodeId,
    /// Instance receiving the wrapper's instance-level attributes.
    pub instance: NodeId,
    /// Number of direct children of the component.
    pub child_count: usize,
}

/// Emitted when an explode returns without editing the document.
#[derive(Clone, Copy, Debug)]
pub struct ExplodeSkippedEvent {
    /// Component that was not exploded.
    pub component: NodeId,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Emitted after a copy table has been applied.
#[derive(Clone, Copy, Debug)]
pub struct PropertiesCopiedEvent {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Number of fields written.
    pub fields: usize,
}

/// Emitted when a node is cloned into a new parent.
#[derive(Clone, Copy, Debug)]
pub struct NodeClonedEvent {
    /// Node that was cloned.
    pub original: NodeId,
    /// The new copy.
    pub clone: NodeId,
    /// Parent the copy was appended to.
    pub parent: NodeId,
}

/// Emitted when a node (and its subtree) is removed.
#[derive(Clone, Copy, Debug)]
pub struct NodeRemovedEvent {
    /// The removed node's last handle; stale by the time the event fires.
    pub node: NodeId,
    /// Type of the removed node.
    pub node_type: NodeType,
}

/// Emitted when an explode completes.
#[derive(Clone, Copy, Debug)]
pub struct ExplodeEndEvent {
    /// Component that was exploded.
    pub component: NodeId,
    /// Number of layers hoisted into the component.
    pub hoisted: usize,
    /// Whether the emptied wrapper was removed.
    pub wrapper_removed: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from edit operations.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an explode starts.
    fn on_explode_begin(&mut self, e: &ExplodeBeginEvent) {
        _ = e;
    }

    /// Called when an explode is skipped.
    fn on_explode_skipped(&mut self, e: &ExplodeSkippedEvent) {
        _ = e;
    }

    /// Called after a copy table has been applied.
    fn on_properties_copied(&mut self, e: &PropertiesCopiedEvent) {
        _ = e;
    }

    /// Called when a node is cloned.
    fn on_node_cloned(&mut self, e: &NodeClonedEvent) {
        _ = e;
    }

    /// Called when a node is removed.
    fn on_node_removed(&mut self, e: &NodeRemovedEvent) {
        _ = e;
    }

    /// Called when an explode completes.
    fn on_explode_end(&mut self, e: &ExplodeEndEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`ExplodeBeginEvent`].
    #[inline]
    pub fn explode_begin(&mut self, e: &ExplodeBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_explode_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ExplodeSkippedEvent`].
    #[inline]
    pub fn explode_skipped(&mut self, e: &ExplodeSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_explode_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PropertiesCopiedEvent`].
    #[inline]
    pub fn properties_copied(&mut self, e: &PropertiesCopiedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_properties_copied(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NodeClonedEvent`].
    #[inline]
    pub fn node_cloned(&mut self, e: &NodeClonedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_node_cloned(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NodeRemovedEvent`].
    #[inline]
    pub fn node_removed(&mut self, e: &NodeRemovedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_node_removed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ExplodeEndEvent`].
    #[inline]
    pub fn explode_end(&mut self, e: &ExplodeEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_explode_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
