// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by document mutations.

use core::fmt;

use crate::node::NodeType;

/// Errors from [`Document`](crate::node::Document) mutations.
///
/// These mirror the faults a design host raises when a script asks for an
/// edit the node model forbids. Stale handles are not reported here; they
/// panic, like any other out-of-bounds access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneError {
    /// The node type cannot be resized (document and page nodes).
    NotResizable(NodeType),
    /// The requested size is negative or not finite.
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The target parent does not accept children.
    NotAContainer(NodeType),
    /// The edit would make a node its own ancestor.
    WouldCycle,
    /// The document root cannot be moved, cloned, or removed.
    DocumentRoot,
    /// A child index past the end of the parent's child list.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of children the parent has.
        len: usize,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotResizable(ty) => write!(f, "{ty} nodes cannot be resized"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid size {width}x{height}")
            }
            Self::NotAContainer(ty) => write!(f, "{ty} nodes cannot have children"),
            Self::WouldCycle => f.write_str("node cannot become its own descendant"),
            Self::DocumentRoot => f.write_str("operation not permitted on the document root"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "child index {index} out of range (len {len})")
            }
        }
    }
}

impl core::error::Error for SceneError {}
