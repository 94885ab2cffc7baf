// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Document mutations are recorded in a multi-channel dirty tracker (via
//! [`understory_dirty`]) so that [`Document::evaluate`] only recomputes what
//! changed and can report those changes to the caller.
//!
//! # Propagation semantics
//!
//! - **Propagating**: [`GEOMETRY`] uses
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) for moves, rotations,
//!   and resizes, with dependency edges from child to parent. Moving a frame
//!   marks every descendant, because absolute transforms are inherited.
//!
//! - **Local-only**: [`STYLE`] is marked when a node's
//!   [`Properties`](crate::node::Properties) are borrowed mutably.
//!
//! - **Structural**: [`TOPOLOGY`] is marked on append, insert, detach,
//!   create, and remove. It is drained and discarded by evaluation; the
//!   result surfaces as [`DocumentChanges::topology_changed`].
//!
//! [`Document::evaluate`]: crate::node::Document::evaluate
//! [`DocumentChanges::topology_changed`]: crate::node::DocumentChanges::topology_changed

use understory_dirty::Channel;

/// Position, rotation, or size changed; absolute transforms of the node
/// and its descendants need recomputation.
pub const GEOMETRY: Channel = Channel::new(0);

/// Style or layout properties changed; no propagation needed.
pub const STYLE: Channel = Channel::new(1);

/// Tree topology changed.
pub const TOPOLOGY: Channel = Channel::new(2);
