// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document evaluation and change tracking.
//!
//! Evaluation follows a drain-recompute pattern for each dirty channel:
//!
//! 1. **GEOMETRY**: Drain dirty indices in dependency order and recompute
//!    each node's absolute transform as
//!    `absolute(space) * local_transform`, where `space` is the nearest
//!    ancestor that establishes a coordinate space.
//! 2. **STYLE**: Drain dirty indices (no recomputation).
//! 3. **TOPOLOGY**: Drain and discard; the flag on [`DocumentChanges`]
//!    records whether the structure changed.
//!
//! [`DocumentChanges`] uses raw slot indices (`u32`) rather than [`NodeId`]
//! handles; removed nodes can appear in `removed` after their handles went
//! stale.
//!
//! [`NodeId`]: super::NodeId

use alloc::vec::Vec;

use kurbo::Affine;

use super::id::INVALID;
use super::store::Document;
use crate::dirty;

/// The set of changes produced by a single [`Document::evaluate`] call.
#[derive(Clone, Debug, Default)]
pub struct DocumentChanges {
    /// Nodes whose absolute transform was recomputed, or that were resized.
    pub geometry: Vec<u32>,
    /// Nodes whose properties were edited.
    pub style: Vec<u32>,
    /// Slots holding a node created since the last evaluate, ascending.
    pub added: Vec<u32>,
    /// Slots whose node was removed since the last evaluate, ascending.
    ///
    /// A slot freed and reused between two evaluates appears in both lists.
    pub removed: Vec<u32>,
    /// Whether the tree topology changed.
    pub topology_changed: bool,
}

impl DocumentChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.geometry.clear();
        self.style.clear();
        self.added.clear();
        self.removed.clear();
        self.topology_changed = false;
    }

    /// Whether nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
            && self.style.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
            && !self.topology_changed
    }
}

impl Document {
    /// Evaluates the document, recomputing absolute transforms and returning
    /// the set of changes.
    pub fn evaluate(&mut self) -> DocumentChanges {
        let mut changes = DocumentChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer
    /// to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut DocumentChanges) {
        changes.clear();

        changes.topology_changed = self.topology_dirty;
        self.topology_dirty = false;

        // Drain GEOMETRY: parents come before the children that depend on them.
        let dirty_geometry: Vec<u32> = self
            .dirty
            .drain(dirty::GEOMETRY)
            .affected()
            .deterministic()
            .run()
            .filter(|&idx| !self.free_list.contains(&idx))
            .collect();
        for &idx in &dirty_geometry {
            let space = self.coordinate_space_of(idx);
            let base = if space != INVALID {
                self.absolute_transform[space as usize]
            } else {
                Affine::IDENTITY
            };
            self.absolute_transform[idx as usize] = base * self.local_transform_at(idx);
        }
        changes.geometry = dirty_geometry;
        self.geometry_pending = false;

        // Drain STYLE: no recomputation, just collect.
        changes.style = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .filter(|&idx| !self.free_list.contains(&idx))
            .collect();

        // Drain TOPOLOGY (just consume, changes are structural).
        let _: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        // Move lifecycle lists.
        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);
        changes.added.retain(|idx| !self.free_list.contains(idx));
        changes.added.sort_unstable();
        changes.added.dedup();
        changes.removed.sort_unstable();
        changes.removed.dedup();
    }

    /// Returns the nearest strict ancestor of `idx` that establishes a
    /// coordinate space, or [`INVALID`] for detached nodes and roots.
    pub(crate) fn coordinate_space_of(&self, idx: u32) -> u32 {
        let mut current = self.parent[idx as usize];
        while current != INVALID {
            if self.node_type[current as usize].establishes_coordinate_space() {
                return current;
            }
            current = self.parent[current as usize];
        }
        INVALID
    }
}
