// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type predicates, ancestor searches, and selection helpers.
//!
//! Ancestor searches stop at the DOCUMENT node: it ends the walk and is never
//! itself a match, except that [`has_parent_of_type`] treats a query for
//! exactly [`NodeType::Document`] as always satisfied.

use crate::node::{Document, NodeId, NodeType, NodeTypeSet};

/// Returns whether `node`'s type is in `types`.
#[must_use]
pub fn is_of_type(doc: &Document, node: NodeId, types: impl Into<NodeTypeSet>) -> bool {
    types.into().contains(doc.node_type(node))
}

/// Returns the nearest strict ancestor of `node` whose type is in `types`.
///
/// Returns `None` when the walk reaches the DOCUMENT node or runs out of
/// parents first.
#[must_use]
pub fn find_first_parent_of_type(
    doc: &Document,
    node: NodeId,
    types: impl Into<NodeTypeSet>,
) -> Option<NodeId> {
    let types = types.into();
    doc.ancestors(node)
        .take_while(|&ancestor| doc.node_type(ancestor) != NodeType::Document)
        .find(|&ancestor| types.contains(doc.node_type(ancestor)))
}

/// Returns whether `node` has a strict ancestor whose type is in `types`.
///
/// Every node descends from the document, so a query for exactly
/// [`NodeType::Document`] is `true` without walking.
#[must_use]
pub fn has_parent_of_type(doc: &Document, node: NodeId, types: impl Into<NodeTypeSet>) -> bool {
    let types = types.into();
    if types == NodeTypeSet::single(NodeType::Document) {
        return true;
    }
    find_first_parent_of_type(doc, node, types).is_some()
}

/// Returns whether `node` sits outside every frame, component, and instance.
#[must_use]
pub fn is_layer_an_orphan(doc: &Document, node: NodeId) -> bool {
    NodeTypeSet::ORPHAN_BLOCKERS
        .iter()
        .all(|ty| !has_parent_of_type(doc, node, ty))
}

/// Returns whether `selection` can be wrapped into a new component.
///
/// Components cannot nest a component, and nothing inside an instance can be
/// componentized.
#[must_use]
pub fn can_be_componentized(doc: &Document, selection: &[NodeId]) -> bool {
    !selection.iter().any(|&layer| {
        has_parent_of_type(doc, layer, NodeType::Instance)
            || doc.node_type(layer) == NodeType::Component
    })
}

/// Returns the node that provides context for multi-node operations: the
/// last one selected.
#[must_use]
pub fn key_layer_of_selection(selection: &[NodeId]) -> Option<NodeId> {
    selection.last().copied()
}

/// Returns the zero-based position of `node` among its parent's children.
#[must_use]
pub fn index_of_node(doc: &Document, node: NodeId) -> Option<usize> {
    let parent = doc.parent(node)?;
    doc.children(parent).position(|sibling| sibling == node)
}

/// Returns the parent shared by every node in `nodes`.
///
/// Returns `None` if the parents differ, if `nodes` is empty, or if any
/// node is detached.
#[must_use]
pub fn shared_parent(doc: &Document, nodes: &[NodeId]) -> Option<NodeId> {
    let (&first, rest) = nodes.split_first()?;
    let parent = doc.parent(first)?;
    rest.iter()
        .all(|&node| doc.parent(node) == Some(parent))
        .then_some(parent)
}
