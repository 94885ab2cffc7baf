// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding boxes and placement.
//!
//! Rectangles are [`kurbo::Rect`] values. A node's rect in a given
//! [`CoordinateSpace`] has its origin at the node's position and extends by
//! the node's width and height; rotation is not applied.

use kurbo::{Rect, Vec2};

use crate::error::SceneError;
use crate::node::{Document, NodeId, NodeType, NodeTypeSet};

/// Which position a rect is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    /// The node's local `x`/`y`.
    #[default]
    Local,
    /// The translation of the node's absolute transform.
    Absolute,
}

/// Returns the rect of `node` in `space`.
#[must_use]
pub fn node_rect(doc: &Document, node: NodeId, space: CoordinateSpace) -> Rect {
    let origin = match space {
        CoordinateSpace::Local => doc.position(node),
        CoordinateSpace::Absolute => doc.absolute_transform(node).translation(),
    };
    Rect::from_origin_size(origin.to_point(), doc.size(node))
}

/// Returns the smallest axis-aligned rect enclosing every node in `nodes`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn union_rect(doc: &Document, nodes: &[NodeId], space: CoordinateSpace) -> Option<Rect> {
    nodes
        .iter()
        .map(|&node| node_rect(doc, node, space))
        .reduce(|acc, rect| {
            Rect::new(
                acc.x0.min(rect.x0),
                acc.y0.min(rect.y0),
                acc.x1.max(rect.x1),
                acc.y1.max(rect.y1),
            )
        })
}

/// Returns the document-space rect of `node`: the absolute translation
/// combined with the node's width and height.
#[must_use]
pub fn absolute_rect(doc: &Document, node: NodeId) -> Rect {
    node_rect(doc, node, CoordinateSpace::Absolute)
}

/// Sums the local offsets of `node` and every ancestor that is a frame or
/// component, stopping at the DOCUMENT node.
///
/// This recovers a layer's position in document space when it is nested in
/// frame coordinate systems. Groups do not contribute, since their children
/// already use the enclosing frame's coordinates. `None` yields zero.
#[must_use]
pub fn total_frame_offset(doc: &Document, node: Option<NodeId>) -> Vec2 {
    let mut offset = Vec2::ZERO;
    let Some(node) = node else {
        return offset;
    };
    let chain = core::iter::once(node).chain(doc.ancestors(node));
    for current in chain {
        let ty = doc.node_type(current);
        if ty == NodeType::Document {
            break;
        }
        if NodeTypeSet::FRAME_LIKE.contains(ty) {
            offset += doc.position(current);
        }
    }
    offset
}

/// Moves `node` to the origin of `rect` in local coordinates and resizes it
/// to `rect`'s size.
///
/// The position is written before the resize is attempted, so a failed
/// resize still leaves the node moved.
pub fn set_size_and_position_to_rect(
    doc: &mut Document,
    node: NodeId,
    rect: Rect,
) -> Result<(), SceneError> {
    doc.set_position(node, rect.origin().to_vec2());
    doc.resize(node, rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::*;

    fn page(doc: &mut Document) -> NodeId {
        let root = doc.root();
        doc.create_child(root, NodeType::Page).unwrap()
    }

    fn placed(doc: &mut Document, parent: NodeId, ty: NodeType, rect: Rect) -> NodeId {
        let node = doc.create_child(parent, ty).unwrap();
        set_size_and_position_to_rect(doc, node, rect).unwrap();
        node
    }

    #[test]
    fn union_rect_encloses_every_node_minimally() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let a = placed(&mut doc, page, NodeType::Rectangle, Rect::new(0.0, 10.0, 20.0, 30.0));
        let b = placed(&mut doc, page, NodeType::Ellipse, Rect::new(15.0, -5.0, 40.0, 12.0));
        let c = placed(&mut doc, page, NodeType::Text, Rect::new(5.0, 5.0, 6.0, 50.0));

        let union = union_rect(&doc, &[a, b, c], CoordinateSpace::Local).unwrap();
        assert_eq!(union, Rect::new(0.0, -5.0, 40.0, 50.0));

        for node in [a, b, c] {
            let rect = node_rect(&doc, node, CoordinateSpace::Local);
            assert_eq!(union.union(rect), union, "{node:?} escapes the union");
        }
        // Each edge is attained by some node.
        let rects = [a, b, c].map(|n| node_rect(&doc, n, CoordinateSpace::Local));
        assert!(rects.iter().any(|r| r.x0 == union.x0));
        assert!(rects.iter().any(|r| r.y0 == union.y0));
        assert!(rects.iter().any(|r| r.x1 == union.x1));
        assert!(rects.iter().any(|r| r.y1 == union.y1));
    }

    #[test]
    fn union_rect_of_one_node_is_its_rect() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let rect = placed(&mut doc, page, NodeType::Rectangle, Rect::new(1.0, 2.0, 4.0, 8.0));
        assert_eq!(
            union_rect(&doc, &[rect], CoordinateSpace::Local),
            Some(Rect::new(1.0, 2.0, 4.0, 8.0))
        );
    }

    #[test]
    fn union_rect_of_nothing_is_none() {
        let doc = Document::new();
        assert_eq!(union_rect(&doc, &[], CoordinateSpace::Absolute), None);
    }

    #[test]
    fn union_rect_in_absolute_space_uses_transforms() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let frame = placed(&mut doc, page, NodeType::Frame, Rect::new(100.0, 100.0, 300.0, 300.0));
        let a = placed(&mut doc, frame, NodeType::Rectangle, Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = placed(&mut doc, frame, NodeType::Rectangle, Rect::new(20.0, 20.0, 30.0, 40.0));
        let _ = doc.evaluate();

        assert_eq!(
            union_rect(&doc, &[a, b], CoordinateSpace::Local),
            Some(Rect::new(0.0, 0.0, 30.0, 40.0))
        );
        assert_eq!(
            union_rect(&doc, &[a, b], CoordinateSpace::Absolute),
            Some(Rect::new(100.0, 100.0, 130.0, 140.0))
        );
    }

    #[test]
    fn absolute_rects_follow_a_move_without_evaluate() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let frame = doc.create_child(page, NodeType::Frame).unwrap();
        doc.set_position(frame, Vec2::new(100.0, 100.0));
        let rect = placed(&mut doc, frame, NodeType::Rectangle, Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(
            union_rect(&doc, &[rect], CoordinateSpace::Absolute),
            Some(Rect::new(100.0, 100.0, 110.0, 110.0))
        );

        let _ = doc.evaluate();
        doc.set_position(frame, Vec2::new(-20.0, 40.0));
        assert_eq!(absolute_rect(&doc, rect), Rect::new(-20.0, 40.0, -10.0, 50.0));
    }

    #[test]
    fn absolute_rect_reads_translation_and_size() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let frame = placed(&mut doc, page, NodeType::Frame, Rect::new(50.0, 60.0, 150.0, 160.0));
        let text = placed(&mut doc, frame, NodeType::Text, Rect::new(5.0, 5.0, 25.0, 15.0));
        let _ = doc.evaluate();

        let rect = absolute_rect(&doc, text);
        assert_eq!(rect.origin(), Point::new(55.0, 65.0));
        assert_eq!(rect.size(), Size::new(20.0, 10.0));
    }

    #[test]
    fn total_frame_offset_of_nothing_is_zero() {
        let doc = Document::new();
        assert_eq!(total_frame_offset(&doc, None), Vec2::ZERO);
    }

    #[test]
    fn total_frame_offset_sums_frame_and_component_ancestors() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let frame = placed(&mut doc, page, NodeType::Frame, Rect::new(10.0, 20.0, 110.0, 120.0));
        let rect = placed(&mut doc, frame, NodeType::Rectangle, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(total_frame_offset(&doc, Some(rect)), Vec2::new(10.0, 20.0));

        let component =
            placed(&mut doc, frame, NodeType::Component, Rect::new(3.0, 4.0, 13.0, 14.0));
        let group = placed(&mut doc, component, NodeType::Group, Rect::new(7.0, 7.0, 9.0, 9.0));
        let inner = placed(&mut doc, group, NodeType::Ellipse, Rect::new(0.0, 0.0, 1.0, 1.0));
        // The group is skipped; the component and the frame count.
        assert_eq!(total_frame_offset(&doc, Some(inner)), Vec2::new(13.0, 24.0));
        // A frame counts its own offset.
        assert_eq!(total_frame_offset(&doc, Some(frame)), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn total_frame_offset_stops_at_a_detached_root() {
        let mut doc = Document::new();
        let frame = doc.create_node(NodeType::Frame);
        doc.set_position(frame, Vec2::new(4.0, 5.0));
        let rect = doc.create_child(frame, NodeType::Rectangle).unwrap();
        assert_eq!(total_frame_offset(&doc, Some(rect)), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn set_size_and_position_writes_position_before_resizing() {
        let mut doc = Document::new();
        let page = page(&mut doc);
        let rect = placed(&mut doc, page, NodeType::Rectangle, Rect::new(3.0, 4.0, 13.0, 24.0));
        assert_eq!(doc.position(rect), Vec2::new(3.0, 4.0));
        assert_eq!(doc.size(rect), Size::new(10.0, 20.0));

        let err = set_size_and_position_to_rect(&mut doc, page, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(err, Err(SceneError::NotResizable(NodeType::Page)));
        assert_eq!(doc.position(page), Vec2::new(1.0, 1.0));
    }
}
