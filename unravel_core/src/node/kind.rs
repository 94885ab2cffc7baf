// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node type tags and constant type sets.

use core::fmt;

/// The variant of a node.
///
/// The string tags returned by [`as_str`](Self::as_str) are the ones design
/// hosts expose on `node.type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeType {
    /// The document root. Exactly one per [`Document`](super::Document).
    Document,
    /// A canvas page.
    Page,
    /// A frame; introduces a local coordinate origin for its children.
    Frame,
    /// A group; its children keep the enclosing frame's coordinates.
    Group,
    /// A main component.
    Component,
    /// A set of component variants.
    ComponentSet,
    /// An instance of a component.
    Instance,
    /// A boolean operation over its children.
    BooleanOperation,
    /// A vector network.
    Vector,
    /// A rectangle.
    Rectangle,
    /// An ellipse.
    Ellipse,
    /// A line.
    Line,
    /// A regular polygon.
    Polygon,
    /// A star.
    Star,
    /// A text layer.
    Text,
    /// An export slice.
    Slice,
}

impl NodeType {
    /// All node types, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Document,
        Self::Page,
        Self::Frame,
        Self::Group,
        Self::Component,
        Self::ComponentSet,
        Self::Instance,
        Self::BooleanOperation,
        Self::Vector,
        Self::Rectangle,
        Self::Ellipse,
        Self::Line,
        Self::Polygon,
        Self::Star,
        Self::Text,
        Self::Slice,
    ];

    /// Returns the host tag for this type, e.g. `"FRAME"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Page => "PAGE",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Vector => "VECTOR",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Line => "LINE",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::Text => "TEXT",
            Self::Slice => "SLICE",
        }
    }

    /// Parses a host tag such as `"COMPONENT"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == tag)
    }

    /// Whether nodes of this type accept children.
    #[must_use]
    pub const fn is_container(self) -> bool {
        NodeTypeSet::CONTAINERS.contains(self)
    }

    /// Whether this is a scene node, i.e. anything placed on a page.
    #[must_use]
    pub const fn is_scene_node(self) -> bool {
        !matches!(self, Self::Document | Self::Page)
    }

    /// Whether nodes of this type introduce a local coordinate origin.
    #[must_use]
    pub const fn establishes_coordinate_space(self) -> bool {
        NodeTypeSet::COORDINATE_SPACES.contains(self)
    }

    const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`NodeType`]s, usable in `const` context.
///
/// Queries such as [`is_of_type`](crate::query::is_of_type) accept anything
/// convertible into a set, so both a single type and a predefined set work.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeTypeSet(u32);

impl NodeTypeSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Containers that reset the local origin for the purpose of
    /// [`total_frame_offset`](crate::geometry::total_frame_offset).
    pub const FRAME_LIKE: Self = Self::of(&[NodeType::Frame, NodeType::Component]);

    /// Ancestors that disqualify a layer from being an orphan.
    pub const ORPHAN_BLOCKERS: Self =
        Self::of(&[NodeType::Frame, NodeType::Component, NodeType::Instance]);

    /// Types that accept children.
    pub const CONTAINERS: Self = Self::of(&[
        NodeType::Document,
        NodeType::Page,
        NodeType::Frame,
        NodeType::Group,
        NodeType::Component,
        NodeType::ComponentSet,
        NodeType::Instance,
        NodeType::BooleanOperation,
    ]);

    /// Types whose children are positioned relative to them.
    pub const COORDINATE_SPACES: Self = Self::of(&[
        NodeType::Document,
        NodeType::Page,
        NodeType::Frame,
        NodeType::Component,
        NodeType::ComponentSet,
        NodeType::Instance,
    ]);

    /// Wrapper types [`explode`](crate::explode::explode) can unwrap.
    pub const EXPLODABLE: Self = Self::of(&[NodeType::Group, NodeType::Frame]);

    /// Builds a set from a slice of types.
    #[must_use]
    pub const fn of(types: &[NodeType]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < types.len() {
            bits |= types[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Builds a set holding one type.
    #[must_use]
    pub const fn single(ty: NodeType) -> Self {
        Self(ty.bit())
    }

    /// Returns whether `ty` is in the set.
    #[must_use]
    pub const fn contains(self, ty: NodeType) -> bool {
        self.0 & ty.bit() != 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = NodeType> {
        NodeType::ALL.into_iter().filter(move |ty| self.contains(*ty))
    }
}

impl From<NodeType> for NodeTypeSet {
    fn from(ty: NodeType) -> Self {
        Self::single(ty)
    }
}

impl From<&[NodeType]> for NodeTypeSet {
    fn from(types: &[NodeType]) -> Self {
        Self::of(types)
    }
}

impl<const N: usize> From<[NodeType; N]> for NodeTypeSet {
    fn from(types: [NodeType; N]) -> Self {
        Self::of(&types)
    }
}

impl fmt::Debug for NodeTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn tags_round_trip_through_from_tag() {
        assert_eq!(NodeType::from_tag("COMPONENT_SET"), Some(NodeType::ComponentSet));
        assert_eq!(NodeType::from_tag("frame"), None);
    }

    #[test]
    fn set_membership() {
        let set = NodeTypeSet::from([NodeType::Frame, NodeType::Component]);
        assert_eq!(set, NodeTypeSet::FRAME_LIKE);
        assert!(set.contains(NodeType::Frame));
        assert!(!set.contains(NodeType::Group));
        assert!(NodeTypeSet::EMPTY.is_empty());
    }

    #[test]
    fn iter_follows_declaration_order() {
        let set = NodeTypeSet::of(&[NodeType::Instance, NodeType::Frame]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, [NodeType::Frame, NodeType::Instance]);
    }

    #[test]
    fn groups_do_not_reset_coordinates() {
        assert!(NodeType::Group.is_container());
        assert!(!NodeType::Group.establishes_coordinate_space());
        assert!(NodeType::Frame.establishes_coordinate_space());
        assert!(!NodeType::Text.is_container());
    }
}
