// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene document data model.
//!
//! A *node* is a vertex in a design document tree. Each node has:
//!
//! - An identity ([`NodeId`]): a generational handle that becomes stale when
//!   the node is removed, so removed nodes cannot be read or edited by accident.
//! - A [`NodeType`] tag. Only container types accept children; see
//!   [`NodeType::is_container`].
//! - Topology: parent, first-child, and sibling links forming an ordered tree
//!   rooted at a single DOCUMENT node.
//! - **Local geometry** set by the caller: `x`, `y`, `width`, `height`, and
//!   `rotation`. Children are positioned relative to their nearest
//!   coordinate-space ancestor (see [`NodeTypeSet::COORDINATE_SPACES`]), not
//!   necessarily their direct parent: group children use the enclosing
//!   frame's space.
//! - **Style and layout** [`Properties`], all optional.
//! - **Computed geometry** produced by [`evaluate`](Document::evaluate): the
//!   absolute transform mapping local space to document space.
//!
//! # Dirty tracking
//!
//! Mutations mark the corresponding channel (see [`dirty`](crate::dirty)):
//! moves, rotations, and resizes mark GEOMETRY for the whole subtree;
//! property edits mark STYLE; structural edits mark TOPOLOGY.

mod evaluate;
mod id;
mod kind;
mod props;
mod store;
mod traverse;

pub use evaluate::DocumentChanges;
pub use id::{INVALID, NodeId};
pub use kind::{NodeType, NodeTypeSet};
pub use props::{
    Axis, AxisSizingMode, BlendMode, Color, ColorStop, ConstraintType, Constraints,
    CounterAxisAlign, Effect, EffectKind, ExportConstraint, ExportFormat, ExportSetting,
    GradientKind, GridPattern, Guide, LayoutAlign, LayoutGrid, LayoutMode, Mixed,
    OverflowDirection, Paint, PaintKind, PrimaryAxisAlign, Properties, StrokeAlign, StrokeCap,
    StrokeJoin,
};
pub use store::Document;
pub use traverse::{Ancestors, Children, Descendants};
