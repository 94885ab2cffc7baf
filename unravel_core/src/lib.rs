// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene document, geometry queries, and structural edits for design layers.
//!
//! `unravel_core` models a design document as a tree of typed nodes (pages,
//! frames, groups, components, instances, and leaf shapes) and provides the
//! helpers a layer-editing tool needs on top of it: bounding boxes, ancestor
//! walks, property copies between layer variants, and the *explode*
//! transformation that unwraps a single-child component. It is `no_std`
//! compatible (with `alloc`) and stores nodes in struct-of-arrays slots
//! addressed by generational handles.
//!
//! # Architecture
//!
//! ```text
//!   Document (arena, topology, properties)
//!       │
//!       ├──► query::*      ancestor / selection predicates
//!       ├──► geometry::*   union rects, frame offsets, placement
//!       │
//!       └──► explode() ──► copy::copy_properties() + clone / remove
//!                │
//!                ▼
//!   Document::evaluate() ──► DocumentChanges
//! ```
//!
//! **[`node`]**: The [`Document`](node::Document) arena with generational
//! [`NodeId`](node::NodeId) handles, node types and type sets, and the
//! optional style/layout [`Properties`](node::Properties) each variant
//! carries. Absolute transforms are cached by evaluation and composed on read
//! while geometry edits are pending.
//!
//! **[`dirty`]**: Change-tracking channels via `understory_dirty`. GEOMETRY
//! propagates to descendants; STYLE is local; TOPOLOGY marks structural edits.
//!
//! **[`geometry`]**: Union rectangles, absolute rects, accumulated frame
//! offsets, and rect placement.
//!
//! **[`query`]**: Type predicates, ancestor searches, and selection helpers.
//!
//! **[`copy`]**: Fixed field-to-field copy tables for groups and frames.
//!
//! **[`explode`]**: Hoists the contents of a component's single wrapping
//! group or frame into the component itself.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! structural edits, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod copy;
pub mod dirty;
pub mod error;
pub mod explode;
pub mod geometry;
pub mod node;
pub mod query;
pub mod trace;

pub use error::SceneError;
pub use explode::{ExplodeOutcome, explode, explode_traced};
pub use node::{Document, NodeId, NodeType, NodeTypeSet};
