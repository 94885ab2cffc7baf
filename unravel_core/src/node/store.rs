// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays node storage with allocation, topology, and property management.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Size, Vec2};
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{INVALID, NodeId};
use super::kind::NodeType;
use super::props::Properties;
use super::traverse::{Ancestors, Children, Descendants};
use crate::dirty;
use crate::error::SceneError;

/// An owned design document: a tree of typed nodes rooted at a single
/// DOCUMENT node.
///
/// Nodes are addressed by [`NodeId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Removed nodes are recycled via a free list,
/// and generation counters make handles to removed nodes stale.
#[derive(Debug)]
pub struct Document {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Identity --
    pub(crate) node_type: Vec<NodeType>,
    pub(crate) name: Vec<String>,

    // -- Local geometry (set by callers) --
    pub(crate) position: Vec<Vec2>,
    pub(crate) size: Vec<Size>,
    pub(crate) rotation: Vec<f64>,

    // -- Style and layout --
    pub(crate) props: Vec<Properties>,

    // -- Computed geometry (written by evaluate) --
    pub(crate) absolute_transform: Vec<Affine>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,
    pub(crate) root: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) topology_dirty: bool,
    /// Set whenever GEOMETRY is marked; cleared by evaluation.
    pub(crate) geometry_pending: bool,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only its DOCUMENT root.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            node_type: Vec::new(),
            name: Vec::new(),
            position: Vec::new(),
            size: Vec::new(),
            rotation: Vec::new(),
            props: Vec::new(),
            absolute_transform: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            root: INVALID,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            topology_dirty: true,
            geometry_pending: true,
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        };
        doc.root = doc.alloc(NodeType::Document);
        doc
    }

    /// Returns the DOCUMENT root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.handle(self.root)
    }

    // -- Allocation API --

    /// Creates a detached node of the given type and returns its handle.
    ///
    /// The node starts at the origin with zero size, no rotation, and the
    /// [default properties](Properties::defaults_for) of its type.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is [`NodeType::Document`]; a document has one root.
    pub fn create_node(&mut self, ty: NodeType) -> NodeId {
        assert!(ty != NodeType::Document, "a document has exactly one root");
        let idx = self.alloc(ty);
        self.handle(idx)
    }

    /// Creates a node of type `ty` and appends it to `parent`.
    pub fn create_child(&mut self, parent: NodeId, ty: NodeType) -> Result<NodeId, SceneError> {
        self.validate(parent);
        if !self.node_type[parent.idx as usize].is_container() {
            return Err(SceneError::NotAContainer(
                self.node_type[parent.idx as usize],
            ));
        }
        let child = self.create_node(ty);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Removes a node and its entire subtree from the document.
    ///
    /// Every handle into the subtree becomes stale.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn remove(&mut self, id: NodeId) -> Result<(), SceneError> {
        self.validate(id);
        if id.idx == self.root {
            return Err(SceneError::DocumentRoot);
        }
        if self.parent[id.idx as usize] != INVALID {
            self.detach_idx(id.idx);
        }
        let mut subtree = Vec::new();
        self.collect_post_order(id.idx, &mut subtree);
        for idx in subtree {
            self.free(idx);
        }
        Ok(())
    }

    /// Returns a deep copy of `id` and its subtree.
    ///
    /// The copy is detached; append it wherever it belongs. Copies get fresh
    /// handles and are reported as added by the next evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn clone_node(&mut self, id: NodeId) -> Result<NodeId, SceneError> {
        self.validate(id);
        if id.idx == self.root {
            return Err(SceneError::DocumentRoot);
        }
        let idx = self.clone_subtree(id.idx);
        Ok(self.handle(idx))
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns the number of live nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Topology API --

    /// Appends `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is moved, as hosts do. Marks the
    /// GEOMETRY channel for `child`'s subtree so absolute transforms are
    /// recomputed under the new ancestry.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.check_attach(parent, child)?;
        if self.parent[child.idx as usize] != INVALID {
            self.detach_idx(child.idx);
        }
        self.link_last(parent.idx, child.idx);
        self.mark_attached(parent.idx, child.idx);
        Ok(())
    }

    /// Inserts `child` at position `index` among `parent`'s children.
    ///
    /// `index` is interpreted after `child` has been taken out of its current
    /// parent, so moving a node within one parent behaves like an append at
    /// `index`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), SceneError> {
        self.check_attach(parent, child)?;
        let mut len = self.child_count(parent);
        if self.parent[child.idx as usize] == parent.idx {
            len -= 1;
        }
        if index > len {
            return Err(SceneError::IndexOutOfRange { index, len });
        }

        if self.parent[child.idx as usize] != INVALID {
            self.detach_idx(child.idx);
        }
        match self.child_idx_at(parent.idx, index) {
            Some(sibling) => self.link_before(child.idx, sibling),
            None => self.link_last(parent.idx, child.idx),
        }
        self.mark_attached(parent.idx, child.idx);
        Ok(())
    }

    /// Takes `id` out of its parent without removing it from the document.
    ///
    /// Does nothing if the node is already detached.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn detach(&mut self, id: NodeId) {
        self.validate(id);
        if self.parent[id.idx as usize] != INVALID {
            self.detach_idx(id.idx);
        }
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(self.handle(p))
        }
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    /// Returns an iterator over the strict ancestors of a node, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        self.validate(id);
        Ancestors::new(self, self.parent[id.idx as usize])
    }

    /// Returns a depth-first pre-order iterator over `id` and its descendants.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        self.validate(id);
        Descendants::new(self, id.idx)
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Returns the child at `index`, if there is one.
    #[must_use]
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).nth(index)
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the type of a node.
    #[must_use]
    pub fn node_type(&self, id: NodeId) -> NodeType {
        self.validate(id);
        self.node_type[id.idx as usize]
    }

    /// Returns the layer name.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.validate(id);
        &self.name[id.idx as usize]
    }

    /// Returns the local `x` coordinate.
    #[must_use]
    pub fn x(&self, id: NodeId) -> f64 {
        self.position(id).x
    }

    /// Returns the local `y` coordinate.
    #[must_use]
    pub fn y(&self, id: NodeId) -> f64 {
        self.position(id).y
    }

    /// Returns the local position relative to the nearest coordinate-space
    /// ancestor.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Vec2 {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self, id: NodeId) -> f64 {
        self.size(id).width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self, id: NodeId) -> f64 {
        self.size(id).height
    }

    /// Returns the size.
    #[must_use]
    pub fn size(&self, id: NodeId) -> Size {
        self.validate(id);
        self.size[id.idx as usize]
    }

    /// Returns the rotation in degrees, counter-clockwise.
    #[must_use]
    pub fn rotation(&self, id: NodeId) -> f64 {
        self.validate(id);
        self.rotation[id.idx as usize]
    }

    /// Returns the style and layout properties.
    #[must_use]
    pub fn properties(&self, id: NodeId) -> &Properties {
        self.validate(id);
        &self.props[id.idx as usize]
    }

    /// Returns the transform from local space to the nearest coordinate-space
    /// ancestor: `translate(x, y) * rotate(-rotation)`.
    #[must_use]
    pub fn local_transform(&self, id: NodeId) -> Affine {
        self.validate(id);
        self.local_transform_at(id.idx)
    }

    /// Returns the transform from local space to document space.
    ///
    /// Reads the value cached by [`evaluate`](Self::evaluate) when no geometry
    /// change is pending, and composes it from the coordinate-space chain
    /// otherwise.
    #[must_use]
    pub fn absolute_transform(&self, id: NodeId) -> Affine {
        self.validate(id);
        if self.geometry_pending {
            self.compose_absolute_at(id.idx)
        } else {
            self.absolute_transform[id.idx as usize]
        }
    }

    /// Returns the absolute transform as the host's nested rows,
    /// `[[a, c, e], [b, d, f]]`, with the translation in the last column.
    #[must_use]
    pub fn absolute_transform_rows(&self, id: NodeId) -> [[f64; 3]; 2] {
        let [a, b, c, d, e, f] = self.absolute_transform(id).as_coeffs();
        [[a, c, e], [b, d, f]]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the layer name.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.validate(id);
        self.name[id.idx as usize] = name.into();
    }

    /// Sets the local `x` coordinate.
    pub fn set_x(&mut self, id: NodeId, x: f64) {
        let y = self.y(id);
        self.set_position(id, Vec2::new(x, y));
    }

    /// Sets the local `y` coordinate.
    pub fn set_y(&mut self, id: NodeId, y: f64) {
        let x = self.x(id);
        self.set_position(id, Vec2::new(x, y));
    }

    /// Sets the local position.
    ///
    /// Marks the GEOMETRY channel dirty with eager propagation to descendants.
    pub fn set_position(&mut self, id: NodeId, position: Vec2) {
        self.validate(id);
        self.position[id.idx as usize] = position;
        self.mark_geometry(id.idx);
    }

    /// Sets the rotation in degrees, counter-clockwise.
    ///
    /// Marks the GEOMETRY channel dirty with eager propagation to descendants.
    pub fn set_rotation(&mut self, id: NodeId, degrees: f64) {
        self.validate(id);
        self.rotation[id.idx as usize] = degrees;
        self.mark_geometry(id.idx);
    }

    /// Resizes a node.
    ///
    /// Children are not scaled or re-laid out. Marks the GEOMETRY channel dirty
    /// with eager propagation to descendants.
    pub fn resize(&mut self, id: NodeId, width: f64, height: f64) -> Result<(), SceneError> {
        self.validate(id);
        let ty = self.node_type[id.idx as usize];
        if !ty.is_scene_node() {
            return Err(SceneError::NotResizable(ty));
        }
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(SceneError::InvalidSize { width, height });
        }
        self.size[id.idx as usize] = Size::new(width, height);
        self.mark_geometry(id.idx);
        Ok(())
    }

    /// Returns the style and layout properties for editing.
    ///
    /// Marks the STYLE channel dirty.
    pub fn properties_mut(&mut self, id: NodeId) -> &mut Properties {
        self.validate(id);
        self.dirty.mark(id.idx, dirty::STYLE);
        &mut self.props[id.idx as usize]
    }

    // -- Internal helpers --

    pub(crate) fn handle(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    pub(crate) fn local_transform_at(&self, idx: u32) -> Affine {
        let position = self.position[idx as usize];
        let rotation = self.rotation[idx as usize];
        Affine::translate(position) * Affine::rotate(-rotation.to_radians())
    }

    /// Composes `idx`'s absolute transform from the local transforms of its
    /// coordinate-space chain, ignoring the cache.
    pub(crate) fn compose_absolute_at(&self, idx: u32) -> Affine {
        let mut transform = self.local_transform_at(idx);
        let mut space = self.coordinate_space_of(idx);
        while space != INVALID {
            transform = self.local_transform_at(space) * transform;
            space = self.coordinate_space_of(space);
        }
        transform
    }

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: NodeId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale NodeId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn alloc(&mut self, ty: NodeType) -> u32 {
        let props = Properties::defaults_for(ty);
        let name = String::from(default_name(ty));
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot. The generation was bumped when it was freed.
            let i = idx as usize;
            self.parent[i] = INVALID;
            self.first_child[i] = INVALID;
            self.next_sibling[i] = INVALID;
            self.prev_sibling[i] = INVALID;
            self.node_type[i] = ty;
            self.name[i] = name;
            self.position[i] = Vec2::ZERO;
            self.size[i] = Size::ZERO;
            self.rotation[i] = 0.0;
            self.props[i] = props;
            self.absolute_transform[i] = Affine::IDENTITY;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.node_type.push(ty);
            self.name.push(name);
            self.position.push(Vec2::ZERO);
            self.size.push(Size::ZERO);
            self.rotation.push(0.0);
            self.props.push(props);
            self.absolute_transform.push(Affine::IDENTITY);
            self.generation.push(0);
            idx
        };

        self.topology_dirty = true;
        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
        self.dirty.mark(idx, dirty::GEOMETRY);
        self.geometry_pending = true;
        idx
    }

    fn free(&mut self, idx: u32) {
        let i = idx as usize;
        self.dirty.remove_key(idx);
        // Bump generation so old handles immediately fail validation.
        self.generation[i] += 1;
        self.parent[i] = INVALID;
        self.first_child[i] = INVALID;
        self.next_sibling[i] = INVALID;
        self.prev_sibling[i] = INVALID;
        self.props[i] = Properties::default();
        self.name[i].clear();

        self.free_list.push(idx);
        self.topology_dirty = true;
        self.pending_removed.push(idx);
    }

    fn clone_subtree(&mut self, src: u32) -> u32 {
        let s = src as usize;
        let dst = self.alloc(self.node_type[s]);
        let d = dst as usize;
        self.name[d] = self.name[s].clone();
        self.position[d] = self.position[s];
        self.size[d] = self.size[s];
        self.rotation[d] = self.rotation[s];
        self.props[d] = self.props[s].clone();
        self.absolute_transform[d] = self.absolute_transform[s];

        let mut child = self.first_child[s];
        while child != INVALID {
            let copy = self.clone_subtree(child);
            self.link_last(dst, copy);
            self.mark_attached(dst, copy);
            child = self.next_sibling[child as usize];
        }
        dst
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.validate(parent);
        self.validate(child);
        if child.idx == self.root {
            return Err(SceneError::DocumentRoot);
        }
        let parent_ty = self.node_type[parent.idx as usize];
        if !parent_ty.is_container() {
            return Err(SceneError::NotAContainer(parent_ty));
        }
        let mut current = parent.idx;
        while current != INVALID {
            if current == child.idx {
                return Err(SceneError::WouldCycle);
            }
            current = self.parent[current as usize];
        }
        Ok(())
    }

    fn child_idx_at(&self, parent: u32, index: usize) -> Option<u32> {
        let mut child = self.first_child[parent as usize];
        let mut i = 0;
        while child != INVALID {
            if i == index {
                return Some(child);
            }
            i += 1;
            child = self.next_sibling[child as usize];
        }
        None
    }

    fn link_last(&mut self, p: u32, c: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }
    }

    fn link_before(&mut self, c: u32, s: u32) {
        let p = self.parent[s as usize];
        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `s` was the first child.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;
    }

    /// Records a new parent-child edge in the dirty tracker.
    fn mark_attached(&mut self, p: u32, c: u32) {
        // Child depends on parent for GEOMETRY.
        let _ = self.dirty.add_dependency(c, p, dirty::GEOMETRY);
        self.mark_geometry(c);
        self.topology_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Marks GEOMETRY for `idx` and everything that depends on it.
    fn mark_geometry(&mut self, idx: u32) {
        self.dirty.mark_with(idx, dirty::GEOMETRY, &EagerPolicy);
        self.geometry_pending = true;
    }

    fn detach_idx(&mut self, c: u32) {
        let p = self.parent[c as usize];
        self.unlink_from_parent(c);
        self.dirty.remove_dependency(c, p, dirty::GEOMETRY);
        self.mark_geometry(c);
        self.topology_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Removes `idx` from its parent's child list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was first child.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    fn collect_post_order(&self, idx: u32, out: &mut Vec<u32>) {
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.collect_post_order(child, out);
            child = self.next_sibling[child as usize];
        }
        out.push(idx);
    }
}

fn default_name(ty: NodeType) -> &'static str {
    match ty {
        NodeType::Document => "Document",
        NodeType::Page => "Page",
        NodeType::Frame => "Frame",
        NodeType::Group => "Group",
        NodeType::Component => "Component",
        NodeType::ComponentSet => "Component Set",
        NodeType::Instance => "Instance",
        NodeType::BooleanOperation => "Boolean",
        NodeType::Vector => "Vector",
        NodeType::Rectangle => "Rectangle",
        NodeType::Ellipse => "Ellipse",
        NodeType::Line => "Line",
        NodeType::Polygon => "Polygon",
        NodeType::Star => "Star",
        NodeType::Text => "Text",
        NodeType::Slice => "Slice",
    }
}
