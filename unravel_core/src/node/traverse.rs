// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use alloc::vec;
use alloc::vec::Vec;

use super::id::{INVALID, NodeId};
use super::store::Document;

/// An iterator over the direct children of a node.
///
/// Created by [`Document::children`].
#[derive(Debug)]
pub struct Children<'a> {
    doc: &'a Document,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(doc: &'a Document, first: u32) -> Self {
        Self {
            doc,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.doc.next_sibling[idx as usize];
        Some(self.doc.handle(idx))
    }
}

/// An iterator over the strict ancestors of a node, nearest first.
///
/// Created by [`Document::ancestors`]. The last item is the root of the
/// node's tree (the DOCUMENT node for attached nodes).
#[derive(Debug)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    current: u32,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(doc: &'a Document, parent: u32) -> Self {
        Self {
            doc,
            current: parent,
        }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.doc.parent[idx as usize];
        Some(self.doc.handle(idx))
    }
}

/// A depth-first pre-order iterator over a node and its descendants.
///
/// Created by [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<u32>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(doc: &'a Document, start: u32) -> Self {
        Self {
            doc,
            stack: vec![start],
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let idx = self.stack.pop()?;
        // Children are pushed last-to-first so they pop in document order.
        let mark = self.stack.len();
        let mut child = self.doc.first_child[idx as usize];
        while child != INVALID {
            self.stack.push(child);
            child = self.doc.next_sibling[child as usize];
        }
        self.stack[mark..].reverse();
        Some(self.doc.handle(idx))
    }
}
