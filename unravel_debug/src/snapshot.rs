// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document subtree dumps.
//!
//! [`to_json`] captures a subtree as a [`serde_json::Value`] so two states of
//! a document can be diffed; [`write_outline`] prints one indented line per
//! node.

use std::io::{self, Write};

use serde_json::{Value, json};

use unravel_core::{Document, NodeId};

/// Returns `node` and its subtree as JSON.
///
/// Each object carries the node's type, name, local geometry, and a
/// `children` array in sibling order. Handles are not included, so a
/// subtree and its clone snapshot identically.
#[must_use]
pub fn to_json(doc: &Document, node: NodeId) -> Value {
    let children: Vec<Value> = doc.children(node).map(|c| to_json(doc, c)).collect();
    json!({
        "type": doc.node_type(node).as_str(),
        "name": doc.name(node),
        "x": doc.x(node),
        "y": doc.y(node),
        "width": doc.width(node),
        "height": doc.height(node),
        "rotation": doc.rotation(node),
        "children": children,
    })
}

/// Writes `node` and its subtree to `writer` as JSON.
pub fn export(doc: &Document, node: NodeId, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, &to_json(doc, node))?;
    Ok(())
}

/// Writes one line per node of the subtree at `node`, indented two spaces per
/// level.
pub fn write_outline(doc: &Document, node: NodeId, writer: &mut dyn Write) -> io::Result<()> {
    let base = doc.ancestors(node).count();
    for current in doc.descendants(node) {
        let depth = doc.ancestors(current).count() - base;
        writeln!(
            writer,
            "{:indent$}{} {:?} ({}, {}) {}x{}",
            "",
            doc.node_type(current),
            doc.name(current),
            doc.x(current),
            doc.y(current),
            doc.width(current),
            doc.height(current),
            indent = depth * 2,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use unravel_core::geometry::set_size_and_position_to_rect;
    use unravel_core::{NodeType, explode};

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let page = doc.create_child(root, NodeType::Page).unwrap();
        let component = doc.create_child(page, NodeType::Component).unwrap();
        let instance = doc.create_child(page, NodeType::Instance).unwrap();
        let frame = doc.create_child(component, NodeType::Frame).unwrap();
        let rect = doc.create_child(frame, NodeType::Rectangle).unwrap();
        doc.set_name(component, "Button");
        doc.set_name(rect, "Background");
        set_size_and_position_to_rect(&mut doc, rect, Rect::new(2.0, 3.0, 12.0, 8.0)).unwrap();
        (doc, page, component, instance)
    }

    #[test]
    fn json_mirrors_the_tree() {
        let (doc, _, component, _) = sample();
        let value = to_json(&doc, component);
        assert_eq!(value["type"], "COMPONENT");
        assert_eq!(value["name"], "Button");
        assert_eq!(value["children"][0]["type"], "FRAME");
        let rect = &value["children"][0]["children"][0];
        assert_eq!(rect["name"], "Background");
        assert_eq!(rect["x"], 2.0);
        assert_eq!(rect["width"], 10.0);
        assert_eq!(rect["children"], json!([]));
    }

    #[test]
    fn export_produces_valid_json() {
        let (doc, page, _, _) = sample();
        let mut out = Vec::new();
        export(&doc, page, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, to_json(&doc, page));
    }

    #[test]
    fn explode_is_visible_in_snapshots() {
        let (mut doc, _, component, instance) = sample();
        let before = to_json(&doc, component);
        explode(&mut doc, component, instance).unwrap();
        let after = to_json(&doc, component);

        // The frame's only child is now the component's only child.
        assert_eq!(after["children"][0], before["children"][0]["children"][0]);
    }

    #[test]
    fn outline_indents_by_depth() {
        let (doc, page, _, _) = sample();
        let mut out = Vec::new();
        write_outline(&doc, page, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5, "got: {text}");
        assert!(lines[0].starts_with("PAGE "), "got: {text}");
        assert!(lines[1].starts_with("  COMPONENT \"Button\""), "got: {text}");
        assert!(lines[2].starts_with("    FRAME "), "got: {text}");
        assert_eq!(lines[3], "      RECTANGLE \"Background\" (2, 3) 10x5");
        assert!(lines[4].starts_with("  INSTANCE "), "got: {text}");
    }
}
