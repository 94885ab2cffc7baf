// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unwrapping a component's single group or frame.
//!
//! A component that wraps all of its content in one GROUP or FRAME can be
//! flattened: the wrapper's styling moves onto the component, its
//! instance-level attributes move onto an instance of the component, and its
//! children are hoisted one level up. A FRAME wrapper is removed once empty.

use alloc::vec::Vec;

use crate::copy::{
    FRAME_TO_INSTANCE, FRAME_TO_PARENT, GROUP_TO_INSTANCE, GROUP_TO_PARENT, copy_properties,
};
use crate::error::SceneError;
use crate::node::{Document, NodeId, NodeType, NodeTypeSet};
use crate::query::is_of_type;
use crate::trace::{
    ExplodeBeginEvent, ExplodeEndEvent, ExplodeSkippedEvent, NodeClonedEvent, NodeRemovedEvent,
    PropertiesCopiedEvent, SkipReason, Tracer,
};

/// What [`explode`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExplodeOutcome {
    /// The wrapper's children were hoisted into the component.
    Exploded {
        /// Number of layers hoisted.
        hoisted: usize,
        /// Whether the emptied wrapper was removed. Only frames are.
        wrapper_removed: bool,
    },
    /// The component has no children; nothing changed.
    Empty,
    /// The component has more than one child; nothing changed.
    MultipleChildren(usize),
    /// The single child is neither a group nor a frame; nothing changed.
    UnsupportedChild(NodeType),
}

impl ExplodeOutcome {
    /// Returns whether the document was edited.
    #[must_use]
    pub fn is_exploded(&self) -> bool {
        matches!(self, Self::Exploded { .. })
    }
}

/// Flattens `component`'s single group or frame child into `component`.
///
/// See [`explode_traced`].
pub fn explode(
    doc: &mut Document,
    component: NodeId,
    instance: NodeId,
) -> Result<ExplodeOutcome, SceneError> {
    explode_traced(doc, component, instance, &mut Tracer::none())
}

/// Flattens `component`'s single group or frame child into `component`,
/// reporting each step to `tracer`.
///
/// The wrapper's parent table is copied onto `component` and its instance
/// table onto `instance`. Each of the wrapper's children is then deep-cloned,
/// appended to `component`, and the original removed. Hoisted layers keep
/// their local `x`/`y`. An emptied FRAME is removed; an emptied GROUP is
/// left in place.
///
/// Edits are not rolled back if a step fails partway.
///
/// # Panics
///
/// Panics if `component` or `instance` is stale.
pub fn explode_traced(
    doc: &mut Document,
    component: NodeId,
    instance: NodeId,
    tracer: &mut Tracer<'_>,
) -> Result<ExplodeOutcome, SceneError> {
    let child_count = doc.child_count(component);
    tracer.explode_begin(&ExplodeBeginEvent {
        component,
        instance,
        child_count,
    });

    if child_count > 1 {
        return Ok(skip(
            tracer,
            component,
            SkipReason::MultipleChildren(child_count),
            ExplodeOutcome::MultipleChildren(child_count),
        ));
    }
    let Some(wrapper) = doc.child_at(component, 0) else {
        return Ok(skip(tracer, component, SkipReason::Empty, ExplodeOutcome::Empty));
    };
    let wrapper_type = doc.node_type(wrapper);
    if !is_of_type(doc, wrapper, NodeTypeSet::EXPLODABLE) {
        return Ok(skip(
            tracer,
            component,
            SkipReason::UnsupportedChild(wrapper_type),
            ExplodeOutcome::UnsupportedChild(wrapper_type),
        ));
    }

    let (parent_table, instance_table) = if wrapper_type == NodeType::Frame {
        (FRAME_TO_PARENT, FRAME_TO_INSTANCE)
    } else {
        (GROUP_TO_PARENT, GROUP_TO_INSTANCE)
    };
    let parent = doc.parent(wrapper).unwrap_or(component);
    for (to, table) in [(parent, parent_table), (instance, instance_table)] {
        let fields = copy_properties(doc, wrapper, to, table);
        tracer.properties_copied(&PropertiesCopiedEvent {
            from: wrapper,
            to,
            fields,
        });
    }

    let layers: Vec<NodeId> = doc.children(wrapper).collect();
    for &original in &layers {
        let clone = doc.clone_node(original)?;
        doc.append_child(parent, clone)?;
        tracer.node_cloned(&NodeClonedEvent {
            original,
            clone,
            parent,
        });
        let node_type = doc.node_type(original);
        doc.remove(original)?;
        tracer.node_removed(&NodeRemovedEvent {
            node: original,
            node_type,
        });
    }

    let wrapper_removed = wrapper_type == NodeType::Frame && doc.child_count(wrapper) == 0;
    if wrapper_removed {
        doc.remove(wrapper)?;
        tracer.node_removed(&NodeRemovedEvent {
            node: wrapper,
            node_type: wrapper_type,
        });
    }

    tracer.explode_end(&ExplodeEndEvent {
        component,
        hoisted: layers.len(),
        wrapper_removed,
    });
    Ok(ExplodeOutcome::Exploded {
        hoisted: layers.len(),
        wrapper_removed,
    })
}

fn skip(
    tracer: &mut Tracer<'_>,
    component: NodeId,
    reason: SkipReason,
    outcome: ExplodeOutcome,
) -> ExplodeOutcome {
    tracer.explode_skipped(&ExplodeSkippedEvent { component, reason });
    outcome
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Vec2;

    use super::*;
    use crate::node::{
        Color, ConstraintType, Constraints, ExportConstraint, ExportFormat, ExportSetting,
        LayoutMode, Paint,
    };

    struct Fixture {
        doc: Document,
        component: NodeId,
        instance: NodeId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let root = doc.root();
        let page = doc.create_child(root, NodeType::Page).unwrap();
        let component = doc.create_child(page, NodeType::Component).unwrap();
        let instance = doc.create_child(page, NodeType::Instance).unwrap();
        Fixture {
            doc,
            component,
            instance,
        }
    }

    fn names(doc: &Document, parent: NodeId) -> Vec<&str> {
        doc.children(parent).map(|child| doc.name(child)).collect()
    }

    #[test]
    fn frame_wrapper_is_flattened_and_removed() {
        let mut f = fixture();
        let frame = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let c1 = f.doc.create_child(frame, NodeType::Rectangle).unwrap();
        let c2 = f.doc.create_child(frame, NodeType::Group).unwrap();
        let nested = f.doc.create_child(c2, NodeType::Text).unwrap();
        f.doc.set_name(c1, "c1");
        f.doc.set_name(c2, "c2");
        f.doc.set_name(nested, "label");
        f.doc.set_position(c1, Vec2::new(4.0, 8.0));

        let fill = vec![Paint::solid(Color::rgb(1.0, 0.0, 0.0))];
        let export = vec![ExportSetting {
            format: ExportFormat::Png,
            suffix: "@2x".into(),
            constraint: ExportConstraint::Scale(2.0),
        }];
        let constraints = Constraints {
            horizontal: ConstraintType::Scale,
            vertical: ConstraintType::Max,
        };
        {
            let props = f.doc.properties_mut(frame);
            props.fills = Some(fill.clone());
            props.layout_mode = Some(LayoutMode::Vertical);
            props.item_spacing = Some(12.0);
            props.locked = Some(true);
            props.visible = Some(false);
            props.constraints = Some(constraints);
            props.export_settings = Some(export.clone());
        }
        f.doc.set_rotation(frame, 30.0);

        let outcome = explode(&mut f.doc, f.component, f.instance).unwrap();
        assert_eq!(
            outcome,
            ExplodeOutcome::Exploded {
                hoisted: 2,
                wrapper_removed: true,
            }
        );

        // Clones replace the originals, in order.
        assert_eq!(names(&f.doc, f.component), ["c1", "c2"]);
        assert!(!f.doc.is_alive(frame));
        assert!(!f.doc.is_alive(c1));
        assert!(!f.doc.is_alive(nested));
        let hoisted: Vec<NodeId> = f.doc.children(f.component).collect();
        assert_eq!(f.doc.position(hoisted[0]), Vec2::new(4.0, 8.0));
        assert_eq!(names(&f.doc, hoisted[1]), ["label"]);

        let component = f.doc.properties(f.component);
        assert_eq!(component.fills, Some(fill));
        assert_eq!(component.layout_mode, Some(LayoutMode::Vertical));
        assert_eq!(component.item_spacing, Some(12.0));
        assert_eq!(component.constraints, Some(constraints));
        assert_eq!(f.doc.rotation(f.component), 30.0);

        let instance = f.doc.properties(f.instance);
        assert_eq!(instance.locked, Some(true));
        assert_eq!(instance.visible, Some(false));
        assert_eq!(instance.constraints, Some(constraints));
        assert_eq!(instance.export_settings, Some(export));
        assert_eq!(f.doc.rotation(f.instance), 30.0);
    }

    #[test]
    fn group_wrapper_stays_behind_empty() {
        let mut f = fixture();
        let group = f.doc.create_child(f.component, NodeType::Group).unwrap();
        let star = f.doc.create_child(group, NodeType::Star).unwrap();
        f.doc.set_name(star, "star");
        f.doc.properties_mut(group).opacity = Some(0.5);
        f.doc.properties_mut(group).locked = Some(true);

        let outcome = explode(&mut f.doc, f.component, f.instance).unwrap();
        assert_eq!(
            outcome,
            ExplodeOutcome::Exploded {
                hoisted: 1,
                wrapper_removed: false,
            }
        );
        assert!(f.doc.is_alive(group));
        assert_eq!(f.doc.child_count(group), 0);
        assert_eq!(f.doc.child_count(f.component), 2);
        assert_eq!(f.doc.name(f.doc.child_at(f.component, 1).unwrap()), "star");
        assert_eq!(f.doc.properties(f.component).opacity, Some(0.5));
        assert_eq!(f.doc.properties(f.instance).locked, Some(true));
        // Groups do not hand their fills to the component.
        assert_eq!(
            f.doc.properties(f.component).fills,
            Some(vec![Paint::solid(Color::WHITE)])
        );
    }

    #[test]
    fn two_children_leave_the_document_untouched() {
        let mut f = fixture();
        let a = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let b = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let inner = f.doc.create_child(a, NodeType::Rectangle).unwrap();
        f.doc.properties_mut(a).locked = Some(true);
        f.doc.properties_mut(a).opacity = Some(0.5);
        f.doc.set_rotation(a, 15.0);
        f.doc.set_rotation(f.component, 5.0);
        let before = f.doc.properties(f.instance).clone();
        let component_before = f.doc.properties(f.component).clone();

        let outcome = explode(&mut f.doc, f.component, f.instance).unwrap();
        assert_eq!(outcome, ExplodeOutcome::MultipleChildren(2));
        assert!(!outcome.is_exploded());
        assert_eq!(f.doc.children(f.component).collect::<Vec<_>>(), [a, b]);
        assert_eq!(f.doc.parent(inner), Some(a));
        assert_eq!(f.doc.properties(f.instance), &before);
        assert_eq!(f.doc.properties(f.component), &component_before);
        assert_eq!(f.doc.rotation(f.component), 5.0);
        assert_eq!(f.doc.rotation(f.instance), 0.0);
    }

    #[test]
    fn empty_and_unsupported_children_are_skipped() {
        let mut f = fixture();
        assert_eq!(
            explode(&mut f.doc, f.component, f.instance),
            Ok(ExplodeOutcome::Empty)
        );

        let text = f.doc.create_child(f.component, NodeType::Text).unwrap();
        assert_eq!(
            explode(&mut f.doc, f.component, f.instance),
            Ok(ExplodeOutcome::UnsupportedChild(NodeType::Text))
        );
        assert_eq!(f.doc.parent(text), Some(f.component));
    }

    #[test]
    fn frame_wrapper_without_children_is_removed() {
        let mut f = fixture();
        let frame = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let outcome = explode(&mut f.doc, f.component, f.instance).unwrap();
        assert_eq!(
            outcome,
            ExplodeOutcome::Exploded {
                hoisted: 0,
                wrapper_removed: true,
            }
        );
        assert!(!f.doc.is_alive(frame));
        assert_eq!(f.doc.child_count(f.component), 0);
    }

    #[test]
    fn hoisted_layers_are_reported_as_added() {
        let mut f = fixture();
        let frame = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let rect = f.doc.create_child(frame, NodeType::Rectangle).unwrap();
        let _ = f.doc.evaluate();

        explode(&mut f.doc, f.component, f.instance).unwrap();
        let changes = f.doc.evaluate();
        let hoisted = f.doc.child_at(f.component, 0).unwrap();
        assert!(changes.added.contains(&hoisted.index()));
        assert!(changes.removed.contains(&rect.index()));
        assert!(changes.removed.contains(&frame.index()));
        assert!(changes.topology_changed);
    }

    #[test]
    fn hoisting_into_reused_slots_reports_each_layer_once() {
        let mut f = fixture();
        let frame = f.doc.create_child(f.component, NodeType::Frame).unwrap();
        let c1 = f.doc.create_child(frame, NodeType::Rectangle).unwrap();
        f.doc.create_child(frame, NodeType::Ellipse).unwrap();
        let _ = f.doc.evaluate();

        explode(&mut f.doc, f.component, f.instance).unwrap();
        let mut hoisted: Vec<u32> = f.doc.children(f.component).map(|n| n.index()).collect();
        // The second clone lands in the slot the first original gave up.
        assert_eq!(hoisted[1], c1.index());
        hoisted.sort_unstable();

        let changes = f.doc.evaluate();
        assert_eq!(changes.added, hoisted);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_explode_reports_each_step() {
        use alloc::format;
        use alloc::string::String;

        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Log(Vec<String>);
        impl TraceSink for Log {
            fn on_explode_begin(&mut self, e: &ExplodeBeginEvent) {
                self.0.push(format!("begin {}", e.child_count));
            }
            fn on_properties_copied(&mut self, e: &PropertiesCopiedEvent) {
                self.0.push(format!("copied {}", e.fields));
            }
            fn on_node_cloned(&mut self, _: &NodeClonedEvent) {
                self.0.push("cloned".into());
            }
            fn on_node_removed(&mut self, e: &NodeRemovedEvent) {
                self.0.push(format!("removed {}", e.node_type));
            }
            fn on_explode_end(&mut self, e: &ExplodeEndEvent) {
                self.0.push(format!("end {}", e.hoisted));
            }
        }

        let mut f = fixture();
        let group = f.doc.create_child(f.component, NodeType::Group).unwrap();
        f.doc.create_child(group, NodeType::Line).unwrap();

        let mut log = Log::default();
        let mut tracer = Tracer::new(&mut log);
        explode_traced(&mut f.doc, f.component, f.instance, &mut tracer).unwrap();
        drop(tracer);

        assert_eq!(log.0[0], "begin 1");
        assert!(log.0[1].starts_with("copied "));
        assert_eq!(log.0[2], "copied 3");
        assert_eq!(log.0[3..], ["cloned", "removed LINE", "end 1"]);
    }
}
