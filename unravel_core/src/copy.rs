// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field-to-field property copies between nodes.
//!
//! A copy table is a `&'static [Field]`. [`copy_properties`] walks the table
//! and, for each field the source carries, overwrites the target's value.
//! Fields the source does not carry (`None`) are left alone on the target.
//! A `Mixed` corner radius is never copied, since the sentinel is not a
//! settable value.

use crate::node::{Document, NodeId};

/// A copyable node attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "one variant per Properties field")]
pub enum Field {
    Locked,
    Visible,
    Rotation,
    Expanded,
    Fills,
    FillStyleId,
    Strokes,
    StrokeStyleId,
    StrokeWeight,
    StrokeMiterLimit,
    StrokeAlign,
    StrokeCap,
    StrokeJoin,
    DashPattern,
    CornerRadius,
    CornerSmoothing,
    TopLeftRadius,
    TopRightRadius,
    BottomLeftRadius,
    BottomRightRadius,
    Opacity,
    BlendMode,
    IsMask,
    Effects,
    EffectStyleId,
    Constraints,
    ExportSettings,
    LayoutAlign,
    LayoutGrow,
    ClipsContent,
    Guides,
    LayoutGrids,
    GridStyleId,
    LayoutMode,
    PrimaryAxisSizingMode,
    CounterAxisSizingMode,
    PrimaryAxisAlignItems,
    CounterAxisAlignItems,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    ItemSpacing,
    OverflowDirection,
    NumberOfFixedChildren,
}

/// Attributes a group hands to the instance when it is exploded.
pub const GROUP_TO_INSTANCE: &[Field] = &[Field::Locked, Field::Visible, Field::Rotation];

/// Attributes a frame hands to the instance when it is exploded.
pub const FRAME_TO_INSTANCE: &[Field] = &[
    Field::Locked,
    Field::Visible,
    Field::Rotation,
    Field::Constraints,
    Field::ExportSettings,
];

/// Attributes a group hands to its parent when it is exploded.
pub const GROUP_TO_PARENT: &[Field] = &[
    Field::Expanded,
    Field::Strokes,
    Field::StrokeWeight,
    Field::StrokeMiterLimit,
    Field::StrokeAlign,
    Field::StrokeCap,
    Field::StrokeJoin,
    Field::DashPattern,
    Field::FillStyleId,
    Field::StrokeStyleId,
    Field::CornerSmoothing,
    Field::TopLeftRadius,
    Field::TopRightRadius,
    Field::BottomLeftRadius,
    Field::BottomRightRadius,
    Field::CornerRadius,
    Field::Opacity,
    Field::BlendMode,
    Field::IsMask,
    Field::Effects,
    Field::EffectStyleId,
    Field::Rotation,
    Field::LayoutAlign,
    Field::LayoutGrow,
    Field::OverflowDirection,
    Field::NumberOfFixedChildren,
    Field::ExportSettings,
];

/// Attributes a frame hands to its parent when it is exploded.
pub const FRAME_TO_PARENT: &[Field] = &[
    Field::ClipsContent,
    Field::Guides,
    Field::LayoutGrids,
    Field::GridStyleId,
    Field::LayoutMode,
    Field::PrimaryAxisSizingMode,
    Field::CounterAxisSizingMode,
    Field::PrimaryAxisAlignItems,
    Field::CounterAxisAlignItems,
    Field::PaddingLeft,
    Field::PaddingRight,
    Field::PaddingTop,
    Field::PaddingBottom,
    Field::ItemSpacing,
    Field::Expanded,
    Field::Fills,
    Field::Strokes,
    Field::StrokeWeight,
    Field::StrokeMiterLimit,
    Field::StrokeAlign,
    Field::StrokeCap,
    Field::StrokeJoin,
    Field::DashPattern,
    Field::FillStyleId,
    Field::StrokeStyleId,
    Field::CornerSmoothing,
    Field::TopLeftRadius,
    Field::TopRightRadius,
    Field::BottomLeftRadius,
    Field::BottomRightRadius,
    Field::CornerRadius,
    Field::Opacity,
    Field::BlendMode,
    Field::IsMask,
    Field::Effects,
    Field::EffectStyleId,
    Field::Rotation,
    Field::LayoutAlign,
    Field::LayoutGrow,
    Field::Constraints,
    Field::ExportSettings,
    Field::OverflowDirection,
    Field::NumberOfFixedChildren,
];

/// Copies every field in `fields` that `from` carries onto `to`, returning
/// how many fields were written.
///
/// # Panics
///
/// Panics if either handle is stale.
pub fn copy_properties(doc: &mut Document, from: NodeId, to: NodeId, fields: &[Field]) -> usize {
    if from == to {
        return 0;
    }
    let source = doc.properties(from).clone();
    let rotation = doc.rotation(from);
    let mut copied = 0;
    let mut rotate = false;

    let target = doc.properties_mut(to);
    for &field in fields {
        macro_rules! take {
            ($name:ident) => {
                if let Some(value) = &source.$name {
                    target.$name = Some(value.clone());
                    true
                } else {
                    false
                }
            };
        }

        let wrote = match field {
            Field::Rotation => {
                rotate = true;
                true
            }
            Field::CornerRadius => match source.corner_radius {
                Some(radius) if !radius.is_mixed() => {
                    target.corner_radius = Some(radius);
                    true
                }
                _ => false,
            },
            Field::Locked => take!(locked),
            Field::Visible => take!(visible),
            Field::Expanded => take!(expanded),
            Field::Fills => take!(fills),
            Field::FillStyleId => take!(fill_style_id),
            Field::Strokes => take!(strokes),
            Field::StrokeStyleId => take!(stroke_style_id),
            Field::StrokeWeight => take!(stroke_weight),
            Field::StrokeMiterLimit => take!(stroke_miter_limit),
            Field::StrokeAlign => take!(stroke_align),
            Field::StrokeCap => take!(stroke_cap),
            Field::StrokeJoin => take!(stroke_join),
            Field::DashPattern => take!(dash_pattern),
            Field::CornerSmoothing => take!(corner_smoothing),
            Field::TopLeftRadius => take!(top_left_radius),
            Field::TopRightRadius => take!(top_right_radius),
            Field::BottomLeftRadius => take!(bottom_left_radius),
            Field::BottomRightRadius => take!(bottom_right_radius),
            Field::Opacity => take!(opacity),
            Field::BlendMode => take!(blend_mode),
            Field::IsMask => take!(is_mask),
            Field::Effects => take!(effects),
            Field::EffectStyleId => take!(effect_style_id),
            Field::Constraints => take!(constraints),
            Field::ExportSettings => take!(export_settings),
            Field::LayoutAlign => take!(layout_align),
            Field::LayoutGrow => take!(layout_grow),
            Field::ClipsContent => take!(clips_content),
            Field::Guides => take!(guides),
            Field::LayoutGrids => take!(layout_grids),
            Field::GridStyleId => take!(grid_style_id),
            Field::LayoutMode => take!(layout_mode),
            Field::PrimaryAxisSizingMode => take!(primary_axis_sizing_mode),
            Field::CounterAxisSizingMode => take!(counter_axis_sizing_mode),
            Field::PrimaryAxisAlignItems => take!(primary_axis_align_items),
            Field::CounterAxisAlignItems => take!(counter_axis_align_items),
            Field::PaddingLeft => take!(padding_left),
            Field::PaddingRight => take!(padding_right),
            Field::PaddingTop => take!(padding_top),
            Field::PaddingBottom => take!(padding_bottom),
            Field::ItemSpacing => take!(item_spacing),
            Field::OverflowDirection => take!(overflow_direction),
            Field::NumberOfFixedChildren => take!(number_of_fixed_children),
        };
        if wrote {
            copied += 1;
        }
    }

    // Rotation is geometry, not a style property.
    if rotate {
        doc.set_rotation(to, rotation);
    }
    copied
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::node::{Color, ConstraintType, Constraints, Mixed, NodeType, Paint};

    #[test]
    fn copies_present_fields_only() {
        let mut doc = Document::new();
        let group = doc.create_node(NodeType::Group);
        let frame = doc.create_node(NodeType::Frame);
        doc.properties_mut(frame).strokes = Some(vec![Paint::solid(Color::BLACK)]);
        doc.properties_mut(group).opacity = Some(0.25);

        // Groups carry no strokes, so the frame keeps its own.
        let copied = copy_properties(&mut doc, group, frame, &[Field::Strokes, Field::Opacity]);
        assert_eq!(copied, 1);
        assert_eq!(
            doc.properties(frame).strokes,
            Some(vec![Paint::solid(Color::BLACK)])
        );
        assert_eq!(doc.properties(frame).opacity, Some(0.25));
    }

    #[test]
    fn mixed_corner_radius_is_skipped() {
        let mut doc = Document::new();
        let from = doc.create_node(NodeType::Frame);
        let to = doc.create_node(NodeType::Component);
        doc.properties_mut(from).corner_radius = Some(Mixed::Mixed);
        doc.properties_mut(from).top_left_radius = Some(8.0);
        doc.properties_mut(to).corner_radius = Some(Mixed::Value(2.0));

        let fields = [Field::CornerRadius, Field::TopLeftRadius];
        let copied = copy_properties(&mut doc, from, to, &fields);
        assert_eq!(copied, 1);
        assert_eq!(doc.properties(to).corner_radius, Some(Mixed::Value(2.0)));
        assert_eq!(doc.properties(to).top_left_radius, Some(8.0));
    }

    #[test]
    fn rotation_is_copied_through_geometry() {
        let mut doc = Document::new();
        let from = doc.create_node(NodeType::Frame);
        let to = doc.create_node(NodeType::Instance);
        doc.set_rotation(from, 45.0);
        doc.properties_mut(from).constraints = Some(Constraints {
            horizontal: ConstraintType::Stretch,
            vertical: ConstraintType::Center,
        });

        let copied = copy_properties(&mut doc, from, to, FRAME_TO_INSTANCE);
        assert_eq!(copied, FRAME_TO_INSTANCE.len());
        assert_eq!(doc.rotation(to), 45.0);
        assert_eq!(
            doc.properties(to).constraints,
            doc.properties(from).constraints
        );
    }

    #[test]
    fn frame_table_extends_group_table() {
        for field in GROUP_TO_PARENT {
            assert!(
                FRAME_TO_PARENT.contains(field),
                "{field:?} missing from the frame table"
            );
        }
        for field in GROUP_TO_INSTANCE {
            assert!(FRAME_TO_INSTANCE.contains(field), "{field:?} missing");
        }
    }

    #[test]
    fn copying_onto_itself_is_a_no_op() {
        let mut doc = Document::new();
        let frame = doc.create_node(NodeType::Frame);
        assert_eq!(copy_properties(&mut doc, frame, frame, FRAME_TO_PARENT), 0);
    }
}
