// Copyright 2026 the Unravel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style and layout properties.
//!
//! Every attribute in [`Properties`] is optional. `None` means the node's
//! variant does not carry the attribute at all, which is distinct from an
//! empty value such as `Some(Vec::new())` for "no fills".

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Vec2;

use super::kind::NodeType;

/// A value that may be the host's "mixed" sentinel.
///
/// Hosts report `Mixed` when an attribute differs across the parts of a node,
/// e.g. a rectangle with four different corner radii. `Mixed` is not a
/// settable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mixed<T> {
    /// A concrete value.
    Value(T),
    /// The parts disagree.
    Mixed,
}

impl<T> Mixed<T> {
    /// Returns the concrete value, if any.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Mixed => None,
        }
    }

    /// Whether this is the mixed sentinel.
    #[must_use]
    pub const fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }
}

/// Straight-alpha RGBA color, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// A gradient stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub position: f32,
    /// Stop color.
    pub color: Color,
}

/// Gradient geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientKind {
    /// Linear.
    Linear,
    /// Radial.
    Radial,
    /// Angular (conic).
    Angular,
    /// Diamond.
    Diamond,
}

/// What a paint draws.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintKind {
    /// A flat color.
    Solid(Color),
    /// A gradient.
    Gradient {
        /// Gradient geometry.
        kind: GradientKind,
        /// Color stops in position order.
        stops: Vec<ColorStop>,
    },
    /// An image fill referenced by content hash.
    Image {
        /// Image content hash.
        hash: String,
    },
}

/// A fill or stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// What the paint draws.
    pub kind: PaintKind,
    /// Paint opacity.
    pub opacity: f32,
    /// Whether the paint is visible.
    pub visible: bool,
    /// Blend mode applied to this paint.
    pub blend_mode: BlendMode,
}

impl Paint {
    /// A visible, opaque solid paint.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid(color),
            opacity: 1.0,
            visible: true,
            blend_mode: BlendMode::Normal,
        }
    }
}

/// Layer and paint blend modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "standard blend mode names")]
pub enum BlendMode {
    PassThrough,
    #[default]
    Normal,
    Darken,
    Multiply,
    ColorBurn,
    Lighten,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// Stroke placement relative to the shape outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrokeAlign {
    /// Centered on the outline.
    Center,
    /// Inside the outline.
    #[default]
    Inside,
    /// Outside the outline.
    Outside,
}

/// Stroke end caps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "standard cap names")]
pub enum StrokeCap {
    #[default]
    None,
    Round,
    Square,
    ArrowLines,
    ArrowEquilateral,
}

/// Stroke corner joins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "standard join names")]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

/// Kind of visual effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "effect names are self-describing")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

/// A shadow or blur effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    /// Effect kind.
    pub kind: EffectKind,
    /// Blur radius.
    pub radius: f64,
    /// Shadow color; `None` for blurs.
    pub color: Option<Color>,
    /// Shadow offset.
    pub offset: Vec2,
    /// Shadow spread.
    pub spread: f64,
    /// Whether the effect is visible.
    pub visible: bool,
}

/// Auto-layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Children are placed manually.
    #[default]
    None,
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

/// Auto-layout axis sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisSizingMode {
    /// The frame keeps its size.
    #[default]
    Fixed,
    /// The frame hugs its contents.
    Auto,
}

/// Alignment along the auto-layout primary axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "alignment names are self-describing")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Alignment along the auto-layout counter axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "alignment names are self-describing")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
}

/// How a child aligns inside an auto-layout parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "alignment names are self-describing")]
pub enum LayoutAlign {
    #[default]
    Inherit,
    Stretch,
    Min,
    Center,
    Max,
}

/// Prototype scroll direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "direction names are self-describing")]
pub enum OverflowDirection {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// How a layer responds to its frame being resized, per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "constraint names are self-describing")]
pub enum ConstraintType {
    #[default]
    Min,
    Center,
    Max,
    Stretch,
    Scale,
}

/// Resize constraints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constraints {
    /// Horizontal behavior.
    pub horizontal: ConstraintType,
    /// Vertical behavior.
    pub vertical: ConstraintType,
}

/// Export file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "format names are self-describing")]
pub enum ExportFormat {
    Png,
    Jpg,
    Svg,
    Pdf,
}

/// Raster export sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExportConstraint {
    /// Scale factor.
    Scale(f64),
    /// Fixed output width.
    Width(f64),
    /// Fixed output height.
    Height(f64),
}

/// One export preset.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSetting {
    /// Output format.
    pub format: ExportFormat,
    /// File name suffix.
    pub suffix: String,
    /// Raster sizing; ignored for vector formats.
    pub constraint: ExportConstraint,
}

/// Ruler guide axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "axis names are self-describing")]
pub enum Axis {
    X,
    Y,
}

/// A ruler guide inside a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guide {
    /// Axis the guide is perpendicular to.
    pub axis: Axis,
    /// Offset from the frame's origin.
    pub offset: f64,
}

/// Layout grid pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "pattern names are self-describing")]
pub enum GridPattern {
    Columns,
    Rows,
    Grid,
}

/// A layout grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGrid {
    /// Grid pattern.
    pub pattern: GridPattern,
    /// Cell size for `Grid`, track size for rows/columns.
    pub section_size: f64,
    /// Gap between tracks.
    pub gutter_size: f64,
    /// Track count.
    pub count: u32,
    /// Offset from the frame edge.
    pub offset: f64,
    /// Whether the grid is shown.
    pub visible: bool,
    /// Overlay color.
    pub color: Color,
}

/// Optional style and layout attributes of a node.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(missing_docs, reason = "fields mirror host attributes one to one")]
pub struct Properties {
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub expanded: Option<bool>,

    pub fills: Option<Vec<Paint>>,
    pub fill_style_id: Option<String>,
    pub strokes: Option<Vec<Paint>>,
    pub stroke_style_id: Option<String>,
    pub stroke_weight: Option<f64>,
    pub stroke_miter_limit: Option<f64>,
    pub stroke_align: Option<StrokeAlign>,
    pub stroke_cap: Option<StrokeCap>,
    pub stroke_join: Option<StrokeJoin>,
    pub dash_pattern: Option<Vec<f64>>,

    pub corner_radius: Option<Mixed<f64>>,
    pub corner_smoothing: Option<f64>,
    pub top_left_radius: Option<f64>,
    pub top_right_radius: Option<f64>,
    pub bottom_left_radius: Option<f64>,
    pub bottom_right_radius: Option<f64>,

    pub opacity: Option<f32>,
    pub blend_mode: Option<BlendMode>,
    pub is_mask: Option<bool>,
    pub effects: Option<Vec<Effect>>,
    pub effect_style_id: Option<String>,

    pub constraints: Option<Constraints>,
    pub export_settings: Option<Vec<ExportSetting>>,
    pub layout_align: Option<LayoutAlign>,
    pub layout_grow: Option<f64>,

    pub clips_content: Option<bool>,
    pub guides: Option<Vec<Guide>>,
    pub layout_grids: Option<Vec<LayoutGrid>>,
    pub grid_style_id: Option<String>,
    pub layout_mode: Option<LayoutMode>,
    pub primary_axis_sizing_mode: Option<AxisSizingMode>,
    pub counter_axis_sizing_mode: Option<AxisSizingMode>,
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub item_spacing: Option<f64>,
    pub overflow_direction: Option<OverflowDirection>,
    pub number_of_fixed_children: Option<u32>,
}

impl Properties {
    /// Returns the attributes a freshly created node of type `ty` carries,
    /// with host default values.
    #[must_use]
    pub fn defaults_for(ty: NodeType) -> Self {
        if !ty.is_scene_node() {
            return Self::default();
        }

        let mut props = Self {
            locked: Some(false),
            visible: Some(true),
            opacity: Some(1.0),
            blend_mode: Some(BlendMode::Normal),
            is_mask: Some(false),
            effects: Some(Vec::new()),
            effect_style_id: Some(String::new()),
            export_settings: Some(Vec::new()),
            layout_align: Some(LayoutAlign::Inherit),
            layout_grow: Some(0.0),
            constraints: Some(Constraints::default()),
            ..Self::default()
        };

        match ty {
            NodeType::Group | NodeType::BooleanOperation => {
                props.blend_mode = Some(BlendMode::PassThrough);
                props.expanded = Some(true);
                // Groups take their extent from their children.
                props.constraints = None;
            }
            NodeType::Slice => {
                props.opacity = None;
                props.blend_mode = None;
                props.is_mask = None;
                props.effects = None;
                props.effect_style_id = None;
            }
            _ => {}
        }

        if ty.is_container() || is_shape(ty) {
            props.fills = Some(Vec::new());
            props.fill_style_id = Some(String::new());
        }

        if is_shape(ty) || is_frame_like(ty) {
            props.strokes = Some(Vec::new());
            props.stroke_style_id = Some(String::new());
            props.stroke_weight = Some(1.0);
            props.stroke_miter_limit = Some(4.0);
            props.stroke_align = Some(StrokeAlign::Inside);
            props.stroke_cap = Some(StrokeCap::None);
            props.stroke_join = Some(StrokeJoin::Miter);
            props.dash_pattern = Some(Vec::new());
        }

        if is_frame_like(ty) || ty == NodeType::Rectangle {
            props.corner_radius = Some(Mixed::Value(0.0));
            props.corner_smoothing = Some(0.0);
            props.top_left_radius = Some(0.0);
            props.top_right_radius = Some(0.0);
            props.bottom_left_radius = Some(0.0);
            props.bottom_right_radius = Some(0.0);
        } else if matches!(
            ty,
            NodeType::Vector | NodeType::Polygon | NodeType::Star | NodeType::Ellipse
        ) {
            props.corner_radius = Some(Mixed::Value(0.0));
            props.corner_smoothing = Some(0.0);
        }

        if is_frame_like(ty) {
            props.fills = Some(vec![Paint::solid(Color::WHITE)]);
            props.expanded = Some(true);
            props.clips_content = Some(true);
            props.guides = Some(Vec::new());
            props.layout_grids = Some(Vec::new());
            props.grid_style_id = Some(String::new());
            props.layout_mode = Some(LayoutMode::None);
            props.primary_axis_sizing_mode = Some(AxisSizingMode::Auto);
            props.counter_axis_sizing_mode = Some(AxisSizingMode::Fixed);
            props.primary_axis_align_items = Some(PrimaryAxisAlign::Min);
            props.counter_axis_align_items = Some(CounterAxisAlign::Min);
            props.padding_left = Some(0.0);
            props.padding_right = Some(0.0);
            props.padding_top = Some(0.0);
            props.padding_bottom = Some(0.0);
            props.item_spacing = Some(0.0);
            props.overflow_direction = Some(OverflowDirection::None);
            props.number_of_fixed_children = Some(0);
        }

        props
    }
}

const fn is_frame_like(ty: NodeType) -> bool {
    matches!(
        ty,
        NodeType::Frame | NodeType::Component | NodeType::ComponentSet | NodeType::Instance
    )
}

const fn is_shape(ty: NodeType) -> bool {
    matches!(
        ty,
        NodeType::BooleanOperation
            | NodeType::Vector
            | NodeType::Rectangle
            | NodeType::Ellipse
            | NodeType::Line
            | NodeType::Polygon
            | NodeType::Star
            | NodeType::Text
    )
}
