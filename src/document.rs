//! Input-side document model.
//!
//! The binary document format is parsed by an external library; this module
//! defines the layer tree shape that library hands us, plus the
//! [`Compositor`] capability it provides for rasterizing a single layer.

use image::{DynamicImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parts::BoundingBox;

/// Layer classification as delivered by the document model.
///
/// Kinds without an extraction rule are preserved verbatim in [`LayerKind::Other`]
/// rather than being rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    Pixel,
    /// Text layers; the source format calls these "type" layers.
    #[serde(rename = "type")]
    Text,
    Shape,
    SmartObject,
    Group,
    Artboard,
    #[serde(untagged)]
    Other(String),
}

impl LayerKind {
    /// Container kinds are traversed into rather than classified as leaves.
    pub fn is_container(&self) -> bool {
        matches!(self, LayerKind::Group | LayerKind::Artboard)
    }
}

/// Bounding box as stored in the document, in canvas coordinates.
///
/// Source variants disagree on the representation: some store edge offsets,
/// others corner pairs. Both normalize to the same [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bounds {
    Edges {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },
    Corners {
        top_left: (f32, f32),
        bottom_right: (f32, f32),
    },
}

impl Bounds {
    /// Normalize to `{x, y, width, height}` with `x=left`, `y=top`,
    /// `width=right-left`, `height=bottom-top`.
    pub fn normalized(self) -> BoundingBox {
        let (left, top, right, bottom) = match self {
            Bounds::Edges {
                left,
                top,
                right,
                bottom,
            } => (left, top, right, bottom),
            Bounds::Corners {
                top_left,
                bottom_right,
            } => (top_left.0, top_left.1, bottom_right.0, bottom_right.1),
        };
        BoundingBox {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// RGB color with 0-255 channel scale (channels may be fractional).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Convert to hex color string (e.g., "#ff7f00"), rounding each channel.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8
        )
    }
}

/// Raw layer-effect descriptor from the document model.
///
/// Open-ended on purpose: the document format grows effect kinds faster than
/// we map them, and unmapped kinds must be droppable without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDescriptor {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

/// A font referenced by a text layer's resource dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One styled span of a text layer, carried raw and un-interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRun {
    /// Attribute pairs straight from the text engine dictionary; pair order
    /// is whatever the document stored, not significant.
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// A node in the layer tree: either a leaf layer or a group/artboard with
/// ordered children. Child order is the document's native draw order and is
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerNode {
    pub name: String,
    pub visible: bool,
    pub kind: LayerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
    /// Opacity on the document's 0-100 scale; absent means fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_runs: Vec<StyleRun>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_list: Vec<FontDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    /// SVG path data for shape layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_data: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectDescriptor>,
}

impl LayerNode {
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        LayerNode {
            name: name.into(),
            visible: true,
            kind,
            bounds: None,
            blend_mode: None,
            opacity: None,
            children: Vec::new(),
            text_content: None,
            style_runs: Vec::new(),
            font_list: Vec::new(),
            justification: None,
            path_data: None,
            effects: Vec::new(),
        }
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Opacity on the canonical 0.0-1.0 scale; defaults to fully opaque.
    pub fn normalized_opacity(&self) -> f32 {
        self.opacity
            .map(|v| (v / 100.0).clamp(0.0, 1.0))
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Error)]
pub enum CompositeError {
    #[error("layer has no pixel data")]
    NoPixels,
    #[error("corrupt layer data: {0}")]
    Corrupt(String),
}

/// Rendering capability supplied by the document model: produce the visible
/// pixels of exactly one layer within its bounding box.
pub trait Compositor {
    fn composite(&self, node: &LayerNode) -> Result<DynamicImage, CompositeError>;
}

/// Trivial compositor that fills each layer's bounds with a single color.
///
/// Stands in for the real document renderer in fixtures and dry runs; layers
/// without bounds composite to a single pixel.
#[derive(Debug, Clone, Copy)]
pub struct SolidCompositor {
    pub color: [u8; 4],
}

impl Default for SolidCompositor {
    fn default() -> Self {
        SolidCompositor {
            color: [0, 0, 0, 255],
        }
    }
}

impl Compositor for SolidCompositor {
    fn composite(&self, node: &LayerNode) -> Result<DynamicImage, CompositeError> {
        let (width, height) = node
            .bounds
            .map(|b| {
                let bb = b.normalized();
                (
                    (bb.width.round() as u32).max(1),
                    (bb.height.round() as u32).max(1),
                )
            })
            .unwrap_or((1, 1));
        let img = RgbaImage::from_pixel(width, height, Rgba(self.color));
        Ok(DynamicImage::ImageRgba8(img))
    }
}
