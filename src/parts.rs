//! Output record types produced by the extraction engine.
//!
//! - [`ExtractedPart`] - One renderable part with geometry, order, payloads
//! - [`BoundingBox`] - Normalized element positioning
//! - [`TextRecord`] - Text layer payload (content, runs, fonts)
//! - [`EffectRecord`] - Closed, tagged layer-effect variants

use serde::{Deserialize, Serialize};

use crate::document::{Color, FontDescriptor, LayerKind};

/// Rectangle bounds for a part, normalized to `{x, y, width, height}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One styled span of extracted text, with its color resolved to hex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRunRecord {
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
}

/// Payload for text parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecord {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_runs: Vec<StyleRunRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_list: Vec<FontDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    /// Display name of the primary font, when the layer lists any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

/// Layer effect mapped to a closed variant. Unknown descriptor kinds are
/// dropped during mapping, never surfaced as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EffectRecord {
    Stroke {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f32>,
    },
    DropShadow {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        angle: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        distance: Option<f32>,
    },
}

/// Handle to an emitted asset in the call-scoped store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub filename: String,
    pub mime: String,
}

/// One extracted part, in global draw order.
///
/// `name` is the node's own name for top-level leaves and
/// `{group}_part_{index}` for leaves inside a group; collisions across
/// sibling groups are possible and left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPart {
    pub name: String,
    pub kind: LayerKind,
    /// 1-based position in the global pre-order traversal; groups consume a
    /// slot without emitting a part, so the sequence may have gaps.
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<EffectRecord>,
    /// Defaults to "Normal" when the layer declares none.
    pub blend_mode: String,
    /// Canonical 0.0-1.0 scale; defaults to 1.0.
    pub opacity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_ref: Option<AssetRef>,
}
