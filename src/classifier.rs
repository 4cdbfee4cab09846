//! Part classification: turn one visible leaf node into an [`ExtractedPart`]
//! plus, for renderable kinds, an emitted asset.
//!
//! Dispatch is over the closed [`LayerKind`] variants. Text layers produce
//! metadata only (no raster unless the walk opts in), shape layers emit a
//! vector asset, raster-ish kinds composite to PNG, and kinds without an
//! extraction rule emit a minimal record and a progress notice.

use crate::assets::{self, AssetStore, MIME_PNG, MIME_SVG};
use crate::document::{Color, Compositor, EffectDescriptor, LayerKind, LayerNode};
use crate::error::{ExtractError, Result};
use crate::parts::{AssetRef, EffectRecord, ExtractedPart, StyleRunRecord, TextRecord};
use crate::walker::WalkOptions;

/// Draw-order context for a leaf: the immediate containing group's name and
/// the leaf's raw child index within it. `None` for top-level leaves.
pub type GroupContext<'a> = Option<(&'a str, usize)>;

/// Synthesize the part name: the node's own name at top level,
/// `{group}_part_{index}` inside a group. The index is the raw child index,
/// so invisible siblings still advance it and names stay stable when
/// visibility toggles.
pub fn part_name(node: &LayerNode, group: GroupContext<'_>) -> String {
    match group {
        Some((group_name, index)) => format!("{}_part_{}", group_name, index),
        None => node.name.clone(),
    }
}

/// Classify one leaf node and emit its asset into `assets`.
///
/// `order` is the slot already assigned by the walker. Composite or encode
/// failures surface as [`ExtractError::PartExtraction`] naming the layer;
/// nothing is inserted into the store on failure.
pub fn classify(
    node: &LayerNode,
    order: u32,
    group: GroupContext<'_>,
    compositor: &dyn Compositor,
    assets: &mut AssetStore,
    options: &WalkOptions,
) -> Result<ExtractedPart> {
    let name = part_name(node, group);
    let mut part = ExtractedPart {
        name: name.clone(),
        kind: node.kind.clone(),
        order,
        geometry: None,
        text: None,
        effects: map_effects(&node.effects),
        blend_mode: node
            .blend_mode
            .clone()
            .unwrap_or_else(|| "Normal".to_string()),
        opacity: node.normalized_opacity(),
        asset_ref: None,
    };

    match &node.kind {
        LayerKind::Text => {
            part.text = Some(extract_text(node));
            if options.emit_text_raster {
                part.asset_ref = Some(emit_raster(node, &name, compositor, assets)?);
            }
        }
        LayerKind::Shape => {
            part.geometry = node.bounds.map(|b| b.normalized());
            if let Some(path_data) = &node.path_data {
                let svg = assets::render_svg(path_data, part.geometry.as_ref());
                let filename = format!("{}.svg", name);
                assets.insert(filename.clone(), svg.into_bytes(), MIME_SVG);
                part.asset_ref = Some(AssetRef {
                    filename,
                    mime: MIME_SVG.to_string(),
                });
            }
        }
        LayerKind::Pixel | LayerKind::SmartObject | LayerKind::Group | LayerKind::Artboard => {
            part.geometry = Some(node.bounds.map(|b| b.normalized()).unwrap_or_default());
            part.asset_ref = Some(emit_raster(node, &name, compositor, assets)?);
        }
        LayerKind::Other(kind) => {
            if let Some(progress) = &options.progress {
                progress(&format!(
                    "no extraction rule for layer '{}' (kind '{}'); emitting metadata only",
                    name, kind
                ));
            }
        }
    }

    Ok(part)
}

fn emit_raster(
    node: &LayerNode,
    name: &str,
    compositor: &dyn Compositor,
    assets: &mut AssetStore,
) -> Result<AssetRef> {
    let img = compositor
        .composite(node)
        .map_err(|e| ExtractError::part_extraction(&node.name, e))?;
    let bytes =
        assets::encode_png(&img).map_err(|e| ExtractError::part_extraction(&node.name, e))?;
    let filename = format!("{}.png", name);
    assets.insert(filename.clone(), bytes, MIME_PNG);
    Ok(AssetRef {
        filename,
        mime: MIME_PNG.to_string(),
    })
}

/// Build the text payload: content, raw style runs with resolved hex colors,
/// the font list, and alignment from the justification field.
pub fn extract_text(node: &LayerNode) -> TextRecord {
    let style_runs = node
        .style_runs
        .iter()
        .map(|run| StyleRunRecord {
            attributes: run.attributes.clone(),
            color: run.color,
            color_hex: run.color.as_ref().map(Color::to_hex),
        })
        .collect();

    TextRecord {
        content: node.text_content.clone().unwrap_or_default(),
        style_runs,
        font_list: node.font_list.clone(),
        alignment: node.justification.clone(),
        font: node.font_list.first().map(|f| f.name.clone()),
    }
}

/// Map raw effect descriptors to tagged records, dropping unknown kinds.
pub fn map_effects(effects: &[EffectDescriptor]) -> Vec<EffectRecord> {
    effects.iter().filter_map(map_effect).collect()
}

fn map_effect(effect: &EffectDescriptor) -> Option<EffectRecord> {
    match effect
        .kind
        .to_lowercase()
        .replace([' ', '_', '-'], "")
        .as_str()
    {
        "stroke" => Some(EffectRecord::Stroke {
            color: effect.color,
            size: effect.size,
            opacity: effect.opacity,
        }),
        "dropshadow" => Some(EffectRecord::DropShadow {
            color: effect.color,
            size: effect.size,
            opacity: effect.opacity,
            angle: effect.angle,
            distance: effect.distance,
        }),
        _ => None,
    }
}
