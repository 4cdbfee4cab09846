//! Style-grouping index: collapse text parts that share an identical style
//! signature into one group with an ordered member list.
//!
//! The signature is order-independent (attribute pairs are sorted before
//! comparison) so two runs whose style maps hold the same pairs in a
//! different stored order still land in the same group.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::FontDescriptor;
use crate::parts::{BoundingBox, ExtractedPart, StyleRunRecord, TextRecord};

/// One collapsed group of identically-styled text parts.
///
/// Style data comes from the first-seen member; later members with divergent
/// style data are merged by key anyway and their own style data is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGroup {
    pub name: String,
    /// Sorted attribute pairs forming the normalized signature.
    pub signature: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub style_runs: Vec<StyleRunRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub font_list: Vec<FontDescriptor>,
    pub members: Vec<GroupMember>,
}

/// One member text run inside a [`StyleGroup`], in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<BoundingBox>,
    pub content: String,
    pub order: u32,
}

/// Normalized style signature: every attribute pair across the part's style
/// runs, sorted so stored order cannot split a group.
pub fn style_signature(text: &TextRecord) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = text
        .style_runs
        .iter()
        .flat_map(|run| run.attributes.iter().cloned())
        .collect();
    pairs.sort();
    pairs
}

/// Group text parts by `(name, signature)`. Parts without a text payload are
/// ignored. Output order is the first-appearance order of each distinct key.
pub fn group_text_parts(parts: &[ExtractedPart]) -> Vec<StyleGroup> {
    let mut groups: IndexMap<(String, Vec<(String, String)>), StyleGroup> = IndexMap::new();

    for part in parts {
        let Some(text) = &part.text else {
            continue;
        };
        let signature = style_signature(text);
        let key = (part.name.clone(), signature.clone());

        let group = groups.entry(key).or_insert_with(|| StyleGroup {
            name: part.name.clone(),
            signature,
            style_runs: text.style_runs.clone(),
            font_list: text.font_list.clone(),
            members: Vec::new(),
        });
        group.members.push(GroupMember {
            name: part.name.clone(),
            geometry: part.geometry,
            content: text.content.clone(),
            order: part.order,
        });
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LayerKind;

    fn text_part(name: &str, order: u32, attributes: Vec<(&str, &str)>) -> ExtractedPart {
        ExtractedPart {
            name: name.to_string(),
            kind: LayerKind::Text,
            order,
            geometry: None,
            text: Some(TextRecord {
                content: format!("content-{order}"),
                style_runs: vec![StyleRunRecord {
                    attributes: attributes
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                    color: None,
                    color_hex: None,
                }],
                font_list: vec![],
                alignment: None,
                font: None,
            }),
            effects: vec![],
            blend_mode: "Normal".to_string(),
            opacity: 1.0,
            asset_ref: None,
        }
    }

    #[test]
    fn signature_is_order_independent() {
        let a = text_part("Label", 1, vec![("size", "12"), ("font", "Arial")]);
        let b = text_part("Label", 2, vec![("font", "Arial"), ("size", "12")]);

        let groups = group_text_parts(&[a, b]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members.len(), 2);
        assert_eq!(groups[0].members[0].order, 1);
        assert_eq!(groups[0].members[1].order, 2);
    }

    #[test]
    fn differing_attributes_split_groups() {
        let a = text_part("Label", 1, vec![("size", "12")]);
        let b = text_part("Label", 2, vec![("size", "14")]);

        let groups = group_text_parts(&[a, b]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn same_style_different_name_splits_groups() {
        let a = text_part("Title", 1, vec![("size", "12")]);
        let b = text_part("Caption", 2, vec![("size", "12")]);

        let groups = group_text_parts(&[a, b]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Title");
        assert_eq!(groups[1].name, "Caption");
    }

    #[test]
    fn output_order_is_first_appearance_order() {
        let parts = vec![
            text_part("B", 1, vec![("size", "10")]),
            text_part("A", 2, vec![("size", "10")]),
            text_part("B", 3, vec![("size", "10")]),
        ];

        let groups = group_text_parts(&parts);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "B");
        assert_eq!(groups[1].name, "A");
        assert_eq!(groups[0].members.len(), 2);
    }

    #[test]
    fn first_member_supplies_group_style_data() {
        let mut first = text_part("Label", 1, vec![("size", "12")]);
        if let Some(text) = &mut first.text {
            text.font_list = vec![FontDescriptor {
                name: "Inter".to_string(),
                family: None,
                style: None,
            }];
        }
        // Same signature, divergent font list; the group keeps the first one.
        let mut second = text_part("Label", 2, vec![("size", "12")]);
        if let Some(text) = &mut second.text {
            text.font_list = vec![FontDescriptor {
                name: "Arial".to_string(),
                family: None,
                style: None,
            }];
        }

        let groups = group_text_parts(&[first, second]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].font_list[0].name, "Inter");
        assert_eq!(groups[0].members.len(), 2);
    }

    #[test]
    fn non_text_parts_are_ignored() {
        let raster = ExtractedPart {
            name: "Hero".to_string(),
            kind: LayerKind::Pixel,
            order: 1,
            geometry: None,
            text: None,
            effects: vec![],
            blend_mode: "Normal".to_string(),
            opacity: 1.0,
            asset_ref: None,
        };

        let groups = group_text_parts(&[raster]);
        assert!(groups.is_empty());
    }
}
