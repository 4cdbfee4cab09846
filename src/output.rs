use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parts::ExtractedPart;
use crate::walker::Extraction;

/// Schema version for output payloads.
pub const LPX_OUTPUT_VERSION: &str = "0.1.0";

/// Metadata for one emitted asset; the bytes stay in the
/// [`AssetStore`](crate::assets::AssetStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub filename: String,
    pub mime: String,
    pub size_bytes: usize,
}

/// Serializable summary of one extraction call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOutput {
    pub version: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub parts: Vec<ExtractedPart>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<AssetDescriptor>,
}

impl ExtractOutput {
    pub fn from_extraction(extraction: &Extraction) -> Self {
        ExtractOutput {
            version: LPX_OUTPUT_VERSION.to_string(),
            canvas_width: extraction.canvas_width,
            canvas_height: extraction.canvas_height,
            parts: extraction.parts.clone(),
            assets: extraction
                .assets
                .iter()
                .map(|(filename, asset)| AssetDescriptor {
                    filename: filename.to_string(),
                    mime: asset.mime.clone(),
                    size_bytes: asset.bytes.len(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetStore, MIME_PNG};
    use crate::document::LayerKind;

    #[test]
    fn output_serializes_with_version_and_asset_descriptors() {
        let mut assets = AssetStore::new();
        assets.insert("Logo.png", vec![0u8; 64], MIME_PNG);

        let extraction = Extraction {
            parts: vec![ExtractedPart {
                name: "Logo".to_string(),
                kind: LayerKind::Pixel,
                order: 1,
                geometry: None,
                text: None,
                effects: vec![],
                blend_mode: "Normal".to_string(),
                opacity: 1.0,
                asset_ref: None,
            }],
            assets,
            canvas_width: 800,
            canvas_height: 600,
        };

        let output = ExtractOutput::from_extraction(&extraction);
        assert_eq!(output.version, LPX_OUTPUT_VERSION);
        assert_eq!(output.assets.len(), 1);
        assert_eq!(output.assets[0].size_bytes, 64);

        let json = output.to_json().expect("serialize output");
        assert!(json.contains("\"canvasWidth\": 800"));
        assert!(json.contains("\"mime\": \"image/png\""));
    }
}
