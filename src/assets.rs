//! Call-scoped, in-memory asset collection.
//!
//! Extraction never touches the filesystem: emitted rasters and vectors are
//! byte buffers keyed by filename, and writing them anywhere is the
//! consumer's responsibility. Same-filename inserts overwrite the earlier
//! bytes in place, matching the source behavior of a flat output directory.

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageOutputFormat};
use indexmap::IndexMap;

use crate::parts::BoundingBox;

pub const MIME_PNG: &str = "image/png";
pub const MIME_SVG: &str = "image/svg+xml";

/// One emitted asset: raw bytes plus a declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Insertion-ordered filename -> asset map for one extraction call.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: IndexMap<String, Asset>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) an asset. Overwrites keep the original
    /// insertion position.
    pub fn insert(&mut self, filename: impl Into<String>, bytes: Vec<u8>, mime: &str) {
        self.assets.insert(
            filename.into(),
            Asset {
                bytes,
                mime: mime.to_string(),
            },
        );
    }

    pub fn get(&self, filename: &str) -> Option<&Asset> {
        self.assets.get(filename)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.assets.iter().map(|(name, asset)| (name.as_str(), asset))
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }
}

/// Encode a composited layer image to PNG bytes.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Wrap raw path data in a minimal standalone SVG document.
///
/// When the shape carries bounds, the viewBox is placed in canvas
/// coordinates so the path data needs no translation.
pub fn render_svg(path_data: &str, bounds: Option<&BoundingBox>) -> String {
    match bounds {
        Some(b) => format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\"><path d=\"{}\"/></svg>",
            b.x, b.y, b.width, b.height, b.width, b.height, path_data
        ),
        None => format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"{}\"/></svg>",
            path_data
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn encode_png_produces_png_magic() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            image::Rgba([255, 0, 0, 255]),
        ));
        let bytes = encode_png(&img).expect("encode png");
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn later_insert_overwrites_earlier_bytes() {
        let mut store = AssetStore::new();
        store.insert("part.png", vec![1, 2, 3], MIME_PNG);
        store.insert("part.png", vec![9], MIME_PNG);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("part.png").unwrap().bytes, vec![9]);
    }

    #[test]
    fn store_preserves_insertion_order() {
        let mut store = AssetStore::new();
        store.insert("b.png", vec![], MIME_PNG);
        store.insert("a.svg", vec![], MIME_SVG);
        store.insert("c.png", vec![], MIME_PNG);

        let names: Vec<&str> = store.filenames().collect();
        assert_eq!(names, vec!["b.png", "a.svg", "c.png"]);
    }

    #[test]
    fn render_svg_uses_bounds_for_viewbox() {
        let bb = BoundingBox {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        let svg = render_svg("M0 0L10 10Z", Some(&bb));
        assert!(svg.contains("viewBox=\"10 20 100 50\""));
        assert!(svg.contains("d=\"M0 0L10 10Z\""));
    }

    #[test]
    fn render_svg_without_bounds_omits_viewbox() {
        let svg = render_svg("M0 0Z", None);
        assert!(!svg.contains("viewBox"));
        assert!(svg.contains("<path d=\"M0 0Z\"/>"));
    }
}
