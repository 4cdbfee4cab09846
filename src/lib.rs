//! Layered Part Extractor (LPX) Library
//!
//! A library for separating layered design documents (PSD-style composited
//! formats) into independent renderable parts: per-layer raster images,
//! vector outlines for shape layers, and rich text metadata, each tagged
//! with normalized geometry and a stable global draw-order index.
//!
//! # Module Overview
//!
//! - [`document`] - Input layer tree model and the compositing capability
//! - [`walker`] - Depth-first, order-tracking layer tree traversal
//! - [`classifier`] - Per-leaf kind dispatch and payload extraction
//! - [`grouping`] - Style-signature grouping of text parts
//! - [`artboard`] - Multi-canvas selection helpers
//! - [`assets`] - Call-scoped, in-memory asset collection
//! - [`output`] - JSON output schema
//!
//! # Example
//!
//! ```no_run
//! use lpx_lib::{walk, group_text_parts, LayerNode, LayerKind, SolidCompositor, WalkOptions};
//!
//! # fn example() -> lpx_lib::Result<()> {
//! // The document-model library hands us a layer tree and a compositor.
//! let root = LayerNode::new("Document", LayerKind::Group);
//! let compositor = SolidCompositor::default();
//!
//! let extraction = walk(&root, &compositor, &WalkOptions::default())?;
//! for part in &extraction.parts {
//!     println!("{} (order {})", part.name, part.order);
//! }
//!
//! // Alternate mode: collapse identically-styled text runs.
//! let groups = group_text_parts(&extraction.parts);
//! # let _ = groups;
//! # Ok(())
//! # }
//! ```

pub mod artboard;
pub mod assets;
pub mod classifier;
pub mod document;
pub mod error;
pub mod grouping;
pub mod output;
pub mod parts;
pub mod progress;
pub mod walker;

pub use artboard::{artboard_names, list_artboards, select_artboard};
pub use assets::{encode_png, render_svg, Asset, AssetStore, MIME_PNG, MIME_SVG};
pub use classifier::{classify, extract_text, map_effects, part_name, GroupContext};
pub use document::{
    Bounds, Color, CompositeError, Compositor, EffectDescriptor, FontDescriptor, LayerKind,
    LayerNode, SolidCompositor, StyleRun,
};
pub use error::{ExtractError, Result};
pub use grouping::{group_text_parts, style_signature, GroupMember, StyleGroup};
pub use output::{AssetDescriptor, ExtractOutput, LPX_OUTPUT_VERSION};
pub use parts::{
    AssetRef, BoundingBox, EffectRecord, ExtractedPart, StyleRunRecord, TextRecord,
};
pub use progress::ProgressCallback;
pub use walker::{walk, ErrorPolicy, Extraction, WalkOptions};
