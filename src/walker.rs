//! Layer tree walker: flatten a nested group/layer hierarchy into an
//! ordered sequence of extracted parts.
//!
//! The traversal is pre-order, depth-first, left-to-right over visible nodes
//! in the document's native child order, implemented with an explicit frame
//! stack so arbitrarily deep nesting cannot overflow the call stack. One
//! 1-based order counter is threaded through the whole walk; it is a local
//! owned by the call, so independent documents can be walked concurrently.

use crate::assets::AssetStore;
use crate::classifier;
use crate::document::{Compositor, LayerNode};
use crate::error::Result;
use crate::parts::ExtractedPart;
use crate::progress::ProgressCallback;

/// What to do when a single node's composite/encode fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Surface the first failure and abort the whole traversal.
    #[default]
    Abort,
    /// Report the failure through the progress callback and skip the node.
    /// The node's order slot stays consumed, so the sequence keeps a gap.
    SkipAndLog,
}

#[derive(Clone, Default)]
pub struct WalkOptions {
    pub error_policy: ErrorPolicy,
    /// Also composite text layers to PNG (fallback variant behavior).
    pub emit_text_raster: bool,
    pub progress: Option<ProgressCallback>,
}

/// Result of one walk: ordered parts, the call-scoped asset store, and the
/// root canvas dimensions.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub parts: Vec<ExtractedPart>,
    pub assets: AssetStore,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

struct Frame<'a> {
    node: &'a LayerNode,
    /// Immediate containing group and raw child index; `None` at top level.
    group: Option<(&'a str, usize)>,
}

/// Walk the tree under `root` and extract every visible leaf.
///
/// Visibility is checked per node: a hidden group is never entered, so its
/// visible descendants contribute nothing. Groups consume one order slot on
/// entry but emit no part of their own. A root with no children yields an
/// empty part list, not an error.
///
/// Canvas dimensions are read once from the root's own bounds; when the
/// caller pre-selected an artboard, they describe that artboard.
pub fn walk(
    root: &LayerNode,
    compositor: &dyn Compositor,
    options: &WalkOptions,
) -> Result<Extraction> {
    let mut parts = Vec::new();
    let mut assets = AssetStore::new();
    let mut order: u32 = 0;

    let (canvas_width, canvas_height) = canvas_dimensions(root);

    let mut stack: Vec<Frame> = Vec::with_capacity(root.children.len());
    push_children(&mut stack, root, None);

    while let Some(frame) = stack.pop() {
        let node = frame.node;
        if !node.visible {
            continue;
        }

        order += 1;

        if node.is_container() {
            push_children(&mut stack, node, Some(node.name.as_str()));
            continue;
        }

        match classifier::classify(node, order, frame.group, compositor, &mut assets, options) {
            Ok(part) => parts.push(part),
            Err(err) => match options.error_policy {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::SkipAndLog => {
                    if let Some(progress) = &options.progress {
                        progress(&format!("skipping layer '{}': {}", node.name, err));
                    }
                }
            },
        }
    }

    Ok(Extraction {
        parts,
        assets,
        canvas_width,
        canvas_height,
    })
}

/// Push `parent`'s children in reverse so the stack pops them in document
/// order. The raw child index rides along for group-relative naming.
fn push_children<'a>(
    stack: &mut Vec<Frame<'a>>,
    parent: &'a LayerNode,
    group_name: Option<&'a str>,
) {
    for (index, child) in parent.children.iter().enumerate().rev() {
        stack.push(Frame {
            node: child,
            group: group_name.map(|name| (name, index)),
        });
    }
}

fn canvas_dimensions(root: &LayerNode) -> (u32, u32) {
    root.bounds
        .map(|b| {
            let bb = b.normalized();
            (
                bb.width.max(0.0).round() as u32,
                bb.height.max(0.0).round() as u32,
            )
        })
        .unwrap_or((0, 0))
}
