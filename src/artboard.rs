//! Artboard (multi-canvas) selection.
//!
//! Extraction is scoped to one canvas at a time: when the document root
//! holds artboards, the caller picks one and hands it to
//! [`walk`](crate::walker::walk) as the root. The walker itself is
//! unchanged; canvas width/height then describe the selected artboard.

use crate::document::{LayerKind, LayerNode};

/// Direct children of `root` that are artboards, in document order.
pub fn list_artboards(root: &LayerNode) -> Vec<&LayerNode> {
    root.children
        .iter()
        .filter(|child| child.kind == LayerKind::Artboard)
        .collect()
}

/// Names of the root's artboards, for selection UIs.
pub fn artboard_names(root: &LayerNode) -> Vec<&str> {
    list_artboards(root)
        .into_iter()
        .map(|a| a.name.as_str())
        .collect()
}

/// First artboard child matching `name`, if any.
pub fn select_artboard<'a>(root: &'a LayerNode, name: &str) -> Option<&'a LayerNode> {
    list_artboards(root).into_iter().find(|a| a.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Bounds, SolidCompositor};
    use crate::walker::{walk, WalkOptions};

    fn artboard(name: &str, width: f32, height: f32) -> LayerNode {
        let mut node = LayerNode::new(name, LayerKind::Artboard);
        node.bounds = Some(Bounds::Edges {
            left: 0.0,
            top: 0.0,
            right: width,
            bottom: height,
        });
        node
    }

    fn multi_artboard_root() -> LayerNode {
        let mut root = LayerNode::new("Document", LayerKind::Group);
        let mut mobile = artboard("Mobile", 375.0, 812.0);
        let mut hero = LayerNode::new("Hero", LayerKind::Pixel);
        hero.bounds = Some(Bounds::Edges {
            left: 0.0,
            top: 0.0,
            right: 375.0,
            bottom: 200.0,
        });
        mobile.children = vec![hero];
        root.children = vec![
            mobile,
            artboard("Desktop", 1440.0, 900.0),
            LayerNode::new("Stray", LayerKind::Pixel),
        ];
        root
    }

    #[test]
    fn lists_only_artboard_children() {
        let root = multi_artboard_root();
        assert_eq!(artboard_names(&root), vec!["Mobile", "Desktop"]);
    }

    #[test]
    fn selects_artboard_by_name() {
        let root = multi_artboard_root();
        let selected = select_artboard(&root, "Desktop").expect("desktop artboard");
        assert_eq!(selected.name, "Desktop");
        assert!(select_artboard(&root, "Tablet").is_none());
    }

    #[test]
    fn walking_a_selected_artboard_scopes_canvas_and_parts() {
        let root = multi_artboard_root();
        let mobile = select_artboard(&root, "Mobile").expect("mobile artboard");

        let extraction = walk(mobile, &SolidCompositor::default(), &WalkOptions::default())
            .expect("walk artboard");

        assert_eq!(extraction.canvas_width, 375);
        assert_eq!(extraction.canvas_height, 812);
        assert_eq!(extraction.parts.len(), 1);
        assert_eq!(extraction.parts[0].name, "Hero");
    }
}
