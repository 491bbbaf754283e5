//! BOM flattening - pre-order enumeration of every node below a root

use crate::core::bom::BomNode;

/// Borrowing pre-order iterator over the descendants of a node
///
/// Yields each child before its own children, siblings in document order.
/// The root itself is never yielded.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, BomNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a BomNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    if !node.children.is_empty() {
                        self.stack.push(node.children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterate over every node below `root` in pre-order
pub fn descendants(root: &BomNode) -> Descendants<'_> {
    Descendants {
        stack: vec![root.children.iter()],
    }
}

/// Same as [`descendants`], paired with each node's depth (direct children are depth 1)
pub fn descendants_with_depth(root: &BomNode) -> Vec<(usize, &BomNode)> {
    fn walk<'a>(node: &'a BomNode, depth: usize, out: &mut Vec<(usize, &'a BomNode)>) {
        for child in &node.children {
            out.push((depth, child));
            walk(child, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(root, 1, &mut out);
    out
}

/// Flatten the tree below `root` into an owned pre-order sequence
pub fn flatten(root: &BomNode) -> Vec<BomNode> {
    descendants(root).cloned().collect()
}
