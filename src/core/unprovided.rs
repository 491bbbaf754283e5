//! Unprovided-step detection
//!
//! Finds assembly nodes that are not ready to build in-house: the assembly
//! itself, or at least one of its direct children, is not provided. The scan
//! prunes itself: a provided node whose direct children are all provided (or
//! any node without children) is skipped together with its whole subtree, so
//! unprovided parts nested below it are not reported.

use crate::core::bom::BomNode;

/// Whether `node` is an assembly that is unprovided or has an unprovided child
pub fn is_unprovided_assembly(node: &BomNode) -> bool {
    !node.children.is_empty()
        && (!node.is_provided() || node.children.iter().any(|c| !c.is_provided()))
}

/// Find flagged assembly nodes below `root`, in pre-order
pub fn find_unprovided(root: &BomNode) -> Vec<BomNode> {
    root.children
        .iter()
        .filter(|child| is_unprovided_assembly(child))
        .flat_map(|child| {
            let mut found = vec![child.clone()];
            found.extend(find_unprovided(child));
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[BomNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.description.as_str()).collect()
    }

    #[test]
    fn test_flags_assembly_with_unprovided_child() {
        let tree = BomNode::new("root", 1, "").with_children(vec![
            BomNode::new("frame", 1, "provided").with_step(1),
            BomNode::new("panel", 2, "supplier").with_children(vec![
                BomNode::new("bolt", 4, "provided"),
                BomNode::new("glass", 1, "supplier"),
            ]),
        ]);
        assert_eq!(names(&find_unprovided(&tree)), vec!["panel"]);
    }

    #[test]
    fn test_flags_unprovided_assembly_with_provided_children() {
        let tree = BomNode::new("root", 1, "").with_children(vec![
            BomNode::new("frame", 1, "provided").with_step(1),
            BomNode::new("panel", 2, "supplier")
                .with_children(vec![BomNode::new("bolt", 4, "provided")]),
        ]);

        let found = find_unprovided(&tree);
        assert_eq!(names(&found), vec!["panel"]);
        assert_eq!(found[0].step, -1);
    }

    #[test]
    fn test_provided_assembly_with_provided_children_is_not_flagged() {
        let tree = BomNode::new("root", 1, "").with_children(vec![BomNode::new(
            "door", 2, "Provided",
        )
        .with_children(vec![
            BomNode::new("hinge", 2, "provided"),
            BomNode::new("bolt", 6, "PROVIDED"),
        ])]);
        assert!(find_unprovided(&tree).is_empty());
    }

    #[test]
    fn test_all_provided_returns_empty() {
        let tree = BomNode::new("root", 1, "").with_children(vec![
            BomNode::new("a", 1, "provided").with_children(vec![
                BomNode::new("a1", 1, "provided"),
                BomNode::new("a2", 1, "PROVIDED")
                    .with_children(vec![BomNode::new("a2x", 1, "provided")]),
            ]),
            BomNode::new("b", 1, "provided"),
        ]);
        assert!(find_unprovided(&tree).is_empty());
    }

    #[test]
    fn test_leaf_unprovided_nodes_are_not_flagged() {
        let tree = BomNode::new("root", 1, "").with_children(vec![
            BomNode::new("screw", 8, "supplier"),
            BomNode::new("washer", 8, ""),
        ]);
        assert!(find_unprovided(&tree).is_empty());
    }

    #[test]
    fn test_pruned_branch_hides_nested_unprovided() {
        // "cabinet" is provided with only provided children, so "door" and
        // "hinge" below it are never examined.
        let tree = BomNode::new("root", 1, "").with_children(vec![BomNode::new(
            "cabinet", 1, "provided",
        )
        .with_children(vec![BomNode::new("door", 2, "provided").with_children(vec![
            BomNode::new("hinge", 2, "supplier")
                .with_children(vec![BomNode::new("pin", 1, "supplier")]),
        ])])]);

        assert!(find_unprovided(&tree).is_empty());
    }

    #[test]
    fn test_recurses_into_flagged_nodes_preorder() {
        let tree = BomNode::new("root", 1, "").with_children(vec![
            BomNode::new("outer", 1, "").with_children(vec![
                BomNode::new("inner", 1, "supplier")
                    .with_children(vec![BomNode::new("part", 1, "supplier")]),
                BomNode::new("sibling", 1, "provided")
                    .with_children(vec![BomNode::new("deep", 1, "")]),
            ]),
            BomNode::new("second", 1, "").with_children(vec![BomNode::new("x", 1, "")]),
        ]);

        assert_eq!(
            names(&find_unprovided(&tree)),
            vec!["outer", "inner", "sibling", "second"]
        );
    }

    #[test]
    fn test_flagged_node_keeps_its_own_metadata() {
        let tree = BomNode::new("root", 1, "").with_children(vec![BomNode::new(
            "gearbox", 1, "provided",
        )
        .with_step(7)
        .with_children(vec![BomNode::new("gear", 3, "outsourced")])]);

        let found = find_unprovided(&tree);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].step, 7);
        assert_eq!(found[0].source, "provided");
    }

    #[test]
    fn test_find_unprovided_is_idempotent() {
        let tree = BomNode::new("root", 1, "").with_children(vec![BomNode::new("a", 1, "")
            .with_children(vec![BomNode::new("b", 1, "")])]);
        assert_eq!(find_unprovided(&tree), find_unprovided(&tree));
    }
}
