//! Renders the organization chart as a textual tree.

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::OrgArena;
use crate::domain::chart::OrgChart;

pub trait ChartRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ChartRender for OrgChart {
    fn to_tree_string(&self) -> Tree<String> {
        let arena = self.tree();
        if let Some(root_idx) = arena.root() {
            let label = arena
                .get_node(root_idx)
                .map(|node| node.employee.to_string())
                .unwrap_or_default();
            let mut tree = Tree::new(label);

            fn build_tree(arena: &OrgArena, node_idx: Index, parent_tree: &mut Tree<String>) {
                if let Some(node) = arena.get_node(node_idx) {
                    for &child_idx in &node.children {
                        if let Some(child) = arena.get_node(child_idx) {
                            let mut child_tree = Tree::new(child.employee.to_string());
                            build_tree(arena, child_idx, &mut child_tree);
                            parent_tree.push(child_tree);
                        }
                    }
                }
            }

            build_tree(arena, root_idx, &mut tree);
            tree
        } else {
            Tree::new("Empty organization".to_string())
        }
    }
}
