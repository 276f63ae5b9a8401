//! Positional binary tree.
//!
//! This is not a general tree-from-edges algorithm. Children are assigned by
//! edge insertion order alone: for each edge `(u, v)`, `v` fills `u`'s left
//! slot if it is empty, otherwise the right slot. A third child is rejected.

use crate::domain::error::GraphError;
use crate::domain::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub usize);

#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub left: Option<Handle>,
    pub right: Option<Handle>,
}

#[derive(Debug, Clone, Default)]
pub struct PositionalBinaryTree {
    pub nodes: Vec<TreeNode>,
}

impl PositionalBinaryTree {
    /// One arena node per graph vertex, wired from `graph.edge_list`.
    pub fn from_graph(graph: &Graph) -> Result<Self, GraphError> {
        let mut nodes = vec![TreeNode::default(); graph.node_count()];

        for e in graph.edge_list.iter() {
            let parent = &mut nodes[e.from];
            if parent.left.is_none() {
                parent.left = Some(Handle(e.to));
            } else if parent.right.is_none() {
                parent.right = Some(Handle(e.to));
            } else {
                return Err(GraphError::TooManyChildren {
                    parent: graph.label(e.from).to_string(),
                    child: graph.label(e.to).to_string(),
                });
            }
        }

        Ok(Self { nodes })
    }

    /// Left subtree, node, right subtree. Nodes already emitted are not
    /// descended into again, so malformed (cyclic) input still terminates.
    pub fn inorder(&self, root: Handle) -> Vec<usize> {
        let mut out = Vec::new();
        let mut entered = vec![false; self.nodes.len()];
        let mut stack: Vec<Handle> = Vec::new();
        let mut cur = Some(root);

        loop {
            while let Some(h) = cur {
                if entered[h.0] {
                    break;
                }
                entered[h.0] = true;
                stack.push(h);
                cur = self.nodes[h.0].left;
            }

            let Some(h) = stack.pop() else {
                break;
            };
            out.push(h.0);
            cur = self.nodes[h.0].right;
        }

        out
    }
}
