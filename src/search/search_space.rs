use crate::search::{Cost, NodeId, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node generated during one search. Nodes refer
/// to their parent by [`NodeId`] only, so the ancestry tree has no ownership
/// cycles and is freed in one go when the search space is dropped.
#[derive(Debug)]
pub struct SearchSpace<S> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S>, Linear>,
}

impl<S: Clone> SearchSpace<S> {
    pub fn new(initial_state: S, initial_h: Cost) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new(
            root_node_id,
            initial_state,
            0,
            initial_h,
            NO_NODE,
        ));

        Self {
            root_node_id,
            nodes,
        }
    }

    pub fn insert_node(&mut self, state: S, g: Cost, h: Cost, parent_id: NodeId) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new(node_id, state, g, h, parent_id));
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    /// Walk the parent links from `goal_id` up to the root and return the
    /// states in start-to-goal order.
    pub fn extract_path(&self, goal_id: NodeId) -> Vec<S> {
        let mut path = vec![];
        let mut current_id = goal_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            path.push(node.get_state().clone());
            current_id = node.get_parent_id();
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let space = SearchSpace::new('a', 7);
        let root = space.get_root_node();
        assert!(root.is_root());
        assert_eq!(root.get_g(), 0);
        assert_eq!(root.get_h(), 7);
        assert_eq!(root.get_f(), 7);
    }

    #[test]
    fn extract_path_follows_parents() {
        let mut space = SearchSpace::new('a', 0);
        let root = space.get_root_node().get_node_id();
        let b = space.insert_node('b', 1, 0, root);
        let _dead_end = space.insert_node('x', 3, 0, root);
        let c = space.insert_node('c', 2, 0, b);
        assert_eq!(space.extract_path(c), vec!['a', 'b', 'c']);
        assert_eq!(space.extract_path(root), vec!['a']);
    }

    #[test]
    fn nodes_sharing_a_state_stay_distinct() {
        let mut space = SearchSpace::new('a', 0);
        let root = space.get_root_node().get_node_id();
        let first = space.insert_node('b', 10, 0, root);
        let second = space.insert_node('b', 2, 0, root);
        assert_ne!(first, second);
        assert_eq!(space.get_node(first).get_g(), 10);
        assert_eq!(space.get_node(second).get_g(), 2);
    }
}
