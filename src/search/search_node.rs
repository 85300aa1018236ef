use crate::search::Cost;

/// Index of a node in the [`SearchSpace`](crate::search::SearchSpace) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] records one way of reaching a state: the accumulated cost
/// `g`, the heuristic estimate `h` and the node it was generated from. Nodes
/// are never changed after creation, and several nodes may share a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S> {
    node_id: NodeId,
    state: S,
    /// Cost of the path from the root to this node.
    g: Cost,
    /// Heuristic estimate of the remaining cost, always 0 for uniform-cost
    /// search.
    h: Cost,
    parent_id: NodeId,
}

impl<S> SearchNode<S> {
    pub(crate) fn new(node_id: NodeId, state: S, g: Cost, h: Cost, parent_id: NodeId) -> Self {
        Self {
            node_id,
            state,
            g,
            h,
            parent_id,
        }
    }

    #[inline(always)]
    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline(always)]
    pub fn get_state(&self) -> &S {
        &self.state
    }

    #[inline(always)]
    pub fn get_g(&self) -> Cost {
        self.g
    }

    #[inline(always)]
    pub fn get_h(&self) -> Cost {
        self.h
    }

    /// Priority of the node in the frontier, lower is expanded first.
    #[inline(always)]
    pub fn get_f(&self) -> Cost {
        self.g + self.h
    }

    #[inline(always)]
    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
