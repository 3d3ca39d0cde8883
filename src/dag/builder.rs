
use derive_builder::Builder;
use indexmap::IndexSet;
use log::debug;
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;

use crate::dag::graph::{AlignmentDag, DagEdge, DagNode, NodeId};
use crate::data_types::operation::{Operation, OperationKind};

/// Controls how the DAG is labeled and exported
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(default, setter(into))]
pub struct GraphConfig {
    /// Placed between the two characters of a substitution node label
    label_separator: String,
    /// Image format requested from the external renderer
    image_format: String
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            label_separator: "|".to_string(),
            image_format: "png".to_string()
        }
    }
}

impl GraphConfig {
    pub fn label_separator(&self) -> &str {
        &self.label_separator
    }

    pub fn image_format(&self) -> &str {
        &self.image_format
    }
}

/// Traversal state while folding an edit script into a DAG.
/// Each step consumes the previous state and returns the next one, so intermediate states can be inspected in isolation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BranchState {
    /// Nodes without a confirmed successor, in the order they were opened
    open: IndexSet<NodeId>,
    /// The most recent insertion/deletion node that a following gap of the same kind chains onto
    pending: HashMap<OperationKind, NodeId>
}

impl Default for BranchState {
    fn default() -> Self {
        Self {
            open: IndexSet::from([NodeId::Start]),
            pending: Default::default()
        }
    }
}

impl BranchState {
    /// Advances the state by one operation node.
    /// * Anchors (match/substitution) join every open branch and become the only open node.
    /// * Gaps (insertion/deletion) chain onto the pending node of the same kind if there is one, otherwise they branch from the earliest open node.
    ///
    /// Returns the next state and the edges that lead into `node`.
    /// # Arguments
    /// * `node` - the identifier for the new operation node
    /// * `kind` - the kind of the operation
    pub fn step(self, node: NodeId, kind: OperationKind) -> (Self, Vec<DagEdge>) {
        let BranchState { mut open, mut pending } = self;

        if kind.is_anchor() {
            let edges = open.iter()
                .map(|&parent| DagEdge::new(parent, node, Some(kind)))
                .collect();
            let next = Self {
                open: IndexSet::from([node]),
                pending: Default::default()
            };
            return (next, edges);
        }

        let parent = match pending.get(&kind) {
            Some(&previous) => {
                // the chain continues from here, so it no longer dangles
                open.shift_remove(&previous);
                previous
            },
            // open is never empty
            None => open.first().copied().unwrap_or(NodeId::Start)
        };
        open.insert(node);
        pending.insert(kind, node);

        (Self { open, pending }, vec![DagEdge::new(parent, node, Some(kind))])
    }

    /// Closes every open branch into the end marker.
    pub fn finish(self) -> Vec<DagEdge> {
        self.open.into_iter()
            .map(|parent| DagEdge::new(parent, NodeId::End, None))
            .collect()
    }

    /// Open nodes in the order they were opened
    pub fn open(&self) -> impl Iterator<Item = &NodeId> {
        self.open.iter()
    }

    /// The pending node for a gap kind, if any
    pub fn pending(&self, kind: OperationKind) -> Option<NodeId> {
        self.pending.get(&kind).copied()
    }
}

/// Folds an edit script into the alignment DAG.
/// Runs of insertions (or deletions) between two anchors become parallel chains sharing those anchors, rather than one forced serial order.
/// # Arguments
/// * `operations` - the edit script, start to end
/// * `config` - labeling options
pub fn build_dag(operations: &[Operation], config: &GraphConfig) -> AlignmentDag {
    let mut nodes = Vec::with_capacity(operations.len() + 2);
    nodes.push(DagNode::marker(NodeId::Start));

    let (state, mut edges) = operations.iter()
        .enumerate()
        .fold((BranchState::default(), vec![]), |(state, mut edges), (index, operation)| {
            let node_id = NodeId::Operation(index + 1);
            nodes.push(DagNode::operation(node_id, operation.kind(), operation.characters(), config.label_separator()));

            let (next, new_edges) = state.step(node_id, operation.kind());
            edges.extend(new_edges);
            (next, edges)
        });
    edges.extend(state.finish());
    nodes.push(DagNode::marker(NodeId::End));

    debug!("Built alignment DAG with {} nodes and {} edges", nodes.len(), edges.len());
    AlignmentDag::new(nodes, edges)
}
