
use rustc_hash::FxHashSet as HashSet;
use serde::{Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;

use crate::data_types::operation::OperationKind;

/// Identifies a node in the alignment DAG.
/// Operation nodes are numbered from 1 in edit script order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeId {
    Start,
    Operation(usize),
    End
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Start => write!(f, "start"),
            NodeId::Operation(index) => write!(f, "node{index}"),
            NodeId::End => write!(f, "end")
        }
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A node in the alignment DAG
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DagNode {
    /// Unique identifier
    id: NodeId,
    /// Operation kind for this node, None for the start and end markers
    kind: Option<OperationKind>,
    /// Characters involved, empty for the start and end markers
    characters: Vec<char>,
    /// Human-readable label
    label: String
}

impl DagNode {
    /// Creates one of the synthetic start/end markers, which are labeled with their own name.
    pub fn marker(id: NodeId) -> Self {
        Self {
            id,
            kind: None,
            characters: vec![],
            label: id.to_string()
        }
    }

    /// Creates a node for a single operation.
    /// # Arguments
    /// * `id` - the node identifier
    /// * `kind` - the operation kind
    /// * `characters` - the characters involved in the operation
    /// * `separator` - placed between characters in the label
    pub fn operation(id: NodeId, kind: OperationKind, characters: Vec<char>, separator: &str) -> Self {
        let label = characters.iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(separator);
        Self {
            id, kind: Some(kind), characters, label
        }
    }

    pub fn is_marker(&self) -> bool {
        self.kind.is_none()
    }

    // getters
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> Option<OperationKind> {
        self.kind
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A directed edge in the alignment DAG
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DagEdge {
    from: NodeId,
    to: NodeId,
    /// The kind of operation this transition leads into; edges into `end` have no label
    label: Option<OperationKind>
}

impl DagEdge {
    pub fn new(from: NodeId, to: NodeId, label: Option<OperationKind>) -> Self {
        Self { from, to, label }
    }

    pub fn from_node(&self) -> NodeId {
        self.from
    }

    pub fn to_node(&self) -> NodeId {
        self.to
    }

    pub fn label(&self) -> Option<OperationKind> {
        self.label
    }
}

/// The full node and edge set describing alternate orderings of an edit script
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AlignmentDag {
    /// All nodes: start, then one per operation in order, then end
    nodes: Vec<DagNode>,
    /// All edges, in the order they were created
    edges: Vec<DagEdge>
}

impl AlignmentDag {
    pub fn new(nodes: Vec<DagNode>, edges: Vec<DagEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Looks up a node by identifier
    pub fn node(&self, id: NodeId) -> Option<&DagNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of edges ending at `id`
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }

    /// Number of edges starting at `id`
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.from == id).count()
    }

    /// All direct successors of `id`, in edge creation order
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter()
            .filter(move |e| e.from == id)
            .map(|e| e.to)
    }

    /// Breadth-first search for a path between two nodes.
    /// # Arguments
    /// * `from` - the node to start at
    /// * `to` - the node we are trying to reach
    pub fn has_path(&self, from: NodeId, to: NodeId) -> bool {
        let mut visited: HashSet<NodeId> = Default::default();
        let mut queue: VecDeque<NodeId> = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            if visited.insert(current) {
                queue.extend(self.successors(current));
            }
        }
        false
    }

    /// Checks the structural guarantees of a finished DAG:
    /// every node but `start` has an incoming edge, every node but `end` has an outgoing edge, and `start` reaches `end`.
    pub fn is_connected(&self) -> bool {
        let degrees_ok = self.nodes.iter().all(|n| {
            (n.id == NodeId::Start || self.in_degree(n.id) > 0) &&
                (n.id == NodeId::End || self.out_degree(n.id) > 0)
        });
        degrees_ok && self.has_path(NodeId::Start, NodeId::End)
    }

    // getters
    pub fn nodes(&self) -> &[DagNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DagEdge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> AlignmentDag {
        let nodes = vec![
            DagNode::marker(NodeId::Start),
            DagNode::operation(NodeId::Operation(1), OperationKind::Match, vec!['a'], "|"),
            DagNode::marker(NodeId::End)
        ];
        let edges = vec![
            DagEdge::new(NodeId::Start, NodeId::Operation(1), Some(OperationKind::Match)),
            DagEdge::new(NodeId::Operation(1), NodeId::End, None)
        ];
        AlignmentDag::new(nodes, edges)
    }

    #[test]
    fn test_node_names() {
        assert_eq!(NodeId::Start.to_string(), "start");
        assert_eq!(NodeId::Operation(12).to_string(), "node12");
        assert_eq!(NodeId::End.to_string(), "end");
        assert_eq!(serde_json::to_string(&NodeId::Operation(3)).unwrap(), "\"node3\"");
    }

    #[test]
    fn test_labels() {
        let node = DagNode::operation(NodeId::Operation(1), OperationKind::Substitution, vec!['k', 's'], "|");
        assert_eq!(node.label(), "k|s");
        assert!(!node.is_marker());

        let marker = DagNode::marker(NodeId::End);
        assert_eq!(marker.label(), "end");
        assert!(marker.is_marker());
    }

    #[test]
    fn test_degrees_and_paths() {
        let dag = chain();
        assert_eq!(dag.in_degree(NodeId::Start), 0);
        assert_eq!(dag.out_degree(NodeId::Start), 1);
        assert_eq!(dag.in_degree(NodeId::End), 1);
        assert_eq!(dag.successors(NodeId::Start).collect::<Vec<_>>(), vec![NodeId::Operation(1)]);
        assert!(dag.has_path(NodeId::Start, NodeId::End));
        assert!(!dag.has_path(NodeId::End, NodeId::Start));
        assert!(dag.is_connected());
        assert_eq!(dag.node(NodeId::Operation(1)).unwrap().label(), "a");
        assert!(dag.node(NodeId::Operation(2)).is_none());
    }

    #[test]
    fn test_dangling_node() {
        let mut dag = chain();
        dag.nodes.insert(2, DagNode::operation(NodeId::Operation(2), OperationKind::Insertion, vec!['b'], "|"));
        assert!(!dag.is_connected());
    }
}
