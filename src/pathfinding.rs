//! Dijkstra's and A* shortest-path search on top of the heaps in this crate
//!
//! Two strategies are provided:
//!
//! - [`dijkstra`] / [`astar`] keep one heap entry per node and lower its
//!   priority in place with `decrease_key` when a shorter path is found.
//!   Any [`DecreaseKeyHeap`] works; [`shortest_path`] uses
//!   [`HandleBinaryHeap`].
//! - [`shortest_path_lazy`] only ever calls `insert` on relaxation and
//!   `delete_min` to pick the next frontier node, on a plain
//!   [`IndexedBinaryHeap`]. Outdated entries are skipped when they surface.
//!
//! # Design
//!
//! Only lightweight indices are stored in the heap rather than full node data.
//! A fast hash map (FxHash) maps node states to their index in a node table
//! holding costs, handles and back-pointers.
//!
//! Dijkstra is A* with h(n) = 0. The node type carries its own goal context and
//! implements `is_goal()` to determine when the search should terminate.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heaps::pathfinding::{SearchNode, shortest_path};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         vec![
//!             (GridPos { x: self.x + 1, y: self.y, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x - 1, y: self.y, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x, y: self.y + 1, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!             (GridPos { x: self.x, y: self.y - 1, goal_x: self.goal_x, goal_y: self.goal_y }, 1),
//!         ]
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (_path, cost) = shortest_path(&start).unwrap();
//! assert_eq!(cost, 4); // Manhattan distance
//! ```

use crate::element::Tracked;
use crate::handle::HandleBinaryHeap;
use crate::indexed::IndexedBinaryHeap;
use crate::traits::DecreaseKeyHeap;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` must be the zero cost.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate successors and to decide
/// whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Trait for nodes that can provide a heuristic estimate for A* search.
///
/// The heuristic must be admissible (never overestimate the true cost)
/// for A* to find optimal paths.
pub trait AStarNode: SearchNode {
    /// Returns a heuristic estimate of the cost from this node to any goal.
    fn heuristic(&self) -> Self::Cost;
}

/// A wrapper for costs in the heap that orders by f-score.
///
/// Lower costs have higher priority (min-heap behavior).
#[derive(Debug, Clone, Copy)]
pub struct PriorityCost<C> {
    /// The f-score: g + h (where h=0 for Dijkstra)
    pub f_score: C,
    /// The actual cost from start (g-score)
    pub g_score: C,
}

impl<C: Ord> PartialEq for PriorityCost<C> {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score
    }
}

impl<C: Ord> Eq for PriorityCost<C> {}

impl<C: Ord> PartialOrd for PriorityCost<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for PriorityCost<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score.cmp(&other.f_score)
    }
}

/// Index of a node in the search's node table.
/// These are what the heap stores instead of full node data.
pub type NodeIndex = usize;

/// Metadata stored for each discovered node during search.
struct NodeEntry<N: SearchNode, H> {
    node: N,
    /// Best known cost from start
    g_score: N::Cost,
    /// Handle into the heap while the node is in the open set
    handle: Option<H>,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Node table for one search: discovered nodes, their costs and back-pointers.
struct PathFinder<N: SearchNode, H> {
    nodes: Vec<NodeEntry<N, H>>,
    state_to_index: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode, H> PathFinder<N, H> {
    fn new() -> Self {
        PathFinder {
            nodes: Vec::new(),
            state_to_index: FxHashMap::default(),
        }
    }

    /// Gets or creates an index for a node state; the flag is true for new nodes.
    fn get_or_create_index(&mut self, node: N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.state_to_index.get(&node) {
            return (index, false);
        }
        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(NodeEntry {
            node,
            g_score,
            handle: None,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    /// Reconstructs the path from start to the given node index.
    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.nodes[current].node.clone()];
        while let Some(prev) = self.nodes[current].came_from {
            path.push(self.nodes[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Limits applied to a search by [`PathFinderBuilder`].
struct SearchLimits<C> {
    max_cost: Option<C>,
    max_nodes: Option<usize>,
}

impl<C> SearchLimits<C> {
    fn none() -> Self {
        SearchLimits {
            max_cost: None,
            max_nodes: None,
        }
    }
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// Returns the path (start and goal inclusive) and its cost, or `None` if no
/// goal is reachable.
///
/// # Example
/// ```rust
/// use rust_indexed_heaps::pathfinding::{SearchNode, dijkstra};
/// use rust_indexed_heaps::handle::HandleBinaryHeap;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct Node {
///     value: i32,
///     goal: i32,
/// }
///
/// impl SearchNode for Node {
///     type Cost = u32;
///
///     fn successors(&self) -> Vec<(Self, u32)> {
///         if self.value < 100 {
///             vec![(Node { value: self.value + 1, goal: self.goal }, 1)]
///         } else {
///             vec![]
///         }
///     }
///
///     fn is_goal(&self) -> bool {
///         self.value == self.goal
///     }
/// }
///
/// let start = Node { value: 0, goal: 5 };
/// let (path, cost) = dijkstra::<_, HandleBinaryHeap<_, _>>(&start).unwrap();
/// assert_eq!(cost, 5);
/// assert_eq!(path.len(), 6);
/// ```
pub fn dijkstra<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    search_impl::<N, H>(start, |_| N::Cost::default(), SearchLimits::none())
}

/// Runs A* search from the start node until `is_goal()` returns true.
///
/// Uses the node's `heuristic()` method to guide the search.
pub fn astar<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: AStarNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    search_impl::<N, H>(start, |n| n.heuristic(), SearchLimits::none())
}

/// Dijkstra's algorithm on a [`HandleBinaryHeap`].
pub fn shortest_path<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    dijkstra::<N, HandleBinaryHeap<NodeIndex, PriorityCost<N::Cost>>>(start)
}

fn search_impl<N, H>(
    start: &N,
    heuristic: impl Fn(&N) -> N::Cost,
    limits: SearchLimits<N::Cost>,
) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    let mut heap = H::new();
    let mut finder: PathFinder<N, H::Handle> = PathFinder::new();
    let mut nodes_explored = 0usize;

    let (start_index, _) = finder.get_or_create_index(start.clone(), N::Cost::default());
    let priority = PriorityCost {
        f_score: heuristic(start),
        g_score: N::Cost::default(),
    };
    finder.nodes[start_index].handle = Some(heap.push_with_handle(priority, start_index));

    while let Some((priority, current_index)) = heap.pop() {
        let current_entry = &mut finder.nodes[current_index];
        if current_entry.closed {
            continue;
        }
        if let Some(max) = limits.max_nodes {
            if nodes_explored >= max {
                return None;
            }
        }
        nodes_explored += 1;
        current_entry.closed = true;
        current_entry.handle = None;

        let current_node = current_entry.node.clone();
        let current_g = priority.g_score;

        if current_node.is_goal() {
            return Some((finder.reconstruct_path(current_index), current_g));
        }

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if limits.max_cost.is_some_and(|max| tentative_g > max) {
                continue;
            }

            let f_score = tentative_g + heuristic(&neighbor);
            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            relax(
                &mut heap,
                &mut finder.nodes[neighbor_index],
                neighbor_index,
                current_index,
                is_new,
                PriorityCost {
                    f_score,
                    g_score: tentative_g,
                },
            );
        }
    }

    None
}

/// Records a candidate path to a neighbor, pushing it or lowering its priority.
fn relax<N, H>(
    heap: &mut H,
    entry: &mut NodeEntry<N, H::Handle>,
    index: NodeIndex,
    came_from: NodeIndex,
    is_new: bool,
    priority: PriorityCost<N::Cost>,
) where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    if entry.closed || (!is_new && priority.g_score >= entry.g_score) {
        return;
    }
    entry.g_score = priority.g_score;
    entry.came_from = Some(came_from);

    let decreased = match entry.handle.as_ref() {
        Some(handle) => heap.decrease_key(handle, priority).is_ok(),
        None => false,
    };
    if !decreased {
        entry.handle = Some(heap.push_with_handle(priority, index));
    }
}

/// Frontier entry for [`shortest_path_lazy`]
#[derive(Debug, Clone, Copy)]
struct Frontier<C> {
    priority: PriorityCost<C>,
    index: NodeIndex,
}

/// Dijkstra's algorithm using only `insert` and `delete_min`.
///
/// Every improvement inserts a fresh frontier entry; entries whose node was
/// already settled are discarded when they reach the top. This is the access
/// pattern for heaps without handles and needs no `decrease_key`.
pub fn shortest_path_lazy<N: SearchNode>(start: &N) -> Option<(Vec<N>, N::Cost)> {
    let mut heap = IndexedBinaryHeap::with_comparator(
        |a: &Tracked<Frontier<N::Cost>>, b: &Tracked<Frontier<N::Cost>>| {
            a.priority.cmp(&b.priority)
        },
    );
    let mut finder: PathFinder<N, ()> = PathFinder::new();

    let (start_index, _) = finder.get_or_create_index(start.clone(), N::Cost::default());
    heap.insert(Tracked::new(Frontier {
        priority: PriorityCost {
            f_score: N::Cost::default(),
            g_score: N::Cost::default(),
        },
        index: start_index,
    }));

    while let Ok(top) = heap.delete_min() {
        let Frontier { priority, index } = top.into_inner();
        let entry = &mut finder.nodes[index];
        if entry.closed || priority.g_score > entry.g_score {
            continue;
        }
        entry.closed = true;

        let current_node = entry.node.clone();
        if current_node.is_goal() {
            return Some((finder.reconstruct_path(index), priority.g_score));
        }

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = priority.g_score + edge_cost;
            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            let neighbor_entry = &mut finder.nodes[neighbor_index];
            if neighbor_entry.closed || (!is_new && tentative_g >= neighbor_entry.g_score) {
                continue;
            }
            neighbor_entry.g_score = tentative_g;
            neighbor_entry.came_from = Some(index);
            heap.insert(Tracked::new(Frontier {
                priority: PriorityCost {
                    f_score: tentative_g,
                    g_score: tentative_g,
                },
                index: neighbor_index,
            }));
        }
    }

    None
}

/// Builder for pathfinding queries with more configuration options.
///
/// Provides a fluent API for configuring and running pathfinding searches.
/// The node type's `is_goal()` method determines when to stop.
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    max_cost: Option<N::Cost>,
    max_nodes: Option<usize>,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            max_cost: None,
            max_nodes: None,
        }
    }

    /// Paths costing more than this are not explored.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// The search gives up after settling this many nodes.
    ///
    /// Leftover heap entries for already settled nodes are not counted.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured settings.
    pub fn dijkstra<H>(self) -> Option<(Vec<N>, N::Cost)>
    where
        H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
    {
        let limits = SearchLimits {
            max_cost: self.max_cost,
            max_nodes: self.max_nodes,
        };
        search_impl::<N, H>(&self.start, |_| N::Cost::default(), limits)
    }

    /// Runs A* search with the configured settings.
    pub fn astar<H>(self) -> Option<(Vec<N>, N::Cost)>
    where
        N: AStarNode,
        H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
    {
        let limits = SearchLimits {
            max_cost: self.max_cost,
            max_nodes: self.max_nodes,
        };
        search_impl::<N, H>(&self.start, |n| n.heuristic(), limits)
    }
}

/// Returns all nodes reachable from the start within a given cost budget,
/// in order of increasing cost.
pub fn reachable_within<N, H>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    let mut heap = H::new();
    let mut finder: PathFinder<N, H::Handle> = PathFinder::new();
    let mut result = Vec::new();

    let (start_index, _) = finder.get_or_create_index(start.clone(), N::Cost::default());
    let priority = PriorityCost {
        f_score: N::Cost::default(),
        g_score: N::Cost::default(),
    };
    finder.nodes[start_index].handle = Some(heap.push_with_handle(priority, start_index));

    while let Some((priority, current_index)) = heap.pop() {
        let current_entry = &mut finder.nodes[current_index];
        if current_entry.closed {
            continue;
        }
        current_entry.closed = true;
        current_entry.handle = None;

        let current_node = current_entry.node.clone();
        let current_g = priority.g_score;
        if current_g > max_cost {
            continue;
        }
        result.push((current_node.clone(), current_g));

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if tentative_g > max_cost {
                continue;
            }
            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            relax(
                &mut heap,
                &mut finder.nodes[neighbor_index],
                neighbor_index,
                current_index,
                is_new,
                PriorityCost {
                    f_score: tentative_g,
                    g_score: tentative_g,
                },
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Heap, HeapError};

    // Simple linear graph node that carries its goal
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct LinearNode {
        value: i32,
        goal: i32,
    }

    impl LinearNode {
        fn new(value: i32, goal: i32) -> Self {
            LinearNode { value, goal }
        }
    }

    impl SearchNode for LinearNode {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            if self.value < 100 {
                vec![(LinearNode::new(self.value + 1, self.goal), 1)]
            } else {
                vec![]
            }
        }

        fn is_goal(&self) -> bool {
            self.value == self.goal
        }
    }

    // Grid-based graph for A* tests - carries goal coordinates
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct GridPos {
        x: i32,
        y: i32,
        goal_x: i32,
        goal_y: i32,
    }

    impl GridPos {
        fn new(x: i32, y: i32, goal_x: i32, goal_y: i32) -> Self {
            GridPos { x, y, goal_x, goal_y }
        }
    }

    impl SearchNode for GridPos {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            vec![
                (GridPos::new(self.x + 1, self.y, self.goal_x, self.goal_y), 1),
                (GridPos::new(self.x - 1, self.y, self.goal_x, self.goal_y), 1),
                (GridPos::new(self.x, self.y + 1, self.goal_x, self.goal_y), 1),
                (GridPos::new(self.x, self.y - 1, self.goal_x, self.goal_y), 1),
            ]
        }

        fn is_goal(&self) -> bool {
            self.x == self.goal_x && self.y == self.goal_y
        }
    }

    impl AStarNode for GridPos {
        fn heuristic(&self) -> u32 {
            ((self.x - self.goal_x).abs() + (self.y - self.goal_y).abs()) as u32
        }
    }

    // Weighted graph node that carries its goal
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct WeightedNode {
        id: char,
        goal: char,
    }

    impl SearchNode for WeightedNode {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            // Graph:
            //     A --1-- B --1-- D
            //     |       |
            //     5       1
            //     |       |
            //     C --1-- E
            let to = |id| WeightedNode { id, goal: self.goal };
            match self.id {
                'A' => vec![(to('B'), 1), (to('C'), 5)],
                'B' => vec![(to('A'), 1), (to('D'), 1), (to('E'), 1)],
                'C' => vec![(to('A'), 5), (to('E'), 1)],
                'D' => vec![(to('B'), 1)],
                'E' => vec![(to('B'), 1), (to('C'), 1)],
                _ => vec![],
            }
        }

        fn is_goal(&self) -> bool {
            self.id == self.goal
        }
    }

    #[test]
    fn test_dijkstra_linear() {
        let start = LinearNode::new(0, 10);
        let (path, cost) = dijkstra::<_, HandleBinaryHeap<_, _>>(&start).unwrap();
        assert_eq!(cost, 10);
        assert_eq!(path.len(), 11);
        assert_eq!(path.first().unwrap().value, 0);
        assert_eq!(path.last().unwrap().value, 10);
    }

    #[test]
    fn test_unreachable_goal() {
        let start = LinearNode::new(0, 500);
        assert!(shortest_path(&start).is_none());
        assert!(shortest_path_lazy(&start).is_none());
    }

    #[test]
    fn test_weighted_decrease_key_path() {
        // C is first discovered at cost 5 and later improved to 3 via E
        let start = WeightedNode { id: 'A', goal: 'C' };
        let (path, cost) = shortest_path(&start).unwrap();
        assert_eq!(cost, 3);
        let ids: Vec<char> = path.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!['A', 'B', 'E', 'C']);
    }

    #[test]
    fn test_lazy_matches_decrease_key() {
        for goal in ['A', 'B', 'C', 'D', 'E'] {
            let start = WeightedNode { id: 'A', goal };
            let eager = shortest_path(&start).map(|(_, c)| c);
            let lazy = shortest_path_lazy(&start).map(|(_, c)| c);
            assert_eq!(eager, lazy, "goal {}", goal);
        }
    }

    #[test]
    fn test_astar_grid() {
        let start = GridPos::new(0, 0, 3, 4);
        let (path, cost) = astar::<_, HandleBinaryHeap<_, _>>(&start).unwrap();
        assert_eq!(cost, 7);
        assert_eq!(path.len(), 8);
    }

    #[test]
    fn test_builder_limits() {
        let start = LinearNode::new(0, 50);
        assert!(PathFinderBuilder::new(start.clone())
            .max_cost(10)
            .dijkstra::<HandleBinaryHeap<_, _>>()
            .is_none());
        assert!(PathFinderBuilder::new(start.clone())
            .max_nodes(5)
            .dijkstra::<HandleBinaryHeap<_, _>>()
            .is_none());
        assert_eq!(
            PathFinderBuilder::new(start)
                .max_cost(60)
                .dijkstra::<HandleBinaryHeap<_, _>>()
                .map(|(_, c)| c),
            Some(50)
        );
    }

    // Heap without a working decrease_key, so every improvement is a fresh push
    struct PushOnlyHeap<T, P: Ord>(HandleBinaryHeap<T, P>);

    impl<T, P: Ord> Heap<T, P> for PushOnlyHeap<T, P> {
        fn new() -> Self {
            PushOnlyHeap(HandleBinaryHeap::new())
        }

        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn push(&mut self, priority: P, item: T) {
            self.0.push(priority, item)
        }

        fn peek(&self) -> Option<(&P, &T)> {
            self.0.peek()
        }

        fn pop(&mut self) -> Option<(P, T)> {
            self.0.pop()
        }

        fn merge(&mut self, other: Self) {
            self.0.merge(other.0)
        }
    }

    impl<T, P: Ord> DecreaseKeyHeap<T, P> for PushOnlyHeap<T, P> {
        type Handle = <HandleBinaryHeap<T, P> as DecreaseKeyHeap<T, P>>::Handle;

        fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle {
            self.0.push_with_handle(priority, item)
        }

        fn decrease_key(&mut self, _: &Self::Handle, _: P) -> Result<(), HeapError> {
            Err(HeapError::PriorityNotDecreased)
        }

        fn remove(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError> {
            self.0.remove(handle)
        }

        fn contains(&self, handle: &Self::Handle) -> bool {
            self.0.contains(handle)
        }
    }

    // A -1- B -1- C -10- G, plus a direct A -5- C that B later improves on
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    struct DetourNode(char);

    impl SearchNode for DetourNode {
        type Cost = u32;

        fn successors(&self) -> Vec<(Self, u32)> {
            match self.0 {
                'A' => vec![(DetourNode('B'), 1), (DetourNode('C'), 5)],
                'B' => vec![(DetourNode('C'), 1)],
                'C' => vec![(DetourNode('G'), 10)],
                _ => vec![],
            }
        }

        fn is_goal(&self) -> bool {
            self.0 == 'G'
        }
    }

    #[test]
    fn test_max_nodes_counts_settled_nodes() {
        // C is pushed twice; its old entry pops after C is settled.
        // A, B, C and G are the only nodes settled.
        let start = DetourNode('A');
        let found = PathFinderBuilder::new(start.clone())
            .max_nodes(4)
            .dijkstra::<PushOnlyHeap<_, _>>();
        assert_eq!(found.map(|(path, cost)| (path.len(), cost)), Some((4, 12)));

        assert!(PathFinderBuilder::new(start.clone())
            .max_nodes(3)
            .dijkstra::<PushOnlyHeap<_, _>>()
            .is_none());

        // Same limit with a real decrease_key
        assert!(PathFinderBuilder::new(start)
            .max_nodes(4)
            .dijkstra::<HandleBinaryHeap<_, _>>()
            .is_some());
    }

    #[test]
    fn test_reachable_within() {
        let start = WeightedNode { id: 'A', goal: 'Z' };
        let reached = reachable_within::<_, HandleBinaryHeap<_, _>>(&start, 2);
        let mut ids: Vec<(char, u32)> = reached.iter().map(|(n, c)| (n.id, *c)).collect();
        ids.sort();
        assert_eq!(ids, vec![('A', 0), ('B', 1), ('D', 2), ('E', 2)]);
    }
}
