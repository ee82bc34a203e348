//! Level-synchronous breadth-first search over an implicit graph. Nodes are discovered round by
//! round from a frontier and every discovered node remembers the node it was first reached from,
//! which makes the recorded predecessor chain a minimum hop-count path.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::{debug, info};
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor index stored for the search root.
const ROOT: usize = usize::MAX;

/// How a node in a [SearchRecord] was discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predecessor<N> {
    /// The node is the start of the search.
    Root,
    /// The node was first reached from the given node.
    Node(N),
}

/// Predecessor map produced by [bfs]. Nodes are stored in discovery order together with the
/// index of their predecessor, so a node is never overwritten once it has been discovered.
#[derive(Clone, Debug)]
pub struct SearchRecord<N> {
    parents: FxIndexMap<N, usize>,
}

impl<N: Eq + Hash + Clone> Default for SearchRecord<N> {
    fn default() -> SearchRecord<N> {
        SearchRecord {
            parents: FxIndexMap::default(),
        }
    }
}

impl<N: Eq + Hash + Clone> SearchRecord<N> {
    pub fn len(&self) -> usize {
        self.parents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
    pub fn contains(&self, node: &N) -> bool {
        self.parents.contains_key(node)
    }
    /// Returns how `node` was discovered, or [None] if the search never reached it.
    pub fn predecessor(&self, node: &N) -> Option<Predecessor<&N>> {
        let &parent = self.parents.get(node)?;
        if parent == ROOT {
            return Some(Predecessor::Root);
        }
        self.parents
            .get_index(parent)
            .map(|(node, _)| Predecessor::Node(node))
    }
    /// Discovered nodes in the order they were found; the root comes first.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.parents.keys()
    }
    /// Walks the predecessor chain back from `end` and returns it in start-to-end order. The
    /// result is empty if `end` was never discovered.
    pub fn path_to(&self, end: &N) -> Vec<N> {
        match self.parents.get_index_of(end) {
            Some(ix) => reverse_path(&self.parents, ix),
            None => Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.parents.clear();
    }
    fn insert_root(&mut self, start: N) -> usize {
        self.parents.insert_full(start, ROOT).0
    }
}

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Scratch space for repeated searches. Keeps the record and frontier buffers alive between calls
/// so that their allocations can be reused.
#[derive(Clone, Debug)]
pub struct SearchContext<N> {
    record: SearchRecord<N>,
    frontier: Vec<usize>,
    next_frontier: Vec<usize>,
}

impl<N: Eq + Hash + Clone> Default for SearchContext<N> {
    fn default() -> SearchContext<N> {
        SearchContext::new()
    }
}

impl<N: Eq + Hash + Clone> SearchContext<N> {
    pub fn new() -> SearchContext<N> {
        SearchContext {
            record: SearchRecord::default(),
            frontier: Vec::new(),
            next_frontier: Vec::new(),
        }
    }

    /// Context whose buffers are pre-sized for graphs of about `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> SearchContext<N> {
        SearchContext {
            record: SearchRecord {
                parents: FxIndexMap::with_capacity_and_hasher(capacity, Default::default()),
            },
            frontier: Vec::with_capacity(capacity),
            next_frontier: Vec::with_capacity(capacity),
        }
    }

    /// Record of the most recent search.
    pub fn record(&self) -> &SearchRecord<N> {
        &self.record
    }

    /// Runs a breadth-first search from `start` that stops as soon as `end` has been discovered
    /// or nothing new can be reached.
    pub fn bfs<FN, IN>(&mut self, start: &N, end: &N, mut neighbors: FN) -> &SearchRecord<N>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
    {
        self.record.clear();
        self.frontier.clear();
        let root = self.record.insert_root(start.clone());
        self.frontier.push(root);

        let mut rounds = 0;
        // `end` can only enter the record as part of the newest frontier, so checking the record
        // is the same as checking the current frontier.
        while !self.frontier.is_empty() && !self.record.contains(end) {
            self.next_frontier.clear();
            for &u in &self.frontier {
                let successors = match self.record.parents.get_index(u) {
                    Some((node, _)) => neighbors(node),
                    None => continue,
                };
                for v in successors {
                    if let Vacant(e) = self.record.parents.entry(v) {
                        self.next_frontier.push(e.index());
                        e.insert(u);
                    }
                }
            }
            std::mem::swap(&mut self.frontier, &mut self.next_frontier);
            rounds += 1;
        }
        debug!(
            "Search finished after {} rounds with {} discovered nodes",
            rounds,
            self.record.len()
        );
        &self.record
    }

    /// Minimum hop-count path from `start` to `end`, both inclusive. Empty if `end` cannot be
    /// reached.
    pub fn shortest_path<FN, IN>(&mut self, start: &N, end: &N, neighbors: FN) -> Vec<N>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
    {
        let path = self.bfs(start, end, neighbors).path_to(end);
        if path.is_empty() {
            info!("Goal is not reachable, {} nodes explored", self.record.len());
        }
        path
    }
}

/// Explores the graph given by `neighbors` from `start` until `end` is found or the reachable
/// part of the graph is exhausted.
pub fn bfs<N, FN, IN>(start: &N, end: &N, neighbors: FN) -> SearchRecord<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    let mut context = SearchContext::new();
    context.bfs(start, end, neighbors);
    context.record
}

/// Computes a path with the fewest possible steps from `start` to `end`. If several such paths
/// exist, which one is returned depends on the order in which `neighbors` yields nodes.
pub fn shortest_path<N, FN, IN>(start: &N, end: &N, neighbors: FN) -> Vec<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    SearchContext::new().shortest_path(start, end, neighbors)
}

/// Number of steps on a shortest path, or [None] if `end` is unreachable.
pub fn hop_count<N, FN, IN>(start: &N, end: &N, neighbors: FN) -> Option<usize>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    shortest_path(start, end, neighbors).len().checked_sub(1)
}
