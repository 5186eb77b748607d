//! A collection of disjoint paths over the node ids `1..=n`.
//!
//! Each path is one splay tree whose in-order traversal is the path order,
//! identified at any instant by its splay root (the *canonical element*).
//! Costs use the lazy `dmin`/`dcost` encoding described on
//! [`CostNode`](crate::types::CostNode), so a whole-path cost update or
//! minimum query touches only the root after a splay.

use std::fmt;

use tracing::debug;

use crate::error::{ForestError, Result};
use crate::print::print_path_tree;
use crate::splay::splay;
use crate::types::{Cost, PathNode};
use crate::util::{first, inorder, last, node_cost, root_of};

/// Reserve `n + 1` slots (slot 0 unused) filled with `fill`.
pub(crate) fn alloc_slots<T: Clone>(n: u32, fill: T) -> Result<Vec<T>> {
    let len = n as usize + 1;
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(len)
        .map_err(|_| ForestError::AllocationFailed { requested: n })?;
    slots.resize(len, fill);
    Ok(slots)
}

/// Grow `slots` to hold ids `1..=n`, keeping existing entries.
pub(crate) fn grow_slots<T: Clone>(slots: &mut Vec<T>, n: u32, fill: T) -> Result<()> {
    let len = n as usize + 1;
    if len <= slots.len() {
        return Ok(());
    }
    slots
        .try_reserve_exact(len - slots.len())
        .map_err(|_| ForestError::AllocationFailed { requested: n })?;
    slots.resize(len, fill);
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSet {
    nodes: Vec<PathNode>,
    n: u32,
}

impl PathSet {
    /// Create `n` singleton paths of cost zero.
    pub fn new(n: u32) -> Result<Self> {
        let nodes = alloc_slots(n, PathNode::default())?;
        debug!(capacity = n, "path set allocated");
        Ok(Self { nodes, n })
    }

    /// Largest valid node id.
    pub fn len(&self) -> u32 {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn contains(&self, i: u32) -> bool {
        1 <= i && i <= self.n
    }

    #[inline]
    fn check(&self, i: u32) {
        debug_assert!(self.contains(i), "node {i} out of range 1..={}", self.n);
    }

    /// Reset every node to a singleton path of cost zero.
    pub fn clear(&mut self) {
        self.nodes.fill(PathNode::default());
        debug!(capacity = self.n, "path set cleared");
    }

    /// Change capacity to `n`, discarding all paths.
    pub fn resize(&mut self, n: u32) -> Result<()> {
        self.nodes = alloc_slots(n, PathNode::default())?;
        self.n = n;
        debug!(capacity = n, "path set resized");
        Ok(())
    }

    /// Grow capacity to `n`, keeping all paths. New ids start as
    /// singleton paths of cost zero. Never shrinks.
    pub fn expand(&mut self, n: u32) -> Result<()> {
        if n <= self.n {
            return Ok(());
        }
        grow_slots(&mut self.nodes, n, PathNode::default())?;
        debug!(from = self.n, to = n, "path set expanded");
        self.n = n;
        Ok(())
    }

    /// Drop ids above `n`. Only valid when nothing links to them, as right
    /// after a grow.
    pub(crate) fn truncate(&mut self, n: u32) {
        if n < self.n {
            self.nodes.truncate(n as usize + 1);
            self.n = n;
        }
    }

    /// Raw arena access for diagnostics and tests.
    pub fn node(&self, i: u32) -> &PathNode {
        self.check(i);
        &self.nodes[i as usize]
    }

    /// Canonical element of the path containing `i`, without splaying.
    pub fn root(&self, i: u32) -> u32 {
        self.check(i);
        root_of(&self.nodes, i)
    }

    /// Last node of the path containing `i`, without splaying.
    pub fn peek_tail(&self, i: u32) -> u32 {
        let root = self.root(i);
        last(&self.nodes, Some(root)).unwrap_or(root)
    }

    /// Make `i` the canonical element of its path.
    ///
    /// Returns the canonical element the path had before the call.
    pub fn find_path(&mut self, i: u32) -> u32 {
        self.check(i);
        let old_root = root_of(&self.nodes, i);
        splay(&mut self.nodes, i);
        old_root
    }

    /// Last node of path `q`, which becomes the canonical element.
    pub fn find_tail(&mut self, q: Option<u32>) -> Option<u32> {
        q.map(|q| self.tail(q))
    }

    pub(crate) fn tail(&mut self, q: u32) -> u32 {
        self.check(q);
        debug_assert!(self.nodes[q as usize].p.is_none(), "node {q} is not a path root");
        let t = last(&self.nodes, Some(q)).unwrap_or(q);
        splay(&mut self.nodes, t)
    }

    /// Add `delta` to the cost of every node on path `q`.
    ///
    /// Costs are plain `i64`: the lazy fields hold differences between
    /// costs, so every accumulated cost must stay within `±2^62`.
    pub fn add_path_cost(&mut self, q: u32, delta: Cost) {
        self.check(q);
        debug_assert!(self.nodes[q as usize].p.is_none(), "node {q} is not a path root");
        self.nodes[q as usize].dmin += delta;
    }

    /// Last node of minimum cost on path `q`, and that cost.
    ///
    /// The node found becomes the canonical element.
    pub fn find_path_cost(&mut self, q: u32) -> (u32, Cost) {
        self.check(q);
        debug_assert!(self.nodes[q as usize].p.is_none(), "node {q} is not a path root");
        let mut x = q;
        loop {
            let node = &self.nodes[x as usize];
            match (node.r, node.l) {
                (Some(r), _) if self.nodes[r as usize].dmin == 0 => x = r,
                (_, Some(l)) if node.dcost > 0 => x = l,
                _ => break,
            }
        }
        splay(&mut self.nodes, x);
        (x, self.nodes[x as usize].dmin)
    }

    /// Join path `r`, the singleton `i`, and path `q`, in that order.
    ///
    /// Either side may be absent. Returns `i`, the new canonical element.
    pub fn join(&mut self, r: Option<u32>, i: u32, q: Option<u32>) -> u32 {
        self.check(i);
        debug_assert!(
            self.nodes[i as usize].p.is_none()
                && self.nodes[i as usize].l.is_none()
                && self.nodes[i as usize].r.is_none(),
            "node {i} is not a singleton path"
        );
        let own = self.nodes[i as usize].dmin;
        let mut m = own;
        for side in [r, q].into_iter().flatten() {
            debug_assert!(self.nodes[side as usize].p.is_none(), "node {side} is not a path root");
            m = m.min(self.nodes[side as usize].dmin);
        }
        {
            let node = &mut self.nodes[i as usize];
            node.l = r;
            node.r = q;
            node.dmin = m;
            node.dcost = own - m;
        }
        for side in [r, q].into_iter().flatten() {
            let child = &mut self.nodes[side as usize];
            child.p = Some(i);
            child.dmin -= m;
        }
        i
    }

    /// Split the path containing `i` into the part before `i`, the
    /// singleton `i`, and the part after `i`.
    pub fn split(&mut self, i: u32) -> (Option<u32>, Option<u32>) {
        self.check(i);
        splay(&mut self.nodes, i);
        let (l, r, dmin) = {
            let node = &mut self.nodes[i as usize];
            let lr = (node.l.take(), node.r.take(), node.dmin);
            node.dmin += node.dcost;
            node.dcost = 0;
            lr
        };
        for side in [l, r].into_iter().flatten() {
            let child = &mut self.nodes[side as usize];
            child.p = None;
            child.dmin += dmin;
        }
        (l, r)
    }

    /// True cost of `i`.
    pub fn node_cost(&self, i: u32) -> Cost {
        self.check(i);
        node_cost(&self.nodes, i)
    }

    /// Node ids of the path containing `i`, in path order.
    pub fn path_nodes(&self, i: u32) -> Vec<u32> {
        let root = self.root(i);
        inorder(&self.nodes, Some(root))
    }

    /// One-line rendering of the path containing `i` as `id:cost` pairs.
    pub fn path_to_string(&self, i: u32) -> String {
        let items: Vec<String> = self
            .path_nodes(i)
            .into_iter()
            .map(|x| format!("{x}:{}", node_cost(&self.nodes, x)))
            .collect();
        format!("[{}]", items.join(" "))
    }

    /// Multi-line dump of the splay tree holding `i`.
    pub fn print_tree(&self, i: u32) -> String {
        let root = self.root(i);
        print_path_tree(&self.nodes, root)
    }

    /// Canonical elements of every path, in id order.
    pub fn roots(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.n).filter(move |&i| self.nodes[i as usize].p.is_none())
    }

    /// First node of the path containing `i`, without splaying.
    pub fn peek_head(&self, i: u32) -> u32 {
        let root = self.root(i);
        first(&self.nodes, Some(root)).unwrap_or(root)
    }

    /// Node following `i` on its path, if any. Both are splayed, the
    /// follower ending up as canonical element.
    pub fn after(&mut self, i: u32) -> Option<u32> {
        self.check(i);
        splay(&mut self.nodes, i);
        let r = self.nodes[i as usize].r?;
        let x = first(&self.nodes, Some(r)).unwrap_or(r);
        Some(splay(&mut self.nodes, x))
    }
}

impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in self.roots() {
            writeln!(f, "{}", self.path_to_string(root))?;
        }
        Ok(())
    }
}
