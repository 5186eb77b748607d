//! Dynamic trees: a forest of rooted trees over node ids `1..=n` with
//! path-cost queries, built on [`PathSet`].
//!
//! The forest is stored as preferred paths plus one successor link per
//! path. A path runs from its deepest node (head) up toward the forest
//! root (tail); the tail's successor is its forest parent, or `None` when
//! the tail is a forest root. Successors of non-tail nodes are stale and
//! never read.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{ForestError, Result};
use crate::path_set::{alloc_slots, grow_slots, PathSet};
use crate::types::Cost;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dtrees {
    paths: PathSet,
    succ: Vec<Option<u32>>,
}

impl Dtrees {
    /// Create a forest of `n` single-node trees of cost zero.
    pub fn new(n: u32) -> Result<Self> {
        let paths = PathSet::new(n)?;
        let succ = alloc_slots(n, None)?;
        debug!(capacity = n, "dynamic trees allocated");
        Ok(Self { paths, succ })
    }

    /// Largest valid node id.
    pub fn len(&self) -> u32 {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Underlying path decomposition, for diagnostics.
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Raw successor field of `i`. Only meaningful when `i` is a path tail.
    pub fn successor(&self, i: u32) -> Option<u32> {
        self.check(i);
        self.succ[i as usize]
    }

    /// Checked range test for ids coming from outside the caller's control.
    pub fn validate(&self, i: u32) -> Result<()> {
        if self.paths.contains(i) {
            Ok(())
        } else {
            Err(ForestError::NodeOutOfRange { node: i, capacity: self.len() })
        }
    }

    #[inline]
    fn check(&self, i: u32) {
        debug_assert!(self.paths.contains(i), "node {i} out of range 1..={}", self.len());
    }

    /// Reset to `n` single-node trees of cost zero.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.succ.fill(None);
        debug!(capacity = self.len(), "dynamic trees cleared");
    }

    /// Change capacity to `n`, discarding the forest.
    ///
    /// On allocation failure the current forest is left untouched.
    pub fn resize(&mut self, n: u32) -> Result<()> {
        let paths = PathSet::new(n)?;
        let succ = alloc_slots(n, None)?;
        self.paths = paths;
        self.succ = succ;
        debug!(capacity = n, "dynamic trees resized");
        Ok(())
    }

    /// Grow capacity to `n`, keeping the forest. New ids are single-node
    /// trees of cost zero. Never shrinks.
    ///
    /// On allocation failure the current forest is left untouched.
    pub fn expand(&mut self, n: u32) -> Result<()> {
        let old = self.len();
        if n <= old {
            return Ok(());
        }
        self.paths.expand(n)?;
        if let Err(err) = grow_slots(&mut self.succ, n, None) {
            self.paths.truncate(old);
            return Err(err);
        }
        debug!(capacity = n, "dynamic trees expanded");
        Ok(())
    }

    /// Turn the forest path from `i` to its tree root into a single path
    /// and return that path's canonical element.
    pub fn expose(&mut self, i: u32) -> u32 {
        self.check(i);
        let mut p: Option<u32> = None;
        let mut next = Some(i);
        while let Some(x) = next {
            self.paths.find_path(x);
            let tail = self.paths.tail(x);
            let w = self.succ[tail as usize];
            let (before, after) = self.paths.split(x);
            if let Some(b) = before {
                let b_tail = self.paths.tail(b);
                self.succ[b_tail as usize] = Some(x);
            }
            p = Some(self.paths.join(p, x, after));
            next = w;
        }
        // The loop always runs at least once, for `i` itself.
        let q = p.unwrap_or(i);
        debug_assert!(self.succ[self.paths.peek_tail(q) as usize].is_none());
        q
    }

    /// Root of the tree containing `i`.
    pub fn find_root(&mut self, i: u32) -> u32 {
        let q = self.expose(i);
        let root = self.paths.tail(q);
        debug_assert!(self.succ[root as usize].is_none(), "tree root {root} has a successor");
        root
    }

    /// Last node of minimum cost on the path from `i` to its tree root,
    /// and that cost. Ties go to the node nearest the root.
    pub fn find_cost(&mut self, i: u32) -> (u32, Cost) {
        let q = self.expose(i);
        self.paths.find_path_cost(q)
    }

    /// Add `delta` to the cost of every node from `i` to its tree root.
    ///
    /// Accumulated costs must stay within `±2^62`; see
    /// [`PathSet::add_path_cost`].
    pub fn add_cost(&mut self, i: u32, delta: Cost) {
        let q = self.expose(i);
        self.paths.add_path_cost(q, delta);
    }

    /// Make tree root `t` a child of `i`.
    ///
    /// `i` must not be in the subtree of `t`; this is not checked.
    pub fn link(&mut self, t: u32, i: u32) {
        self.check(t);
        self.check(i);
        debug_assert_ne!(t, i, "cannot link node {t} to itself");
        self.paths.find_path(t);
        debug_assert!(self.paths.node(t).r.is_none(), "node {t} is not the tail of its path");
        debug_assert!(self.succ[t as usize].is_none(), "node {t} is not a tree root");
        self.succ[t as usize] = Some(i);
        trace!(child = t, parent = i, "link");
    }

    /// Detach `i` from its parent, making it the root of its own tree.
    pub fn cut(&mut self, i: u32) {
        self.check(i);
        let (before, _after) = self.paths.split(i);
        if let Some(b) = before {
            let b_tail = self.paths.tail(b);
            self.succ[b_tail as usize] = Some(i);
        }
        self.succ[i as usize] = None;
        trace!(node = i, "cut");
    }

    /// Parent of `i` in the forest, `None` for a tree root.
    pub fn parent(&mut self, i: u32) -> Option<u32> {
        self.check(i);
        match self.paths.after(i) {
            Some(p) => Some(p),
            None => self.succ[i as usize],
        }
    }

    /// Current cost of `i`.
    pub fn node_cost(&self, i: u32) -> Cost {
        self.paths.node_cost(i)
    }
}

impl fmt::Display for Dtrees {
    /// One line per path: in-order ids, then the tail's successor if any.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in self.paths.roots() {
            let ids: Vec<String> = self
                .paths
                .path_nodes(root)
                .into_iter()
                .map(|x| x.to_string())
                .collect();
            write!(f, "[{}]", ids.join(" "))?;
            if let Some(s) = self.succ[self.paths.peek_tail(root) as usize] {
                write!(f, " -> {s}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
