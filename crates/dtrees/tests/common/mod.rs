//! Naive parent-array forest used as an oracle by the integration tests.

#![allow(dead_code)]

use dtrees::{Cost, Dtrees};

#[derive(Clone, Debug)]
pub struct Model {
    pub parent: Vec<Option<u32>>,
    pub cost: Vec<Cost>,
}

impl Model {
    pub fn new(n: u32) -> Self {
        Self {
            parent: vec![None; n as usize + 1],
            cost: vec![0; n as usize + 1],
        }
    }

    pub fn len(&self) -> u32 {
        (self.parent.len() - 1) as u32
    }

    /// Nodes from `i` up to its root, inclusive.
    pub fn root_path(&self, i: u32) -> Vec<u32> {
        let mut out = vec![i];
        let mut x = i;
        while let Some(p) = self.parent[x as usize] {
            out.push(p);
            x = p;
        }
        out
    }

    pub fn find_root(&self, i: u32) -> u32 {
        *self.root_path(i).last().unwrap()
    }

    /// Minimum on the root path, ties toward the root.
    pub fn find_cost(&self, i: u32) -> (u32, Cost) {
        let mut best = (i, self.cost[i as usize]);
        for x in self.root_path(i) {
            if self.cost[x as usize] <= best.1 {
                best = (x, self.cost[x as usize]);
            }
        }
        best
    }

    pub fn add_cost(&mut self, i: u32, delta: Cost) {
        for x in self.root_path(i) {
            self.cost[x as usize] += delta;
        }
    }

    /// Whether `link(t, i)` keeps the forest acyclic.
    pub fn can_link(&self, t: u32, i: u32) -> bool {
        t != i && self.parent[t as usize].is_none() && self.find_root(i) != t
    }

    pub fn link(&mut self, t: u32, i: u32) {
        self.parent[t as usize] = Some(i);
    }

    pub fn cut(&mut self, i: u32) {
        self.parent[i as usize] = None;
    }
}

/// Compare every node's cost and parent, and check that successor chains
/// from every path tail end within `n` steps.
pub fn assert_matches(dt: &mut Dtrees, model: &Model) {
    let n = model.len();
    for i in 1..=n {
        assert_eq!(dt.node_cost(i), model.cost[i as usize], "cost of node {i}");
    }
    for i in 1..=n {
        let mut steps = 0;
        let mut x = Some(i);
        while let Some(y) = x {
            x = dt.successor(dt.paths().peek_tail(y));
            steps += 1;
            assert!(steps <= n, "successor chain from {i} does not terminate");
        }
    }
    for i in 1..=n {
        assert_eq!(dt.parent(i), model.parent[i as usize], "parent of node {i}");
    }
}
