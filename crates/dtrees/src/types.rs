//! Node trait definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena.
//! All tree-manipulation functions take the arena as `&mut [N]` and work
//! with indices.

/// Signed cost carried by every node.
///
/// The lazy fields store differences between costs, so accumulated costs
/// must stay within `±2^62` to keep every difference inside `i64`.
pub type Cost = i64;

/// Path-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Lazy cost fields layered over the path-tree links.
///
/// With `mincost(x)` the minimum true cost in the subtree of `x`:
///
/// - `dmin(x) = mincost(x)` when `x` is a path-tree root,
///   otherwise `mincost(x) - mincost(p(x))`;
/// - `dcost(x) = cost(x) - mincost(x)`.
///
/// So the true cost of `x` is `dcost(x)` plus the sum of `dmin` from `x`
/// up to its root, and `dmin` is never negative below a root.
pub trait CostNode: Node {
    fn dcost(&self) -> Cost;
    fn dmin(&self) -> Cost;
    fn set_dcost(&mut self, v: Cost);
    fn set_dmin(&mut self, v: Cost);
}

/// Concrete arena record used by [`PathSet`](crate::PathSet).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub dcost: Cost,
    pub dmin: Cost,
}

impl Node for PathNode {
    #[inline]
    fn p(&self) -> Option<u32> {
        self.p
    }
    #[inline]
    fn l(&self) -> Option<u32> {
        self.l
    }
    #[inline]
    fn r(&self) -> Option<u32> {
        self.r
    }
    #[inline]
    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
    #[inline]
    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }
    #[inline]
    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl CostNode for PathNode {
    #[inline]
    fn dcost(&self) -> Cost {
        self.dcost
    }
    #[inline]
    fn dmin(&self) -> Cost {
        self.dmin
    }
    #[inline]
    fn set_dcost(&mut self, v: Cost) {
        self.dcost = v;
    }
    #[inline]
    fn set_dmin(&mut self, v: Cost) {
        self.dmin = v;
    }
}
