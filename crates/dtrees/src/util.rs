//! Read-only path-tree (p / l / r) traversal helpers.
//!
//! None of these restructure the tree; callers splay afterwards when they
//! need the amortised bound.

use crate::types::{Cost, CostNode, Node};

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}
#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}
#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

/// Descend from `from` along one side until there is no further child.
fn extreme<N: Node>(arena: &[N], from: u32, side: fn(&[N], u32) -> Option<u32>) -> u32 {
    let mut x = from;
    while let Some(c) = side(arena, x) {
        x = c;
    }
    x
}

/// Head of the path whose splay tree is rooted at `root`: the deepest
/// forest node on it.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| extreme(arena, r, get_l))
}

/// Tail of the path whose splay tree is rooted at `root`: the node whose
/// successor is the path's forest parent.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| extreme(arena, r, get_r))
}

/// Node after `node` in path order, i.e. one step toward the forest root
/// inside the same path. `None` at the tail.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return Some(extreme(arena, r, get_l));
    }
    // Climb until we arrive from a left child.
    let mut child = node;
    while let Some(p) = get_p(arena, child) {
        if get_l(arena, p) == Some(child) {
            return Some(p);
        }
        child = p;
    }
    None
}

/// Root of the tree containing `node`.
pub fn root_of<N: Node>(arena: &[N], node: u32) -> u32 {
    let mut x = node;
    while let Some(p) = get_p(arena, x) {
        x = p;
    }
    x
}

/// In-order node indices of the tree rooted at `root`.
pub fn inorder<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        out.push(i);
        curr = next(arena, i);
    }
    out
}

/// True cost of `node`: its `dcost` plus every `dmin` from it up to the
/// root of its path tree.
pub fn node_cost<N: CostNode>(arena: &[N], node: u32) -> Cost {
    let mut total = arena[node as usize].dcost();
    let mut curr = Some(node);
    while let Some(i) = curr {
        total += arena[i as usize].dmin();
        curr = get_p(arena, i);
    }
    total
}
