//! Cost-aware splay rotations for path trees (p / l / r links).
//!
//! All functions take the arena slice and node indices (u32). Unlike a
//! plain splay tree, every rotation also rebases the lazy `dmin`/`dcost`
//! fields of the two nodes that trade places and of the subtrees that
//! change parent, so the roll-up invariant of [`CostNode`] survives any
//! sequence of rotations.

use crate::types::{Cost, CostNode};

// ── helpers ───────────────────────────────────────────────────────────────

#[inline]
fn get_p<N: CostNode>(arena: &[N], idx: u32) -> Option<u32>  { arena[idx as usize].p() }
#[inline]
fn get_l<N: CostNode>(arena: &[N], idx: u32) -> Option<u32>  { arena[idx as usize].l() }
#[inline]
fn get_r<N: CostNode>(arena: &[N], idx: u32) -> Option<u32>  { arena[idx as usize].r() }
#[inline]
fn set_p<N: CostNode>(arena: &mut [N], idx: u32, v: Option<u32>) { arena[idx as usize].set_p(v); }
#[inline]
fn set_l<N: CostNode>(arena: &mut [N], idx: u32, v: Option<u32>) { arena[idx as usize].set_l(v); }
#[inline]
fn set_r<N: CostNode>(arena: &mut [N], idx: u32, v: Option<u32>) { arena[idx as usize].set_r(v); }
#[inline]
fn dmin<N: CostNode>(arena: &[N], idx: u32) -> Cost { arena[idx as usize].dmin() }
#[inline]
fn dcost<N: CostNode>(arena: &[N], idx: u32) -> Cost { arena[idx as usize].dcost() }
#[inline]
fn add_dmin<N: CostNode>(arena: &mut [N], idx: u32, delta: Cost) {
    let node = &mut arena[idx as usize];
    node.set_dmin(node.dmin() + delta);
}

// ── single rotation ───────────────────────────────────────────────────────

/// Promote `x` over its parent `y`. No-op when `x` is a path-tree root.
///
/// ```text
///       y              x
///      / \            / \
///     x   c    →     a   y
///    / \                / \
///   a   b              b   c
/// ```
///
/// (and the mirror image). `a` stays under `x`, `c` stays under `y`, `b`
/// moves from `x` to `y`.
///
/// Lazy fields: `x` takes over `y`'s `dmin`, since it now covers the same
/// subtree; `x`'s old `dmin` is folded into its own `dcost` and pushed down
/// into `a` and `b`; `y`'s new `dmin` is the minimum of its own `dcost`
/// and the `dmin` of its new children, which are then rebased on it.
pub fn rotate<N: CostNode>(arena: &mut [N], x: u32) {
    let Some(y) = get_p(arena, x) else { return; };
    let z = get_p(arena, y);
    let x_is_left = get_l(arena, y) == Some(x);
    let (a, b, c) = if x_is_left {
        (get_l(arena, x), get_r(arena, x), get_r(arena, y))
    } else {
        (get_r(arena, x), get_l(arena, x), get_l(arena, y))
    };

    let dx = dmin(arena, x);
    let dy = dmin(arena, y);
    let cy = dcost(arena, y);

    let cx = dcost(arena, x);
    arena[x as usize].set_dcost(cx + dx);
    if let Some(a) = a { add_dmin(arena, a, dx); }
    if let Some(b) = b { add_dmin(arena, b, dx); }

    let mut m = cy;
    if let Some(b) = b { m = m.min(dmin(arena, b)); }
    if let Some(c) = c { m = m.min(dmin(arena, c)); }
    arena[y as usize].set_dmin(m);
    arena[y as usize].set_dcost(cy - m);
    if let Some(b) = b { add_dmin(arena, b, -m); }
    if let Some(c) = c { add_dmin(arena, c, -m); }
    arena[x as usize].set_dmin(dy);

    if x_is_left {
        set_l(arena, y, b);
        set_r(arena, x, Some(y));
    } else {
        set_r(arena, y, b);
        set_l(arena, x, Some(y));
    }
    if let Some(b) = b { set_p(arena, b, Some(y)); }
    set_p(arena, y, Some(x));
    set_p(arena, x, z);
    if let Some(z) = z {
        if get_l(arena, z) == Some(y) { set_l(arena, z, Some(x)); }
        else                          { set_r(arena, z, Some(x)); }
    }
}

// ── top-level splay ───────────────────────────────────────────────────────

/// Splay `x` to the root of its path tree and return it.
///
/// Zig-zig steps rotate the parent first, zig-zag steps rotate `x` twice.
pub fn splay<N: CostNode>(arena: &mut [N], x: u32) -> u32 {
    while let Some(y) = get_p(arena, x) {
        if let Some(z) = get_p(arena, y) {
            let zig_zig = (get_l(arena, z) == Some(y)) == (get_l(arena, y) == Some(x));
            if zig_zig { rotate(arena, y); }
            else       { rotate(arena, x); }
        }
        rotate(arena, x);
    }
    x
}

// ── Tests ─────────────────────────────────────────────────────────────────
