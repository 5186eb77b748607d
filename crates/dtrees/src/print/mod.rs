//! Diagnostic rendering of path trees.
//!
//! Output uses `tree-dump` style branches:
//!
//! ```text
//! 3 [dcost=0, dmin=1]
//! ├─ 1 [dcost=2, dmin=0]
//! │  ├─ ∅
//! │  └─ 2 [dcost=0, dmin=3]
//! └─ 4 [dcost=4, dmin=1]
//! ```

use crate::types::CostNode;

fn header<N: CostNode>(arena: &[N], node: u32) -> String {
    let n = &arena[node as usize];
    format!("{node} [dcost={}, dmin={}]", n.dcost(), n.dmin())
}

/// Pending child line: the child (or `∅`), the length of the indentation
/// its parent's children share, and whether it is the right child.
type Frame = (Option<u32>, usize, bool);

fn push_children<N: CostNode>(arena: &[N], node: u32, indent: usize, stack: &mut Vec<Frame>) {
    let n = &arena[node as usize];
    if n.l().is_none() && n.r().is_none() {
        return;
    }
    stack.push((n.r(), indent, true));
    stack.push((n.l(), indent, false));
}

/// Render the splay tree rooted at `root` with its raw lazy fields, left
/// child first. A missing child prints as `∅` when its sibling exists.
///
/// Runs on an explicit stack with a single shared indentation buffer, so
/// degenerate (chain-shaped) trees of any depth render without recursion.
pub fn print_path_tree<N: CostNode>(arena: &[N], root: u32) -> String {
    let mut out = header(arena, root);
    let mut tab = String::new();
    let mut stack: Vec<Frame> = Vec::new();
    push_children(arena, root, 0, &mut stack);
    while let Some((node, indent, is_right)) = stack.pop() {
        // Everything past `indent` belongs to the previous sibling's subtree.
        tab.truncate(indent);
        out.push('\n');
        out.push_str(&tab);
        out.push_str(if is_right { "└─ " } else { "├─ " });
        match node {
            Some(x) => {
                out.push_str(&header(arena, x));
                tab.push_str(if is_right { "   " } else { "│  " });
                push_children(arena, x, tab.len(), &mut stack);
            }
            None => out.push('∅'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathNode;

    fn link(arena: &mut [PathNode], parent: u32, left: Option<u32>, right: Option<u32>) {
        arena[parent as usize].l = left;
        arena[parent as usize].r = right;
        for c in [left, right].into_iter().flatten() {
            arena[c as usize].p = Some(parent);
        }
    }

    #[test]
    fn print_single_node() {
        let mut arena = vec![PathNode::default(); 2];
        arena[1].dmin = 7;
        assert_eq!(print_path_tree(&arena, 1), "1 [dcost=0, dmin=7]");
    }

    #[test]
    fn print_right_child_only() {
        let mut arena = vec![PathNode::default(); 3];
        link(&mut arena, 1, None, Some(2));
        arena[1].dmin = 4;
        arena[2].dmin = 3;
        let out = print_path_tree(&arena, 1);
        assert_eq!(out, "1 [dcost=0, dmin=4]\n├─ ∅\n└─ 2 [dcost=0, dmin=3]");
    }

    //      3
    //     / \
    //    1   4
    //     \   \
    //      2   5
    #[test]
    fn print_nested_indentation() {
        let mut arena = vec![PathNode::default(); 6];
        link(&mut arena, 3, Some(1), Some(4));
        link(&mut arena, 1, None, Some(2));
        link(&mut arena, 4, None, Some(5));
        let h = |i: u32| format!("{i} [dcost=0, dmin=0]");
        let expected = format!(
            "{}\n├─ {}\n│  ├─ ∅\n│  └─ {}\n└─ {}\n   ├─ ∅\n   └─ {}",
            h(3),
            h(1),
            h(2),
            h(4),
            h(5)
        );
        assert_eq!(print_path_tree(&arena, 3), expected);
    }
}
