//! Sleator–Tarjan dynamic trees over a fixed universe of integer node ids.
//!
//! Two layers, both arena-based: every "pointer" is an `Option<u32>` index
//! into a `Vec` owned by the structure, and no node is created or dropped
//! after construction.
//!
//! - [`PathSet`] keeps disjoint paths, each as a splay tree ordered by
//!   position along the path. Costs are stored as lazy deltas so a whole
//!   path can be shifted or queried for its minimum after a single splay.
//! - [`Dtrees`] represents a forest of rooted trees as preferred paths plus
//!   one successor link per path, and implements `link`, `cut`,
//!   `find_root`, `find_cost` and `add_cost` on top of `expose`.
//!
//! All operations run in O(log n) amortised time.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`CostNode`] traits, [`PathNode`] record |
//! | [`splay`] | Cost-aware `rotate` and `splay` |
//! | [`util`] | `first`, `last`, `next`, `inorder`, `node_cost` |
//! | [`path_set`] | [`PathSet`] |
//! | [`dtrees`] | [`Dtrees`] |
//! | [`print`] | Tree dump for diagnostics |
//!
//! ```
//! use dtrees::Dtrees;
//!
//! let mut forest = Dtrees::new(3).unwrap();
//! forest.add_cost(1, 4);
//! forest.add_cost(2, 2);
//! forest.link(1, 2);
//! forest.link(2, 3);
//! assert_eq!(forest.find_root(1), 3);
//! assert_eq!(forest.find_cost(1), (3, 0));
//! ```

pub mod dtrees;
pub mod error;
pub mod path_set;
pub mod print;
pub mod splay;
pub mod types;
pub mod util;

pub use dtrees::Dtrees;
pub use error::{ForestError, Result};
pub use path_set::PathSet;
pub use splay::{rotate, splay};
pub use types::{Cost, CostNode, Node, PathNode};
pub use util::{first, inorder, last, next, node_cost, root_of};
