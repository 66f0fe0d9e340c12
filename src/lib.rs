//! This crate exposes a bijective ordered map: a dictionary that can be
//! searched by key *or* by value in `O(height)` time.
//!
//! ## How it works
//!
//! An ordinary tree map orders its nodes by key, so asking "which key maps to
//! this value?" means scanning every node. [`BidiMap`] instead stores each
//! pair twice: the key goes into a Binary Search Tree ordered by key
//! comparison and the value into a second tree ordered by value comparison.
//! The two nodes are cross linked, so finishing a search in either tree is
//! one hop away from the other half of the pair. The most important
//! invariants are:
//!
//! 1. Every key-tree node's cross link names a value-tree node whose cross
//!    link names it right back (the pairing is a bijection).
//! 2. No two nodes in one tree compare equal. Keys are unique *and* values
//!    are unique, which is what makes the reverse direction well defined.
//! 3. Both trees satisfy the usual BST ordering, each under its own
//!    comparison.
//! 4. The maintained pair count equals the node count of either tree.
//!
//! The price of reverse lookup is that inserting a pair whose key or value is
//! already present is rejected outright rather than overwriting.
//!
//! Neither tree is self-balancing: lookups are `O(log n)` on average but a
//! sorted insertion order degenerates a tree into a chain and searches into
//! `O(n)`. Traversal uses an explicit stack, so even a degenerate map can be
//! walked without exhausting the call stack.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod map;
mod tree;

pub use crate::map::BidiMap;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
