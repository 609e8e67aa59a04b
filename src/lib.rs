//! This crate implements two classic dictionary structures, a Binary
//! Search Tree (BST) and a separately chained hash table, with every tree
//! algorithm written iteratively.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. A BST is built from `Node`s,
//! each holding a key, a value, and up to two child subtrees. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! These invariants make point lookup `O(height)` and give sorted iteration
//! for free: visit the left subtree, then the node, then the right subtree.
//!
//! BST algorithms are usually presented recursively. The [`tree`] module
//! instead does everything with loops: lookups and insertions walk a cursor
//! down the tree, while the traversals and the teardown keep their pending
//! subtrees on an explicit [`stack::Stack`] rather than the call stack, so
//! a degenerate (list-shaped) tree cannot overflow it.
//!
//! ## Hash table
//!
//! The [`table`] module is a fixed-size hash table resolving collisions by
//! separate chaining: every bucket owns a singly linked list of the entries
//! that hash to it. The bucket count is chosen at construction time and
//! never changes.

#![deny(missing_docs)]

pub mod stack;
pub mod table;
pub mod tree;

#[cfg(test)]
mod test;
