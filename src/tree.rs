//! An iterative Binary Search Tree keyed by `char`.
//!
//! Nothing in this module recurses. Lookups, insertions, and deletions walk
//! a cursor down the owning links of the tree; the traversals and the
//! teardown keep their pending subtrees on an explicit [`Stack`]. The one
//! place the textbook algorithm is "recursive" (removing a node with two
//! children) is expressed as a delegated call to the same delete routine
//! on the node's left subtree, and that inner call always lands on the
//! simple splice case.
//!
//! # Examples
//!
//! ```
//! use treetable::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find('a'), None);
//!
//! tree.insert('a', 1);
//! assert_eq!(tree.find('a'), Some(1));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert('a', 2);
//! assert_eq!(tree.find('a'), Some(2));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete('a'), Some(2));
//! assert_eq!(tree.find('a'), None);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::stack::Stack;

/// An owning link to a subtree. `None` marks the absent child at the bottom
/// of a spine.
type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    key: char,
    value: i32,
    left: Link,
    right: Link,
}

/// A Binary Search Tree mapping `char` keys to `i32` values. Keys are
/// unique; inserting an existing key overwrites its value in place.
#[derive(Debug, Default)]
pub struct Tree {
    root: Link,
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Box's drop glue would recurse once per level, which overflows the
        // call stack on a degenerate list-shaped tree.
        self.clear();
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many nodes the tree holds, counted by walking the tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.inorder(|_, _| count += 1);
        count
    }

    /// Potentially finds the value associated with the given key. If no
    /// node has the corresponding key, `None` is returned. Runs in
    /// `O(height)` and never mutates the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('a', 1);
    ///
    /// assert_eq!(tree.find('a'), Some(1));
    /// assert_eq!(tree.find('z'), None);
    /// ```
    pub fn find(&self, key: char) -> Option<i32> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some(node.value),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Inserts the given value at the given key. Inserting a new value for
    /// an existing key overwrites its value without changing the shape of
    /// the tree; a new key becomes a leaf at the position where the descent
    /// ran off the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert('m', 1);
    /// tree.insert('c', 2);
    /// assert_eq!(tree.find('c'), Some(2));
    ///
    /// tree.insert('c', 3);
    /// assert_eq!(tree.find('c'), Some(3));
    /// ```
    pub fn insert(&mut self, key: char, value: i32) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Equal => {
                    node.value = value;
                    return;
                }
                Ordering::Greater => cur = &mut node.right,
            }
        }
        *cur = Some(Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        }));
    }

    /// Deletes the node with the given key and returns its value, or
    /// returns `None` without touching the tree if the key is absent.
    ///
    /// A node with at most one child is spliced out of its owning link. A
    /// node with two children instead has its key and value replaced by
    /// those of the rightmost node of its left subtree (its in-order
    /// predecessor, which need not be a leaf), and that rightmost node is
    /// removed from the left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('b', 2);
    /// tree.insert('a', 1);
    /// tree.insert('c', 3);
    ///
    /// assert_eq!(tree.delete('b'), Some(2));
    /// assert_eq!(tree.find('b'), None);
    /// assert_eq!(tree.find('a'), Some(1));
    /// assert_eq!(tree.find('c'), Some(3));
    ///
    /// assert_eq!(tree.delete('z'), None);
    /// ```
    pub fn delete(&mut self, key: char) -> Option<i32> {
        Self::delete_from(&mut self.root, key)
    }

    /// Removes `key` from the subtree owned by `link`, returning the
    /// removed value. Also the delegation target of
    /// [`Self::replace_by_rightmost`], which calls it on an interior link.
    fn delete_from(link: &mut Link, key: char) -> Option<i32> {
        // Descend to the link that owns the matching node, or to the empty
        // link where the descent ran off the tree.
        let mut cur = link;
        while cur.as_ref().is_some_and(|node| node.key != key) {
            let node = cur.as_mut().expect("loop condition saw a node");
            cur = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let two_children = match cur.as_deref() {
            None => return None,
            Some(node) => node.left.is_some() && node.right.is_some(),
        };

        if two_children {
            // Never splice a two-child node directly; its slot is refilled
            // with the in-order predecessor instead.
            let node = cur.as_deref_mut().expect("checked non-empty above");
            let Node {
                key: target_key,
                value: target_value,
                left,
                ..
            } = node;
            Some(Self::replace_by_rightmost(target_key, target_value, left))
        } else {
            let node = *cur.take().expect("checked non-empty above");
            let Node { value, left, right, .. } = node;
            *cur = left.or(right);
            Some(value)
        }
    }

    /// Overwrites `target_key` and `target_value` with the key and value of
    /// the rightmost node of the subtree owned by `link`, removes that
    /// rightmost node, and returns the value the target held before.
    ///
    /// Invoked only from the two-children case of [`Self::delete_from`],
    /// with `link` being the target's left subtree, so the subtree is
    /// non-empty and its rightmost key is the target's in-order
    /// predecessor. The removal is delegated back to `delete_from`; the
    /// rightmost node has no right child, so that call always resolves to
    /// the splice case and never re-enters this helper.
    fn replace_by_rightmost(target_key: &mut char, target_value: &mut i32, link: &mut Link) -> i32 {
        let mut rightmost = None;
        let mut probe = link.as_deref();
        while let Some(node) = probe {
            rightmost = Some(node.key);
            probe = node.right.as_deref();
        }

        let key = rightmost.expect("a node with two children has a left subtree");
        let value = Self::delete_from(link, key).expect("rightmost key is in the subtree");

        *target_key = key;
        mem::replace(target_value, value)
    }

    /// Removes every node, returning the tree to its freshly created state.
    ///
    /// Teardown is iterative: walk the leftmost spine dropping each node,
    /// parking its right subtree (if any) on an explicit stack first; when
    /// the spine runs out, resume from the next parked subtree. Every node
    /// is dropped exactly once, in `O(n)` time with `O(height)` auxiliary
    /// space.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('a', 1);
    /// tree.insert('b', 2);
    ///
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.find('a'), None);
    /// ```
    pub fn clear(&mut self) {
        let mut pending: Stack<Box<Node>> = Stack::new();
        let mut cur = self.root.take();
        loop {
            match cur {
                Some(mut node) => {
                    if let Some(right) = node.right.take() {
                        pending.push(right);
                    }
                    // Both children are detached, so dropping `node` at the
                    // end of this arm frees exactly one node.
                    cur = node.left.take();
                }
                None => match pending.pop() {
                    Some(next) => cur = Some(next),
                    None => return,
                },
            }
        }
    }

    /// Visits every node in preorder (node, left subtree, right subtree),
    /// invoking `visit` exactly once per node with its key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for (key, value) in [('b', 2), ('a', 1), ('c', 3)] {
    ///     tree.insert(key, value);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.preorder(|key, _| keys.push(key));
    /// assert_eq!(keys, ['b', 'a', 'c']);
    /// ```
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(char, i32),
    {
        let mut to_visit = Stack::new();
        Self::leftmost_preorder(self.root.as_deref(), &mut to_visit, &mut visit);
        while let Some(node) = to_visit.pop() {
            Self::leftmost_preorder(node.right.as_deref(), &mut to_visit, &mut visit);
        }
    }

    /// Walks the leftmost spine from `tree`, visiting each node as it is
    /// pushed onto `to_visit`.
    fn leftmost_preorder<'a, F>(
        mut tree: Option<&'a Node>,
        to_visit: &mut Stack<&'a Node>,
        visit: &mut F,
    ) where
        F: FnMut(char, i32),
    {
        while let Some(node) = tree {
            visit(node.key, node.value);
            to_visit.push(node);
            tree = node.left.as_deref();
        }
    }

    /// Visits every node in inorder (left subtree, node, right subtree),
    /// invoking `visit` exactly once per node with its key and value. By
    /// the ordering invariant this yields keys in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for (key, value) in [('b', 2), ('a', 1), ('c', 3)] {
    ///     tree.insert(key, value);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.inorder(|key, _| keys.push(key));
    /// assert_eq!(keys, ['a', 'b', 'c']);
    /// ```
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(char, i32),
    {
        let mut to_visit = Stack::new();
        Self::leftmost_inorder(self.root.as_deref(), &mut to_visit);
        while let Some(node) = to_visit.pop() {
            visit(node.key, node.value);
            Self::leftmost_inorder(node.right.as_deref(), &mut to_visit);
        }
    }

    /// Walks the leftmost spine from `tree`, pushing each node onto
    /// `to_visit` without visiting it.
    fn leftmost_inorder<'a>(mut tree: Option<&'a Node>, to_visit: &mut Stack<&'a Node>) {
        while let Some(node) = tree {
            to_visit.push(node);
            tree = node.left.as_deref();
        }
    }

    /// Visits every node in postorder (left subtree, right subtree, node),
    /// invoking `visit` exactly once per node with its key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for (key, value) in [('b', 2), ('a', 1), ('c', 3)] {
    ///     tree.insert(key, value);
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.postorder(|key, _| keys.push(key));
    /// assert_eq!(keys, ['a', 'c', 'b']);
    /// ```
    pub fn postorder<F>(&self, mut visit: F)
    where
        F: FnMut(char, i32),
    {
        let mut to_visit = Stack::new();
        let mut right_done = Stack::new();
        Self::leftmost_postorder(self.root.as_deref(), &mut to_visit, &mut right_done);
        while let Some(&node) = to_visit.peek() {
            let done = right_done.pop().expect("one flag per parked node");
            if done {
                to_visit.pop();
                visit(node.key, node.value);
            } else {
                // First time on top: flip the flag and stack up the right
                // subtree before this node may be visited.
                right_done.push(true);
                Self::leftmost_postorder(node.right.as_deref(), &mut to_visit, &mut right_done);
            }
        }
    }

    /// Walks the leftmost spine from `tree`, pushing each node onto
    /// `to_visit` together with a parallel not-yet-descended-right flag on
    /// `right_done`.
    fn leftmost_postorder<'a>(
        mut tree: Option<&'a Node>,
        to_visit: &mut Stack<&'a Node>,
        right_done: &mut Stack<bool>,
    ) {
        while let Some(node) = tree {
            to_visit.push(node);
            right_done.push(false);
            tree = node.left.as_deref();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keys `d b f a c e` build the balanced tree used by most cases here:
    ///
    /// ```text
    ///       d
    ///      / \
    ///     b   f
    ///    / \  /
    ///   a  c e
    /// ```
    fn sample_tree() -> Tree {
        let mut tree = Tree::new();
        for (key, value) in [('d', 4), ('b', 2), ('f', 6), ('a', 1), ('c', 3), ('e', 5)] {
            tree.insert(key, value);
        }
        tree
    }

    fn inorder_keys(tree: &Tree) -> Vec<char> {
        let mut keys = Vec::new();
        tree.inorder(|key, _| keys.push(key));
        keys
    }

    fn preorder_keys(tree: &Tree) -> Vec<char> {
        let mut keys = Vec::new();
        tree.preorder(|key, _| keys.push(key));
        keys
    }

    #[test]
    fn find_on_empty_tree() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.find('a'), None);
    }

    #[test]
    fn insert_then_find() {
        let tree = sample_tree();
        for (key, value) in [('a', 1), ('b', 2), ('c', 3), ('d', 4), ('e', 5), ('f', 6)] {
            assert_eq!(tree.find(key), Some(value));
        }
        assert_eq!(tree.find('g'), None);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn insert_existing_key_overwrites_in_place() {
        let mut tree = sample_tree();
        tree.insert('c', 33);

        assert_eq!(tree.find('c'), Some(33));
        // Same node count and same shape as before the overwrite.
        assert_eq!(tree.len(), 6);
        assert_eq!(preorder_keys(&tree), ['d', 'b', 'a', 'c', 'f', 'e']);
    }

    #[test]
    fn traversal_orders() {
        let tree = sample_tree();

        assert_eq!(preorder_keys(&tree), ['d', 'b', 'a', 'c', 'f', 'e']);
        assert_eq!(inorder_keys(&tree), ['a', 'b', 'c', 'd', 'e', 'f']);

        let mut postorder = Vec::new();
        tree.postorder(|key, _| postorder.push(key));
        assert_eq!(postorder, ['a', 'c', 'b', 'e', 'f', 'd']);
    }

    #[test]
    fn traversals_pass_values_with_keys() {
        let tree = sample_tree();
        let mut pairs = Vec::new();
        tree.inorder(|key, value| pairs.push((key, value)));
        assert_eq!(
            pairs,
            [('a', 1), ('b', 2), ('c', 3), ('d', 4), ('e', 5), ('f', 6)]
        );
    }

    #[test]
    fn delete_absent_key_is_a_noop() {
        let mut tree = sample_tree();
        assert_eq!(tree.delete('z'), None);
        assert_eq!(inorder_keys(&tree), ['a', 'b', 'c', 'd', 'e', 'f']);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = sample_tree();
        assert_eq!(tree.delete('a'), Some(1));

        assert_eq!(tree.find('a'), None);
        assert_eq!(inorder_keys(&tree), ['b', 'c', 'd', 'e', 'f']);
    }

    #[test]
    fn delete_node_with_only_left_child() {
        let mut tree = sample_tree();
        assert_eq!(tree.delete('f'), Some(6));

        // 'e' is inherited by the deleted node's parent.
        assert_eq!(preorder_keys(&tree), ['d', 'b', 'a', 'c', 'e']);
        assert_eq!(tree.find('e'), Some(5));
    }

    #[test]
    fn delete_node_with_only_right_child() {
        let mut tree = Tree::new();
        for key in ['b', 'a', 'c', 'd'] {
            tree.insert(key, 0);
        }
        assert_eq!(tree.delete('c'), Some(0));

        assert_eq!(preorder_keys(&tree), ['b', 'a', 'd']);
    }

    #[test]
    fn delete_node_with_two_children_promotes_predecessor() {
        let mut tree = sample_tree();
        assert_eq!(tree.delete('d'), Some(4));

        // 'c', the rightmost key of the left subtree, takes over the root
        // slot; its old leaf slot is vacated.
        assert_eq!(inorder_keys(&tree), ['a', 'b', 'c', 'e', 'f']);
        assert_eq!(preorder_keys(&tree), ['c', 'b', 'a', 'f', 'e']);
        assert_eq!(tree.find('c'), Some(3));
        assert_eq!(tree.find('d'), None);
    }

    #[test]
    fn delete_with_non_leaf_predecessor() {
        // The rightmost node of the left subtree ('c') has a left child of
        // its own, so the delegated removal exercises the one-child splice.
        let mut tree = Tree::new();
        for (key, value) in [('d', 4), ('a', 1), ('f', 6), ('c', 3), ('b', 2)] {
            tree.insert(key, value);
        }

        assert_eq!(tree.delete('d'), Some(4));
        assert_eq!(inorder_keys(&tree), ['a', 'b', 'c', 'f']);
        assert_eq!(tree.find('c'), Some(3));
        assert_eq!(tree.find('b'), Some(2));
    }

    #[test]
    fn delete_root_of_single_node_tree() {
        let mut tree = Tree::new();
        tree.insert('a', 1);

        assert_eq!(tree.delete('a'), Some(1));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_every_key_in_each_order() {
        let keys = ['d', 'b', 'f', 'a', 'c', 'e'];
        for victim in keys {
            let mut tree = sample_tree();
            tree.delete(victim);

            let mut expected: Vec<char> = keys.iter().copied().filter(|&k| k != victim).collect();
            expected.sort_unstable();
            assert_eq!(inorder_keys(&tree), expected, "deleting {victim:?}");
        }
    }

    #[test]
    fn clear_leaves_a_fresh_tree() {
        let mut tree = sample_tree();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.find('a'), None);

        // The cleared tree is usable again.
        tree.insert('x', 9);
        assert_eq!(tree.find('x'), Some(9));
    }

    #[test]
    fn clear_and_drop_survive_a_degenerate_tree() {
        // A strictly ascending insertion order produces a list-shaped tree,
        // deep enough that a teardown recursing once per level would be at
        // the mercy of the thread's stack size.
        let mut tree = Tree::new();
        for i in 0..20_000u32 {
            tree.insert(char::from_u32(i).expect("below the surrogate range"), 0);
        }
        tree.clear();
        assert!(tree.is_empty());

        let mut tree = Tree::new();
        for i in 0..20_000u32 {
            tree.insert(char::from_u32(i).expect("below the surrogate range"), 0);
        }
        drop(tree);
    }

    #[test]
    fn traversals_on_empty_tree_visit_nothing() {
        let tree = Tree::new();
        tree.preorder(|_, _| panic!("visited a node in an empty tree"));
        tree.inorder(|_, _| panic!("visited a node in an empty tree"));
        tree.postorder(|_, _| panic!("visited a node in an empty tree"));
    }
}
