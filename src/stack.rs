//! A LIFO stack used by the iterative tree algorithms.
//!
//! The traversals and the teardown in [`crate::tree`] never recurse; they
//! park their pending work on an explicit stack instead. This module
//! provides that stack. It is generic so the tree engine can instantiate it
//! for node references and the postorder engine can instantiate it a second
//! time for its first-visit flags.

/// A last-in-first-out stack backed by a growable buffer.
///
/// # Examples
///
/// ```
/// use treetable::stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert!(stack.is_empty());
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top item without removing it, or `None`
    /// if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items the stack holds.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
