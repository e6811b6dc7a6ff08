use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

/// Capacity hint used by [`Stack::new`].
pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("pop from an empty stack")]
    Empty,
}

/// LIFO stack. The top of the stack is the end of the backing vector, so
/// pushes and pops are amortized constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack able to hold at least `capacity` elements
    /// before reallocating.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity.is_power_of_two(),
            "capacity hint must be a power of two, got {}",
            capacity
        );
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns how many elements fit before the backing storage reallocates.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Pushes `value` as the new top of the stack.
    pub fn push(&mut self, value: T) {
        let before = self.data.capacity();
        self.data.push(value);
        let after = self.data.capacity();
        if after != before {
            trace!("Stack grew from {} to {} slots", before, after);
        }
    }

    /// Removes and returns the top element.
    ///
    /// Returns [`StackError::Empty`] without touching the stack when there
    /// is nothing to pop.
    pub fn pop(&mut self) -> crate::Result<T> {
        self.data.pop().ok_or(StackError::Empty)
    }

    /// Removes every element. Capacity is retained.
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            debug!("Clearing {} elements", self.data.len());
        }
        self.data.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a copy of the contents ordered bottom to top.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Stack<T>> for Vec<T> {
    fn from(stack: Stack<T>) -> Self {
        stack.data
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

/// Renders as `Stack[bottom, ..., top]`.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
