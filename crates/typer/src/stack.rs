use crate::error::TypeError;
use std::sync::Arc;

/// Stack of enclosing object type names for the traversal in progress.
///
/// Pushed when entering the root operation or an object-typed field, popped
/// when leaving it; empty before and after a complete pass. Lookups always
/// read the top.
#[derive(Debug, Default)]
pub(crate) struct TypeStack {
    frames: Vec<Arc<str>>,
}

impl TypeStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, object_type: Arc<str>) {
        self.frames.push(object_type);
    }

    pub(crate) fn pop(&mut self) -> Option<Arc<str>> {
        self.frames.pop()
    }

    /// The type whose field set is currently being resolved against.
    pub(crate) fn current(&self) -> Result<&Arc<str>, TypeError> {
        self.frames.last().ok_or(TypeError::EmptyTypeStack)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_reads_the_top_in_lifo_order() {
        let mut stack = TypeStack::new();
        assert!(stack.is_empty());

        stack.push(Arc::from("Query"));
        stack.push(Arc::from("User"));
        stack.push(Arc::from("Post"));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.current().unwrap().as_ref(), "Post");

        assert_eq!(stack.pop().unwrap().as_ref(), "Post");
        assert_eq!(stack.current().unwrap().as_ref(), "User");
        assert_eq!(stack.pop().unwrap().as_ref(), "User");
        assert_eq!(stack.pop().unwrap().as_ref(), "Query");
        assert!(stack.is_empty());
    }

    #[test]
    fn current_fails_on_empty_stack() {
        let stack = TypeStack::new();
        assert_eq!(stack.current().unwrap_err(), TypeError::EmptyTypeStack);
    }

    #[test]
    fn pop_on_empty_stack_returns_none() {
        let mut stack = TypeStack::new();
        assert!(stack.pop().is_none());
    }
}
