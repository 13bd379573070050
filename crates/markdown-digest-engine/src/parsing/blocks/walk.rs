use std::iter::FusedIterator;
use std::slice;

use super::types::{BlockNode, Document};

/// Lazy pre-order traversal over the blocks of a [`Document`].
///
/// Children of a node are entered only when the iterator is advanced past
/// it, so a consumer can call [`Walk::skip_children`] right after receiving a
/// node to keep the walk at that node's level. Dropping the iterator stops
/// the traversal; nothing after the last yielded node is visited.
pub struct Walk<'a> {
    stack: Vec<slice::Iter<'a, BlockNode>>,
    pending: Option<&'a BlockNode>,
}

impl<'a> Walk<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            stack: vec![doc.children.iter()],
            pending: None,
        }
    }

    /// Do not descend into the node most recently returned by `next`.
    pub fn skip_children(&mut self) {
        self.pending = None;
    }

    /// Nesting depth of the node most recently returned (0 = top level).
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a BlockNode;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(prev) = self.pending.take()
            && !prev.children.is_empty()
        {
            self.stack.push(prev.children.iter());
        }
        while let Some(top) = self.stack.last_mut() {
            if let Some(node) = top.next() {
                self.pending = Some(node);
                return Some(node);
            }
            self.stack.pop();
        }
        None
    }
}

impl FusedIterator for Walk<'_> {}
