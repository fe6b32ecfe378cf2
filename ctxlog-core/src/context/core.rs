use std::any::{Any, TypeId};
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// A typed slot that can be attached to a [`Context`].
///
/// Slots are addressed by the `TypeId` of the implementing type, so two
/// distinct key types never collide even if they share a value type. A key
/// type that is private to a module is unreachable from anywhere else.
pub trait Key: 'static {
    type Value: Send + Sync + 'static;
}

/// An immutable, request-scoped carrier of keyed values.
///
/// Every write returns a new `Context` whose node points back at the one it
/// was derived from; nothing is ever mutated in place. Cloning is a
/// reference-count bump, and lookups walk from the newest node toward the
/// root so children inherit whatever their ancestors carry.
#[derive(Clone, Default)]
pub struct Context {
    node: Option<Arc<Node>>,
}

struct Node {
    parent: Context,
    key: TypeId,
    value: Box<dyn Any + Send + Sync>,
}

impl Context {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context carrying `value` under the key `K`.
    pub fn with_value<K: Key>(&self, value: K::Value) -> Self {
        Self {
            node: Some(Arc::new(Node {
                parent: self.clone(),
                key: TypeId::of::<K>(),
                value: Box::new(value),
            })),
        }
    }

    /// Look up the nearest value stored under `K` in this lineage.
    pub fn value<K: Key>(&self) -> Option<&K::Value> {
        let key = TypeId::of::<K>();
        let mut current = self.node.as_deref();
        while let Some(node) = current {
            if node.key == key {
                return node.value.downcast_ref::<K::Value>();
            }
            current = node.parent.node.as_deref();
        }
        None
    }

    /// Number of nodes between this context and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.as_deref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.node.as_deref();
        }
        depth
    }

    /// Whether `self` and `other` are handles to the same node.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Unlink the chain iteratively so dropping a deep lineage doesn't recurse
// once per node.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.parent.node.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.node.take(),
                Err(_) => break,
            }
        }
    }
}

// Key types stay out of the output; some of them are private.
impl Debug for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
