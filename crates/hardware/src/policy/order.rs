//! Arena-backed doubly linked list.
//!
//! A `ReplacementOrder` threads a fixed set of nodes (TLB slots or logical pages)
//! through `prev`/`next` index links stored in a flat array. Nodes are addressed by
//! their index, so relinking is O(1) and nothing is allocated after construction.
//!
//! # Performance
//!
//! - `push_front()`, `push_back()`, `unlink()`, `move_to_front()`: O(1)
//! - `iter()`, `iter_rev()`: O(n) over linked nodes only

/// Per-node link state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
    linked: bool,
}

/// Ordered subset of `0..capacity`, stored as index links.
///
/// The head is the front of the order and the tail the back; what the ends mean
/// (oldest arrival, most recent access) is decided by the policy that owns it.
#[derive(Clone, Debug)]
pub struct ReplacementOrder {
    links: Vec<Link>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl ReplacementOrder {
    /// Creates an empty order over nodes `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            links: vec![Link::default(); capacity],
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of addressable nodes.
    pub fn capacity(&self) -> usize {
        self.links.len()
    }

    /// Number of linked nodes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no node is linked.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `node` is currently linked.
    pub fn contains(&self, node: usize) -> bool {
        self.links.get(node).is_some_and(|l| l.linked)
    }

    /// Front node.
    pub const fn head(&self) -> Option<usize> {
        self.head
    }

    /// Back node.
    pub const fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Links `node` at the front.
    ///
    /// # Panics
    ///
    /// Panics if `node` is already linked.
    pub fn push_front(&mut self, node: usize) {
        assert!(!self.links[node].linked, "node {node} is already linked");
        self.links[node] = Link {
            prev: None,
            next: self.head,
            linked: true,
        };
        match self.head {
            Some(old) => self.links[old].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Links `node` at the back.
    ///
    /// # Panics
    ///
    /// Panics if `node` is already linked.
    pub fn push_back(&mut self, node: usize) {
        assert!(!self.links[node].linked, "node {node} is already linked");
        self.links[node] = Link {
            prev: self.tail,
            next: None,
            linked: true,
        };
        match self.tail {
            Some(old) => self.links[old].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Splices `node` out of the order. Returns `false` if it was not linked.
    pub fn unlink(&mut self, node: usize) -> bool {
        let Some(link) = self.links.get(node).copied().filter(|l| l.linked) else {
            return false;
        };
        match link.prev {
            Some(p) => self.links[p].next = link.next,
            None => self.head = link.next,
        }
        match link.next {
            Some(n) => self.links[n].prev = link.prev,
            None => self.tail = link.prev,
        }
        self.links[node] = Link::default();
        self.len -= 1;
        true
    }

    /// Moves a linked `node` to the front. No-op if it is already there.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not linked.
    pub fn move_to_front(&mut self, node: usize) {
        if self.head == Some(node) {
            return;
        }
        assert!(self.unlink(node), "node {node} is not linked");
        self.push_front(node);
    }

    /// Iterates linked nodes from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            order: self,
            cursor: self.head,
            forward: true,
        }
    }

    /// Iterates linked nodes from tail to head.
    pub fn iter_rev(&self) -> Iter<'_> {
        Iter {
            order: self,
            cursor: self.tail,
            forward: false,
        }
    }
}

/// Iterator over the linked nodes of a [`ReplacementOrder`].
#[derive(Debug)]
pub struct Iter<'a> {
    order: &'a ReplacementOrder,
    cursor: Option<usize>,
    forward: bool,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.cursor?;
        let link = self.order.links[node];
        self.cursor = if self.forward { link.next } else { link.prev };
        Some(node)
    }
}
