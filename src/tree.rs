//! The arena-backed Binary Search Tree used for each half of the map.
//!
//! Nodes live in a flat arena and name each other by [`NodeId`] index instead
//! of owning pointers. That makes the cross link between the two trees a plain
//! index into the sibling tree's arena: the two-node cycle that each pair
//! forms has no ownership or lifetime ambiguity, and removing a pair is just
//! freeing both slots.
//!
//! No parent ids are stored. Every operation that needs a node's parent
//! recomputes it by descending from the root, which is what it would have cost
//! to find the node anyway.

use std::cmp::Ordering;

/// A handle to a live node slot in a [`Tree`] arena.
///
/// An id is only meaningful to the arena that produced it. The `link` carried
/// by each node is a `NodeId` into the *other* tree's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One entry's projection into a single tree: its payload, the id of its
/// partner node in the sibling tree, and the child edges within this tree.
#[derive(Clone)]
struct Node<T> {
    data: T,
    link: NodeId,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Which child edge of a parent we descended through. Remembering the edge
/// instead of the whole path is all deletion needs.
#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

/// An unbalanced Binary Search Tree whose nodes live in an arena.
///
/// The tree itself has no notion of keys versus values; the map instantiates
/// one `Tree<K>` and one `Tree<V>` and keeps them consistent. Uniqueness is a
/// precondition here: callers check membership before inserting, so descent
/// never meets an equal datum.
#[derive(Clone)]
pub(crate) struct Tree<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    root: Option<NodeId>,
}

impl<T> Tree<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    /// The id the next `insert` on this tree will occupy. This lets the map
    /// cross link two nodes before either of them has been created.
    pub(crate) fn vacant_id(&self) -> NodeId {
        NodeId(self.free.last().copied().unwrap_or(self.slots.len()))
    }

    /// Drops every node and forgets the freed slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0].as_ref().expect("id refers to a live node")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0].as_mut().expect("id refers to a live node")
    }

    /// The payload stored at `id`.
    pub(crate) fn data(&self, id: NodeId) -> &T {
        &self.node(id).data
    }

    /// The id of `id`'s partner in the sibling tree.
    pub(crate) fn link(&self, id: NodeId) -> NodeId {
        self.node(id).link
    }

    /// Re-points `id`'s cross link at `link`. Used by the sibling tree when a
    /// deletion there moves a payload into a different slot.
    pub(crate) fn set_link(&mut self, id: NodeId, link: NodeId) {
        self.node_mut(id).link = link;
    }

    fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let n = self.node_mut(parent);
        match side {
            Side::Left => n.left = child,
            Side::Right => n.right = child,
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Finds the node holding a datum equal to `data`, if any.
    pub(crate) fn find(&self, data: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut at = self.root;
        while let Some(id) = at {
            let n = self.node(id);
            at = match data.cmp(&n.data) {
                Ordering::Less => n.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => n.right,
            };
        }
        None
    }

    /// Inserts `data`, cross linked to `link`, and returns the new node's id
    /// (always the id [`vacant_id`][Self::vacant_id] reported beforehand).
    ///
    /// The caller must already have checked that no equal datum is stored, so
    /// the descent never compares equal.
    pub(crate) fn insert(&mut self, data: T, link: NodeId) -> NodeId
    where
        T: Ord,
    {
        let id = self.alloc(Node {
            data,
            link,
            left: None,
            right: None,
        });
        let mut at = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(id);
                return id;
            }
        };
        loop {
            let (side, next) = {
                let n = self.node(at);
                match self.node(id).data.cmp(&n.data) {
                    Ordering::Less => (Side::Left, n.left),
                    Ordering::Greater => (Side::Right, n.right),
                    Ordering::Equal => unreachable!("membership is checked before insertion"),
                }
            };
            match next {
                Some(child) => at = child,
                None => {
                    self.set_child(at, side, Some(id));
                    return id;
                }
            }
        }
    }

    /// Removes the node holding a datum equal to `data`. Returns the removed
    /// payload and its cross link, or `None` (and no mutation) if absent.
    ///
    /// `sibling` is the other tree, needed to patch a cross link when the
    /// deletion moves a payload between slots.
    pub(crate) fn remove<U>(&mut self, data: &T, sibling: &mut Tree<U>) -> Option<(T, NodeId)>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut at = self.root?;
        loop {
            let n = self.node(at);
            match data.cmp(&n.data) {
                Ordering::Less => {
                    parent = Some((at, Side::Left));
                    at = n.left?;
                }
                Ordering::Equal => break,
                Ordering::Greater => {
                    parent = Some((at, Side::Right));
                    at = n.right?;
                }
            }
        }
        Some(self.unlink(at, parent, sibling))
    }

    /// Removes the node `target`, located by descending with its own datum.
    /// Used for the second half of a pair removal, where the cross link
    /// already names the exact node to delete.
    pub(crate) fn remove_id<U>(&mut self, target: NodeId, sibling: &mut Tree<U>) -> (T, NodeId)
    where
        T: Ord,
    {
        let mut parent = None;
        let mut at = self.root.expect("cross link points into a non-empty tree");
        while at != target {
            let (side, next) = {
                let n = self.node(at);
                match self.node(target).data.cmp(&n.data) {
                    Ordering::Less => (Side::Left, n.left),
                    Ordering::Greater => (Side::Right, n.right),
                    Ordering::Equal => unreachable!("two live nodes cannot compare equal"),
                }
            };
            parent = Some((at, side));
            at = next.expect("a live node is reachable by its own ordering");
        }
        self.unlink(target, parent, sibling)
    }

    /// The classic three-case deletion of `at`, whose parent edge is `parent`
    /// (`None` when `at` is the root).
    fn unlink<U>(
        &mut self,
        at: NodeId,
        parent: Option<(NodeId, Side)>,
        sibling: &mut Tree<U>,
    ) -> (T, NodeId) {
        let (left, right) = {
            let n = self.node(at);
            (n.left, n.right)
        };
        match (left, right) {
            (Some(below), Some(_)) => {
                // Two children: find the in-order predecessor, the maximum of
                // the left subtree. It has no right child, so splicing it out
                // is the single-child case.
                let mut pred_parent = (at, Side::Left);
                let mut pred = below;
                while let Some(next) = self.node(pred).right {
                    pred_parent = (pred, Side::Right);
                    pred = next;
                }
                let pred_left = self.node(pred).left;
                self.set_child(pred_parent.0, pred_parent.1, pred_left);
                let pred_node = self.slots[pred.0].take().expect("id refers to a live node");
                self.free.push(pred.0);

                // The predecessor's payload moves into the deleted node's
                // slot, so its partner in the sibling tree must be re-pointed
                // at the slot that survives.
                let n = self.node_mut(at);
                let data = std::mem::replace(&mut n.data, pred_node.data);
                let link = std::mem::replace(&mut n.link, pred_node.link);
                sibling.set_link(pred_node.link, at);
                (data, link)
            }
            (left, right) => {
                // Zero or one child: replace the node by its (possibly
                // absent) child.
                let child = left.or(right);
                match parent {
                    Some((p, side)) => self.set_child(p, side, child),
                    None => self.root = child,
                }
                let node = self.slots[at.0].take().expect("id refers to a live node");
                self.free.push(at.0);
                (node.data, node.link)
            }
        }
    }

    /// In-order walk of this tree's node ids.
    pub(crate) fn in_order(&self) -> InOrderIds<'_, T> {
        let mut ids = InOrderIds {
            tree: self,
            stack: Vec::new(),
        };
        ids.push_left_spine(self.root);
        ids
    }
}

/// Iterator over one tree's node ids in ascending payload order.
///
/// Uses an explicit stack rather than recursion: with no rebalancing, a
/// sorted insertion order degenerates the tree into a chain as tall as the
/// map, which recursive traversal would turn into call-stack depth.
pub(crate) struct InOrderIds<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrderIds<'a, T> {
    fn push_left_spine(&mut self, mut at: Option<NodeId>) {
        while let Some(id) = at {
            self.stack.push(id);
            at = self.tree.node(id).left;
        }
    }
}

impl<'a, T> Iterator for InOrderIds<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.node(id).right);
        Some(id)
    }
}
