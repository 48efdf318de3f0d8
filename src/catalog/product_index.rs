//! Product index: an unbalanced binary search tree keyed by product id
//!
//! Every product lives by value in exactly one node. Insert, remove and
//! search all descend recursively from the root; nothing rebalances the tree,
//! so its depth depends only on insertion order (loading a file saved in
//! ascending id order produces a chain of right children).
//!
//! Traversal, counting, depth and drop walk the tree with an explicit stack,
//! so only the keyed operations use call-stack depth proportional to the
//! tree depth.
//!
//! # Invariants
//!
//! - All ids in a node's left subtree are smaller than the node's id, all ids
//!   in its right subtree are larger.
//! - No id appears twice. A rejected insert or remove leaves the tree
//!   untouched.

use crate::inventory::errors::InventoryError;
use crate::records::{Product, ProductId, RecordKind};
use log::debug;
use std::cmp::Ordering;

type Link = Option<Box<ProductNode>>;

struct ProductNode {
    product: Product,
    left: Link,
    right: Link,
}

impl ProductNode {
    fn new(product: Product) -> Self {
        ProductNode {
            product,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of products
#[derive(Default)]
pub struct ProductIndex {
    root: Link,
}

impl ProductIndex {
    pub fn new() -> Self {
        ProductIndex { root: None }
    }

    /// Insert a product; fails with `DuplicateKey` if the id is already present
    pub fn insert(&mut self, product: Product) -> Result<(), InventoryError> {
        let id = product.id;
        insert_at(&mut self.root, product)?;
        debug!("product {} inserted", id);
        Ok(())
    }

    /// Remove the product with `id` and return it; fails with `NotFound` if absent
    pub fn remove(&mut self, id: ProductId) -> Result<Product, InventoryError> {
        let removed = remove_at(&mut self.root, id)?;
        debug!("product {} removed", id);
        Ok(removed)
    }

    /// Find the product with `id`
    pub fn search(&self, id: ProductId) -> Option<&Product> {
        search_at(&self.root, id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.search(id).is_some()
    }

    /// All products in ascending id order (in-order traversal)
    pub fn inorder(&self) -> Vec<&Product> {
        let mut out = Vec::new();
        collect_inorder(&self.root, &mut out);
        out
    }

    /// Snapshot of every product for sorting and searching
    pub fn collect(&self) -> Vec<&Product> {
        self.inorder()
    }

    /// Number of products (recomputed on every call)
    pub fn count(&self) -> usize {
        count_at(&self.root)
    }

    /// Height of the tree; 0 when empty
    pub fn depth(&self) -> usize {
        depth_at(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn insert_at(link: &mut Link, product: Product) -> Result<(), InventoryError> {
    match link {
        None => {
            *link = Some(Box::new(ProductNode::new(product)));
            Ok(())
        }
        Some(node) => match product.id.cmp(&node.product.id) {
            Ordering::Less => insert_at(&mut node.left, product),
            Ordering::Greater => insert_at(&mut node.right, product),
            Ordering::Equal => Err(InventoryError::DuplicateKey {
                kind: RecordKind::Product,
                id: product.id,
            }),
        },
    }
}

fn remove_at(link: &mut Link, id: ProductId) -> Result<Product, InventoryError> {
    let not_found = InventoryError::NotFound {
        kind: RecordKind::Product,
        id,
    };
    let node = match link.as_mut() {
        Some(node) => node,
        None => return Err(not_found),
    };

    match id.cmp(&node.product.id) {
        Ordering::Less => remove_at(&mut node.left, id),
        Ordering::Greater => remove_at(&mut node.right, id),
        Ordering::Equal => {
            let successor_id = match (&node.left, &node.right) {
                (Some(_), Some(right)) => Some(leftmost(right).product.id),
                _ => None,
            };
            if let Some(successor_id) = successor_id {
                // Two children: pull the in-order successor up into this node
                let successor = remove_at(&mut node.right, successor_id)?;
                return Ok(std::mem::replace(&mut node.product, successor));
            }

            let child = node.left.take().or_else(|| node.right.take());
            std::mem::replace(link, child)
                .map(|removed| removed.product)
                .ok_or(not_found)
        }
    }
}

fn leftmost(mut node: &ProductNode) -> &ProductNode {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

fn search_at(link: &Link, id: ProductId) -> Option<&Product> {
    let node = link.as_deref()?;
    match id.cmp(&node.product.id) {
        Ordering::Less => search_at(&node.left, id),
        Ordering::Greater => search_at(&node.right, id),
        Ordering::Equal => Some(&node.product),
    }
}

fn collect_inorder<'a>(link: &'a Link, out: &mut Vec<&'a Product>) {
    let mut pending: Vec<&ProductNode> = Vec::new();
    let mut current = link.as_deref();
    loop {
        while let Some(node) = current {
            pending.push(node);
            current = node.left.as_deref();
        }
        match pending.pop() {
            Some(node) => {
                out.push(&node.product);
                current = node.right.as_deref();
            }
            None => break,
        }
    }
}

fn count_at(link: &Link) -> usize {
    let mut count = 0;
    let mut pending: Vec<&ProductNode> = link.as_deref().into_iter().collect();
    while let Some(node) = pending.pop() {
        count += 1;
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }
    count
}

fn depth_at(link: &Link) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&ProductNode, usize)> =
        link.as_deref().map(|node| (node, 1)).into_iter().collect();
    while let Some((node, level)) = pending.pop() {
        deepest = deepest.max(level);
        pending.extend(node.left.as_deref().map(|child| (child, level + 1)));
        pending.extend(node.right.as_deref().map(|child| (child, level + 1)));
    }
    deepest
}

impl std::fmt::Debug for ProductIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl Drop for ProductIndex {
    // Tear down with an explicit stack so a degenerate tree cannot overflow
    // the call stack while dropping.
    fn drop(&mut self) {
        let mut pending: Vec<Box<ProductNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
