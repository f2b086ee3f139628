// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration surface and sequential driver.
//!
//! [`Enumerable`] is the contract between the engine and the harness that
//! walks it: a root list indexed by `0..max_roots()`, a child generator,
//! and a projection from tree nodes to user-facing items. The engine emits
//! each solution exactly once by construction, so the driver needs no
//! dedup: it just walks the implicit tree.
//!
//! [`enumerate_all`] is a minimal depth-first driver over that surface.
//! Parallel drivers can partition the root range across independent
//! engines; nothing here is shared.

/// An implicitly-represented enumeration tree.
///
/// `Node` is the internal tree-node representation, `Item` the user-facing
/// value. Callbacks return false to stop enumeration; implementations must
/// honor the stop promptly at every loop level.
pub trait Enumerable {
    type Node;
    type Item;

    /// Size of the root index range.
    fn max_roots(&self) -> usize;

    /// Invoke `cb` with the `i`-th root, if index `i` is a valid root.
    fn get_root(&mut self, i: usize, cb: &mut dyn FnMut(&Self::Node) -> bool);

    /// Invoke `cb` for each child of `node`, stopping when it returns false.
    fn list_children(&mut self, node: &Self::Node, cb: &mut dyn FnMut(&Self::Node) -> bool);

    /// Project a tree node to the user-facing item.
    fn node_to_item(&self, node: &Self::Node) -> Self::Item;
}

/// Walk every root and its descendants depth-first, forwarding each item to
/// `emit`. Returns false iff `emit` declined and the walk stopped early.
pub fn enumerate_all<E: Enumerable>(
    system: &mut E,
    emit: &mut dyn FnMut(E::Item) -> bool,
) -> bool
where
    E::Node: Clone,
{
    let mut stack: Vec<E::Node> = Vec::new();
    for i in 0..system.max_roots() {
        system.get_root(i, &mut |root| {
            stack.push(root.clone());
            true
        });
        while let Some(node) = stack.pop() {
            if !emit(system.node_to_item(&node)) {
                return false;
            }
            system.list_children(&node, &mut |child| {
                stack.push(child.clone());
                true
            });
        }
    }
    true
}
