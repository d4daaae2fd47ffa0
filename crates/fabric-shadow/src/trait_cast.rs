//! Capability-checked casts over shadow nodes.
//!
//! Two forms are provided:
//!
//! - [`trait_cast`]: the handle form. Absent in, absent out; a node whose
//!   kind lacks the capability also yields `None`.
//! - [`trait_cast_ref`]: the reference form. The caller asserts the
//!   capability is present; a node without it is a programming error and
//!   the call panics.
//!
//! Both resolve the answer from the node's trait word (one bit test) and then
//! return a view into the node's own storage. Nothing is allocated and the
//! view aliases the node.
//!
//! # Example
//!
//! ```rust
//! use fabric_shadow::{Layoutable, ShadowNode, YogaLayoutable, trait_cast};
//!
//! fn flex_children<'a>(nodes: &[&'a dyn ShadowNode]) -> Vec<&'a dyn YogaLayoutable> {
//!     nodes
//!         .iter()
//!         .filter_map(|node| trait_cast::<dyn YogaLayoutable>(Some(*node)))
//!         .collect()
//! }
//!
//! assert!(trait_cast::<dyn Layoutable>(None).is_none());
//! ```

use crate::capability::{Capability, Layoutable, Scrollable, YogaLayoutable};
use crate::node::{ShadowNode, ShadowNodeKind};

/// Whether kind `K` implements capability `C`.
///
/// Evaluable at compile time:
///
/// ```rust
/// use fabric_shadow::{Layoutable, TextShadowNode, ViewShadowNode, implements};
///
/// const VIEW_IS_LAYOUTABLE: bool = implements::<ViewShadowNode, dyn Layoutable>();
/// assert!(VIEW_IS_LAYOUTABLE);
/// assert!(!implements::<TextShadowNode, dyn Layoutable>());
/// ```
#[inline]
pub const fn implements<K, C>() -> bool
where
    K: ShadowNodeKind,
    C: Capability + ?Sized,
{
    K::TRAITS.check(C::IDENTIFIER)
}

/// Whether `node` implements capability `C`.
#[inline]
pub fn node_implements<C>(node: &dyn ShadowNode) -> bool
where
    C: Capability + ?Sized,
{
    node.traits().check(C::IDENTIFIER)
}

/// Cast a possibly absent node to capability `C`.
///
/// Returns `None` for an absent node and for a node whose kind does not
/// implement `C`. Never panics.
#[inline]
pub fn trait_cast<'a, C>(node: Option<&'a dyn ShadowNode>) -> Option<&'a C>
where
    C: Capability + ?Sized,
{
    let node = node?;

    if !node_implements::<C>(node) {
        tracing::trace!(
            component = node.component_name(),
            tag = node.tag(),
            capability = C::NAME,
            "trait cast miss"
        );
        return None;
    }

    let view = C::view(node);
    if view.is_none() {
        tracing::warn!(
            component = node.component_name(),
            capability = C::NAME,
            "trait word declares a capability the node does not expose"
        );
    }
    view
}

/// Check that a node's trait word agrees with the capability views it
/// exposes.
///
/// On a mismatch returns the name of the first capability whose bit and
/// view disagree. Nodes created through a
/// [`ComponentDescriptor`](crate::descriptor::ComponentDescriptor) have
/// already passed this check.
pub fn verify_capabilities(node: &dyn ShadowNode) -> Result<(), &'static str> {
    fn agrees<C: Capability + ?Sized>(node: &dyn ShadowNode) -> Result<(), &'static str> {
        if node_implements::<C>(node) == C::view(node).is_some() {
            Ok(())
        } else {
            Err(C::NAME)
        }
    }

    // YogaLayoutable without Layoutable
    if !node.traits().is_well_formed() {
        return Err(<dyn Layoutable as Capability>::NAME);
    }

    agrees::<dyn Layoutable>(node)?;
    agrees::<dyn YogaLayoutable>(node)?;
    agrees::<dyn Scrollable>(node)
}

/// Cast a node that is required to implement capability `C`.
///
/// # Panics
///
/// Panics if the node's kind does not implement `C`. Continuing would let
/// the caller treat the node as a shape it does not have.
#[inline]
#[track_caller]
pub fn trait_cast_ref<C>(node: &dyn ShadowNode) -> &C
where
    C: Capability + ?Sized,
{
    match trait_cast::<C>(Some(node)) {
        Some(view) => view,
        None => panic!(
            "trait cast failed: {} (tag {}) does not implement {}",
            node.component_name(),
            node.tag(),
            C::NAME
        ),
    }
}
