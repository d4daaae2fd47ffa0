//! The base shadow node interface and the per-kind declaration trait.

use crate::capability::{Layoutable, Scrollable, YogaLayoutable};
use crate::traits::NodeTraits;
use std::any::Any;
use std::fmt;

/// React tag identifying a node within one tree.
pub type Tag = i32;

/// Name a component kind is registered under, e.g. `"ScrollView"`.
pub type ComponentName = &'static str;

/// Object-safe interface shared by every shadow node.
///
/// Kinds never implement this directly: it is derived from
/// [`ShadowNodeKind`] so that [`traits`](ShadowNode::traits) and
/// [`component_name`](ShadowNode::component_name) always report the kind's
/// associated constants.
///
/// The capability query methods return views that borrow from `self`; a view
/// aliases the node, it does not copy it. Use
/// [`trait_cast`](crate::trait_cast::trait_cast) rather than calling them
/// directly, it checks the trait word first.
pub trait ShadowNode: Any + Send + Sync {
    fn tag(&self) -> Tag;

    fn component_name(&self) -> ComponentName;

    /// The kind's trait word.
    fn traits(&self) -> NodeTraits;

    fn as_any(&self) -> &dyn Any;

    fn as_layoutable(&self) -> Option<&(dyn Layoutable + 'static)>;

    fn as_yoga_layoutable(&self) -> Option<&(dyn YogaLayoutable + 'static)>;

    fn as_scrollable(&self) -> Option<&(dyn Scrollable + 'static)>;
}

/// Declaration of a concrete node kind.
///
/// # Example
///
/// ```rust
/// use fabric_shadow::{NodeTraits, ShadowNodeKind, Tag};
///
/// struct SpacerShadowNode {
///     tag: Tag,
/// }
///
/// impl ShadowNodeKind for SpacerShadowNode {
///     const COMPONENT_NAME: &'static str = "Spacer";
///     const TRAITS: NodeTraits = NodeTraits::NONE;
///     type Props = ();
///
///     fn create(tag: Tag, _props: ()) -> Self {
///         Self { tag }
///     }
///
///     fn tag(&self) -> Tag {
///         self.tag
///     }
/// }
/// ```
pub trait ShadowNodeKind: Any + Send + Sync + Sized {
    const COMPONENT_NAME: ComponentName;

    /// Trait word of the kind. Must set the identifier bit of every
    /// capability the kind exposes through the `as_*` methods below.
    const TRAITS: NodeTraits;

    type Props: Send + 'static;

    fn create(tag: Tag, props: Self::Props) -> Self;

    fn tag(&self) -> Tag;

    fn as_layoutable(&self) -> Option<&(dyn Layoutable + 'static)> {
        None
    }

    fn as_yoga_layoutable(&self) -> Option<&(dyn YogaLayoutable + 'static)> {
        None
    }

    fn as_scrollable(&self) -> Option<&(dyn Scrollable + 'static)> {
        None
    }
}

impl<T: ShadowNodeKind> ShadowNode for T {
    #[inline]
    fn tag(&self) -> Tag {
        ShadowNodeKind::tag(self)
    }

    #[inline]
    fn component_name(&self) -> ComponentName {
        T::COMPONENT_NAME
    }

    #[inline]
    fn traits(&self) -> NodeTraits {
        T::TRAITS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_layoutable(&self) -> Option<&(dyn Layoutable + 'static)> {
        ShadowNodeKind::as_layoutable(self)
    }

    #[inline]
    fn as_yoga_layoutable(&self) -> Option<&(dyn YogaLayoutable + 'static)> {
        ShadowNodeKind::as_yoga_layoutable(self)
    }

    #[inline]
    fn as_scrollable(&self) -> Option<&(dyn Scrollable + 'static)> {
        ShadowNodeKind::as_scrollable(self)
    }
}

impl dyn ShadowNode + '_ {
    /// Downcast to a concrete kind.
    pub fn downcast_ref<T: ShadowNodeKind>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Whether the node is of kind `T`.
    pub fn is<T: ShadowNodeKind>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl fmt::Debug for dyn ShadowNode + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowNode")
            .field("component_name", &self.component_name())
            .field("tag", &self.tag())
            .field("traits", &self.traits())
            .finish()
    }
}

/// Whether two node references point at the same node.
///
/// Compares addresses only, so a capability view upcast to
/// `&dyn ShadowNode` is identical to the node it was cast from.
pub fn same_node(a: &dyn ShadowNode, b: &dyn ShadowNode) -> bool {
    std::ptr::addr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SpacerShadowNode {
        tag: Tag,
        width: f32,
    }

    impl ShadowNodeKind for SpacerShadowNode {
        const COMPONENT_NAME: ComponentName = "Spacer";
        const TRAITS: NodeTraits = NodeTraits::NONE;
        type Props = f32;

        fn create(tag: Tag, width: f32) -> Self {
            Self { tag, width }
        }

        fn tag(&self) -> Tag {
            self.tag
        }
    }

    #[test]
    fn test_derived_base_interface() {
        let spacer = SpacerShadowNode::create(7, 12.0);
        let node: &dyn ShadowNode = &spacer;

        assert_eq!(node.tag(), 7);
        assert_eq!(node.component_name(), "Spacer");
        assert_eq!(node.traits(), NodeTraits::NONE);
        assert!(node.as_layoutable().is_none());
        assert!(node.as_yoga_layoutable().is_none());
        assert!(node.as_scrollable().is_none());
    }

    #[test]
    fn test_downcast() {
        let spacer = SpacerShadowNode::create(1, 4.0);
        let node: &dyn ShadowNode = &spacer;

        assert!(node.is::<SpacerShadowNode>());
        assert_eq!(node.downcast_ref::<SpacerShadowNode>().map(|s| s.width), Some(4.0));
    }

    #[test]
    fn test_same_node() {
        let a = SpacerShadowNode::create(1, 0.0);
        let b = SpacerShadowNode::create(1, 0.0);

        assert!(same_node(&a, &a));
        assert!(!same_node(&a, &b));
    }

    #[test]
    fn test_debug_output() {
        let spacer = SpacerShadowNode::create(3, 0.0);
        let node: &dyn ShadowNode = &spacer;
        let output = format!("{:?}", node);

        assert!(output.contains("Spacer"));
        assert!(output.contains("tag: 3"));
    }
}
