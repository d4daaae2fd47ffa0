//! Capability traits for shadow nodes.
//!
//! A capability is a contract a node kind may or may not implement. Each one
//! is a Rust trait over [`ShadowNode`] plus a [`NodeTraits`] identifier bit,
//! so a kind opts into exactly the subset it supports instead of inheriting
//! every contract from a common base.
//!
//! # Design Pattern: Capability Queries
//!
//! Instead of downcasting with `as_any()`, layout code asks for a capability
//! view through [`trait_cast`](crate::trait_cast::trait_cast):
//!
//! ```rust,ignore
//! fn origin(node: &dyn ShadowNode) -> Vec2 {
//!     match trait_cast::<dyn Layoutable>(Some(node)) {
//!         Some(layoutable) => layoutable.layout_metrics().frame.origin,
//!         None => Vec2::ZERO,
//!     }
//! }
//! ```
//!
//! The returned view borrows from the node, so it cannot outlive it.

use crate::node::ShadowNode;
use crate::traits::NodeTraits;
use fabric_core::geometry::{EdgeInsets, Rect};
use fabric_core::math::Vec2;

/// A capability that can be the target of a trait cast.
///
/// Implemented for the trait object type of each capability
/// (`dyn Layoutable`, `dyn YogaLayoutable`, ...).
pub trait Capability {
    /// Trait bit a kind sets when it implements this capability.
    const IDENTIFIER: NodeTraits;

    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Obtain the view from the node's own storage.
    fn view(node: &dyn ShadowNode) -> Option<&Self>;
}

/// Layout direction of a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Undefined,
    LeftToRight,
    RightToLeft,
}

/// Result of a layout pass for one node.
///
/// Nodes built by the component builder start with zeroed metrics; a layout
/// pass is outside this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub frame: Rect,
    pub content_insets: EdgeInsets,
    pub border_width: EdgeInsets,
    pub layout_direction: LayoutDirection,
    pub point_scale_factor: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            content_insets: EdgeInsets::ZERO,
            border_width: EdgeInsets::ZERO,
            layout_direction: LayoutDirection::Undefined,
            point_scale_factor: 1.0,
        }
    }
}

/// Capability: node that participates in layout.
pub trait Layoutable: ShadowNode {
    /// Metrics computed by the last layout pass.
    fn layout_metrics(&self) -> LayoutMetrics;

    /// Offset applied to the origin of this node's children.
    fn content_origin_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether the node only affects layout and can be flattened away
    /// by a mounting layer.
    fn is_layout_only(&self) -> bool {
        false
    }
}

/// Capability: node laid out by a flexbox engine.
///
/// The style is a [`taffy::Style`], the Rust counterpart of a Yoga style.
pub trait YogaLayoutable: Layoutable {
    fn yoga_style(&self) -> &taffy::Style;

    /// Whether the node is measured as a single leaf. Its children, if any,
    /// are not part of the flexbox tree.
    fn is_leaf_yoga_node(&self) -> bool {
        self.traits().check(NodeTraits::LEAF_YOGA_NODE)
    }
}

/// Capability: node whose content can be scrolled.
pub trait Scrollable: ShadowNode {
    fn content_offset(&self) -> Vec2;
}

impl Capability for dyn Layoutable {
    const IDENTIFIER: NodeTraits = NodeTraits::LAYOUTABLE_KIND;
    const NAME: &'static str = "Layoutable";

    #[inline]
    fn view(node: &dyn ShadowNode) -> Option<&Self> {
        node.as_layoutable()
    }
}

impl Capability for dyn YogaLayoutable {
    const IDENTIFIER: NodeTraits = NodeTraits::YOGA_LAYOUTABLE_KIND;
    const NAME: &'static str = "YogaLayoutable";

    #[inline]
    fn view(node: &dyn ShadowNode) -> Option<&Self> {
        node.as_yoga_layoutable()
    }
}

impl Capability for dyn Scrollable {
    const IDENTIFIER: NodeTraits = NodeTraits::SCROLLABLE_KIND;
    const NAME: &'static str = "Scrollable";

    #[inline]
    fn view(node: &dyn ShadowNode) -> Option<&Self> {
        node.as_scrollable()
    }
}
