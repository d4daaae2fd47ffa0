//! Fabric Shadow - capability-tagged shadow node trees
//!
//! This crate provides the in-memory object model of a Fabric-style UI tree:
//! - Shadow node kinds that opt into capabilities (`Layoutable`,
//!   `YogaLayoutable`, `Scrollable`) through composable traits
//! - O(1) capability-checked casts driven by a compile-time trait word
//! - A declarative element DSL and a builder that materializes element trees
//!   through registered component descriptors
//!
//! ## Quick Start
//!
//! ```rust
//! use fabric_shadow::{
//!     ComponentBuilder, ComponentDescriptorRegistry, Element, Layoutable,
//!     ParagraphShadowNode, RawTextShadowNode, ScrollViewShadowNode, TextShadowNode,
//!     ViewShadowNode, YogaLayoutable, trait_cast,
//! };
//!
//! let builder = ComponentBuilder::new(ComponentDescriptorRegistry::standard());
//!
//! let tree = builder
//!     .build(
//!         Element::<ScrollViewShadowNode>::new()
//!             .reference("scroll")
//!             .child(
//!                 Element::<ParagraphShadowNode>::new()
//!                     .child(Element::<TextShadowNode>::new().reference("text"))
//!                     .child(Element::<RawTextShadowNode>::new()),
//!             )
//!             .child(Element::<ViewShadowNode>::new()),
//!     )
//!     .unwrap();
//!
//! let scroll = tree.reference_node("scroll");
//! assert!(trait_cast::<dyn YogaLayoutable>(scroll).is_some());
//!
//! let text = tree.reference_node("text");
//! assert!(trait_cast::<dyn Layoutable>(text).is_none());
//! ```

pub mod builder;
pub mod capability;
pub mod components;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod node;
pub mod trait_cast;
pub mod traits;
pub mod tree;

pub use builder::{ComponentBuilder, ComponentBuilderConfig};
pub use capability::{
    Capability, LayoutDirection, LayoutMetrics, Layoutable, Scrollable, YogaLayoutable,
};
pub use components::{
    ParagraphProps, ParagraphShadowNode, RawTextProps, RawTextShadowNode, ScrollAxis,
    ScrollViewProps, ScrollViewShadowNode, SharedColor, TextProps, TextShadowNode, ViewProps,
    ViewShadowNode,
};
pub use descriptor::{
    ComponentDescriptor, ComponentDescriptorRegistry, ConcreteComponentDescriptor, RawProps,
};
pub use element::{AnyElement, Element};
pub use error::BuildError;
pub use node::{ComponentName, ShadowNode, ShadowNodeKind, Tag, same_node};
pub use trait_cast::{implements, node_implements, trait_cast, trait_cast_ref, verify_capabilities};
pub use traits::NodeTraits;
pub use tree::{NodeId, ShadowTree, Traverse};

// Re-export common types from dependencies
pub use fabric_core::geometry::{EdgeInsets, Rect, Size};
pub use fabric_core::math::Vec2;
