//! Materializes element descriptions into shadow trees.

use crate::descriptor::ComponentDescriptorRegistry;
use crate::element::AnyElement;
use crate::error::BuildError;
use crate::node::Tag;
use crate::tree::{NodeId, ShadowTree};
use fabric_core::profiling::{profile_function, profile_scope};
use static_assertions::assert_impl_all;
use std::sync::Arc;

/// Builder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentBuilderConfig {
    /// Deepest element nesting accepted; the root is depth 0.
    pub max_depth: usize,
    /// Tag given to the root node. Later nodes count up from it.
    pub first_tag: Tag,
}

impl Default for ComponentBuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 256,
            first_tag: 1,
        }
    }
}

/// Builds [`ShadowTree`]s from elements.
///
/// The builder keeps no state between builds: every call allocates fresh
/// tags and returns an independent tree.
///
/// # Example
///
/// ```rust
/// use fabric_shadow::{
///     ComponentBuilder, ComponentDescriptorRegistry, Element, Layoutable,
///     ScrollViewShadowNode, ViewShadowNode,
/// };
///
/// let builder = ComponentBuilder::new(ComponentDescriptorRegistry::standard());
/// let tree = builder
///     .build(
///         Element::<ScrollViewShadowNode>::new()
///             .child(Element::<ViewShadowNode>::new().reference("content")),
///     )
///     .unwrap();
///
/// let content = tree.reference("content").unwrap();
/// assert!(tree.cast::<dyn Layoutable>(content).is_some());
/// ```
pub struct ComponentBuilder {
    registry: Arc<ComponentDescriptorRegistry>,
    config: ComponentBuilderConfig,
}

assert_impl_all!(ComponentBuilder: Send, Sync);

impl ComponentBuilder {
    pub fn new(registry: impl Into<Arc<ComponentDescriptorRegistry>>) -> Self {
        Self::with_config(registry, ComponentBuilderConfig::default())
    }

    pub fn with_config(
        registry: impl Into<Arc<ComponentDescriptorRegistry>>,
        config: ComponentBuilderConfig,
    ) -> Self {
        Self {
            registry: registry.into(),
            config,
        }
    }

    pub fn registry(&self) -> &ComponentDescriptorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ComponentBuilderConfig {
        &self.config
    }

    /// Build a tree from `element`.
    ///
    /// Children are created in declared order, tags are assigned in
    /// pre-order starting at [`ComponentBuilderConfig::first_tag`]. On error
    /// nothing is returned; the partially built tree is dropped.
    pub fn build(&self, element: impl Into<AnyElement>) -> Result<ShadowTree, BuildError> {
        profile_function!();

        let element = element.into();
        let mut build = Build {
            tree: ShadowTree::new(),
            next_tag: Some(self.config.first_tag),
        };

        if let Err(err) = self.materialize(&mut build, element, None, 0) {
            tracing::warn!(error = %err, "shadow tree build failed");
            return Err(err);
        }

        tracing::debug!(nodes = build.tree.len(), "built shadow tree");
        Ok(build.tree)
    }

    fn materialize(
        &self,
        build: &mut Build,
        element: AnyElement,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId, BuildError> {
        profile_scope!("materialize", element.component_name);

        if depth > self.config.max_depth {
            return Err(BuildError::MaxDepthExceeded {
                max_depth: self.config.max_depth,
            });
        }

        let AnyElement {
            component_name,
            props,
            reference,
            children,
        } = element;

        let descriptor = self.registry.at(component_name)?;
        let tag = build.next_tag.ok_or(BuildError::TagOverflow {
            first_tag: self.config.first_tag,
        })?;
        build.next_tag = tag.checked_add(1);

        let node = descriptor.create_shadow_node(tag, props)?;
        let node_id = build.tree.insert(node, parent);

        tracing::trace!(component = component_name, tag, depth, "created shadow node");

        if let Some(key) = reference {
            if !build.tree.insert_reference(key.clone(), node_id) {
                return Err(BuildError::DuplicateReference { key });
            }
        }

        for child in children {
            self.materialize(build, child, Some(node_id), depth + 1)?;
        }

        Ok(node_id)
    }
}

/// State of a single build.
struct Build {
    tree: ShadowTree,
    /// `None` once `Tag::MAX` has been handed out.
    next_tag: Option<Tag>,
}
