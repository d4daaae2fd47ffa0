//! Component descriptors and the registry the builder resolves kinds through.

use crate::components::{
    ParagraphShadowNode, RawTextShadowNode, ScrollViewShadowNode, TextShadowNode, ViewShadowNode,
};
use crate::error::BuildError;
use crate::node::{ComponentName, ShadowNode, ShadowNodeKind, Tag};
use crate::trait_cast::verify_capabilities;
use crate::traits::NodeTraits;
use fabric_core::alloc::HashMap;
use std::any::{Any, TypeId};
use std::marker::PhantomData;

/// Type-erased props carried by an element.
pub type RawProps = Box<dyn Any + Send>;

/// Factory and metadata for one node kind.
pub trait ComponentDescriptor: Send + Sync {
    fn component_name(&self) -> ComponentName;

    /// Unique handle of the kind.
    fn component_handle(&self) -> TypeId;

    /// The kind's trait word.
    fn traits(&self) -> NodeTraits;

    /// Create a node from type-erased props.
    ///
    /// Fails if the props are of the wrong type or if the created node's
    /// trait word disagrees with the capability views it exposes.
    fn create_shadow_node(&self, tag: Tag, props: RawProps)
    -> Result<Box<dyn ShadowNode>, BuildError>;
}

/// Descriptor for any [`ShadowNodeKind`].
pub struct ConcreteComponentDescriptor<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T: ShadowNodeKind> ConcreteComponentDescriptor<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ShadowNodeKind> Default for ConcreteComponentDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ShadowNodeKind> ComponentDescriptor for ConcreteComponentDescriptor<T> {
    fn component_name(&self) -> ComponentName {
        T::COMPONENT_NAME
    }

    fn component_handle(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn traits(&self) -> NodeTraits {
        T::TRAITS
    }

    fn create_shadow_node(
        &self,
        tag: Tag,
        props: RawProps,
    ) -> Result<Box<dyn ShadowNode>, BuildError> {
        let props = props
            .downcast::<T::Props>()
            .map_err(|_| BuildError::PropsMismatch {
                component_name: T::COMPONENT_NAME,
                expected: std::any::type_name::<T::Props>(),
            })?;

        let node: Box<dyn ShadowNode> = Box::new(T::create(tag, *props));
        verify_capabilities(&*node).map_err(|capability| BuildError::CapabilityMismatch {
            component_name: T::COMPONENT_NAME,
            capability,
        })?;

        Ok(node)
    }
}

/// Registry of component descriptors, keyed by component name.
///
/// # Example
///
/// ```rust
/// use fabric_shadow::{ComponentDescriptorRegistry, ViewShadowNode};
///
/// let mut registry = ComponentDescriptorRegistry::new();
/// registry.register::<ViewShadowNode>();
///
/// assert!(registry.contains("View"));
/// assert!(!registry.contains("ScrollView"));
/// ```
#[derive(Default)]
pub struct ComponentDescriptorRegistry {
    descriptors: HashMap<ComponentName, Box<dyn ComponentDescriptor>>,
}

impl ComponentDescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the View, ScrollView, Paragraph, Text and RawText kinds.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register::<ViewShadowNode>();
        registry.register::<ScrollViewShadowNode>();
        registry.register::<ParagraphShadowNode>();
        registry.register::<TextShadowNode>();
        registry.register::<RawTextShadowNode>();
        registry
    }

    /// Register the descriptor for kind `T`.
    pub fn register<T: ShadowNodeKind>(&mut self) {
        self.add(Box::new(ConcreteComponentDescriptor::<T>::new()));
    }

    /// Add a descriptor. A descriptor already registered under the same
    /// component name is replaced.
    pub fn add(&mut self, descriptor: Box<dyn ComponentDescriptor>) {
        let name = descriptor.component_name();
        if let Some(previous) = self.descriptors.insert(name, descriptor) {
            tracing::warn!(
                component = name,
                traits = ?previous.traits(),
                "replaced existing component descriptor"
            );
        } else {
            tracing::debug!(component = name, "registered component descriptor");
        }
    }

    /// Remove the descriptor registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn ComponentDescriptor>> {
        self.descriptors.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn ComponentDescriptor> {
        self.descriptors.get(name).map(|d| &**d)
    }

    /// Look up a descriptor, reporting an unregistered name as a build error.
    pub fn at(&self, name: ComponentName) -> Result<&dyn ComponentDescriptor, BuildError> {
        self.get(name).ok_or(BuildError::UnregisteredComponent {
            component_name: name,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{RawTextProps, ViewProps};

    #[test]
    fn test_standard_registry() {
        let registry = ComponentDescriptorRegistry::standard();

        assert_eq!(registry.len(), 5);
        for name in ["View", "ScrollView", "Paragraph", "Text", "RawText"] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_descriptor_metadata() {
        let descriptor = ConcreteComponentDescriptor::<ScrollViewShadowNode>::new();

        assert_eq!(descriptor.component_name(), "ScrollView");
        assert_eq!(descriptor.component_handle(), TypeId::of::<ScrollViewShadowNode>());
        assert!(descriptor.traits().check(NodeTraits::SCROLLABLE_KIND));
    }

    #[test]
    fn test_create_shadow_node() {
        let descriptor = ConcreteComponentDescriptor::<RawTextShadowNode>::new();
        let node = descriptor
            .create_shadow_node(4, Box::new(RawTextProps::new("hello")))
            .unwrap();

        assert_eq!(node.tag(), 4);
        assert_eq!(node.component_name(), "RawText");
        assert_eq!(node.downcast_ref::<RawTextShadowNode>().unwrap().text(), "hello");
    }

    #[test]
    fn test_props_mismatch() {
        let descriptor = ConcreteComponentDescriptor::<RawTextShadowNode>::new();
        let result = descriptor.create_shadow_node(1, Box::new(ViewProps::default()));

        assert!(matches!(
            result,
            Err(BuildError::PropsMismatch {
                component_name: "RawText",
                ..
            })
        ));
    }

    #[test]
    fn test_unregistered_lookup() {
        let registry = ComponentDescriptorRegistry::new();

        assert!(registry.is_empty());
        assert!(matches!(
            registry.at("View"),
            Err(BuildError::UnregisteredComponent {
                component_name: "View"
            })
        ));
    }

    #[test]
    fn test_register_replaces_and_remove() {
        let mut registry = ComponentDescriptorRegistry::new();
        registry.register::<ViewShadowNode>();
        registry.register::<ViewShadowNode>();
        assert_eq!(registry.len(), 1);

        assert!(registry.remove("View").is_some());
        assert!(!registry.contains("View"));
    }
}
