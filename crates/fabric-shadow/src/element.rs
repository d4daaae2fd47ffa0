//! Declarative element descriptions consumed by the component builder.
//!
//! An [`Element`] names the kind to create through its type parameter,
//! carries the kind's props, an optional capture key and child elements.
//! Elements of different kinds become siblings by converting into
//! [`AnyElement`], which `child` does implicitly.
//!
//! # Example
//!
//! ```rust
//! use fabric_shadow::{
//!     Element, ParagraphShadowNode, RawTextProps, RawTextShadowNode, ViewShadowNode,
//! };
//!
//! let element = Element::<ViewShadowNode>::new()
//!     .reference("root")
//!     .child(
//!         Element::<ParagraphShadowNode>::new()
//!             .child(Element::<RawTextShadowNode>::with_props(RawTextProps::new("Hello"))),
//!     )
//!     .child(Element::<ViewShadowNode>::new().reference("footer"));
//!
//! assert_eq!(element.child_count(), 2);
//! ```

use crate::descriptor::RawProps;
use crate::node::{ComponentName, ShadowNodeKind};
use std::marker::PhantomData;

/// Typed description of a node of kind `T`.
pub struct Element<T: ShadowNodeKind> {
    props: T::Props,
    reference: Option<String>,
    children: Vec<AnyElement>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: ShadowNodeKind> Element<T>
where
    T::Props: Default,
{
    /// Element with default props.
    pub fn new() -> Self {
        Self::with_props(T::Props::default())
    }
}

impl<T: ShadowNodeKind> Default for Element<T>
where
    T::Props: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ShadowNodeKind> Element<T> {
    pub fn with_props(props: T::Props) -> Self {
        Self {
            props,
            reference: None,
            children: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Replace the props.
    pub fn props(mut self, props: T::Props) -> Self {
        self.props = props;
        self
    }

    /// Modify the props in place.
    pub fn update_props(mut self, update: impl FnOnce(&mut T::Props)) -> Self {
        update(&mut self.props);
        self
    }

    /// Capture the created node under `key`; look it up after the build with
    /// [`ShadowTree::reference`](crate::tree::ShadowTree::reference).
    pub fn reference(mut self, key: impl Into<String>) -> Self {
        self.reference = Some(key.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: impl Into<AnyElement>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Replace the children.
    pub fn children(mut self, children: impl IntoIterator<Item = AnyElement>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Type-erased element.
pub struct AnyElement {
    pub(crate) component_name: ComponentName,
    pub(crate) props: RawProps,
    pub(crate) reference: Option<String>,
    pub(crate) children: Vec<AnyElement>,
}

impl AnyElement {
    /// Element for a component by name, with already-erased props.
    ///
    /// The builder will report an error if no descriptor is registered under
    /// `component_name` or if the props do not match its kind.
    pub fn from_parts(component_name: ComponentName, props: RawProps) -> Self {
        Self {
            component_name,
            props,
            reference: None,
            children: Vec::new(),
        }
    }

    pub fn component_name(&self) -> ComponentName {
        self.component_name
    }

    pub fn reference_key(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn children(&self) -> &[AnyElement] {
        &self.children
    }

    /// Capture the created node under `key`.
    pub fn reference(mut self, key: impl Into<String>) -> Self {
        self.reference = Some(key.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: impl Into<AnyElement>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Number of elements in this subtree, including itself.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(AnyElement::subtree_size)
            .sum::<usize>()
    }
}

impl<T: ShadowNodeKind> From<Element<T>> for AnyElement {
    fn from(element: Element<T>) -> Self {
        Self {
            component_name: T::COMPONENT_NAME,
            props: Box::new(element.props),
            reference: element.reference,
            children: element.children,
        }
    }
}

impl std::fmt::Debug for AnyElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyElement")
            .field("component_name", &self.component_name)
            .field("reference", &self.reference)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        RawTextProps, RawTextShadowNode, TextShadowNode, ViewProps, ViewShadowNode,
    };

    #[test]
    fn test_element_erasure_keeps_shape() {
        let element: AnyElement = Element::<ViewShadowNode>::new()
            .reference("root")
            .child(Element::<TextShadowNode>::new())
            .child(Element::<RawTextShadowNode>::with_props(RawTextProps::new("x")))
            .into();

        assert_eq!(element.component_name(), "View");
        assert_eq!(element.reference_key(), Some("root"));
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.children()[0].component_name(), "Text");
        assert_eq!(element.children()[1].component_name(), "RawText");
        assert_eq!(element.subtree_size(), 3);
    }

    #[test]
    fn test_update_props() {
        let element = Element::<ViewShadowNode>::new().update_props(|props| props.opacity = 0.25);
        assert_eq!(element.props.opacity, 0.25);

        let element = element.props(ViewProps::default());
        assert_eq!(element.props.opacity, 1.0);
    }

    #[test]
    fn test_children_replaces() {
        let element = Element::<ViewShadowNode>::new()
            .child(Element::<ViewShadowNode>::new())
            .children(vec![
                Element::<TextShadowNode>::new().into(),
                Element::<TextShadowNode>::new().into(),
                Element::<TextShadowNode>::new().into(),
            ]);

        assert_eq!(element.child_count(), 3);
    }

    #[test]
    fn test_erased_props_downcast() {
        let element: AnyElement =
            Element::<RawTextShadowNode>::with_props(RawTextProps::new("abc")).into();
        let props = element.props.downcast::<RawTextProps>().unwrap();
        assert_eq!(props.text, "abc");
    }
}
