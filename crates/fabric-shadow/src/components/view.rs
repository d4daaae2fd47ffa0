//! The generic container kind.

use crate::capability::{LayoutMetrics, Layoutable, YogaLayoutable};
use crate::node::{ComponentName, ShadowNodeKind, Tag};
use crate::traits::NodeTraits;

/// Packed ARGB color.
pub type SharedColor = u32;

/// Props shared by every view-backed kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProps {
    /// Flexbox style.
    pub style: taffy::Style,
    pub background_color: Option<SharedColor>,
    pub opacity: f32,
    /// Identifier for UI tests.
    pub test_id: Option<String>,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            style: taffy::Style::default(),
            background_color: None,
            opacity: 1.0,
            test_id: None,
        }
    }
}

impl ViewProps {
    pub fn style(mut self, style: taffy::Style) -> Self {
        self.style = style;
        self
    }

    pub fn background_color(mut self, color: SharedColor) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Whether the props draw nothing, so a view carrying them only
    /// positions its children.
    pub fn is_layout_only(&self) -> bool {
        self.background_color.is_none() && self.opacity >= 1.0 && self.test_id.is_none()
    }
}

/// Shadow node for `View`.
#[derive(Debug)]
pub struct ViewShadowNode {
    tag: Tag,
    props: ViewProps,
    layout_metrics: LayoutMetrics,
}

impl ViewShadowNode {
    pub fn props(&self) -> &ViewProps {
        &self.props
    }
}

impl ShadowNodeKind for ViewShadowNode {
    const COMPONENT_NAME: ComponentName = "View";
    const TRAITS: NodeTraits = NodeTraits::VIEW_KIND.union(NodeTraits::YOGA_LAYOUTABLE);
    type Props = ViewProps;

    fn create(tag: Tag, props: ViewProps) -> Self {
        Self {
            tag,
            props,
            layout_metrics: LayoutMetrics::default(),
        }
    }

    fn tag(&self) -> Tag {
        self.tag
    }

    fn as_layoutable(&self) -> Option<&(dyn Layoutable + 'static)> {
        Some(self)
    }

    fn as_yoga_layoutable(&self) -> Option<&(dyn YogaLayoutable + 'static)> {
        Some(self)
    }
}

impl Layoutable for ViewShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout_metrics
    }

    fn is_layout_only(&self) -> bool {
        self.props.is_layout_only()
    }
}

impl YogaLayoutable for ViewShadowNode {
    fn yoga_style(&self) -> &taffy::Style {
        &self.props.style
    }
}
