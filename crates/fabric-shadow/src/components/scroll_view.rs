//! The scrollable container kind.

use super::view::ViewProps;
use crate::capability::{LayoutMetrics, Layoutable, Scrollable, YogaLayoutable};
use crate::node::{ComponentName, ShadowNodeKind, Tag};
use crate::traits::NodeTraits;
use fabric_core::math::Vec2;

/// Which axes are scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAxis {
    /// Only vertical scrolling.
    #[default]
    Vertical,
    /// Only horizontal scrolling.
    Horizontal,
    /// Both axes scrollable.
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewProps {
    pub view: ViewProps,
    /// Current scroll position in content pixels.
    pub content_offset: Vec2,
    pub scroll_axis: ScrollAxis,
    pub scroll_enabled: bool,
}

impl Default for ScrollViewProps {
    fn default() -> Self {
        Self {
            view: ViewProps::default(),
            content_offset: Vec2::ZERO,
            scroll_axis: ScrollAxis::default(),
            scroll_enabled: true,
        }
    }
}

impl ScrollViewProps {
    pub fn content_offset(mut self, offset: Vec2) -> Self {
        self.content_offset = offset;
        self
    }

    pub fn scroll_axis(mut self, axis: ScrollAxis) -> Self {
        self.scroll_axis = axis;
        self
    }
}

/// Shadow node for `ScrollView`.
#[derive(Debug)]
pub struct ScrollViewShadowNode {
    tag: Tag,
    props: ScrollViewProps,
    layout_metrics: LayoutMetrics,
}

impl ScrollViewShadowNode {
    pub fn props(&self) -> &ScrollViewProps {
        &self.props
    }

    /// Offset clamped to the scrollable axes.
    fn effective_offset(&self) -> Vec2 {
        if !self.props.scroll_enabled {
            return Vec2::ZERO;
        }
        let offset = self.props.content_offset;
        match self.props.scroll_axis {
            ScrollAxis::Vertical => Vec2::new(0.0, offset.y),
            ScrollAxis::Horizontal => Vec2::new(offset.x, 0.0),
            ScrollAxis::Both => offset,
        }
    }
}

impl ShadowNodeKind for ScrollViewShadowNode {
    const COMPONENT_NAME: ComponentName = "ScrollView";
    const TRAITS: NodeTraits = NodeTraits::VIEW_KIND
        .union(NodeTraits::FORMS_VIEW)
        .union(NodeTraits::FORMS_STACKING_CONTEXT)
        .union(NodeTraits::YOGA_LAYOUTABLE)
        .union(NodeTraits::SCROLLABLE_KIND);
    type Props = ScrollViewProps;

    fn create(tag: Tag, props: ScrollViewProps) -> Self {
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

    fn as_scrollable(&self) -> Option<&(dyn Scrollable + 'static)> {
        Some(self)
    }
}

impl Layoutable for ScrollViewShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout_metrics
    }

    /// Children are shifted opposite to the scroll position.
    fn content_origin_offset(&self) -> Vec2 {
        -self.effective_offset()
    }
}

impl YogaLayoutable for ScrollViewShadowNode {
    fn yoga_style(&self) -> &taffy::Style {
        &self.props.view.style
    }
}

impl Scrollable for ScrollViewShadowNode {
    fn content_offset(&self) -> Vec2 {
        self.effective_offset()
    }
}
