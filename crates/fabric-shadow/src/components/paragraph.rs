//! The text block kind.
//!
//! A paragraph is a single Yoga leaf: its `Text` and `RawText` children
//! describe attributed content and take no part in flexbox layout.

use super::view::ViewProps;
use crate::capability::{LayoutMetrics, Layoutable, YogaLayoutable};
use crate::node::{ComponentName, ShadowNodeKind, Tag};
use crate::traits::NodeTraits;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphProps {
    pub view: ViewProps,
    /// Maximum number of lines, unlimited when `None`.
    pub max_lines: Option<u32>,
    pub selectable: bool,
}

impl ParagraphProps {
    pub fn max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = Some(max_lines);
        self
    }
}

/// Shadow node for `Paragraph`.
#[derive(Debug)]
pub struct ParagraphShadowNode {
    tag: Tag,
    props: ParagraphProps,
    layout_metrics: LayoutMetrics,
}

impl ParagraphShadowNode {
    pub fn props(&self) -> &ParagraphProps {
        &self.props
    }
}

impl ShadowNodeKind for ParagraphShadowNode {
    const COMPONENT_NAME: ComponentName = "Paragraph";
    const TRAITS: NodeTraits = NodeTraits::VIEW_KIND
        .union(NodeTraits::TEXT_KIND)
        .union(NodeTraits::LEAF_YOGA_NODE)
        .union(NodeTraits::YOGA_LAYOUTABLE);
    type Props = ParagraphProps;

    fn create(tag: Tag, props: ParagraphProps) -> Self {
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

impl Layoutable for ParagraphShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout_metrics
    }
}

impl YogaLayoutable for ParagraphShadowNode {
    fn yoga_style(&self) -> &taffy::Style {
        &self.props.view.style
    }
}
