//! The plain text run kind. Carries text attributes for its `RawText`
//! children; it is neither laid out nor mounted on its own.

use crate::node::{ComponentName, ShadowNodeKind, Tag};
use crate::traits::NodeTraits;
use super::view::SharedColor;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProps {
    pub font_size: Option<f32>,
    pub color: Option<SharedColor>,
}

impl TextProps {
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: SharedColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Shadow node for `Text`.
#[derive(Debug)]
pub struct TextShadowNode {
    tag: Tag,
    props: TextProps,
}

impl TextShadowNode {
    pub fn props(&self) -> &TextProps {
        &self.props
    }
}

impl ShadowNodeKind for TextShadowNode {
    const COMPONENT_NAME: ComponentName = "Text";
    const TRAITS: NodeTraits = NodeTraits::TEXT_KIND;
    type Props = TextProps;

    fn create(tag: Tag, props: TextProps) -> Self {
        Self { tag, props }
    }

    fn tag(&self) -> Tag {
        self.tag
    }
}
