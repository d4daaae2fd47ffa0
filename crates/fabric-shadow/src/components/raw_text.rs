//! The raw text run kind: a plain string with no attributes.

use crate::node::{ComponentName, ShadowNodeKind, Tag};
use crate::traits::NodeTraits;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTextProps {
    pub text: String,
}

impl RawTextProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Shadow node for `RawText`.
#[derive(Debug)]
pub struct RawTextShadowNode {
    tag: Tag,
    props: RawTextProps,
}

impl RawTextShadowNode {
    pub fn text(&self) -> &str {
        &self.props.text
    }
}

impl ShadowNodeKind for RawTextShadowNode {
    const COMPONENT_NAME: ComponentName = "RawText";
    const TRAITS: NodeTraits = NodeTraits::NONE;
    type Props = RawTextProps;

    fn create(tag: Tag, props: RawTextProps) -> Self {
        Self { tag, props }
    }

    fn tag(&self) -> Tag {
        self.tag
    }
}
