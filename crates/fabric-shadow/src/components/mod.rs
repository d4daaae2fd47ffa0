//! Concrete shadow node kinds.
//!
//! | Kind                   | Layoutable | YogaLayoutable | Scrollable |
//! |------------------------|:----------:|:--------------:|:----------:|
//! | [`ViewShadowNode`]      | yes        | yes            |            |
//! | [`ScrollViewShadowNode`] | yes       | yes            | yes        |
//! | [`ParagraphShadowNode`] | yes        | yes            |            |
//! | [`TextShadowNode`]      |            |                |            |
//! | [`RawTextShadowNode`]   |            |                |            |

pub mod paragraph;
pub mod raw_text;
pub mod scroll_view;
pub mod text;
pub mod view;

pub use paragraph::{ParagraphProps, ParagraphShadowNode};
pub use raw_text::{RawTextProps, RawTextShadowNode};
pub use scroll_view::{ScrollAxis, ScrollViewProps, ScrollViewShadowNode};
pub use text::{TextProps, TextShadowNode};
pub use view::{SharedColor, ViewProps, ViewShadowNode};

use crate::capability::{Layoutable, Scrollable, YogaLayoutable};
use crate::node::ShadowNodeKind;
use crate::trait_cast::implements;
use static_assertions::const_assert;

const_assert!(implements::<ViewShadowNode, dyn Layoutable>());
const_assert!(implements::<ViewShadowNode, dyn YogaLayoutable>());
const_assert!(implements::<ScrollViewShadowNode, dyn Layoutable>());
const_assert!(implements::<ScrollViewShadowNode, dyn YogaLayoutable>());
const_assert!(implements::<ScrollViewShadowNode, dyn Scrollable>());
const_assert!(implements::<ParagraphShadowNode, dyn Layoutable>());
const_assert!(implements::<ParagraphShadowNode, dyn YogaLayoutable>());
const_assert!(!implements::<TextShadowNode, dyn Layoutable>());
const_assert!(!implements::<TextShadowNode, dyn YogaLayoutable>());
const_assert!(!implements::<RawTextShadowNode, dyn Layoutable>());
const_assert!(!implements::<RawTextShadowNode, dyn YogaLayoutable>());

const_assert!(ViewShadowNode::TRAITS.is_well_formed());
const_assert!(ScrollViewShadowNode::TRAITS.is_well_formed());
const_assert!(ParagraphShadowNode::TRAITS.is_well_formed());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NodeTraits;

    #[test]
    fn test_component_names_are_unique() {
        let names = [
            ViewShadowNode::COMPONENT_NAME,
            ScrollViewShadowNode::COMPONENT_NAME,
            ParagraphShadowNode::COMPONENT_NAME,
            TextShadowNode::COMPONENT_NAME,
            RawTextShadowNode::COMPONENT_NAME,
        ];
        let unique: fabric_core::alloc::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_raw_text_has_no_traits() {
        assert_eq!(RawTextShadowNode::TRAITS, NodeTraits::NONE);
    }
}
