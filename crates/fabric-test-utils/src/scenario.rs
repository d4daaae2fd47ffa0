//! The reference tree used across the integration tests:
//!
//! ```text
//! ScrollView              "scroll_view"
//! ├── Paragraph           "paragraph"
//! │   ├── Text            "text"
//! │   └── RawText         "raw_text"
//! └── View                "view"
//! ```

use fabric_shadow::{
    AnyElement, Element, ParagraphShadowNode, RawTextProps, RawTextShadowNode,
    ScrollViewShadowNode, TextShadowNode, ViewShadowNode,
};

pub const SCROLL_VIEW: &str = "scroll_view";
pub const PARAGRAPH: &str = "paragraph";
pub const TEXT: &str = "text";
pub const RAW_TEXT: &str = "raw_text";
pub const VIEW: &str = "view";

/// Every capture key of the reference tree, in pre-order.
pub const ALL_KEYS: [&str; 5] = [SCROLL_VIEW, PARAGRAPH, TEXT, RAW_TEXT, VIEW];

pub fn reference_element() -> AnyElement {
    Element::<ScrollViewShadowNode>::new()
        .reference(SCROLL_VIEW)
        .child(
            Element::<ParagraphShadowNode>::new()
                .reference(PARAGRAPH)
                .child(Element::<TextShadowNode>::new().reference(TEXT))
                .child(
                    Element::<RawTextShadowNode>::with_props(RawTextProps::new("Hello, Fabric"))
                        .reference(RAW_TEXT),
                ),
        )
        .child(Element::<ViewShadowNode>::new().reference(VIEW))
        .into()
}
