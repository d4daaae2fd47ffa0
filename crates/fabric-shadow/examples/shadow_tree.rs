//! Builds a small shadow tree and reports which capabilities each node has.
//!
//! Run with `RUST_LOG=fabric_shadow=trace` to see each node being created.

use fabric_core::{Config, ProfilingMode};
use fabric_shadow::{
    ComponentBuilder, ComponentDescriptorRegistry, Element, Layoutable, ParagraphProps,
    ParagraphShadowNode, RawTextProps, RawTextShadowNode, ScrollViewProps, ScrollViewShadowNode,
    Scrollable, TextProps, TextShadowNode, Vec2, ViewProps, ViewShadowNode, YogaLayoutable,
    trait_cast,
};

fn main() {
    fabric_core::init(&Config {
        profiling: ProfilingMode::On,
        ..Default::default()
    });

    let builder = ComponentBuilder::new(ComponentDescriptorRegistry::standard());
    let element = Element::<ScrollViewShadowNode>::with_props(
        ScrollViewProps::default().content_offset(Vec2::new(0.0, 120.0)),
    )
    .child(
        Element::<ParagraphShadowNode>::with_props(ParagraphProps::default().max_lines(2))
            .child(Element::<TextShadowNode>::with_props(TextProps::default().font_size(14.0)))
            .child(Element::<RawTextShadowNode>::with_props(RawTextProps::new(
                "Hello, Fabric",
            ))),
    )
    .child(Element::<ViewShadowNode>::with_props(
        ViewProps::default().test_id("footer"),
    ));

    let tree = match builder.build(element) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("Failed to build shadow tree: {}", e);
            return;
        }
    };
    fabric_core::profiling::new_frame();

    for id in tree.traverse() {
        let Some(node) = tree.get(id) else { continue };
        let indent = "  ".repeat(tree.depth(id).unwrap_or(0));
        println!(
            "{}{} (tag {}) layoutable={} yoga={} scrollable={}",
            indent,
            node.component_name(),
            node.tag(),
            trait_cast::<dyn Layoutable>(Some(node)).is_some(),
            trait_cast::<dyn YogaLayoutable>(Some(node)).is_some(),
            trait_cast::<dyn Scrollable>(Some(node)).is_some(),
        );
    }
}
