//! Benchmarks for capability casts

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fabric_shadow::{
    ComponentBuilder, ComponentDescriptorRegistry, Element, Layoutable, ParagraphShadowNode,
    RawTextShadowNode, ScrollViewShadowNode, ShadowTree, TextShadowNode, ViewShadowNode,
    YogaLayoutable, trait_cast,
};

fn setup() -> ShadowTree {
    ComponentBuilder::new(ComponentDescriptorRegistry::standard())
        .build(
            Element::<ScrollViewShadowNode>::new()
                .reference("scroll")
                .child(
                    Element::<ParagraphShadowNode>::new()
                        .child(Element::<TextShadowNode>::new().reference("text"))
                        .child(Element::<RawTextShadowNode>::new()),
                )
                .child(Element::<ViewShadowNode>::new()),
        )
        .unwrap()
}

fn bench_cast_hit(c: &mut Criterion) {
    let tree = setup();
    let scroll = tree.reference_node("scroll");

    c.bench_function("trait_cast_hit_layoutable", |b| {
        b.iter(|| black_box(trait_cast::<dyn Layoutable>(black_box(scroll)).is_some()))
    });

    c.bench_function("trait_cast_hit_yoga_layoutable", |b| {
        b.iter(|| black_box(trait_cast::<dyn YogaLayoutable>(black_box(scroll)).is_some()))
    });
}

fn bench_cast_miss(c: &mut Criterion) {
    let tree = setup();
    let text = tree.reference_node("text");

    c.bench_function("trait_cast_miss_layoutable", |b| {
        b.iter(|| black_box(trait_cast::<dyn Layoutable>(black_box(text)).is_some()))
    });

    c.bench_function("trait_cast_null", |b| {
        b.iter(|| black_box(trait_cast::<dyn Layoutable>(black_box(None)).is_some()))
    });
}

fn bench_cast_whole_tree(c: &mut Criterion) {
    let tree = setup();

    c.bench_function("trait_cast_whole_tree", |b| {
        b.iter(|| {
            let mut count = 0;
            for id in tree.traverse() {
                if trait_cast::<dyn YogaLayoutable>(tree.get(id)).is_some() {
                    count += 1;
                }
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_cast_hit, bench_cast_miss, bench_cast_whole_tree);
criterion_main!(benches);
