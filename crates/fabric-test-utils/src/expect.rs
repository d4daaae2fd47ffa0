//! Assertions over capability casts.

use fabric_shadow::{Layoutable, ShadowTree, YogaLayoutable, trait_cast, trait_cast_ref};
use std::panic::{self, AssertUnwindSafe};

/// Whether `f` panics. The default panic hook still prints the message.
pub fn panics<R>(f: impl FnOnce() -> R) -> bool {
    panic::catch_unwind(AssertUnwindSafe(f)).is_err()
}

/// Assert the node captured under `key` has exactly the given layout
/// capabilities, through both cast forms.
#[track_caller]
pub fn expect_capabilities(tree: &ShadowTree, key: &str, layoutable: bool, yoga_layoutable: bool) {
    let node = tree.reference_node(key);
    assert!(node.is_some(), "no node captured under '{key}'");

    assert_eq!(
        trait_cast::<dyn Layoutable>(node).is_some(),
        layoutable,
        "'{key}' Layoutable handle cast"
    );
    assert_eq!(
        trait_cast::<dyn YogaLayoutable>(node).is_some(),
        yoga_layoutable,
        "'{key}' YogaLayoutable handle cast"
    );

    if let Some(node) = node {
        assert_eq!(
            !panics(|| {
                trait_cast_ref::<dyn Layoutable>(node);
            }),
            layoutable,
            "'{key}' Layoutable reference cast"
        );
        assert_eq!(
            !panics(|| {
                trait_cast_ref::<dyn YogaLayoutable>(node);
            }),
            yoga_layoutable,
            "'{key}' YogaLayoutable reference cast"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panics_detects_panic() {
        assert!(panics(|| Vec::<u8>::new().remove(0)));
        assert!(!panics(|| 1 + 1));
    }
}
