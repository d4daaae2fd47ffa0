//! Test utilities for the Fabric shadow tree crates.
//!
//! - [`simple_component_builder`] - a builder with the standard kinds
//!   registered
//! - [`scenario`] - the reference element tree and its capture keys
//! - [`expect`] - capability assertions and panic detection
//!
//! # Example
//!
//! ```rust
//! use fabric_test_utils::{expect_capabilities, scenario, simple_component_builder};
//!
//! let tree = simple_component_builder()
//!     .build(scenario::reference_element())
//!     .unwrap();
//!
//! expect_capabilities(&tree, scenario::SCROLL_VIEW, true, true);
//! expect_capabilities(&tree, scenario::RAW_TEXT, false, false);
//! ```

pub mod expect;
pub mod scenario;

pub use expect::{expect_capabilities, panics};

use fabric_shadow::{ComponentBuilder, ComponentDescriptorRegistry};

/// Component builder with View, ScrollView, Paragraph, Text and RawText
/// registered.
pub fn simple_component_builder() -> ComponentBuilder {
    ComponentBuilder::new(ComponentDescriptorRegistry::standard())
}

/// Install a log subscriber for tests. `RUST_LOG` overrides the filter.
pub fn init_test_logging() {
    fabric_core::logging::init_with_filter("fabric_shadow=trace");
}
