//! Error types for building shadow trees.

use crate::node::{ComponentName, Tag};
use std::fmt;

/// Configuration errors reported by
/// [`ComponentBuilder::build`](crate::builder::ComponentBuilder::build).
///
/// A build that fails returns no tree at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An element names a kind with no registered descriptor.
    UnregisteredComponent {
        /// The component name the element asked for.
        component_name: ComponentName,
    },

    /// Two elements in one tree requested the same capture key.
    DuplicateReference {
        /// The repeated key.
        key: String,
    },

    /// The element tree is deeper than the builder allows.
    MaxDepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },

    /// A descriptor received props of the wrong type.
    PropsMismatch {
        /// The component whose descriptor rejected the props.
        component_name: ComponentName,
        /// Type name of the props the descriptor expects.
        expected: &'static str,
    },

    /// A kind's trait word disagrees with the capability views it exposes.
    CapabilityMismatch {
        component_name: ComponentName,
        /// The first capability whose bit and view disagree.
        capability: &'static str,
    },

    /// Tag assignment ran past `Tag::MAX`.
    TagOverflow {
        /// The configured first tag.
        first_tag: Tag,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnregisteredComponent { component_name } => {
                write!(f, "No component descriptor registered for '{}'", component_name)
            }
            BuildError::DuplicateReference { key } => {
                write!(f, "Reference key '{}' is used by more than one element", key)
            }
            BuildError::MaxDepthExceeded { max_depth } => {
                write!(f, "Element tree exceeds the maximum depth of {}", max_depth)
            }
            BuildError::PropsMismatch {
                component_name,
                expected,
            } => {
                write!(
                    f,
                    "Props passed to '{}' are not of type {}",
                    component_name, expected
                )
            }
            BuildError::CapabilityMismatch {
                component_name,
                capability,
            } => {
                write!(
                    f,
                    "Trait word of '{}' disagrees with its {} view",
                    component_name, capability
                )
            }
            BuildError::TagOverflow { first_tag } => {
                write!(f, "Ran out of tags counting up from {}", first_tag)
            }
        }
    }
}

impl std::error::Error for BuildError {}
