//! Trait words: the compile-time capability tags of each node kind.

use bitflags::bitflags;

bitflags! {
    /// The set of traits a shadow node kind carries.
    ///
    /// Every concrete kind declares its trait word as an associated constant
    /// (see [`ShadowNodeKind::TRAITS`](crate::node::ShadowNodeKind::TRAITS)),
    /// so the word is a property of the type, never of stored data. Some bits
    /// identify a capability interface the kind implements; the others are
    /// plain markers consumed by a renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeTraits: u32 {
        /// No traits
        const NONE                   = 0;

        // Markers (bits 0-5)

        /// Backed by a host view.
        const VIEW_KIND              = 1 << 0;

        /// The root of a surface.
        const ROOT_NODE_KIND         = 1 << 1;

        /// Carries text content or text attributes.
        const TEXT_KIND              = 1 << 2;

        /// Measured as a single Yoga leaf; children are not Yoga nodes.
        const LEAF_YOGA_NODE         = 1 << 3;

        /// Always mounted as a host view, never flattened away.
        const FORMS_VIEW             = 1 << 4;

        /// Establishes its own stacking context.
        const FORMS_STACKING_CONTEXT = 1 << 5;

        // Capability identifiers (bits 8-15)

        /// Implements [`Layoutable`](crate::capability::Layoutable).
        const LAYOUTABLE_KIND        = 1 << 8;

        /// Implements [`YogaLayoutable`](crate::capability::YogaLayoutable).
        /// Always paired with `LAYOUTABLE_KIND`.
        const YOGA_LAYOUTABLE_KIND   = 1 << 9;

        /// Implements [`Scrollable`](crate::capability::Scrollable).
        const SCROLLABLE_KIND        = 1 << 10;
    }
}

impl NodeTraits {
    /// Bits that name a capability interface.
    pub const CAPABILITIES: Self = Self::LAYOUTABLE_KIND
        .union(Self::YOGA_LAYOUTABLE_KIND)
        .union(Self::SCROLLABLE_KIND);

    /// Base word for kinds laid out by a flexbox engine.
    pub const YOGA_LAYOUTABLE: Self = Self::LAYOUTABLE_KIND.union(Self::YOGA_LAYOUTABLE_KIND);

    /// Check a single trait (or every trait of a composite).
    #[inline]
    pub const fn check(self, identifier: Self) -> bool {
        self.contains(identifier)
    }

    /// Only the capability bits of this word.
    pub const fn capabilities(self) -> Self {
        self.intersection(Self::CAPABILITIES)
    }

    /// Whether the word is internally consistent.
    ///
    /// A Yoga-layoutable kind must also be layoutable.
    pub const fn is_well_formed(self) -> bool {
        !self.contains(Self::YOGA_LAYOUTABLE_KIND) || self.contains(Self::LAYOUTABLE_KIND)
    }
}

impl Default for NodeTraits {
    fn default() -> Self {
        Self::NONE
    }
}
