//! Vector math re-exported from [`glam`].
//!
//! Shadow nodes only need 2D offsets, so this module stays a thin re-export.
//!
//! ```
//! use fabric_core::math::Vec2;
//!
//! let offset = Vec2::new(0.0, 120.0);
//! assert_eq!(-offset, Vec2::new(0.0, -120.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
