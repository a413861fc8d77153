//! Internal crate for `hvif-rs`.
//!
//! This crate exists to keep the root `hvif-rs` package a thin re-export
//! layer over the `hvif_types`/`hvif_vfs` implementation crates, and
//! should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use hvif_internal::prelude::*;
//!
//! // All commonly used types are available
//! let icon = Icon::new();
//! let bytes = encode_icon(&icon).expect("encode");
//! ```

/// `use hvif_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export hvif_types and hvif_vfs for convenience
pub use hvif_types;
pub use hvif_vfs;
