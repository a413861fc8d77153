//! Prelude module for `hvif_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
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

// Re-export everything from hvif_types::prelude
#[doc(inline)]
pub use hvif_types::prelude::*;

// Re-export the entire hvif_types module for advanced usage
#[doc(inline)]
pub use hvif_types;
