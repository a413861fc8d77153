#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `hvif-rs` converts vector-icon documents from Haiku's verbose,
//! tagged-field authoring archive format into the compact binary Haiku
//! Vector Icon Format (HVIF), and back.
//!
//! The data model, codec, and archive reader live in [`hvif_types`]; the
//! file/attribute I/O collaborators the command-line front end needs live
//! in [`hvif_vfs`]. Both are re-exported here through [`prelude`] for
//! convenience.
//!
//! # Examples
//!
//! ```rust
//! use hvif_rs::prelude::*;
//!
//! let mut icon = Icon::new();
//! icon.styles.push(Style::Solid(Rgba::new(255, 0, 0, 255)));
//! icon.paths.push(VectorPath::new(
//!     vec![ControlPoint::corner((0.0, 0.0)), ControlPoint::corner((10.0, 0.0))],
//!     false,
//! ));
//! let mut shape = Shape::new(0);
//! shape.paths.push(0);
//! icon.shapes.push(shape);
//!
//! let bytes = encode_icon(&icon).expect("encode");
//! assert_eq!(&bytes[..4], b"\x6E\x63\x69\x66");
//! ```
pub use hvif_internal::*;
