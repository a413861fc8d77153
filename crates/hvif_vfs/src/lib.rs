//! File and extended-attribute I/O collaborators for the `hvif` command
//! line front end.
//!
//! spec.md §1 names these as external collaborators the core codec does
//! not itself specify: "the command-line front-end, file I/O wrappers,
//! the host OS's extended-attribute mechanism...provide a byte source for
//! import, accept a byte sink for export, and supply an attribute-writer
//! interface parameterised by (name, type-tag, bytes)." This crate is
//! that interface.

pub mod attr;
pub mod io;

pub use attr::{AttributeWriter, VfsError};
pub use io::{read_bytes, write_bytes};
