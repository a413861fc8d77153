//! The authoring archive reader: parses the tagged-field archive format
//! into the in-memory [`crate::icon::Icon`] model (spec.md §4.4).

pub mod import;
pub mod reader;

pub use import::{import_icon, RGBA_TYPE_TAG};
pub use reader::{Archive, FieldValue, IMSG_MAGIC};
