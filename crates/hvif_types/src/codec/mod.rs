//! Binary primitives shared by the flat icon encoder and decoder: the
//! growable write buffer and read cursor, the adaptive coordinate
//! format, the truncated 24-bit float, and the 2-bit path command
//! stream.

pub mod buffer;
pub mod coord;
pub mod float24;
pub mod path_commands;

pub use buffer::{ReadCursor, WriteBuffer};
