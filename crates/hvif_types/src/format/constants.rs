//! Tag bytes, flag bits, and the magic number for the flat icon wire
//! format (spec.md §4.5/§4.6).

/// The flat icon file's 4-byte magic.
///
/// Pins spec.md §9's Open Question on magic-byte order: the reference
/// encoder writes the `u32` value `0x6669636e` (`'ficn'` as a C
/// multi-character literal) through a little-endian store, so the four
/// bytes actually on disk are `0x6e, 0x63, 0x69, 0x66` — not the
/// literal's big-endian character order. See `SPEC_FULL.md` §4.5 for the
/// derivation.
pub const MAGIC: [u8; 4] = [0x6E, 0x63, 0x69, 0x66];

/// Style tag: packed rgba, alpha may be <255, not gray.
pub const STYLE_COLOR: u8 = 0;
/// Style tag: gray, fully opaque (1 byte payload).
pub const STYLE_GRAY_NO_ALPHA: u8 = 1;
/// Style tag: gray, alpha <255 (2 byte payload).
pub const STYLE_GRAY: u8 = 2;
/// Style tag: not gray, fully opaque (3 byte payload).
pub const STYLE_COLOR_NO_ALPHA: u8 = 3;
/// Style tag: gradient.
pub const STYLE_GRADIENT: u8 = 4;

/// Gradient flag: 6 `float24` matrix entries follow the stop count.
pub const GRADIENT_FLAG_TRANSFORM: u8 = 1;
/// Gradient flag: stops omit their alpha channel.
pub const GRADIENT_FLAG_NO_ALPHA: u8 = 2;
/// Gradient flag: stops are gray (only `r`, optionally alpha, are
/// stored).
pub const GRADIENT_FLAG_GRAYS: u8 = 4;

/// Path flag: the path is closed.
pub const PATH_FLAG_CLOSED: u8 = 1;
/// Path flag: the point stream is the 2-bit command form.
pub const PATH_FLAG_USES_COMMANDS: u8 = 2;
/// Path flag: no point in this path carries curve handles (only
/// meaningful together with `USES_COMMANDS`).
pub const PATH_FLAG_NO_CURVES: u8 = 4;

/// Shape tag: the only shape type this encoder emits. Decoders must
/// skip unrecognized shape types gracefully (spec.md §4.5/§4.6).
pub const SHAPE_TYPE_PATH_SOURCE: u8 = 10;

/// Shape flag: a full affine transform follows (6 `float24`s).
pub const SHAPE_FLAG_TRANSFORM: u8 = 2;
/// Shape flag: pixel-grid hinting is enabled.
pub const SHAPE_FLAG_HINTING: u8 = 4;
/// Shape flag: a non-default min/max visibility scale follows.
pub const SHAPE_FLAG_LOD_SCALE: u8 = 8;
/// Shape flag: one or more transformer records follow.
pub const SHAPE_FLAG_HAS_TRANSFORMERS: u8 = 16;
/// Shape flag: a pure-translation shortcut (2 `coord`s) follows instead
/// of a full transform.
pub const SHAPE_FLAG_TRANSLATION: u8 = 32;

/// Transformer tag: affine (6 `float24`s).
pub const TRANSFORMER_AFFINE: u8 = 20;
/// Transformer tag: contour (3 bytes).
pub const TRANSFORMER_CONTOUR: u8 = 21;
/// Transformer tag: perspective (9 `float24`s).
pub const TRANSFORMER_PERSPECTIVE: u8 = 22;
/// Transformer tag: stroke (3 bytes).
pub const TRANSFORMER_STROKE: u8 = 23;

/// The fixed-point multiplier used to store `min`/`max visibility
/// scale` as a single byte each (spec.md §4.5, "LOD_SCALE").
pub const VISIBILITY_SCALE_MULTIPLIER: f32 = 63.75;
