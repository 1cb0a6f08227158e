// Library exports for canvas drawing layers.
//
// # Locking
//
// The font resolver is the only shared mutable state. Share it through
// `fonts::SharedFontResolver` (one `parking_lot::Mutex` around one resolver);
// never construct a second resolver over the same library font directory in
// the same process, since both would write the same alias file.

/// Library version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod startup;

/// Font name → font file resolution.
pub mod fonts {
    pub use canvas_tools_fonts::*;
}

/// Per-axis curve math for smoothed paths.
pub mod geometry {
    pub use canvas_tools_geometry::*;
}

pub use startup::{open_font_resolver, open_shared_font_resolver};
