
//! How a fill works
//!    ras = RasterizerRegion::new(width, height)
//!    ras.begin_path(x, y)
//!    ras.line_to(x, y) ...
//!    ras.close_path()
//!      trace_subpath()
//!        seed ScanState       -- dry walk of the closing segment
//!        walk each segment    -- row/column dominant DDA stepping
//!          flush run on row change
//!            Region::add_span()  -- sorted per-row merge
//!  Render to a pixel buffer
//!    render_region(&ras.region, &mut pixf, color)
//!      parity sweep per row in [min_y, max_y]
//!        PixelStore::copy_hline()

pub mod path;
pub mod span;
pub mod region;
pub mod edge;
pub mod raster;
pub mod fill;
pub mod color;
pub mod pixfmt;
pub mod ppm;

pub use crate::path::*;
pub use crate::span::*;
pub use crate::region::*;
pub use crate::edge::*;
pub use crate::raster::*;
pub use crate::fill::*;
pub use crate::color::*;
pub use crate::pixfmt::*;
pub use crate::ppm::*;
