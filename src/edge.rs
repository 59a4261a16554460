//! Edge table construction
//!
//! Walks each closed subpath with a DDA stepper and registers, per scanline
//! row, the pixel run the boundary occupies there together with the number
//! of directed crossings the run represents.

use crate::path::Segment;
use crate::region::Region;

use std::cmp::min;
use std::cmp::max;

use log::trace;

/// Walk state for one subpath
///
/// Lives for the duration of a single trace; the pending run is carried
/// across segment boundaries and flushed whenever the walk leaves a row.
#[derive(Debug,Copy,Clone)]
struct ScanState {
    /// Current pixel column
    x: i64,
    /// Current pixel row
    y: i64,
    /// Column where the pending run began
    run_x: i64,
    /// Crossings the pending run will carry when flushed
    passing: i64,
}

impl ScanState {
    fn at(x: f64, y: f64) -> Self {
        let (x, y) = (x.floor() as i64, y.floor() as i64);
        Self { x, y, run_x: x, passing: 1 }
    }
    /// Register the pending run on the row being left
    fn flush(&self, region: &mut Region) {
        let x1 = min(self.run_x, self.x);
        let x2 = max(self.run_x, self.x);
        trace!("flush y {} run {}..{} passing {}", self.y, x1, x2, self.passing);
        region.add_span(self.y, x1, x2 - x1 + 1, self.passing);
    }
    /// Begin a new run at (x,y) with an ordinary single crossing
    fn restart(&mut self, x: i64, y: i64) {
        self.run_x = x;
        self.y = y;
        self.passing = 1;
    }
}

/// Register one closed subpath into the region's span table
///
/// The closing segment is walked once up front without registering anything;
/// that leaves the run state exactly as it must be when the first segment
/// starts, so the seam needs no special case. The run still pending after
/// the forward pass covers the same pixels and is dropped.
pub fn trace_subpath(region: &mut Region, segs: &[Segment]) {
    if segs.len() < 3 {
        return;
    }
    let n = segs.len();
    let closing = segs[n-1];
    let mut st = ScanState::at(closing.x1, closing.y1);
    walk(&mut st, region, &closing, false);

    for i in 0 .. n {
        let prev = if i == 0 { &segs[n-1] } else { &segs[i-1] };
        if !passing_corner(prev, &segs[i]) {
            // The boundary touches the scanline at this vertex and turns
            // back; the run must count as two coincident crossings or the
            // parity beyond the vertex flips.
            st.passing = 2;
        }
        walk(&mut st, region, &segs[i], true);
        region.expand(segs[i].x1, segs[i].y1);
        region.expand(segs[i].x2, segs[i].y2);
    }
}

/// A corner passes if the boundary keeps moving through the scanline on
/// both sides of the shared vertex
fn passing_corner(prev: &Segment, next: &Segment) -> bool {
    let dy0 = prev.dy();
    let dy1 = next.dy();
    (dy0 > 0.0 && dy1 > 0.0) || (dy0 < 0.0 && dy1 < 0.0)
}

/// Step one segment, flushing the pending run at every row change
///
/// The walk starts from the state's current pixel, which is the floored
/// shared vertex with the previous segment, so step 0 is never revisited.
/// With `register` off the state advances without touching the region.
fn walk(st: &mut ScanState, region: &mut Region, seg: &Segment, register: bool) {
    let x1 = seg.x1.floor() as i64;
    let y1 = seg.y1.floor() as i64;
    let x2 = seg.x2.floor() as i64;
    let y2 = seg.y2.floor() as i64;
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dy.abs() >= dx.abs() {
        // Row dominant: one row per step, interpolate the column
        let steps = dy.abs();
        for i in 1 ..= steps {
            let y = y1 + i * dy.signum();
            let x = (x1 as f64 + (dx * i) as f64 / steps as f64).floor() as i64;
            if y != st.y {
                if register {
                    st.flush(region);
                }
                st.restart(x, y);
            }
            st.x = x;
        }
    } else {
        // Column dominant: one column per step, the run keeps extending
        // until the interpolated row moves
        let steps = dx.abs();
        for i in 1 ..= steps {
            let x = x1 + i * dx.signum();
            let y = (y1 as f64 + (dy * i) as f64 / steps as f64).floor() as i64;
            if y != st.y {
                if register {
                    st.flush(region);
                }
                st.restart(x, y);
            }
            st.x = x;
        }
    }
}
