//! Path accumulation into a region

use crate::edge::trace_subpath;
use crate::path::{PathCommand, Segment, VertexSource};
use crate::region::Region;

#[derive(Debug,PartialEq,Copy,Clone)]
pub enum PathStatus {
    Initial,
    MoveTo,
    LineTo,
    Closed,
}
impl Default for PathStatus {
    fn default() -> PathStatus {
        PathStatus::Initial
    }
}

/// Streaming path builder over a [Region](../region/struct.Region.html)
///
/// Every begin/line/close cycle issued before a render accumulates into the
/// same span table; overlapping subpaths carve holes and disjoint ones
/// union, both through the even-odd rule.
#[derive(Debug,Default)]
pub struct RasterizerRegion {
    pub region: Region,
    status: PathStatus,
    begin_x: f64,
    begin_y: f64,
    x0: f64,
    y0: f64,
    segments: Vec<Segment>,
}

impl RasterizerRegion {
    pub fn new(width: usize, height: usize) -> Self {
        Self { region: Region::new(width, height),
               status: PathStatus::Initial,
               begin_x: 0.0, begin_y: 0.0,
               x0: 0.0, y0: 0.0,
               segments: vec![],
        }
    }
    /// Drop everything: open subpath, registered spans, bounding box
    pub fn reset(&mut self) {
        self.region.reset();
        self.segments.clear();
        self.status = PathStatus::Initial;
    }
    /// Start a new subpath at (x,y)
    ///
    /// A subpath left open since the last close is discarded; subpaths
    /// already closed stay registered in the region.
    pub fn begin_path(&mut self, x: f64, y: f64) {
        self.segments.clear();
        self.begin_x = x;
        self.begin_y = y;
        self.x0 = x;
        self.y0 = y;
        self.status = PathStatus::MoveTo;
    }
    /// Append a boundary segment from the current point to (x,y)
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.segments.push( Segment::new(self.x0, self.y0, x, y) );
        self.x0 = x;
        self.y0 = y;
        self.status = PathStatus::LineTo;
    }
    /// Close the subpath back to its start point and register it
    ///
    /// Subpaths with fewer than 3 segments register nothing; that is not
    /// an error, the cycle is simply dropped.
    pub fn close_path(&mut self) {
        if self.status != PathStatus::LineTo {
            self.segments.clear();
            return;
        }
        self.segments.push( Segment::new(self.x0, self.y0,
                                         self.begin_x, self.begin_y) );
        if self.segments.len() >= 3 {
            trace_subpath(&mut self.region, &self.segments);
            self.region.segments.extend_from_slice(&self.segments);
        }
        self.segments.clear();
        self.x0 = self.begin_x;
        self.y0 = self.begin_y;
        self.status = PathStatus::Closed;
    }
    /// Replay a retained path
    pub fn add_path<VS: VertexSource>(&mut self, path: &VS) {
        for v in path.vertices() {
            match v.cmd {
                PathCommand::MoveTo => self.begin_path(v.x, v.y),
                PathCommand::LineTo => self.line_to(v.x, v.y),
                PathCommand::Close  => self.close_path(),
            }
        }
    }
}
