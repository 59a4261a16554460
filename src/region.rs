//! Accumulated fill state for one shape set

use crate::path::Segment;
use crate::span::Span;

use std::cmp::min;
use std::cmp::max;

use log::trace;

/// Per-fill accumulation: boundary segments, bounding box and the
/// row-indexed span table shared by every subpath registered into it
///
/// Mutated while paths are accumulated and traced; read-only during
/// rendering. Reuse for a new shape set requires [reset](#method.reset),
/// otherwise stale boundary runs keep contributing to the parity.
#[derive(Debug,Default)]
pub struct Region {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    /// Registered boundary segments, in author order
    pub segments: Vec<Segment>,
    /// One sorted span list per canvas row
    pub rows: Vec<Vec<Span>>,
}

impl Region {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height,
               min_x: std::i64::MAX,
               min_y: std::i64::MAX,
               max_x: std::i64::MIN,
               max_y: std::i64::MIN,
               segments: vec![],
               rows: vec![vec![]; height],
        }
    }
    /// Clear segments, bounding box and every row's span list
    pub fn reset(&mut self) {
        self.min_x = std::i64::MAX;
        self.min_y = std::i64::MAX;
        self.max_x = std::i64::MIN;
        self.max_y = std::i64::MIN;
        self.segments.clear();
        for row in &mut self.rows {
            row.clear();
        }
    }
    /// True until at least one subpath has been registered
    pub fn is_empty(&self) -> bool {
        self.max_y < self.min_y
    }
    pub fn row(&self, y: i64) -> &[Span] {
        &self.rows[y as usize]
    }
    pub fn total_spans(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }
    /// Widen the bounding box to include (x,y), clamped to the canvas
    pub fn expand(&mut self, x: f64, y: f64) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x = max(0, min(x.floor() as i64, self.width  as i64 - 1));
        let y = max(0, min(y.floor() as i64, self.height as i64 - 1));
        self.min_x = min(x, self.min_x);
        self.min_y = min(y, self.min_y);
        self.max_x = max(x, self.max_x);
        self.max_y = max(y, self.max_y);
    }

    /// Merge one run into row `y`, keeping the row sorted by start column
    ///
    /// Runs that share no pixel column with a stored span are inserted in
    /// column order; a run sharing at least one column combines with the
    /// first such span scanning left to right (start = min, last = max,
    /// passing counts summed) and the scan stops there. Rows outside the
    /// canvas are dropped and columns are clipped to it before the row is
    /// touched.
    pub fn add_span(&mut self, y: i64, x: i64, len: i64, passing: i64) {
        if len <= 0 || y < 0 || y >= self.height as i64 {
            return;
        }
        let mut x1 = x;
        let mut x2 = x + len - 1;
        if x2 < 0 || x1 >= self.width as i64 {
            return;
        }
        x1 = max(x1, 0);
        x2 = min(x2, self.width as i64 - 1);
        trace!("add_span y {} x {}..{} passing {}", y, x1, x2, passing);

        let row = &mut self.rows[y as usize];
        for i in 0 .. row.len() {
            let s = row[i];
            if x2 < s.x {
                row.insert(i, Span::new(x1, x2 - x1 + 1, passing));
                return;
            }
            if x1 <= s.last() {
                let nx1 = min(x1, s.x);
                let nx2 = max(x2, s.last());
                row[i] = Span::new(nx1, nx2 - nx1 + 1, s.passing + passing);
                return;
            }
        }
        row.push( Span::new(x1, x2 - x1 + 1, passing) );
    }
}
