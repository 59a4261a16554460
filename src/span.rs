
/// Row occupance: a contiguous pixel run on one scanline
///
/// The passing count is the number of directed boundary crossings folded
/// into the run; summing counts left to right across a row reproduces the
/// even-odd crossing parity at each pixel column.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Span {
    /// First pixel column of the run
    pub x: i64,
    /// Run length in pixels
    pub len: i64,
    /// Accumulated boundary crossings
    pub passing: i64,
}

impl Span {
    pub fn new(x: i64, len: i64, passing: i64) -> Self {
        Span { x, len, passing }
    }
    /// Last pixel column of the run
    pub fn last(&self) -> i64 {
        self.x + self.len - 1
    }
}
