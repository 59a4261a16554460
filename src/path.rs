pub trait VertexSource {
    fn vertices(&self) -> &[Vertex];
}

#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    Close,
}
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::MoveTo
    }
}

#[derive(Debug,Default,Copy,Clone)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub cmd: PathCommand,
}

impl Vertex {
    pub fn new(x: f64, y: f64, cmd: PathCommand) -> Self {
        Self { x, y, cmd }
    }
    pub fn move_to(x: f64, y: f64) -> Self {
        Self { x, y, cmd: PathCommand::MoveTo }
    }
    pub fn line_to(x: f64, y: f64) -> Self {
        Self { x, y, cmd: PathCommand::LineTo }
    }
    pub fn close_polygon(x: f64, y: f64) -> Self {
        Self { x, y, cmd: PathCommand::Close }
    }
}

/// One directed boundary edge of a subpath
///
/// Endpoints are kept in author order; direction only matters for corner
/// classification during the edge walk, not for the fill rule.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
    /// Authored vertical delta
    pub fn dy(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Retained vertex storage for a path
///
/// Paths are replayed into a rasterizer with
/// [RasterizerRegion::add_path](../raster/struct.RasterizerRegion.html#method.add_path)
#[derive(Debug,Default)]
pub struct Path {
    pub vertices: Vec<Vertex>,
}

impl VertexSource for Path {
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Path {
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    pub fn remove_all(&mut self) {
        self.vertices.clear();
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push( Vertex::move_to(x,y) );
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push( Vertex::line_to(x,y) );
    }
    pub fn close_polygon(&mut self) {
        if self.vertices.is_empty() {
            return;
        }
        let n = self.vertices.len();
        let last = self.vertices[n-1];
        if last.cmd == PathCommand::LineTo {
            self.vertices.push( Vertex::close_polygon(last.x, last.y) );
        }
    }
}
