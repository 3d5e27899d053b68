use pathduel_core::{Point, Range};

/// Iterator over the in-bounds cardinal neighbours of a cell.
///
/// Yields cells in the order right, down, left, up. It copies the grid
/// bounds, so it does not borrow the grid it came from.
#[derive(Debug, Clone)]
pub struct Neighbors {
    candidates: [Point; 4],
    bounds: Range,
    pos: usize,
}

impl Neighbors {
    pub(crate) fn new(p: Point, bounds: Range) -> Self {
        Self {
            candidates: p.neighbors_4(),
            bounds,
            pos: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.pos < self.candidates.len() {
            let n = self.candidates[self.pos];
            self.pos += 1;
            if self.bounds.contains(n) {
                return Some(n);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len() - self.pos))
    }
}
