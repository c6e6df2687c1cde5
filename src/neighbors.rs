use crate::geom::Point;

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating cardinal (4-way) or all (8-way)
/// neighbors of a grid point, filtered by a predicate. The internal buffer
/// is reused across calls.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf
            .extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_keeps_filtered() {
        let mut nb = Neighbors::new();
        let ns = nb.cardinal(Point::new(0, 0), |p| p.x >= 0 && p.y >= 0);
        assert_eq!(ns, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn all_yields_eight() {
        let mut nb = Neighbors::new();
        let ns = nb.all(Point::new(3, 3), |_| true);
        assert_eq!(ns.len(), 8);
        assert!(ns.contains(&Point::new(2, 2)));
        assert!(ns.contains(&Point::new(4, 4)));
    }

    #[test]
    fn buffer_reuse_resets_contents() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.all(Point::ZERO, |_| true).len(), 8);
        assert_eq!(nb.cardinal(Point::ZERO, |_| true).len(), 4);
    }
}
