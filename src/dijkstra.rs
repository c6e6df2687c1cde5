//! Single-source Dijkstra maps over sparse point graphs.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::geom::Point;

/// Minimal graph interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted edges. Costs must be non-negative.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Sparse graph adapter: a set of passable points with uniform 4-way or
/// 8-way movement, costing edges with a caller-supplied metric.
pub struct PointSet<F> {
    points: HashSet<Point>,
    diagonals: bool,
    metric: F,
}

impl<F> PointSet<F>
where
    F: Fn(Point, Point) -> f64,
{
    /// Build a point set from the passable positions.
    ///
    /// With `diagonals` set, movement is 8-way; otherwise cardinal only.
    pub fn new(points: impl IntoIterator<Item = Point>, diagonals: bool, metric: F) -> Self {
        Self {
            points: points.into_iter().collect(),
            diagonals,
            metric,
        }
    }

    /// Whether `p` is a passable position.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

impl<F> Pather for PointSet<F> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if self.diagonals {
            buf.extend(p.neighbors_8().into_iter().filter(|n| self.points.contains(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|n| self.points.contains(n)));
        }
    }
}

impl<F> WeightedPather for PointSet<F>
where
    F: Fn(Point, Point) -> f64,
{
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        (self.metric)(from, to)
    }
}

/// A position with an associated cost, returned from Dijkstra map queries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f64,
}

/// Heap entry, ordered by cost for use in `BinaryHeap`.
#[derive(Clone, Copy)]
struct NodeRef {
    pos: Point,
    cost: f64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest node first.
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source Dijkstra distance maps.
///
/// Owns all internal caches (cost map, closed set, heap, neighbor buffer)
/// so that repeated computations reuse their allocations.
pub struct DijkstraMap {
    costs: HashMap<Point, f64>,
    done: HashSet<Point>,
    results: Vec<PathNode>,
    open: BinaryHeap<NodeRef>,
    nbuf: Vec<Point>,
}

impl Default for DijkstraMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DijkstraMap {
    /// Create a new `DijkstraMap`.
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
            done: HashSet::new(),
            results: Vec::new(),
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Compute the distance map from `start`.
    ///
    /// Nodes are returned in finalization order, so costs are monotone
    /// non-decreasing; `start` is always first at cost 0. When `target` is
    /// given, the search stops as soon as the target's cost is final, which
    /// leaves the rest of the map partially explored.
    pub fn compute<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Point,
        target: Option<Point>,
    ) -> &[PathNode] {
        self.costs.clear();
        self.done.clear();
        self.results.clear();
        self.open.clear();

        self.costs.insert(start, 0.0);
        self.open.push(NodeRef {
            pos: start,
            cost: 0.0,
        });

        while let Some(NodeRef { pos, cost }) = self.open.pop() {
            // Skip stale heap entries for already-finalized nodes.
            if !self.done.insert(pos) {
                continue;
            }
            self.results.push(PathNode { pos, cost });
            if target == Some(pos) {
                break;
            }

            self.nbuf.clear();
            pather.neighbors(pos, &mut self.nbuf);

            for &np in self.nbuf.iter() {
                let tentative = cost + pather.cost(pos, np);
                match self.costs.get(&np) {
                    Some(&known) if tentative >= known => continue,
                    _ => {}
                }
                self.costs.insert(np, tentative);
                self.open.push(NodeRef {
                    pos: np,
                    cost: tentative,
                });
            }
        }

        &self.results
    }

    /// Query the cost at `p` from the last [`compute`](Self::compute) call.
    ///
    /// Returns `None` if the point was never reached. After an early exit
    /// on a target, costs past the target may still be tentative.
    #[inline]
    pub fn at(&self, p: Point) -> Option<f64> {
        self.costs.get(&p).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::euclidean_distance;

    /// An open w x h grid of passable points.
    fn open_grid<F: Fn(Point, Point) -> f64>(w: i32, h: i32, diagonals: bool, metric: F) -> PointSet<F> {
        let points = (0..h).flat_map(|y| (0..w).map(move |x| Point::new(x, y)));
        PointSet::new(points, diagonals, metric)
    }

    fn euclid(from: Point, to: Point) -> f64 {
        euclidean_distance(&from.coords(), &to.coords())
    }

    #[test]
    fn start_costs_zero_and_order_is_monotone() {
        let grid = open_grid(5, 5, true, euclid);
        let mut map = DijkstraMap::new();
        let nodes = map.compute(&grid, Point::ZERO, None);

        assert_eq!(nodes[0], PathNode { pos: Point::ZERO, cost: 0.0 });
        assert_eq!(nodes.len(), 25);
        for pair in nodes.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
    }

    #[test]
    fn cardinal_costs_are_manhattan_on_open_grid() {
        let grid = open_grid(4, 4, false, euclid);
        let mut map = DijkstraMap::new();
        map.compute(&grid, Point::ZERO, None);
        assert_eq!(map.at(Point::new(2, 0)), Some(2.0));
        assert_eq!(map.at(Point::new(3, 3)), Some(6.0));
    }

    #[test]
    fn diagonal_moves_cost_sqrt_two() {
        let grid = open_grid(5, 5, true, euclid);
        let mut map = DijkstraMap::new();
        map.compute(&grid, Point::ZERO, None);
        let cost = map.at(Point::new(4, 4)).unwrap();
        assert!((cost - 4.0 * 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn walls_make_points_unreachable() {
        // Two columns separated by a missing middle column.
        let points = (0..5)
            .flat_map(|y| [Point::new(0, y), Point::new(2, y)])
            .collect::<Vec<_>>();
        let grid = PointSet::new(points, true, euclid);
        let mut map = DijkstraMap::new();
        let nodes = map.compute(&grid, Point::ZERO, None);

        assert_eq!(nodes.len(), 5);
        assert_eq!(map.at(Point::new(2, 2)), None);
    }

    #[test]
    fn target_finalizes_and_stops_early() {
        let grid = open_grid(10, 10, false, euclid);
        let target = Point::new(2, 1);
        let mut map = DijkstraMap::new();
        let nodes = map.compute(&grid, Point::ZERO, Some(target));

        assert_eq!(nodes.last().map(|n| n.pos), Some(target));
        assert!(nodes.len() < 100);
        assert_eq!(map.at(target), Some(3.0));
    }

    #[test]
    fn map_is_reusable() {
        let grid = open_grid(3, 3, false, euclid);
        let mut map = DijkstraMap::new();
        map.compute(&grid, Point::ZERO, None);
        let nodes = map.compute(&grid, Point::new(2, 2), None);
        assert_eq!(nodes[0].pos, Point::new(2, 2));
        assert_eq!(map.at(Point::ZERO), Some(4.0));
    }

    #[test]
    fn detour_around_a_wall() {
        // 3x3 grid with the center blocked; the diagonal crossing must go
        // around it.
        let points = (0..3)
            .flat_map(|y| (0..3).map(move |x| Point::new(x, y)))
            .filter(|&p| p != Point::new(1, 1));
        let grid = PointSet::new(points, false, euclid);
        let mut map = DijkstraMap::new();
        map.compute(&grid, Point::ZERO, None);
        assert_eq!(map.at(Point::new(2, 2)), Some(4.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 4.25,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
