//! **griddist** — distance metrics and Dijkstra maps for grid-based games.
//!
//! The core of this crate is three stateless scalar metrics between points
//! given as coordinate slices:
//!
//! - [`manhattan_distance`] — L1 norm of the coordinate differences
//! - [`euclidean_distance`] — L2 norm of the coordinate differences
//! - [`octagonal_distance`] — fast fixed-point octagonal approximation (2D only)
//!
//! The two length-flexible metrics zero-pad the shorter point instead of
//! failing; the octagonal metric rejects non-2D input with
//! [`InvalidDimensionError`]. [`log_distance`] wraps any of them in a
//! logarithmic scale.
//!
//! On top of the metrics sit small grid primitives: the integer [`Point`],
//! the [`Neighbors`] enumeration helper, and [`DijkstraMap`] for
//! single-source distance maps over sparse [`PointSet`] graphs.

mod dijkstra;
mod distance;
mod geom;
mod neighbors;

pub use dijkstra::{DijkstraMap, PathNode, Pather, PointSet, WeightedPather};
pub use distance::{
    InvalidDimensionError, euclidean_distance, log_distance, log_distance_with,
    manhattan_distance, octagonal_distance,
};
pub use geom::Point;
pub use neighbors::Neighbors;
