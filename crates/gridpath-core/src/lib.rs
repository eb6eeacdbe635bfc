//! **gridpath-core** — occupancy grids and cell geometry.
//!
//! This crate provides the types shared by the *gridpath* search and the
//! harnesses driving it: [`Cell`] coordinates, grid [`Bounds`], the
//! tri-state [`Occupancy`] and the [`Grid`] the search marks as it goes.

pub mod geom;
pub mod grid;

pub use geom::{Bounds, BoundsIter, Cell};
pub use grid::{Grid, GridError, Occupancy};
