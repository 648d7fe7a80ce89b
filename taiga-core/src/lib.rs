//! Taiga core library.
//!
//! Minimum spanning tree and forest construction for undirected weighted
//! graphs, built from two pieces:
//!
//! - [`UnionFind`] — a disjoint set union structure with path compression
//!   and union by rank, usable on its own.
//! - [`build_mst`] — Kruskal's algorithm over an explicit [`Edge`] list,
//!   producing a [`SpanningForest`].
//!
//! The computation is a single synchronous batch per call: no shared state
//! exists between invocations, so independent calls may run on separate
//! threads without coordination.

mod edge;
mod mst;
mod union_find;


pub use crate::{
    edge::Edge,
    mst::{MstError, SpanningForest, build_mst},
    union_find::UnionFind,
};
