//! # grid_bfs
//!
//! Shortest paths on small grids with obstacles. Paths are found with a level-synchronous
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), so every returned
//! path uses the fewest possible steps, with or without diagonal moves.
//!
//! Coordinates are single bytes, which allows the whole query to be exchanged as a flat byte
//! buffer: see [find_path] and [PathBuffers] for hosts such as WebAssembly runtimes.
//!
//! ```
//! use grid_bfs::{Cell, GridConfig};
//!
//! let config = GridConfig::new(5, 5, Cell::new(1, 1), Cell::new(1, 3))
//!     .with_obstacles([Cell::new(1, 2)]);
//! let path = config.shortest_path();
//! assert_eq!(path.len(), 5);
//! ```
pub mod bfs;
mod cell;
pub mod codec;
pub mod error;
mod grid;
mod host;

pub use bfs::{bfs, hop_count, shortest_path, Predecessor, SearchContext, SearchRecord};
pub use cell::Cell;
pub use codec::{decode_input, decode_path, encode_input, encode_path, MIN_INPUT_LEN};
pub use error::{DecodeError, Error};
pub use grid::GridConfig;
pub use host::{find_path, PathBuffers};

/// Size of the input and output buffers of [PathBuffers].
pub const BUFFER_SIZE: usize = 5050;
/// Inline capacity of neighbour lists, enough for a full Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
