//! quadpress-region - Quadtree build and render
//!
//! This crate approximates a square region of an image with a
//! hierarchical set of flat-colored blocks. A quadtree is built
//! bottom-up over the region; wherever the combined per-channel
//! standard deviation of a block stays at or below the caller's
//! threshold, its four quadrants collapse into one flat color. Flat
//! areas end up as a few large blocks, detailed areas stay subdivided
//! down to single pixels.
//!
//! The tree is transient: build it, render it, drop it.
//!
//! # Examples
//!
//! ## Compressing a selection
//!
//! ```
//! use quadpress_core::{color, Raster, Rect};
//! use quadpress_region::compress_selection;
//!
//! let src = Raster::filled(8, 8, color::compose_rgba(9, 9, 9, 255)).unwrap();
//! let mut dst = src.create_template().try_into_mut().unwrap();
//! let selection = Rect::new(0, 0, 8, 8).unwrap();
//!
//! let tree = compress_selection(&src, &mut dst, &selection, 0.0).unwrap();
//!
//! // A uniform selection collapses into a single block
//! assert_eq!(tree.leaf_count(), 1);
//! assert!(tree.root().is_leaf());
//! ```
//!
//! ## Building and rendering separately
//!
//! ```
//! use quadpress_core::{color, Raster, Rect};
//! use quadpress_region::QuadTree;
//!
//! let src = Raster::filled(4, 4, color::compose_rgb(80, 10, 10)).unwrap();
//! let tree = QuadTree::build(&src, (0, 0), 4, 50.0).unwrap();
//!
//! // Translate the blocks into a larger destination
//! let mut dst = Raster::new(8, 8).unwrap().try_into_mut().unwrap();
//! tree.render_offset(&mut dst, 2, 2).unwrap();
//! assert_eq!(dst.get_rgba(2, 2), Some((80, 10, 10, 255)));
//! ```

pub mod error;
pub mod pixel;
pub mod quadtree;
mod render;
pub mod stats;

// Re-export core types
pub use quadpress_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export the pixel boundary traits
pub use pixel::{PixelSink, PixelSource};

// Re-export quadtree types and functions
pub use quadtree::{QuadNode, QuadTree, bounding_quad_size, compress_selection};

// Re-export statistics
pub use stats::RegionStats;
