//! Quadpress - Quadtree-based flat-color image approximation
//!
//! Quadpress approximates an image region with a hierarchical set of
//! flat-colored square blocks: a quadtree is built over the region and
//! every block whose per-channel color deviation stays under a caller
//! threshold collapses into one flat color. Flat areas become a few
//! large blocks; detailed areas stay subdivided down to single pixels.
//!
//! # Example
//!
//! ```
//! use quadpress::{color, Raster, Rect};
//! use quadpress::region::compress_selection;
//!
//! let src = Raster::filled(16, 16, color::compose_rgb(200, 120, 40)).unwrap();
//! let mut dst = src.create_template().try_into_mut().unwrap();
//! let selection = Rect::new(0, 0, 16, 16).unwrap();
//!
//! let tree = compress_selection(&src, &mut dst, &selection, 25.0).unwrap();
//! assert_eq!(tree.leaf_count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadpress_core::*;

// Re-export the region crate as a module
pub use quadpress_region as region;
