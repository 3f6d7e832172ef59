//! Quadtree build - approximating an image with flat-colored blocks
//!
//! The build procedure covers a power-of-two square of pixels with a
//! quadtree, constructed bottom-up: 1x1 cells read their pixel, larger
//! cells build their four quadrants first and then decide whether to
//! collapse them into a single flat-colored block.
//!
//! # Merge policy
//!
//! A cell may collapse only when all four children are leaves. The
//! children's statistics fold into the cell by pointwise addition, and
//! the cell collapses when the combined channel standard deviation of
//! the merged region is at or below the caller's threshold. A child
//! that kept its own children still holds unresolved detail, so the
//! cell stays subdivided without computing its own aggregate.
//!
//! Collapse propagates: once four sibling cells have each collapsed to
//! leaves, their parent is itself a merge candidate, so flat areas of
//! the image coalesce into the largest blocks the threshold allows.
//!
//! # Visibility
//!
//! The covering square may extend past the source image. Invisible
//! coordinates contribute nothing to any accumulator, and a cell whose
//! region is entirely invisible stays subdivided rather than dividing
//! by a zero pixel count; it renders no pixels either way.

use crate::error::{RegionError, RegionResult};
use crate::pixel::{PixelSink, PixelSource};
use crate::stats::RegionStats;
use quadpress_core::Rect;

/// A single quadtree cell
///
/// Geometry (`x`, `y`, `size`), zero or exactly four children, the
/// accumulated [`RegionStats`], and the representative color painted
/// over the cell's square when it is a leaf.
#[derive(Debug)]
pub struct QuadNode {
    x: i32,
    y: i32,
    size: u32,
    children: Option<Box<[QuadNode; 4]>>,
    stats: RegionStats,
    color: u32,
}

impl QuadNode {
    /// Get the left x coordinate of the cell's square.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Get the top y coordinate of the cell's square.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Get the edge length of the cell's square.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Check whether this cell is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Get the four children, if this cell is subdivided.
    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        self.children.as_deref()
    }

    /// Get the accumulated statistics.
    pub fn stats(&self) -> &RegionStats {
        &self.stats
    }

    /// Get the representative color.
    ///
    /// Meaningful for leaves whose region holds at least one visible
    /// pixel.
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Get the cell's square as a rectangle.
    pub fn region(&self) -> Rect {
        Rect::new_unchecked(self.x, self.y, self.size as i32, self.size as i32)
    }

    fn count_nodes(&self) -> usize {
        match &self.children {
            Some(children) => 1 + children.iter().map(QuadNode::count_nodes).sum::<usize>(),
            None => 1,
        }
    }

    fn count_leaves(&self) -> usize {
        match &self.children {
            Some(children) => children.iter().map(QuadNode::count_leaves).sum(),
            None => 1,
        }
    }

    fn depth(&self) -> u32 {
        match &self.children {
            Some(children) => 1 + children.iter().map(QuadNode::depth).max().unwrap_or(0),
            None => 0,
        }
    }

    fn collect_leaf_regions(&self, out: &mut Vec<Rect>) {
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_leaf_regions(out);
                }
            }
            None => out.push(self.region()),
        }
    }
}

/// A built quadtree
///
/// Immutable once built; read-only structure queries plus the render
/// procedures (see the crate docs for the full flow).
#[derive(Debug)]
pub struct QuadTree {
    root: QuadNode,
    threshold: f32,
}

impl QuadTree {
    /// Build a quadtree over the square `[x, x+size) x [y, y+size)`.
    ///
    /// `threshold` bounds the combined channel standard deviation a
    /// region may have and still be represented by one flat color.
    /// Every leaf of the finished tree satisfies the bound except 1x1
    /// leaves and fully-invisible regions.
    ///
    /// # Errors
    ///
    /// - [`RegionError::InvalidQuadSize`] if `size` is zero or not a
    ///   power of two.
    /// - [`RegionError::InvalidThreshold`] if `threshold` is negative
    ///   or not finite.
    pub fn build<S: PixelSource>(
        src: &S,
        origin: (i32, i32),
        size: u32,
        threshold: f32,
    ) -> RegionResult<Self> {
        if size == 0 || !size.is_power_of_two() {
            return Err(RegionError::InvalidQuadSize(size));
        }
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(RegionError::InvalidThreshold(threshold));
        }

        let root = build_node(src, origin.0, origin.1, size, threshold);
        Ok(QuadTree { root, threshold })
    }

    /// Get the root cell.
    pub fn root(&self) -> &QuadNode {
        &self.root
    }

    /// Get the threshold the tree was built with.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Count all cells in the tree.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Count the leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.count_leaves()
    }

    /// Get the depth of the deepest leaf (0 for a single-leaf tree).
    pub fn max_depth(&self) -> u32 {
        self.root.depth()
    }

    /// Collect the squares of all leaves, depth-first.
    pub fn leaf_regions(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        self.root.collect_leaf_regions(&mut out);
        out
    }
}

fn build_node<S: PixelSource>(src: &S, x: i32, y: i32, size: u32, threshold: f32) -> QuadNode {
    if size == 1 {
        // Base case: one coordinate, visible or not
        return if src.is_visible(x, y) {
            let pixel = src.read(x, y);
            QuadNode {
                x,
                y,
                size,
                children: None,
                stats: RegionStats::from_pixel(pixel),
                color: pixel,
            }
        } else {
            QuadNode {
                x,
                y,
                size,
                children: None,
                stats: RegionStats::empty(),
                color: 0,
            }
        };
    }

    let half = size / 2;
    let (mx, my) = (x + half as i32, y + half as i32);
    let children = Box::new([
        build_node(src, x, y, half, threshold),
        build_node(src, x, my, half, threshold),
        build_node(src, mx, y, half, threshold),
        build_node(src, mx, my, half, threshold),
    ]);

    // A subdivided child holds detail the threshold already rejected;
    // no merge may cross it.
    if children.iter().any(|c| !c.is_leaf()) {
        return QuadNode {
            x,
            y,
            size,
            children: Some(children),
            stats: RegionStats::empty(),
            color: 0,
        };
    }

    let mut stats = RegionStats::empty();
    for child in children.iter() {
        stats.merge(child.stats());
    }

    // Entirely invisible region: nothing to aggregate over, so no mean
    // or deviation exists. Keep the children; nothing renders here.
    if stats.is_empty() {
        return QuadNode {
            x,
            y,
            size,
            children: Some(children),
            stats,
            color: 0,
        };
    }

    let color = stats.mean_color();
    if stats.combined_stdev() <= threshold {
        QuadNode {
            x,
            y,
            size,
            children: None,
            stats,
            color,
        }
    } else {
        QuadNode {
            x,
            y,
            size,
            children: Some(children),
            stats,
            color,
        }
    }
}

/// Compute the power-of-two edge length covering a `w x h` extent.
///
/// Returns at least 1.
pub fn bounding_quad_size(w: u32, h: u32) -> u32 {
    w.max(h).next_power_of_two()
}

/// Compress a selection of `src` into `dst`.
///
/// Covers `selection` with a power-of-two square anchored at the
/// selection's top-left corner, builds the quadtree at the given
/// threshold, and renders the flat-colored blocks back into `dst`
/// clipped to the selection. Returns the built tree.
///
/// # Errors
///
/// - [`RegionError::EmptySelection`] if the selection has no area.
/// - Any error [`QuadTree::build`] can produce.
pub fn compress_selection<S: PixelSource, D: PixelSink>(
    src: &S,
    dst: &mut D,
    selection: &Rect,
    threshold: f32,
) -> RegionResult<QuadTree> {
    if selection.w <= 0 || selection.h <= 0 {
        return Err(RegionError::EmptySelection {
            w: selection.w,
            h: selection.h,
        });
    }

    let size = bounding_quad_size(selection.w as u32, selection.h as u32);
    let tree = QuadTree::build(src, (selection.x, selection.y), size, threshold)?;
    tree.render_clipped(dst, selection);
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_quad_size() {
        assert_eq!(bounding_quad_size(0, 0), 1);
        assert_eq!(bounding_quad_size(1, 1), 1);
        assert_eq!(bounding_quad_size(2, 2), 2);
        assert_eq!(bounding_quad_size(3, 2), 4);
        assert_eq!(bounding_quad_size(5, 17), 32);
        assert_eq!(bounding_quad_size(64, 64), 64);
        assert_eq!(bounding_quad_size(65, 1), 128);
    }

    #[test]
    fn test_build_rejects_bad_size() {
        let src = quadpress_core::Raster::new(4, 4).unwrap();
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 0, 0.0),
            Err(RegionError::InvalidQuadSize(0))
        ));
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 3, 0.0),
            Err(RegionError::InvalidQuadSize(3))
        ));
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 12, 0.0),
            Err(RegionError::InvalidQuadSize(12))
        ));
    }

    #[test]
    fn test_build_rejects_bad_threshold() {
        let src = quadpress_core::Raster::new(4, 4).unwrap();
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 4, -1.0),
            Err(RegionError::InvalidThreshold(_))
        ));
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 4, f32::NAN),
            Err(RegionError::InvalidThreshold(_))
        ));
        assert!(matches!(
            QuadTree::build(&src, (0, 0), 4, f32::INFINITY),
            Err(RegionError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_single_pixel_tree() {
        let src = quadpress_core::Raster::filled(1, 1, 0xabcdef12).unwrap();
        let tree = QuadTree::build(&src, (0, 0), 1, 0.0).unwrap();
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().color(), 0xabcdef12);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.max_depth(), 0);
    }
}
