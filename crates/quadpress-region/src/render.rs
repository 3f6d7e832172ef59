//! Render - painting a quadtree back into a pixel sink
//!
//! Depth-first traversal: internal cells recurse into their four
//! children, leaves paint their representative color over every
//! coordinate of their square. Child regions are disjoint, so each
//! destination coordinate in scope receives exactly one write per
//! pass. Leaves that accumulated no visible pixel paint nothing.
//!
//! Two addressing modes:
//!
//! - **Clipped**: writes are restricted to coordinates visible in the
//!   destination and inside a clip rectangle; everything else is
//!   skipped silently.
//! - **Offset**: every leaf coordinate is translated by a fixed delta
//!   and written. The whole translated footprint must be visible in
//!   the destination; hitting an invisible coordinate is a geometry
//!   error, not a skip.

use crate::error::{RegionError, RegionResult};
use crate::pixel::PixelSink;
use crate::quadtree::{QuadNode, QuadTree};
use quadpress_core::Rect;

impl QuadTree {
    /// Paint the tree into `dst`, clipped to `clip`.
    ///
    /// Writes the representative color of each leaf at every
    /// coordinate of the leaf's square that is visible in `dst` and
    /// inside `clip`.
    pub fn render_clipped<D: PixelSink>(&self, dst: &mut D, clip: &Rect) {
        render_clipped_node(self.root(), dst, clip);
    }

    /// Paint the tree into `dst`, translated by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::SinkNotVisible`] on the first translated
    /// coordinate that `dst` reports as not visible. The destination
    /// may hold a partial rendering in that case.
    pub fn render_offset<D: PixelSink>(
        &self,
        dst: &mut D,
        dx: i32,
        dy: i32,
    ) -> RegionResult<()> {
        render_offset_node(self.root(), dst, dx, dy)
    }
}

fn render_clipped_node<D: PixelSink>(node: &QuadNode, dst: &mut D, clip: &Rect) {
    match node.children() {
        Some(children) => {
            for child in children {
                render_clipped_node(child, dst, clip);
            }
        }
        None => {
            if node.stats().is_empty() {
                return;
            }
            let color = node.color();
            for x in node.x()..node.x() + node.size() as i32 {
                for y in node.y()..node.y() + node.size() as i32 {
                    if dst.is_visible(x, y) && clip.contains_point(x, y) {
                        dst.write(x, y, color);
                    }
                }
            }
        }
    }
}

fn render_offset_node<D: PixelSink>(
    node: &QuadNode,
    dst: &mut D,
    dx: i32,
    dy: i32,
) -> RegionResult<()> {
    match node.children() {
        Some(children) => {
            for child in children {
                render_offset_node(child, dst, dx, dy)?;
            }
            Ok(())
        }
        None => {
            if node.stats().is_empty() {
                return Ok(());
            }
            let color = node.color();
            for x in node.x()..node.x() + node.size() as i32 {
                for y in node.y()..node.y() + node.size() as i32 {
                    let (tx, ty) = (x + dx, y + dy);
                    if !dst.is_visible(tx, ty) {
                        return Err(RegionError::SinkNotVisible { x: tx, y: ty });
                    }
                    dst.write(tx, ty, color);
                }
            }
            Ok(())
        }
    }
}
