//! Pixel source and sink boundary traits
//!
//! The build procedure reads pixels through [`PixelSource`] and the
//! render procedures write through [`PixelSink`]. Both carry a
//! visibility predicate: a coordinate is visible when it lies inside
//! the addressable area of the source or destination. Reads and writes
//! happen only at coordinates that passed the visibility test, which is
//! what lets the algorithms walk square regions that extend past the
//! image edge.

use quadpress_core::{Raster, RasterMut};

/// Read access to a pixel source
pub trait PixelSource {
    /// Check whether a coordinate lies inside the addressable area.
    fn is_visible(&self, x: i32, y: i32) -> bool;

    /// Read the packed RGBA pixel at (x, y).
    ///
    /// Called only for coordinates where [`is_visible`] returned
    /// `true`; implementations may panic otherwise.
    ///
    /// [`is_visible`]: PixelSource::is_visible
    fn read(&self, x: i32, y: i32) -> u32;
}

/// Write access to a pixel destination
pub trait PixelSink {
    /// Check whether a coordinate lies inside the addressable area.
    fn is_visible(&self, x: i32, y: i32) -> bool;

    /// Write the packed RGBA pixel at (x, y).
    ///
    /// Called only for coordinates where [`is_visible`] returned
    /// `true`; implementations may panic otherwise.
    ///
    /// [`is_visible`]: PixelSink::is_visible
    fn write(&mut self, x: i32, y: i32, pixel: u32);
}

impl PixelSource for Raster {
    #[inline]
    fn is_visible(&self, x: i32, y: i32) -> bool {
        Raster::is_visible(self, x, y)
    }

    #[inline]
    fn read(&self, x: i32, y: i32) -> u32 {
        self.get_pixel_unchecked(x as u32, y as u32)
    }
}

impl PixelSource for RasterMut {
    #[inline]
    fn is_visible(&self, x: i32, y: i32) -> bool {
        RasterMut::is_visible(self, x, y)
    }

    #[inline]
    fn read(&self, x: i32, y: i32) -> u32 {
        self.get_pixel_unchecked(x as u32, y as u32)
    }
}

impl PixelSink for RasterMut {
    #[inline]
    fn is_visible(&self, x: i32, y: i32) -> bool {
        RasterMut::is_visible(self, x, y)
    }

    #[inline]
    fn write(&mut self, x: i32, y: i32, pixel: u32) {
        self.set_pixel_unchecked(x as u32, y as u32, pixel);
    }
}
