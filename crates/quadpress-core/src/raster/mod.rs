//! Raster - 32-bit RGBA image container
//!
//! The `Raster` structure is the image type used throughout quadpress.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, packed `0xRRGGBBAA` (red in MSB, alpha
//!   in LSB)
//! - Rows are stored contiguously, top to bottom
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back
//! with `Into<Raster>`.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data, one packed RGBA word per pixel
    data: Vec<u32>,
}

impl RasterData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(RasterData {
            width,
            height,
            data: vec![0u32; len],
        })
    }
}

/// Raster - main image container
///
/// # Examples
///
/// ```
/// use quadpress_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the given dimensions.
    ///
    /// The image data is initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::new(width, height)?),
        })
    }

    /// Create a new raster with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        let mut data = RasterData::new(width, height)?;
        data.data.fill(pixel);
        Ok(Raster {
            inner: Arc::new(data),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixel words of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new zeroed raster with the same dimensions as this one.
    pub fn create_template(&self) -> Self {
        let len = self.inner.data.len();
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![0u32; len],
            }),
        }
    }

    /// Convert into a mutable raster if this is the only reference.
    ///
    /// If successful, returns a [`RasterMut`] that allows modification.
    /// Otherwise returns `self` unchanged.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Get a mutable copy of this raster.
    ///
    /// Always clones the pixel data.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster
///
/// Obtained from [`Raster::try_into_mut`] or [`Raster::to_mut`];
/// convert back to an immutable [`Raster`] with `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new zeroed mutable raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::new(width, height)?,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
