//! RgbRaster - packed multi-channel image
//!
//! Each sample is a 32-bit `0xRRGGBBAA` pixel (see [`crate::color`]).
//! The correlation engine never touches these; they exist for the
//! per-channel bit-plane extractor and the colour collaborators.

use crate::color;
use crate::error::{Error, Result, check_shape};
use crate::raster::Raster;

/// One colour channel of an [`RgbRaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red component
    Red,
    /// Green component
    Green,
    /// Blue component
    Blue,
}

impl RgbChannel {
    /// Extract this channel from a packed pixel.
    #[inline]
    pub fn extract(self, pixel: u32) -> u8 {
        match self {
            RgbChannel::Red => color::red(pixel),
            RgbChannel::Green => color::green(pixel),
            RgbChannel::Blue => color::blue(pixel),
        }
    }
}

/// Packed RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl RgbRaster {
    /// Create an opaque black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(RgbRaster {
            width,
            height,
            data: vec![color::compose_rgb(0, 0, 0); size],
        })
    }

    /// Create an image from packed `0xRRGGBBAA` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        check_shape(width, height, data.len())?;
        Ok(RgbRaster {
            width,
            height,
            data,
        })
    }

    /// Create an opaque image from `(r, g, b)` triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use steglens_core::RgbRaster;
    ///
    /// let rgb = RgbRaster::from_rgb(2, 1, &[(5, 6, 7), (0, 0, 0)]).unwrap();
    /// assert_eq!(rgb.get_rgb(0, 0), Some((5, 6, 7)));
    /// ```
    pub fn from_rgb(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> Result<Self> {
        let data = pixels
            .iter()
            .map(|&(r, g, b)| color::compose_rgb(r, g, b))
            .collect();
        Self::from_data(width, height, data)
    }

    /// Replicate a grayscale raster into all three channels.
    pub fn from_gray(raster: &Raster) -> Self {
        RgbRaster {
            width: raster.width(),
            height: raster.height(),
            data: raster
                .data()
                .iter()
                .map(|&v| color::compose_rgb(v, v, v))
                .collect(),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the packed pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get the RGB triple at (x, y), or `None` when out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get the packed pixel at (x, y), or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Set the RGB triple at (x, y), keeping alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = y as usize * self.width as usize + x as usize;
        let a = color::alpha(self.data[idx]);
        self.data[idx] = color::compose_rgba(r, g, b, a);
        Ok(())
    }

    /// Map every colour channel value through `f`, keeping alpha.
    pub fn map_channels<F>(&self, f: F) -> RgbRaster
    where
        F: Fn(u8) -> u8,
    {
        self.map_pixels(|(r, g, b)| (f(r), f(g), f(b)))
    }

    /// Map every RGB triple through `f`, keeping alpha.
    pub fn map_pixels<F>(&self, f: F) -> RgbRaster
    where
        F: Fn((u8, u8, u8)) -> (u8, u8, u8),
    {
        let data = self
            .data
            .iter()
            .map(|&p| {
                let (r, g, b, a) = color::extract_rgba(p);
                let (r, g, b) = f((r, g, b));
                color::compose_rgba(r, g, b, a)
            })
            .collect();
        RgbRaster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Extract one channel as a grayscale raster.
    pub fn channel(&self, channel: RgbChannel) -> Raster {
        let data = self.data.iter().map(|&p| channel.extract(p)).collect();
        Raster::from_parts(self.width, self.height, data)
    }
}
