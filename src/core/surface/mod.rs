// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Surfaces: pixel and depth storage
//!
//! A [`Surface`] owns a packed block of bytes described by a width, a height,
//! a pitch and a [`PixelFormat`]. Two capability traits expose it:
//!
//! - [`PixelBuffer`]: color access and block transfer
//! - [`DepthBuffer`]: 16-bit depth access
//!
//! # Memory Layout
//!
//! Rows are stored top to bottom, `pitch` bytes apart, with no padding:
//! `pitch = width × bytes_per_pixel`. The storage never changes size after
//! construction.
//!
//! | Format     | Bytes | Layout                          |
//! |------------|-------|---------------------------------|
//! | `Rgb888`   | 3     | R, G, B                         |
//! | `Rgba8888` | 4     | R, G, B, A                      |
//! | `Z16`      | 2     | native-endian `u16` depth value |
//!
//! # Bounds Policy
//!
//! Writes outside the surface (`draw_pixel`, `set_depth`) are silently
//! dropped. Reads outside the surface (`get_pixel`, `get_depth`) fail with
//! [`GraphicsError::OutOfRange`].

mod blit;
#[cfg(test)]
mod tests;

pub use blit::{rop, BlitSource, RasterOp};

use super::error::{GraphicsError, Result};
use super::primitives::Color;
use serde::{Deserialize, Serialize};

/// Pixel formats recognized by ctxgraf
///
/// Serialized by lowercase name (`"rgb888"`, `"rgba8888"`, `"z16"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 3 bytes per pixel, byte 0 is red
    Rgb888,
    /// 4 bytes per pixel, byte 0 is red, byte 3 is alpha
    Rgba8888,
    /// 2 bytes per pixel, a single depth value
    Z16,
}

impl PixelFormat {
    /// Bytes used by one pixel of this format
    #[inline]
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb888 => 3,
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Z16 => 2,
        }
    }

    /// Raw format code (0 = RGB888, 1 = RGBA8888, 2 = Z16)
    pub const fn code(self) -> u32 {
        match self {
            PixelFormat::Rgb888 => 0,
            PixelFormat::Rgba8888 => 1,
            PixelFormat::Z16 => 2,
        }
    }

    /// Whether color data can be sampled from this format
    pub const fn is_color(self) -> bool {
        !matches!(self, PixelFormat::Z16)
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = GraphicsError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(PixelFormat::Rgb888),
            1 => Ok(PixelFormat::Rgba8888),
            2 => Ok(PixelFormat::Z16),
            other => Err(GraphicsError::Unsupported(format!(
                "unsupported pixel format code {}",
                other
            ))),
        }
    }
}

/// Geometry shared by every surface view
pub trait Geometry {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Distance between rows in bytes
    fn pitch(&self) -> u32;

    /// Pixel format of the backing storage
    fn format(&self) -> PixelFormat;
}

/// Color view of a surface
pub trait PixelBuffer: Geometry {
    /// Set every pixel to `color`
    fn clear(&mut self, color: Color);

    /// Set the pixel at (x, y); out-of-bounds coordinates are ignored
    fn draw_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Read the pixel at (x, y)
    ///
    /// # Errors
    ///
    /// [`GraphicsError::OutOfRange`] if (x, y) is outside the surface.
    fn get_pixel(&self, x: u32, y: u32) -> Result<Color>;

    /// Perform a block transfer with this surface as the destination
    ///
    /// See [`RasterOp`] for the supported operation codes and
    /// [`BlitSource`] for how the source is designated.
    ///
    /// # Errors
    ///
    /// - [`GraphicsError::InvalidArgument`] if `rop > 15` or the operation
    ///   needs a source and `src` is [`BlitSource::None`]
    /// - [`GraphicsError::Unsupported`] if `rop` is legal but unimplemented
    #[allow(clippy::too_many_arguments)]
    fn block_transfer(
        &mut self,
        width: u32,
        height: u32,
        dst_x: u32,
        dst_y: u32,
        src: BlitSource<'_>,
        src_x: u32,
        src_y: u32,
        rop: u8,
    ) -> Result<()>;

    /// Packed surface rows
    fn bytes(&self) -> &[u8];

    /// Packed surface rows (mutable)
    fn bytes_mut(&mut self) -> &mut [u8];

    /// Raw pointer to the first byte of surface memory
    ///
    /// Intended for presentation layers that upload rows using
    /// `width`, `height` and `pitch`.
    fn start(&self) -> *const u8 {
        self.bytes().as_ptr()
    }
}

/// Depth view of a surface
///
/// The depth value occupies the first two bytes of each pixel in native
/// byte order; for [`PixelFormat::Z16`] surfaces that is the whole pixel.
pub trait DepthBuffer: Geometry {
    /// Set every cell to `value`
    fn clear_depth(&mut self, value: u16);

    /// Set the depth at (x, y); out-of-bounds coordinates are ignored
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidValue`] if `value > 0xFFFF`.
    fn set_depth(&mut self, x: u32, y: u32, value: u32) -> Result<()>;

    /// Read the depth at (x, y)
    ///
    /// # Errors
    ///
    /// [`GraphicsError::OutOfRange`] if (x, y) is outside the surface.
    fn get_depth(&self, x: u32, y: u32) -> Result<u16>;
}

/// Owned pixel storage implementing both [`PixelBuffer`] and [`DepthBuffer`]
///
/// Surfaces are created through [`crate::core::Factory`].
///
/// # Examples
///
/// ```
/// use ctxgraf::core::{Color, Factory, Geometry, PixelBuffer, PixelFormat};
///
/// let factory = Factory::new();
/// let mut surface = factory.create_buffer(PixelFormat::Rgb888, 4, 2)?;
/// assert_eq!(surface.pitch(), 12);
///
/// surface.clear(Color::new(255, 0, 0));
/// assert_eq!(surface.get_pixel(3, 1)?, Color::new(255, 0, 0));
/// # Ok::<(), ctxgraf::GraphicsError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    /// Packed rows, `pitch * height` bytes
    data: Vec<u8>,
    format: PixelFormat,
    width: u32,
    height: u32,
    pitch: u32,
}

impl Surface {
    /// Allocate a zero-filled surface
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if either dimension is zero or the
    /// byte size overflows.
    pub(crate) fn new(format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::InvalidArgument(format!(
                "invalid surface size {}x{}",
                width, height
            )));
        }

        let pitch = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| GraphicsError::InvalidArgument(format!("width {} too large", width)))?;
        let size = (pitch as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                GraphicsError::InvalidArgument(format!("surface {}x{} too large", width, height))
            })?;

        Ok(Self {
            data: vec![0; size],
            format,
            width,
            height,
            pitch,
        })
    }

    /// Bytes per pixel of this surface's format
    #[inline(always)]
    pub fn bytes_per_pixel(&self) -> u32 {
        self.format.bytes_per_pixel()
    }

    #[inline(always)]
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Byte offset of pixel (x, y); caller guarantees bounds
    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.pitch as usize + x as usize * self.bytes_per_pixel() as usize
    }

    #[inline(always)]
    fn write_color_at(&mut self, offset: usize, color: Color) {
        let bpp = self.bytes_per_pixel() as usize;
        let channels = [color.r, color.g, color.b, color.a];
        self.data[offset..offset + bpp].copy_from_slice(&channels[..bpp]);
    }

    #[inline(always)]
    fn read_color_at(&self, offset: usize) -> Color {
        let pixel = &self.data[offset..offset + self.bytes_per_pixel() as usize];
        match self.format {
            PixelFormat::Rgb888 => Color::new(pixel[0], pixel[1], pixel[2]),
            PixelFormat::Rgba8888 => Color::with_alpha(pixel[0], pixel[1], pixel[2], pixel[3]),
            PixelFormat::Z16 => Color::new(pixel[0], pixel[1], 0),
        }
    }

    fn out_of_range(&self, x: u32, y: u32) -> GraphicsError {
        GraphicsError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pitch", &self.pitch)
            .finish_non_exhaustive()
    }
}

impl Geometry for Surface {
    #[inline(always)]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn pitch(&self) -> u32 {
        self.pitch
    }

    #[inline(always)]
    fn format(&self) -> PixelFormat {
        self.format
    }
}

impl PixelBuffer for Surface {
    fn clear(&mut self, color: Color) {
        let bpp = self.bytes_per_pixel() as usize;
        let channels = [color.r, color.g, color.b, color.a];
        for pixel in self.data.chunks_exact_mut(bpp) {
            pixel.copy_from_slice(&channels[..bpp]);
        }
    }

    #[inline]
    fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if self.contains(x, y) {
            let offset = self.offset(x, y);
            self.write_color_at(offset, color);
        }
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<Color> {
        if !self.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }
        Ok(self.read_color_at(self.offset(x, y)))
    }

    fn block_transfer(
        &mut self,
        width: u32,
        height: u32,
        dst_x: u32,
        dst_y: u32,
        src: BlitSource<'_>,
        src_x: u32,
        src_y: u32,
        rop: u8,
    ) -> Result<()> {
        self.blit(width, height, dst_x, dst_y, src, src_x, src_y, rop)
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl DepthBuffer for Surface {
    fn clear_depth(&mut self, value: u16) {
        let bpp = self.bytes_per_pixel() as usize;
        let cell = value.to_ne_bytes();
        for pixel in self.data.chunks_exact_mut(bpp) {
            pixel[..2].copy_from_slice(&cell);
        }
    }

    fn set_depth(&mut self, x: u32, y: u32, value: u32) -> Result<()> {
        if !self.contains(x, y) {
            return Ok(());
        }
        let value = u16::try_from(value).map_err(|_| GraphicsError::InvalidValue { value })?;
        let offset = self.offset(x, y);
        self.data[offset..offset + 2].copy_from_slice(&value.to_ne_bytes());
        Ok(())
    }

    fn get_depth(&self, x: u32, y: u32) -> Result<u16> {
        if !self.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }
        let offset = self.offset(x, y);
        Ok(u16::from_ne_bytes([self.data[offset], self.data[offset + 1]]))
    }
}
