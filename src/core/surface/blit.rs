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

//! Block transfers (BitBlt)
//!
//! Implements surface→surface copies and rectangle fills.
//!
//! # Clipping
//!
//! The destination rectangle is clipped to the destination surface and the
//! source rectangle to the source surface. The transfer uses the smaller of
//! the two clipped sizes, so a request that runs off either surface is
//! truncated rather than rejected.
//!
//! # Overlapping Copies
//!
//! When a surface is copied onto itself and the rectangles overlap, the copy
//! order is chosen so no source pixel is overwritten before it is read:
//!
//! 1. Destination below source: bottom-to-top
//! 2. Same row, destination right of source: right-to-left
//! 3. Otherwise: top-to-bottom, left-to-right
//!
//! The result matches copying through a temporary buffer without allocating
//! one.

use super::{Geometry, PixelBuffer, Surface};
use crate::core::error::{GraphicsError, Result};
use crate::core::primitives::Color;

/// Raster operation codes accepted by [`PixelBuffer::block_transfer`]
///
/// Legal codes are 0-15; only the four listed here are implemented.
pub mod rop {
    /// Fill the destination with black
    pub const BLACKNESS: u8 = 0x0;
    /// Complement the destination color channels
    pub const DSTINVERT: u8 = 0x5;
    /// Copy the source rectangle
    pub const SRCCOPY: u8 = 0xC;
    /// Fill the destination with white
    pub const WHITENESS: u8 = 0xF;
    /// Largest legal code
    pub const MAX: u8 = 0xF;
}

/// Decoded raster operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterOp {
    Blackness,
    DstInvert,
    SrcCopy,
    Whiteness,
}

impl RasterOp {
    /// Raw operation code
    pub const fn code(self) -> u8 {
        match self {
            RasterOp::Blackness => rop::BLACKNESS,
            RasterOp::DstInvert => rop::DSTINVERT,
            RasterOp::SrcCopy => rop::SRCCOPY,
            RasterOp::Whiteness => rop::WHITENESS,
        }
    }

    /// Whether the operation reads a source surface
    pub const fn needs_source(self) -> bool {
        matches!(self, RasterOp::SrcCopy)
    }
}

impl TryFrom<u8> for RasterOp {
    type Error = GraphicsError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            rop::BLACKNESS => Ok(RasterOp::Blackness),
            rop::DSTINVERT => Ok(RasterOp::DstInvert),
            rop::SRCCOPY => Ok(RasterOp::SrcCopy),
            rop::WHITENESS => Ok(RasterOp::Whiteness),
            code if code > rop::MAX => Err(GraphicsError::InvalidArgument(format!(
                "bad block transfer rop {:#X}",
                code
            ))),
            code => Err(GraphicsError::Unsupported(format!(
                "block transfer rop {:#X}",
                code
            ))),
        }
    }
}

/// Source of a block transfer
#[derive(Clone, Copy)]
pub enum BlitSource<'a> {
    /// No source; only valid for fill operations
    None,
    /// A different surface
    Other(&'a dyn PixelBuffer),
    /// The destination surface itself
    This,
}

impl std::fmt::Debug for BlitSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlitSource::None => write!(f, "None"),
            BlitSource::Other(src) => write!(
                f,
                "Other({:?} {}x{})",
                src.format(),
                src.width(),
                src.height()
            ),
            BlitSource::This => write!(f, "This"),
        }
    }
}

/// Row order of a copy within one surface
///
/// Shifts within a row need no ordering: each row goes through
/// `copy_within`, which handles overlapping ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyDirection {
    TopToBottom,
    BottomToTop,
}

/// Clip `extent` pixels starting at `origin` against `limit`
#[inline]
fn clip_extent(origin: u32, extent: u32, limit: u32) -> u32 {
    if origin >= limit {
        0
    } else {
        extent.min(limit - origin)
    }
}

/// Whether two equally sized rectangles overlap
fn rectangles_overlap(
    width: u32,
    height: u32,
    dst_x: u32,
    dst_y: u32,
    src_x: u32,
    src_y: u32,
) -> bool {
    let (w, h) = (width as u64, height as u64);
    let (dx, dy, sx, sy) = (dst_x as u64, dst_y as u64, src_x as u64, src_y as u64);
    w > 0 && h > 0 && dx < sx + w && sx < dx + w && dy < sy + h && sy < dy + h
}

fn copy_direction(dst_y: u32, src_y: u32) -> CopyDirection {
    if dst_y > src_y {
        CopyDirection::BottomToTop
    } else {
        CopyDirection::TopToBottom
    }
}

impl Surface {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn blit(
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
        let op = RasterOp::try_from(rop)?;
        if op.needs_source() && matches!(src, BlitSource::None) {
            return Err(GraphicsError::InvalidArgument(
                "block transfer source required, but none given".to_string(),
            ));
        }

        let mut width = clip_extent(dst_x, width, self.width);
        let mut height = clip_extent(dst_y, height, self.height);

        log::debug!(
            "Block transfer {:?}: {:?} ({}, {}) → ({}, {}) size {}×{}",
            op,
            src,
            src_x,
            src_y,
            dst_x,
            dst_y,
            width,
            height
        );

        match op {
            RasterOp::SrcCopy => match src {
                BlitSource::Other(src) => {
                    width = width.min(clip_extent(src_x, width, src.width()));
                    height = height.min(clip_extent(src_y, height, src.height()));
                    self.copy_from(src, width, height, dst_x, dst_y, src_x, src_y)
                }
                BlitSource::This => {
                    width = width.min(clip_extent(src_x, width, self.width));
                    height = height.min(clip_extent(src_y, height, self.height));
                    self.copy_within_self(width, height, dst_x, dst_y, src_x, src_y);
                    Ok(())
                }
                BlitSource::None => Err(GraphicsError::InternalInvariant(
                    "source-less SRCCOPY passed validation".to_string(),
                )),
            },
            RasterOp::Blackness => {
                self.fill_rect(width, height, dst_x, dst_y, Color::BLACK);
                Ok(())
            }
            RasterOp::Whiteness => {
                self.fill_rect(width, height, dst_x, dst_y, Color::WHITE);
                Ok(())
            }
            RasterOp::DstInvert => {
                self.invert_rect(width, height, dst_x, dst_y);
                Ok(())
            }
        }
    }

    /// Copy from another surface; sizes are already clipped
    #[allow(clippy::too_many_arguments)]
    fn copy_from(
        &mut self,
        src: &dyn PixelBuffer,
        width: u32,
        height: u32,
        dst_x: u32,
        dst_y: u32,
        src_x: u32,
        src_y: u32,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        if src.format() == self.format {
            let bpp = self.bytes_per_pixel() as usize;
            let len = width as usize * bpp;
            let src_pitch = src.pitch() as usize;
            let src_bytes = src.bytes();
            for row in 0..height {
                let s = (src_y + row) as usize * src_pitch + src_x as usize * bpp;
                let d = self.offset(dst_x, dst_y + row);
                self.data[d..d + len].copy_from_slice(&src_bytes[s..s + len]);
            }
            return Ok(());
        }

        // Formats differ: convert through Color
        for y in 0..height {
            for x in 0..width {
                let color = src.get_pixel(src_x + x, src_y + y)?;
                self.draw_pixel(dst_x + x, dst_y + y, color);
            }
        }
        Ok(())
    }

    /// Copy a rectangle of this surface onto itself; sizes are already clipped
    fn copy_within_self(
        &mut self,
        width: u32,
        height: u32,
        dst_x: u32,
        dst_y: u32,
        src_x: u32,
        src_y: u32,
    ) {
        if width == 0 || height == 0 {
            return;
        }

        let direction = if rectangles_overlap(width, height, dst_x, dst_y, src_x, src_y) {
            copy_direction(dst_y, src_y)
        } else {
            CopyDirection::TopToBottom
        };

        let len = width as usize * self.bytes_per_pixel() as usize;
        let copy_row = |surface: &mut Surface, row: u32| {
            let s = surface.offset(src_x, src_y + row);
            let d = surface.offset(dst_x, dst_y + row);
            surface.data.copy_within(s..s + len, d);
        };

        match direction {
            CopyDirection::BottomToTop => {
                for row in (0..height).rev() {
                    copy_row(self, row);
                }
            }
            CopyDirection::TopToBottom => {
                for row in 0..height {
                    copy_row(self, row);
                }
            }
        }
    }

    fn fill_rect(&mut self, width: u32, height: u32, dst_x: u32, dst_y: u32, color: Color) {
        for y in dst_y..dst_y + height {
            for x in dst_x..dst_x + width {
                let offset = self.offset(x, y);
                self.write_color_at(offset, color);
            }
        }
    }

    fn invert_rect(&mut self, width: u32, height: u32, dst_x: u32, dst_y: u32) {
        for y in dst_y..dst_y + height {
            for x in dst_x..dst_x + width {
                let offset = self.offset(x, y);
                let color = self.read_color_at(offset).inverted();
                self.write_color_at(offset, color);
            }
        }
    }
}
