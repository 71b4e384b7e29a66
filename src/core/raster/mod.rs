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

//! Software Rasterizer
//!
//! This module converts vertices in normalized device coordinates into pixels
//! on a [`PixelBuffer`].
//!
//! # Coordinate Mapping
//!
//! Each axis is mapped independently onto the target surface:
//!
//! ```text
//! px = round((width  - 1) * (x + 1) / 2)
//! py = round((height - 1) * (y + 1) / 2)
//! ```
//!
//! so (-1, -1) lands on pixel (0, 0) and (1, 1) on the bottom-right pixel.
//! Depth maps [-1, 1] onto the full `u16` range.
//!
//! # Primitives
//!
//! - [`Rasterizer::polyline`]: connected line segments (DDA)
//! - [`Rasterizer::triangle`]: filled triangles (barycentric, optional depth
//!   test and texture)
//!
//! # State
//!
//! The rasterizer keeps the line color, line shading mode, bound texture and
//! the texture wrap/blend/filter modes across calls until they are changed.

mod line;
pub mod texture;
mod triangle;

use super::error::{GraphicsError, Result};
use super::primitives::{Color, VertexColor};
use super::surface::{Geometry, PixelBuffer};

/// Mapped coordinates are saturated to the signed 16-bit range so runaway
/// vertices cannot produce unbounded scan loops
const COORD_LIMIT: f32 = i16::MAX as f32;

/// Line shading modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineShadingMode {
    /// Draw lines with the constant line color
    #[default]
    Constant,
    /// Interpolate between the endpoint vertex colors
    Smooth,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureWrappingMode {
    /// Clamp coordinates to the texture edge
    #[default]
    Clamp,
    /// Tile the texture
    Repeat,
    /// Tile the texture, flipping every other copy
    Mirror,
}

/// Texture blending modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureBlendingMode {
    /// Replace the pixel color with the texel
    #[default]
    Decal,
    /// Multiply the pixel color by the texel
    Modulate,
}

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilteringMode {
    /// Point sampling
    #[default]
    Nearest,
    /// Bilinear filtering over the 2×2 nearest texels
    Bilinear,
}

macro_rules! mode_from_code {
    ($mode:ty, $name:literal, [$($code:literal => $variant:path),+ $(,)?]) => {
        impl TryFrom<u32> for $mode {
            type Error = GraphicsError;

            fn try_from(code: u32) -> Result<Self> {
                match code {
                    $($code => Ok($variant),)+
                    other => Err(GraphicsError::InvalidArgument(format!(
                        "invalid {} mode {}",
                        $name, other
                    ))),
                }
            }
        }
    };
}

mode_from_code!(LineShadingMode, "line shading", [
    0 => LineShadingMode::Constant,
    1 => LineShadingMode::Smooth,
]);
mode_from_code!(TextureWrappingMode, "wrap", [
    0 => TextureWrappingMode::Clamp,
    1 => TextureWrappingMode::Repeat,
    2 => TextureWrappingMode::Mirror,
]);
mode_from_code!(TextureBlendingMode, "blend", [
    0 => TextureBlendingMode::Decal,
    1 => TextureBlendingMode::Modulate,
]);
mode_from_code!(TextureFilteringMode, "filter", [
    0 => TextureFilteringMode::Nearest,
    1 => TextureFilteringMode::Bilinear,
]);

/// Line and triangle rasterizer
///
/// The rasterizer never owns the surfaces it draws into. Target and depth
/// buffers are borrowed for a single call; the texture map is borrowed for
/// `'t`, so it must outlive the rasterizer or be unbound first.
///
/// # Examples
///
/// ```
/// use ctxgraf::core::{
///     Color, Factory, PixelBuffer, PixelFormat, Vertex, VertexColor,
/// };
///
/// let factory = Factory::new();
/// let mut surface = factory.create_buffer(PixelFormat::Rgb888, 64, 64)?;
/// let mut rasterizer = factory.create_rasterizer();
///
/// rasterizer.set_line_color(VertexColor::new(1.0, 1.0, 1.0));
/// let line = [
///     Vertex::new(-1.0, -1.0, 0.0, VertexColor::default()),
///     Vertex::new(1.0, 1.0, 0.0, VertexColor::default()),
/// ];
/// rasterizer.polyline(&mut surface, &line)?;
/// assert_eq!(surface.get_pixel(63, 63)?, Color::WHITE);
/// # Ok::<(), ctxgraf::GraphicsError>(())
/// ```
pub struct Rasterizer<'t> {
    /// Color used by [`LineShadingMode::Constant`]
    line_color: VertexColor,

    line_shading_mode: LineShadingMode,

    /// Bound texture map (borrowed, never owned)
    texture: Option<&'t dyn PixelBuffer>,

    wrap_mode: TextureWrappingMode,
    blend_mode: TextureBlendingMode,
    filter_mode: TextureFilteringMode,
}

impl<'t> Rasterizer<'t> {
    /// Create a rasterizer with default state
    ///
    /// Black constant line color, no texture, clamp/decal/nearest texturing.
    pub fn new() -> Self {
        Self {
            line_color: VertexColor::default(),
            line_shading_mode: LineShadingMode::default(),
            texture: None,
            wrap_mode: TextureWrappingMode::default(),
            blend_mode: TextureBlendingMode::default(),
            filter_mode: TextureFilteringMode::default(),
        }
    }

    pub fn set_line_color(&mut self, color: VertexColor) {
        self.line_color = color;
    }

    pub fn line_color(&self) -> VertexColor {
        self.line_color
    }

    pub fn set_line_shading_mode(&mut self, mode: LineShadingMode) {
        self.line_shading_mode = mode;
    }

    pub fn line_shading_mode(&self) -> LineShadingMode {
        self.line_shading_mode
    }

    /// Bind a texture map, or unbind with `None`
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if the surface format holds no
    /// color data (depth surfaces cannot be sampled).
    pub fn set_texture_map(&mut self, texture: Option<&'t dyn PixelBuffer>) -> Result<()> {
        if let Some(tex) = texture {
            if !tex.format().is_color() {
                return Err(GraphicsError::InvalidArgument(format!(
                    "{:?} surface cannot be used as a texture map",
                    tex.format()
                )));
            }
            log::debug!(
                "Texture map bound: {}x{} {:?}",
                tex.width(),
                tex.height(),
                tex.format()
            );
        }
        self.texture = texture;
        Ok(())
    }

    pub fn texture_map(&self) -> Option<&'t dyn PixelBuffer> {
        self.texture
    }

    /// Set the texture wrapping mode from an enum value or a raw code
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] for a code outside the enumeration.
    pub fn set_texture_wrapping_mode<M>(&mut self, mode: M) -> Result<()>
    where
        M: TryInto<TextureWrappingMode>,
        GraphicsError: From<M::Error>,
    {
        self.wrap_mode = mode.try_into()?;
        Ok(())
    }

    pub fn texture_wrapping_mode(&self) -> TextureWrappingMode {
        self.wrap_mode
    }

    /// Set the texture blending mode from an enum value or a raw code
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] for a code outside the enumeration.
    pub fn set_texture_blending_mode<M>(&mut self, mode: M) -> Result<()>
    where
        M: TryInto<TextureBlendingMode>,
        GraphicsError: From<M::Error>,
    {
        self.blend_mode = mode.try_into()?;
        Ok(())
    }

    pub fn texture_blending_mode(&self) -> TextureBlendingMode {
        self.blend_mode
    }

    /// Set the texture filtering mode from an enum value or a raw code
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] for a code outside the enumeration.
    pub fn set_texture_filtering_mode<M>(&mut self, mode: M) -> Result<()>
    where
        M: TryInto<TextureFilteringMode>,
        GraphicsError: From<M::Error>,
    {
        self.filter_mode = mode.try_into()?;
        Ok(())
    }

    pub fn texture_filtering_mode(&self) -> TextureFilteringMode {
        self.filter_mode
    }
}

impl Default for Rasterizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Rasterizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("line_color", &self.line_color)
            .field("line_shading_mode", &self.line_shading_mode)
            .field("textured", &self.texture.is_some())
            .field("wrap_mode", &self.wrap_mode)
            .field("blend_mode", &self.blend_mode)
            .field("filter_mode", &self.filter_mode)
            .finish()
    }
}

/// Map one NDC coordinate onto a surface axis of `dim` pixels
#[inline]
pub(crate) fn ndc_to_pixel(coord: f32, dim: u32) -> i64 {
    let pixel = ((dim - 1) as f32 * (coord + 1.0) / 2.0).round();
    pixel.clamp(-COORD_LIMIT, COORD_LIMIT) as i64
}

/// Map an NDC depth in [-1, 1] onto [0, 65535], rounded to the nearest step
#[inline]
pub(crate) fn ndc_to_depth(z: f32) -> f32 {
    (65535.0 * (z + 1.0) / 2.0).round().clamp(0.0, 65535.0)
}

/// Write a pixel given signed coordinates; negative ones are dropped
#[inline(always)]
pub(crate) fn plot(target: &mut dyn PixelBuffer, x: i64, y: i64, color: Color) {
    if x >= 0 && y >= 0 {
        target.draw_pixel(x as u32, y as u32, color);
    }
}
