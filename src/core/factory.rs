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

//! Object factory
//!
//! Entry point for creating surfaces and rasterizers. The factory holds no
//! state; independent factories are interchangeable.

use super::error::{GraphicsError, Result};
use super::raster::Rasterizer;
use super::surface::{PixelFormat, Surface};

/// Creates surfaces and rasterizers
///
/// # Examples
///
/// ```
/// use ctxgraf::core::{DepthBuffer, Factory, PixelFormat};
///
/// let factory = Factory::new();
/// let color = factory.create_buffer(PixelFormat::Rgba8888, 320, 240)?;
/// let mut depth = factory.create_depth_buffer(320, 240)?;
/// depth.clear_depth(0xFFFF);
///
/// // Raw format codes are accepted too
/// assert!(factory.create_buffer(7u32, 16, 16).is_err());
/// # Ok::<(), ctxgraf::GraphicsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Self {
        Self
    }

    /// Create a zero-filled surface
    ///
    /// # Arguments
    ///
    /// * `format` - A [`PixelFormat`] or its raw code
    /// * `width`, `height` - Dimensions in pixels, both non-zero
    ///
    /// # Errors
    ///
    /// - [`GraphicsError::Unsupported`] for an unknown format code
    /// - [`GraphicsError::InvalidArgument`] for zero or oversized dimensions
    pub fn create_buffer<F>(&self, format: F, width: u32, height: u32) -> Result<Surface>
    where
        F: TryInto<PixelFormat>,
        GraphicsError: From<F::Error>,
    {
        let format = format.try_into()?;
        let surface = Surface::new(format, width, height)?;
        log::debug!("Created {:?} surface {}x{}", format, width, height);
        Ok(surface)
    }

    /// Create a 16-bit depth surface
    ///
    /// The buffer starts zero-filled; clear it to the far value before use.
    pub fn create_depth_buffer(&self, width: u32, height: u32) -> Result<Surface> {
        self.create_buffer(PixelFormat::Z16, width, height)
    }

    /// Create a rasterizer with default state
    pub fn create_rasterizer<'t>(&self) -> Rasterizer<'t> {
        log::debug!("Created rasterizer");
        Rasterizer::new()
    }
}
