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

//! Headless host
//!
//! Owns the output surface, drives a draw callback once per frame and
//! presents the result as a PNG image.

use super::config::HostConfig;
use crate::core::error::{GraphicsError, Result};
use crate::core::factory::Factory;
use crate::core::surface::{Geometry, PixelBuffer, PixelFormat, Surface};
use std::path::{Path, PathBuf};

/// Frame loop driver
///
/// # Example
///
/// ```no_run
/// use ctxgraf::core::{Color, Factory, PixelBuffer};
/// use ctxgraf::frontend::{Host, HostConfig};
///
/// let factory = Factory::new();
/// let mut host = Host::new(&factory, HostConfig::default())?;
/// let written = host.run(|surface, frame, _aspect| {
///     surface.clear(Color::new((frame * 10) as u8, 0, 0));
///     Ok(())
/// })?;
/// println!("saved {}", written.display());
/// # Ok::<(), ctxgraf::GraphicsError>(())
/// ```
pub struct Host {
    config: HostConfig,
    surface: Surface,
    /// Frames rendered so far; also the number passed to the next draw call
    frame: u32,
}

impl Host {
    /// Smallest surface width the host accepts
    pub const MIN_WIDTH: u32 = 16;
    /// Smallest surface height the host accepts
    pub const MIN_HEIGHT: u32 = 16;

    /// Create a host and its output surface
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if the surface is smaller than
    /// [`Host::MIN_WIDTH`] × [`Host::MIN_HEIGHT`] or too large to allocate.
    pub fn new(factory: &Factory, config: HostConfig) -> Result<Self> {
        if config.width < Self::MIN_WIDTH || config.height < Self::MIN_HEIGHT {
            return Err(GraphicsError::InvalidArgument(format!(
                "surface {}x{} is smaller than {}x{}",
                config.width,
                config.height,
                Self::MIN_WIDTH,
                Self::MIN_HEIGHT
            )));
        }

        let surface = factory.create_buffer(config.format, config.width, config.height)?;
        log::info!(
            "Host surface {}x{} {:?}, {} frame(s)",
            config.width,
            config.height,
            config.format,
            config.frames
        );

        Ok(Self {
            config,
            surface,
            frame: 0,
        })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Number of frames rendered so far
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Width over height of the output surface
    pub fn aspect_ratio(&self) -> f32 {
        self.surface.width() as f32 / self.surface.height() as f32
    }

    /// Render one frame
    ///
    /// Calls `draw` with the surface, the current frame number and the aspect
    /// ratio, then advances the frame counter. When every frame is saved the
    /// frame is presented to its numbered file.
    pub fn render_frame<F>(&mut self, draw: &mut F) -> Result<()>
    where
        F: FnMut(&mut Surface, u32, f32) -> Result<()>,
    {
        let aspect = self.aspect_ratio();
        draw(&mut self.surface, self.frame, aspect)?;

        if self.config.save_every_frame {
            let path = self.frame_path(self.frame);
            self.present(&path)?;
        }

        log::trace!("Frame {} rendered", self.frame);
        self.frame += 1;
        Ok(())
    }

    /// Render the configured number of frames and present the result
    ///
    /// At least one frame is always rendered. Returns the path of the last
    /// image written.
    pub fn run<F>(&mut self, mut draw: F) -> Result<PathBuf>
    where
        F: FnMut(&mut Surface, u32, f32) -> Result<()>,
    {
        let frames = self.config.frames.max(1);
        for _ in 0..frames {
            self.render_frame(&mut draw)?;
        }

        if self.config.save_every_frame {
            Ok(self.frame_path(self.frame - 1))
        } else {
            let path = PathBuf::from(&self.config.output);
            self.present(&path)?;
            Ok(path)
        }
    }

    /// Save the current surface contents as a PNG image
    pub fn present(&self, path: &Path) -> Result<()> {
        let rgba = to_rgba8(&self.surface);
        let image = image::RgbaImage::from_raw(self.surface.width(), self.surface.height(), rgba)
            .ok_or_else(|| {
                GraphicsError::InternalInvariant("RGBA buffer size does not match surface".into())
            })?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved frame {} to {}", self.frame, path.display());
        Ok(())
    }

    /// `<stem>-<frame>.<ext>` next to the configured output
    fn frame_path(&self, frame: u32) -> PathBuf {
        let output = Path::new(&self.config.output);
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());
        let ext = output
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());
        output.with_file_name(format!("{}-{:04}.{}", stem, frame, ext))
    }
}

/// Convert a pixel buffer to tightly packed RGBA8
///
/// RGB888 gets opaque alpha, RGBA8888 is copied, and Z16 becomes a grey
/// level from the high byte of each depth value. Rows are read through the
/// buffer pitch.
///
/// # Example
///
/// ```
/// use ctxgraf::core::{Color, Factory, PixelBuffer, PixelFormat};
/// use ctxgraf::frontend::to_rgba8;
///
/// let factory = Factory::new();
/// let mut surface = factory.create_buffer(PixelFormat::Rgb888, 2, 1)?;
/// surface.draw_pixel(1, 0, Color::new(10, 20, 30));
///
/// let rgba = to_rgba8(&surface);
/// assert_eq!(rgba, [0, 0, 0, 255, 10, 20, 30, 255]);
/// # Ok::<(), ctxgraf::GraphicsError>(())
/// ```
pub fn to_rgba8(buffer: &dyn PixelBuffer) -> Vec<u8> {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let pitch = buffer.pitch() as usize;
    let format = buffer.format();
    let bpp = format.bytes_per_pixel() as usize;

    let mut rgba = Vec::with_capacity(width * height * 4);
    for row in buffer.bytes().chunks_exact(pitch).take(height) {
        for px in row[..width * bpp].chunks_exact(bpp) {
            let pixel = match format {
                PixelFormat::Rgb888 => [px[0], px[1], px[2], 255],
                PixelFormat::Rgba8888 => [px[0], px[1], px[2], px[3]],
                PixelFormat::Z16 => {
                    let grey = (u16::from_ne_bytes([px[0], px[1]]) >> 8) as u8;
                    [grey, grey, grey, 255]
                }
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    rgba
}
