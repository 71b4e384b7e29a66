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

//! Test scenes
//!
//! Each scene is a family of numbered test pictures exercising one part of
//! the library:
//!
//! | Scene      | Variants | Exercises                                   |
//! |------------|----------|---------------------------------------------|
//! | `bitblt`   | 11       | clear, pixels, block transfers, raster ops  |
//! | `line`     | 12       | polylines, octants, smooth shading, clipping|
//! | `triangle` | 10       | fills, shading, depth test, degenerates     |
//! | `texture`  | 9        | wrap/filter/blend modes, odd texture sizes  |
//!
//! Scenes draw in NDC (or pixel coordinates for `bitblt`) and work on any
//! surface of at least [`Host::MIN_WIDTH`] × [`Host::MIN_HEIGHT`];
//! [`Scene::preferred_size`] gives the size they were laid out for.

use crate::core::error::{GraphicsError, Result};
use crate::core::factory::Factory;
use crate::core::primitives::{Color, Vertex, VertexColor};
use crate::core::raster::{
    LineShadingMode, Rasterizer, TextureBlendingMode, TextureFilteringMode, TextureWrappingMode,
};
use crate::core::surface::{
    rop, BlitSource, DepthBuffer, Geometry, PixelBuffer, PixelFormat, Surface,
};
use super::host::Host;
use std::f64::consts::PI;
use std::str::FromStr;

/// Available scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Bitblt,
    Line,
    Triangle,
    Texture,
}

const BITBLT_VARIANTS: &[&str] = &[
    "Clear",
    "DrawPixel",
    "BitBlt: same surface, no overlap",
    "BitBlt: different surfaces",
    "BitBlt: overlap, destination below source",
    "BitBlt: overlap, source below destination",
    "BitBlt: overlap, destination to right of source",
    "BitBlt: overlap, destination to left of source",
    "BitBlt: clip",
    "BitBlt: zero sizes",
    "BitBlt: all rops",
];

const LINE_VARIANTS: &[&str] = &[
    "Centered rectangle",
    "X-major lines, X increasing",
    "X-major lines, X decreasing",
    "Y-major lines, Y increasing",
    "Y-major lines, Y decreasing",
    "Lines at 45 degrees",
    "Counter-clockwise circle",
    "Starburst",
    "Circle drawn both ways",
    "Centered rectangle, smooth shading",
    "Counter-clockwise circle, smooth shading",
    "Polyline that needs clipping",
];

const TRIANGLE_VARIANTS: &[&str] = &[
    "Single triangle, constant color",
    "Single triangle, Gouraud shading",
    "Simple depth test",
    "Horizontal edges",
    "Many-sided polygon",
    "Rotating many-sided polygon",
    "Moderate depth test",
    "X/Y clipping",
    "Rotating many-sided polygon with depth",
    "Degenerate triangles (and one plain one)",
];

const TEXTURE_VARIANTS: &[&str] = &[
    "Decal blending, nearest filtering, clamp",
    "Modulate blending",
    "All wrapping modes",
    "Both filtering modes",
    "Both filtering modes with repeat",
    "Odd texture sizes",
    "Big textured circle",
    "Rotating big textured circle",
    "Bad state parameters",
];

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Bitblt, Scene::Line, Scene::Triangle, Scene::Texture];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Bitblt => "bitblt",
            Scene::Line => "line",
            Scene::Triangle => "triangle",
            Scene::Texture => "texture",
        }
    }

    fn variants(self) -> &'static [&'static str] {
        match self {
            Scene::Bitblt => BITBLT_VARIANTS,
            Scene::Line => LINE_VARIANTS,
            Scene::Triangle => TRIANGLE_VARIANTS,
            Scene::Texture => TEXTURE_VARIANTS,
        }
    }

    pub fn variant_count(self) -> u32 {
        self.variants().len() as u32
    }

    /// Human-readable description of a variant
    pub fn variant_name(self, variant: u32) -> Option<&'static str> {
        self.variants().get(variant as usize).copied()
    }

    /// Surface size the scene was laid out for
    pub fn preferred_size(self) -> (u32, u32) {
        match self {
            Scene::Bitblt => (640, 480),
            Scene::Line => (800, 800),
            Scene::Triangle => (768, 768),
            Scene::Texture => (864, 864),
        }
    }

    /// Draw one frame of a scene variant
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if `variant` is out of range or the
    /// surface is smaller than [`Host::MIN_WIDTH`] × [`Host::MIN_HEIGHT`],
    /// plus any error raised while drawing.
    pub fn draw(self, factory: &Factory, surface: &mut Surface, variant: u32, frame: u32) -> Result<()> {
        if surface.width() < Host::MIN_WIDTH || surface.height() < Host::MIN_HEIGHT {
            return Err(GraphicsError::InvalidArgument(format!(
                "{} scene needs at least {}x{} pixels, got {}x{}",
                self.name(),
                Host::MIN_WIDTH,
                Host::MIN_HEIGHT,
                surface.width(),
                surface.height()
            )));
        }
        if variant >= self.variant_count() {
            return Err(GraphicsError::InvalidArgument(format!(
                "{} scene has {} variants, got {}",
                self.name(),
                self.variant_count(),
                variant
            )));
        }
        match self {
            Scene::Bitblt => bitblt(factory, surface, variant, frame),
            Scene::Line => line(factory, surface, variant, frame),
            Scene::Triangle => triangle(factory, surface, variant, frame),
            Scene::Texture => texture(factory, surface, variant, frame),
        }
    }
}

impl FromStr for Scene {
    type Err = GraphicsError;

    fn from_str(name: &str) -> Result<Self> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| GraphicsError::InvalidArgument(format!("unknown scene: {}", name)))
    }
}

/// Create an RGB888 texture with the standard test pattern
///
/// Quadrants are red (top-left), green (top-right), blue (bottom-left) and
/// yellow (bottom-right). Textures at least 4×4 get a grey center covering
/// the middle half on each axis.
pub fn make_test_texture(factory: &Factory, width: u32, height: u32) -> Result<Surface> {
    const UPPER_LEFT: Color = Color::new(255, 0, 0);
    const UPPER_RIGHT: Color = Color::new(0, 255, 0);
    const LOWER_LEFT: Color = Color::new(0, 0, 255);
    const LOWER_RIGHT: Color = Color::new(255, 255, 0);
    const MIDDLE: Color = Color::new(127, 127, 127);

    let mut texture = factory.create_buffer(PixelFormat::Rgb888, width, height)?;
    let has_center = width >= 4 && height >= 4;

    for y in 0..height {
        for x in 0..width {
            let in_center = x >= width / 4 && x < width * 3 / 4 && y >= height / 4 && y < height * 3 / 4;
            let color = if has_center && in_center {
                MIDDLE
            } else {
                match (x >= width / 2, y >= height / 2) {
                    (false, false) => UPPER_LEFT,
                    (true, false) => UPPER_RIGHT,
                    (false, true) => LOWER_LEFT,
                    (true, true) => LOWER_RIGHT,
                }
            };
            texture.draw_pixel(x, y, color);
        }
    }
    Ok(texture)
}

// ----------------------------------------------------------------------------
// Shared helpers
// ----------------------------------------------------------------------------

/// Vertices on a circle, each `angle_delta` radians counter-clockwise from
/// the previous one
///
/// Colors and texture coordinates follow the angle relative to `start_angle`,
/// so a rotating circle keeps its shading and texture attached.
fn circle_vertices(count: usize, radius: f64, angle_delta: f64, start_angle: f64) -> Vec<Vertex> {
    (0..count)
        .map(|i| {
            let angle = start_angle + angle_delta * i as f64;
            let relative = angle - start_angle;
            let u = ((relative.cos() + 1.0) / 2.0) as f32;
            let v = ((relative.sin() + 1.0) / 2.0) as f32;
            Vertex::new(
                (angle.cos() * radius) as f32,
                (angle.sin() * radius) as f32,
                0.0,
                VertexColor::new(u, 0.5, v),
            )
            .with_tex(u, v)
        })
        .collect()
}

/// Shorter-lived copy of an optional depth buffer, for one draw call
fn reborrow<'a>(depth: &'a mut Option<&mut dyn DepthBuffer>) -> Option<&'a mut dyn DepthBuffer> {
    depth.as_mut().map(|d| &mut **d as &mut dyn DepthBuffer)
}

/// Two triangles (v0, v1, v2) and (v0, v2, v3)
fn quad(
    r: &Rasterizer<'_>,
    target: &mut dyn PixelBuffer,
    mut depth: Option<&mut dyn DepthBuffer>,
    v: &[Vertex; 4],
) -> Result<()> {
    r.triangle(target, reborrow(&mut depth), &v[0], &v[1], &v[2])?;
    r.triangle(target, depth, &v[0], &v[2], &v[3])
}

/// Triangle fan from each perimeter edge to `center`, closing the loop
fn fan(
    r: &Rasterizer<'_>,
    target: &mut dyn PixelBuffer,
    mut depth: Option<&mut dyn DepthBuffer>,
    perimeter: &[Vertex],
    center: &Vertex,
) -> Result<()> {
    for (i, v) in perimeter.iter().enumerate() {
        let next = &perimeter[(i + 1) % perimeter.len()];
        r.triangle(target, reborrow(&mut depth), v, next, center)?;
    }
    Ok(())
}

fn vertex(x: f32, y: f32, z: f32, color: VertexColor) -> Vertex {
    Vertex::new(x, y, z, color)
}

fn rgb(r: f32, g: f32, b: f32) -> VertexColor {
    VertexColor::new(r, g, b)
}

// ----------------------------------------------------------------------------
// bitblt
// ----------------------------------------------------------------------------

/// Framed test rectangle: red top/left border, green bottom/right border,
/// white, cyan, magenta and grey quadrants
fn draw_test_rectangle(surface: &mut dyn PixelBuffer, left: u32, top: u32, width: u32, height: u32) {
    if left >= surface.width() || top >= surface.height() {
        log::warn!("Test rectangle out of bounds ({}, {})", left, top);
        return;
    }
    if width == 0 || height == 0 {
        log::warn!("Test rectangle has zero area ({} x {})", width, height);
        return;
    }

    for y in 0..height {
        for x in 0..width {
            let color = if x < 2 || y < 2 {
                Color::new(255, 0, 0)
            } else if x >= width.saturating_sub(2) || y >= height.saturating_sub(2) {
                Color::new(0, 255, 0)
            } else {
                match (x < width / 2, y < height / 2) {
                    (true, true) => Color::new(255, 255, 255),
                    (true, false) => Color::new(255, 0, 255),
                    (false, true) => Color::new(0, 255, 255),
                    (false, false) => Color::new(127, 127, 127),
                }
            };
            surface.draw_pixel(x + left, y + top, color);
        }
    }
}

fn bitblt(factory: &Factory, surface: &mut Surface, variant: u32, _frame: u32) -> Result<()> {
    let (w, h) = (surface.width(), surface.height());
    surface.clear(Color::BLACK);

    match variant {
        0 => surface.clear(Color::new(255, 0, 0)),
        1 => {
            for y in (0..h + 2).step_by(4) {
                for x in (0..w + 2).step_by(4) {
                    let color = Color::new(
                        (255.0 * x as f64 / (w - 2) as f64) as u8,
                        (255.0 * y as f64 / (h - 2) as f64) as u8,
                        (255.0 * w.saturating_sub(x) as f64 / w as f64) as u8,
                    );
                    surface.draw_pixel(x, y, color);
                    surface.draw_pixel(x + 1, y, color);
                    surface.draw_pixel(x, y + 1, color);
                    surface.draw_pixel(x + 1, y + 1, color);
                }
            }
        }
        2 => {
            draw_test_rectangle(surface, 32, 32, 200, 150);
            surface.block_transfer(200, 150, 300, 100, BlitSource::This, 32, 32, rop::SRCCOPY)?;
        }
        3 => {
            let mut source = factory.create_buffer(surface.format(), w, h)?;
            draw_test_rectangle(&mut source, 10, 20, 200, 150);
            surface.block_transfer(200, 150, 32, 32, BlitSource::Other(&source), 10, 20, rop::SRCCOPY)?;
        }
        4..=7 => {
            let (dst_x, dst_y) = match variant {
                4 => (220, 110),
                5 => (180, 90),
                6 => (232, 100),
                _ => (168, 100),
            };
            draw_test_rectangle(surface, 200, 100, 192, 192);
            surface.block_transfer(192, 192, dst_x, dst_y, BlitSource::This, 200, 100, rop::SRCCOPY)?;
        }
        8 => {
            draw_test_rectangle(surface, 0, 0, 300, 300);
            let dst_x = w.saturating_sub(300) + 100;
            let dst_y = h.saturating_sub(300) + 100;
            surface.block_transfer(300, 300, dst_x, dst_y, BlitSource::This, 0, 0, rop::SRCCOPY)?;
        }
        9 => {
            draw_test_rectangle(surface, 200, 100, 192, 192);
            surface.block_transfer(192, 0, 500, 110, BlitSource::This, 200, 100, rop::SRCCOPY)?;
            surface.block_transfer(0, 192, 400, 90, BlitSource::This, 200, 100, rop::SRCCOPY)?;
            surface.block_transfer(0, 0, 201, 101, BlitSource::This, 200, 100, rop::SRCCOPY)?;
        }
        _ => {
            surface.clear(Color::new(127, 127, 127));
            draw_test_rectangle(surface, 100, 100, 100, 100);
            draw_test_rectangle(surface, 300, 100, 100, 100);
            draw_test_rectangle(surface, 100, 300, 100, 100);
            surface.block_transfer(100, 100, 300, 300, BlitSource::This, 100, 100, rop::SRCCOPY)?;
            surface.block_transfer(100, 100, 100, 100, BlitSource::None, 0, 0, rop::BLACKNESS)?;
            surface.block_transfer(100, 100, 300, 100, BlitSource::None, 0, 0, rop::WHITENESS)?;
            surface.block_transfer(100, 100, 100, 300, BlitSource::None, 0, 0, rop::DSTINVERT)?;
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// line
// ----------------------------------------------------------------------------

fn line(factory: &Factory, surface: &mut Surface, variant: u32, _frame: u32) -> Result<()> {
    const CIRCLE_POINTS: usize = 36;

    surface.clear(Color::new(63, 63, 63));
    let mut r = factory.create_rasterizer();

    match variant {
        0 | 9 => {
            let outline: Vec<Vertex> = (0..5)
                .map(|i| {
                    let x = if i == 1 || i == 2 { 0.5 } else { -0.5 };
                    let y = if i == 2 || i == 3 { 0.3 } else { -0.3 };
                    vertex(x, y, 0.0, rgb(0.25 * i as f32, 0.25 * (4 - i) as f32, 0.0))
                })
                .collect();
            r.set_line_color(rgb(1.0, 0.0, 0.0));
            if variant == 9 {
                r.set_line_shading_mode(LineShadingMode::Smooth);
            }
            r.polyline(surface, &outline)?;
        }
        1..=4 => {
            let x_major = variant <= 2;
            let decreasing = variant % 2 == 0;
            r.set_line_color(if decreasing { rgb(0.0, 1.0, 1.0) } else { rgb(1.0, 0.0, 1.0) });

            for i in 0..6 {
                let near = -0.25 + i as f32 * 0.1;
                let far = -0.75 + i as f32 * 0.3;
                let (a, b) = if x_major {
                    ((-0.25, near), (-0.25 + 0.51, far))
                } else {
                    ((near, -0.25), (far, -0.25 + 0.51))
                };
                let (start, end) = if decreasing { (b, a) } else { (a, b) };
                let black = VertexColor::default();
                r.polyline(
                    surface,
                    &[vertex(start.0, start.1, 0.0, black), vertex(end.0, end.1, 0.0, black)],
                )?;
            }
        }
        5 => {
            let points = [
                (0.9, 0.9),
                (-0.9, -0.9),
                (0.9, -0.9),
                (-0.9, 0.9),
                (-0.9, 0.0),
                (0.0, 0.9),
                (0.9, 0.0),
            ];
            let path: Vec<Vertex> = points
                .iter()
                .map(|&(x, y)| vertex(x, y, 0.0, VertexColor::default()))
                .collect();
            r.set_line_color(rgb(0.5, 1.0, 0.5));
            r.polyline(surface, &path)?;
        }
        6 | 7 | 10 => {
            let turns = if variant == 7 { 13.0 } else { 1.0 };
            let delta = 2.0 * PI / CIRCLE_POINTS as f64 * turns;
            let path = circle_vertices(CIRCLE_POINTS + 1, 0.7, delta, 0.0);
            r.set_line_color(rgb(1.0, 1.0, 1.0));
            if variant == 10 {
                r.set_line_shading_mode(LineShadingMode::Smooth);
            }
            r.polyline(surface, &path)?;
        }
        8 => {
            let delta = 2.0 * PI / CIRCLE_POINTS as f64;

            let ccw = circle_vertices(CIRCLE_POINTS + 1, 0.7, delta, 0.0);
            r.set_line_color(rgb(1.0, 0.0, 0.0));
            r.polyline(surface, &ccw)?;

            // Same circle clockwise, final segment left out
            let cw = circle_vertices(CIRCLE_POINTS + 1, 0.7, -delta, 0.0);
            r.set_line_color(rgb(0.0, 1.0, 0.0));
            r.polyline(surface, &cw[..CIRCLE_POINTS])?;
        }
        _ => {
            let delta = 2.0 * PI / CIRCLE_POINTS as f64 * 13.0;
            let path = circle_vertices(CIRCLE_POINTS + 1, 1.3, delta, 0.0);
            r.set_line_color(rgb(1.0, 1.0, 1.0));
            r.set_line_shading_mode(LineShadingMode::Smooth);
            r.polyline(surface, &path)?;
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// triangle
// ----------------------------------------------------------------------------

fn triangle(factory: &Factory, surface: &mut Surface, variant: u32, frame: u32) -> Result<()> {
    const FRAME_ANGLE_DELTA: f64 = 0.1;

    surface.clear(Color::new(15, 15, 63));
    let r = factory.create_rasterizer();
    let mut depth = factory.create_depth_buffer(surface.width(), surface.height())?;
    depth.clear_depth(u16::MAX);

    match variant {
        0 | 1 => {
            let colors = if variant == 0 {
                [rgb(1.0, 0.5, 0.8); 3]
            } else {
                [rgb(1.0, 0.0, 0.0), rgb(0.0, 0.0, 1.0), rgb(0.0, 1.0, 0.0)]
            };
            r.triangle(
                surface,
                None,
                &vertex(-0.5, -0.5, 0.0, colors[0]),
                &vertex(0.4, -0.3, 0.0, colors[1]),
                &vertex(-0.1, 0.4, 0.0, colors[2]),
            )?;
        }
        2 => {
            r.triangle(
                surface,
                Some(&mut depth),
                &vertex(-0.5, -0.5, 0.0, rgb(0.0, 1.0, 0.0)),
                &vertex(0.4, -0.3, 0.0, rgb(0.0, 0.0, 1.0)),
                &vertex(-0.1, 0.4, 0.0, rgb(0.0, 1.0, 1.0)),
            )?;
            let red = rgb(1.0, 0.0, 0.0);
            r.triangle(
                surface,
                Some(&mut depth),
                &vertex(-0.6, -0.6, 0.1, red),
                &vertex(0.5, -0.3, 0.1, red),
                &vertex(-0.2, 0.2, 0.1, red),
            )?;
        }
        3 => {
            let color = rgb(0.1, 0.9, 1.0);
            r.triangle(
                surface,
                None,
                &vertex(-0.2, -0.2, 0.0, color),
                &vertex(0.1, -0.2, 0.0, color),
                &vertex(-0.2, 0.1, 0.0, color),
            )?;
            r.triangle(
                surface,
                None,
                &vertex(0.2, 0.2, 0.0, color),
                &vertex(-0.1, 0.2, 0.0, color),
                &vertex(0.2, -0.1, 0.0, color),
            )?;
        }
        4 | 5 => {
            const POINTS: usize = 24;
            let start = if variant == 5 {
                frame as f64 * FRAME_ANGLE_DELTA
            } else {
                0.1
            };
            let perimeter = circle_vertices(POINTS, 0.6, 2.0 * PI / POINTS as f64, start);
            let center = vertex(0.0, 0.0, 0.0, rgb(1.0, 1.0, 1.0));
            fan(&r, surface, None, &perimeter, &center)?;
        }
        6 => {
            let near = [
                vertex(-0.25, -0.25, -0.1, rgb(0.0, 1.0, 0.0)),
                vertex(0.25, -0.25, -0.1, rgb(1.0, 1.0, 0.0)),
                vertex(0.25, 0.25, -0.1, rgb(1.0, 1.0, 0.0)),
                vertex(-0.25, 0.25, -0.1, rgb(0.0, 1.0, 0.0)),
            ];
            let far = [
                vertex(-0.35, -0.35, 0.1, rgb(1.0, 0.0, 0.0)),
                vertex(0.35, -0.35, 0.1, rgb(1.0, 0.0, 0.0)),
                vertex(0.35, 0.35, 0.1, rgb(0.5, 0.0, 1.0)),
                vertex(-0.35, 0.35, 0.1, rgb(0.5, 0.0, 1.0)),
            ];
            let penetrating = [
                vertex(-0.15, -0.45, 0.3, rgb(0.5, 0.5, 0.5)),
                vertex(0.15, -0.45, -0.2, rgb(0.7, 0.7, 0.7)),
                vertex(0.15, 0.45, -0.2, rgb(0.7, 0.7, 0.7)),
                vertex(-0.15, 0.45, 0.3, rgb(0.5, 0.5, 0.5)),
            ];
            quad(&r, surface, Some(&mut depth), &near)?;
            quad(&r, surface, Some(&mut depth), &far)?;
            quad(&r, surface, Some(&mut depth), &penetrating)?;
        }
        7 => {
            r.triangle(
                surface,
                None,
                &vertex(0.5, -1.2, 0.0, rgb(1.0, 0.0, 0.0)),
                &vertex(-1.4, -0.3, 0.0, rgb(0.0, 0.0, 1.0)),
                &vertex(0.1, 1.4, 0.0, rgb(0.0, 1.0, 0.0)),
            )?;
        }
        8 => {
            const POINTS: usize = 36;
            let start = frame as f64 * FRAME_ANGLE_DELTA;
            let mut perimeter = circle_vertices(POINTS, 0.45, 2.0 * PI / POINTS as f64, start);
            // Perimeter is nearer than the center
            for v in &mut perimeter {
                v.z = -0.2;
            }
            let center = vertex(0.0, 0.0, 0.0, rgb(1.0, 1.0, 1.0));
            fan(&r, surface, Some(&mut depth), &perimeter, &center)?;

            let penetrating = [
                vertex(-0.15, -0.55, 0.2, rgb(0.5, 0.5, 0.5)),
                vertex(0.15, -0.55, -0.3, rgb(0.7, 0.7, 0.7)),
                vertex(0.15, 0.55, -0.3, rgb(0.7, 0.7, 0.7)),
                vertex(-0.15, 0.55, 0.2, rgb(0.5, 0.5, 0.5)),
            ];
            quad(&r, surface, Some(&mut depth), &penetrating)?;
        }
        _ => {
            let little = circle_vertices(3, 0.1, 2.0 * PI / 3.0, 0.1 * frame as f64);
            r.triangle(surface, None, &little[0], &little[1], &little[2])?;

            let (red, yellow, magenta) = (rgb(1.0, 0.0, 0.0), rgb(1.0, 1.0, 0.0), rgb(1.0, 0.0, 1.0));
            let degenerates = [
                // Coincident
                [(-0.5, -0.6), (-0.5, -0.6), (-0.5, -0.6)],
                // Horizontal line
                [(-0.5, -0.4), (0.0, -0.4), (0.2, -0.4)],
                // Vertical line
                [(0.5, 0.6), (0.5, -0.6), (0.5, 0.1)],
                // Diagonal line
                [(-0.5, -0.6), (-0.1, -0.2), (-0.3, -0.4)],
            ];
            for [a, b, c] in degenerates {
                r.triangle(
                    surface,
                    None,
                    &vertex(a.0, a.1, 0.0, red),
                    &vertex(b.0, b.1, 0.0, yellow),
                    &vertex(c.0, c.1, 0.0, magenta),
                )?;
            }
        }
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// texture
// ----------------------------------------------------------------------------

/// Axis-aligned square with corner colors and the full texture
fn axis_square(y_offset: f32) -> [Vertex; 4] {
    [
        vertex(-0.5, -0.5 + y_offset, 0.0, rgb(1.0, 1.0, 1.0)).with_tex(0.0, 0.0),
        vertex(-0.3, -0.5 + y_offset, 0.0, rgb(1.0, 0.0, 0.0)).with_tex(1.0, 0.0),
        vertex(-0.3, -0.3 + y_offset, 0.0, rgb(0.0, 1.0, 0.0)).with_tex(1.0, 1.0),
        vertex(-0.5, -0.3 + y_offset, 0.0, rgb(0.0, 0.0, 1.0)).with_tex(0.0, 1.0),
    ]
}

/// Square rotated by 45 degrees
fn diamond(y_offset: f32, colors: [VertexColor; 4]) -> [Vertex; 4] {
    [
        vertex(0.5, -0.5 + y_offset, 0.0, colors[0]).with_tex(0.0, 0.0),
        vertex(0.6, -0.4 + y_offset, 0.0, colors[1]).with_tex(1.0, 0.0),
        vertex(0.5, -0.3 + y_offset, 0.0, colors[2]).with_tex(1.0, 1.0),
        vertex(0.4, -0.4 + y_offset, 0.0, colors[3]).with_tex(0.0, 1.0),
    ]
}

fn texture(factory: &Factory, surface: &mut Surface, variant: u32, frame: u32) -> Result<()> {
    surface.clear(Color::new(15, 47, 15));

    match variant {
        0 | 1 | 5 => {
            let standard = make_test_texture(factory, 16, 16)?;
            let odd = [
                make_test_texture(factory, 3, 5)?,
                make_test_texture(factory, 7, 12)?,
                make_test_texture(factory, 111, 42)?,
            ];
            let odd_sizes = variant == 5;

            let mut r = factory.create_rasterizer();
            r.set_texture_map(Some(&standard))?;
            if variant == 1 {
                r.set_texture_blending_mode(TextureBlendingMode::Modulate)?;
            }

            if odd_sizes {
                r.set_texture_map(Some(&odd[0]))?;
            }
            quad(&r, surface, None, &axis_square(0.0))?;

            if odd_sizes {
                r.set_texture_map(Some(&odd[1]))?;
            }
            let shades = [rgb(0.8, 0.8, 0.8), rgb(1.0, 0.5, 0.5), rgb(0.5, 0.5, 0.5), rgb(0.1, 0.1, 0.1)];
            quad(&r, surface, None, &diamond(0.0, shades))?;

            if odd_sizes {
                r.set_texture_map(Some(&odd[2]))?;
            }
            r.triangle(
                surface,
                None,
                &vertex(-0.5, 0.5, 0.0, rgb(0.6, 0.6, 0.6)).with_tex(0.0, 0.0),
                &vertex(0.4, 0.4, 0.0, rgb(1.0, 0.0, 0.0)).with_tex(1.0, 0.5),
                &vertex(-0.4, 0.7, 0.0, rgb(0.0, 1.0, 0.0)).with_tex(0.0, 1.0),
            )?;
        }
        2 => {
            let pattern = make_test_texture(factory, 32, 32)?;
            let mut r = factory.create_rasterizer();
            r.set_texture_map(Some(&pattern))?;

            let pink = rgb(1.0, 0.5, 0.8);
            let modes = [
                TextureWrappingMode::Clamp,
                TextureWrappingMode::Repeat,
                TextureWrappingMode::Mirror,
            ];
            for (i, mode) in modes.into_iter().enumerate() {
                r.set_texture_wrapping_mode(mode)?;
                let dx = i as f32 * 0.5;
                let square = [
                    vertex(-0.5 + dx, -0.2, 0.0, pink).with_tex(-1.0, -1.0),
                    vertex(-0.3 + dx, 0.0, 0.0, pink).with_tex(2.0, -1.0),
                    vertex(-0.5 + dx, 0.2, 0.0, pink).with_tex(2.0, 2.0),
                    vertex(-0.7 + dx, 0.0, 0.0, pink).with_tex(-1.0, 2.0),
                ];
                quad(&r, surface, None, &square)?;
            }
        }
        3 | 4 => {
            let little = make_test_texture(factory, 2, 2)?;
            let bigger = make_test_texture(factory, 8, 8)?;
            let mut r = factory.create_rasterizer();
            if variant == 4 {
                r.set_texture_wrapping_mode(TextureWrappingMode::Repeat)?;
            }

            let filters = [TextureFilteringMode::Nearest, TextureFilteringMode::Bilinear];
            for (i, filter) in filters.into_iter().enumerate() {
                r.set_texture_filtering_mode(filter)?;
                let dy = i as f32;

                r.set_texture_map(Some(&little))?;
                quad(&r, surface, None, &axis_square(dy))?;

                r.set_texture_map(Some(&bigger))?;
                quad(&r, surface, None, &diamond(dy, [rgb(1.0, 0.5, 0.8); 4]))?;
            }
        }
        6 | 7 => {
            const POINTS: usize = 36;
            let pattern = make_test_texture(factory, 16, 16)?;
            let mut r = factory.create_rasterizer();
            r.set_texture_map(Some(&pattern))?;

            let start = if variant == 7 { frame as f64 * 0.1 } else { 0.1 };
            let perimeter = circle_vertices(POINTS, 0.75, 2.0 * PI / POINTS as f64, start);
            let center = vertex(0.0, 0.0, 0.0, rgb(1.0, 1.0, 1.0)).with_tex(0.5, 0.5);
            fan(&r, surface, None, &perimeter, &center)?;
        }
        _ => {
            let pattern = make_test_texture(factory, 16, 16)?;
            let mut r = factory.create_rasterizer();
            r.set_texture_map(Some(&pattern))?;

            let outcomes = [
                r.set_texture_blending_mode(2u32),
                r.set_texture_filtering_mode(2u32),
                r.set_texture_wrapping_mode(3u32),
            ];
            let missed = outcomes.iter().any(|o| o.is_ok());
            let wrong = outcomes
                .iter()
                .any(|o| matches!(o, Err(e) if !matches!(e, GraphicsError::InvalidArgument(_))));
            for outcome in &outcomes {
                if let Err(e) = outcome {
                    log::info!("Rejected as expected: {}", e);
                }
            }

            r.set_texture_map(None)?;
            let verdict = if missed {
                rgb(1.0, 0.0, 0.0)
            } else if wrong {
                rgb(1.0, 1.0, 0.0)
            } else {
                rgb(0.0, 1.0, 0.0)
            };
            r.triangle(
                surface,
                None,
                &vertex(0.0, -0.3, 0.0, verdict),
                &vertex(0.2, 0.3, 0.0, verdict),
                &vertex(-0.2, 0.3, 0.0, verdict),
            )?;
        }
    }
    Ok(())
}
