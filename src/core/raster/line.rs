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

//! Polyline rasterization

use super::{ndc_to_pixel, plot, LineShadingMode, Rasterizer};
use crate::core::error::{GraphicsError, Result};
use crate::core::primitives::Vertex;
use crate::core::surface::{Geometry, PixelBuffer};

/// Integer division rounding to nearest, ties toward positive infinity
///
/// `den` must be positive.
#[inline(always)]
fn div_round(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}

impl Rasterizer<'_> {
    /// Draw connected line segments through `vertices`
    ///
    /// Segment `i` joins vertex `i` and `i + 1`. Pixels outside the target
    /// are dropped. Shared endpoints may be written twice.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if fewer than two vertices are given.
    pub fn polyline(&self, target: &mut dyn PixelBuffer, vertices: &[Vertex]) -> Result<()> {
        if vertices.len() < 2 {
            return Err(GraphicsError::InvalidArgument(format!(
                "polyline needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }

        log::trace!(
            "polyline: {} segments, {:?} shading",
            vertices.len() - 1,
            self.line_shading_mode
        );

        for segment in vertices.windows(2) {
            self.draw_segment(target, &segment[0], &segment[1]);
        }
        Ok(())
    }

    /// DDA along the dominant axis
    ///
    /// One pixel per step of the major axis; the minor coordinate is the
    /// rounded exact intercept, so consecutive pixels are 8-connected.
    /// Equal extents step along y.
    fn draw_segment(&self, target: &mut dyn PixelBuffer, a: &Vertex, b: &Vertex) {
        let (w, h) = (target.width(), target.height());
        let (x0, y0) = (ndc_to_pixel(a.x, w), ndc_to_pixel(a.y, h));
        let (x1, y1) = (ndc_to_pixel(b.x, w), ndc_to_pixel(b.y, h));

        let x_major = (x1 - x0).abs() > (y1 - y0).abs();
        let (major0, major1, minor0, minor1) = if x_major {
            (x0, x1, y0, y1)
        } else {
            (y0, y1, x0, x1)
        };

        let steps = (major1 - major0).abs();
        let direction = (major1 - major0).signum();
        let minor_delta = minor1 - minor0;
        let constant = self.line_color.to_color();

        for i in 0..=steps {
            let major = major0 + direction * i;
            let minor = if steps == 0 {
                minor0
            } else {
                minor0 + div_round(minor_delta * i, steps)
            };

            let color = match self.line_shading_mode {
                LineShadingMode::Constant => constant,
                LineShadingMode::Smooth => {
                    let t = if steps == 0 {
                        0.0
                    } else {
                        i as f32 / steps as f32
                    };
                    a.color.lerp(b.color, t).to_color()
                }
            };

            let (x, y) = if x_major { (major, minor) } else { (minor, major) };
            plot(target, x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primitives::{Color, VertexColor};
    use crate::core::surface::{PixelFormat, Surface};
    use proptest::prelude::*;

    const RED: VertexColor = VertexColor::new(1.0, 0.0, 0.0);

    fn target(w: u32, h: u32) -> Surface {
        Surface::new(PixelFormat::Rgb888, w, h).unwrap()
    }

    fn vertex(x: f32, y: f32) -> Vertex {
        Vertex::new(x, y, 0.0, VertexColor::default())
    }

    fn lit_pixels(surface: &Surface) -> Vec<(u32, u32)> {
        let mut lit = Vec::new();
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if surface.get_pixel(x, y).unwrap() != Color::BLACK {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(1, 2), 1);
        assert_eq!(div_round(-1, 2), 0);
        assert_eq!(div_round(-3, 2), -1);
        assert_eq!(div_round(7, 3), 2);
        assert_eq!(div_round(-7, 3), -2);
        assert_eq!(div_round(0, 5), 0);
    }

    #[test]
    fn test_polyline_needs_two_vertices() {
        let mut surface = target(8, 8);
        let r = Rasterizer::new();
        assert!(matches!(
            r.polyline(&mut surface, &[]),
            Err(GraphicsError::InvalidArgument(_))
        ));
        assert!(matches!(
            r.polyline(&mut surface, &[vertex(0.0, 0.0)]),
            Err(GraphicsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = target(11, 11);
        let mut r = Rasterizer::new();
        r.set_line_color(RED);
        r.polyline(&mut surface, &[vertex(-1.0, 0.0), vertex(1.0, 0.0)])
            .unwrap();

        let lit = lit_pixels(&surface);
        assert_eq!(lit.len(), 11);
        assert!(lit.iter().all(|&(_, y)| y == 5));
        assert_eq!(surface.get_pixel(0, 5).unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn test_diagonal_line_covers_diagonal() {
        let mut surface = target(16, 16);
        let mut r = Rasterizer::new();
        r.set_line_color(RED);
        r.polyline(&mut surface, &[vertex(-1.0, -1.0), vertex(1.0, 1.0)])
            .unwrap();

        let lit = lit_pixels(&surface);
        assert_eq!(lit.len(), 16);
        for i in 0..16 {
            assert!(lit.contains(&(i, i)));
        }
    }

    #[test]
    fn test_zero_length_segment_draws_one_pixel() {
        let mut surface = target(9, 9);
        let mut r = Rasterizer::new();
        r.set_line_color(RED);
        r.polyline(&mut surface, &[vertex(0.0, 0.0), vertex(0.0, 0.0)])
            .unwrap();
        assert_eq!(lit_pixels(&surface), vec![(4, 4)]);
    }

    #[test]
    fn test_polyline_is_connected_segments() {
        let mut surface = target(11, 11);
        let mut r = Rasterizer::new();
        r.set_line_color(RED);
        // Three sides of a square, the left edge is never drawn
        r.polyline(
            &mut surface,
            &[
                vertex(-1.0, -1.0),
                vertex(1.0, -1.0),
                vertex(1.0, 1.0),
                vertex(-1.0, 1.0),
            ],
        )
        .unwrap();

        assert_ne!(surface.get_pixel(5, 0).unwrap(), Color::BLACK);
        assert_ne!(surface.get_pixel(10, 5).unwrap(), Color::BLACK);
        assert_ne!(surface.get_pixel(5, 10).unwrap(), Color::BLACK);
        assert_eq!(surface.get_pixel(0, 5).unwrap(), Color::BLACK);
        assert_eq!(lit_pixels(&surface).len(), 11 * 3 - 2);
    }

    #[test]
    fn test_offscreen_pixels_are_dropped() {
        let mut surface = target(10, 10);
        let mut r = Rasterizer::new();
        r.set_line_color(RED);
        r.polyline(&mut surface, &[vertex(-3.0, 0.0), vertex(3.0, 0.0)])
            .unwrap();
        let lit = lit_pixels(&surface);
        assert_eq!(lit.len(), 10);
    }

    #[test]
    fn test_smooth_shading_interpolates() {
        let mut surface = target(11, 1);
        let mut r = Rasterizer::new();
        r.set_line_shading_mode(LineShadingMode::Smooth);
        let a = Vertex::new(-1.0, 0.0, 0.0, VertexColor::new(0.0, 0.0, 0.0));
        let b = Vertex::new(1.0, 0.0, 0.0, VertexColor::new(1.0, 0.0, 1.0));
        r.polyline(&mut surface, &[a, b]).unwrap();

        assert_eq!(surface.get_pixel(0, 0).unwrap(), Color::new(0, 0, 0));
        assert_eq!(surface.get_pixel(10, 0).unwrap(), Color::new(255, 0, 255));
        let mid = surface.get_pixel(5, 0).unwrap();
        assert_eq!(mid, Color::new(128, 0, 128));
    }

    #[test]
    fn test_constant_shading_ignores_vertex_colors() {
        let mut surface = target(5, 5);
        let mut r = Rasterizer::new();
        r.set_line_color(VertexColor::new(0.0, 1.0, 0.0));
        let a = Vertex::new(-1.0, -1.0, 0.0, RED);
        let b = Vertex::new(1.0, -1.0, 0.0, RED);
        r.polyline(&mut surface, &[a, b]).unwrap();
        assert_eq!(surface.get_pixel(2, 0).unwrap(), Color::new(0, 255, 0));
    }

    proptest! {
        #[test]
        fn test_segment_is_eight_connected(
            x0 in -1.0f32..=1.0,
            y0 in -1.0f32..=1.0,
            x1 in -1.0f32..=1.0,
            y1 in -1.0f32..=1.0,
        ) {
            let mut surface = target(32, 24);
            let mut r = Rasterizer::new();
            r.set_line_color(RED);
            r.polyline(&mut surface, &[vertex(x0, y0), vertex(x1, y1)]).unwrap();

            let lit = lit_pixels(&surface);
            let start = (ndc_to_pixel(x0, 32) as u32, ndc_to_pixel(y0, 24) as u32);
            let end = (ndc_to_pixel(x1, 32) as u32, ndc_to_pixel(y1, 24) as u32);
            prop_assert!(lit.contains(&start));
            prop_assert!(lit.contains(&end));

            // Every lit pixel except the ends has an 8-neighbor that is lit
            let dx = (end.0 as i64 - start.0 as i64).abs();
            let dy = (end.1 as i64 - start.1 as i64).abs();
            prop_assert_eq!(lit.len() as i64, dx.max(dy) + 1);
            for &(x, y) in &lit {
                let neighbors = lit
                    .iter()
                    .filter(|&&(nx, ny)| {
                        (nx, ny) != (x, y)
                            && (nx as i64 - x as i64).abs() <= 1
                            && (ny as i64 - y as i64).abs() <= 1
                    })
                    .count();
                prop_assert!(lit.len() == 1 || neighbors >= 1);
            }
        }
    }
}
