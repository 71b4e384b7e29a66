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

//! Triangle rasterization
//!
//! Filled triangles use the barycentric method over the clamped bounding box,
//! sampling at pixel centers. Edges shared by two triangles are owned by
//! exactly one of them, so adjacent triangles neither overlap nor leave gaps.

use super::texture;
use super::{ndc_to_depth, ndc_to_pixel, Rasterizer};
use crate::core::error::{GraphicsError, Result};
use crate::core::primitives::{Vertex, VertexColor};
use crate::core::surface::{DepthBuffer, Geometry, PixelBuffer};

/// A vertex after viewport mapping
///
/// Positions are stored doubled so pixel centers (`2 * px + 1`) stay on the
/// integer grid.
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    x: i64,
    y: i64,
    z: f32,
    color: VertexColor,
    s: f32,
    t: f32,
}

/// Twice the signed area of (a, b, p)
#[inline(always)]
fn edge_function(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> i64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

impl ScreenVertex {
    #[inline(always)]
    fn pos(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

/// Whether edge (a, b) belongs to the triangle whose third vertex is `opposite`
///
/// The edge is walked from its (y, x)-smaller endpoint to the larger one; the
/// triangle lying on the positive side owns it. A neighbor sharing the edge
/// lies on the other side, so exactly one of the two draws it.
fn owns_edge(a: &ScreenVertex, b: &ScreenVertex, opposite: &ScreenVertex) -> bool {
    let (start, end) = if (a.y, a.x) < (b.y, b.x) { (a, b) } else { (b, a) };
    edge_function(start.pos(), end.pos(), opposite.pos()) > 0
}

/// `edge` is already oriented so the interior is positive
#[inline(always)]
fn covers(edge: i64, owned: bool) -> bool {
    edge > 0 || (edge == 0 && owned)
}

impl Rasterizer<'_> {
    /// Draw a filled triangle
    ///
    /// Colors (all four channels) are interpolated across the face. With a
    /// depth buffer, a pixel is written only when its depth is strictly less
    /// than the stored value, which is then replaced. With a texture bound,
    /// `s`/`t` are interpolated and the sampled texel is blended with the
    /// face color.
    ///
    /// Degenerate (zero-area) triangles draw nothing. Coverage is decided
    /// with exact integer edge functions, so triangles sharing an edge never
    /// overlap and never leave a gap, whatever their size.
    ///
    /// # Errors
    ///
    /// [`GraphicsError::InvalidArgument`] if the depth buffer dimensions do
    /// not match the target.
    pub fn triangle(
        &self,
        target: &mut dyn PixelBuffer,
        mut depth: Option<&mut dyn DepthBuffer>,
        v1: &Vertex,
        v2: &Vertex,
        v3: &Vertex,
    ) -> Result<()> {
        let (width, height) = (target.width(), target.height());

        if let Some(depth) = depth.as_deref() {
            if depth.width() != width || depth.height() != height {
                return Err(GraphicsError::InvalidArgument(format!(
                    "depth buffer {}x{} does not match target {}x{}",
                    depth.width(),
                    depth.height(),
                    width,
                    height
                )));
            }
        }

        let (tex_w, tex_h) = match self.texture {
            Some(tex) => (tex.width() as f32, tex.height() as f32),
            None => (1.0, 1.0),
        };
        let map = |v: &Vertex| ScreenVertex {
            x: 2 * ndc_to_pixel(v.x, width),
            y: 2 * ndc_to_pixel(v.y, height),
            z: ndc_to_depth(v.z),
            color: v.color,
            s: v.s * tex_w,
            t: v.t * tex_h,
        };
        let p = [map(v1), map(v2), map(v3)];

        let area = edge_function(p[0].pos(), p[1].pos(), p[2].pos());
        if area == 0 {
            log::trace!("triangle: degenerate, skipped");
            return Ok(());
        }
        let orientation = area.signum();
        let inv_area = 1.0 / area as f64;

        // Edge i is the one opposite vertex i
        let owned = [
            owns_edge(&p[1], &p[2], &p[0]),
            owns_edge(&p[2], &p[0], &p[1]),
            owns_edge(&p[0], &p[1], &p[2]),
        ];

        let max_x = i64::from(width - 1);
        let max_y = i64::from(height - 1);
        let min_px = (p[0].x.min(p[1].x).min(p[2].x) / 2).max(0);
        let min_py = (p[0].y.min(p[1].y).min(p[2].y) / 2).max(0);
        let max_px = (p[0].x.max(p[1].x).max(p[2].x) / 2).min(max_x);
        let max_py = (p[0].y.max(p[1].y).max(p[2].y) / 2).min(max_y);
        if min_px > max_px || min_py > max_py {
            return Ok(());
        }

        log::trace!(
            "triangle: bbox ({}, {})-({}, {}), depth={}, textured={}",
            min_px,
            min_py,
            max_px,
            max_py,
            depth.is_some(),
            self.texture.is_some()
        );

        for py in min_py..=max_py {
            for px in min_px..=max_px {
                let center = (2 * px + 1, 2 * py + 1);

                let e0 = edge_function(p[1].pos(), p[2].pos(), center);
                let e1 = edge_function(p[2].pos(), p[0].pos(), center);
                let e2 = edge_function(p[0].pos(), p[1].pos(), center);

                if !(covers(e0 * orientation, owned[0])
                    && covers(e1 * orientation, owned[1])
                    && covers(e2 * orientation, owned[2]))
                {
                    continue;
                }

                let (px, py) = (px as u32, py as u32);
                let w0 = (e0 as f64 * inv_area) as f32;
                let w1 = (e1 as f64 * inv_area) as f32;
                let w2 = (e2 as f64 * inv_area) as f32;

                if let Some(depth) = depth.as_deref_mut() {
                    let z = (w0 * p[0].z + w1 * p[1].z + w2 * p[2].z)
                        .round()
                        .clamp(0.0, 65535.0) as u32;
                    if z >= depth.get_depth(px, py)? as u32 {
                        continue;
                    }
                    depth.set_depth(px, py, z)?;
                }

                let base = interpolate_color(&p, w0, w1, w2).to_color();
                let color = match self.texture {
                    Some(tex) => {
                        let s = w0 * p[0].s + w1 * p[1].s + w2 * p[2].s;
                        let t = w0 * p[0].t + w1 * p[1].t + w2 * p[2].t;
                        let texel =
                            texture::sample(tex, self.wrap_mode, self.filter_mode, s, t)?;
                        texture::blend(self.blend_mode, base, texel)
                    }
                    None => base,
                };

                target.draw_pixel(px, py, color);
            }
        }

        Ok(())
    }
}

#[inline]
fn interpolate_color(p: &[ScreenVertex; 3], w0: f32, w1: f32, w2: f32) -> VertexColor {
    let (a, b, c) = (p[0].color, p[1].color, p[2].color);
    VertexColor {
        r: w0 * a.r + w1 * b.r + w2 * c.r,
        g: w0 * a.g + w1 * b.g + w2 * c.g,
        b: w0 * a.b + w1 * b.b + w2 * c.b,
        a: w0 * a.a + w1 * b.a + w2 * c.a,
    }
}
