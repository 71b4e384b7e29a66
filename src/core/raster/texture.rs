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

//! Texture sampling
//!
//! Coordinates arriving here are already in texel units (the normalized
//! `s`/`t` of a vertex multiplied by the texture width/height). Integer
//! values sit on texel corners, so the center of texel `i` is `i + 0.5`.

use super::{TextureBlendingMode, TextureFilteringMode, TextureWrappingMode};
use crate::core::error::Result;
use crate::core::primitives::Color;
use crate::core::surface::{Geometry, PixelBuffer};

/// Fold a texel-space coordinate back onto a texture axis of `size` texels
pub fn wrap_coordinate(mode: TextureWrappingMode, value: f32, size: u32) -> f32 {
    let size = size as f32;
    match mode {
        TextureWrappingMode::Clamp => value.clamp(0.0, size - 1.0),
        TextureWrappingMode::Repeat => ((value % size) + size) % size,
        TextureWrappingMode::Mirror => {
            let period = 2.0 * size;
            let mut folded = value.abs() % period;
            if folded > size {
                folded = period - folded;
            }
            if folded == size {
                folded = 0.0;
            }
            folded
        }
    }
}

/// Integer texel index for a coordinate, saturated to `[0, size - 1]`
#[inline]
pub fn texel_index(mode: TextureWrappingMode, value: f32, size: u32) -> u32 {
    let wrapped = wrap_coordinate(mode, value, size).floor().max(0.0);
    (wrapped as u32).min(size - 1)
}

fn fetch(texture: &dyn PixelBuffer, mode: TextureWrappingMode, s: f32, t: f32) -> Result<Color> {
    let x = texel_index(mode, s, texture.width());
    let y = texel_index(mode, t, texture.height());
    texture.get_pixel(x, y)
}

/// Sample a texture at texel-space coordinates (s, t)
pub fn sample(
    texture: &dyn PixelBuffer,
    wrap: TextureWrappingMode,
    filter: TextureFilteringMode,
    s: f32,
    t: f32,
) -> Result<Color> {
    match filter {
        TextureFilteringMode::Nearest => fetch(texture, wrap, s, t),
        TextureFilteringMode::Bilinear => bilinear(texture, wrap, s, t),
    }
}

/// Blend the 2×2 texels around (s, t)
///
/// The sample point is measured from texel centers: a point left of the
/// center of its texel blends with the left neighbor, otherwise with the
/// right one (same for rows). Neighbors go through the wrap mode.
fn bilinear(texture: &dyn PixelBuffer, wrap: TextureWrappingMode, s: f32, t: f32) -> Result<Color> {
    let u = s - 0.5;
    let v = t - 0.5;
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;

    let tl = fetch(texture, wrap, x0 + 0.5, y0 + 0.5)?;
    let tr = fetch(texture, wrap, x0 + 1.5, y0 + 0.5)?;
    let bl = fetch(texture, wrap, x0 + 0.5, y0 + 1.5)?;
    let br = fetch(texture, wrap, x0 + 1.5, y0 + 1.5)?;

    let weights = [
        (1.0 - fx) * (1.0 - fy),
        fx * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * fy,
    ];
    let mix = |channel: fn(&Color) -> u8| -> u8 {
        let value = weights[0] * channel(&tl) as f32
            + weights[1] * channel(&tr) as f32
            + weights[2] * channel(&bl) as f32
            + weights[3] * channel(&br) as f32;
        value.round().clamp(0.0, 255.0) as u8
    };

    Ok(Color::with_alpha(
        mix(|c| c.r),
        mix(|c| c.g),
        mix(|c| c.b),
        mix(|c| c.a),
    ))
}

/// Combine the interpolated base color with a texel
#[inline]
pub fn blend(mode: TextureBlendingMode, base: Color, texel: Color) -> Color {
    match mode {
        TextureBlendingMode::Decal => texel,
        TextureBlendingMode::Modulate => {
            let modulate = |t: u8, b: u8| ((t as u16 * b as u16) / 255) as u8;
            Color::with_alpha(
                modulate(texel.r, base.r),
                modulate(texel.g, base.g),
                modulate(texel.b, base.b),
                modulate(texel.a, base.a),
            )
        }
    }
}
