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

//! Primitive type definitions
//!
//! Colors and vertices shared by surfaces and the rasterizer.

/// A 32-bit RGBA color stored in surfaces
///
/// # Examples
///
/// ```
/// use ctxgraf::core::Color;
///
/// let color = Color::new(255, 128, 64);
/// assert_eq!(color.a, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255), ignored by formats without alpha
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create an opaque color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Complement the color channels, leaving alpha untouched
    #[inline]
    pub fn inverted(self) -> Self {
        Self {
            r: !self.r,
            g: !self.g,
            b: !self.b,
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Floating-point vertex color, channels nominally in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VertexColor {
    /// Create an opaque vertex color
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Saturate r, g and b to [0.0, 1.0]
    ///
    /// Alpha is left untouched.
    pub fn clamp(&mut self) {
        self.r = self.r.clamp(0.0, 1.0);
        self.g = self.g.clamp(0.0, 1.0);
        self.b = self.b.clamp(0.0, 1.0);
    }

    /// Linear interpolation between two colors, `t` in [0.0, 1.0]
    #[inline]
    pub fn lerp(self, other: VertexColor, t: f32) -> VertexColor {
        VertexColor {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to an 8-bit color
    ///
    /// Every channel (alpha included) is saturated before scaling so
    /// out-of-range inputs cannot wrap.
    #[inline]
    pub fn to_color(self) -> Color {
        Color {
            r: unit_to_byte(self.r),
            g: unit_to_byte(self.g),
            b: unit_to_byte(self.b),
            a: unit_to_byte(self.a),
        }
    }
}

impl Default for VertexColor {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

#[inline]
fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A vertex in normalized device coordinates
///
/// On-screen positions lie in [-1.0, 1.0] on each axis. Texture coordinates
/// are unbounded; the wrap mode folds them back into the texture.
///
/// # Examples
///
/// ```
/// use ctxgraf::core::{Vertex, VertexColor};
///
/// let v = Vertex::new(0.0, 0.5, 0.0, VertexColor::new(1.0, 0.0, 0.0)).with_tex(0.25, 0.75);
/// assert_eq!(v.s, 0.25);
/// assert_eq!(v.t, 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub color: VertexColor,
    /// Normal (carried through, not used by rasterization)
    pub xn: f32,
    pub yn: f32,
    pub zn: f32,
    /// Texture coordinates
    pub s: f32,
    pub t: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32, color: VertexColor) -> Self {
        Self {
            x,
            y,
            z,
            color,
            ..Self::default()
        }
    }

    /// Builder-style texture coordinate assignment
    pub fn with_tex(mut self, s: f32, t: f32) -> Self {
        self.s = s;
        self.t = t;
        self
    }
}
