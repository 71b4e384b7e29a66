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

//! ctxgraf: a CPU software rasterizer
//!
//! This crate draws into in-memory pixel surfaces without any GPU.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`core`]: Surfaces, block transfers, the rasterizer and the factory
//! - [`frontend`]: Headless host and test scenes that save frames as PNG
//!
//! # Example
//!
//! ```
//! use ctxgraf::core::{
//!     Color, DepthBuffer, Factory, PixelBuffer, PixelFormat, Vertex, VertexColor,
//! };
//!
//! let factory = Factory::new();
//! let mut surface = factory.create_buffer(PixelFormat::Rgb888, 64, 64)?;
//! let mut depth = factory.create_depth_buffer(64, 64)?;
//! let rasterizer = factory.create_rasterizer();
//!
//! surface.clear(Color::BLACK);
//! depth.clear_depth(0xFFFF);
//!
//! let red = VertexColor::new(1.0, 0.0, 0.0);
//! rasterizer.triangle(
//!     &mut surface,
//!     Some(&mut depth),
//!     &Vertex::new(-0.8, -0.8, 0.0, red),
//!     &Vertex::new(0.8, -0.8, 0.0, red),
//!     &Vertex::new(0.0, 0.8, 0.0, red),
//! )?;
//! assert_eq!(surface.get_pixel(32, 32)?, Color::new(255, 0, 0));
//! # Ok::<(), ctxgraf::GraphicsError>(())
//! ```
//!
//! # Modules
//!
//! - [`core::surface`]: Pixel formats, [`core::PixelBuffer`] and
//!   [`core::DepthBuffer`] views, block transfers
//! - [`core::raster`]: Polylines, triangles, texture sampling
//! - [`core::factory`]: Object construction
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`] which is an alias for
//! `Result<T, GraphicsError>`.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{GraphicsError, Result};
