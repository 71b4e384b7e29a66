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

//! Core rendering components
//!
//! - [`surface`]: pixel/depth storage and block transfers
//! - [`raster`]: line and triangle rasterization, texture sampling
//! - [`factory`]: construction of surfaces and rasterizers
//! - [`primitives`]: colors and vertices
//! - [`error`]: error type shared by every operation

pub mod error;
pub mod factory;
pub mod primitives;
pub mod raster;
pub mod surface;

pub use error::{GraphicsError, Result};
pub use factory::Factory;
pub use primitives::{Color, Vertex, VertexColor};
pub use raster::{
    LineShadingMode, Rasterizer, TextureBlendingMode, TextureFilteringMode, TextureWrappingMode,
};
pub use surface::{
    rop, BlitSource, DepthBuffer, Geometry, PixelBuffer, PixelFormat, RasterOp, Surface,
};
