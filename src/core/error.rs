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

//! Error types for ctxgraf
//!
//! Every fallible operation in the crate returns [`Result<T>`], an alias for
//! `std::result::Result<T, GraphicsError>`.
//!
//! Write paths never fail on out-of-bounds coordinates (they are silently
//! ignored); read paths always do.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by surfaces, rasterizers and the host
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// A parameter was outside its legal domain (zero dimensions, unknown
    /// mode code, missing blit source, invalid raster operation code)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A read access was made outside the surface bounds
    #[error("Coordinates ({x}, {y}) out of range for {width}x{height} surface")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A value does not fit the destination storage
    #[error("Value {value:#X} does not fit in 16 bits")]
    InvalidValue { value: u32 },

    /// The request is recognized but not implemented
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The engine reached a state that should be impossible
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// I/O error while reading config or writing frames
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Host configuration could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(String),

    /// Frame presentation (image encoding) failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<Infallible> for GraphicsError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphicsError>;
