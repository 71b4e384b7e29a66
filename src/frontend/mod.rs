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

//! Frontend module
//!
//! Headless host for rendering scenes to image files.
//!
//! # Architecture
//!
//! - [`Host`]: owns the output surface, runs the frame loop and saves PNGs
//! - [`HostConfig`]: TOML-backed host settings
//! - [`scenes`]: numbered test pictures for each part of the library
//!
//! # Example
//!
//! ```no_run
//! use ctxgraf::core::Factory;
//! use ctxgraf::frontend::{Host, HostConfig, Scene};
//!
//! let factory = Factory::new();
//! let config = HostConfig::load("ctxgraf.toml")?;
//! let scene: Scene = config.scene.parse()?;
//! let variant = config.scene_variant;
//!
//! let mut host = Host::new(&factory, config)?;
//! host.run(|surface, frame, _| scene.draw(&factory, surface, variant, frame))?;
//! # Ok::<(), ctxgraf::GraphicsError>(())
//! ```

pub mod config;
pub mod host;
pub mod scenes;

pub use config::HostConfig;
pub use host::{to_rgba8, Host};
pub use scenes::{make_test_texture, Scene};
