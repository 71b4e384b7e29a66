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

//! Host configuration
//!
//! Settings for the headless host, stored as TOML. Missing keys fall back to
//! their defaults, so a config file only needs the values it changes:
//!
//! ```toml
//! width = 800
//! height = 800
//! scene = "line"
//! scene_variant = 7
//! ```

use crate::core::error::{GraphicsError, Result};
use crate::core::surface::PixelFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Headless host configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Surface pixel format: "rgb888", "rgba8888" or "z16"
    pub format: PixelFormat,
    /// Number of frames to render
    pub frames: u32,
    /// Scene to render (see [`crate::frontend::Scene`])
    pub scene: String,
    /// Scene-specific test case
    pub scene_variant: u32,
    /// PNG output path
    pub output: String,
    /// Save every frame as `<stem>-<frame>.png` instead of only the last one
    pub save_every_frame: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            format: PixelFormat::Rgb888,
            frames: 1,
            scene: "triangle".to_string(),
            scene_variant: 0,
            output: "frame.png".to_string(),
            save_every_frame: false,
        }
    }
}

impl HostConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| GraphicsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GraphicsError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| GraphicsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
