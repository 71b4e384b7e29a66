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

//! ctxgraf render entry point
//!
//! Renders one of the built-in test scenes headlessly and saves the result
//! as PNG.

use clap::Parser;
use ctxgraf::core::Factory;
use ctxgraf::frontend::{Host, HostConfig, Scene};
use std::path::PathBuf;

/// Render ctxgraf test scenes to PNG files
#[derive(Parser, Debug)]
#[command(name = "ctxgraf-render", version, about)]
struct Args {
    /// TOML host configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene to render (bitblt, line, triangle, texture)
    #[arg(short, long)]
    scene: Option<String>,

    /// Scene variant number
    #[arg(short, long)]
    variant: Option<u32>,

    /// Number of frames to render
    #[arg(short, long)]
    frames: Option<u32>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<String>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// List scenes and their variants, then exit
    #[arg(long)]
    list: bool,
}

impl Args {
    /// Build the host configuration: defaults, then the config file, then flags
    ///
    /// Without a config file or explicit size, the scene's own preferred size
    /// is used.
    fn host_config(&self) -> ctxgraf::Result<HostConfig> {
        let mut config = match &self.config {
            Some(path) => HostConfig::load(path)?,
            None => HostConfig::default(),
        };

        if let Some(scene) = &self.scene {
            config.scene = scene.clone();
        }
        if self.config.is_none() {
            let (width, height) = config.scene.parse::<Scene>()?.preferred_size();
            config.width = width;
            config.height = height;
        }
        if let Some(variant) = self.variant {
            config.scene_variant = variant;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        Ok(config)
    }
}

fn list_scenes() {
    for scene in Scene::ALL {
        let (width, height) = scene.preferred_size();
        println!("{} ({}x{})", scene.name(), width, height);
        for variant in 0..scene.variant_count() {
            if let Some(name) = scene.variant_name(variant) {
                println!("  {:2}: {}", variant, name);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    if args.list {
        list_scenes();
        return Ok(());
    }

    let config = args.host_config()?;
    let scene: Scene = config.scene.parse()?;
    let variant = config.scene_variant;

    log::info!(
        "Rendering {} #{} ({})",
        scene.name(),
        variant,
        scene.variant_name(variant).unwrap_or("unknown variant")
    );

    let factory = Factory::new();
    let mut host = Host::new(&factory, config)?;
    let written = host.run(|surface, frame, _aspect| scene.draw(&factory, surface, variant, frame))?;

    log::info!("Wrote {}", written.display());
    Ok(())
}
