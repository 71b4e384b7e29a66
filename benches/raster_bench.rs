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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ctxgraf::core::{
    rop, BlitSource, DepthBuffer, Factory, PixelBuffer, PixelFormat, TextureFilteringMode,
    TextureWrappingMode, Vertex, VertexColor,
};
use ctxgraf::frontend::make_test_texture;
use std::hint::black_box;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn triangle_of_size(extent: f32) -> [Vertex; 3] {
    let color = VertexColor::new(1.0, 0.5, 0.25);
    [
        Vertex::new(-extent, -extent, 0.0, color).with_tex(0.0, 0.0),
        Vertex::new(extent, -extent * 0.8, 0.0, color).with_tex(1.0, 0.0),
        Vertex::new(0.0, extent, 0.0, color).with_tex(0.5, 1.0),
    ]
}

fn benchmark_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let factory = Factory::new();
    let texture = make_test_texture(&factory, 64, 64).unwrap();

    for (name, extent) in [("small", 0.05), ("medium", 0.3), ("large", 0.9)] {
        let tri = triangle_of_size(extent);

        group.bench_with_input(BenchmarkId::new("flat", name), &tri, |b, tri| {
            let mut surface = factory.create_buffer(PixelFormat::Rgb888, WIDTH, HEIGHT).unwrap();
            let rasterizer = factory.create_rasterizer();
            b.iter(|| {
                rasterizer
                    .triangle(&mut surface, None, black_box(&tri[0]), &tri[1], &tri[2])
                    .unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("depth", name), &tri, |b, tri| {
            let mut surface = factory.create_buffer(PixelFormat::Rgb888, WIDTH, HEIGHT).unwrap();
            let mut depth = factory.create_depth_buffer(WIDTH, HEIGHT).unwrap();
            let rasterizer = factory.create_rasterizer();
            b.iter(|| {
                depth.clear_depth(u16::MAX);
                rasterizer
                    .triangle(
                        &mut surface,
                        Some(&mut depth),
                        black_box(&tri[0]),
                        &tri[1],
                        &tri[2],
                    )
                    .unwrap();
            });
        });

        for filter in [TextureFilteringMode::Nearest, TextureFilteringMode::Bilinear] {
            let id = format!("textured_{:?}", filter).to_lowercase();
            group.bench_with_input(BenchmarkId::new(id, name), &tri, |b, tri| {
                let mut surface = factory.create_buffer(PixelFormat::Rgb888, WIDTH, HEIGHT).unwrap();
                let mut rasterizer = factory.create_rasterizer();
                rasterizer.set_texture_map(Some(&texture)).unwrap();
                rasterizer.set_texture_filtering_mode(filter).unwrap();
                rasterizer
                    .set_texture_wrapping_mode(TextureWrappingMode::Repeat)
                    .unwrap();
                b.iter(|| {
                    rasterizer
                        .triangle(&mut surface, None, black_box(&tri[0]), &tri[1], &tri[2])
                        .unwrap();
                });
            });
        }
    }

    group.finish();
}

fn benchmark_polyline(c: &mut Criterion) {
    let factory = Factory::new();
    let mut surface = factory.create_buffer(PixelFormat::Rgb888, WIDTH, HEIGHT).unwrap();
    let rasterizer = factory.create_rasterizer();

    let starburst: Vec<Vertex> = (0..=36)
        .map(|i| {
            let angle = (i * 13) as f32 * std::f32::consts::TAU / 36.0;
            Vertex::new(angle.cos() * 0.9, angle.sin() * 0.9, 0.0, VertexColor::new(1.0, 1.0, 1.0))
        })
        .collect();

    c.bench_function("polyline_starburst", |b| {
        b.iter(|| rasterizer.polyline(&mut surface, black_box(&starburst)).unwrap());
    });
}

fn benchmark_blit(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_transfer");
    let factory = Factory::new();

    for format in [PixelFormat::Rgb888, PixelFormat::Rgba8888] {
        let name = format!("{:?}", format).to_lowercase();
        let mut surface = factory.create_buffer(format, WIDTH, HEIGHT).unwrap();
        let source = factory.create_buffer(format, WIDTH, HEIGHT).unwrap();

        group.bench_function(BenchmarkId::new("other", &name), |b| {
            b.iter(|| {
                surface
                    .block_transfer(400, 300, 10, 10, BlitSource::Other(&source), 0, 0, rop::SRCCOPY)
                    .unwrap();
            });
        });

        group.bench_function(BenchmarkId::new("overlap_down", &name), |b| {
            b.iter(|| {
                surface
                    .block_transfer(400, 300, 20, 20, BlitSource::This, 10, 10, rop::SRCCOPY)
                    .unwrap();
            });
        });

        group.bench_function(BenchmarkId::new("invert", &name), |b| {
            b.iter(|| {
                surface
                    .block_transfer(400, 300, 0, 0, BlitSource::None, 0, 0, rop::DSTINVERT)
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_triangle, benchmark_polyline, benchmark_blit);
criterion_main!(benches);
