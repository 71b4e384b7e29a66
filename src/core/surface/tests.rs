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

//! Unit tests for surfaces and block transfers

use super::*;
use proptest::prelude::*;

fn surface(format: PixelFormat, width: u32, height: u32) -> Surface {
    Surface::new(format, width, height).unwrap()
}

/// Fill a surface with a position-dependent pattern so copies are traceable
fn fill_pattern(surface: &mut Surface) {
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let color = Color::with_alpha(x as u8, y as u8, (x * 7 + y * 13) as u8, 200);
            surface.draw_pixel(x, y, color);
        }
    }
}

/// Reference copy that goes through a temporary buffer
fn copy_through_temp(
    surface: &mut Surface,
    width: u32,
    height: u32,
    dst_x: u32,
    dst_y: u32,
    src_x: u32,
    src_y: u32,
) {
    let clip = |origin: u32, extent: u32, limit: u32| {
        if origin >= limit {
            0
        } else {
            extent.min(limit - origin)
        }
    };
    let w = clip(dst_x, width, surface.width()).min(clip(src_x, width, surface.width()));
    let h = clip(dst_y, height, surface.height()).min(clip(src_y, height, surface.height()));

    let mut temp = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            temp.push(surface.get_pixel(src_x + x, src_y + y).unwrap());
        }
    }
    for y in 0..h {
        for x in 0..w {
            surface.draw_pixel(dst_x + x, dst_y + y, temp[(y * w + x) as usize]);
        }
    }
}

#[test]
fn test_new_rejects_zero_dimensions() {
    assert!(matches!(
        Surface::new(PixelFormat::Rgb888, 0, 10),
        Err(GraphicsError::InvalidArgument(_))
    ));
    assert!(matches!(
        Surface::new(PixelFormat::Z16, 10, 0),
        Err(GraphicsError::InvalidArgument(_))
    ));
}

#[test]
fn test_new_rejects_overflowing_size() {
    assert!(matches!(
        Surface::new(PixelFormat::Rgba8888, u32::MAX, 2),
        Err(GraphicsError::InvalidArgument(_))
    ));
}

#[test]
fn test_geometry_per_format() {
    for (format, bpp) in [
        (PixelFormat::Rgb888, 3),
        (PixelFormat::Rgba8888, 4),
        (PixelFormat::Z16, 2),
    ] {
        let s = surface(format, 7, 5);
        assert_eq!(s.width(), 7);
        assert_eq!(s.height(), 5);
        assert_eq!(s.pitch(), 7 * bpp);
        assert_eq!(s.format(), format);
        assert_eq!(s.bytes().len(), (7 * bpp * 5) as usize);
    }
}

#[test]
fn test_format_codes() {
    assert_eq!(PixelFormat::try_from(0).unwrap(), PixelFormat::Rgb888);
    assert_eq!(PixelFormat::try_from(1).unwrap(), PixelFormat::Rgba8888);
    assert_eq!(PixelFormat::try_from(2).unwrap(), PixelFormat::Z16);
    assert!(matches!(
        PixelFormat::try_from(3),
        Err(GraphicsError::Unsupported(_))
    ));
}

#[test]
fn test_clear_then_get_pixel() {
    let mut s = surface(PixelFormat::Rgb888, 16, 16);
    s.clear(Color::new(255, 0, 0));
    assert_eq!(s.get_pixel(0, 0).unwrap(), Color::new(255, 0, 0));
    assert_eq!(s.get_pixel(15, 15).unwrap(), Color::new(255, 0, 0));
}

#[test]
fn test_rgba_stores_alpha() {
    let mut s = surface(PixelFormat::Rgba8888, 4, 4);
    s.draw_pixel(1, 2, Color::with_alpha(10, 20, 30, 40));
    assert_eq!(s.get_pixel(1, 2).unwrap(), Color::with_alpha(10, 20, 30, 40));
    let offset = (2 * s.pitch() + 4) as usize;
    assert_eq!(&s.bytes()[offset..offset + 4], &[10, 20, 30, 40]);
}

#[test]
fn test_rgb_ignores_alpha() {
    let mut s = surface(PixelFormat::Rgb888, 4, 4);
    s.draw_pixel(0, 0, Color::with_alpha(1, 2, 3, 4));
    assert_eq!(s.get_pixel(0, 0).unwrap(), Color::new(1, 2, 3));
}

#[test]
fn test_draw_pixel_out_of_bounds_is_noop() {
    let mut s = surface(PixelFormat::Rgb888, 8, 8);
    fill_pattern(&mut s);
    let before = s.clone();

    s.draw_pixel(8, 0, Color::WHITE);
    s.draw_pixel(0, 8, Color::WHITE);
    s.draw_pixel(u32::MAX, u32::MAX, Color::WHITE);

    assert_eq!(s.bytes(), before.bytes());
}

#[test]
fn test_get_pixel_out_of_range() {
    let s = surface(PixelFormat::Rgb888, 8, 8);
    match s.get_pixel(8, 3) {
        Err(GraphicsError::OutOfRange {
            x,
            y,
            width,
            height,
        }) => {
            assert_eq!((x, y, width, height), (8, 3, 8, 8));
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert!(s.get_pixel(0, 8).is_err());
}

#[test]
fn test_depth_roundtrip_and_bounds() {
    let mut z = surface(PixelFormat::Z16, 4, 4);
    z.clear_depth(0xFFFF);
    assert_eq!(z.get_depth(3, 3).unwrap(), 0xFFFF);

    z.set_depth(1, 1, 0x1234).unwrap();
    assert_eq!(z.get_depth(1, 1).unwrap(), 0x1234);

    // Out-of-bounds writes are dropped, even with a bad value
    z.set_depth(4, 0, 0x1_0000).unwrap();
    assert!(matches!(
        z.get_depth(4, 0),
        Err(GraphicsError::OutOfRange { .. })
    ));

    assert!(matches!(
        z.set_depth(0, 0, 0x1_0000),
        Err(GraphicsError::InvalidValue { value: 0x1_0000 })
    ));
    assert_eq!(z.get_depth(0, 0).unwrap(), 0xFFFF);
}

#[test]
fn test_depth_is_native_endian() {
    let mut z = surface(PixelFormat::Z16, 2, 1);
    z.set_depth(1, 0, 0xABCD).unwrap();
    assert_eq!(&z.bytes()[2..4], &0xABCDu16.to_ne_bytes());
}

#[test]
fn test_blit_between_surfaces() {
    let mut src = surface(PixelFormat::Rgb888, 200, 200);
    let mut dst = surface(PixelFormat::Rgb888, 200, 200);
    fill_pattern(&mut src);

    dst.block_transfer(100, 100, 50, 50, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();

    for y in 0..200 {
        for x in 0..200 {
            let expected = if (50..150).contains(&x) && (50..150).contains(&y) {
                src.get_pixel(x - 50, y - 50).unwrap()
            } else {
                Color::new(0, 0, 0)
            };
            assert_eq!(dst.get_pixel(x, y).unwrap(), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_blit_converts_between_formats() {
    let mut src = surface(PixelFormat::Rgba8888, 4, 4);
    src.clear(Color::with_alpha(9, 8, 7, 6));
    let mut dst = surface(PixelFormat::Rgb888, 4, 4);

    dst.block_transfer(2, 2, 1, 1, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();

    assert_eq!(dst.get_pixel(1, 1).unwrap(), Color::new(9, 8, 7));
    assert_eq!(dst.get_pixel(2, 2).unwrap(), Color::new(9, 8, 7));
    assert_eq!(dst.get_pixel(0, 0).unwrap(), Color::new(0, 0, 0));
    assert_eq!(dst.get_pixel(3, 3).unwrap(), Color::new(0, 0, 0));
}

#[test]
fn test_blit_clipping_leaves_guard_region() {
    // 32×32 destination; the transfer only touches the inner 16×16 window
    // because the source is smaller than requested
    let mut src = surface(PixelFormat::Rgb888, 16, 16);
    src.clear(Color::new(1, 2, 3));
    let mut dst = surface(PixelFormat::Rgb888, 32, 32);
    dst.clear(Color::new(200, 200, 200));

    dst.block_transfer(100, 100, 8, 8, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();

    for y in 0..32 {
        for x in 0..32 {
            let inside = (8..24).contains(&x) && (8..24).contains(&y);
            let expected = if inside {
                Color::new(1, 2, 3)
            } else {
                Color::new(200, 200, 200)
            };
            assert_eq!(dst.get_pixel(x, y).unwrap(), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_blit_destination_clipping() {
    let mut src = surface(PixelFormat::Rgb888, 32, 32);
    src.clear(Color::new(5, 5, 5));
    let mut dst = surface(PixelFormat::Rgb888, 10, 10);

    dst.block_transfer(32, 32, 6, 7, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();

    assert_eq!(dst.get_pixel(9, 9).unwrap(), Color::new(5, 5, 5));
    assert_eq!(dst.get_pixel(6, 7).unwrap(), Color::new(5, 5, 5));
    assert_eq!(dst.get_pixel(5, 7).unwrap(), Color::new(0, 0, 0));
    assert_eq!(dst.get_pixel(6, 6).unwrap(), Color::new(0, 0, 0));
}

#[test]
fn test_blit_zero_sizes() {
    let mut src = surface(PixelFormat::Rgb888, 8, 8);
    fill_pattern(&mut src);
    let mut dst = surface(PixelFormat::Rgb888, 8, 8);
    let before = dst.clone();

    dst.block_transfer(0, 5, 0, 0, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();
    dst.block_transfer(5, 0, 0, 0, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();
    dst.block_transfer(5, 5, 8, 8, BlitSource::Other(&src), 0, 0, rop::SRCCOPY)
        .unwrap();
    dst.block_transfer(5, 5, 0, 0, BlitSource::Other(&src), 8, 0, rop::SRCCOPY)
        .unwrap();

    assert_eq!(dst, before);
}

#[test]
fn test_blit_fill_and_invert_rops() {
    let mut s = surface(PixelFormat::Rgba8888, 8, 8);
    s.clear(Color::with_alpha(0x10, 0x20, 0x30, 0x40));

    s.block_transfer(2, 2, 0, 0, BlitSource::None, 0, 0, rop::WHITENESS)
        .unwrap();
    s.block_transfer(2, 2, 2, 0, BlitSource::None, 0, 0, rop::BLACKNESS)
        .unwrap();
    s.block_transfer(2, 2, 4, 0, BlitSource::None, 0, 0, rop::DSTINVERT)
        .unwrap();

    assert_eq!(s.get_pixel(1, 1).unwrap(), Color::WHITE);
    assert_eq!(s.get_pixel(3, 1).unwrap(), Color::BLACK);
    assert_eq!(
        s.get_pixel(5, 1).unwrap(),
        Color::with_alpha(0xEF, 0xDF, 0xCF, 0x40)
    );
    assert_eq!(
        s.get_pixel(6, 1).unwrap(),
        Color::with_alpha(0x10, 0x20, 0x30, 0x40)
    );
}

#[test]
fn test_blit_error_kinds() {
    let mut s = surface(PixelFormat::Rgb888, 8, 8);
    fill_pattern(&mut s);
    let before = s.clone();

    assert!(matches!(
        s.block_transfer(4, 4, 0, 0, BlitSource::None, 0, 0, rop::SRCCOPY),
        Err(GraphicsError::InvalidArgument(_))
    ));
    assert!(matches!(
        s.block_transfer(4, 4, 0, 0, BlitSource::This, 0, 0, 16),
        Err(GraphicsError::InvalidArgument(_))
    ));
    assert!(matches!(
        s.block_transfer(4, 4, 0, 0, BlitSource::This, 0, 0, 0x6),
        Err(GraphicsError::Unsupported(_))
    ));

    assert_eq!(s, before);
}

#[test]
fn test_self_blit_overlap_relations() {
    // (dst_x, dst_y, src_x, src_y): dest below, above, right of, left of source
    let cases = [(10, 14, 10, 10), (10, 6, 10, 10), (14, 10, 10, 10), (6, 10, 10, 10)];

    for (dst_x, dst_y, src_x, src_y) in cases {
        let mut actual = surface(PixelFormat::Rgb888, 40, 40);
        fill_pattern(&mut actual);
        let mut expected = actual.clone();

        actual
            .block_transfer(12, 12, dst_x, dst_y, BlitSource::This, src_x, src_y, rop::SRCCOPY)
            .unwrap();
        copy_through_temp(&mut expected, 12, 12, dst_x, dst_y, src_x, src_y);

        assert_eq!(
            actual, expected,
            "overlap dst=({}, {}) src=({}, {})",
            dst_x, dst_y, src_x, src_y
        );
    }
}

#[test]
fn test_self_blit_diagonal_overlap() {
    let mut actual = surface(PixelFormat::Rgba8888, 20, 20);
    fill_pattern(&mut actual);
    let mut expected = actual.clone();

    actual
        .block_transfer(10, 10, 3, 3, BlitSource::This, 0, 0, rop::SRCCOPY)
        .unwrap();
    copy_through_temp(&mut expected, 10, 10, 3, 3, 0, 0);

    assert_eq!(actual, expected);
}

proptest! {
    #[test]
    fn prop_clear_then_get(r: u8, g: u8, b: u8, a: u8, x in 0u32..13, y in 0u32..9) {
        let mut s = surface(PixelFormat::Rgba8888, 13, 9);
        s.clear(Color::with_alpha(r, g, b, a));
        prop_assert_eq!(s.get_pixel(x, y).unwrap(), Color::with_alpha(r, g, b, a));
    }

    #[test]
    fn prop_out_of_bounds_access(x in 0u32..64, y in 0u32..64) {
        let mut s = surface(PixelFormat::Rgb888, 16, 12);
        fill_pattern(&mut s);
        let before = s.clone();
        let inside = x < 16 && y < 12;

        if !inside {
            s.draw_pixel(x, y, Color::WHITE);
            prop_assert_eq!(&s, &before);
            let is_out_of_range = matches!(s.get_pixel(x, y), Err(GraphicsError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
            let depth_out_of_range = matches!(s.get_depth(x, y), Err(GraphicsError::OutOfRange { .. }));
            prop_assert!(depth_out_of_range);
        } else {
            prop_assert!(s.get_pixel(x, y).is_ok());
        }
    }

    #[test]
    fn prop_self_blit_matches_temp_copy(
        width in 0u32..20,
        height in 0u32..20,
        dst_x in 0u32..20,
        dst_y in 0u32..16,
        src_x in 0u32..20,
        src_y in 0u32..16,
    ) {
        let mut actual = surface(PixelFormat::Rgb888, 18, 14);
        fill_pattern(&mut actual);
        let mut expected = actual.clone();

        actual
            .block_transfer(width, height, dst_x, dst_y, BlitSource::This, src_x, src_y, rop::SRCCOPY)
            .unwrap();
        copy_through_temp(&mut expected, width, height, dst_x, dst_y, src_x, src_y);

        prop_assert_eq!(actual, expected);
    }
}
