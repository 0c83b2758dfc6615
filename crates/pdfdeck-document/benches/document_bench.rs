// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pdfdeck-document crate: packaging picture
// slides into a presentation archive and decoding image headers.

use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use pdfdeck_core::SlideSize;
use pdfdeck_document::{Picture, SlideDeck};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Encode a 320x240 gradient as PNG.
fn gradient_png(seed: u8) -> Vec<u8> {
    let img = RgbImage::from_fn(320, 240, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, seed])
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode fixture");
    bytes
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Package twenty picture slides into an in-memory archive.
fn bench_deck_packaging(c: &mut Criterion) {
    let pictures: Vec<Picture> = (0..20u8)
        .map(|i| Picture::from_bytes(gradient_png(i)).expect("decode fixture"))
        .collect();
    let size = SlideSize::from_pixels(320, 240);

    c.bench_function("deck_packaging (20 slides)", |b| {
        b.iter(|| {
            let mut deck = SlideDeck::new(size);
            for picture in &pictures {
                deck.add_picture_slide(picture.clone());
            }
            let out = deck.write_to(Cursor::new(Vec::new())).expect("write deck");
            black_box(out.into_inner());
        });
    });
}

/// Sniff format and dimensions without decoding pixels.
fn bench_picture_probe(c: &mut Criterion) {
    let bytes = gradient_png(7);

    c.bench_function("picture_probe (320x240 png)", |b| {
        b.iter(|| {
            let picture = Picture::from_bytes(black_box(bytes.clone())).expect("probe");
            black_box((picture.width(), picture.height()));
        });
    });
}

criterion_group!(benches, bench_deck_packaging, bench_picture_probe);
criterion_main!(benches);
