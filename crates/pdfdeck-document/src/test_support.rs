// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixture builders shared by the unit tests.

use std::path::Path;

use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

/// Write a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    ::image::RgbImage::from_pixel(width, height, ::image::Rgb([200, 60, 20]))
        .save(path)
        .unwrap();
}

/// Write a PDF with `pages` blank pages of `width_mm` × `height_mm`.
pub fn write_blank_pdf(path: &Path, pages: usize, width_mm: f32, height_mm: f32) {
    let mut doc = PdfDocument::new("fixture");
    let pages = (0..pages)
        .map(|_| PdfPage::new(Mm(width_mm), Mm(height_mm), Vec::new()))
        .collect();
    doc.with_pages(pages);
    let bytes = doc.save(&PdfSaveOptions::default(), &mut Vec::new());
    std::fs::write(path, bytes).unwrap();
}
