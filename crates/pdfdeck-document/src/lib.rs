// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfdeck-document — Document conversions for pdfdeck.
//
// Provides PDF rasterisation (page → PNG), slide-deck packaging (image folder →
// .pptx), image-to-PDF composition, working-directory preparation, and the
// end-to-end PDF-to-presentation pipeline.

pub mod compose;
pub mod image;
pub mod pdf;
pub mod pipeline;
pub mod pptx;
pub mod progress;
pub mod workdir;

#[cfg(test)]
mod test_support;

// Re-export the primary entry points so callers can use `pdfdeck_document::pdf_to_pptx` etc.
pub use compose::{images_to_pdf, images_to_pptx, images_to_pptx_with_progress};
pub use image::{ImageSet, Picture};
pub use pdf::{PdfInfo, PdfRasterizer, PdfWriter};
pub use pipeline::{pdf_to_pptx, pdf_to_pptx_with_progress};
pub use pptx::SlideDeck;
pub use progress::{Progress, Stage};
pub use workdir::{image_dir_for, prepare_image_dir};
