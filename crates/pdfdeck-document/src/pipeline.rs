// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF → presentation pipeline: prepare the image folder, rasterise the PDF into
// it, then build the deck from the resulting images.

use std::path::{Path, PathBuf};

use pdfdeck_core::ConvertOptions;
use pdfdeck_core::config::validate_dpi;
use pdfdeck_core::error::Result;
use tracing::{info, instrument};

use crate::compose::images_to_pptx_with_progress;
use crate::pdf::PdfRasterizer;
use crate::progress::{self, Progress};
use crate::workdir::prepare_image_dir;

/// Convert `pdf_path` into a presentation of full-slide page images.
///
/// Returns the path of the written presentation. A failure part-way leaves
/// whatever was already written (page images, no deck) on disk.
pub fn pdf_to_pptx(pdf_path: impl AsRef<Path>, options: &ConvertOptions) -> Result<PathBuf> {
    pdf_to_pptx_with_progress(pdf_path, options, &mut progress::ignore)
}

/// Like [`pdf_to_pptx`], forwarding rasterisation and composition progress.
#[instrument(skip_all, fields(pdf = %pdf_path.as_ref().display(), dpi = options.dpi))]
pub fn pdf_to_pptx_with_progress(
    pdf_path: impl AsRef<Path>,
    options: &ConvertOptions,
    on_progress: &mut dyn FnMut(Progress),
) -> Result<PathBuf> {
    let pdf_path = pdf_path.as_ref();
    validate_dpi(options.dpi)?;

    let image_dir = match &options.image_dir {
        Some(dir) => dir.clone(),
        None => prepare_image_dir(pdf_path)?,
    };

    PdfRasterizer::new(options.dpi)?.rasterize_with_progress(
        pdf_path,
        Some(image_dir.as_path()),
        on_progress,
    )?;
    let output = images_to_pptx_with_progress(&image_dir, &options.output_name, on_progress)?;

    info!(output = %output.display(), "PDF converted to presentation");
    Ok(output)
}
