// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF rasteriser: render every page of a PDF to `{stem}_{index}.png` using the
// pure-Rust `hayro` renderer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hayro::{InterpreterSettings, Pdf, RenderSettings, render};
use pdfdeck_core::config::{DEFAULT_DPI, validate_dpi};
use pdfdeck_core::error::{PdfDeckError, Result};
use pdfdeck_core::types::POINTS_PER_INCH;
use tracing::{debug, info, instrument};

use crate::progress::{self, Progress, Stage};
use crate::workdir::prepare_image_dir;

/// Renders PDF pages to PNG files at a fixed resolution.
#[derive(Debug, Clone, Copy)]
pub struct PdfRasterizer {
    dpi: u32,
}

impl PdfRasterizer {
    /// Create a rasteriser rendering at `dpi` dots per inch.
    pub fn new(dpi: u32) -> Result<Self> {
        validate_dpi(dpi)?;
        Ok(Self { dpi })
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Scale factor from PDF points to output pixels.
    fn scale(&self) -> f32 {
        self.dpi as f32 / POINTS_PER_INCH
    }

    /// Rasterise every page of `pdf_path`.
    ///
    /// When `target_dir` is `None` the page images go to the directory derived
    /// from the PDF name, which is created or emptied first. Returns the written
    /// files in page order.
    pub fn rasterize(
        &self,
        pdf_path: impl AsRef<Path>,
        target_dir: Option<&Path>,
    ) -> Result<Vec<PathBuf>> {
        self.rasterize_with_progress(pdf_path, target_dir, &mut progress::ignore)
    }

    /// Like [`PdfRasterizer::rasterize`], reporting each saved page to `on_progress`.
    ///
    /// A failure part-way through leaves the pages written so far on disk.
    #[instrument(skip_all, fields(pdf = %pdf_path.as_ref().display(), dpi = self.dpi))]
    pub fn rasterize_with_progress(
        &self,
        pdf_path: impl AsRef<Path>,
        target_dir: Option<&Path>,
        on_progress: &mut dyn FnMut(Progress),
    ) -> Result<Vec<PathBuf>> {
        let pdf_path = pdf_path.as_ref();
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PdfDeckError::InvalidPath(format!("{} has no file name", pdf_path.display()))
            })?;

        let target_dir = match target_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                dir.to_path_buf()
            }
            None => prepare_image_dir(pdf_path)?,
        };

        let data = std::fs::read(pdf_path)?;
        let pdf = Pdf::new(Arc::new(data)).map_err(|err| {
            PdfDeckError::Pdf(format!("failed to open {}: {:?}", pdf_path.display(), err))
        })?;

        let pages: Vec<_> = pdf.pages().iter().collect();
        let total = pages.len();
        info!(pages = total, dir = %target_dir.display(), "Rasterising PDF");

        let interpreter_settings = InterpreterSettings::default();
        let render_settings = RenderSettings {
            x_scale: self.scale(),
            y_scale: self.scale(),
            ..Default::default()
        };

        let mut written = Vec::with_capacity(total);
        for (index, page) in pages.into_iter().enumerate() {
            let pixmap = render(page, &interpreter_settings, &render_settings);
            debug!(index, width = pixmap.width(), height = pixmap.height(), "Page rendered");

            let output_path = target_dir.join(format!("{stem}_{index}.png"));
            std::fs::write(&output_path, pixmap.take_png())?;
            written.push(output_path);

            on_progress(Progress {
                stage: Stage::Rasterize,
                done: index + 1,
                total,
            });
        }

        info!(pages = written.len(), "PDF converted to images");
        Ok(written)
    }
}

impl Default for PdfRasterizer {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI }
    }
}
