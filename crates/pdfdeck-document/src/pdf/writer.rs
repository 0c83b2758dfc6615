// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer: compose a list of raster images into a PDF, one fixed-size page
// per image, using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::path::Path;

use pdfdeck_core::PageSize;
use pdfdeck_core::error::{PdfDeckError, Result};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

/// Images are placed at 72 DPI so one pixel maps to one point before scaling.
const PLACEMENT_DPI: f32 = 72.0;

/// Creates PDF documents from raster images.
pub struct PdfWriter {
    /// Size of every generated page.
    page_size: PageSize,
}

impl PdfWriter {
    /// Create a new writer with the given page size.
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    /// Create a new writer with 595×842 pt pages.
    pub fn a4() -> Self {
        Self::new(PageSize::A4_POINTS)
    }

    /// Page dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = self.page_size.dimensions_mm();
        (Mm(w_mm), Mm(h_mm))
    }

    // -- Images to PDF --------------------------------------------------------

    /// Create a PDF with one page per image, in the given order.
    ///
    /// Every image is stretched to cover the whole page; its aspect ratio is
    /// not preserved. Any image that cannot be read aborts the whole document.
    #[instrument(skip_all, fields(images = image_paths.len()))]
    pub fn create_from_images<P: AsRef<Path>>(&self, image_paths: &[P]) -> Result<Vec<u8>> {
        if image_paths.is_empty() {
            return Err(PdfDeckError::EmptyImageSet(
                "no image paths given for PDF output".into(),
            ));
        }

        let (page_w, page_h) = self.page_dimensions();
        info!(page_size = ?self.page_size, "Creating image PDF");

        let mut doc = PdfDocument::new("pdfdeck images");
        let mut pages: Vec<PdfPage> = Vec::with_capacity(image_paths.len());

        for path in image_paths {
            let path = path.as_ref();
            let raw = load_raw_image(path)?;
            let (img_w, img_h) = (raw.width as f32, raw.height as f32);
            let xobject_id = doc.add_image(&raw);

            // At 72 DPI the image's natural size is its pixel count in points.
            let scale_x = self.page_size.width_pt / img_w;
            let scale_y = self.page_size.height_pt / img_h;

            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: Some(scale_x),
                    scale_y: Some(scale_y),
                    dpi: Some(PLACEMENT_DPI),
                    rotate: None,
                },
            }];
            pages.push(PdfPage::new(page_w, page_h, ops));

            debug!(path = %path.display(), scale_x, scale_y, "Image placed on page");
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings while saving");
        }

        Ok(output)
    }

    // -- File output convenience ----------------------------------------------

    /// Create an image PDF and write it directly to a file.
    ///
    /// Nothing is written unless every image was read successfully.
    pub fn write_images_to_file<P: AsRef<Path>>(
        &self,
        image_paths: &[P],
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.create_from_images(image_paths)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("PDF saved successfully to {}", path.as_ref().display());
        Ok(())
    }
}

/// Decode an image file into printpdf's RGB8 representation.
fn load_raw_image(path: &Path) -> Result<RawImage> {
    let dynamic_image = ::image::open(path).map_err(|err| {
        PdfDeckError::Image(format!("failed to open {}: {}", path.display(), err))
    })?;

    let width = dynamic_image.width() as usize;
    let height = dynamic_image.height() as usize;
    let rgb_image = dynamic_image.to_rgb8();

    Ok(RawImage {
        pixels: RawImageData::U8(rgb_image.into_raw()),
        width,
        height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}
