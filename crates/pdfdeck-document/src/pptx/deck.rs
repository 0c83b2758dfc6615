// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slide deck: an in-memory presentation of picture slides, serialised as a
// zip package with the `zip` crate.

use std::collections::BTreeSet;
use std::io::{Seek, Write};
use std::path::Path;

use chrono::Utc;
use pdfdeck_core::SlideSize;
use pdfdeck_core::error::{PdfDeckError, Result};
use tracing::{debug, info, instrument, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::parts;
use crate::image::Picture;

/// A presentation whose slides each hold one picture covering the whole canvas.
///
/// The canvas is fixed when the deck is created; every picture is stretched to
/// it regardless of its own dimensions.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    size: SlideSize,
    title: String,
    slides: Vec<Picture>,
}

impl SlideDeck {
    /// Create an empty deck with the given canvas.
    ///
    /// A canvas outside PowerPoint's 1 to 56 inch range is kept as-is, but
    /// PowerPoint will refuse to open the result.
    pub fn new(size: SlideSize) -> Self {
        if !size.within_powerpoint_limits() {
            warn!(
                width_emu = size.width.0,
                height_emu = size.height.0,
                "Slide size is outside the range PowerPoint accepts"
            );
        }
        Self {
            size,
            title: "pdfdeck presentation".to_string(),
            slides: Vec::new(),
        }
    }

    /// Set the title stored in the package's core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Append a slide showing `picture` stretched over the canvas.
    pub fn add_picture_slide(&mut self, picture: Picture) {
        debug!(
            slide = self.slides.len() + 1,
            width = picture.width(),
            height = picture.height(),
            "Adding picture slide"
        );
        self.slides.push(picture);
    }

    // -- Serialisation --------------------------------------------------------

    /// Write the package to `writer`, returning it once the archive is finished.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let xml_options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        // Pictures are already compressed.
        let media_options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let slide_count = self.slides.len();
        let media_kinds: BTreeSet<_> = self.slides.iter().map(Picture::kind).collect();

        let mut zip = ZipWriter::new(writer);
        let mut put = |name: &str, data: &[u8], options: SimpleFileOptions| -> Result<()> {
            zip.start_file(name, options).map_err(|err| {
                PdfDeckError::Package(format!("cannot start part {}: {}", name, err))
            })?;
            zip.write_all(data)?;
            Ok(())
        };

        put(
            "[Content_Types].xml",
            parts::content_types_xml(slide_count, &media_kinds).as_bytes(),
            xml_options,
        )?;
        put("_rels/.rels", parts::root_rels_xml().as_bytes(), xml_options)?;
        put(
            "docProps/core.xml",
            parts::core_props_xml(&self.title, Utc::now()).as_bytes(),
            xml_options,
        )?;
        put(
            "docProps/app.xml",
            parts::app_props_xml(slide_count).as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/presentation.xml",
            parts::presentation_xml(self.size, slide_count).as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels_xml(slide_count).as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/slideMasters/slideMaster1.xml",
            parts::slide_master_xml().as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::slide_master_rels_xml().as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/slideLayouts/slideLayout1.xml",
            parts::slide_layout_xml().as_bytes(),
            xml_options,
        )?;
        put(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::slide_layout_rels_xml().as_bytes(),
            xml_options,
        )?;
        put("ppt/theme/theme1.xml", parts::theme_xml().as_bytes(), xml_options)?;

        for (index, picture) in self.slides.iter().enumerate() {
            let number = index + 1;
            let media_name = format!("image{}.{}", number, picture.kind().extension());

            put(
                &format!("ppt/slides/slide{number}.xml"),
                parts::picture_slide_xml(self.size, &picture.display_name()).as_bytes(),
                xml_options,
            )?;
            put(
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                parts::picture_slide_rels_xml(&media_name).as_bytes(),
                xml_options,
            )?;
            put(&format!("ppt/media/{media_name}"), picture.bytes(), media_options)?;
        }

        zip.finish()
            .map_err(|err| PdfDeckError::Package(format!("cannot finish archive: {}", err)))
    }

    /// Write the package to a file.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), slides = self.slides.len()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = self.write_to(std::io::BufWriter::new(file))?;
        writer.flush()?;
        info!("Wrote presentation to {}", path.as_ref().display());
        Ok(())
    }
}
