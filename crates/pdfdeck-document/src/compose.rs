// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image composition: folder of images → presentation, list of images → PDF.

use std::path::{Path, PathBuf};

use pdfdeck_core::SlideSize;
use pdfdeck_core::error::{PdfDeckError, Result};
use tracing::{info, instrument};

use crate::image::{ImageSet, Picture};
use crate::pdf::PdfWriter;
use crate::pptx::SlideDeck;
use crate::progress::{self, Progress, Stage};

/// Build a presentation from every image in `image_dir`.
///
/// The first image (in [`ImageSet`] order) sets the slide size; every image
/// becomes one slide stretched to that size. The file `output_name` is written
/// into the parent of `image_dir` and its path returned.
pub fn images_to_pptx(image_dir: impl AsRef<Path>, output_name: &str) -> Result<PathBuf> {
    images_to_pptx_with_progress(image_dir, output_name, &mut progress::ignore)
}

/// Like [`images_to_pptx`], reporting each added slide to `on_progress`.
#[instrument(skip_all, fields(dir = %image_dir.as_ref().display(), output_name = %output_name))]
pub fn images_to_pptx_with_progress(
    image_dir: impl AsRef<Path>,
    output_name: &str,
    on_progress: &mut dyn FnMut(Progress),
) -> Result<PathBuf> {
    let image_dir = image_dir.as_ref();
    let output_path = image_dir
        .parent()
        .ok_or_else(|| {
            PdfDeckError::InvalidPath(format!(
                "{} has no parent directory for the presentation",
                image_dir.display()
            ))
        })?
        .join(output_name);

    let images = ImageSet::list(image_dir)?;
    let first = images
        .first()
        .ok_or_else(|| PdfDeckError::EmptyImageSet(image_dir.display().to_string()))?;
    let first = Picture::open(first)?;
    let size = SlideSize::from_pixels(first.width(), first.height());
    info!(
        images = images.len(),
        width_px = first.width(),
        height_px = first.height(),
        "Composing presentation"
    );

    let mut deck = SlideDeck::new(size);
    if let Some(stem) = image_dir.file_name() {
        deck.set_title(stem.to_string_lossy());
    }

    let total = images.len();
    deck.add_picture_slide(first);
    on_progress(Progress {
        stage: Stage::Compose,
        done: 1,
        total,
    });
    for (index, path) in images.iter().enumerate().skip(1) {
        deck.add_picture_slide(Picture::open(path)?);
        on_progress(Progress {
            stage: Stage::Compose,
            done: index + 1,
            total,
        });
    }

    deck.save(&output_path)?;
    info!("PowerPoint presentation created as {}", output_path.display());
    Ok(output_path)
}

/// Compose `image_paths` into a PDF at `output_pdf_path`, one 595×842 pt page
/// per image in the given order.
#[instrument(skip_all, fields(images = image_paths.len(), output = %output_pdf_path.as_ref().display()))]
pub fn images_to_pdf<P: AsRef<Path>>(
    image_paths: &[P],
    output_pdf_path: impl AsRef<Path>,
) -> Result<()> {
    PdfWriter::a4().write_images_to_file(image_paths, output_pdf_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfInfo;
    use crate::test_support::write_png;

    fn slide_count(pptx: &Path) -> usize {
        let archive = zip::ZipArchive::new(std::fs::File::open(pptx).unwrap()).unwrap();
        archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .count()
    }

    #[test]
    fn one_slide_per_image_next_to_the_folder() {
        let root = tempfile::tempdir().unwrap();
        let images = root.path().join("deck");
        std::fs::create_dir(&images).unwrap();
        for i in 0..4 {
            write_png(&images.join(format!("deck_{i}.png")), 32, 24);
        }

        let mut events = Vec::new();
        let output =
            images_to_pptx_with_progress(&images, "slides.pptx", &mut |p| events.push(p)).unwrap();

        assert_eq!(output, root.path().join("slides.pptx"));
        assert!(output.is_file());
        assert_eq!(slide_count(&output), 4);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|p| p.stage == Stage::Compose));
    }

    #[test]
    fn empty_folder_fails() {
        let root = tempfile::tempdir().unwrap();
        let images = root.path().join("empty");
        std::fs::create_dir(&images).unwrap();

        assert!(matches!(
            images_to_pptx(&images, "output.pptx"),
            Err(PdfDeckError::EmptyImageSet(_))
        ));
        assert!(!root.path().join("output.pptx").exists());
    }

    #[test]
    fn non_image_entry_fails_without_output() {
        let root = tempfile::tempdir().unwrap();
        let images = root.path().join("mixed");
        std::fs::create_dir(&images).unwrap();
        write_png(&images.join("mixed_0.png"), 10, 10);
        std::fs::write(images.join("mixed_1.txt"), "not an image").unwrap();

        assert!(matches!(
            images_to_pptx(&images, "output.pptx"),
            Err(PdfDeckError::Image(_))
        ));
        assert!(!root.path().join("output.pptx").exists());
    }

    #[test]
    fn nested_folder_fails_without_output() {
        let root = tempfile::tempdir().unwrap();
        let images = root.path().join("album");
        std::fs::create_dir(&images).unwrap();
        write_png(&images.join("album_0.png"), 10, 10);
        std::fs::create_dir(images.join("album_1")).unwrap();

        assert!(matches!(
            images_to_pptx(&images, "output.pptx"),
            Err(PdfDeckError::Io(_))
        ));
        assert!(!root.path().join("output.pptx").exists());
    }

    #[test]
    fn images_to_pdf_writes_one_page_each() {
        let root = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..2)
            .map(|i| {
                let path = root.path().join(format!("scan_{i}.png"));
                write_png(&path, 20 + i * 10, 20);
                path
            })
            .collect();
        let output = root.path().join("scans.pdf");

        images_to_pdf(&paths, &output).unwrap();
        assert_eq!(PdfInfo::open(&output).unwrap().page_count(), 2);
    }
}
