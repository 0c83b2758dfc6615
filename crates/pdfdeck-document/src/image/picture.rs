// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Picture: an encoded image file ready to be embedded in a presentation,
// together with its pixel dimensions. Only the header is parsed; the pixel
// data is carried through untouched unless the format cannot be embedded.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use ::image::{ImageFormat, ImageReader};
use pdfdeck_core::ImageKind;
use pdfdeck_core::error::{PdfDeckError, Result};
use tracing::{debug, instrument};

/// An encoded image plus the metadata needed to place it on a slide.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Where the picture was read from, for diagnostics.
    source: Option<PathBuf>,
    bytes: Vec<u8>,
    kind: ImageKind,
    width: u32,
    height: u32,
}

impl Picture {
    // -- Construction ---------------------------------------------------------

    /// Read an image file and parse its header.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        let bytes = std::fs::read(path_ref)?;
        let mut picture = Self::from_bytes(bytes).map_err(|err| match err {
            PdfDeckError::Image(detail) => {
                PdfDeckError::Image(format!("{}: {}", path_ref.display(), detail))
            }
            other => other,
        })?;
        picture.source = Some(path_ref.to_path_buf());
        Ok(picture)
    }

    /// Wrap raw encoded bytes (PNG, JPEG, ...).
    ///
    /// Formats a presentation cannot embed directly (WebP and friends) are
    /// decoded and re-encoded as PNG.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = ::image::guess_format(&bytes)
            .map_err(|err| PdfDeckError::Image(format!("not a recognised image: {}", err)))?;

        let (width, height) = ImageReader::with_format(Cursor::new(&bytes), format)
            .into_dimensions()
            .map_err(|err| PdfDeckError::Image(format!("unreadable image header: {}", err)))?;

        let (bytes, kind) = match embeddable_kind(format) {
            Some(kind) => (bytes, kind),
            None => {
                debug!(?format, "Re-encoding picture as PNG");
                (reencode_as_png(&bytes, format)?, ImageKind::Png)
            }
        };

        Ok(Self {
            source: None,
            bytes,
            kind,
            width,
            height,
        })
    }

    // -- Accessors ------------------------------------------------------------

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// File name used as the picture's description on the slide.
    pub fn display_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Formats PowerPoint renders natively.
fn embeddable_kind(format: ImageFormat) -> Option<ImageKind> {
    match format {
        ImageFormat::Png => Some(ImageKind::Png),
        ImageFormat::Jpeg => Some(ImageKind::Jpeg),
        ImageFormat::Gif => Some(ImageKind::Gif),
        ImageFormat::Bmp => Some(ImageKind::Bmp),
        ImageFormat::Tiff => Some(ImageKind::Tiff),
        _ => None,
    }
}

fn reencode_as_png(bytes: &[u8], format: ImageFormat) -> Result<Vec<u8>> {
    let decoded = ::image::load_from_memory_with_format(bytes, format)
        .map_err(|err| PdfDeckError::Image(format!("failed to decode image: {}", err)))?;
    let mut buffer = Vec::new();
    decoded
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|err| PdfDeckError::Image(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_png;

    #[test]
    fn reads_dimensions_from_png_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        write_png(&path, 40, 30);

        let picture = Picture::open(&path).unwrap();
        assert_eq!((picture.width(), picture.height()), (40, 30));
        assert_eq!(picture.kind(), ImageKind::Png);
        assert_eq!(picture.display_name(), "page.png");
        assert_eq!(picture.bytes(), std::fs::read(&path).unwrap().as_slice());
    }

    #[test]
    fn non_image_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "just some text").unwrap();

        let err = Picture::open(&path).unwrap_err();
        assert!(matches!(err, PdfDeckError::Image(ref msg) if msg.contains("notes.txt")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Picture::open(dir.path().join("absent.png")),
            Err(PdfDeckError::Io(_))
        ));
    }

    #[test]
    fn jpeg_keeps_original_bytes() {
        let img = ::image::RgbImage::from_pixel(8, 4, ::image::Rgb([10, 20, 30]));
        let mut jpeg = Vec::new();
        ::image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();

        let picture = Picture::from_bytes(jpeg.clone()).unwrap();
        assert_eq!(picture.kind(), ImageKind::Jpeg);
        assert_eq!(picture.bytes(), jpeg.as_slice());
        assert_eq!(picture.display_name(), "");
    }

    #[test]
    fn webp_is_reencoded_as_png() {
        let img = ::image::RgbImage::from_pixel(12, 7, ::image::Rgb([90, 160, 30]));
        let mut webp = Vec::new();
        ::image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut webp), ImageFormat::WebP)
            .unwrap();

        let picture = Picture::from_bytes(webp.clone()).unwrap();
        assert_eq!(picture.kind(), ImageKind::Png);
        assert_eq!((picture.width(), picture.height()), (12, 7));
        assert_ne!(picture.bytes(), webp.as_slice());
        assert_eq!(
            ::image::guess_format(picture.bytes()).unwrap(),
            ImageFormat::Png
        );
        let decoded = ::image::load_from_memory(picture.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 7));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Picture::open(dir.path()),
            Err(PdfDeckError::Io(_))
        ));
    }
}
