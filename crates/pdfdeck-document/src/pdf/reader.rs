// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF inspection: page count and page geometry of existing documents using
// the `lopdf` crate.

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdfdeck_core::error::{PdfDeckError, Result};
use tracing::{debug, info, instrument};

/// Upper bound on /Parent hops while looking for an inherited /MediaBox.
const MAX_TREE_DEPTH: usize = 32;

/// Read-only view of an existing PDF's page tree.
pub struct PdfInfo {
    /// The underlying lopdf document.
    document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfInfo {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            PdfDeckError::Pdf(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path: Some(path_ref.display().to_string()),
        })
    }

    /// Create a view from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            PdfDeckError::Pdf(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self {
            document,
            source_path: None,
        })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Return the source path if the view was created via [`PdfInfo::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Width and height in points of page `page_number` (1-indexed), taken
    /// from its /MediaBox or the nearest ancestor that defines one.
    pub fn page_size(&self, page_number: u32) -> Result<(f32, f32)> {
        let pages = self.document.get_pages();
        let page_id: ObjectId = *pages.get(&page_number).ok_or_else(|| {
            PdfDeckError::Pdf(format!(
                "page {} out of range (document has {} pages)",
                page_number,
                pages.len()
            ))
        })?;

        let media_box = self.inherited_media_box(page_id)?;
        let coords = media_box
            .iter()
            .map(|value| value.as_float())
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|err| PdfDeckError::Pdf(format!("malformed /MediaBox: {}", err)))?;

        match coords.as_slice() {
            [llx, lly, urx, ury] => Ok(((urx - llx).abs(), (ury - lly).abs())),
            other => Err(PdfDeckError::Pdf(format!(
                "/MediaBox has {} entries, expected 4",
                other.len()
            ))),
        }
    }

    // -- Helpers --------------------------------------------------------------

    fn inherited_media_box(&self, page_id: ObjectId) -> Result<&Vec<Object>> {
        let mut node: &Dictionary = self.dictionary(page_id)?;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(media_box) = node.get(b"MediaBox") {
                let resolved = match media_box {
                    Object::Reference(id) => self.object(*id)?,
                    direct => direct,
                };
                return resolved
                    .as_array()
                    .map_err(|err| PdfDeckError::Pdf(format!("/MediaBox is not an array: {}", err)));
            }
            let parent = node
                .get(b"Parent")
                .and_then(Object::as_reference)
                .map_err(|_| PdfDeckError::Pdf("page has no /MediaBox".into()))?;
            node = self.dictionary(parent)?;
        }
        Err(PdfDeckError::Pdf("page tree too deep".into()))
    }

    fn object(&self, id: ObjectId) -> Result<&Object> {
        self.document
            .get_object(id)
            .map_err(|err| PdfDeckError::Pdf(format!("cannot read object {:?}: {}", id, err)))
    }

    fn dictionary(&self, id: ObjectId) -> Result<&Dictionary> {
        self.document
            .get_dictionary(id)
            .map_err(|err| PdfDeckError::Pdf(format!("cannot read dictionary {:?}: {}", id, err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_blank_pdf;

    #[test]
    fn reports_page_count_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.pdf");
        write_blank_pdf(&path, 2, 215.9, 279.4);

        let info = PdfInfo::open(&path).unwrap();
        assert_eq!(info.page_count(), 2);
        assert_eq!(info.source_path(), Some(path.display().to_string().as_str()));

        let (w, h) = info.page_size(1).unwrap();
        assert!((w - 612.0).abs() < 0.5);
        assert!((h - 792.0).abs() < 0.5);
    }

    #[test]
    fn out_of_range_page_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.pdf");
        write_blank_pdf(&path, 1, 100.0, 100.0);

        let bytes = std::fs::read(&path).unwrap();
        let info = PdfInfo::from_bytes(&bytes).unwrap();
        assert!(info.source_path().is_none());
        assert!(matches!(info.page_size(0), Err(PdfDeckError::Pdf(_))));
        assert!(matches!(info.page_size(2), Err(PdfDeckError::Pdf(_))));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            PdfInfo::from_bytes(b"not a pdf"),
            Err(PdfDeckError::Pdf(_))
        ));
    }
}
