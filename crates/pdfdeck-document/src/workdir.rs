// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Working directory for rasterised pages: a sibling of the PDF named after its
// stem (`slides/demo.pdf` → `slides/demo/`).
//
// The directory is not locked. Two conversions of the same PDF running at the
// same time will race on creation and cleanup.

use std::path::{Path, PathBuf};

use pdfdeck_core::error::{PdfDeckError, Result};
use tracing::{debug, info, instrument};

/// Derive the page-image directory for `pdf_path` without touching the disk.
pub fn image_dir_for(pdf_path: impl AsRef<Path>) -> Result<PathBuf> {
    let pdf_path = pdf_path.as_ref();
    let stem = pdf_path.file_stem().ok_or_else(|| {
        PdfDeckError::InvalidPath(format!("{} has no file name", pdf_path.display()))
    })?;
    let parent = pdf_path.parent().ok_or_else(|| {
        PdfDeckError::InvalidPath(format!("{} has no parent directory", pdf_path.display()))
    })?;
    Ok(parent.join(stem))
}

/// Create the page-image directory for `pdf_path`, or empty it if it exists.
///
/// Only files directly inside the directory are removed. A nested directory
/// makes the call fail, leaving whatever was not yet removed in place.
#[instrument(skip_all, fields(pdf = %pdf_path.as_ref().display()))]
pub fn prepare_image_dir(pdf_path: impl AsRef<Path>) -> Result<PathBuf> {
    let target_dir = image_dir_for(pdf_path)?;

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        info!(dir = %target_dir.display(), "Created image directory");
        return Ok(target_dir);
    }

    let mut removed = 0usize;
    for entry in std::fs::read_dir(&target_dir)? {
        let entry = entry?;
        std::fs::remove_file(entry.path())?;
        removed += 1;
    }
    debug!(dir = %target_dir.display(), removed, "Cleared image directory");

    Ok(target_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_sibling_directory_from_stem() {
        let dir = image_dir_for("slides/demo.pdf").unwrap();
        assert_eq!(dir, PathBuf::from("slides/demo"));

        let bare = image_dir_for("demo.pdf").unwrap();
        assert_eq!(bare, PathBuf::from("demo"));
    }

    #[test]
    fn path_without_stem_is_rejected() {
        assert!(matches!(
            image_dir_for("/"),
            Err(PdfDeckError::InvalidPath(_))
        ));
    }

    #[test]
    fn creates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let pdf = root.path().join("demo.pdf");

        let dir = prepare_image_dir(&pdf).unwrap();
        assert_eq!(dir, root.path().join("demo"));
        assert!(dir.is_dir());
    }

    #[test]
    fn second_call_purges_previous_contents() {
        let root = tempfile::tempdir().unwrap();
        let pdf = root.path().join("demo.pdf");

        let dir = prepare_image_dir(&pdf).unwrap();
        std::fs::write(dir.join("demo_0.png"), b"stale").unwrap();
        std::fs::write(dir.join("notes.txt"), b"stale").unwrap();

        let again = prepare_image_dir(&pdf).unwrap();
        assert_eq!(again, dir);
        assert!(again.is_dir());
        assert_eq!(std::fs::read_dir(&again).unwrap().count(), 0);
    }

    #[test]
    fn nested_directory_fails_cleanup() {
        let root = tempfile::tempdir().unwrap();
        let pdf = root.path().join("demo.pdf");

        let dir = prepare_image_dir(&pdf).unwrap();
        std::fs::create_dir(dir.join("nested")).unwrap();

        assert!(matches!(prepare_image_dir(&pdf), Err(PdfDeckError::Io(_))));
    }
}
