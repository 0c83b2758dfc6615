// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image set: the entries of an image folder in slide order.
//
// Directory listings come back in whatever order the filesystem chooses, so
// entries are sorted: names ending in a page index (`demo_2.png`) sort
// numerically within their prefix, so `demo_10` follows `demo_9`; everything
// else sorts by name.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use pdfdeck_core::error::Result;
use tracing::{debug, instrument};

/// The listed entries of an image folder.
#[derive(Debug, Clone)]
pub struct ImageSet {
    entries: Vec<PathBuf>,
}

impl ImageSet {
    /// List every entry directly inside `dir`, in slide order.
    ///
    /// No filtering happens here: a non-image entry fails later, when it is
    /// opened as a picture.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn list(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            entries.push(entry?.path());
        }
        entries.sort_by_cached_key(|path| sort_key(path));

        debug!(count = entries.len(), "Image folder listed");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that sizes the slide canvas.
    pub fn first(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

/// Split a file stem into its prefix and trailing decimal index, if any.
fn split_index(stem: &str) -> (&str, Option<u64>) {
    let digits = stem
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return (stem, None);
    }
    let (prefix, index) = stem.split_at(stem.len() - digits);
    match index.parse() {
        Ok(value) => (prefix, Some(value)),
        Err(_) => (stem, None),
    }
}

/// Prefix, then indexed names before unindexed ones, then index, then the
/// full file name as a tie-breaker.
type SortKey = (String, bool, u64, OsString);

fn sort_key(path: &Path) -> SortKey {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let (prefix, index) = split_index(&stem);
    (
        prefix.to_owned(),
        index.is_none(),
        index.unwrap_or(0),
        path.file_name().map(OsStr::to_os_string).unwrap_or_default(),
    )
}
