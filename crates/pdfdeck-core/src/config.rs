// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PdfDeckError, Result};
use crate::types::PageSize;

/// Default rasterisation resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Default file name of the generated presentation.
pub const DEFAULT_OUTPUT_NAME: &str = "output.pptx";

/// Settings shared by every conversion, optionally loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Rasterisation resolution in dots per inch.
    pub dpi: u32,
    /// File name of the presentation written next to the image folder.
    pub output_name: String,
    /// Page size used when composing images into a PDF.
    pub pdf_page_size: PageSize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            pdf_page_size: PageSize::A4_POINTS,
        }
    }
}

impl ConvertConfig {
    /// Read a configuration file. Missing fields fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no conversion can run with.
    pub fn validate(&self) -> Result<()> {
        validate_dpi(self.dpi)?;
        if self.output_name.trim().is_empty() {
            return Err(PdfDeckError::InvalidConfig(
                "output name must not be empty".into(),
            ));
        }
        if self.pdf_page_size.width_pt <= 0.0 || self.pdf_page_size.height_pt <= 0.0 {
            return Err(PdfDeckError::InvalidConfig(format!(
                "page size must be positive, got {}x{} pt",
                self.pdf_page_size.width_pt, self.pdf_page_size.height_pt
            )));
        }
        Ok(())
    }

    /// Per-call options for the PDF-to-presentation pipeline.
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            dpi: self.dpi,
            output_name: self.output_name.clone(),
            image_dir: None,
        }
    }
}

/// Arguments of a single PDF-to-presentation run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub dpi: u32,
    pub output_name: String,
    /// Use this folder for the page images instead of the one derived from the PDF name.
    pub image_dir: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertConfig::default().options()
    }
}

/// A zero DPI would render empty images.
pub fn validate_dpi(dpi: u32) -> Result<()> {
    if dpi == 0 {
        return Err(PdfDeckError::InvalidConfig("dpi must be greater than zero".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConvertConfig::default();
        assert_eq!(config.dpi, 300);
        assert_eq!(config.output_name, "output.pptx");
        assert_eq!(config.pdf_page_size, PageSize::A4_POINTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdfdeck.json");
        std::fs::write(&path, r#"{ "dpi": 150 }"#).unwrap();

        let config = ConvertConfig::load(&path).unwrap();
        assert_eq!(config.dpi, 150);
        assert_eq!(config.output_name, "output.pptx");
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let config = ConvertConfig {
            dpi: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PdfDeckError::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ dpi: ").unwrap();

        assert!(matches!(
            ConvertConfig::load(&path),
            Err(PdfDeckError::Serialization(_))
        ));
    }
}
