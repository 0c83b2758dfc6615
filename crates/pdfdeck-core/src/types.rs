// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: length units, slide and page geometry, image kinds.

use serde::{Deserialize, Serialize};

/// Points per pixel when a pixel is treated as 1/96 inch.
pub const POINTS_PER_PIXEL: f64 = 0.75;

/// English Metric Units per typographic point (914400 EMU per inch / 72).
pub const EMU_PER_POINT: i64 = 12_700;

/// Smallest slide edge PowerPoint opens (1 inch).
pub const MIN_SLIDE_EMU: i64 = 914_400;

/// Largest slide edge PowerPoint opens (56 inches).
pub const MAX_SLIDE_EMU: i64 = 51_206_400;

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// A length in typographic points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Points(pub f64);

impl Points {
    /// Convert a pixel count to points at 96 DPI.
    pub fn from_pixels(pixels: u32) -> Self {
        Self(pixels as f64 * POINTS_PER_PIXEL)
    }

    /// Convert to EMU, truncating any fractional remainder.
    pub fn to_emu(self) -> Emu {
        Emu((self.0 * EMU_PER_POINT as f64) as i64)
    }
}

/// A length in English Metric Units, the OOXML drawing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Emu(pub i64);

impl std::fmt::Display for Emu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The canvas every slide of a presentation shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSize {
    pub width: Emu,
    pub height: Emu,
}

impl SlideSize {
    /// Derive the canvas from an image's pixel dimensions (`pixels × 0.75` points).
    pub fn from_pixels(width_px: u32, height_px: u32) -> Self {
        Self {
            width: Points::from_pixels(width_px).to_emu(),
            height: Points::from_pixels(height_px).to_emu(),
        }
    }

    /// Whether both edges lie in the range PowerPoint accepts for `sldSz`.
    pub fn within_powerpoint_limits(&self) -> bool {
        let ok = |edge: Emu| (MIN_SLIDE_EMU..=MAX_SLIDE_EMU).contains(&edge.0);
        ok(self.width) && ok(self.height)
    }
}

/// Page size of a generated PDF, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// The A4-like 595×842 pt page used for image-to-PDF output.
    pub const A4_POINTS: PageSize = PageSize {
        width_pt: 595.0,
        height_pt: 842.0,
    };

    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let to_mm = |pt: f32| pt / POINTS_PER_INCH * 25.4;
        (to_mm(self.width_pt), to_mm(self.height_pt))
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4_POINTS
    }
}

/// Raster image formats that can be embedded in a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageKind {
    /// MIME type used for the OOXML content-type default.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    /// Canonical file extension for the media part.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
        }
    }
}
