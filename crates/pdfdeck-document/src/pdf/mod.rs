// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module: rasterising pages, composing image PDFs, and inspecting page geometry.

pub mod rasterizer;
pub mod reader;
pub mod writer;

pub use rasterizer::PdfRasterizer;
pub use reader::PdfInfo;
pub use writer::PdfWriter;
