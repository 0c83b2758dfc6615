// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: loading pictures for embedding and listing image folders.

pub mod picture;
pub mod set;

pub use picture::Picture;
pub use set::ImageSet;
