// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PPTX module: a minimal PresentationML package holding one full-bleed
// picture per slide.

pub mod deck;
pub mod parts;

pub use deck::SlideDeck;
