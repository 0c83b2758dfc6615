// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Progress events emitted by long-running conversions.

/// Which step of a conversion an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Rendering PDF pages to PNG files.
    Rasterize,
    /// Adding slides to a presentation.
    Compose,
}

/// A unit of work has finished: `done` of `total` items in `stage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub stage: Stage,
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_last(&self) -> bool {
        self.done >= self.total
    }
}

/// Callback that ignores every event.
pub fn ignore(_: Progress) {}
