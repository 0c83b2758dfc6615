// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal progress bars driven by conversion progress events.

use indicatif::{ProgressBar, ProgressStyle};
use pdfdeck_document::{Progress, Stage};

/// Shows one bar per conversion stage, replacing it when the stage changes.
#[derive(Default)]
pub struct BarReporter {
    current: Option<(Stage, ProgressBar)>,
}

impl BarReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, event: Progress) {
        let bar = match &self.current {
            Some((stage, bar)) if *stage == event.stage => bar.clone(),
            _ => {
                self.finish();
                let bar = stage_bar(event.stage, event.total as u64);
                self.current = Some((event.stage, bar.clone()));
                bar
            }
        };

        bar.set_position(event.done as u64);
        if event.is_last() {
            bar.finish();
        }
    }

    /// Close the active bar, if any.
    pub fn finish(&mut self) {
        if let Some((_, bar)) = self.current.take() {
            if !bar.is_finished() {
                bar.abandon();
            }
        }
    }
}

fn stage_bar(stage: Stage, total: u64) -> ProgressBar {
    let label = match stage {
        Stage::Rasterize => "pages ",
        Stage::Compose => "slides",
    };
    let style = ProgressStyle::default_bar()
        .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let bar = ProgressBar::new(total);
    bar.set_style(style);
    bar.set_prefix(label);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stage_replaces_the_bar() {
        let mut reporter = BarReporter::new();
        reporter.report(Progress {
            stage: Stage::Rasterize,
            done: 1,
            total: 2,
        });
        let first = reporter.current.as_ref().unwrap().1.clone();

        reporter.report(Progress {
            stage: Stage::Rasterize,
            done: 2,
            total: 2,
        });
        assert!(first.is_finished());
        assert_eq!(first.position(), 2);

        reporter.report(Progress {
            stage: Stage::Compose,
            done: 1,
            total: 3,
        });
        let (stage, bar) = reporter.current.as_ref().unwrap();
        assert_eq!(*stage, Stage::Compose);
        assert_eq!(bar.length(), Some(3));

        reporter.finish();
        assert!(reporter.current.is_none());
    }
}
