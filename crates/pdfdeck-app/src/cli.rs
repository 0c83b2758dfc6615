// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments and their merge with the configuration file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pdfdeck_core::{ConvertConfig, Result};

#[derive(Debug, Parser)]
#[command(name = "pdfdeck")]
#[command(version)]
#[command(about = "Turn PDFs into page images and slide decks, and images back into PDFs", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a PDF into a presentation with one page image per slide
    #[command(name = "pdf2pptx")]
    PdfToPptx {
        #[arg(value_name = "PDF")]
        pdf: PathBuf,

        /// Folder for the page images (default: next to the PDF, named after it)
        #[arg(long, value_name = "DIR")]
        image_dir: Option<PathBuf>,

        /// File name of the presentation, written next to the image folder
        #[arg(long, value_name = "NAME")]
        output_name: Option<String>,

        /// Rendering resolution
        #[arg(long)]
        dpi: Option<u32>,
    },

    /// Render every page of a PDF to PNG
    #[command(name = "pdf2images")]
    PdfToImages {
        #[arg(value_name = "PDF")]
        pdf: PathBuf,

        /// Output folder (default: next to the PDF, named after it)
        #[arg(long, value_name = "DIR")]
        target_dir: Option<PathBuf>,

        /// Rendering resolution
        #[arg(long)]
        dpi: Option<u32>,
    },

    /// Build a presentation from a folder of images
    #[command(name = "images2pptx")]
    ImagesToPptx {
        #[arg(value_name = "DIR")]
        image_dir: PathBuf,

        /// File name of the presentation, written next to the folder
        #[arg(long, value_name = "NAME")]
        output_name: Option<String>,
    },

    /// Compose images into a PDF, one page per image
    #[command(name = "images2pdf")]
    ImagesToPdf {
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        #[arg(value_name = "IMAGE", required = true)]
        images: Vec<PathBuf>,
    },

    /// Print page count and page sizes of a PDF
    Info {
        #[arg(value_name = "PDF")]
        pdf: PathBuf,
    },
}

impl Cli {
    /// The configuration file's settings, or the defaults without one.
    pub fn load_config(&self) -> Result<ConvertConfig> {
        match &self.config {
            Some(path) => ConvertConfig::load(path),
            None => Ok(ConvertConfig::default()),
        }
    }
}

/// Apply command-line flags on top of `config`.
pub fn with_overrides(
    mut config: ConvertConfig,
    dpi: Option<u32>,
    output_name: Option<String>,
) -> Result<ConvertConfig> {
    if let Some(dpi) = dpi {
        config.dpi = dpi;
    }
    if let Some(name) = output_name {
        config.output_name = name;
    }
    config.validate()?;
    Ok(config)
}
