// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfdeck — PDF to slide deck converter
//
// Entry point. Initialises logging, parses the command line and runs the
// selected conversion.

mod cli;
mod progress;

use std::process::ExitCode;

use clap::Parser;
use pdfdeck_core::{ConvertOptions, Result};
use pdfdeck_document::{
    PdfInfo, PdfRasterizer, PdfWriter, images_to_pptx_with_progress, pdf_to_pptx_with_progress,
};

use cli::{Cli, Command, with_overrides};
use progress::BarReporter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let mut bars = BarReporter::new();

    let outcome = match cli.command {
        Command::PdfToPptx {
            pdf,
            image_dir,
            output_name,
            dpi,
        } => {
            let config = with_overrides(config, dpi, output_name)?;
            let options = ConvertOptions {
                image_dir,
                ..config.options()
            };
            pdf_to_pptx_with_progress(&pdf, &options, &mut |p| bars.report(p)).map(|output| {
                println!("{}", output.display());
            })
        }
        Command::PdfToImages {
            pdf,
            target_dir,
            dpi,
        } => {
            let config = with_overrides(config, dpi, None)?;
            PdfRasterizer::new(config.dpi)?
                .rasterize_with_progress(&pdf, target_dir.as_deref(), &mut |p| bars.report(p))
                .map(|written| {
                    for path in written {
                        println!("{}", path.display());
                    }
                })
        }
        Command::ImagesToPptx {
            image_dir,
            output_name,
        } => {
            let config = with_overrides(config, None, output_name)?;
            images_to_pptx_with_progress(&image_dir, &config.output_name, &mut |p| {
                bars.report(p)
            })
            .map(|output| println!("{}", output.display()))
        }
        Command::ImagesToPdf { output, images } => {
            PdfWriter::new(config.pdf_page_size)
                .write_images_to_file(&images, &output)
                .map(|()| println!("{}", output.display()))
        }
        Command::Info { pdf } => print_info(&PdfInfo::open(&pdf)?),
    };

    bars.finish();
    outcome
}

fn print_info(info: &PdfInfo) -> Result<()> {
    let pages = info.page_count();
    if let Some(path) = info.source_path() {
        println!("file:  {path}");
    }
    println!("pages: {pages}");
    for page in 1..=pages as u32 {
        let (width, height) = info.page_size(page)?;
        println!("  {page:>4}: {width:.1} x {height:.1} pt");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdfdeck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn images2pdf_writes_the_output() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("scan.png");
        image::RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 0]))
            .save(&image)
            .unwrap();
        let output = dir.path().join("scan.pdf");

        run(parse(&[
            "images2pdf",
            output.to_str().unwrap(),
            image.to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(PdfInfo::open(&output).unwrap().page_count(), 1);
    }

    #[test]
    fn missing_image_is_an_error_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("scan.pdf");
        let missing = dir.path().join("missing.png");

        assert!(
            run(parse(&[
                "images2pdf",
                output.to_str().unwrap(),
                missing.to_str().unwrap(),
            ]))
            .is_err()
        );
        assert!(!output.exists());
    }
}
