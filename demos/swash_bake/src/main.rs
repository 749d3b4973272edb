// Copyright 2026 the Bitmap Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small tool that loads a font file, rasterises its first characters with Swash into a
//! bitmap font, packs them into an atlas and writes the atlas as a PNG using the `image` crate,
//! next to a JSON file describing where each character is.

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use bitmap_font::{
    AtlasBitmapFont, BitmapFont, BitmapFontBuilder, BitmapFontOptions, Canvas, SwashFont,
    WidthPolicy, DEFAULT_CHAR_COUNT,
};
use clap::{Parser, ValueEnum};
use image::codecs::png::PngEncoder;
use log::{info, warn};

/// Bake a font file into a bitmap font atlas.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TrueType or OpenType font file.
    font: PathBuf,

    /// Face index within a font collection.
    #[arg(long, default_value_t = 0)]
    index: u32,

    /// Font size in pixels per em.
    #[arg(short, long, default_value_t = 16)]
    size: u32,

    /// Number of character codes to bake, starting at 0.
    #[arg(short = 'n', long, default_value_t = DEFAULT_CHAR_COUNT)]
    char_count: u32,

    /// How glyph widths are decided.
    #[arg(long, value_enum, default_value_t = Policy::Measured)]
    width_policy: Policy,

    /// Directory the atlas and metadata are written to.
    #[arg(short, long, default_value = "_output")]
    output: PathBuf,

    /// Also write every rendered glyph as its own PNG.
    #[arg(long)]
    glyphs: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Policy {
    /// Use the advance width reported by the font.
    Measured,
    /// Use the extent of the drawn ink.
    InkScan,
}

impl From<Policy> for WidthPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Measured => Self::Measured,
            Policy::InkScan => Self::InkScan,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let data = fs::read(&args.font)?;
    let font = SwashFont::new(data, args.index, args.size)?;
    let options = BitmapFontOptions::new()
        .with_char_count(args.char_count)
        .with_width_policy(args.width_policy.into());
    let bitmap_font = BitmapFontBuilder::new()
        .font(font)
        .options(options)
        .build()?;
    let atlas = AtlasBitmapFont::pack(&bitmap_font);

    fs::create_dir_all(&args.output)?;
    let stem = format!(
        "{}_{}",
        args.font
            .file_stem()
            .map_or_else(|| "font".into(), |stem| stem.to_string_lossy()),
        args.size
    );

    let atlas_path = args.output.join(format!("{stem}_atlas.png"));
    if atlas.image().width() == 0 {
        // PNG cannot hold an empty image.
        warn!(
            "no character could be rendered, skipping {}",
            atlas_path.display()
        );
    } else {
        write_png(atlas.image(), &atlas_path)?;
    }
    let layout_path = args.output.join(format!("{stem}_atlas.json"));
    let layout_file = BufWriter::new(File::create(&layout_path)?);
    serde_json::to_writer_pretty(layout_file, &atlas.layout())?;
    info!(
        "wrote {}x{} atlas to {} and layout to {}",
        atlas.image().width(),
        atlas.image().height(),
        atlas_path.display(),
        layout_path.display()
    );

    if args.glyphs {
        let glyph_dir = args.output.join(format!("{stem}_glyphs"));
        let written = write_glyphs(&bitmap_font, &glyph_dir)?;
        info!("wrote {written} glyphs to {}", glyph_dir.display());
    }

    Ok(())
}

fn write_png(image: &Canvas, path: &Path) -> Result<(), Box<dyn Error>> {
    let file = BufWriter::new(File::create(path)?);
    image.write_with_encoder(PngEncoder::new(file))?;
    Ok(())
}

/// Writes each rendered glyph as `U+XXXX.png`, returning how many were written.
fn write_glyphs(font: &BitmapFont, dir: &Path) -> Result<usize, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let mut written = 0;
    for (code, glyph) in font.present_glyphs() {
        write_png(glyph.image(), &dir.join(format!("U+{code:04X}.png")))?;
        written += 1;
    }
    Ok(written)
}
