//! Poster rendering: draw the date and both ranked lists onto a template image.
//!
//! - Text goes through plotters' `ab_glyph` path on a [`BitMapBackend`] over an
//!   in-memory buffer, so no system fontconfig is needed
//! - Font sizes are em sizes; text is centered vertically on the midpoint between
//!   ascender and descender, measured from the font's own metrics
//! - Values are colored by [`AqiBand`]
//! - The template's alpha channel is kept; text coverage raises alpha to opaque
//! - Output is written to a temporary file and renamed into place

pub mod types;
pub mod util;

// Re-export types for public API
pub use types::{FontPaths, FontSizes, Layout, ListLayout, UNIT_LOWER, UNIT_UPPER};
pub use util::{AqiBand, format_value, pm25_color};

use crate::error::{PosterError, Result};
use crate::models::{RankedList, Rankings};

use ab_glyph::{Font, FontRef};

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageEncoder, RgbaImage};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;

use std::io::{BufWriter, Write};
use std::path::Path;

/// Family name the bold poster font is registered under.
pub const BOLD_FAMILY: &str = "pm-poster-bold";
/// Family name the regular poster font is registered under.
pub const REGULAR_FAMILY: &str = "pm-poster-regular";

/// The two poster font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Bold,
    Regular,
}

impl Weight {
    pub fn family(self) -> &'static str {
        match self {
            Weight::Bold => BOLD_FAMILY,
            Weight::Regular => REGULAR_FAMILY,
        }
    }
}

/// Vertical metrics of a font, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    ascent: f32,
    /// Negative: below the baseline.
    descent: f32,
    units_per_em: f32,
}

impl FontMetrics {
    fn of(font: &FontRef<'_>) -> Self {
        Self {
            ascent: font.ascent_unscaled(),
            descent: font.descent_unscaled(),
            units_per_em: font.units_per_em().unwrap_or(1000.0),
        }
    }

    /// ab_glyph scales by ascent-to-descent height; convert an em size to that scale.
    pub fn glyph_scale(&self, em_px: f64) -> f64 {
        em_px * f64::from(self.ascent - self.descent) / f64::from(self.units_per_em)
    }

    /// Descent in pixels at `em_px` (negative).
    pub fn descent_px(&self, em_px: f64) -> f64 {
        em_px * f64::from(self.descent) / f64::from(self.units_per_em)
    }
}

/// Both poster fonts, registered with plotters, plus their metrics.
///
/// Rendering takes a `&PosterFonts`, so text can only be drawn after fonts loaded.
#[derive(Debug, Clone, Copy)]
pub struct PosterFonts {
    bold: FontMetrics,
    regular: FontMetrics,
}

impl PosterFonts {
    /// Read and register the bold and regular fonts.
    ///
    /// Both files are read before anything is registered, so a missing regular
    /// font never leaves a half-registered set behind.
    pub fn load(paths: &FontPaths) -> Result<Self> {
        let bold = read_font(&paths.bold)?;
        let regular = read_font(&paths.regular)?;
        let fonts = Self {
            bold: register(BOLD_FAMILY, &paths.bold, bold)?,
            regular: register(REGULAR_FAMILY, &paths.regular, regular)?,
        };
        log::debug!(
            "registered fonts {} and {}",
            paths.bold.display(),
            paths.regular.display()
        );
        Ok(fonts)
    }

    pub fn metrics(&self, weight: Weight) -> FontMetrics {
        match weight {
            Weight::Bold => self.bold,
            Weight::Regular => self.regular,
        }
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| PosterError::FontMissing {
        path: path.to_path_buf(),
        source,
    })
}

fn register(family: &str, path: &Path, bytes: Vec<u8>) -> Result<FontMetrics> {
    let invalid = || PosterError::FontInvalid {
        path: path.to_path_buf(),
    };
    let metrics = FontRef::try_from_slice(&bytes)
        .map(|font| FontMetrics::of(&font))
        .map_err(|_| invalid())?;
    // The plotters registry only holds `'static` data and lives for the whole process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(family, FontStyle::Normal, bytes).map_err(|_| invalid())?;
    Ok(metrics)
}

/// Open and decode the background template as RGBA.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let missing = |source| PosterError::TemplateMissing {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(missing)?
        .with_guessed_format()
        .map_err(missing)?
        .decode()
        .map_err(|source| PosterError::TemplateDecode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(img.to_rgba8())
}

/// Draw the date and both lists onto a copy of `template`.
pub fn render_poster(
    template: &RgbaImage,
    rankings: &Rankings,
    date_text: &str,
    fonts: &PosterFonts,
    layout: &Layout,
) -> Result<RgbaImage> {
    let size = template.dimensions();
    let mut drawn: Vec<u8> = template
        .pixels()
        .flat_map(|p| [p[0], p[1], p[2]])
        .collect();
    // Same text in white on black: per-pixel coverage, independent of template colors.
    let mut coverage = vec![0u8; drawn.len()];

    let poster = Poster {
        rankings,
        date_text,
        fonts,
        layout,
    };
    poster.paint(&mut drawn, size, Ink::Color)?;
    poster.paint(&mut coverage, size, Ink::Coverage)?;
    Ok(compose(template, &drawn, &coverage))
}

/// Load the template, render, and save a PNG at `out_path`.
///
/// The template file is only read. Nothing is written unless every step succeeds.
pub fn render_poster_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    template_path: P,
    rankings: &Rankings,
    date_text: &str,
    fonts: &PosterFonts,
    layout: &Layout,
    out_path: Q,
) -> Result<()> {
    let template = load_template(template_path)?;
    let poster = render_poster(&template, rankings, date_text, fonts, layout)?;
    save_png(&poster, out_path)
}

#[derive(Debug, Clone, Copy)]
enum Ink {
    Color,
    Coverage,
}

impl Ink {
    fn paint(self, color: RGBColor) -> RGBColor {
        match self {
            Ink::Color => color,
            Ink::Coverage => WHITE,
        }
    }
}

struct Poster<'a> {
    rankings: &'a Rankings,
    date_text: &'a str,
    fonts: &'a PosterFonts,
    layout: &'a Layout,
}

impl Poster<'_> {
    fn paint(&self, buf: &mut [u8], size: (u32, u32), ink: Ink) -> Result<()> {
        let root = BitMapBackend::with_buffer(buf, size).into_drawing_area();
        self.draw(&root, ink)?;
        root.present()
            .map_err(|e| PosterError::Draw(format!("{:?}", e)))
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ink: Ink) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let layout = self.layout;
        let (r, g, b) = layout.date_color;
        self.text(
            root,
            ink,
            Label {
                text: self.date_text,
                weight: Weight::Bold,
                em_px: layout.font_sizes.date,
                color: RGBColor(r, g, b),
                h_pos: HPos::Center,
            },
            layout.date,
        )?;

        self.list(root, ink, &self.rankings.top, &layout.top)?;
        self.list(root, ink, &self.rankings.bottom, &layout.bottom)?;
        Ok(())
    }

    fn list<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        ink: Ink,
        list: &RankedList,
        cols: &ListLayout,
    ) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let layout = self.layout;
        let sizes = &layout.font_sizes;

        for (rank, reading) in list.iter_ranked() {
            let y = layout.row_y(cols, rank - 1);
            let rank_text = rank.to_string();
            self.text(
                root,
                ink,
                Label::black(&rank_text, Weight::Bold, sizes.rank),
                (cols.rank_x, y),
            )?;
            if !reading.location.is_empty() {
                self.text(
                    root,
                    ink,
                    Label::black(&reading.location, Weight::Regular, sizes.location),
                    (cols.location_x, y),
                )?;
            }

            let value_text = format_value(reading.value, self.rankings.value_format);
            self.text(
                root,
                ink,
                Label {
                    text: &value_text,
                    weight: Weight::Bold,
                    em_px: sizes.value,
                    color: pm25_color(reading.value),
                    h_pos: HPos::Center,
                },
                (cols.value_x, y),
            )?;

            self.text(
                root,
                ink,
                Label::black(UNIT_UPPER, Weight::Regular, sizes.unit),
                (cols.unit_x, y + layout.unit_upper_dy),
            )?;
            self.text(
                root,
                ink,
                Label::black(UNIT_LOWER, Weight::Regular, sizes.unit),
                (cols.unit_x, y + layout.unit_lower_dy),
            )?;
        }
        Ok(())
    }

    /// Draw `label` with its ascender/descender midpoint on `anchor.1`.
    fn text<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        ink: Ink,
        label: Label<'_>,
        anchor: (i32, i32),
    ) -> Result<()>
    where
        DB: DrawingBackend,
    {
        let metrics = self.fonts.metrics(label.weight);
        let scale = metrics.glyph_scale(label.em_px);
        let style = (label.weight.family(), scale)
            .into_font()
            .color(&ink.paint(label.color))
            .pos(Pos::new(label.h_pos, VPos::Top));
        // Top-anchored ab_glyph text puts the baseline half a scale below `y`,
        // so the midpoint lands on the anchor when `y` is one descent above it.
        let y = anchor.1 + metrics.descent_px(label.em_px).round() as i32;
        root.draw_text(label.text, &style, (anchor.0, y))
            .map_err(|e| PosterError::Draw(format!("{:?}", e)))
    }
}

struct Label<'a> {
    text: &'a str,
    weight: Weight,
    em_px: f64,
    color: RGBColor,
    h_pos: HPos,
}

impl<'a> Label<'a> {
    /// Left-aligned black text.
    fn black(text: &'a str, weight: Weight, em_px: f64) -> Self {
        Self {
            text,
            weight,
            em_px,
            color: BLACK,
            h_pos: HPos::Left,
        }
    }
}

/// Put drawn RGB over the template where text covers it. Alpha rises toward
/// opaque in proportion to coverage; uncovered pixels stay as they were.
fn compose(template: &RgbaImage, drawn: &[u8], coverage: &[u8]) -> RgbaImage {
    let mut out = template.clone();
    let pixels = out
        .pixels_mut()
        .zip(drawn.chunks_exact(3))
        .zip(coverage.chunks_exact(3));
    for ((px, rgb), cov) in pixels {
        let c = u16::from(cov[0].max(cov[1]).max(cov[2]));
        if c == 0 {
            continue;
        }
        let a = u16::from(px[3]);
        let alpha = a + ((255 - a) * c + 127) / 255;
        px.0 = [rgb[0], rgb[1], rgb[2], alpha as u8];
    }
    out
}

/// Encode `image` as PNG at `path` via a sibling temporary file.
///
/// On any error the temporary file is removed and `path` is left untouched.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let write_err = |source| PosterError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".pm-poster-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(write_err)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        PngEncoder::new(&mut out)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ColorType::Rgba8,
            )
            .map_err(|source| PosterError::OutputEncode {
                path: path.to_path_buf(),
                source,
            })?;
        out.flush().map_err(write_err)?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
