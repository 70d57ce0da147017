//! The end-to-end run: data -> rankings -> fonts -> template -> poster PNG.

use crate::date::{self, THAI_LOCALE_CANDIDATES};
use crate::error::Result;
use crate::models::Rankings;
use crate::stats::{self, RANK_SIZE, Summary};
use crate::storage;
use crate::viz::{self, FontPaths, Layout, PosterFonts};
use chrono::{DateTime, Locale, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

/// Inputs and output of one poster run.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterConfig {
    pub data: PathBuf,
    pub template: PathBuf,
    pub fonts: FontPaths,
    pub output: PathBuf,
    pub layout: Layout,
    /// Locale for the month name; `None` prints English month names.
    pub locale: Option<Locale>,
}

impl PosterConfig {
    pub const DEFAULT_DATA: &'static str = "pm_data.csv";
    pub const DEFAULT_TEMPLATE: &'static str = "template.png";

    /// Default file names, with the output named after `now`'s calendar date.
    pub fn for_date<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            data: PathBuf::from(Self::DEFAULT_DATA),
            template: PathBuf::from(Self::DEFAULT_TEMPLATE),
            fonts: FontPaths::default(),
            output: default_output_name(now),
            layout: Layout::default(),
            locale: date::resolve_locale(THAI_LOCALE_CANDIDATES),
        }
    }
}

/// `PM2.5_Report_YYYY-MM-DD.png`
pub fn default_output_name<Tz>(now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    PathBuf::from(format!("PM2.5_Report_{}.png", date::file_stamp(now)))
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterReport {
    pub output: PathBuf,
    pub date_text: String,
    /// False when no locale was configured and English month names were used.
    pub date_localized: bool,
    pub rankings: Rankings,
    pub summary: Summary,
}

/// Build the poster described by `config` for the moment `now`.
///
/// Steps run in a fixed order (data, fonts, template) and the first failure
/// aborts the run; the output file only appears once everything succeeded.
pub fn create_poster<Tz>(config: &PosterConfig, now: &DateTime<Tz>) -> Result<PosterReport>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let table = storage::load_table(&config.data)?;
    let rankings = stats::rank_table(&table, RANK_SIZE);
    log::info!(
        "ranked {} readings from {}",
        table.readings.len(),
        config.data.display()
    );

    let fonts = PosterFonts::load(&config.fonts)?;

    if config.locale.is_none() {
        log::warn!("no locale configured; using unlocalized month names");
    }
    let date_text = date::format_poster_date(now, config.locale);
    viz::render_poster_to_file(
        &config.template,
        &rankings,
        &date_text,
        &fonts,
        &config.layout,
        &config.output,
    )?;

    Ok(PosterReport {
        output: config.output.clone(),
        date_text,
        date_localized: config.locale.is_some(),
        rankings,
        summary: stats::summary(&table.readings),
    })
}
