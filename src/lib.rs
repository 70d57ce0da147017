//! pm_poster
//!
//! A small Rust library for turning a table of PM2.5 readings into the daily
//! "top 5 / bottom 5" poster. Pairs with the `pm-poster` CLI.
//!
//! ### Features
//! - Load `Location,Value` readings from CSV with precise row-level errors
//! - Rank the 5 most and 5 least polluted locations (stable on ties)
//! - Classify values into the Thai AQI color bands
//! - Format the poster date in Thai with a Buddhist-era year
//! - Draw everything onto a PNG template and save it atomically
//!
//! ### Example
//! ```no_run
//! use pm_poster::{PosterConfig, create_poster};
//!
//! let now = chrono::Local::now();
//! let config = PosterConfig::for_date(&now);
//! let report = create_poster(&config, &now)?;
//! println!("wrote {}", report.output.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod date;
pub mod error;
pub mod models;
pub mod poster;
pub mod stats;
pub mod storage;
pub mod viz;

pub use error::PosterError;
pub use models::{RankOrder, RankedList, Rankings, Reading};
pub use poster::{PosterConfig, PosterReport, create_poster};
