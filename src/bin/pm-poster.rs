use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use pm_poster::date::resolve_locale;
use pm_poster::stats::Summary;
use pm_poster::viz::{AqiBand, FontPaths, Layout};
use pm_poster::{PosterConfig, PosterError, create_poster};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pm-poster",
    version,
    about = "Render the daily PM2.5 top-5 / bottom-5 poster"
)]
struct Cli {
    /// CSV with `Location` and `Value` columns.
    #[arg(long, default_value = PosterConfig::DEFAULT_DATA)]
    data: PathBuf,
    /// Background template image.
    #[arg(long, default_value = PosterConfig::DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// Output PNG (default: PM2.5_Report_<YYYY-MM-DD>.png).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Bold font used for the date, ranks and values.
    #[arg(long, default_value = "Sarabun-Bold.ttf")]
    bold_font: PathBuf,
    /// Regular font used for locations and units.
    #[arg(long, default_value = "Sarabun-Regular.ttf")]
    regular_font: PathBuf,
    /// JSON file overriding the default text positions and font sizes.
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Locale tried for the month name, in order (default: th_TH.UTF-8, th_TH).
    #[arg(long = "locale", value_name = "ID")]
    locales: Vec<String>,
    /// Print summary statistics of the readings.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn band_label(band: AqiBand) -> &'static str {
    match band {
        AqiBand::VeryGood => "ดีมาก",
        AqiBand::Good => "ดี",
        AqiBand::Moderate => "ปานกลาง",
        AqiBand::StartsAffecting => "เริ่มมีผลกระทบต่อสุขภาพ",
        AqiBand::Unhealthy => "มีผลกระทบต่อสุขภาพ",
    }
}

fn print_summary(s: &Summary) {
    println!(
        "จำนวน {} จุด  ต่ำสุด={} สูงสุด={} เฉลี่ย={} มัธยฐาน={}",
        s.count,
        fmt_opt(s.min),
        fmt_opt(s.max),
        fmt_opt(s.mean),
        fmt_opt(s.median)
    );
    for band in AqiBand::all() {
        let n = s.bands.get(&band).copied().unwrap_or(0);
        println!("  {}: {}", band_label(band), n);
    }
}

/// Console diagnostic for each failure kind.
fn thai_message(err: &PosterError) -> String {
    match err {
        PosterError::DataFile { path, .. } => {
            format!("ไม่พบไฟล์ข้อมูล '{}'", path.display())
        }
        PosterError::MissingColumn { path, column } => {
            format!("ไฟล์ข้อมูล '{}' ไม่มีคอลัมน์ '{}'", path.display(), column)
        }
        PosterError::MalformedRow { line, reason } => {
            format!("ข้อมูลไม่ถูกต้องที่บรรทัด {}: {}", line, reason)
        }
        PosterError::FontMissing { path, .. } => format!(
            "ไม่พบไฟล์ฟอนต์ '{}'! กรุณาดาวน์โหลด Sarabun-Bold.ttf และ Sarabun-Regular.ttf",
            path.display()
        ),
        PosterError::FontInvalid { path } => {
            format!("ไฟล์ฟอนต์ '{}' ไม่สามารถใช้งานได้", path.display())
        }
        PosterError::TemplateMissing { path, .. } => {
            format!("ไม่พบไฟล์เทมเพลต '{}'", path.display())
        }
        PosterError::TemplateDecode { path, .. } => {
            format!("ไม่สามารถอ่านไฟล์เทมเพลต '{}' ได้", path.display())
        }
        PosterError::Layout { path, reason } => {
            format!("ไฟล์กำหนดตำแหน่ง '{}' ไม่ถูกต้อง: {}", path.display(), reason)
        }
        PosterError::Draw(reason) => format!("วาดโปสเตอร์ไม่สำเร็จ: {}", reason),
        PosterError::OutputWrite { path, .. } | PosterError::OutputEncode { path, .. } => {
            format!("บันทึกไฟล์ '{}' ไม่สำเร็จ", path.display())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PosterError>() {
                Some(e) => eprintln!("{}", thai_message(e)),
                None => eprintln!("เกิดข้อผิดพลาด: {:#}", err),
            }
            log::debug!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let now = chrono::Local::now();
    let layout = match &cli.layout {
        Some(path) => Layout::from_json_file(path)?,
        None => Layout::default(),
    };
    let defaults = PosterConfig::for_date(&now);
    let config = PosterConfig {
        data: cli.data,
        template: cli.template,
        fonts: FontPaths {
            bold: cli.bold_font,
            regular: cli.regular_font,
        },
        output: cli.output.unwrap_or(defaults.output),
        layout,
        locale: if cli.locales.is_empty() {
            defaults.locale
        } else {
            let ids: Vec<&str> = cli.locales.iter().map(String::as_str).collect();
            resolve_locale(&ids)
        },
    };

    // Reported up front, before anything is read or drawn.
    if config.locale.is_none() {
        eprintln!("ไม่สามารถตั้งค่า Locale ภาษาไทยได้");
    }
    let report = create_poster(&config, &now)?;
    if cli.stats {
        print_summary(&report.summary);
    }
    println!(
        "สร้างโปสเตอร์สำเร็จ! บันทึกเป็นไฟล์ '{}'",
        report.output.display()
    );
    Ok(())
}
