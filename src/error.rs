use std::path::PathBuf;
use thiserror::Error;

/// Every way a poster run can fail.
///
/// Each variant aborts the run before an output file is written.
#[derive(Debug, Error)]
pub enum PosterError {
    #[error("data file not found or unreadable: {}", path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("data file {} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("font file not found or unreadable: {}", path.display())]
    FontMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {} is not a TrueType/OpenType font", path.display())]
    FontInvalid { path: PathBuf },

    #[error("template image not found or unreadable: {}", path.display())]
    TemplateMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template image {} cannot be decoded", path.display())]
    TemplateDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("layout file {} is invalid: {reason}", path.display())]
    Layout { path: PathBuf, reason: String },

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("failed to write output image {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode output image {}", path.display())]
    OutputEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = PosterError> = std::result::Result<T, E>;
