//! Export pipeline: snapshot the rendered report region into a raster image
//! and package it as a paginated A4 PDF download.
//!
//! The pipeline is strictly sequential: locate → verify → settle → rasterize
//! → encode → build document → paginate → save. Every failure aborts only the
//! export task; the page stays fully functional and the user may retry.

pub mod capture;
pub mod download;
pub mod pdf;

use crate::shared::locale::Locale;
use chrono::{NaiveDate, Utc};
use gloo_timers::future::TimeoutFuture;

/// Today's date in the browser's local time zone.
///
/// The file name should carry the date the user sees on their clock; around
/// midnight the UTC date can differ by one day.
fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    // getMonth is zero-based.
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .unwrap_or_else(|| Utc::now().date_naive())
}

/// Delay after scrolling the target into view, before capture.
pub const RENDER_SETTLE_MS: u32 = 300;
/// Additional delay so child content finishes rendering.
pub const CONTENT_SETTLE_MS: u32 = 500;
/// Fixed rasterization scale factor.
pub const CAPTURE_SCALE: f64 = 1.5;

/// One export failure per pipeline stage. All are non-fatal and retriable.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    ContentNotFound,
    ContentNotVisible,
    /// A capture/document capability is missing; carries the technical detail.
    LibrariesUnavailable(String),
    CaptureEmpty,
    PdfConstructionFailed(String),
    SaveFailed,
}

impl ExportError {
    /// User-facing message for the given locale.
    pub fn message(&self, locale: Locale) -> String {
        let tr = locale.strings();
        match self {
            ExportError::ContentNotFound => tr.export_err_not_found.to_string(),
            ExportError::ContentNotVisible => tr.export_err_not_visible.to_string(),
            ExportError::LibrariesUnavailable(detail) => {
                format!(
                    "{} ({}). {}",
                    tr.export_err_libraries, detail, tr.export_err_libraries_hint
                )
            }
            ExportError::CaptureEmpty => tr.export_err_capture_empty.to_string(),
            ExportError::PdfConstructionFailed(detail) => {
                format!("{} ({})", tr.export_err_pdf, detail)
            }
            ExportError::SaveFailed => tr.export_err_save.to_string(),
        }
    }
}

/// File name for the exported document: locale prefix + current date.
pub fn export_filename(locale: Locale, date: NaiveDate) -> String {
    format!(
        "{}-{}.pdf",
        locale.strings().file_prefix,
        date.format("%Y-%m-%d")
    )
}

/// Run the full export pipeline for the element with the given DOM id.
///
/// Returns the name of the downloaded file on success.
pub async fn export_report_pdf(target_id: &str, locale: Locale) -> Result<String, ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::ContentNotFound)?;
    let target = document
        .get_element_by_id(target_id)
        .ok_or(ExportError::ContentNotFound)?;

    let rect = target.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Err(ExportError::ContentNotVisible);
    }

    target.scroll_into_view();
    TimeoutFuture::new(RENDER_SETTLE_MS).await;
    TimeoutFuture::new(CONTENT_SETTLE_MS).await;

    let captured = capture::rasterize(
        &target,
        capture::CaptureOptions {
            scale: CAPTURE_SCALE,
            background: "#ffffff",
        },
    )
    .await?;

    let bytes = pdf::build_document(&captured)?;

    let filename = export_filename(locale, local_today());
    download::save_pdf(&bytes, &filename)?;

    log::info!("report exported as {filename}");
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            export_filename(Locale::PtBr, date),
            "analise-ia-2024-01-07.pdf"
        );
        assert_eq!(
            export_filename(Locale::En, date),
            "ai-analysis-2024-01-07.pdf"
        );
    }
}
