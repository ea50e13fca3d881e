use tracing::{debug, warn};

use crate::{
    error::AppError,
    models::trip::Trip,
    services::export::{self, build_share_text},
    state::App,
};

/// The platform facilities the core hands its payloads to: share sheet,
/// file downloads, clipboard, and blocking confirmation prompts. Any
/// method may be unavailable or cancelled by the user; callers treat a
/// failure as a signal to fall back, not to retry.
pub trait Platform {
    fn confirm(&mut self, message: &str) -> bool;
    fn share_with_file(
        &mut self,
        title: &str,
        text: &str,
        file_name: &str,
        contents: &[u8],
    ) -> Result<(), AppError>;
    fn share_text(&mut self, title: &str, text: &str) -> Result<(), AppError>;
    fn download(&mut self, file_name: &str, contents: &[u8]) -> Result<(), AppError>;
    fn copy_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// How far down the fallback chain a share or copy request travelled.
/// `ManualCopy` is the terminal step: nothing automated worked, and the
/// text is returned so the presentation layer can display it for manual
/// copying. Some representation of the data is therefore always made
/// available.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    SharedWithFile,
    SharedText,
    DownloadedAndCopied,
    Copied,
    ManualCopy(String),
}

/// Share one trip: summary text plus the JSON snapshot as an attachment,
/// degrading step by step when the platform cannot deliver.
pub fn share_trip(
    platform: &mut dyn Platform,
    trip: &Trip,
    headcount: f64,
) -> Result<ShareOutcome, AppError> {
    let text = build_share_text(trip, headcount);
    let snapshot = export::build_json_snapshot(trip)?;
    let file_name = export::json_filename(trip);

    match platform.share_with_file(&trip.title, &text, &file_name, snapshot.as_bytes()) {
        Ok(()) => return Ok(ShareOutcome::SharedWithFile),
        Err(err) => debug!("share with file unavailable: {err}"),
    }

    match platform.share_text(&trip.title, &text) {
        Ok(()) => return Ok(ShareOutcome::SharedText),
        Err(err) => debug!("text share unavailable: {err}"),
    }

    if let Err(err) = platform.download(&file_name, snapshot.as_bytes()) {
        warn!("snapshot download failed: {err}");
    }
    match platform.copy_text(&text) {
        Ok(()) => Ok(ShareOutcome::DownloadedAndCopied),
        Err(err) => {
            debug!("clipboard unavailable: {err}");
            Ok(ShareOutcome::ManualCopy(text))
        }
    }
}

/// Copy the summary text, falling back to handing it over for manual copy.
pub fn copy_share_text(platform: &mut dyn Platform, trip: &Trip, headcount: f64) -> ShareOutcome {
    let text = build_share_text(trip, headcount);
    match platform.copy_text(&text) {
        Ok(()) => ShareOutcome::Copied,
        Err(err) => {
            debug!("clipboard unavailable: {err}");
            ShareOutcome::ManualCopy(text)
        }
    }
}

/// Hand the CSV rendition of a trip to the platform's download facility.
pub fn download_csv(platform: &mut dyn Platform, trip: &Trip) -> Result<(), AppError> {
    let bytes = export::export_csv(trip)?;
    platform.download(&export::csv_filename(trip), &bytes)
}

/// Hand the JSON snapshot of a trip to the platform's download facility.
pub fn download_json(platform: &mut dyn Platform, trip: &Trip) -> Result<(), AppError> {
    let snapshot = export::build_json_snapshot(trip)?;
    platform.download(&export::json_filename(trip), snapshot.as_bytes())
}

/// Delete a trip after a blocking confirmation prompt. Returns whether
/// the deletion happened; declining leaves the document untouched.
pub fn delete_trip_with_confirm(
    app: &mut App,
    trip_id: &str,
    platform: &mut dyn Platform,
) -> Result<bool, AppError> {
    if !platform.confirm("本当にこの旅行を削除しますか？") {
        return Ok(false);
    }
    app.delete_trip(trip_id)?;
    Ok(true)
}

/// Delete an expense after a blocking confirmation prompt.
pub fn delete_expense_with_confirm(
    app: &mut App,
    trip_id: &str,
    expense_id: &str,
    platform: &mut dyn Platform,
) -> Result<bool, AppError> {
    if !platform.confirm("削除しますか？") {
        return Ok(false);
    }
    app.delete_expense(trip_id, expense_id)?;
    Ok(true)
}
