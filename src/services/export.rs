use csv::{QuoteStyle, WriterBuilder};
use num_format::{Locale, ToFormattedString};

use crate::{
    error::AppError,
    models::{
        category::Category,
        trip::{normalize_headcount, Trip},
    },
};

/// Yen display format: symbol plus grouped thousands, no decimals.
pub fn format_yen(amount: f64) -> String {
    format!("¥{}", (amount.round() as i64).to_formatted_string(&Locale::ja))
}

/// The human-readable summary handed to the share sheet or the clipboard.
/// One line per category in taxonomy order, then the grand total and the
/// per-person split for the given headcount.
pub fn build_share_text(trip: &Trip, headcount: f64) -> String {
    let people = normalize_headcount(headcount);
    let grand = trip.grand_total();
    let per = trip.per_person_split(headcount);

    let date_text = if trip.date.is_empty() {
        String::new()
    } else {
        format!("{}の", trip.date)
    };
    let intro = format!("{}（{}旅行）の費用まとめ：\n", trip.title, date_text);
    let detail = trip
        .category_totals()
        .iter()
        .map(|(category, total)| format!("{}: {}", category.label(), format_yen(*total)))
        .collect::<Vec<_>>()
        .join("\n");
    let footer = format!(
        "\n合計：{}\n{}人で割ると1人 {} です！",
        format_yen(grand),
        people,
        format_yen(per)
    );

    intro + &detail + &footer
}

/// Self-contained pretty-printed snapshot of one trip. Ids are included
/// on purpose: the import reconciler re-keys them unconditionally, so the
/// snapshot can travel between documents without collisions.
pub fn build_json_snapshot(trip: &Trip) -> Result<String, AppError> {
    serde_json::to_string_pretty(trip).map_err(|err| AppError::Other(err.into()))
}

/// CSV rendition of a trip: localized header, one row per expense, every
/// field quoted with embedded quotes doubled.
pub fn export_csv(trip: &Trip) -> Result<Vec<u8>, AppError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(["カテゴリ", "内容", "金額"])?;
    for expense in &trip.expenses {
        let amount = expense.amount.to_string();
        writer.write_record([expense.category.label(), expense.desc.as_str(), &amount])?;
    }
    writer
        .into_inner()
        .map_err(|err| AppError::Other(err.into()))
}

pub fn csv_filename(trip: &Trip) -> String {
    format!("{}.csv", basename(trip))
}

pub fn json_filename(trip: &Trip) -> String {
    format!("{}.json", basename(trip))
}

fn basename(trip: &Trip) -> &str {
    if trip.title.is_empty() {
        "travel"
    } else {
        &trip.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::Expense;

    fn kyoto() -> Trip {
        let mut trip = Trip::new("Kyoto", "");
        trip.expenses
            .push(Expense::new(Category::Transport, "train", 1000.0));
        trip.expenses.push(Expense::new(Category::Food, "lunch", 500.0));
        trip
    }

    #[test]
    fn yen_format_groups_thousands() {
        assert_eq!(format_yen(14000.0), "¥14,000");
        assert_eq!(format_yen(0.0), "¥0");
        assert_eq!(format_yen(1234567.0), "¥1,234,567");
    }

    #[test]
    fn share_text_lists_every_category_and_the_split() {
        let text = build_share_text(&kyoto(), 2.0);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Kyoto（旅行）の費用まとめ：");
        assert_eq!(lines[1], "交通費: ¥1,000");
        assert_eq!(lines[2], "食費: ¥500");
        assert_eq!(lines[3], "観光: ¥0");
        assert_eq!(lines[4], "宿泊: ¥0");
        assert_eq!(lines[5], "その他: ¥0");
        assert_eq!(lines[6], "合計：¥1,500");
        assert_eq!(lines[7], "2人で割ると1人 ¥750 です！");
    }

    #[test]
    fn share_text_mentions_the_date_when_present() {
        let mut trip = kyoto();
        trip.date = "5月".into();
        let text = build_share_text(&trip, 1.0);
        assert!(text.starts_with("Kyoto（5月の旅行）の費用まとめ：\n"));
    }

    #[test]
    fn csv_quotes_every_field_and_doubles_embedded_quotes() {
        let mut trip = Trip::new("quotes", "");
        trip.expenses
            .push(Expense::new(Category::Other, "He said \"hi\"", 30.0));
        let bytes = export_csv(&trip).unwrap();
        let csv = String::from_utf8(bytes).unwrap();
        assert!(csv.starts_with("\"カテゴリ\",\"内容\",\"金額\"\n"));
        assert!(csv.contains("\"He said \"\"hi\"\"\""));
        assert!(csv.contains("\"30\""));
    }

    #[test]
    fn filenames_fall_back_to_travel() {
        let mut trip = Trip::new("京都", "");
        assert_eq!(json_filename(&trip), "京都.json");
        trip.title = String::new();
        assert_eq!(csv_filename(&trip), "travel.csv");
    }

    #[test]
    fn snapshot_is_a_self_contained_trip_object() {
        let trip = kyoto();
        let snapshot = build_json_snapshot(&trip).unwrap();
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value["title"], "Kyoto");
        assert_eq!(value["expenses"].as_array().unwrap().len(), 2);
        assert_eq!(value["id"], trip.id.as_str());
    }
}
