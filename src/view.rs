use crate::{
    models::{category::Category, document::Document, trip::Trip},
    services::export::format_yen,
};

pub const NO_TRIPS: &str = "旅行がありません。＋で作成";
pub const NO_SELECTION: &str = "旅行を選択してください";
pub const NO_EXPENSES: &str = "まだ費用がありません。";

/// Everything a rendering surface needs, recomputed from scratch on every
/// change. Pure data: building it has no side effects and touches no
/// platform facility.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub trips: Vec<TripCard>,
    pub current: Option<TripDetail>,
    pub chart: ChartInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub total: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripDetail {
    pub title: String,
    pub date: String,
    pub expenses: Vec<ExpenseRow>,
    pub category_pills: Vec<String>,
    pub grand_total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: String,
    pub category: String,
    pub desc: String,
    pub amount: String,
}

/// Labeled values for the charting widget. All-zero totals degrade to a
/// single "No data" slice so the widget always has something to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInput {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartInput {
    fn from_totals(totals: &[(Category, f64)]) -> Self {
        if totals.iter().any(|(_, v)| *v > 0.0) {
            Self {
                labels: totals.iter().map(|(c, _)| c.label().to_string()).collect(),
                values: totals.iter().map(|(_, v)| *v).collect(),
            }
        } else {
            Self {
                labels: vec!["No data".to_string()],
                values: vec![1.0],
            }
        }
    }

    fn empty() -> Self {
        Self::from_totals(&[])
    }
}

pub fn build_view(document: &Document) -> ViewModel {
    let trips = document
        .trips
        .iter()
        .map(|trip| TripCard {
            id: trip.id.clone(),
            title: trip.title.clone(),
            date: trip.date.clone(),
            total: format_yen(trip.grand_total()),
            active: document.current_trip_id.as_deref() == Some(trip.id.as_str()),
        })
        .collect();

    let current = document.current_trip();
    ViewModel {
        trips,
        current: current.map(build_detail),
        chart: current.map_or_else(ChartInput::empty, |trip| {
            ChartInput::from_totals(&trip.category_totals())
        }),
    }
}

fn build_detail(trip: &Trip) -> TripDetail {
    let totals = trip.category_totals();
    TripDetail {
        title: trip.title.clone(),
        date: trip.date.clone(),
        expenses: trip
            .expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id.clone(),
                category: e.category.label().to_string(),
                desc: e.desc.clone(),
                amount: format_yen(e.amount),
            })
            .collect(),
        category_pills: totals
            .iter()
            .map(|(c, v)| format!("{} {}", c.label(), format_yen(*v)))
            .collect(),
        grand_total: format_yen(trip.grand_total()),
    }
}
