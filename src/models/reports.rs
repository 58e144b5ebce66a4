use serde::{Deserialize, Serialize};

use crate::models::dashboard::TrendValue;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSummary {
    pub new_leads: TrendValue,
    pub assigned_leads: TrendValue,
    pub follow_ups: TrendValue,
    pub signed_leads: TrendValue,
    pub invitation_rate: TrendValue,
    pub visit_rate: TrendValue,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub window: String,
    pub x_axis: Vec<String>,
    pub series: Vec<i64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FunnelItem {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LossItem {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StaffRankingItem {
    pub staff_id: String,
    pub name: String,
    pub new_leads: i64,
    pub follow_ups: i64,
    pub signed: i64,
    pub conversion: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReportsFiltersMeta {
    pub departments: Vec<FilterOption>,
    pub staffs: Vec<FilterOption>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PersonalGoalProgress {
    pub signed_current: i64,
    pub signed_target: i64,
    pub signed_percent: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportsOverviewData {
    pub summary: ReportsSummary,
    pub trend: TrendSeries,
    pub funnel: Vec<FunnelItem>,
    pub loss: Vec<LossItem>,
    pub staff_ranking: Vec<StaffRankingItem>,
    pub filters_meta: ReportsFiltersMeta,
    #[serde(default)]
    pub personal_goal: Option<PersonalGoalProgress>,
}

/// Filters for the reports overview; serialized snake_case on the wire
#[derive(Clone, PartialEq, Debug)]
pub struct ReportsQuery {
    pub trend_window: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub dept_name: Option<String>,
    pub owner_id: Option<String>,
}

impl Default for ReportsQuery {
    fn default() -> Self {
        Self {
            trend_window: "7days".to_string(),
            start_date: None,
            end_date: None,
            dept_name: None,
            owner_id: None,
        }
    }
}

impl ReportsQuery {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("trend_window".to_string(), self.trend_window.clone())];
        for (key, value) in [
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
            ("dept_name", &self.dept_name),
            ("owner_id", &self.owner_id),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}
