use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TrendValue {
    pub value: i64,
    pub trend: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today_new_leads: TrendValue,
    pub week_follow_ups: TrendValue,
    pub month_signed: TrendValue,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTodoItem {
    pub lead_id: String,
    pub name: String,
    pub level: String,
    pub summary: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPoolWarning {
    pub lead_id: String,
    pub name: String,
    pub days_overdue: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GoalProgress {
    pub current: i64,
    pub target: i64,
    pub percent: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPerformance {
    pub follow_up: GoalProgress,
    pub signed: GoalProgress,
    #[serde(default)]
    pub personal_signed: Option<GoalProgress>,
    #[serde(default)]
    pub department_signed: Option<GoalProgress>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewData {
    pub stats: DashboardStats,
    pub todo_list: Vec<DashboardTodoItem>,
    pub pool_warnings: Vec<DashboardPoolWarning>,
    pub performance: DashboardPerformance,
    #[serde(default)]
    pub announcement: String,
}
