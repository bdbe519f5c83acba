//! Employee report models

use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// Headcount and salary total of one department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DepartmentHeadcount {
    /// Department name
    pub name: String,
    /// Number of employees
    pub value: i64,
    pub total_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

/// Dashboard overview
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStats {
    pub total_employees: i64,
    pub total_salary: f64,
    /// Five most recent joiners, newest first
    pub recent_joinees: Vec<Employee>,
    pub department_wise_count: Vec<DepartmentCount>,
}

/// Leave requests per employee starting in the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeLeaveCount {
    pub id: i64,
    pub name: String,
    pub total_leaves: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySummary {
    pub average_salary: f64,
    pub highest_salary: f64,
    pub lowest_salary: f64,
    pub total_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    /// Band label: `0-30k`, `30k-50k`, `50k-80k` or `80k+`
    pub range: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    /// `None` when there are no employees
    pub stats: Option<SalarySummary>,
    pub salary_ranges: Vec<SalaryRange>,
}

/// `{ "data": [...] }` wrapper used by the department and leave dashboards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for DataList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
