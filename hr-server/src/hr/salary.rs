//! Salary bands for the salary dashboard

use shared::models::SalaryRange;

const BANDS: [(&str, f64); 3] = [("0-30k", 30000.0), ("30k-50k", 50000.0), ("50k-80k", 80000.0)];
const TOP_BAND: &str = "80k+";

/// Band label; upper bounds are inclusive
pub fn salary_band(salary: f64) -> &'static str {
    BANDS
        .iter()
        .find(|(_, upper)| salary <= *upper)
        .map(|(label, _)| *label)
        .unwrap_or(TOP_BAND)
}

/// Employee count per non-empty band, in band order
pub fn salary_ranges(salaries: &[f64]) -> Vec<SalaryRange> {
    let labels = BANDS.iter().map(|(label, _)| *label).chain([TOP_BAND]);
    labels
        .filter_map(|label| {
            let count = salaries.iter().filter(|s| salary_band(**s) == label).count() as i64;
            (count > 0).then(|| SalaryRange {
                range: label.to_string(),
                count,
            })
        })
        .collect()
}
