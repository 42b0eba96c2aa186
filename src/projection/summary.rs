//! Summary statistics over a finished projection

use super::quarter::QuarterlyRecord;
use crate::types::{Cash, Grams};
use serde::{Deserialize, Serialize};

/// Aggregate view of a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub quarters: usize,
    pub total_days: u32,
    pub initial_investment: Cash,
    pub total_markup: Cash,
    pub final_value: Cash,
    pub final_grams: Grams,
    pub cumulative_roi: Cash,
    /// Cumulative ROI as a percentage of the initial investment
    pub roi_percent: f64,
    pub total_brokerage: Cash,
    pub total_holding_costs: Cash,
    pub total_tax: Cash,
}

impl ProjectionSummary {
    /// Summarize a run. An empty run reports the initial investment unchanged.
    pub fn from_records(records: &[QuarterlyRecord], initial_investment: Cash) -> Self {
        let (final_value, final_grams, cumulative_roi) = match records.last() {
            Some(last) => (
                last.qtr_end_total_value,
                last.qtr_end_total_grams,
                last.cumulative_roi,
            ),
            None => (initial_investment, 0.0, 0.0),
        };

        Self {
            quarters: records.len(),
            total_days: records.iter().map(|r| r.days).sum(),
            initial_investment,
            total_markup: records.iter().map(|r| r.markup).sum(),
            final_value,
            final_grams,
            cumulative_roi,
            roi_percent: cumulative_roi / initial_investment * 100.0,
            total_brokerage: records.iter().map(|r| r.transaction_brokerage).sum(),
            total_holding_costs: records.iter().map(|r| r.total_costs).sum(),
            total_tax: records.iter().map(|r| r.tax_amount).sum(),
        }
    }
}

impl std::fmt::Display for ProjectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Projection Summary:")?;
        writeln!(f, "  Quarters:           {}", self.quarters)?;
        writeln!(f, "  Days:               {}", self.total_days)?;
        writeln!(f, "  Initial Investment: {:.2}", self.initial_investment)?;
        writeln!(f, "  Markup:             {:.2}", self.total_markup)?;
        writeln!(f, "  Final Value:        {:.2}", self.final_value)?;
        writeln!(f, "  Final Grams:        {:.4}", self.final_grams)?;
        writeln!(f, "  Cumulative ROI:     {:.2}", self.cumulative_roi)?;
        writeln!(f, "  ROI:                {:.2}%", self.roi_percent)?;
        writeln!(f, "  Brokerage:          {:.2}", self.total_brokerage)?;
        writeln!(f, "  Storage/Insurance:  {:.2}", self.total_holding_costs)?;
        writeln!(f, "  Tax:                {:.2}", self.total_tax)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FinancialModelParams;
    use crate::projection::run;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_from_full_run() {
        let records = run(2650.0, 10_000.0, 25, &FinancialModelParams::MODERATE).unwrap();
        let summary = ProjectionSummary::from_records(&records, 10_000.0);

        assert_eq!(summary.quarters, 25);
        assert_eq!(summary.total_days, 24 * 65 + 53);
        assert_eq!(summary.total_markup, records[0].markup);
        assert_eq!(summary.final_value, records[24].qtr_end_total_value);
        assert_eq!(summary.cumulative_roi, records[24].cumulative_roi);
        assert_relative_eq!(
            summary.roi_percent,
            records[24].cumulative_roi / 100.0,
            epsilon = 1e-9
        );
        assert!(summary.total_tax > 0.0);
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = ProjectionSummary::from_records(&[], 5_000.0);

        assert_eq!(summary.quarters, 0);
        assert_eq!(summary.final_value, 5_000.0);
        assert_eq!(summary.cumulative_roi, 0.0);
        assert_eq!(summary.roi_percent, 0.0);
    }

    #[test]
    fn test_summary_display() {
        let records = run(2650.0, 10_000.0, 4, &FinancialModelParams::MODERATE).unwrap();
        let text = ProjectionSummary::from_records(&records, 10_000.0).to_string();

        assert!(text.starts_with("Projection Summary:"));
        assert!(text.contains("Quarters:           4"));
        assert!(text.contains("Days:               260"));
    }
}
