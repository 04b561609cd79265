//! CSV loaders for appraisal inputs
//!
//! Cost/benefit files have a `year,cost,benefit` header; cash flow files have
//! `year,amount`. Blank cost or benefit cells count as zero.

use super::{CashFlow, CashFlowSeries, CostBenefitRow, CostBenefitSeries};
use crate::error::{checked_year, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw cost/benefit row; years are signed so negative offsets get a clear error
#[derive(Debug, serde::Deserialize)]
struct CostBenefitCsvRow {
    year: i64,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    benefit: Option<f64>,
}

#[derive(Debug, serde::Deserialize)]
struct CashFlowCsvRow {
    year: i64,
    amount: f64,
}

/// Read a cost/benefit series from any CSV source
pub fn read_cost_benefit<R: Read>(source: R) -> Result<CostBenefitSeries> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: CostBenefitCsvRow = result?;
        rows.push(CostBenefitRow {
            year: checked_year(record.year)?,
            cost: record.cost.unwrap_or(0.0),
            benefit: record.benefit.unwrap_or(0.0),
        });
    }

    log::debug!("Loaded {} cost/benefit rows", rows.len());
    Ok(CostBenefitSeries::from_rows(rows))
}

/// Load a cost/benefit series from a CSV file
pub fn load_cost_benefit(path: &Path) -> Result<CostBenefitSeries> {
    let file = File::open(path)?;
    read_cost_benefit(file)
}

/// Read a signed cash flow series from any CSV source
pub fn read_cash_flows<R: Read>(source: R) -> Result<CashFlowSeries> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let mut flows = Vec::new();
    for result in reader.deserialize() {
        let record: CashFlowCsvRow = result?;
        flows.push(CashFlow {
            year: checked_year(record.year)?,
            amount: record.amount,
        });
    }

    log::debug!("Loaded {} cash flows", flows.len());
    Ok(CashFlowSeries::new(flows))
}

/// Load a signed cash flow series from a CSV file
pub fn load_cash_flows(path: &Path) -> Result<CashFlowSeries> {
    let file = File::open(path)?;
    read_cash_flows(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppraisalError;
    use crate::rates::RateCategory;

    #[test]
    fn test_read_cost_benefit() {
        let data = "year,cost,benefit\n0,1000000,0\n1,50000,300000\n2, 50000 ,320000\n3,50000,340000\n4,50000,360000\n";
        let series = read_cost_benefit(data.as_bytes()).unwrap();

        assert_eq!(series.len(), 5);
        assert_eq!(series.years(), vec![0, 1, 2, 3, 4]);
        assert_eq!(series.costs()[2], 50_000.0);

        let bcr = series.bcr(RateCategory::Standard).unwrap();
        assert!((bcr - 1.02138).abs() < 1e-4);
    }

    #[test]
    fn test_blank_cells_are_zero() {
        let data = "year,cost,benefit\n0,500,\n7,,120\n";
        let series = read_cost_benefit(data.as_bytes()).unwrap();

        assert_eq!(series.rows[0], CostBenefitRow { year: 0, cost: 500.0, benefit: 0.0 });
        assert_eq!(series.rows[1], CostBenefitRow { year: 7, cost: 0.0, benefit: 120.0 });
    }

    #[test]
    fn test_negative_year_rejected() {
        let data = "year,amount\n0,-100\n-1,50\n";
        let result = read_cash_flows(data.as_bytes());
        assert!(matches!(result, Err(AppraisalError::NegativeYear(-1))));
    }

    #[test]
    fn test_read_cash_flows() {
        let data = "year,amount\n0,-1000000\n1,200000\n2,250000\n3,300000\n4,350000\n5,400000\n";
        let series = read_cash_flows(data.as_bytes()).unwrap();
        let npv = series.npv(RateCategory::Standard);
        assert!((npv - 338_991.248).abs() < 1.0);
    }

    #[test]
    fn test_malformed_amount() {
        let data = "year,amount\n0,lots\n";
        assert!(matches!(read_cash_flows(data.as_bytes()), Err(AppraisalError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_cost_benefit(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(AppraisalError::Io(_))));
    }
}
