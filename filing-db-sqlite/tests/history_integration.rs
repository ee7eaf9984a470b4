//! End-to-end flow: compute a tax result with the core calculator,
//! persist it through the factory-created repository, and verify the
//! history cap.

use filing_core::db::{DbConfig, FactoryRegistry, HISTORY_CAP, HistoryStoreFactory};
use filing_core::{FilingStatus, NewCalculationRecord, TaxCalculationInput, compute_tax};
use filing_db_sqlite::SqliteHistoryFactory;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn record_from_inputs(input: &TaxCalculationInput) -> NewCalculationRecord {
    let result = compute_tax(input);
    NewCalculationRecord {
        filing_status: input.filing_status,
        gross_income: input.gross_income,
        dependents: input.dependents,
        itemized_deductions: input.itemized_deductions,
        taxable_income: result.taxable_income,
        tax_liability: result.tax_liability,
        effective_rate: result.effective_rate,
    }
}

#[tokio::test]
async fn computed_results_persist_through_registry() {
    let mut registry = FactoryRegistry::new();
    registry.register(Box::new(SqliteHistoryFactory));

    let repo = registry
        .create(&DbConfig::default())
        .await
        .expect("Should create in-memory repository");

    let input = TaxCalculationInput {
        gross_income: dec!(75000),
        filing_status: FilingStatus::Single,
        dependents: 2,
        itemized_deductions: dec!(10000),
    };

    let created = repo
        .append(record_from_inputs(&input))
        .await
        .expect("Should append record");

    assert_eq!(created.taxable_income, dec!(58050));
    assert_eq!(created.tax_liability, dec!(8388.00));
    assert_eq!(created.effective_rate, dec!(11.184));

    let recent = repo.recent().await.expect("Should list history");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0], created);
}

#[tokio::test]
async fn history_keeps_only_the_ten_most_recent() {
    let repo = SqliteHistoryFactory
        .create(&DbConfig::default())
        .await
        .expect("Should create in-memory repository");

    for i in 0..(HISTORY_CAP as u32 + 3) {
        let input = TaxCalculationInput {
            gross_income: Decimal::from(40000 + i * 1000),
            filing_status: FilingStatus::MarriedFilingJointly,
            dependents: 1,
            itemized_deductions: dec!(0),
        };
        repo.append(record_from_inputs(&input))
            .await
            .expect("Should append record");
    }

    let recent = repo.recent().await.expect("Should list history");

    assert_eq!(recent.len(), HISTORY_CAP);
    // Oldest three appends were evicted.
    assert_eq!(recent.last().unwrap().gross_income, dec!(43000));
    assert_eq!(recent[0].gross_income, dec!(52000));
}
