//! Roll monthly rows up into fiscal-year rows
//!
//! Flow fields are summed, `occupancy` and `adr` are averaged, and the
//! balance fields (loan balances, cumulative totals, property value) are
//! copied from the last month of each block. A trailing partial year is
//! aggregated over whatever months remain.

use super::cashflows::ProjectionRow;

/// One yearly row per consecutive block of 12 months, oldest first
pub fn aggregate_yearly(monthly: &[ProjectionRow]) -> Vec<ProjectionRow> {
    monthly
        .chunks(12)
        .enumerate()
        .map(|(i, block)| aggregate_block(block, i as u32 + 1))
        .collect()
}

/// Aggregate a non-empty block of months into one row labelled `Year {year}`
fn aggregate_block(block: &[ProjectionRow], year: u32) -> ProjectionRow {
    let mut row = ProjectionRow::new(format!("Year {}", year), year);
    row.months = block.iter().map(|m| m.months).sum();

    for m in block {
        row.revenue += m.revenue;
        row.cleaning_income += m.cleaning_income;
        row.cleaning_expense += m.cleaning_expense;
        row.mgmt_fee += m.mgmt_fee;
        row.maintenance += m.maintenance;
        row.opex += m.opex;
        row.property_tax += m.property_tax;
        row.hoa += m.hoa;
        row.host_fee += m.host_fee;
        row.turns += m.turns;
        row.noi_pre_platform += m.noi_pre_platform;
        row.noi_after_platform += m.noi_after_platform;
        row.mortgage_payment += m.mortgage_payment;
        row.mortgage_interest += m.mortgage_interest;
        row.mortgage_principal += m.mortgage_principal;
        row.heloc_interest += m.heloc_interest;
        row.heloc_principal_paydown += m.heloc_principal_paydown;
        row.cash_flow_after_debt += m.cash_flow_after_debt;
        row.net_cash_to_owner += m.net_cash_to_owner;
        row.occupancy += m.occupancy;
        row.adr += m.adr;
    }

    let n = block.len() as f64;
    row.occupancy /= n;
    row.adr /= n;

    if let Some(last) = block.last() {
        row.mortgage_balance = last.mortgage_balance;
        row.heloc_balance = last.heloc_balance;
        row.cumulative_net_cash = last.cumulative_net_cash;
        row.cumulative_cash_flow_after_debt = last.cumulative_cash_flow_after_debt;
        row.property_value = last.property_value;
    }

    row
}
