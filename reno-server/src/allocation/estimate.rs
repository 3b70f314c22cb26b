//! Estimate aggregation
//!
//! `subtotal = labor + materials + equipment + permits`,
//! `contingency = subtotal * pct / 100`, `total = subtotal + contingency`.
//! The contingency percentage is not clamped here.

use rust_decimal::Decimal;
use shared::models::{EstimateBreakdown, EstimateRequest, LaborLine, PayType, TeamAssignment};

use super::AllocationError;
use crate::money::{self, percent_of, to_decimal, to_f64};

/// Effective pay of one assignment
///
/// Milestone pay sums the milestone amounts and ignores `pay_amount`;
/// fixed and hourly pay use `pay_amount` as entered.
pub fn assignment_pay(assignment: &TeamAssignment) -> Result<Decimal, AllocationError> {
    let pay = match assignment.pay_type {
        PayType::Milestone => {
            let amounts = assignment
                .milestones
                .iter()
                .map(|m| to_decimal(m.amount))
                .collect::<Result<Vec<_>, _>>()?;
            money::sum(amounts)?
        }
        PayType::Fixed | PayType::Hourly => to_decimal(assignment.pay_amount)?,
    };
    Ok(pay)
}

/// Labor cost across all assignments
pub fn total_labor(assignments: &[TeamAssignment]) -> Result<f64, AllocationError> {
    let pays = assignments
        .iter()
        .map(assignment_pay)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(to_f64(money::sum(pays)?))
}

pub fn subtotal(
    labor: f64,
    materials: f64,
    equipment: f64,
    permits: f64,
) -> Result<f64, AllocationError> {
    let parts = [
        to_decimal(labor)?,
        to_decimal(materials)?,
        to_decimal(equipment)?,
        to_decimal(permits)?,
    ];
    Ok(to_f64(money::sum(parts)?))
}

pub fn contingency_amount(
    subtotal: f64,
    contingency_percentage: f64,
) -> Result<f64, AllocationError> {
    let amount = percent_of(to_decimal(subtotal)?, to_decimal(contingency_percentage)?)?;
    Ok(to_f64(amount))
}

pub fn total(subtotal: f64, contingency_amount: f64) -> Result<f64, AllocationError> {
    let sum = money::add(to_decimal(subtotal)?, to_decimal(contingency_amount)?)?;
    Ok(to_f64(sum))
}

/// Every figure of the estimate summary panel in one pass
pub fn breakdown(request: &EstimateRequest) -> Result<EstimateBreakdown, AllocationError> {
    let labor_lines = request
        .assignments
        .iter()
        .map(|a| {
            Ok(LaborLine {
                member_id: a.member_id.clone(),
                pay_type: a.pay_type,
                amount: to_f64(assignment_pay(a)?),
            })
        })
        .collect::<Result<Vec<_>, AllocationError>>()?;

    let labor = total_labor(&request.assignments)?;
    let subtotal = subtotal(labor, request.materials, request.equipment, request.permits)?;
    let contingency = contingency_amount(subtotal, request.contingency_percentage)?;

    Ok(EstimateBreakdown {
        labor_lines,
        labor,
        materials: to_f64(to_decimal(request.materials)?),
        equipment: to_f64(to_decimal(request.equipment)?),
        permits: to_f64(to_decimal(request.permits)?),
        subtotal,
        contingency_percentage: request.contingency_percentage,
        contingency_amount: contingency,
        total: total(subtotal, contingency)?,
    })
}
