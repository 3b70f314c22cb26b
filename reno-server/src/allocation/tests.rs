use super::*;
use crate::money::money_eq;
use chrono::NaiveDate;
use shared::models::{
    DonationSelection, EstimateRequest, Milestone, MilestoneStatus, PayType, Task, TeamAssignment,
};

fn task_with_members(total_cost: f64, members: &[&str]) -> Task {
    let mut task = Task::new("task-1", "Demo kitchen", total_cost);
    for m in members {
        task_split::assign(&mut task, m);
    }
    task
}

fn dated(name: &str, amount: f64, day: u32) -> Milestone {
    let mut m = Milestone::new(name, amount);
    m.due_date = NaiveDate::from_ymd_opt(2026, 5, day);
    m
}

// ========== TaskCostSplitter ==========

#[test]
fn test_split_three_then_unassign_one() {
    let mut task = task_with_members(300.0, &["A", "B", "C"]);
    assert_eq!(task_split::cost_per_member(&task), 100.0);

    let per_member = task_split::unassign(&mut task, "B");
    assert_eq!(per_member, 150.0);
    assert_eq!(
        task.assigned_member_ids.iter().cloned().collect::<Vec<_>>(),
        vec!["A".to_string(), "C".to_string()]
    );
}

#[test]
fn test_assign_is_idempotent() {
    let mut task = task_with_members(90.0, &["A", "B"]);
    let per_member = task_split::assign(&mut task, "A");
    assert_eq!(per_member, 45.0);
    assert_eq!(task.assigned_member_ids.len(), 2);
}

#[test]
fn test_unassigned_task_costs_nothing_per_member() {
    let task = task_with_members(500.0, &[]);
    assert_eq!(task_split::cost_per_member(&task), 0.0);

    let mut task = task_with_members(500.0, &["A"]);
    assert_eq!(task_split::unassign(&mut task, "A"), 0.0);
    assert!(task_split::settlement_shares(&task).unwrap().is_empty());
}

#[test]
fn test_unassign_unknown_member_is_noop() {
    let mut task = task_with_members(100.0, &["A", "B"]);
    assert_eq!(task_split::unassign(&mut task, "Z"), 50.0);
}

#[test]
fn test_zero_total_cost() {
    let task = task_with_members(0.0, &["A", "B", "C"]);
    assert_eq!(task_split::cost_per_member(&task), 0.0);
}

#[test]
fn test_per_member_costs_sum_to_total() {
    for total in [100.0, 0.01, 1234.56, 999.99, 7.0] {
        for n in 1..=9 {
            let members: Vec<String> = (0..n).map(|i| format!("m{}", i)).collect();
            let refs: Vec<&str> = members.iter().map(String::as_str).collect();
            let task = task_with_members(total, &refs);

            let sum: f64 = (0..n).map(|_| task_split::cost_per_member(&task)).sum();
            assert!((sum - total).abs() < 1e-9, "total {} n {}", total, n);
        }
    }
}

#[test]
fn test_per_member_cost_is_not_rounded() {
    let task = task_with_members(100.0, &["A", "B", "C"]);
    assert!((task_split::cost_per_member(&task) - 33.333_333_333).abs() < 1e-6);
}

#[test]
fn test_settlement_shares_add_up_exactly() {
    let task = task_with_members(100.0, &["A", "B", "C"]);
    let shares = task_split::settlement_shares(&task).unwrap();
    let amounts: Vec<f64> = shares.iter().map(|s| s.amount).collect();
    assert_eq!(amounts, vec![33.34, 33.33, 33.33]);
    assert_eq!(shares[0].member_id, "A");

    let task = task_with_members(0.05, &["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    let shares = task_split::settlement_shares(&task).unwrap();
    assert!(shares.iter().all(|s| s.amount >= 0.0));
    let cents: i64 = shares.iter().map(|s| (s.amount * 100.0).round() as i64).sum();
    assert_eq!(cents, 5);
}

#[test]
fn test_summarize() {
    let summary = task_split::summarize(task_with_members(300.0, &["A", "B", "C"])).unwrap();
    assert_eq!(summary.member_count, 3);
    assert_eq!(summary.cost_per_member, 100.0);
    assert_eq!(summary.shares.len(), 3);
    assert!(summary.shares.iter().all(|s| s.amount == 100.0));
}

// ========== EstimateAggregator ==========

#[test]
fn test_total_labor_mixes_pay_types() {
    let mut hourly = TeamAssignment::fixed("hourly", 45.5);
    hourly.pay_type = PayType::Hourly;

    let mut milestone_pay =
        TeamAssignment::with_milestones("ms", vec![Milestone::new("Rough-in", 1200.0), Milestone::new("Finish", 800.25)]);
    // ignored for milestone pay
    milestone_pay.pay_amount = 99_999.0;

    let assignments = vec![TeamAssignment::fixed("fixed", 1000.0), hourly, milestone_pay];
    assert_eq!(estimate::total_labor(&assignments).unwrap(), 3045.75);
}

#[test]
fn test_milestone_assignment_without_milestones_pays_nothing() {
    let assignment = TeamAssignment::with_milestones("ms", vec![]);
    assert!(estimate::assignment_pay(&assignment).unwrap().is_zero());
}

#[test]
fn test_subtotal_contingency_total() {
    let subtotal = estimate::subtotal(2000.0, 1500.5, 250.0, 99.5).unwrap();
    assert_eq!(subtotal, 3850.0);

    let contingency = estimate::contingency_amount(subtotal, 10.0).unwrap();
    assert_eq!(contingency, 385.0);
    assert_eq!(estimate::total(subtotal, contingency).unwrap(), 4235.0);
}

#[test]
fn test_contingency_is_not_clamped() {
    assert_eq!(estimate::contingency_amount(1000.0, 50.0).unwrap(), 500.0);
    assert_eq!(estimate::contingency_amount(1000.0, -5.0).unwrap(), -50.0);
}

#[test]
fn test_breakdown() {
    let request = EstimateRequest {
        assignments: vec![
            TeamAssignment::fixed("lead", 3000.0),
            TeamAssignment::with_milestones("helper", vec![Milestone::new("Demo", 400.0)]),
        ],
        materials: 1200.0,
        equipment: 300.0,
        permits: 100.0,
        contingency_percentage: 15.0,
    };

    let breakdown = estimate::breakdown(&request).unwrap();
    assert_eq!(breakdown.labor_lines.len(), 2);
    assert_eq!(breakdown.labor_lines[1].amount, 400.0);
    assert_eq!(breakdown.labor_lines[1].pay_type, PayType::Milestone);
    assert_eq!(breakdown.labor, 3400.0);
    assert_eq!(breakdown.subtotal, 5000.0);
    assert_eq!(breakdown.contingency_amount, 750.0);
    assert_eq!(breakdown.total, 5750.0);
}

// ========== DonationCalculator ==========

#[test]
fn test_preset_donation_scenario() {
    let choice = donation::from_preset(1000.0, 15.0).unwrap();
    assert_eq!(choice.amount, 150.0);
    assert_eq!(choice.percentage, 15.0);
    assert_eq!(donation::net_earnings(1000.0, choice.amount).unwrap(), 850.0);
    assert_eq!(donation::estimated_tax_benefit(150.0, 0.24).unwrap(), 36.0);
}

#[test]
fn test_preset_and_custom_percentage_agree() {
    for (earnings, pct) in [(1000.0, 15.0), (2345.67, 7.5), (0.0, 10.0), (99.99, 33.0)] {
        assert_eq!(
            donation::from_preset(earnings, pct),
            donation::from_custom_percentage(earnings, pct)
        );
    }
}

#[test]
fn test_custom_amount_derives_percentage() {
    let choice = donation::from_custom_amount(1000.0, 75.5).unwrap();
    assert_eq!(choice.percentage, 7.55);
    assert_eq!(choice.amount, 75.5);
}

#[test]
fn test_custom_amount_with_zero_earnings() {
    assert_eq!(
        donation::from_custom_amount(0.0, 10.0),
        Err(AllocationError::ZeroEarnings)
    );
}

#[test]
fn test_net_plus_donation_is_earnings() {
    for (earnings, donated) in [
        (1000.0, 150.0),
        (1234.56, 0.01),
        (50.0, 50.0),
        (10.0, 0.0),
        (1.0, 0.005),
        (1000.005, 0.004),
    ] {
        let net = donation::net_earnings(earnings, donated).unwrap();
        assert!((net + donated - earnings).abs() < 1e-9, "{} - {}", earnings, donated);
        assert!(money_eq(net + donated, earnings));
    }
}

#[test]
fn test_sub_cent_custom_amount_is_rounded_to_cents() {
    let quote = donation::quote(1.0, &DonationSelection::CustomAmount { amount: 0.005 }, 0.24)
        .unwrap();
    assert_eq!(quote.choice.amount, 0.01);
    assert_eq!(quote.choice.percentage, 1.0);
    assert!((quote.net_earnings + quote.choice.amount - 1.0).abs() < 1e-9);

    let choice = donation::from_custom_amount(1000.0, 75.504).unwrap();
    assert_eq!(choice.amount, 75.5);
    assert_eq!(choice.percentage, 7.55);
}

#[test]
fn test_net_earnings_not_clamped() {
    assert_eq!(donation::net_earnings(100.0, 120.0).unwrap(), -20.0);
}

#[test]
fn test_quote() {
    let quote = donation::quote(
        1000.0,
        &DonationSelection::Preset { percentage: 15.0 },
        donation::DEFAULT_TAX_BRACKET_RATE,
    )
    .unwrap();
    assert_eq!(quote.choice.amount, 150.0);
    assert_eq!(quote.net_earnings, 850.0);
    assert_eq!(quote.estimated_tax_benefit, 36.0);

    let err = donation::quote(0.0, &DonationSelection::CustomAmount { amount: 5.0 }, 0.24);
    assert_eq!(err.unwrap_err(), AllocationError::ZeroEarnings);
}

// ========== PaymentFeeSplitter ==========

#[test]
fn test_fee_split_scenario() {
    let split = fee_split::split(200.0, fee_split::DEFAULT_PLATFORM_FEE_PERCENTAGE).unwrap();
    assert_eq!(split.platform_fee, 10.0);
    assert_eq!(split.business_amount, 190.0);
    assert_eq!(split.platform_fee_percentage, 5.0);
}

#[test]
fn test_fee_split_parts_add_up_to_the_cent() {
    for total in [0.0, 100.0, 1234.56] {
        for pct in [0.0, 5.0, 10.0] {
            let split = fee_split::split(total, pct).unwrap();
            let cents = ((split.platform_fee + split.business_amount) * 100.0).round() as i64;
            assert_eq!(cents, (total * 100.0_f64).round() as i64, "{} @ {}%", total, pct);
        }
    }
}

#[test]
fn test_fee_split_rounds_fee() {
    let split = fee_split::split(1234.56, 5.0).unwrap();
    assert_eq!(split.platform_fee, 61.73);
    assert_eq!(split.business_amount, 1172.83);
}

// ========== Milestones ==========

#[test]
fn test_milestone_transition_forward() {
    let mut m = Milestone::new("Framing", 2500.0);
    milestones::transition(&mut m, MilestoneStatus::Completed).unwrap();
    milestones::transition(&mut m, MilestoneStatus::Paid).unwrap();
    assert_eq!(m.status, MilestoneStatus::Paid);
}

#[test]
fn test_milestone_transition_backward_rejected() {
    let mut m = Milestone::new("Framing", 2500.0);
    m.status = MilestoneStatus::Paid;
    let err = milestones::transition(&mut m, MilestoneStatus::Completed).unwrap_err();
    assert_eq!(
        err,
        AllocationError::MilestoneTransition {
            from: MilestoneStatus::Paid,
            to: MilestoneStatus::Completed,
        }
    );
    assert_eq!(m.status, MilestoneStatus::Paid);
}

#[test]
fn test_merge_dedupes_by_name_and_due_date() {
    let current = vec![dated("Deposit", 1000.0, 1), dated("Rough-in", 2000.0, 10)];
    let mut updated = dated("Deposit", 1000.0, 1);
    updated.status = MilestoneStatus::Paid;
    let incoming = vec![updated.clone(), dated("Rough-in", 2000.0, 12), dated("Final", 500.0, 30)];

    let merged = milestones::merge(current, incoming);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0], updated);
    assert_eq!(merged[1].due_date, NaiveDate::from_ymd_opt(2026, 5, 10));
    assert_eq!(merged[2].due_date, NaiveDate::from_ymd_opt(2026, 5, 12));
    assert_eq!(merged[3].name, "Final");
    assert_eq!(milestones::milestones_total(&merged).unwrap(), 5500.0);
}

#[test]
fn test_allocation_error_into_app_error() {
    use shared::error::{AppError, ErrorCode};

    let err: AppError = AllocationError::ZeroEarnings.into();
    assert_eq!(err.code, ErrorCode::ZeroEarnings);

    let err: AppError = AllocationError::MilestoneTransition {
        from: MilestoneStatus::Paid,
        to: MilestoneStatus::Pending,
    }
    .into();
    assert_eq!(err.code, ErrorCode::MilestoneTransitionInvalid);
    assert_eq!(err.details.unwrap().get("from").unwrap(), "paid");

    let err: AppError = AllocationError::Money(crate::money::MoneyError::Overflow).into();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

// ========== Money range ==========

#[test]
fn test_amounts_past_decimal_range_are_rejected() {
    use crate::money::MoneyError;

    assert_eq!(
        fee_split::split(1e29, 5.0),
        Err(AllocationError::Money(MoneyError::OutOfRange(1e29)))
    );
    assert_eq!(
        fee_split::split(1e28, 50.0),
        Err(AllocationError::Money(MoneyError::Overflow))
    );
    assert_eq!(
        donation::from_preset(1e28, 15.0),
        Err(AllocationError::Money(MoneyError::Overflow))
    );
    assert_eq!(
        estimate::contingency_amount(5e27, 20.0),
        Err(AllocationError::Money(MoneyError::Overflow))
    );
    assert!(matches!(
        donation::net_earnings(f64::NAN, 1.0),
        Err(AllocationError::Money(MoneyError::OutOfRange(v))) if v.is_nan()
    ));
    assert!(estimate::subtotal(7e28, 7e28, 0.0, 0.0).is_err());
    assert!(milestones::milestones_total(&[Milestone::new("Huge", 5e28), Milestone::new("Huge", 5e28)]).is_err());

    let mut task = task_with_members(1e29, &["A"]);
    assert_eq!(task_split::cost_per_member(&task), 1e29);
    assert!(task_split::settlement_shares(&task).is_err());
    task.total_cost = f64::INFINITY;
    assert!(task_split::summarize(task).is_err());
}
