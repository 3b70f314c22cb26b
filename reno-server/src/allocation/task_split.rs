//! Task cost splitting
//!
//! A task's total cost is shared evenly by its assigned members. The
//! per-member cost is a plain floating-point division, recomputed every
//! time membership changes, and is 0 when nobody is assigned.

use rust_decimal::prelude::*;
use shared::models::{MemberShare, Task, TaskCostSummary};

use super::AllocationError;
use crate::money::{round_money, to_decimal, to_f64};

/// `total_cost / |assigned|`, or 0 for an unassigned task
pub fn cost_per_member(task: &Task) -> f64 {
    match task.assigned_member_ids.len() {
        0 => 0.0,
        n => task.total_cost / n as f64,
    }
}

/// Add a member to the task. Adding an assigned member is a no-op.
///
/// Returns the recomputed cost per member.
pub fn assign(task: &mut Task, member_id: &str) -> f64 {
    if task.assigned_member_ids.insert(member_id.to_string()) {
        tracing::debug!(task_id = %task.id, member_id, "Member assigned to task");
    }
    cost_per_member(task)
}

/// Remove a member from the task. Removing an unassigned member is a no-op.
///
/// Returns the recomputed cost per member (0 once the set is empty).
pub fn unassign(task: &mut Task, member_id: &str) -> f64 {
    if task.assigned_member_ids.remove(member_id) {
        tracing::debug!(task_id = %task.id, member_id, "Member unassigned from task");
    }
    cost_per_member(task)
}

/// Cent-rounded shares that add up to the (cent-rounded) total exactly.
///
/// Every member gets the per-member cost truncated to cents; the cents
/// left over go one each to the first members in id order.
pub fn settlement_shares(task: &Task) -> Result<Vec<MemberShare>, AllocationError> {
    let count = task.assigned_member_ids.len();
    if count == 0 {
        return Ok(Vec::new());
    }

    let total = round_money(to_decimal(task.total_cost)?);
    let members = Decimal::from(count);
    let base = (total / members).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let cent = Decimal::new(1, 2);
    let leftover_cents = ((total - base * members) / cent)
        .to_usize()
        .unwrap_or_default();

    let shares = task
        .assigned_member_ids
        .iter()
        .enumerate()
        .map(|(idx, member_id)| {
            let amount = if idx < leftover_cents { base + cent } else { base };
            MemberShare {
                member_id: member_id.clone(),
                amount: to_f64(amount),
            }
        })
        .collect();
    Ok(shares)
}

/// Full cost split of a task
pub fn summarize(task: Task) -> Result<TaskCostSummary, AllocationError> {
    Ok(TaskCostSummary {
        member_count: task.assigned_member_ids.len(),
        cost_per_member: cost_per_member(&task),
        shares: settlement_shares(&task)?,
        task,
    })
}
