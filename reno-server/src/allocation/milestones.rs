//! Milestone helpers

use chrono::NaiveDate;
use shared::models::{Milestone, MilestoneStatus};
use std::collections::HashMap;

use super::AllocationError;
use crate::money::{self, to_decimal, to_f64};

/// Move a milestone forward in its lifecycle (pending → completed → paid)
pub fn transition(milestone: &mut Milestone, next: MilestoneStatus) -> Result<(), AllocationError> {
    if !milestone.status.can_transition_to(next) {
        return Err(AllocationError::MilestoneTransition {
            from: milestone.status,
            to: next,
        });
    }
    milestone.status = next;
    Ok(())
}

/// Sum of milestone amounts
pub fn milestones_total(milestones: &[Milestone]) -> Result<f64, AllocationError> {
    let amounts = milestones
        .iter()
        .map(|m| to_decimal(m.amount))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(to_f64(money::sum(amounts)?))
}

/// Merge incoming rows into the current list, deduplicated by
/// `(name, due_date)`.
///
/// A later row replaces an earlier one with the same key but keeps the
/// earlier row's position.
pub fn merge(current: Vec<Milestone>, incoming: Vec<Milestone>) -> Vec<Milestone> {
    let mut merged: Vec<Milestone> = Vec::with_capacity(current.len() + incoming.len());
    let mut index: HashMap<(String, Option<NaiveDate>), usize> = HashMap::new();

    for milestone in current.into_iter().chain(incoming) {
        let key = (milestone.name.clone(), milestone.due_date);
        match index.get(&key) {
            Some(&pos) => merged[pos] = milestone,
            None => {
                index.insert(key, merged.len());
                merged.push(milestone);
            }
        }
    }

    merged
}
