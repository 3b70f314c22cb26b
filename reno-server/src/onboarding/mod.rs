//! Team member onboarding stepper
//!
//! A workflow is a fixed, ordered list of steps. Each step goes
//! `pending → in_progress → completed | failed`; steps run strictly in
//! order, one at a time, and never move backwards. A failed step halts
//! the workflow.

mod workflow;


pub use workflow::{DEFAULT_STEPS, OnboardingError, OnboardingWorkflow};
