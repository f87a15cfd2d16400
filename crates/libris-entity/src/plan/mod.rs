//! Subscription plan entity and tier enumeration.

pub mod model;
pub mod tier;

pub use model::Plan;
pub use tier::PlanTier;
