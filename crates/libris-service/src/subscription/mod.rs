//! Subscription plan operations.

pub mod service;

pub use service::SubscriptionService;
