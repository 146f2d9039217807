//! Client-side checkout flow for event tickets: eligibility rules, order
//! totals, and the calls to the events/payments backend.

pub mod client;
pub mod config;
pub mod eligibility;
pub mod models;
pub mod utils;
