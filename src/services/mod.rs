pub mod filter_service;

pub use filter_service::{FilterPlan, FilterService};
