pub mod api;
pub mod chart;
pub mod counter;
pub mod store;
pub mod ui;

pub use store::DashboardStore;
