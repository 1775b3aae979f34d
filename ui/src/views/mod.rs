mod dashboard;

pub use dashboard::{Dashboard, MonthDashboard};
