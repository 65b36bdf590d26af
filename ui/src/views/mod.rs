mod dashboard;
pub use dashboard::Dashboard;

mod overview;
pub use overview::Overview;
