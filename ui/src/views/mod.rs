mod dashboard;
pub use dashboard::Dashboard;

mod controls;
pub use controls::ControlPanel;

mod panel;
pub use panel::ChartPanel;

mod about;
pub use about::About;
