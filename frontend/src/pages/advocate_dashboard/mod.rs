pub mod panel;
pub mod repository;
pub mod service_form;
pub mod view_model;

pub use panel::AdvocateDashboardPage;
