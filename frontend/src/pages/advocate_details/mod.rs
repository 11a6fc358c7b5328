pub mod panel;
pub mod repository;
pub mod view_model;
pub mod workflow;

pub use panel::AdvocateDetailsPage;
