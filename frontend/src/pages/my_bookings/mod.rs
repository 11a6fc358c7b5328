pub mod panel;
pub mod review;
pub mod view_model;

pub use panel::MyBookingsPage;
