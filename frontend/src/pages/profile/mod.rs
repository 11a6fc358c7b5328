pub mod forms;
mod panel;

pub use panel::ProfilePage;
