pub mod admin_dashboard;
pub mod advocate_dashboard;
pub mod advocate_details;
pub mod bookings;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod profile;
pub mod register;
pub mod search;

pub use admin_dashboard::AdminDashboardPage;
pub use advocate_dashboard::AdvocateDashboardPage;
pub use advocate_details::AdvocateDetailsPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_bookings::MyBookingsPage;
pub use profile::ProfilePage;
pub use register::{AdvocateRegisterPage, RegisterPage};
pub use search::SearchPage;
