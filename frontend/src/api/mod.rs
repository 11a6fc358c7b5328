mod admin;
mod advocates;
mod auth;
mod bookings;
pub mod client;
mod reviews;
mod services;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
