use crate::api::Role;
use leptos::*;

pub mod utils;

mod panel;

pub use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <RegisterPanel initial_role=Role::User /> }
}

#[component]
pub fn AdvocateRegisterPage() -> impl IntoView {
    view! { <RegisterPanel initial_role=Role::Advocate /> }
}
