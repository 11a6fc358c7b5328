use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::{RequireAuth, RequireRole},
    pages::{
        AdminDashboardPage, AdvocateDashboardPage, AdvocateDetailsPage, AdvocateRegisterPage,
        DashboardPage, HomePage, LoginPage, MyBookingsPage, ProfilePage, RegisterPage, SearchPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/advocate-register",
    "/search",
    "/advocates/:id",
    "/advocate/:id",
    "/dashboard",
    "/my-bookings",
    "/profile",
    "/advocate-dashboard",
    "/admin-dashboard",
];

/// Any signed-in role.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/my-bookings", "/profile"];

pub const ROLE_ROUTE_PATHS: &[(&str, Role)] = &[
    ("/advocate-dashboard", Role::Advocate),
    ("/admin-dashboard", Role::Admin),
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/advocate-register",
    "/search",
    "/advocates/:id",
    "/advocate/:id",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="BookMyAdvocate"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/advocate-register" view=AdvocateRegisterPage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/advocates/:id" view=AdvocateDetailsPage/>
                    // legacy link format
                    <Route path="/advocate/:id" view=AdvocateDetailsPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/my-bookings" view=ProtectedMyBookings/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/advocate-dashboard" view=ProtectedAdvocateDashboard/>
                    <Route path="/admin-dashboard" view=ProtectedAdminDashboard/>
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedMyBookings() -> impl IntoView {
    view! { <RequireAuth><MyBookingsPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedAdvocateDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Advocate><AdvocateDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminDashboardPage/></RequireRole> }
}
