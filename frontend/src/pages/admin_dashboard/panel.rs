use crate::{
    api::{AdminUser, Advocate, Booking, Role},
    components::{
        cards::{StatCard, StatusBadge},
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    pages::admin_dashboard::{
        repository::AdminSnapshot,
        view_model::{can_delete_user, format_currency, unverified_count, AdminDashboardViewModel, AdminTab},
    },
    utils::time::format_display_date,
};
use leptos::*;

const TAB_CLASS: &str = "px-4 py-2 text-sm font-medium rounded-md";
const ACTIVE_TAB_CLASS: &str = "px-4 py-2 text-sm font-medium rounded-md bg-action-primary-bg text-action-primary-text";

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let vm = AdminDashboardViewModel::new();
    let message = vm.message;
    let loading = vm.load_action.pending();
    let snapshot = vm.snapshot;
    let tab = vm.tab;

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-fg">"Admin Dashboard"</h1>
                {move || message.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
                {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                <div class="flex gap-2">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class=move || if tab.get() == t { ACTIVE_TAB_CLASS } else { TAB_CLASS }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingSpinner text="Loading admin dashboard..." /> }
                >
                    {move || {
                        let data = snapshot.get();
                        match tab.get() {
                            AdminTab::Overview => view! { <Overview snapshot=data /> }.into_view(),
                            AdminTab::Users => view! {
                                <UsersTable
                                    users=data.users
                                    on_delete=Callback::new(move |id: i64| vm.request_delete(id))
                                />
                            }
                            .into_view(),
                            AdminTab::Advocates => view! {
                                <AdvocatesTable
                                    advocates=data.advocates
                                    on_toggle=Callback::new(move |id: i64| vm.toggle_verified(id))
                                />
                            }
                            .into_view(),
                            AdminTab::Bookings => view! { <BookingsTable bookings=data.bookings /> }.into_view(),
                        }
                    }}
                </Show>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete user"
                message="Are you sure you want to delete this user? This action cannot be undone."
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
            />
        </Layout>
    }
}

#[component]
pub fn Overview(snapshot: AdminSnapshot) -> impl IntoView {
    let stats = snapshot.stats.clone();
    let unverified = unverified_count(&snapshot);
    let stat = |value: String| Signal::derive(move || value.clone());
    let recent: Vec<Booking> = stats.recent_bookings.iter().take(5).cloned().collect();

    view! {
        <div class="space-y-6">
            <div class="grid gap-4 md:grid-cols-3">
                <StatCard title="Total Users" value=stat(stats.total_users.to_string()) />
                <StatCard title="Total Advocates" value=stat(stats.total_advocates.to_string()) />
                <StatCard title="Total Bookings" value=stat(stats.total_bookings.to_string()) />
                <StatCard title="Pending Bookings" value=stat(stats.pending_bookings.to_string()) />
                <StatCard title="Total Revenue" value=stat(format_currency(stats.total_revenue)) />
                <StatCard title="Unverified Advocates" value=stat(unverified.to_string()) />
            </div>
            <div class="card">
                <h2 class="text-lg font-medium">"Recent Bookings"</h2>
                {if recent.is_empty() {
                    view! { <p class="text-fg-muted">"No recent bookings"</p> }.into_view()
                } else {
                    recent
                        .into_iter()
                        .map(|booking| view! {
                            <div class="flex justify-between py-2 border-b border-border">
                                <div>
                                    <strong>{booking.user_name.clone().unwrap_or_default()}</strong>
                                    " booked "
                                    <strong>{booking.advocate_name.clone().unwrap_or_default()}</strong>
                                    " "
                                    <StatusBadge badge_class=booking.status.badge_class() label=booking.status.as_str() />
                                </div>
                                <div class="text-sm text-fg-muted space-x-3">
                                    <span>{booking.booking_date.map(format_display_date).unwrap_or_default()}</span>
                                    <span>{format_currency(booking.total_amount)}</span>
                                </div>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn UsersTable(users: Vec<AdminUser>, on_delete: Callback<i64>) -> impl IntoView {
    let clients = users.iter().filter(|u| u.role == Role::User).count();
    view! {
        <div class="card">
            <h2 class="text-lg font-medium">{format!("All Users ({})", clients)}</h2>
            <table class="min-w-full text-sm">
                <thead>
                    <tr>
                        <th>"ID"</th><th>"Name"</th><th>"Email"</th><th>"Phone"</th>
                        <th>"Role"</th><th>"Joined"</th><th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {if users.is_empty() {
                        view! { <tr><td colspan="7">"No users found"</td></tr> }.into_view()
                    } else {
                        users
                            .into_iter()
                            .map(|user| {
                                let id = user.id;
                                let badge = if user.role == Role::Admin { "badge badge-danger" } else { "badge badge-primary" };
                                view! {
                                    <tr>
                                        <td>{user.id}</td>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.phone.clone().unwrap_or_else(|| "N/A".into())}</td>
                                        <td><span class=badge>{user.role.as_str()}</span></td>
                                        <td>{user.created_at.as_deref().and_then(|at| at.get(..10)).unwrap_or_default().to_string()}</td>
                                        <td>
                                            {can_delete_user(user.role).then(|| view! {
                                                <button class="btn btn-danger btn-sm" on:click=move |_| on_delete.call(id)>
                                                    "Delete"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn AdvocatesTable(advocates: Vec<Advocate>, on_toggle: Callback<i64>) -> impl IntoView {
    let unverified = advocates.iter().filter(|a| !a.is_verified).count();
    view! {
        <div class="card">
            <div class="flex justify-between items-center">
                <h2 class="text-lg font-medium">{format!("All Advocates ({})", advocates.len())}</h2>
                <span class="badge badge-warning">{format!("{} Unverified", unverified)}</span>
            </div>
            <table class="min-w-full text-sm">
                <thead>
                    <tr>
                        <th>"ID"</th><th>"Name"</th><th>"Email"</th><th>"Specialization"</th>
                        <th>"Experience"</th><th>"Location"</th><th>"Rating"</th><th>"Status"</th><th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {if advocates.is_empty() {
                        view! { <tr><td colspan="9">"No advocates found"</td></tr> }.into_view()
                    } else {
                        advocates
                            .into_iter()
                            .map(|advocate| {
                                let id = advocate.id;
                                let (status_class, status, button_class, button) = if advocate.is_verified {
                                    ("badge badge-success", "✓ Verified", "btn btn-warning btn-sm", "✗ Unverify")
                                } else {
                                    ("badge badge-warning", "⏳ Unverified", "btn btn-success btn-sm", "✓ Verify")
                                };
                                view! {
                                    <tr>
                                        <td>{advocate.id}</td>
                                        <td>{advocate.name.clone()}</td>
                                        <td>{advocate.email.clone().unwrap_or_default()}</td>
                                        <td>{advocate.specialization.clone().unwrap_or_else(|| "Not specified".into())}</td>
                                        <td>{advocate.experience_years.map(|y| format!("{} years", y)).unwrap_or_else(|| "N/A".into())}</td>
                                        <td>{advocate.place_label()}</td>
                                        <td>{format!("⭐ {:.1} ({})", advocate.rating.unwrap_or(0.0), advocate.total_reviews)}</td>
                                        <td><span class=status_class>{status}</span></td>
                                        <td>
                                            <button class=button_class on:click=move |_| on_toggle.call(id)>{button}</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn BookingsTable(bookings: Vec<Booking>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="text-lg font-medium">{format!("All Bookings ({})", bookings.len())}</h2>
            <table class="min-w-full text-sm">
                <thead>
                    <tr>
                        <th>"ID"</th><th>"User"</th><th>"Advocate"</th><th>"Date & Time"</th>
                        <th>"Service Type"</th><th>"Amount"</th><th>"Status"</th><th>"Payment"</th>
                    </tr>
                </thead>
                <tbody>
                    {if bookings.is_empty() {
                        view! { <tr><td colspan="8">"No bookings found"</td></tr> }.into_view()
                    } else {
                        bookings
                            .into_iter()
                            .map(|booking| view! {
                                <tr>
                                    <td>{format!("#{}", booking.id)}</td>
                                    <td>{booking.user_name.clone().unwrap_or_default()}</td>
                                    <td>{booking.advocate_name.clone().unwrap_or_default()}</td>
                                    <td>
                                        {format!(
                                            "{} {}",
                                            booking.booking_date.map(format_display_date).unwrap_or_default(),
                                            booking.booking_time.clone().unwrap_or_default()
                                        )}
                                    </td>
                                    <td>{booking.service_type.as_str()}</td>
                                    <td>{format_currency(booking.total_amount)}</td>
                                    <td><StatusBadge badge_class=booking.status.badge_class() label=booking.status.as_str() /></td>
                                    <td><StatusBadge badge_class=booking.payment_status.badge_class() label=booking.payment_status.as_str() /></td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{AdminStats, BookingStatus};
    use crate::pages::bookings::tests::booking;
    use crate::test_support::ssr::render_to_string;

    fn user(id: i64, role: Role) -> AdminUser {
        AdminUser {
            id,
            name: format!("Person {}", id),
            email: format!("p{}@example.com", id),
            phone: None,
            role,
            created_at: Some("2030-01-02T10:00:00.000Z".into()),
        }
    }

    #[test]
    fn admin_rows_have_no_delete_button() {
        let html = render_to_string(move || {
            view! { <UsersTable users=vec![user(1, Role::Admin)] on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Person 1"));
        assert!(!html.contains("btn btn-danger"));

        let html = render_to_string(move || {
            view! { <UsersTable users=vec![user(11, Role::User)] on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("btn btn-danger"));
        assert!(html.contains("All Users (1)"));
        assert!(html.contains("2030-01-02"));
    }

    #[test]
    fn advocates_table_offers_verify_toggle() {
        let advocate: Advocate = serde_json::from_value(serde_json::json!({
            "id": 7, "name": "Asha Rao", "is_verified": 0
        }))
        .unwrap();
        let html = render_to_string(move || {
            view! { <AdvocatesTable advocates=vec![advocate] on_toggle=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("✓ Verify"));
        assert!(html.contains("1 Unverified"));
    }

    #[test]
    fn overview_shows_stats_and_recent_bookings() {
        let snapshot = AdminSnapshot {
            stats: AdminStats {
                total_users: 10,
                total_revenue: Some(45000.0),
                recent_bookings: vec![booking(42, BookingStatus::Pending)],
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_to_string(move || view! { <Overview snapshot=snapshot /> });
        assert!(html.contains("Total Revenue"));
        assert!(html.contains("₹45,000.00"));
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("Asha Rao"));
    }

    #[test]
    fn empty_bookings_table_renders_placeholder() {
        let html = render_to_string(move || view! { <BookingsTable bookings=vec![] /> });
        assert!(html.contains("No bookings found"));
    }
}
