use crate::{
    api::{AdvocateAction, Booking, Service, ServiceType},
    components::{
        cards::{StatCard, StatusBadge},
        confirm_dialog::ConfirmDialog,
        layout::{ErrorMessage, Layout, LoadingSpinner, SuccessMessage},
    },
    pages::advocate_dashboard::{
        service_form::{ServiceEditor, ServiceForm},
        view_model::AdvocateDashboardViewModel,
    },
    state::auth::use_auth,
    utils::time::format_display_date,
};
use leptos::*;

#[component]
pub fn AdvocateDashboardPage() -> impl IntoView {
    let vm = AdvocateDashboardViewModel::new();
    let (auth, _) = use_auth();
    let name = move || {
        auth.with(|state| {
            state
                .session
                .as_ref()
                .map(|s| s.name().to_string())
                .unwrap_or_default()
        })
    };
    let message = vm.message;
    let loading = vm.load_action.pending();
    let services = Signal::derive(move || vm.services.get());
    let bookings = Signal::derive(move || vm.bookings.with(|list| list.items().to_vec()));

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-semibold text-fg">"Advocate Dashboard"</h1>
                    <p class="text-fg-muted">{move || format!("Welcome back, {}!", name())}</p>
                </div>
                {move || message.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
                {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <div class="grid gap-4 md:grid-cols-3">
                        <StatCard title="Total Bookings" value=Signal::derive(move || vm.stats().total_bookings.to_string()) />
                        <StatCard title="Pending" value=Signal::derive(move || vm.stats().pending.to_string()) />
                        <StatCard title="Services" value=Signal::derive(move || vm.stats().services.to_string()) />
                    </div>
                    <ServicesSection
                        services=services
                        on_add=Callback::new(move |_| vm.open_create())
                        on_edit=Callback::new(move |service: Service| vm.open_edit(&service))
                        on_delete=Callback::new(move |id: i64| vm.delete_target.set(Some(id)))
                    />
                    <BookingsTable
                        bookings=bookings
                        on_action=Callback::new(move |(id, action): (i64, AdvocateAction)| vm.change_status(id, action))
                    />
                </Show>
            </div>
            <ServiceModal
                editor=vm.editor
                pending=vm.save_action.pending().into()
                on_save=Callback::new(move |_| vm.save())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete service"
                message="Are you sure you want to delete this service?"
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
            />
        </Layout>
    }
}

#[component]
pub fn ServicesSection(
    services: Signal<Vec<Service>>,
    on_add: Callback<()>,
    on_edit: Callback<Service>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="card space-y-4">
            <div class="flex justify-between items-center">
                <h2 class="text-lg font-medium">"My Services"</h2>
                <button class="btn btn-primary" on:click=move |_| on_add.call(())>"Add Service"</button>
            </div>
            <Show
                when=move || !services.with(Vec::is_empty)
                fallback=|| view! { <p>"No services added yet. Add your first service!"</p> }
            >
                <div class="grid gap-4 md:grid-cols-2">
                    <For
                        each=move || services.get()
                        key=|service| service.id
                        children=move |service| {
                            let id = service.id;
                            let edited = service.clone();
                            view! {
                                <div class="border border-border rounded-lg p-4 space-y-2">
                                    <h3 class="font-medium">{service.title.clone()}</h3>
                                    <p class="text-sm text-fg-muted">{service.description.clone()}</p>
                                    <div class="flex gap-3 text-sm">
                                        <span class="font-semibold">{format!("₹{}", service.price)}</span>
                                        <span>{format!("{} mins", service.duration_minutes)}</span>
                                        <span class="badge badge-info">{service.service_type.as_str()}</span>
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            class="btn btn-secondary btn-sm"
                                            on:click=move |_| on_edit.call(edited.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button class="btn btn-danger btn-sm" on:click=move |_| on_delete.call(id)>
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn BookingsTable(
    bookings: Signal<Vec<Booking>>,
    on_action: Callback<(i64, AdvocateAction)>,
) -> impl IntoView {
    view! {
        <div class="card space-y-4">
            <h2 class="text-lg font-medium">"Bookings"</h2>
            <Show when=move || !bookings.with(Vec::is_empty) fallback=|| view! { <p>"No bookings yet."</p> }>
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Service"</th>
                            <th>"Date"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || bookings.get()
                            key=|booking| (booking.id, booking.status)
                            children=move |booking| view! { <BookingRow booking=booking on_action=on_action /> }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

fn action_button_class(action: AdvocateAction) -> &'static str {
    match action {
        AdvocateAction::Confirm => "btn btn-success btn-sm",
        AdvocateAction::Decline => "btn btn-danger btn-sm",
        AdvocateAction::Complete => "btn btn-primary btn-sm",
    }
}

#[component]
pub fn BookingRow(booking: Booking, on_action: Callback<(i64, AdvocateAction)>) -> impl IntoView {
    let id = booking.id;
    let when = format!(
        "{} {}",
        booking
            .booking_date
            .map(format_display_date)
            .unwrap_or_default(),
        booking.booking_time.clone().unwrap_or_default()
    );
    view! {
        <tr>
            <td>{booking.user_name.clone().unwrap_or_default()}</td>
            <td>{booking.service_title.clone().unwrap_or_else(|| "General Consultation".into())}</td>
            <td>{when.trim().to_string()}</td>
            <td>{booking.service_type.as_str()}</td>
            <td><StatusBadge badge_class=booking.status.badge_class() label=booking.status.as_str() /></td>
            <td class="space-x-2">
                {booking
                    .status
                    .advocate_actions()
                    .iter()
                    .map(|action| {
                        let action = *action;
                        view! {
                            <button
                                class=action_button_class(action)
                                on:click=move |_| on_action.call((id, action))
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </td>
        </tr>
    }
}

#[component]
pub fn ServiceModal(
    editor: RwSignal<Option<ServiceEditor>>,
    pending: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    let field = move |read: fn(&ServiceForm) -> String| {
        editor.with(|e| e.as_ref().map(|e| read(&e.form)).unwrap_or_default())
    };
    let update = move |write: fn(&mut ServiceForm, String), value: String| {
        editor.update(|e| {
            if let Some(e) = e {
                write(&mut e.form, value);
            }
        });
    };

    view! {
        <Show when=move || editor.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4" role="dialog" aria-modal="true">
                    <h2 class="text-lg font-semibold">
                        {move || editor.with(|e| e.as_ref().map(ServiceEditor::title).unwrap_or_default())}
                    </h2>
                    {move || editor.with(|e| e.as_ref().and_then(|e| e.error.clone())).map(|msg| view! { <ErrorMessage message=msg /> })}
                    <form
                        class="space-y-3"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_save.call(());
                        }
                    >
                        <label class="block text-sm font-medium">"Service Name"</label>
                        <input
                            type="text"
                            class="form-control"
                            required
                            prop:value=move || field(|f| f.title.clone())
                            on:input=move |ev| update(|f, v| f.title = v, event_target_value(&ev))
                        />
                        <label class="block text-sm font-medium">"Description"</label>
                        <textarea
                            class="form-control"
                            rows="3"
                            required
                            prop:value=move || field(|f| f.description.clone())
                            on:input=move |ev| update(|f, v| f.description = v, event_target_value(&ev))
                        ></textarea>
                        <label class="block text-sm font-medium">"Service Type"</label>
                        <select
                            class="form-control"
                            prop:value=move || field(|f| f.service_type.as_str().to_string())
                            on:change=move |ev| update(
                                |f, v| f.service_type = ServiceType::parse(&v).unwrap_or_default(),
                                event_target_value(&ev),
                            )
                        >
                            {[ServiceType::Both, ServiceType::Online, ServiceType::Offline]
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                        <label class="block text-sm font-medium">"Category"</label>
                        <input
                            type="text"
                            class="form-control"
                            placeholder="e.g., Legal Consultation, Court Representation"
                            prop:value=move || field(|f| f.category.clone())
                            on:input=move |ev| update(|f, v| f.category = v, event_target_value(&ev))
                        />
                        <div class="grid grid-cols-2 gap-3">
                            <div>
                                <label class="block text-sm font-medium">"Price (₹)"</label>
                                <input
                                    type="number"
                                    class="form-control"
                                    min="0"
                                    required
                                    prop:value=move || field(|f| f.price.clone())
                                    on:input=move |ev| update(|f, v| f.price = v, event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium">"Duration (minutes)"</label>
                                <input
                                    type="number"
                                    class="form-control"
                                    min="15"
                                    step="15"
                                    required
                                    prop:value=move || field(|f| f.duration_minutes.clone())
                                    on:input=move |ev| update(|f, v| f.duration_minutes = v, event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="flex justify-end gap-2">
                            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                                {move || if pending.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button type="button" class="btn btn-secondary" on:click=move |_| editor.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
