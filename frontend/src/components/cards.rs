use leptos::*;

#[component]
pub fn StatCard(#[prop(into)] title: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{title}</dt>
                <dd class="mt-1 text-3xl font-semibold text-fg">{move || value.get()}</dd>
            </div>
        </div>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] badge_class: String, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=badge_class>{label}</span> }
}
