use crate::{
    api::{ApiError, Role},
    components::{
        error::InlineErrorMessage,
        guard::{landing_route_for, redirect_to, LOGIN_ROUTE},
        layout::Layout,
    },
    pages::register::utils::{parse_role, RegisterForm},
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel(initial_role: Role) -> impl IntoView {
    let form = create_rw_signal(RegisterForm::new(initial_role));
    let error = create_rw_signal(None::<ApiError>);

    let register_action = auth::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(Some(session)) => redirect_to(landing_route_for(session.role())),
                Ok(None) => redirect_to(LOGIN_ROUTE),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(RegisterForm::to_request) {
            Ok(request) => {
                error.set(None);
                register_action.dispatch(request);
            }
            Err(msg) => error.set(Some(ApiError::unknown(msg))),
        }
    };

    let heading = if initial_role == Role::Advocate {
        "Register as Advocate"
    } else {
        "Create an Account"
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto card space-y-6">
                <h2 class="text-center text-3xl font-extrabold text-fg">{heading}</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium">"Full Name *"</label>
                        <input
                            type="text"
                            name="name"
                            class="form-control"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium">"Email *"</label>
                        <input
                            type="email"
                            name="email"
                            class="form-control"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium">"Phone *"</label>
                        <input
                            type="tel"
                            name="phone"
                            class="form-control"
                            required
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium">"Password *"</label>
                        <input
                            type="password"
                            name="password"
                            class="form-control"
                            required
                            minlength="6"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium">"Account Type"</label>
                        <select
                            name="role"
                            class="form-control"
                            prop:value=move || form.with(|f| f.role.as_str().to_string())
                            on:change=move |ev| form.update(|f| f.role = parse_role(&event_target_value(&ev)))
                        >
                            <option value="user">"Client"</option>
                            <option value="advocate">"Advocate"</option>
                        </select>
                    </div>
                    <InlineErrorMessage error=error.into() />
                    <button type="submit" class="btn btn-primary w-full" disabled=move || pending.get()>
                        {move || if pending.get() { "Registering..." } else { heading }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Already have an account? "
                    <a href="/login" class="text-link">"Login here"</a>
                </p>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_auth;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn advocate_registration_uses_advocate_heading() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! { <RegisterPanel initial_role=Role::Advocate /> }
        });
        assert!(html.contains("Register as Advocate"));
        assert!(html.contains("name=\"phone\""));
        assert!(html.contains("value=\"advocate\""));
    }
}
