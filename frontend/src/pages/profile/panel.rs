use crate::{
    api::{AdvocateProfilePayload, ApiClient, ApiError, ProfileUpdate, Role, Session},
    components::layout::{ErrorMessage, Layout, SuccessMessage},
    pages::profile::forms::{AdvocateProfileForm, ProfileForm},
    state::auth::{use_auth, AuthState},
    utils::message::MessageState,
};
use leptos::{ev::SubmitEvent, *};

/// Saves the profile and mirrors the merged identity into the auth state.
pub async fn save_profile(
    api: &ApiClient,
    update: ProfileUpdate,
    set_auth: WriteSignal<AuthState>,
) -> Result<Option<Session>, ApiError> {
    let session = api.update_profile(&update).await?;
    if let Some(session) = &session {
        let session = session.clone();
        set_auth.update(|state| state.session = Some(session));
    }
    Ok(session)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <Layout><ProfilePanel /></Layout> }
}

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (auth, set_auth) = use_auth();
    let is_advocate = Signal::derive(move || auth.get().role() == Some(Role::Advocate));

    let editing = create_rw_signal(false);
    let form = create_rw_signal(auth.with_untracked(|state| ProfileForm::from_session(state.session.as_ref())));
    let message = create_rw_signal(MessageState::default());

    let save_api = api.clone();
    let save_action = create_action(move |update: &ProfileUpdate| {
        let api = save_api.clone();
        let update = update.clone();
        async move { save_profile(&api, update, set_auth).await }
    });
    let saving = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => {
                    editing.set(false);
                    message.update(|msg| msg.set_success("Profile updated successfully"));
                }
                Err(err) => message.update(|msg| msg.set_error(err.error)),
            }
        }
    });

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ProfileForm::to_update) {
            Ok(update) => save_action.dispatch(update),
            Err(msg) => message.update(|m| m.set_error(msg)),
        }
    };

    let on_cancel = move |_| {
        form.set(auth.with_untracked(|state| ProfileForm::from_session(state.session.as_ref())));
        editing.set(false);
        message.update(MessageState::clear);
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-2xl font-semibold text-fg">"My Profile"</h1>
            {move || message.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
            {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
            <div class="card">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <dl class="space-y-2">
                            <div><dt class="text-sm text-fg-muted">"Name"</dt><dd>{move || form.with(|f| f.name.clone())}</dd></div>
                            <div><dt class="text-sm text-fg-muted">"Email"</dt><dd>{move || form.with(|f| f.email.clone())}</dd></div>
                            <div>
                                <dt class="text-sm text-fg-muted">"Phone"</dt>
                                <dd>{move || form.with(|f| if f.phone.is_empty() { "Not provided".to_string() } else { f.phone.clone() })}</dd>
                            </div>
                            <div>
                                <dt class="text-sm text-fg-muted">"Account Type"</dt>
                                <dd>{move || auth.get().role().map(Role::as_str).unwrap_or_default()}</dd>
                            </div>
                        </dl>
                        <button class="btn btn-primary mt-4" on:click=move |_| editing.set(true)>"Edit Profile"</button>
                    }
                >
                    <form class="space-y-3" on:submit=on_save>
                        <label class="block text-sm font-medium">"Name"</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <label class="block text-sm font-medium">"Email"</label>
                        <input
                            type="email"
                            class="form-control"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <label class="block text-sm font-medium">"Phone"</label>
                        <input
                            type="tel"
                            class="form-control"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                        <div class="flex gap-2">
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                            <button type="button" class="btn btn-secondary" on:click=on_cancel>"Cancel"</button>
                        </div>
                    </form>
                </Show>
            </div>
            <Show when=move || is_advocate.get()>
                <AdvocateProfileCard api=api.clone() />
            </Show>
        </div>
    }
}

#[component]
pub fn AdvocateProfileCard(api: ApiClient) -> impl IntoView {
    let form = create_rw_signal(AdvocateProfileForm::default());
    let message = create_rw_signal(MessageState::default());
    let submit_action = create_action(move |payload: &AdvocateProfilePayload| {
        let api = api.clone();
        let payload = payload.clone();
        async move { api.register_advocate(&payload).await.map(|_| ()) }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => message.update(|msg| msg.set_success("Advocate profile saved")),
                Err(err) => message.update(|msg| msg.set_error(err.error)),
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(AdvocateProfileForm::to_payload) {
            Ok(payload) => submit_action.dispatch(payload),
            Err(msg) => message.update(|m| m.set_error(msg)),
        }
    };

    let field = move |label: &'static str, read: fn(&AdvocateProfileForm) -> String, write: fn(&mut AdvocateProfileForm, String)| {
        view! {
            <label class="block text-sm font-medium">{label}</label>
            <input
                type="text"
                class="form-control"
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="card space-y-3">
            <h2 class="text-lg font-medium">"Complete advocate profile"</h2>
            {move || message.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
            {move || message.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
            <form class="space-y-3" on:submit=on_submit>
                {field("Specialization", |f| f.specialization.clone(), |f, v| f.specialization = v)}
                {field("City", |f| f.city.clone(), |f, v| f.city = v)}
                {field("State", |f| f.state.clone(), |f, v| f.state = v)}
                {field("Experience (years)", |f| f.experience_years.clone(), |f, v| f.experience_years = v)}
                {field("Hourly Rate", |f| f.hourly_rate.clone(), |f, v| f.hourly_rate = v)}
                <label class="block text-sm font-medium">"Bio"</label>
                <textarea
                    class="form-control"
                    rows="4"
                    prop:value=move || form.with(|f| f.bio.clone())
                    on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Saving..." } else { "Save Advocate Profile" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::test_support::helpers::{provide_auth, session_for, user_for};
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[tokio::test]
    async fn saved_profile_is_mirrored_into_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/auth/profile");
            then.status(200).json_body(json!({ "message": "Profile updated" }));
        });
        let runtime = create_runtime();
        let api = ApiClient::new_with_base_url(server.url("/api"));
        api.session()
            .set(user_for(Role::User), "jwt-user".into())
            .unwrap();
        let (auth, set_auth) = create_signal(AuthState::from_session(api.session().current()));

        let session = save_profile(
            &api,
            ProfileUpdate {
                name: "Ravi K".into(),
                email: "ravi.k@example.com".into(),
                phone: "98765".into(),
            },
            set_auth,
        )
        .await
        .unwrap();

        assert_eq!(session.as_ref().map(|s| s.name()), Some("Ravi K"));
        let state = auth.get_untracked();
        assert_eq!(state.session.as_ref().map(|s| s.user.email.as_str()), Some("ravi.k@example.com"));
        assert_eq!(state.session.map(|s| s.token), Some("jwt-user".to_string()));
        assert_eq!(
            server.last(&PUT, "/api/auth/profile").unwrap().body,
            Some(json!({ "name": "Ravi K", "email": "ravi.k@example.com", "phone": "98765" }))
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_save_leaves_auth_state_alone() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/auth/profile");
            then.status(400).json_body(json!({ "error": "Email already in use" }));
        });
        let runtime = create_runtime();
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let (auth, set_auth) = create_signal(AuthState::from_session(Some(session_for(Role::User))));
        let err = save_profile(
            &api,
            ProfileUpdate {
                name: "Ravi".into(),
                email: "taken@example.com".into(),
                phone: String::new(),
            },
            set_auth,
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Email already in use");
        assert_eq!(auth.get_untracked().session, Some(session_for(Role::User)));
        runtime.dispose();
    }

    #[test]
    fn advocate_sees_professional_details_form() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Advocate)));
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("Asha Rao"));
        assert!(html.contains("Complete advocate profile"));

        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::User)));
            view! { <ProfilePanel /> }
        });
        assert!(html.contains("Edit Profile"));
        assert!(!html.contains("Complete advocate profile"));
    }
}
