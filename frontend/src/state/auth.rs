use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest, Role, Session};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Reactive mirror of the session store for the view layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }
}

fn create_auth_context() -> AuthContext {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_signal(AuthState::from_session(api_client.session().current()))
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let result = api.login(&request).await.and_then(|_| {
        api.session()
            .current()
            .ok_or_else(|| ApiError::unknown("Login response did not include a token"))
    });
    set_auth_state.update(|state| {
        if let Ok(session) = &result {
            state.session = Some(session.clone());
        }
        state.loading = false;
    });
    result
}

/// Registration may or may not sign the user in, depending on whether the
/// server returned a token.
pub async fn register_request(
    request: RegisterRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Option<Session>, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let result = api
        .register(&request)
        .await
        .map(|_| api.session().current());
    set_auth_state.update(|state| {
        if let Ok(Some(session)) = &result {
            state.session = Some(session.clone());
        }
        state.loading = false;
    });
    result
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.logout();
    set_auth_state.update(|state| {
        state.session = None;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<Option<Session>, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { register_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    Callback::new(move |_| logout(&api, set_auth))
}
