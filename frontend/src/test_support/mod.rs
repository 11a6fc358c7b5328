#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, Service, ServiceType, Session, UserProfile};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn user_for(role: Role) -> UserProfile {
        let (id, name) = match role {
            Role::User => (11, "Ravi Kumar"),
            Role::Advocate => (7, "Asha Rao"),
            Role::Admin => (1, "Site Admin"),
        };
        UserProfile {
            id,
            name: name.into(),
            email: format!("{}@example.com", role.as_str()),
            phone: None,
            role,
        }
    }

    pub fn session_for(role: Role) -> Session {
        Session {
            user: user_for(role),
            token: format!("jwt-{}", role.as_str()),
        }
    }

    pub fn consultation_service() -> Service {
        Service {
            id: 3,
            advocate_id: Some(7),
            title: "Consultation".into(),
            description: "45 minute call".into(),
            service_type: ServiceType::Both,
            category: Some("Family".into()),
            price: 1500.0,
            duration_minutes: 45,
        }
    }

    pub fn provide_auth(
        session: Option<Session>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState::from_session(session));
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
