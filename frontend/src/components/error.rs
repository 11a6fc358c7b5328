use crate::api::ApiError;
use leptos::*;

/// Form-level error box. Transport failures get a friendlier line than the
/// raw gateway message.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| display_message(&e)).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| e.status).map(|status| view! {
                    <div class="text-xs opacity-75">{format!("Status: {}", status)}</div>
                })}
            </div>
        </Show>
    }
}

pub fn display_message(error: &ApiError) -> String {
    if error.status.is_none() && error.code == "NETWORK" {
        "Unable to reach the server. Please try again.".to_string()
    } else {
        error.error.clone()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message_and_status() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http(400, "Email already registered")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Email already registered"));
        assert!(html.contains("Status: 400"));
    }

    #[test]
    fn network_failure_is_reworded() {
        assert_eq!(
            display_message(&ApiError::network()),
            "Unable to reach the server. Please try again."
        );
        assert_eq!(display_message(&ApiError::unknown("boom")), "boom");
    }

    #[test]
    fn nothing_rendered_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("bg-status-error-bg"));
    }
}
