use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn global_string(object: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
                .filter(|value| !value.is_empty())
        })
    }

    // window.__ADVOCATE_ENV = { API_BASE_URL } from env.js wins over
    // window.__ADVOCATE_CONFIG = { api_base_url }.
    pub fn snapshot_from_globals() -> Option<String> {
        global_string("__ADVOCATE_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| global_string("__ADVOCATE_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(window), Some(url)) = (web_sys::window(), cfg.api_base_url.as_ref()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__ADVOCATE_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let href = web_sys::window()?.location().href().ok()?;
        let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
        let resp = reqwest::get(url).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

/// Base URL for every API call, resolved once per page load.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = browser::snapshot_from_globals() {
            return cache_base_url(&existing);
        }
        if let Some(cfg) = browser::fetch_runtime_config().await {
            browser::write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url.filter(|url| !url.is_empty()) {
                log::info!("api base url from config.json: {}", url);
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::debug!("runtime config initialized: {}", url);
}
