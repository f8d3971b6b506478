//! Task Commands
//!
//! `fetch` wrappers for the task toggle route.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::PageConfig;
use crate::error::{describe_js, ToggleError};
use crate::models::{ErrorBody, TaskId, ToggleResult};

/// Server operations the page issues
#[async_trait(?Send)]
pub trait TaskApi {
    /// Flips completion of one task and returns the server's new state
    async fn toggle(&self, task_id: &TaskId, token: &str) -> Result<ToggleResult, ToggleError>;
}

/// `TaskApi` over the browser's `fetch`
pub struct FetchTaskApi {
    config: Rc<PageConfig>,
}

impl FetchTaskApi {
    pub fn new(config: Rc<PageConfig>) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl TaskApi for FetchTaskApi {
    async fn toggle(&self, task_id: &TaskId, token: &str) -> Result<ToggleResult, ToggleError> {
        let url = self.config.toggle_url(task_id);
        let request = build_toggle_request(&url, &self.config.csrf_header, token)
            .map_err(|e| ToggleError::Transport(describe_js(&e)))?;

        let window = web_sys::window()
            .ok_or_else(|| ToggleError::Transport("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ToggleError::Transport(describe_js(&e)))?
            .dyn_into()
            .map_err(|_| ToggleError::Transport("fetch did not yield a Response".to_string()))?;

        if !response.ok() {
            // Rejections may carry {"error": "..."}; anything else is just a status
            let message = read_json::<ErrorBody>(&response)
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ToggleError::Status {
                status: response.status(),
                message,
            });
        }

        read_json(&response).await.map_err(ToggleError::Decode)
    }
}

/// POST with JSON content type and the token header, no body
fn build_toggle_request(url: &str, csrf_header: &str, token: &str) -> Result<Request, JsValue> {
    let init = RequestInit::new();
    init.set_method("POST");

    let request = Request::new_with_str_and_init(url, &init)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json")?;
    headers.set(csrf_header, token)?;
    Ok(request)
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, String> {
    let promise = response.json().map_err(|e| describe_js(&e))?;
    let value = JsFuture::from(promise).await.map_err(|e| describe_js(&e))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}
