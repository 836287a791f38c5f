use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::*;

fn js_error(context: &str, err: JsValue) -> ApiError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    ApiError::Network(format!("{context}: {detail}"))
}

async fn fetch_once(url: &str) -> Result<RawResponse, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("window unavailable".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init).map_err(|e| js_error("build request", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| js_error("set headers", e))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    let response: Response = value.dyn_into().map_err(|e| js_error("fetch response", e))?;

    let body_promise = response.text().map_err(|e| js_error("read body", e))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|e| js_error("read body", e))?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse {
        status: response.status(),
        body,
    })
}

pub async fn fetch_text(url: &str, timeout_ms: u32) -> Result<RawResponse, ApiError> {
    if timeout_ms == 0 {
        return fetch_once(url).await;
    }

    let request = Box::pin(fetch_once(url));
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        // The in-flight fetch is dropped; a late response has nowhere to land.
        Either::Right(((), _)) => Err(ApiError::Timeout {
            url: url.to_string(),
            timeout_ms,
        }),
    }
}
