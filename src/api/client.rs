use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response, Window};

use super::error::{ApiError, describe_js};
use crate::config::AppConfig;
use crate::edges::{EdgeSet, GraphRequest, PlotResult, SolveResult, WeightSequence};

/// `/plot` always receives a `weights` array, empty when unweighted.
#[derive(Serialize)]
struct PlotBody<'a> {
	edges: &'a EdgeSet,
	weights: &'a [f64],
}

#[derive(Serialize)]
struct SolveBody<'a> {
	edges: &'a EdgeSet,
}

/// Posts JSON to the backend with a per-request timeout.
#[derive(Clone, Debug)]
pub struct ApiClient {
	config: AppConfig,
}

impl ApiClient {
	pub fn new(config: AppConfig) -> Self {
		Self { config }
	}

	pub async fn plot(&self, request: &GraphRequest) -> Result<PlotResult, ApiError> {
		let body = PlotBody {
			edges: &request.edges,
			weights: request
				.weights
				.as_ref()
				.map(WeightSequence::as_slice)
				.unwrap_or_default(),
		};
		self.post("plot", &body).await
	}

	/// Weights on `request` are not sent; the solver derives its own.
	pub async fn solve(&self, request: &GraphRequest) -> Result<SolveResult, ApiError> {
		self.post("solve", &SolveBody {
			edges: &request.edges,
		})
		.await
	}

	async fn post<B, T>(&self, name: &str, body: &B) -> Result<T, ApiError>
	where
		B: Serialize,
		T: DeserializeOwned,
	{
		let url = self.config.endpoint(name);
		let payload = serde_json::to_string(body)?;
		let window = web_sys::window().ok_or(ApiError::NoWindow)?;

		let controller = AbortController::new().map_err(|e| ApiError::network(&e))?;
		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(&JsValue::from_str(&payload));
		init.set_signal(Some(&controller.signal()));
		let request =
			Request::new_with_str_and_init(&url, &init).map_err(|e| ApiError::network(&e))?;
		request
			.headers()
			.set("Content-Type", "application/json")
			.map_err(|e| ApiError::network(&e))?;

		log::debug!("POST {url} ({} bytes)", payload.len());
		let timer = Deadline::arm(&window, controller, self.config.request_timeout())?;
		let fetched = fetch_text(&window, &request).await;
		let expired = timer.expired();
		drop(timer);

		finish(url, self.config.request_timeout_ms, expired, fetched)
	}
}

/// Status line, `ok` flag and body text of a completed fetch.
type Fetched = (u16, bool, String);

/// Maps the outcome of a fetch onto the typed result. A failure after the
/// deadline fired is a timeout regardless of how `fetch` reported it.
fn finish<T: DeserializeOwned>(
	url: String,
	timeout_ms: u32,
	expired: bool,
	fetched: Result<Fetched, ApiError>,
) -> Result<T, ApiError> {
	let (status, ok, text) = match fetched {
		Ok(fetched) => fetched,
		Err(_) if expired => {
			return Err(ApiError::Timeout {
				endpoint: url,
				timeout_ms,
			});
		}
		Err(err) => return Err(err),
	};
	log::debug!("{url} answered HTTP {status}");

	if !ok {
		return Err(ApiError::Status {
			endpoint: url,
			status,
			body: text,
		});
	}
	serde_json::from_str(&text).map_err(|err| ApiError::Decode {
		endpoint: url,
		message: err.to_string(),
	})
}

async fn fetch_text(window: &Window, request: &Request) -> Result<Fetched, ApiError> {
	let value = JsFuture::from(window.fetch_with_request(request))
		.await
		.map_err(|e| ApiError::network(&e))?;
	let response: Response = value
		.dyn_into()
		.map_err(|v| ApiError::Network(format!("fetch resolved to {}", describe_js(&v))))?;
	let text = JsFuture::from(response.text().map_err(|e| ApiError::network(&e))?)
		.await
		.map_err(|e| ApiError::network(&e))?;
	Ok((
		response.status(),
		response.ok(),
		text.as_string().unwrap_or_default(),
	))
}

/// Aborts the in-flight fetch when the browser timer fires; clears the timer on drop.
struct Deadline {
	window: Window,
	handle: i32,
	expired: Rc<Cell<bool>>,
	_on_expire: Closure<dyn FnMut()>,
}

impl Deadline {
	fn arm(window: &Window, controller: AbortController, timeout: Duration) -> Result<Self, ApiError> {
		let expired = Rc::new(Cell::new(false));
		let flag = expired.clone();
		let on_expire = Closure::<dyn FnMut()>::new(move || {
			flag.set(true);
			controller.abort();
		});
		let handle = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				on_expire.as_ref().unchecked_ref(),
				i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX),
			)
			.map_err(|e| ApiError::network(&e))?;
		Ok(Self {
			window: window.clone(),
			handle,
			expired,
			_on_expire: on_expire,
		})
	}

	fn expired(&self) -> bool {
		self.expired.get()
	}
}

impl Drop for Deadline {
	fn drop(&mut self) {
		self.window.clear_timeout_with_handle(self.handle);
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	const URL: &str = "/plot";

	fn finish_plot(expired: bool, fetched: Result<Fetched, ApiError>) -> Result<PlotResult, ApiError> {
		finish(URL.to_owned(), 1500, expired, fetched)
	}

	#[test]
	fn success_decodes_body() {
		let fetched = Ok((200, true, r#"{"img":"data:image/png;base64,AA"}"#.to_owned()));
		let plot = finish_plot(false, fetched).expect("2xx with valid JSON decodes");
		assert_eq!(plot.img, "data:image/png;base64,AA");
	}

	#[rstest]
	#[case(true, ApiError::Timeout { endpoint: URL.into(), timeout_ms: 1500 })]
	#[case(false, ApiError::Network("The user aborted a request.".into()))]
	fn failed_fetch_is_timeout_only_after_deadline(#[case] expired: bool, #[case] expected: ApiError) {
		let fetched = Err(ApiError::Network("The user aborted a request.".into()));
		assert_eq!(finish_plot(expired, fetched), Err(expected));
	}

	#[test]
	fn non_2xx_keeps_status_and_body() {
		let fetched = Ok((500, false, "Internal Server Error".to_owned()));
		assert_eq!(
			finish_plot(false, fetched),
			Err(ApiError::Status {
				endpoint: URL.into(),
				status: 500,
				body: "Internal Server Error".into(),
			})
		);
	}

	#[rstest]
	#[case("<html>oops</html>")]
	#[case(r#"{"image":"wrong key"}"#)]
	#[case("")]
	fn unparsable_body_is_decode_error(#[case] body: &str) {
		let result = finish_plot(false, Ok((200, true, body.to_owned())));
		assert!(
			matches!(&result, Err(ApiError::Decode { endpoint, .. }) if endpoint == URL),
			"got {result:?}"
		);
	}

	#[test]
	fn late_success_still_counts() {
		let fetched = Ok((200, true, r#"{"img":"x"}"#.to_owned()));
		assert!(finish_plot(true, fetched).is_ok());
	}
}
