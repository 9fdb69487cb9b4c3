use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use super::{RecommendError, RecommendRequest, RecommendResponse, RecommendationService};

/// Service address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const MAX_DETAIL_CHARS: usize = 200;

/// Blocking HTTP client for the recommendation service.
#[derive(Debug, Clone)]
pub struct HttpRecommender {
	base_url: String,
	client: Client,
}

impl HttpRecommender {
	/// Build a client for `base_url`. No client-side timeout is applied; the
	/// service's own timeout behaviour is relied upon.
	pub fn new(base_url: impl AsRef<str>) -> Result<Self, RecommendError> {
		let client = Client::builder()
			.timeout(None::<Duration>)
			.build()
			.map_err(|err| RecommendError::Client(err.to_string()))?;
		Ok(Self {
			base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
			client,
		})
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path)
	}

	/// Query `GET /health` and return the decoded body.
	pub fn health(&self) -> Result<Value, RecommendError> {
		let url = self.endpoint("health");
		let response = self
			.client
			.get(&url)
			.send()
			.map_err(|err| RecommendError::transport(&url, err))?;
		let status = response.status();
		let body = response
			.text()
			.map_err(|err| RecommendError::transport(&url, err))?;
		if !status.is_success() {
			return Err(RecommendError::Status {
				status: status.as_u16(),
				detail: error_detail(&body),
			});
		}
		Ok(serde_json::from_str(&body)?)
	}
}

impl RecommendationService for HttpRecommender {
	fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, RecommendError> {
		let url = self.endpoint("recommend");
		debug!("POST {url} top_n={}", request.top_n);
		let response = self
			.client
			.post(&url)
			.json(request)
			.send()
			.map_err(|err| RecommendError::transport(&url, err))?;
		let status = response.status();
		let body = response
			.text()
			.map_err(|err| RecommendError::transport(&url, err))?;
		if !status.is_success() {
			return Err(RecommendError::Status {
				status: status.as_u16(),
				detail: error_detail(&body),
			});
		}
		decode_response(&body)
	}
}

/// Decode a success body. The body must be a JSON object.
pub fn decode_response(body: &str) -> Result<RecommendResponse, RecommendError> {
	Ok(serde_json::from_str(body)?)
}

/// Prefer the service's `{"error": ...}` message, else a clipped body.
fn error_detail(body: &str) -> String {
	if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body)
		&& let Some(Value::String(message)) = map.get("error")
	{
		return message.clone();
	}
	let trimmed = body.trim();
	if trimmed.is_empty() {
		return "(empty body)".to_string();
	}
	trimmed.chars().take(MAX_DETAIL_CHARS).collect()
}

#[cfg(test)]
mod tests {
	use std::net::TcpListener;

	use mockito::{Matcher, Server};
	use serde_json::json;

	use super::*;

	fn request(query: &str, top_n: u32) -> RecommendRequest {
		RecommendRequest {
			query: query.to_string(),
			top_n,
		}
	}

	#[test]
	fn posts_query_and_count_as_json() {
		let mut server = Server::new();
		let mock = server
			.mock("POST", "/recommend")
			.match_body(Matcher::Json(json!({"query": "space opera", "top_n": 24})))
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(
				r#"{"query":"space opera","results":[{"Title":"Dune","Score":0.9},{"Title":"Alien"}]}"#,
			)
			.create();

		let client = HttpRecommender::new(server.url()).expect("client");
		let response = client
			.recommend(&request("space opera", 24))
			.expect("response");

		mock.assert();
		let titles: Vec<String> = response
			.into_results()
			.into_iter()
			.map(|item| item.title)
			.collect();
		assert_eq!(titles, vec!["Dune", "Alien"]);
	}

	#[test]
	fn missing_results_field_is_an_empty_list() {
		let mut server = Server::new();
		let _mock = server
			.mock("POST", "/recommend")
			.with_status(200)
			.with_body(r#"{"query":"nothing"}"#)
			.create();

		let client = HttpRecommender::new(server.url()).expect("client");
		let response = client.recommend(&request("nothing", 6)).expect("response");
		assert!(response.into_results().is_empty());
	}

	#[test]
	fn error_status_is_reported_with_service_message() {
		let mut server = Server::new();
		let _mock = server
			.mock("POST", "/recommend")
			.with_status(500)
			.with_body(r#"{"error":"model not loaded"}"#)
			.create();

		let client = HttpRecommender::new(server.url()).expect("client");
		let err = client.recommend(&request("heat", 12)).unwrap_err();
		match err {
			RecommendError::Status { status, detail } => {
				assert_eq!(status, 500);
				assert_eq!(detail, "model not loaded");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn non_object_body_is_malformed() {
		let mut server = Server::new();
		let _mock = server
			.mock("POST", "/recommend")
			.with_status(200)
			.with_body("[1, 2, 3]")
			.create();

		let client = HttpRecommender::new(server.url()).expect("client");
		let err = client.recommend(&request("heat", 12)).unwrap_err();
		assert!(matches!(err, RecommendError::Malformed(_)));
	}

	#[test]
	fn unreachable_service_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		drop(listener);

		let client = HttpRecommender::new(format!("http://{addr}")).expect("client");
		let err = client.recommend(&request("heat", 12)).unwrap_err();
		assert!(matches!(err, RecommendError::Transport { .. }));
	}

	#[test]
	fn trailing_slashes_are_trimmed_from_base() {
		let client = HttpRecommender::new("http://localhost:8000//").expect("client");
		assert_eq!(client.base_url(), "http://localhost:8000");
		assert_eq!(client.endpoint("recommend"), "http://localhost:8000/recommend");
	}

	#[test]
	fn health_returns_service_payload() {
		let mut server = Server::new();
		let _mock = server
			.mock("GET", "/health")
			.with_status(200)
			.with_body(r#"{"status":"ok","device":"cpu"}"#)
			.create();

		let client = HttpRecommender::new(server.url()).expect("client");
		let body = client.health().expect("health");
		assert_eq!(body["status"], "ok");
	}
}
