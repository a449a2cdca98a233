//! Hackathon listing endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use hackreg_core::models::{Hackathon, HackathonDraft};

use super::DataResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, JsonBody};
use crate::http::server::AppState;

/// Query for GET /hackathons
#[derive(Debug, Deserialize)]
pub struct HackathonQuery {
    pub id: Option<String>,
}

/// GET /hackathons - one listing by `?id=`, or all of them
async fn list_hackathons(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<HackathonQuery>,
) -> Result<Response, ApiError> {
    let id = query.id.as_deref().map(str::trim).filter(|id| !id.is_empty());

    let Some(raw_id) = id else {
        let all = state
            .hackathons
            .list()
            .await
            .map_err(|e| ApiError::rejected("loading hackathons", e))?;
        return Ok(Json(DataResponse::ok(all)).into_response());
    };

    let id = Uuid::parse_str(raw_id)
        .map_err(|_| ApiError::bad_request(format!("invalid hackathon id '{}'", raw_id)))?;

    let hackathon = state
        .hackathons
        .get(id)
        .await
        .map_err(|e| ApiError::rejected("loading hackathon", e))?
        .ok_or_else(|| ApiError::not_found("hackathon", raw_id))?;

    Ok(Json(DataResponse::ok(hackathon)).into_response())
}

/// POST /hackathons - validate and store a new listing
async fn create_hackathon(
    State(state): State<Arc<AppState>>,
    JsonBody(draft): JsonBody<HackathonDraft>,
) -> Result<(StatusCode, Json<DataResponse<Hackathon>>), ApiError> {
    let listing = draft.finalize()?;

    let hackathon = state
        .hackathons
        .insert(listing)
        .await
        .map_err(|e| ApiError::rejected("creating hackathon", e))?;

    tracing::info!(id = %hackathon.id, name = %hackathon.details.name, "hackathon created");
    Ok((StatusCode::CREATED, Json(DataResponse::ok(hackathon))))
}

/// Hackathon routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/hackathons", get(list_hackathons).post(create_hackathon))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use super::super::testing::{app, app_with_broken_store, get, post_json, send};

    fn listing(name: &str) -> Value {
        json!({
            "name": name,
            "description": "48 hours of building",
            "startDate": "2025-03-01T09:00:00Z",
            "endDate": "2025-03-03T18:00:00Z",
            "registrationDeadline": "2025-02-20",
            "location": "Berlin",
            "organizerName": "Ada",
            "organizerEmail": "ada@example.com",
            "outhouse": true,
            "registrationlink": "http://x.com"
        })
    }

    #[tokio::test]
    async fn create_fills_defaults_and_returns_201() {
        let (app, _) = app();
        let (status, body) = send(&app, post_json("/hackathons", listing("HackX"))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "HackX");
        assert_eq!(body["data"]["inhouse"], false);
        assert_eq!(body["data"]["outhouse"], true);
        assert_eq!(body["data"]["minTeamSize"], 1);
        assert_eq!(body["data"]["maxTeamSize"], 5);
        assert!(body["data"]["id"].is_string());
    }

    #[tokio::test]
    async fn create_reports_every_violation() {
        let (app, _) = app();
        let mut payload = listing("HackX");
        payload["inhouse"] = json!(true);
        payload["name"] = json!("");

        let (status, body) = send(&app, post_json("/hackathons", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        let details = body["details"].as_array().unwrap();
        assert!(details.contains(&json!("name is required")));
        assert!(details.contains(&json!("inhouse and outhouse cannot both be true")));

        let (_, all) = send(&app, get("/hackathons")).await;
        assert_eq!(all["data"], json!([]));
    }

    #[tokio::test]
    async fn outhouse_requires_link() {
        let (app, _) = app();
        let mut payload = listing("HackX");
        payload["registrationlink"] = json!("  ");

        let (status, body) = send(&app, post_json("/hackathons", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"][0],
            "registrationlink is required when outhouse is true"
        );
    }

    #[tokio::test]
    async fn malformed_json_uses_error_envelope() {
        let (app, _) = app();
        let request = axum::http::Request::post("/hackathons")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let (app, _) = app();
        for name in ["First", "Second", "Third"] {
            let (status, _) = send(&app, post_json("/hackathons", listing(name))).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&app, get("/hackathons")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn get_by_id() {
        let (app, _) = app();
        let (_, created) = send(&app, post_json("/hackathons", listing("HackX"))).await;
        let id = created["data"]["id"].as_str().unwrap();

        let (status, body) = send(&app, get(&format!("/hackathons?id={}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "HackX");
        assert_eq!(body["data"]["id"], id);
    }

    #[tokio::test]
    async fn unknown_id_is_404_and_malformed_id_is_400() {
        let (app, _) = app();

        let missing = uuid::Uuid::new_v4();
        let (status, body) = send(&app, get(&format!("/hackathons?id={}", missing))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let (status, body) = send(&app, get("/hackathons?id=not-an-id")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn blank_id_lists_everything() {
        let (app, _) = app();
        send(&app, post_json("/hackathons", listing("HackX"))).await;

        let (status, body) = send(&app, get("/hackathons?id=")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_query_uses_error_envelope() {
        let (app, _) = app();
        let (status, body) = send(&app, get("/hackathons?id=a&id=b")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("id"));
    }

    #[tokio::test]
    async fn store_failures_are_rejected_requests() {
        let app = app_with_broken_store();

        let (status, body) = send(&app, get("/hackathons")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "loading hackathons failed"}));

        let id = uuid::Uuid::new_v4();
        let (status, body) = send(&app, get(&format!("/hackathons?id={}", id))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "loading hackathon failed");

        let (status, body) = send(&app, post_json("/hackathons", listing("HackX"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "creating hackathon failed");
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_the_store() {
        let app = app_with_broken_store();
        let mut payload = listing("HackX");
        payload["inhouse"] = json!(true);

        let (status, body) = send(&app, post_json("/hackathons", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0], "inhouse and outhouse cannot both be true");
    }
}
