//! Recommendation and assessment endpoints. These are reserved routes that
//! answer with empty payloads until the underlying features exist.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    #[serde(default = "default_match_limit")]
    pub limit: u32,
}

fn default_match_limit() -> u32 {
    10
}

pub async fn career_path_recommendations(Path(_user_id): Path<u64>) -> Json<Value> {
    Json(json!({ "recommendations": [] }))
}

pub async fn learning_path_recommendations(Path(_user_id): Path<u64>) -> Json<Value> {
    Json(json!({ "learning_path": [] }))
}

pub async fn job_matches(Path(_user_id): Path<u64>, Query(_query): Query<MatchQuery>) -> Json<Value> {
    Json(json!({ "matches": [] }))
}

pub async fn create_skill_assessment(
    Query(query): Query<UserQuery>,
    Json(_skills): Json<Vec<String>>,
) -> Json<Value> {
    Json(json!({ "message": "Assessment created", "user_id": query.user_id }))
}

pub async fn user_assessments(Path(_user_id): Path<u64>) -> Json<Value> {
    Json(json!({ "assessments": [] }))
}

pub async fn career_evaluation(
    Query(_query): Query<UserQuery>,
    Json(_profile): Json<Value>,
) -> Json<Value> {
    Json(json!({ "evaluation": "pending" }))
}
