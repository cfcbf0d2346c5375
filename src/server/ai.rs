//! LLM endpoints: connectivity test, career analysis, interview prep,
//! learning paths and service status.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ApiError;
use crate::app::AppState;
use crate::constants::LLM_SERVICE_NAME;
use crate::gateway::{CompletionResult, InterviewLevel};
use crate::models::TokenUsage;

#[derive(Debug, Deserialize)]
pub struct TestPromptRequest {
    pub prompt: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerAnalysisRequest {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub goals: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewPrepRequest {
    pub role: String,
    /// junior, mid or senior (any case)
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct TokenCounts {
    pub prompt: u64,
    pub completion: u64,
    pub total: u64,
}

impl From<&TokenUsage> for TokenCounts {
    fn from(usage: &TokenUsage) -> Self {
        Self {
            prompt: usage.prompt_tokens,
            completion: usage.completion_tokens,
            total: usage.total_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateData {
    pub success: bool,
    pub response: String,
    pub tokens: TokenCounts,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct TestPromptResponse {
    pub status: &'static str,
    pub data: GenerateData,
}

#[derive(Debug, Serialize)]
pub struct CareerAnalysisResponse {
    pub status: &'static str,
    pub analysis: String,
    pub tokens_used: u64,
}

#[derive(Debug, Serialize)]
pub struct InterviewPrepResponse {
    pub status: &'static str,
    pub role: String,
    pub level: InterviewLevel,
    pub questions: String,
    pub tokens_used: u64,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub status: &'static str,
    pub target_role: String,
    pub learning_path: String,
    pub tokens_used: u64,
}

/// Unpack a successful completion, or turn a failure into a 500 with `context`
fn require_success(
    result: CompletionResult,
    context: &str,
) -> Result<(String, TokenUsage), ApiError> {
    match result {
        CompletionResult::Success { text, usage } => Ok((text, usage)),
        CompletionResult::Failure { message } => {
            Err(ApiError::Internal(format!("{}: {}", context, message)))
        }
    }
}

/// Send a raw prompt to the model; useful for checking credentials
pub async fn test_llm(
    State(state): State<AppState>,
    Json(request): Json<TestPromptRequest>,
) -> Result<Json<TestPromptResponse>, ApiError> {
    let result = state
        .gateway
        .generate(&request.prompt, request.system_prompt.as_deref())
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let (text, usage) = require_success(result, "LLM Error")?;

    Ok(Json(TestPromptResponse {
        status: "success",
        data: GenerateData {
            success: true,
            response: text,
            tokens: TokenCounts::from(&usage),
            model: state.gateway.params().model.clone(),
        },
    }))
}

pub async fn analyze_career(
    State(state): State<AppState>,
    Json(request): Json<CareerAnalysisRequest>,
) -> Result<Json<CareerAnalysisResponse>, ApiError> {
    let analysis = state
        .gateway
        .analyze_career_profile(&request.skills, request.experience_years, &request.goals)
        .await
        .map_err(|e| ApiError::Internal(format!("Career analysis error: {}", e)))?;

    let (text, usage) = require_success(analysis.result, "Analysis failed")?;

    Ok(Json(CareerAnalysisResponse {
        status: "success",
        analysis: text,
        tokens_used: usage.total_tokens,
    }))
}

pub async fn interview_prep(
    State(state): State<AppState>,
    Json(request): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrepResponse>, ApiError> {
    // Rejected here, before the gateway is involved
    let level: InterviewLevel = request.level.parse().map_err(ApiError::from)?;

    let questions = state
        .gateway
        .generate_interview_questions(&request.role, level)
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let (text, usage) = require_success(questions.result, "Interview prep failed")?;

    Ok(Json(InterviewPrepResponse {
        status: "success",
        role: questions.role,
        level: questions.level,
        questions: text,
        tokens_used: usage.total_tokens,
    }))
}

pub async fn learning_path(
    State(state): State<AppState>,
    Json(request): Json<LearningPathRequest>,
) -> Result<Json<LearningPathResponse>, ApiError> {
    let path = state
        .gateway
        .create_learning_path(&request.current_skills, &request.target_role)
        .await
        .map_err(|e| ApiError::Internal(format!("Learning path error: {}", e)))?;

    let (text, usage) = require_success(path.result, "Learning path generation failed")?;

    Ok(Json(LearningPathResponse {
        status: "success",
        target_role: path.target_role,
        learning_path: text,
        tokens_used: usage.total_tokens,
    }))
}

/// Whether the LLM service is configured, plus its sampling parameters
pub async fn llm_status(State(state): State<AppState>) -> Json<Value> {
    let configured = state.gateway.is_configured();
    let params = state.gateway.params();

    Json(json!({
        "service": LLM_SERVICE_NAME,
        "status": if configured { "connected" } else { "not_configured" },
        "model": params.model,
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
        "message": if configured { "✅ Ready to process requests" } else { "⚠️ API key not configured" },
    }))
}
