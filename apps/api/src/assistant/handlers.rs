//! Axum route handlers for the assistant API (`/api/ai/*`).
//!
//! Every handler follows the same shape: authenticate → load profile → bind prompt
//! fields → `pipeline::execute`. Request bodies are validated before the model is called.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::assistant::resume::{extract_resume_text, receive_resume};
use crate::assistant::tasks;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::pipeline::enrich::EnrichmentSource;
use crate::pipeline::prompt::{PromptFields, NONE_LISTED};
use crate::pipeline::{self, Task};
use crate::profiles::load_profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatcherRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub recent_searches: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfileRequest {
    #[serde(default)]
    pub transcribed_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRoleRequest {
    #[serde(default)]
    pub job_title: String,
}

#[derive(Debug, Deserialize)]
pub struct VoiceCommandRequest {
    #[serde(default)]
    pub command: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/analyze-resume (multipart, field `resume`)
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    load_profile(state.profiles.as_ref(), user_id).await?;

    let pdf = receive_resume(&mut multipart).await?;
    let resume_text = extract_resume_text(
        state.extractor.clone(),
        state.config.upload_dir.clone(),
        pdf,
    )
    .await?;

    let fields = PromptFields::new().text("resume_text", resume_text);
    run(&state, &tasks::ANALYZE_RESUME, &fields, EnrichmentSource::Nothing).await
}

/// POST /api/ai/career-path
pub async fn handle_career_path(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let question = non_blank("question", &request.question)?;
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = profile_fields(&profile)?.text("question", question);
    run(&state, &tasks::CAREER_PATH, &fields, EnrichmentSource::Nothing).await
}

/// POST /api/ai/suggest-connections
pub async fn handle_suggest_connections(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>, AppError> {
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;

    let candidates: Vec<UserProfile> = state
        .profiles
        .find_connection_candidates(&profile)
        .await?
        .into_iter()
        .filter(|u| !u.name.trim().is_empty())
        .collect();

    if candidates.is_empty() {
        info!("No connection candidates for user {user_id}");
        return Ok(Json(json!({ "suggestions": [] })));
    }

    let fields = profile_fields(&profile)?.text("candidates", candidate_block(&candidates));
    run(
        &state,
        &tasks::SUGGEST_CONNECTIONS,
        &fields,
        EnrichmentSource::Candidates(&candidates),
    )
    .await
}

/// POST /api/ai/job-matcher
pub async fn handle_job_matcher(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<JobMatcherRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;

    let resume_text = request
        .resume_text
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Not provided".to_string());
    let recent_searches: Vec<&str> = request
        .recent_searches
        .iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let recent_searches = if recent_searches.is_empty() {
        "None".to_string()
    } else {
        recent_searches.join(", ")
    };
    let job_listings = state.catalog.to_prompt_json()?;

    let fields = PromptFields::new()
        .required("bio", profile.bio.as_deref())?
        .list("skills", &profile.skills)
        .list("interests", &profile.interests)
        .text("resume_text", resume_text)
        .text("recent_searches", recent_searches)
        .text("job_listings", job_listings);

    run(
        &state,
        &tasks::JOB_MATCHER,
        &fields,
        EnrichmentSource::Catalog(state.catalog.as_ref()),
    )
    .await
}

/// POST /api/ai/voice-profile-builder
pub async fn handle_voice_profile_builder(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<VoiceProfileRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let transcribed_text = non_blank("transcribedText", &request.transcribed_text)?;
    load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = PromptFields::new().text("transcribed_text", transcribed_text);
    run(&state, &tasks::VOICE_PROFILE_BUILDER, &fields, EnrichmentSource::Nothing).await
}

/// POST /api/ai/certification-recommender
pub async fn handle_certification_recommender(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>, AppError> {
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = PromptFields::new()
        .required("bio", profile.bio.as_deref())?
        .list("skills", &profile.skills)
        .list("experience", &profile.experience_lines())
        .list("education", &profile.education_lines());

    run(
        &state,
        &tasks::CERTIFICATION_RECOMMENDER,
        &fields,
        EnrichmentSource::Nothing,
    )
    .await
}

/// POST /api/ai/job-role-simulator
pub async fn handle_job_role_simulator(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<JobRoleRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let job_title = non_blank("jobTitle", &request.job_title)?;
    load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = PromptFields::new().text("job_title", job_title);
    run(&state, &tasks::JOB_ROLE_SIMULATOR, &fields, EnrichmentSource::Nothing).await
}

/// POST /api/ai/voice-command
pub async fn handle_voice_command(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<VoiceCommandRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let command = non_blank("command", &request.command)?;
    load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = PromptFields::new().text("command", command);
    run(&state, &tasks::VOICE_COMMAND, &fields, EnrichmentSource::Nothing).await
}

/// POST /api/ai/career-mentor
pub async fn handle_career_mentor(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let question = non_blank("question", &request.question)?;
    let profile = load_profile(state.profiles.as_ref(), user_id).await?;

    let fields = profile_fields(&profile)?
        .list("experience", &profile.experience_lines())
        .text("question", question);
    run(&state, &tasks::CAREER_MENTOR, &fields, EnrichmentSource::Nothing).await
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn run(
    state: &AppState,
    task: &Task,
    fields: &PromptFields,
    source: EnrichmentSource<'_>,
) -> Result<Json<Value>, AppError> {
    let value = pipeline::execute(
        state.completion.as_ref(),
        state.config.llm_timeout,
        task,
        fields,
        source,
    )
    .await?;
    Ok(Json(value))
}

/// Name, skills, education and interests: the block shared by the profile-aware prompts.
fn profile_fields(profile: &UserProfile) -> Result<PromptFields, AppError> {
    Ok(PromptFields::new()
        .required("name", Some(profile.name.as_str()))?
        .list("skills", &profile.skills)
        .list("education", &profile.education_lines())
        .list("interests", &profile.interests))
}

fn candidate_block(candidates: &[UserProfile]) -> String {
    candidates
        .iter()
        .map(|u| {
            format!(
                "Name: {}\nSkills: {}\nInterests: {}\nEducation: {}",
                u.name,
                joined(&u.skills),
                joined(&u.interests),
                joined(&u.education_lines()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn joined(items: &[String]) -> String {
    if items.is_empty() {
        NONE_LISTED.to_string()
    } else {
        items.join(", ")
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::InvalidInput(e.body_text()))
}

fn non_blank<'a>(name: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{name} is required")));
    }
    Ok(trimmed)
}
