//! The tagged set of assistant tasks: one (template, schema, enrichment) triple per endpoint.

use crate::assistant::prompts::*;
use crate::pipeline::enrich::EnrichmentRule;
use crate::pipeline::schema::{Field, Schema};
use crate::pipeline::Task;

const STRING_LIST: Schema = Schema::ArrayOf(&Schema::String);

const fn required(name: &'static str, schema: Schema) -> Field {
    Field {
        name,
        schema,
        required: true,
    }
}

const fn optional(name: &'static str, schema: Schema) -> Field {
    Field {
        name,
        schema,
        required: false,
    }
}

static RESUME_ANALYSIS: Schema = Schema::Object(&RESUME_ANALYSIS_FIELDS);
static RESUME_ANALYSIS_FIELDS: [Field; 5] = [
    required("score", Schema::Number),
    required("strengths", STRING_LIST),
    required("weaknesses", STRING_LIST),
    required("jobRoles", STRING_LIST),
    required("message", Schema::String),
];

static CAREER_ADVICE: Schema = Schema::Object(&CAREER_ADVICE_FIELDS);
static CAREER_ADVICE_FIELDS: [Field; 1] = [required("response", Schema::String)];

static CONNECTION_SUGGESTIONS: Schema = Schema::ArrayOf(&CONNECTION_SUGGESTION);
static CONNECTION_SUGGESTION: Schema = Schema::Object(&CONNECTION_SUGGESTION_FIELDS);
static CONNECTION_SUGGESTION_FIELDS: [Field; 3] = [
    required("name", Schema::String),
    required("reason", Schema::String),
    required("message", Schema::String),
];

static JOB_MATCHES: Schema = Schema::ArrayOf(&JOB_MATCH);
static JOB_MATCH: Schema = Schema::Object(&JOB_MATCH_FIELDS);
static JOB_MATCH_FIELDS: [Field; 5] = [
    required("jobTitle", Schema::String),
    required("company", Schema::String),
    required("matchScore", Schema::Number),
    required("reason", Schema::String),
    required("requirements", STRING_LIST),
];

static VOICE_PROFILE: Schema = Schema::Object(&VOICE_PROFILE_FIELDS);
static VOICE_PROFILE_FIELDS: [Field; 5] = [
    required("name", Schema::String),
    required("bio", Schema::String),
    required("skills", STRING_LIST),
    required("experience", Schema::ArrayOf(&SPOKEN_EXPERIENCE)),
    required("education", Schema::ArrayOf(&SPOKEN_EDUCATION)),
];
static SPOKEN_EXPERIENCE: Schema = Schema::Object(&SPOKEN_EXPERIENCE_FIELDS);
static SPOKEN_EXPERIENCE_FIELDS: [Field; 3] = [
    required("role", Schema::String),
    required("company", Schema::String),
    required("duration", Schema::String),
];
static SPOKEN_EDUCATION: Schema = Schema::Object(&SPOKEN_EDUCATION_FIELDS);
static SPOKEN_EDUCATION_FIELDS: [Field; 2] = [
    required("degree", Schema::String),
    required("university", Schema::String),
];

static CERTIFICATIONS: Schema = Schema::ArrayOf(&CERTIFICATION);
static CERTIFICATION: Schema = Schema::Object(&CERTIFICATION_FIELDS);
static CERTIFICATION_FIELDS: [Field; 7] = [
    required("title", Schema::String),
    required("platform", Schema::String),
    required("description", Schema::String),
    required("duration", Schema::String),
    required("link", Schema::String),
    required("skillGap", Schema::String),
    required("valueProposition", Schema::String),
];

static ROLE_SIMULATION: Schema = Schema::Object(&ROLE_SIMULATION_FIELDS);
static ROLE_SIMULATION_FIELDS: [Field; 5] = [
    required("overview", Schema::String),
    required("dailyTasks", STRING_LIST),
    required("scenarios", Schema::ArrayOf(&SCENARIO)),
    required("tools", Schema::ArrayOf(&TOOL)),
    required("skills", Schema::ArrayOf(&ROLE_SKILL)),
];
static SCENARIO: Schema = Schema::Object(&SCENARIO_FIELDS);
static SCENARIO_FIELDS: [Field; 3] = [
    required("title", Schema::String),
    required("description", Schema::String),
    required("steps", STRING_LIST),
];
static TOOL: Schema = Schema::Object(&TOOL_FIELDS);
static TOOL_FIELDS: [Field; 3] = [
    required("name", Schema::String),
    required("description", Schema::String),
    required("category", Schema::String),
];
static ROLE_SKILL: Schema = Schema::Object(&ROLE_SKILL_FIELDS);
static ROLE_SKILL_FIELDS: [Field; 3] = [
    required("name", Schema::String),
    required("importance", Schema::String),
    required("learningResources", STRING_LIST),
];

static VOICE_INTERPRETATION: Schema = Schema::Object(&VOICE_INTERPRETATION_FIELDS);
static VOICE_INTERPRETATION_FIELDS: [Field; 4] = [
    required("intent", Schema::String),
    required("action", Schema::String),
    required("parameters", Schema::Object(&COMMAND_PARAMETER_FIELDS)),
    required("summary", Schema::String),
];
static COMMAND_PARAMETER_FIELDS: [Field; 3] = [
    required("target", Schema::String),
    optional("value", Schema::String),
    optional("filters", Schema::AnyObject),
];

static MENTOR_REPLY: Schema = Schema::Object(&MENTOR_REPLY_FIELDS);
static MENTOR_REPLY_FIELDS: [Field; 3] = [
    required("response", Schema::String),
    required("suggestions", Schema::ArrayOf(&MENTOR_SUGGESTION)),
    required("followUpQuestions", STRING_LIST),
];
static MENTOR_SUGGESTION: Schema = Schema::Object(&MENTOR_SUGGESTION_FIELDS);
static MENTOR_SUGGESTION_FIELDS: [Field; 4] = [
    required("type", Schema::String),
    required("name", Schema::String),
    required("description", Schema::String),
    optional("link", Schema::String),
];

pub static ANALYZE_RESUME: Task = Task {
    name: "analyze-resume",
    system: ANALYZE_RESUME_SYSTEM,
    template: ANALYZE_RESUME_TEMPLATE,
    schema: &RESUME_ANALYSIS,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

pub static CAREER_PATH: Task = Task {
    name: "career-path",
    system: CAREER_PATH_SYSTEM,
    template: CAREER_PATH_TEMPLATE,
    schema: &CAREER_ADVICE,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

pub static SUGGEST_CONNECTIONS: Task = Task {
    name: "suggest-connections",
    system: SUGGEST_CONNECTIONS_SYSTEM,
    template: SUGGEST_CONNECTIONS_TEMPLATE,
    schema: &CONNECTION_SUGGESTIONS,
    enrichment: EnrichmentRule::ConnectionsByName,
    response_key: Some("suggestions"),
};

pub static JOB_MATCHER: Task = Task {
    name: "job-matcher",
    system: JOB_MATCHER_SYSTEM,
    template: JOB_MATCHER_TEMPLATE,
    schema: &JOB_MATCHES,
    enrichment: EnrichmentRule::JobsByTitleAndCompany,
    response_key: Some("matches"),
};

pub static VOICE_PROFILE_BUILDER: Task = Task {
    name: "voice-profile-builder",
    system: VOICE_PROFILE_SYSTEM,
    template: VOICE_PROFILE_TEMPLATE,
    schema: &VOICE_PROFILE,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

pub static CERTIFICATION_RECOMMENDER: Task = Task {
    name: "certification-recommender",
    system: CERTIFICATION_SYSTEM,
    template: CERTIFICATION_TEMPLATE,
    schema: &CERTIFICATIONS,
    enrichment: EnrichmentRule::None,
    response_key: Some("recommendations"),
};

pub static JOB_ROLE_SIMULATOR: Task = Task {
    name: "job-role-simulator",
    system: JOB_ROLE_SIMULATOR_SYSTEM,
    template: JOB_ROLE_SIMULATOR_TEMPLATE,
    schema: &ROLE_SIMULATION,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

pub static VOICE_COMMAND: Task = Task {
    name: "voice-command",
    system: VOICE_COMMAND_SYSTEM,
    template: VOICE_COMMAND_TEMPLATE,
    schema: &VOICE_INTERPRETATION,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

pub static CAREER_MENTOR: Task = Task {
    name: "career-mentor",
    system: CAREER_MENTOR_SYSTEM,
    template: CAREER_MENTOR_TEMPLATE,
    schema: &MENTOR_REPLY,
    enrichment: EnrichmentRule::None,
    response_key: None,
};

#[cfg(test)]
pub static ALL_TASKS: [&Task; 9] = [
    &ANALYZE_RESUME,
    &CAREER_PATH,
    &SUGGEST_CONNECTIONS,
    &JOB_MATCHER,
    &VOICE_PROFILE_BUILDER,
    &CERTIFICATION_RECOMMENDER,
    &JOB_ROLE_SIMULATOR,
    &VOICE_COMMAND,
    &CAREER_MENTOR,
];
