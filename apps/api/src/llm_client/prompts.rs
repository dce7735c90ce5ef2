// Cross-cutting prompt fragments shared by every assistant task.
// Task-specific templates live in assistant/prompts.rs.

/// Appended to every task's system prompt: the validator accepts JSON only.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds the full system message for a task.
pub fn system_message(task_system: &str) -> String {
    format!("{task_system} {JSON_ONLY_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message_appends_json_only_rule() {
        let system = system_message("You are a mentor.");
        assert!(system.starts_with("You are a mentor. "));
        assert!(system.ends_with(JSON_ONLY_INSTRUCTION));
    }
}
