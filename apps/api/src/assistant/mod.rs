// Assistant endpoints: one pipeline task per route.
// All model calls go through pipeline::execute; handlers never call the client directly.

pub mod handlers;
pub mod prompts;
pub mod resume;
pub mod tasks;
