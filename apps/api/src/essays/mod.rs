// Cultural-essay façade: prompt assembly with school reference data, one
// completion call per request, strict parsing of the model's JSON reply.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schools;
