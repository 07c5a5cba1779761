// Grammar façade: LanguageTool-backed checking, penalty scoring and summaries.
// Handlers reach the engine only through the `GrammarEngine` held in state.

pub mod analyzer;
pub mod engine;
pub mod handlers;

#[cfg(test)]
pub mod mock;
