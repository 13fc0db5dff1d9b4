// Couple-dispute judgment: prompt assembly, the single LLM judgment call,
// and fallback verdicts. All LLM calls go through llm_client — no direct
// endpoint calls here.

pub mod handlers;
pub mod prompts;
pub mod verdict;
