// Artist career analysis: prompt composition, the /analyze relay handler, and
// tolerant extraction of structure from the model's free-text reply.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod compose;
pub mod extractor;
pub mod handlers;
pub mod prompts;
