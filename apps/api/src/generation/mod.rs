// Generation Gateway
// Builds section prompts from form facts and calls the text generator.
// All calls go through llm_client. No direct HTTP here.

pub mod gateway;
pub mod prompts;
