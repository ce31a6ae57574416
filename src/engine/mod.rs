pub mod engine;
pub mod protocol;
pub mod apply_event;
pub mod apply_narrative;

pub mod prompt_builder;
pub mod llm_client;
pub mod narrative_parser;
