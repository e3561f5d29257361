pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod scorer;
pub mod tokenizer;
// cmd and reports are binary modules (in main.rs or distinct files);
// they render the structured output and never feed back into it.
