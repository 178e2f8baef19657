// Social content generation: prompt templates, completion calls, and the
// line-based normalizer that turns replies into captions, titles and lists.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
