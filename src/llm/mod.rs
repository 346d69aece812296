mod client;

pub use client::{ModelClient, OpenAiClient};
