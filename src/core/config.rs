use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub azure_api_endpoint: String,
    pub azure_api_key: String,
    pub azure_deployment: String,
    pub system_message: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let azure_api_endpoint =
            env::var("AZURE_OPENAI_ENDPOINT").expect("Missing env var AZURE_OPENAI_ENDPOINT");
        let azure_api_key =
            env::var("AZURE_OPENAI_KEY").expect("Missing env var AZURE_OPENAI_KEY");
        let azure_deployment =
            env::var("AZURE_OPENAI_DEPLOYMENT").expect("Missing env var AZURE_OPENAI_DEPLOYMENT");
        let system_message = env::var("STUDY_BUDDY_SYSTEM_MESSAGE").unwrap_or_else(|_| {
            "You are a helpful study assistant for exam preparation.".to_string()
        });
        let temperature = env::var("STUDY_BUDDY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);
        let max_tokens = env::var("STUDY_BUDDY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(800);

        Self {
            azure_api_endpoint,
            azure_api_key,
            azure_deployment,
            system_message,
            temperature,
            max_tokens,
        }
    }
}
