// relay settings - flags with env fallbacks, shared by every subcommand

use crate::{Alert, Error, Gemini, GenerationOptions, Persona, Relay};
use std::path::PathBuf;

#[derive(clap::Args, Debug, Clone)]
pub struct RelayConfig {
    /// gemini api key
    #[arg(long, short = 'k', env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = crate::DEFAULT_MODEL, global = true)]
    pub model: String,

    /// generative language api base url
    #[arg(long, env = "GEMINI_BASE_URL", default_value = crate::DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// file holding a replacement persona template
    #[arg(long, env = "SALAMA_PERSONA_FILE", global = true)]
    pub persona_file: Option<PathBuf>,

    /// words in the user's message that raise a caregiver alert
    #[arg(
        long,
        env = "SALAMA_ALERT_KEYWORDS",
        value_delimiter = ',',
        default_values_t = crate::DEFAULT_KEYWORDS.map(String::from),
        global = true
    )]
    pub alert_keywords: Vec<String>,

    /// sampling temperature
    #[arg(long, default_value_t = 0.7, global = true)]
    pub temperature: f32,

    /// reply length cap
    #[arg(long, default_value_t = 500, global = true)]
    pub max_output_tokens: u32,
}

impl RelayConfig {
    pub fn relay(&self) -> Result<Relay, Error> {
        let persona = match &self.persona_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading persona template");
                Persona::from_template_file(path)?
            }
            None => Persona::default(),
        };

        if self.api_key.is_none() {
            tracing::warn!("no GEMINI_API_KEY set, every chat request will fail");
        }

        let gemini = Gemini::new(self.api_key.clone())
            .with_base_url(&self.base_url)
            .with_model(&self.model);

        Ok(Relay::new(gemini)
            .with_persona(persona)
            .with_alert(Alert::new(&self.alert_keywords))
            .with_options(GenerationOptions {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            }))
    }
}
