// caregiver alert check
// plain substring match on the user's message, so "helper" still trips "help"

pub const DEFAULT_KEYWORDS: [&str; 8] = [
    "pain",
    "hurt",
    "scam",
    "suspicious",
    "help",
    "emergency",
    "fell",
    "sick",
];

#[derive(Debug, Clone)]
pub struct Alert {
    keywords: Vec<String>,
}

impl Default for Alert {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl Alert {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword found in `question`, if any.
    pub fn matched(&self, question: &str) -> Option<&str> {
        let question = question.to_lowercase();

        self.keywords
            .iter()
            .find(|k| question.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn should_alert(&self, question: &str) -> bool {
        self.matched(question).is_some()
    }
}
