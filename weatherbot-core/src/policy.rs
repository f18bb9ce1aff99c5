use serde::{Deserialize, Serialize};

/// What the pipeline does when the location search yields no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Reply with the invalid-location message without asking for weather.
    #[default]
    Required,
    /// Fall back to the raw request text.
    BestEffort,
    /// Never query the location search; send the raw text as is.
    Skip,
}

impl ResolutionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPolicy::Required => "required",
            ResolutionPolicy::BestEffort => "best_effort",
            ResolutionPolicy::Skip => "skip",
        }
    }

    pub const fn all() -> &'static [ResolutionPolicy] {
        &[ResolutionPolicy::Required, ResolutionPolicy::BestEffort, ResolutionPolicy::Skip]
    }
}

impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResolutionPolicy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase().replace('-', "_");

        match lower.as_str() {
            "required" => Ok(ResolutionPolicy::Required),
            "best_effort" => Ok(ResolutionPolicy::BestEffort),
            "skip" => Ok(ResolutionPolicy::Skip),
            _ => Err(anyhow::anyhow!(
                "Unknown resolution policy '{value}'. Supported policies: required, best_effort, skip."
            )),
        }
    }
}
