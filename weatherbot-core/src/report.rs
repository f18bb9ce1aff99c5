use crate::retriever::FetchOutcome;

pub const INVALID_LOCATION: &str = "Invalid location, please try something else";
pub const UNKNOWN_LOCATION: &str = "Unknown location, please try again";
pub const FETCH_FAILED: &str = "An error occured, please try different search";

/// Final result of a weather request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Weather(String),
    /// Location search found nothing and resolution was mandatory.
    InvalidLocation,
    /// The weather service does not know the location.
    UnknownLocation,
    Failed,
}

impl Outcome {
    /// User-facing text for this outcome.
    pub fn into_message(self) -> String {
        match self {
            Outcome::Weather(text) => text,
            Outcome::InvalidLocation => INVALID_LOCATION.to_string(),
            Outcome::UnknownLocation => UNKNOWN_LOCATION.to_string(),
            Outcome::Failed => FETCH_FAILED.to_string(),
        }
    }
}

impl From<FetchOutcome> for Outcome {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Success(text) => Outcome::Weather(text),
            FetchOutcome::NotFound => Outcome::UnknownLocation,
            FetchOutcome::TransportError(_) => Outcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn fetch_outcomes_map_to_messages() {
        let cases = [
            (FetchOutcome::Success("Minsk: 🌦 +18°C".into()), "Minsk: 🌦 +18°C"),
            (FetchOutcome::NotFound, UNKNOWN_LOCATION),
            (FetchOutcome::TransportError(Some(StatusCode::BAD_GATEWAY)), FETCH_FAILED),
            (FetchOutcome::TransportError(None), FETCH_FAILED),
        ];

        for (fetched, expected) in cases {
            assert_eq!(Outcome::from(fetched).into_message(), expected);
        }
    }

    #[test]
    fn invalid_location_message() {
        assert_eq!(Outcome::InvalidLocation.into_message(), "Invalid location, please try something else");
    }
}
