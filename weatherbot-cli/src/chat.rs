//! Line-based chat front end: one message per stdin line, one task per message.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    task::{JoinError, JoinSet},
};
use tracing::{debug, warn};
use weatherbot_core::WeatherService;

pub const WELCOME: &str = "Hello, I'm a simple weather bot!\n\
    If you want to ask for a weather - just type /weather {name-of-city}\n\
    For example:\n/weather Minsk";

/// What an incoming chat line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Message<'a> {
    Help,
    Weather(&'a str),
    /// Free text without a command, answered like an inline query.
    Inline(&'a str),
    Unknown(&'a str),
    /// `/weather` without a location.
    Ignored,
}

pub fn route(line: &str) -> Message<'_> {
    let line = line.trim();

    if !line.starts_with('/') {
        return Message::Inline(line);
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    // "/weather@SomeBot" addresses a specific bot in group chats.
    let command = command.split('@').next().unwrap_or(command);

    match command {
        "/start" | "/help" => Message::Help,
        "/weather" => match rest.trim() {
            "" => Message::Ignored,
            location => Message::Weather(location),
        },
        other => Message::Unknown(other),
    }
}

pub async fn reply(service: &WeatherService, message: Message<'_>) -> Option<String> {
    match message {
        Message::Help => Some(WELCOME.to_string()),
        Message::Weather(location) => Some(service.get_weather(location).await),
        Message::Inline(text) => {
            let title = match text {
                "" => service.default_location().unwrap_or_default(),
                text => text,
            };
            let report = service.get_weather(text).await;
            if title.is_empty() {
                Some(report)
            } else {
                Some(format!("Weather in {title}\n{report}"))
            }
        }
        Message::Unknown(command) => Some(format!("Unknown command {command}, try /help")),
        Message::Ignored => None,
    }
}

/// Answer stdin lines until EOF, running requests concurrently.
pub async fn run(service: Arc<WeatherService>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("Failed to read from stdin")? {
        let service = Arc::clone(&service);
        tasks.spawn(async move {
            if let Some(text) = reply(&service, route(&line)).await {
                println!("{text}");
            }
        });

        while let Some(res) = tasks.try_join_next() {
            report_join(res);
        }
    }

    debug!("Input closed, waiting for {} pending replies", tasks.len());
    while let Some(res) = tasks.join_next().await {
        report_join(res);
    }

    Ok(())
}

fn report_join(res: Result<(), JoinError>) {
    if let Err(e) = res {
        warn!("Reply task failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherbot_core::Config;

    #[test]
    fn routes_commands() {
        assert_eq!(route("/start"), Message::Help);
        assert_eq!(route("/help"), Message::Help);
        assert_eq!(route("/weather Minsk"), Message::Weather("Minsk"));
        assert_eq!(route("  /weather   New York  "), Message::Weather("New York"));
        assert_eq!(route("/weather@WeatherBot Oslo"), Message::Weather("Oslo"));
        assert_eq!(route("/forecast Minsk"), Message::Unknown("/forecast"));
    }

    #[test]
    fn bare_weather_command_is_ignored() {
        assert_eq!(route("/weather"), Message::Ignored);
        assert_eq!(route("/weather   "), Message::Ignored);
    }

    #[test]
    fn plain_text_is_an_inline_query() {
        assert_eq!(route("Minsk"), Message::Inline("Minsk"));
        assert_eq!(route(""), Message::Inline(""));
    }

    #[tokio::test]
    async fn offline_replies() {
        let service = WeatherService::from_config(&Config::default()).unwrap();

        assert_eq!(reply(&service, Message::Help).await.as_deref(), Some(WELCOME));
        assert_eq!(reply(&service, Message::Ignored).await, None);
        assert_eq!(
            reply(&service, Message::Unknown("/forecast")).await.as_deref(),
            Some("Unknown command /forecast, try /help")
        );
    }

    #[tokio::test]
    async fn empty_inline_query_without_default_has_no_title() {
        let config = Config { default_location: String::new(), ..Config::default() };
        let service = WeatherService::from_config(&config).unwrap();

        assert_eq!(
            reply(&service, Message::Inline("")).await.as_deref(),
            Some("Invalid location, please try something else")
        );
    }
}
