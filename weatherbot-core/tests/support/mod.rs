//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    subscriber::DefaultGuard,
};
use tracing_subscriber::{Layer, Registry, layer::Context, layer::SubscriberExt};
use weatherbot_core::{Config, Endpoints, ResolutionPolicy, WeatherService};
use wiremock::MockServer;

pub const TEST_USER_AGENT: &str = "weatherbot-test/1.0";

/// geonames.org style results page whose first match is `name`.
pub fn results_page(name: &str) -> String {
    format!(
        r#"<html><body><table class="restable">
        <tr><td colspan="6">1 records found</td></tr>
        <tr><th></th><th>Name</th><th>Country</th><th>Feature class</th></tr>
        <tr><td>1</td><td><a href="/1/place.html">{name}</a></td><td>Somewhere</td><td>city</td></tr>
        </table></body></html>"#
    )
}

pub fn service(search: &MockServer, weather: &MockServer, policy: ResolutionPolicy) -> WeatherService {
    service_for(&format!("{}/search.html", search.uri()), &weather.uri(), policy)
}

pub fn service_for(search_url: &str, weather_url: &str, policy: ResolutionPolicy) -> WeatherService {
    let config = Config {
        user_agent: TEST_USER_AGENT.to_string(),
        timeout_secs: 1,
        resolution: policy,
        default_location: String::new(),
        endpoints: Endpoints {
            location_search: search_url.to_string(),
            weather: weather_url.to_string(),
            ..Endpoints::default()
        },
    };

    WeatherService::from_config(&config).expect("service should build")
}

/// Base URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Log events recorded from `weatherbot_core`.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

impl CapturedLogs {
    pub fn warnings(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("weatherbot_core") {
            return;
        }

        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);

        self.0.0.lock().unwrap().push((*event.metadata().level(), visitor.0));
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

/// Record log events on the current thread until the guard is dropped.
///
/// Only reliable with the default current-thread test runtime.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = Registry::default().with(CaptureLayer(logs.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
