//! Core library for `weatherbot`.
//!
//! This crate defines:
//! - Configuration handling
//! - Location resolution through a place-name search page
//! - Short-form weather retrieval and the mapping of upstream failures to replies
//!
//! It is used by `weatherbot-cli`, but can also be embedded in chat front ends.

pub mod config;
pub mod error;
pub mod http;
pub mod policy;
pub mod report;
pub mod resolver;
pub mod retriever;
pub mod service;

pub use config::{Config, Endpoints};
pub use http::{HttpClient, HttpSettings};
pub use policy::ResolutionPolicy;
pub use report::Outcome;
pub use resolver::{GeonamesResolver, LocationResolver, MatchExtractor, TableMatchExtractor};
pub use retriever::{FetchOutcome, WeatherRetriever, WttrRetriever};
pub use service::WeatherService;
