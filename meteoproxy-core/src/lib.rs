//! Core library for the `meteoproxy` weather proxy.
//!
//! This crate defines:
//! - Configuration handling
//! - Coordinate validation for incoming requests
//! - The Open-Meteo upstream client
//! - The request handler tying them together
//!
//! It is used by `meteoproxy-cli`, but can also be embedded in a serverless
//! entry point or another binary.

pub mod config;
pub mod coords;
pub mod handler;
pub mod model;
pub mod upstream;

pub use config::Config;
pub use coords::{CoordinateError, Coordinates};
pub use handler::WeatherProxyHandler;
pub use model::{CurrentConditions, ProxyRequest, ProxyResponse};
pub use upstream::{OpenMeteoClient, UpstreamError};
