//! Bootstrap of the Kubernetes telemetry agent.
//!
//! Decides which collector configuration document the agent runs with and which collector
//! components it can wire that document with. Running the collector itself is left to the
//! collector runtime.
pub mod agent;
pub mod cli;
pub mod config;
pub mod config_path;
pub mod context;
pub mod factory;
pub mod file_reader;
pub mod logging;
