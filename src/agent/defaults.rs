// Paths

/// Collector configuration including the docker receivers.
pub const OTEL_CONFIG_PATH: &str = "/app/otel-config.yaml";
/// Collector configuration used when no docker socket is reachable.
pub const OTEL_CONFIG_NO_DOCKER_PATH: &str = "/app/otel-config-nodocker.yaml";

/// Separator between the scheme and the socket path of the docker endpoint.
pub const DOCKER_ENDPOINT_SEPARATOR: &str = "//";
