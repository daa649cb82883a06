#![cfg(unix)]

use std::os::unix::net::UnixListener;
use std::path::Path;
use std::thread;

use tempfile::TempDir;
use tracing::Dispatch;

use kube_agent::agent::{Agent, KubeAgent, KubeAgentOption};
use kube_agent::config_path::{ConfigPathDecision, ConfigPathSelector};
use kube_agent::context::Context;
use kube_agent::factory::{
    AssemblyError, Catalog, CatalogRegistry, ComponentKind, ComponentRegistry, Signal,
    StaticFactory,
};

const RECEIVERS: [&str; 9] = [
    "docker_stats",
    "filelog",
    "fluentforward",
    "hostmetrics",
    "k8s_cluster",
    "k8s_events",
    "kubeletstats",
    "otlp",
    "prometheus",
];
const EXPORTERS: [&str; 3] = ["logging", "otlp", "otlphttp"];
const PROCESSORS: [&str; 7] = [
    "attributes",
    "batch",
    "filter",
    "k8sattributes",
    "memory_limiter",
    "resource",
    "resourcedetection",
];

#[test]
fn agent_with_live_docker_socket() {
    let dir = TempDir::new().unwrap();
    let socket = dir.path().join("test.sock");
    let _listener = UnixListener::bind(&socket).unwrap();

    let agent = KubeAgent::new([
        KubeAgentOption::ApiKey("k".to_string()),
        KubeAgentOption::Target("https://x".to_string()),
        KubeAgentOption::DockerEndpoint(format!("unix://{}", socket.display())),
    ]);
    assert!(agent.validate().is_ok());

    assert_eq!(Path::new("/app/otel-config.yaml"), agent.updated_yaml_path());

    let factories = agent.factories(&Context::new()).unwrap();
    assert_eq!(RECEIVERS.to_vec(), factories.names(ComponentKind::Receiver));
    assert_eq!(EXPORTERS.to_vec(), factories.names(ComponentKind::Exporter));
    assert_eq!(PROCESSORS.to_vec(), factories.names(ComponentKind::Processor));
    assert!(factories.names(ComponentKind::Extension).is_empty());
}

#[test]
fn agent_with_closed_docker_socket() {
    let dir = TempDir::new().unwrap();
    let socket = dir.path().join("test.sock");
    drop(UnixListener::bind(&socket).unwrap());

    let agent = KubeAgent::builder()
        .logger(Dispatch::none())
        .docker_endpoint(format!("unix://{}", socket.display()))
        .build();

    assert_eq!(
        ConfigPathDecision::WithoutDockerSupport,
        ConfigPathSelector::default().select(&agent)
    );
}

#[test]
fn selection_and_assembly_run_concurrently() {
    let dir = TempDir::new().unwrap();
    let socket = dir.path().join("docker.sock");
    let _listener = UnixListener::bind(&socket).unwrap();

    let agent = KubeAgent::builder()
        .logger(Dispatch::none())
        .docker_endpoint(format!("unix://{}", socket.display()))
        .build();
    let ctx = Context::new();

    let (path, factories) = thread::scope(|scope| {
        let path = scope.spawn(|| agent.updated_yaml_path());
        let factories = scope.spawn(|| agent.factories(&ctx));
        (path.join().unwrap(), factories.join().unwrap())
    });

    assert_eq!(Path::new("/app/otel-config.yaml"), path);
    assert_eq!(9, factories.unwrap().receivers.len());
}

#[test]
fn injected_duplicate_returns_no_catalog() {
    let catalog = Catalog::kube_agent().with_factory(
        ComponentKind::Receiver,
        std::sync::Arc::new(StaticFactory::receiver("prometheus", &[Signal::Metrics])),
    );

    let result = CatalogRegistry::new(catalog).assemble(&Context::new());
    match result {
        Err(AssemblyError::DuplicateComponent { kind, name }) => {
            assert_eq!(ComponentKind::Receiver, kind);
            assert_eq!("prometheus", name);
        }
        other => panic!("unexpected assembly result: {other:?}"),
    }
}

#[test]
fn shutdown_before_assembly() {
    let agent = KubeAgent::builder().logger(Dispatch::none()).build();
    let ctx = Context::new();
    ctx.cancel();

    assert!(matches!(
        agent.factories(&ctx),
        Err(AssemblyError::Cancelled)
    ));
}
