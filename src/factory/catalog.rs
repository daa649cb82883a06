//! The compile-time list of components the agent ships with.
use std::sync::Arc;

use super::{ComponentKind, Factory, Signal};

const ALL_SIGNALS: &[Signal] = &[Signal::Traces, Signal::Metrics, Signal::Logs];
const METRICS: &[Signal] = &[Signal::Metrics];
const LOGS: &[Signal] = &[Signal::Logs];
const METRICS_AND_LOGS: &[Signal] = &[Signal::Metrics, Signal::Logs];

/// Factory described only by its registration data; the component behind it is built by
/// the collector runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFactory {
    kind: ComponentKind,
    name: &'static str,
    signals: &'static [Signal],
}

impl StaticFactory {
    pub const fn new(kind: ComponentKind, name: &'static str, signals: &'static [Signal]) -> Self {
        Self {
            kind,
            name,
            signals,
        }
    }

    pub const fn extension(name: &'static str) -> Self {
        Self::new(ComponentKind::Extension, name, &[])
    }

    pub const fn receiver(name: &'static str, signals: &'static [Signal]) -> Self {
        Self::new(ComponentKind::Receiver, name, signals)
    }

    pub const fn exporter(name: &'static str, signals: &'static [Signal]) -> Self {
        Self::new(ComponentKind::Exporter, name, signals)
    }

    pub const fn processor(name: &'static str, signals: &'static [Signal]) -> Self {
        Self::new(ComponentKind::Processor, name, signals)
    }
}

impl Factory for StaticFactory {
    fn component_type(&self) -> &str {
        self.name
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn signals(&self) -> &[Signal] {
        self.signals
    }
}

// Health-check and auth extensions are intentionally left out.
const KUBE_AGENT_EXTENSIONS: &[StaticFactory] = &[];

const KUBE_AGENT_RECEIVERS: &[StaticFactory] = &[
    StaticFactory::receiver("otlp", ALL_SIGNALS),
    StaticFactory::receiver("fluentforward", LOGS),
    StaticFactory::receiver("filelog", LOGS),
    StaticFactory::receiver("docker_stats", METRICS),
    StaticFactory::receiver("hostmetrics", METRICS),
    StaticFactory::receiver("k8s_cluster", METRICS_AND_LOGS),
    StaticFactory::receiver("k8s_events", LOGS),
    StaticFactory::receiver("kubeletstats", METRICS),
    StaticFactory::receiver("prometheus", METRICS),
];

const KUBE_AGENT_EXPORTERS: &[StaticFactory] = &[
    StaticFactory::exporter("logging", ALL_SIGNALS),
    StaticFactory::exporter("otlp", ALL_SIGNALS),
    StaticFactory::exporter("otlphttp", ALL_SIGNALS),
];

const KUBE_AGENT_PROCESSORS: &[StaticFactory] = &[
    StaticFactory::processor("batch", ALL_SIGNALS),
    StaticFactory::processor("memory_limiter", ALL_SIGNALS),
    StaticFactory::processor("filter", ALL_SIGNALS),
    StaticFactory::processor("attributes", ALL_SIGNALS),
    StaticFactory::processor("resource", ALL_SIGNALS),
    StaticFactory::processor("resourcedetection", ALL_SIGNALS),
    StaticFactory::processor("k8sattributes", ALL_SIGNALS),
];

/// Ordered factory lists, one per component kind, handed to the assembler as they are.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    extensions: Vec<Arc<dyn Factory>>,
    receivers: Vec<Arc<dyn Factory>>,
    exporters: Vec<Arc<dyn Factory>>,
    processors: Vec<Arc<dyn Factory>>,
}

impl Catalog {
    /// Components supported by the Kubernetes agent.
    pub fn kube_agent() -> Self {
        let to_factories = |list: &[StaticFactory]| -> Vec<Arc<dyn Factory>> {
            list.iter()
                .cloned()
                .map(|f| Arc::new(f) as Arc<dyn Factory>)
                .collect()
        };
        Self {
            extensions: to_factories(KUBE_AGENT_EXTENSIONS),
            receivers: to_factories(KUBE_AGENT_RECEIVERS),
            exporters: to_factories(KUBE_AGENT_EXPORTERS),
            processors: to_factories(KUBE_AGENT_PROCESSORS),
        }
    }

    /// Appends a factory to the list of `kind`. The factory's own declared kind is not
    /// looked at here; mismatches are reported by the assembly.
    pub fn with_factory(mut self, kind: ComponentKind, factory: Arc<dyn Factory>) -> Self {
        self.list_mut(kind).push(factory);
        self
    }

    pub fn factories(&self, kind: ComponentKind) -> &[Arc<dyn Factory>] {
        match kind {
            ComponentKind::Extension => &self.extensions,
            ComponentKind::Receiver => &self.receivers,
            ComponentKind::Exporter => &self.exporters,
            ComponentKind::Processor => &self.processors,
        }
    }

    fn list_mut(&mut self, kind: ComponentKind) -> &mut Vec<Arc<dyn Factory>> {
        match kind {
            ComponentKind::Extension => &mut self.extensions,
            ComponentKind::Receiver => &mut self.receivers,
            ComponentKind::Exporter => &mut self.exporters,
            ComponentKind::Processor => &mut self.processors,
        }
    }
}
