use std::sync::mpsc;
use std::thread;

use tracing::{debug, dispatcher, warn};

use super::{make_factory_map, AssemblyError, Catalog, ComponentKind, FactoryMap, Signal};
use crate::context::Context;

/// Factory maps handed to the collector runtime. Each kind is its own namespace.
#[derive(Debug, Clone, Default)]
pub struct Factories {
    pub extensions: FactoryMap,
    pub receivers: FactoryMap,
    pub exporters: FactoryMap,
    pub processors: FactoryMap,
}

impl Factories {
    pub fn get(&self, kind: ComponentKind) -> &FactoryMap {
        match kind {
            ComponentKind::Extension => &self.extensions,
            ComponentKind::Receiver => &self.receivers,
            ComponentKind::Exporter => &self.exporters,
            ComponentKind::Processor => &self.processors,
        }
    }

    /// Registered names of `kind` in lexicographic order.
    pub fn names(&self, kind: ComponentKind) -> Vec<&str> {
        self.get(kind).keys().map(|t| t.as_str()).collect()
    }

    /// Whether the component `name` of `kind` exists and can be placed in a `signal` pipeline.
    pub fn supports(&self, kind: ComponentKind, name: &str, signal: Signal) -> bool {
        self.get(kind)
            .get(name)
            .is_some_and(|factory| factory.signals().contains(&signal))
    }

    fn set(&mut self, kind: ComponentKind, map: FactoryMap) {
        match kind {
            ComponentKind::Extension => self.extensions = map,
            ComponentKind::Receiver => self.receivers = map,
            ComponentKind::Exporter => self.exporters = map,
            ComponentKind::Processor => self.processors = map,
        }
    }
}

pub trait ComponentRegistry {
    fn assemble(&self, ctx: &Context) -> Result<Factories, AssemblyError>;
}

/// Assembles the factory maps of a [`Catalog`], one worker thread per component kind.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    catalog: Catalog,
}

impl CatalogRegistry {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new(Catalog::kube_agent())
    }
}

impl ComponentRegistry for CatalogRegistry {
    fn assemble(&self, ctx: &Context) -> Result<Factories, AssemblyError> {
        if ctx.is_cancelled() {
            return Err(AssemblyError::Cancelled);
        }

        // cancelled by the first failing worker so the rest stop early
        let workers_ctx = ctx.child();
        let logger = dispatcher::get_default(|current| current.clone());
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for kind in ComponentKind::ASSEMBLY_ORDER {
                let tx = tx.clone();
                let worker_ctx = workers_ctx.clone();
                let logger = &logger;
                let factories = self.catalog.factories(kind);
                scope.spawn(move || {
                    let result = dispatcher::with_default(logger, || {
                        make_factory_map(kind, factories, &worker_ctx)
                    });
                    // the receiver outlives every worker
                    let _ = tx.send((kind, result));
                });
            }
            drop(tx);

            let mut assembled = Factories::default();
            let mut first_error = None;
            for (kind, result) in rx {
                match result {
                    Ok(map) => assembled.set(kind, map),
                    Err(err) if first_error.is_none() => {
                        warn!(%kind, %err, "factory assembly failed");
                        workers_ctx.cancel();
                        first_error = Some(err);
                    }
                    Err(err) => debug!(%kind, %err, "ignoring error after assembly failure"),
                }
            }

            match first_error {
                Some(err) => Err(err),
                // cancelled after the last worker checked the context
                None if ctx.is_cancelled() => Err(AssemblyError::Cancelled),
                None => Ok(assembled),
            }
        })
    }
}
