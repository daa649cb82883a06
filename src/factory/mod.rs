//! Collector component factories and their assembly into per-kind maps.
//!
//! The components themselves live in the collector runtime. This module only knows the
//! names they register under, their kind and the signals they handle.
pub mod catalog;
pub mod component_type;
pub mod error;
pub mod registry;

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use tracing::debug;

use crate::context::Context;

pub use self::catalog::{Catalog, StaticFactory};
pub use self::component_type::{ComponentType, ComponentTypeError};
pub use self::error::AssemblyError;
pub use self::registry::{CatalogRegistry, ComponentRegistry, Factories};

/// Uniquely keyed factories of a single kind.
pub type FactoryMap = BTreeMap<ComponentType, Arc<dyn Factory>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Extension,
    Receiver,
    Exporter,
    Processor,
}

impl ComponentKind {
    /// Order in which the kinds are handed to the assembly workers.
    pub const ASSEMBLY_ORDER: [ComponentKind; 4] = [
        ComponentKind::Extension,
        ComponentKind::Receiver,
        ComponentKind::Exporter,
        ComponentKind::Processor,
    ];
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ComponentKind::Extension => "extension",
            ComponentKind::Receiver => "receiver",
            ComponentKind::Exporter => "exporter",
            ComponentKind::Processor => "processor",
        };
        f.write_str(kind)
    }
}

/// Telemetry data types a pipeline component can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Traces,
    Metrics,
    Logs,
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let signal = match self {
            Signal::Traces => "traces",
            Signal::Metrics => "metrics",
            Signal::Logs => "logs",
        };
        f.write_str(signal)
    }
}

/// Constructor reference for a collector component.
///
/// A factory declares its own name and kind; the assembler keys the factory maps by that
/// name and rejects factories whose declaration is not valid for the list they were put in.
pub trait Factory: Debug + Send + Sync {
    fn component_type(&self) -> &str;

    fn kind(&self) -> ComponentKind;

    /// Signals the component can take part in. Extensions handle none.
    fn signals(&self) -> &[Signal];
}

/// Builds the map of a single kind, failing on the first invalid or repeated factory.
///
/// The context is checked before every registration so a cancelled assembly stops early.
pub fn make_factory_map(
    kind: ComponentKind,
    factories: &[Arc<dyn Factory>],
    ctx: &Context,
) -> Result<FactoryMap, AssemblyError> {
    let mut map = FactoryMap::new();
    for factory in factories {
        if ctx.is_cancelled() {
            return Err(AssemblyError::Cancelled);
        }

        let name = factory.component_type();
        let component_type =
            ComponentType::try_from(name).map_err(|source| AssemblyError::InvalidComponentType {
                kind,
                name: name.to_string(),
                source,
            })?;

        if factory.kind() != kind {
            return Err(AssemblyError::MisplacedComponent {
                kind,
                name: name.to_string(),
                declared: factory.kind(),
            });
        }

        if map.contains_key(&component_type) {
            return Err(AssemblyError::DuplicateComponent {
                kind,
                name: name.to_string(),
            });
        }
        map.insert(component_type, Arc::clone(factory));
    }

    debug!(%kind, count = map.len(), "factory map assembled");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn receivers(names: &[&'static str]) -> Vec<Arc<dyn Factory>> {
        names
            .iter()
            .map(|name| {
                Arc::new(StaticFactory::receiver(*name, &[Signal::Logs])) as Arc<dyn Factory>
            })
            .collect()
    }

    #[test]
    fn builds_map_keyed_by_declared_names() {
        let map = make_factory_map(
            ComponentKind::Receiver,
            &receivers(&["otlp", "filelog"]),
            &Context::new(),
        )
        .unwrap();

        let names: Vec<&str> = map.keys().map(ComponentType::as_str).collect();
        assert_eq!(vec!["filelog", "otlp"], names);
    }

    #[test]
    fn empty_list_builds_empty_map() {
        let map = make_factory_map(ComponentKind::Extension, &[], &Context::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn duplicated_name_fails() {
        let err = make_factory_map(
            ComponentKind::Receiver,
            &receivers(&["otlp", "filelog", "otlp"]),
            &Context::new(),
        )
        .unwrap_err();

        assert_eq!(
            AssemblyError::DuplicateComponent {
                kind: ComponentKind::Receiver,
                name: "otlp".to_string()
            },
            err
        );
        assert_eq!("duplicate receiver factory `otlp`", err.to_string());
    }

    #[test]
    fn invalid_name_fails_registration() {
        let factories: Vec<Arc<dyn Factory>> =
            vec![Arc::new(StaticFactory::processor("9batch", &[]))];

        let err =
            make_factory_map(ComponentKind::Processor, &factories, &Context::new()).unwrap_err();
        assert_matches!(
            err,
            AssemblyError::InvalidComponentType { kind: ComponentKind::Processor, name, .. } => {
                assert_eq!("9batch", name);
            }
        );
    }

    #[test]
    fn factory_of_another_kind_fails_registration() {
        let factories: Vec<Arc<dyn Factory>> =
            vec![Arc::new(StaticFactory::exporter("otlp", &[Signal::Traces]))];

        let err =
            make_factory_map(ComponentKind::Receiver, &factories, &Context::new()).unwrap_err();
        assert_eq!(
            AssemblyError::MisplacedComponent {
                kind: ComponentKind::Receiver,
                name: "otlp".to_string(),
                declared: ComponentKind::Exporter,
            },
            err
        );
    }

    #[test]
    fn cancelled_context_stops_the_assembly() {
        let ctx = Context::new();
        ctx.cancel();

        let err = make_factory_map(ComponentKind::Receiver, &receivers(&["otlp"]), &ctx)
            .unwrap_err();
        assert_eq!(AssemblyError::Cancelled, err);
    }
}
