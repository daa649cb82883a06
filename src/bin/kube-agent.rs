use std::error::Error;
use std::path::Path;
use std::process;

use tracing::{dispatcher, error, info};

use kube_agent::{
    agent::{Agent, KubeAgent, KubeAgentOption},
    cli::Cli,
    config::SettingsLoader,
    context::Context,
    factory::{ComponentKind, Factories},
    logging::Logging,
};

fn main() -> Result<(), Box<dyn Error>> {
    // init logging singleton
    Logging::try_init()?;

    let cli = Cli::init_kube_agent_cli();

    info!("Creating the global context");
    let ctx = Context::new();

    info!("Creating the signal handler");
    ctrlc::set_handler({
        let ctx = ctx.clone();
        move || ctx.cancel()
    })
    .map_err(|e| {
        error!("Could not set signal handler: {}", e);
        e
    })?;

    // settings file first so that flags override it
    let mut options = Vec::new();
    if let Some(path) = cli.get_config() {
        options.extend(SettingsLoader::default().load(&path)?.into_options());
    }
    options.extend(cli.options());
    options.push(KubeAgentOption::Logger(dispatcher::get_default(
        |current| current.clone(),
    )));

    let agent = KubeAgent::new(options);
    if let Err(err) = agent.validate() {
        error!("invalid agent configuration: {}", err);
        process::exit(1);
    }
    info!("Starting the kube agent: {:?}", agent);

    let config_path = agent.updated_yaml_path();
    let factories = match agent.factories(&ctx) {
        Ok(factories) => factories,
        Err(err) => {
            error!("could not assemble collector factories: {}", err);
            process::exit(1);
        }
    };

    println!("{}", startup_report(config_path, &factories));
    Ok(())
}

fn startup_report(config_path: &Path, factories: &Factories) -> String {
    let mut report = format!("config: {}", config_path.display());
    for kind in ComponentKind::ASSEMBLY_ORDER {
        report.push_str(&format!("\n{}s: {}", kind, factories.names(kind).join(", ")));
    }
    report
}
