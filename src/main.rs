use idp_stores::{
    ConfigurationStoreConfigBuilder, DesignTimeFactory, OperationalStoreConfigBuilder, Settings,
    StoreContext,
};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Settings::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    // Passed through to the factories, which ignore them.
    let args: Vec<String> = std::env::args().skip(1).collect();

    let contexts: [StoreContext; 2] = [
        create(&ConfigurationStoreConfigBuilder::from_settings(&cfg), &args),
        create(&OperationalStoreConfigBuilder::from_settings(&cfg), &args),
    ];

    let reports: Vec<_> = contexts.iter().map(StoreContext::report).collect();
    for report in &reports {
        info!(
            store = %report.store,
            provider = %report.provider,
            database = %report.database.as_deref().unwrap_or("<unknown>"),
            connection = %report.connection,
            migrations_source = %report.migrations_source,
            "store context ready"
        );
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn create<F>(factory: &F, args: &[String]) -> StoreContext
where
    F: DesignTimeFactory,
    F::Context: Into<StoreContext>,
{
    factory.create_context(args).into()
}
