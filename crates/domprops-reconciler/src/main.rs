//! dom-props - check HTML reference data against the live DOM

use anyhow::bail;
use domprops_dom::Document;
use domprops_reconciler::{Config, Reconciler, SnapshotMode, VERSION};
use domprops_refdata::{BundledReferenceData, Schema};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();

    let mut config = Config::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--update-snapshots" => config.snapshot_mode = SnapshotMode::Update,
            other => bail!("unknown argument {other:?} (usage: domprops [--update-snapshots])"),
        }
    }

    tracing::info!("dom-props {}", VERSION);

    let mut reconciler = Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), config);
    let report = reconciler.run()?;

    println!("{}", report.summary());
    for failure in report.failures() {
        println!("  FAIL {failure}");
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
