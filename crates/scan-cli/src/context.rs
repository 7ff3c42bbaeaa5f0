use std::sync::Arc;

use anyhow::Context;
use scan_advisor::ConfiguredAdvisor;
use scan_catalog::Catalog;
use scan_config::ScanConfig;
use scan_dialogue::Dialogue;

use crate::progress::Progress;

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: ScanConfig,
    pub catalog: Arc<Catalog>,
    pub dialogue: Dialogue,
}

impl AppContext {
    pub async fn init(config: ScanConfig) -> anyhow::Result<Self> {
        let spinner = Progress::spinner("Loading disease catalog...");
        let catalog = match Catalog::load(&config.catalog).await {
            Ok(catalog) => {
                spinner.finish_clear();
                Arc::new(catalog)
            }
            Err(error) => {
                spinner.finish_err("catalog load failed");
                return Err(error).with_context(|| {
                    format!(
                        "failed to load catalog (diseases: {}, symptoms: {})",
                        config.catalog.diseases, config.catalog.symptoms
                    )
                });
            }
        };

        let advisor = ConfiguredAdvisor::from_config(&config.advisor)
            .context("failed to build advisor client")?;
        if !config.advisor.is_configured() {
            tracing::info!("no advisor configured; ranking uses local similarity only");
        }

        let dialogue = Dialogue::new(
            Arc::clone(&catalog),
            config.matching.clone(),
            config.dialogue.clone(),
            advisor,
        );

        Ok(Self {
            config,
            catalog,
            dialogue,
        })
    }
}
