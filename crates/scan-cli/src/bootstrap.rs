use std::path::{Path, PathBuf};

use anyhow::Context;
use scan_config::ScanConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and the layered config, rooted at `--config-dir` or the cwd.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ScanConfig> {
    let root = config_root(flags)?;
    load_dotenv(&root)?;

    let config = ScanConfig::load_from(&root)
        .with_context(|| format!("failed to load config under {}", root.display()))?;
    tracing::debug!(
        root = %root.display(),
        advisor = config.advisor.is_configured(),
        remote_catalog = config.catalog.is_remote(),
        "configuration loaded"
    );
    Ok(config)
}

fn config_root(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &flags.config_dir {
        // Accept either the project root or the `.symptoscan` directory itself.
        let is_project_dir = dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == scan_config::PROJECT_DIR);
        if is_project_dir {
            return Ok(dir.parent().map_or_else(|| dir.clone(), Path::to_path_buf));
        }
        return Ok(dir.clone());
    }
    std::env::current_dir().context("failed to determine current directory")
}

fn load_dotenv(root: &Path) -> anyhow::Result<()> {
    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
