use std::io;

use anyhow::Context;

use prodcat_browser::{BrowserConfig, Session, data};
use prodcat_catalog::{Catalog, ProductBrowser};

fn main() -> anyhow::Result<()> {
    let config = BrowserConfig::from_env();
    prodcat_observability::init_with(config.log_format);
    config.log_fallbacks();

    let dataset = data::load_configured(config.data_path.as_deref())
        .context("failed to load catalog dataset")?;
    let catalog = Catalog::from_dataset(dataset);

    let mut browser = ProductBrowser::new(catalog);
    config.apply_initial_filters(&mut browser);

    tracing::info!(
        owner = browser.selected_owner(),
        query = browser.search_query(),
        "starting browser session"
    );

    Session::new(browser)
        .run(io::stdin().lock(), io::stdout().lock())
        .context("terminal session failed")?;

    Ok(())
}
