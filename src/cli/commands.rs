//! Implementação dos comandos CLI do TopHit.

use std::path::PathBuf;
use std::sync::Arc;

use crate::activity::ActivityLog;
use crate::cache::{registry, TopHitCache};
use crate::providers::{ConfiguredOptionsProvider, ProjectFilesProvider, TopHitProvider};
use crate::types::config::Config;
use crate::types::options::{OptionDescription, OptionSet, PluginDescriptor, Project};
use crate::TopHitResult;

const BUILTIN_PLUGIN: &str = "tophit.builtin";

/// Inicializa a configuração no diretório informado.
pub fn init(path: Option<PathBuf>) -> TopHitResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("tophit.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("TopHit initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Add options under [[options]] in tophit.toml");
    println!("  2. Search: tophit search <query> --project .");

    Ok(())
}

/// Busca opções nos providers padrão usando o cache global.
pub fn search(
    query: &str,
    project_dir: Option<PathBuf>,
    json: bool,
    config: &Config,
) -> TopHitResult<()> {
    let activities = Arc::new(ActivityLog::new());
    let cache = registry::install_global(TopHitCache::with_config(
        config.cache.clone(),
        activities.clone(),
    ))?;

    let project = match project_dir {
        Some(dir) => Some(Project::from_dir(std::fs::canonicalize(dir)?)),
        None => None,
    };
    let plugin = PluginDescriptor::new(BUILTIN_PLUGIN);

    let settings = ConfiguredOptionsProvider::new(config.options.clone());
    let mut sets: Vec<OptionSet> =
        vec![cache.get_cached_options(&settings, project.as_ref(), Some(&plugin))?];
    if let Some(project) = &project {
        sets.push(cache.get_cached_options(&ProjectFilesProvider, Some(project), Some(&plugin))?);
    }

    let hits: Vec<OptionDescription> = sets
        .iter()
        .flat_map(|set| set.iter())
        .map(|option| option.description())
        .filter(|description| description.matches(query))
        .cloned()
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("No options match '{}'", query);
    } else {
        for hit in &hits {
            match &hit.group {
                Some(group) => println!("  {} [{}]", hit, group),
                None => println!("  {}", hit),
            }
        }
    }

    let stats = cache.stats();
    tracing::debug!(
        providers = stats.size,
        hits = stats.hits,
        misses = stats.misses,
        computations = stats.computations,
        activities = activities.len(),
        total_ms = activities.total_duration().as_millis() as u64,
        "Search finished"
    );

    Ok(())
}

/// Lista os providers padrão e suas chaves.
pub fn providers(config: &Config) {
    let settings = ConfiguredOptionsProvider::new(config.options.clone());
    let entries = [
        (
            settings.id().to_string(),
            settings.source().kind(),
            settings.key(),
        ),
        (
            ProjectFilesProvider.id().to_string(),
            ProjectFilesProvider.source().kind(),
            ProjectFilesProvider.key(),
        ),
    ];

    println!("Providers:\n");
    for (id, kind, key) in entries {
        println!("  {:<10} {:<12} {}", id, kind, key.type_name());
    }
}

/// Mostra a versão.
pub fn version() {
    println!("tophit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Cache de opções top-hit para busca interativa");
}
