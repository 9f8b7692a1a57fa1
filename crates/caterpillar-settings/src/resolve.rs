use crate::model::CaterpillarConfigV1;
use anyhow::Context;
use caterpillar_types::ids;
use globset::Glob;

const DEFAULT_BOILERPLATE_DIR: &str = "caterpillar";
const DEFAULT_CONTEXT_SIZE: u32 = 2;
const DEFAULT_EXTENSIONS: &[&str] = &["js"];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub boilerplate_dir: Option<String>,
    pub context_size: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub boilerplate_dir: String,
    pub context_size: u32,
    /// Lowercase, without the leading dot.
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub flat_namespaces: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            boilerplate_dir: DEFAULT_BOILERPLATE_DIR.to_string(),
            context_size: DEFAULT_CONTEXT_SIZE,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            flat_namespaces: ids::DEFAULT_FLAT_NAMESPACES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

pub fn resolve_config(
    cfg: CaterpillarConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(dir) = overrides.boilerplate_dir.or(cfg.boilerplate_dir) {
        if dir.trim().is_empty() {
            anyhow::bail!("boilerplate_dir must not be empty");
        }
        resolved.boilerplate_dir = dir;
    }

    if let Some(size) = overrides.context_size.or(cfg.context_size) {
        resolved.context_size = size;
    }

    if let Some(extensions) = cfg.extensions {
        if extensions.is_empty() {
            anyhow::bail!("extensions must list at least one file extension");
        }
        resolved.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
    }

    validate_globs(&cfg.exclude)?;
    resolved.exclude = cfg.exclude;

    if let Some(namespaces) = cfg.flat_namespaces {
        for ns in &namespaces {
            if ns.is_empty() || ns.contains('.') {
                anyhow::bail!("invalid flat namespace: {ns:?} (expected a single identifier)");
            }
        }
        resolved.flat_namespaces = namespaces;
    }

    Ok(resolved)
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
    }
    Ok(())
}
