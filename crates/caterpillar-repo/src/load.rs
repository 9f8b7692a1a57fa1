use anyhow::Context;
use camino::Utf8Path;
use caterpillar_domain::ApiDescriptor;
use caterpillar_settings::{default_manifest, parse_polyfill_manifest};

/// Load `<dir>/<api>.manifest.json` for each name, in the order given.
///
/// An API without a manifest file gets the default descriptor (not polyfilled, no
/// warnings). A manifest that exists but does not parse is an error.
pub fn load_polyfill_manifests(
    dir: &Utf8Path,
    names: &[String],
) -> anyhow::Result<Vec<ApiDescriptor>> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(format!("{name}.manifest.json"));
        if !path.is_file() {
            tracing::warn!(
                api = %name,
                path = %path,
                "no polyfill manifest; treating as not polyfilled"
            );
            out.push(default_manifest(name));
            continue;
        }

        let text = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
        let mut api =
            parse_polyfill_manifest(&text).with_context(|| format!("parse {path}"))?;
        if api.name != *name {
            tracing::warn!(api = %name, declared = %api.name, "manifest declares a different name");
            api.name = name.clone();
        }
        tracing::debug!(
            api = %name,
            status = %api.status,
            warnings = api.warnings.len(),
            "loaded manifest"
        );
        out.push(api);
    }
    Ok(out)
}
