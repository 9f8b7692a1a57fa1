use camino::Utf8PathBuf;
use caterpillar_domain::UsageIndex;
use caterpillar_repo::UsageScanner;
use std::collections::BTreeSet;

/// Where usage comes from. The report is assembled the same way whether usage is
/// scanned from disk or supplied directly.
pub trait UsageSource: Sync {
    /// Usage of `apis`, skipping anything under `ignore_dirs`. Every requested API has
    /// an entry in the result.
    fn usage(&self, apis: &[String], ignore_dirs: &BTreeSet<Utf8PathBuf>)
    -> anyhow::Result<UsageIndex>;
}

impl UsageSource for UsageScanner {
    fn usage(
        &self,
        apis: &[String],
        ignore_dirs: &BTreeSet<Utf8PathBuf>,
    ) -> anyhow::Result<UsageIndex> {
        self.scan(apis, ignore_dirs)
    }
}
