//! Report lines for packages whose best stable version misses the baseline.
use crate::model::Collection;
use crate::search::SearchFilter;
use crate::select::select_with_baseline;
use crate::targets::Baseline;

/// Suffix appended to lines whose reported version is installed.
pub const INSTALLED_MARKER: &str = "  <<<<<<<<<<<";

#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    pub baseline: Baseline,
    pub search: Option<SearchFilter>,
}

/// `<category>/<package>-<version> <tag>[installed marker]`.
pub fn format_line(
    category: &str,
    package: &str,
    version_id: &str,
    tag: &str,
    installed: bool,
) -> String {
    let marker = if installed { INSTALLED_MARKER } else { "" };
    format!("{category}/{package}-{version_id} {tag}{marker}")
}

/// Walk every category and package in collection order and collect one line
/// per flagged package.
pub fn report(collection: &Collection, options: &ReportOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let mut scanned = 0usize;
    for category in &collection.category {
        for package in &category.package {
            if let Some(search) = &options.search {
                if !search.matches(&category.category, &package.name) {
                    continue;
                }
            }
            scanned += 1;
            let Some(diagnostic) = select_with_baseline(package, options.baseline) else {
                continue;
            };
            tracing::debug!(
                category = %category.category,
                package = %package.name,
                version = %diagnostic.version_id,
                "baseline missing"
            );
            lines.push(format_line(
                &category.category,
                &package.name,
                &diagnostic.version_id,
                &diagnostic.tag,
                diagnostic.installed,
            ));
        }
    }
    tracing::info!(
        baseline = %options.baseline,
        packages = scanned,
        flagged = lines.len(),
        "report complete"
    );
    lines
}
