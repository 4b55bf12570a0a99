//! Best-version selection.
//!
//! eix lists versions in ascending order, so the newest in-scope version is
//! the last one to pass the scope filter. Each in-scope version replaces the
//! verdict of the previous one; out-of-scope versions leave it untouched.
use crate::model::{KeyFlags, Package, Version};
use crate::policy::in_scope;
use crate::targets::{classify_against, missing_tag, Baseline, Classification};

/// Finding for the representative version of a package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub version_id: String,
    pub tag: String,
    pub installed: bool,
}

pub fn select_and_classify(package: &Package) -> Option<Diagnostic> {
    select_with_baseline(package, Baseline::DEFAULT)
}

pub fn select_with_baseline(package: &Package, baseline: Baseline) -> Option<Diagnostic> {
    package
        .version
        .iter()
        .filter(|version| {
            let keep = in_scope(version);
            if !keep {
                tracing::debug!(
                    package = %package.name,
                    version = %version.id,
                    overlay = version.overlay().unwrap_or(""),
                    local_flags = %flag_summary(version.local_key_flags.as_ref()),
                    system_flags = %flag_summary(version.system_key_flags.as_ref()),
                    "version out of scope"
                );
            }
            keep
        })
        .fold(None, |_, version| evaluate(version, baseline))
}

/// Verdict for one in-scope version, ignoring whatever came before it.
pub fn evaluate(version: &Version, baseline: Baseline) -> Option<Diagnostic> {
    match classify_against(&version.required_use, baseline) {
        Classification::MissingBaseline(kind) => Some(Diagnostic {
            version_id: version.id.clone(),
            tag: missing_tag(kind, baseline),
            installed: version.is_installed(),
        }),
        Classification::SatisfiesBaseline | Classification::NoTargetDeclared => None,
    }
}

fn flag_summary(flags: Option<&KeyFlags>) -> String {
    match flags {
        Some(flags) => flags.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{KeyFlag, Repository};

    fn stable(id: &str, required_use: &str) -> Version {
        Version {
            id: id.to_string(),
            required_use: required_use.to_string(),
            system_key_flags: Some(KeyFlags {
                key_flag: vec![KeyFlag::ArchStable],
                ..KeyFlags::default()
            }),
            ..Version::default()
        }
    }

    fn unstable(id: &str, required_use: &str) -> Version {
        Version {
            system_key_flags: Some(KeyFlags {
                key_flag: vec![KeyFlag::ArchUnstable],
                ..KeyFlags::default()
            }),
            ..stable(id, required_use)
        }
    }

    fn overlay(id: &str, required_use: &str) -> Version {
        Version {
            repository: Some(Repository {
                repository: "guru".to_string(),
                ..Repository::default()
            }),
            ..stable(id, required_use)
        }
    }

    fn package(versions: Vec<Version>) -> Package {
        Package {
            name: "foo".to_string(),
            version: versions,
            ..Package::default()
        }
    }

    #[test]
    fn empty_package_has_no_verdict() {
        assert_eq!(select_and_classify(&package(Vec::new())), None);
    }

    #[test]
    fn all_out_of_scope_versions_produce_nothing() {
        let pkg = package(vec![
            unstable("1.0", "python_targets_python3_9"),
            overlay("2.0", "python_targets_python3_9"),
        ]);
        assert_eq!(select_and_classify(&pkg), None);
    }

    #[test]
    fn single_missing_version_is_reported() {
        let pkg = package(vec![stable("2.0", "python_targets_python3_9")]);
        assert_eq!(
            select_and_classify(&pkg),
            Some(Diagnostic {
                version_id: "2.0".to_string(),
                tag: " - TGT x3.8".to_string(),
                installed: false,
            })
        );
    }

    #[test]
    fn later_satisfying_version_clears_earlier_finding() {
        let pkg = package(vec![
            stable("1.0", "python_targets_python3_9"),
            stable("2.0", "python_targets_python3_8 python_targets_python3_9"),
        ]);
        assert_eq!(select_and_classify(&pkg), None);
    }

    #[test]
    fn later_version_without_targets_clears_earlier_finding() {
        let pkg = package(vec![
            stable("1.0", "python_single_target_python3_9"),
            stable("2.0", "gtk? ( X )"),
        ]);
        assert_eq!(select_and_classify(&pkg), None);
    }

    #[test]
    fn later_out_of_scope_version_does_not_disturb_clearing() {
        let pkg = package(vec![
            stable("1.0", "python_targets_python3_8"),
            unstable("2.0", "python_targets_python3_9"),
        ]);
        assert_eq!(select_and_classify(&pkg), None);
    }

    #[test]
    fn later_out_of_scope_version_does_not_erase_finding() {
        let pkg = package(vec![
            stable("1.0", "python_single_target_python3_9"),
            overlay("9999", "python_single_target_python3_8"),
        ]);
        let diagnostic = select_and_classify(&pkg).expect("finding kept");
        assert_eq!(diagnostic.version_id, "1.0");
        assert_eq!(diagnostic.tag, " - SGL x3.8");
    }

    #[test]
    fn last_in_scope_version_is_the_one_reported() {
        let pkg = package(vec![
            stable("1.0", "python_targets_python3_7"),
            stable("1.1", "python_targets_python3_9"),
            unstable("1.2", "python_targets_python3_8"),
        ]);
        let diagnostic = select_and_classify(&pkg).expect("finding");
        assert_eq!(diagnostic.version_id, "1.1");
    }

    #[test]
    fn installed_marker_follows_representative_version() {
        let mut installed = stable("2.0", "python_targets_python3_9");
        installed.installed = Some(serde_json::json!({}));
        let pkg = package(vec![stable("1.0", "python_targets_python3_9"), installed]);
        let diagnostic = select_and_classify(&pkg).expect("finding");
        assert!(diagnostic.installed);
    }

    #[test]
    fn baseline_override_is_applied() {
        let pkg = package(vec![stable("2.0", "python_targets_python3_8")]);
        let baseline = Baseline { major: 3, minor: 9 };
        let diagnostic = select_with_baseline(&pkg, baseline).expect("finding");
        assert_eq!(diagnostic.tag, " - TGT x3.9");
    }
}
