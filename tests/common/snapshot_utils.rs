//! Utilities for snapshot testing with insta

use insta::{assert_snapshot, Settings};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_snapshot_path("../snapshots");
    settings.set_prepend_module_to_snapshot(false);
    settings.bind(f);
}

/// Helper for creating report output snapshots
pub fn assert_report_snapshot(name: &str, content: &str) {
    with_settings(|| {
        assert_snapshot!(name, content);
    });
}

/// Helper for config-specific snapshots
pub fn assert_config_snapshot(base_name: &str, config_name: &str, content: &str) {
    let snapshot_name = format!("{}.{}", base_name, config_name);
    with_settings(|| {
        assert_snapshot!(snapshot_name, content);
    });
}
