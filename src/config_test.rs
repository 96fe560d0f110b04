/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::*;
    use crate::error::ScanError;
    use crate::types::SortOrder;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["scan-publish", "scan.csv"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).expect("valid args")
    }

    fn today() -> String {
        "2025-01-02".to_string()
    }

    #[test]
    fn test_preview_has_no_publish_config() {
        let config = resolve(&args(&[]), FileConfig::default(), today()).unwrap();

        assert!(config.publish.is_none());
        assert_eq!(config.order, SortOrder::Desc);
        assert_eq!(config.large_number_columns.len(), 5);
    }

    #[test]
    fn test_publish_defaults() {
        let config = resolve(&args(&["--publish"]), FileConfig::default(), today()).unwrap();
        let publish = config.publish.expect("publish config");

        assert_eq!(publish.meta.date, "2025-01-02");
        assert_eq!(publish.site_root, PathBuf::from("site"));
        assert_eq!(publish.scans_dir, PathBuf::from("site").join("scans"));
        assert_eq!(publish.commit_prefix, "Add scan");
        assert!(!publish.push);
    }

    #[test]
    fn test_explicit_date_and_name() {
        let config =
            resolve(&args(&["--publish", "--date", "2024-12-25", "--name", "semis"]), FileConfig::default(), today())
                .unwrap();
        let publish = config.publish.unwrap();

        assert_eq!(publish.meta.scan_id(), "2024-12-25-semis");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = resolve(&args(&["--publish", "--date", "2024-13-01"]), FileConfig::default(), today()).unwrap_err();

        assert!(matches!(err, ScanError::InvalidDate(ref d) if d == "2024-13-01"));

        for bad in ["12/25/2024", "2024-02-30"] {
            let err = resolve(&args(&["--publish", "--date", bad]), FileConfig::default(), today()).unwrap_err();
            assert!(matches!(err, ScanError::InvalidDate(_)), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            site_root: Some(PathBuf::from("/srv/www")),
            order: Some(SortOrder::Asc),
            ..Default::default()
        };

        let config = resolve(&args(&["--publish", "--site-root", "public", "--order", "desc"]), file, today()).unwrap();

        assert_eq!(config.order, SortOrder::Desc);
        assert_eq!(config.publish.unwrap().site_root, PathBuf::from("public"));
    }

    #[test]
    fn test_file_values_apply() {
        let file = FileConfig {
            site_root: Some(PathBuf::from("/srv/www")),
            order: Some(SortOrder::Asc),
            large_number_columns: Some(vec!["Float".to_string()]),
            site_url: Some("https://example.com/#scans".to_string()),
            commit_prefix: Some("Scan".to_string()),
        };

        let config = resolve(&args(&["--publish"]), file, today()).unwrap();

        assert_eq!(config.order, SortOrder::Asc);
        assert_eq!(config.large_number_columns, vec!["Float"]);
        let publish = config.publish.unwrap();
        assert_eq!(publish.scans_dir, PathBuf::from("/srv/www/scans"));
        assert_eq!(publish.site_url.as_deref(), Some("https://example.com/#scans"));
        assert_eq!(publish.commit_prefix, "Scan");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "site_root = \"public\"\norder = \"asc\"\nlarge_number_columns = [\"Volume\", \"Float\"]\n",
        )
        .unwrap();

        let file = load_file_config(Some(&path)).unwrap();

        assert_eq!(file.site_root, Some(PathBuf::from("public")));
        assert_eq!(file.order, Some(SortOrder::Asc));
        assert_eq!(file.large_number_columns.unwrap().len(), 2);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_file_config(Some(&dir.path().join("nope.toml"))).unwrap_err();

        assert!(matches!(err, ScanError::Config { .. }));
    }

    #[test]
    fn test_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "colour = \"red\"\n").unwrap();

        let err = load_file_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_default_paths_start_with_local_file() {
        assert_eq!(default_config_paths()[0], PathBuf::from(CONFIG_FILE_NAME));
    }
}
