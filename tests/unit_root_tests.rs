//! # Root Resolution Unit Tests / 根目录解析单元测试
//!
//! Tests for choosing between the persistent `tmp` root and the
//! system temporary fallback.
//!
//! 在持久 `tmp` 根目录与系统临时目录之间进行选择的测试。

mod common;

use common::{allocator_in, persistent_root, setup_project_dir, TEST_IDENTITY};
use std::fs;
use test_tempdir::core::config::EPHEMERAL_PREFIX;
use test_tempdir::core::models::RootDirectory;
use test_tempdir::core::root::{claim_persistent_root, resolve_root};
use test_tempdir::{AllocatorConfig, Cleanup, Error, Outcome};

#[cfg(test)]
mod persistent_root_tests {
    use super::*;

    #[test]
    fn test_missing_root_is_created() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let root = resolve_root(&AllocatorConfig::new().base_dir(project.path()))?;

        assert!(!root.is_ephemeral());
        assert_eq!(root.path(), persistent_root(project.path()));
        assert!(root.path().is_dir());
        Ok(())
    }

    #[test]
    fn test_existing_root_is_reused() -> anyhow::Result<()> {
        let project = setup_project_dir();
        fs::create_dir(project.path().join("tmp"))?;
        fs::create_dir(project.path().join("tmp").join("other_test"))?;

        let root = resolve_root(&AllocatorConfig::new().base_dir(project.path()))?;

        assert!(matches!(root, RootDirectory::Persistent(_)));
        assert!(root.path().join("other_test").is_dir());
        Ok(())
    }

    #[test]
    fn test_custom_root_name() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let config = AllocatorConfig::new()
            .base_dir(project.path())
            .root_name("scratch");

        let root = resolve_root(&config)?;

        assert!(root.path().ends_with("scratch"));
        Ok(())
    }

    #[test]
    fn test_file_in_place_of_root_is_rejected() {
        let project = setup_project_dir();
        fs::write(project.path().join("tmp"), "").unwrap();

        let result = resolve_root(&AllocatorConfig::new().base_dir(project.path()));

        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}

#[cfg(test)]
mod race_tests {
    use super::*;

    #[test]
    fn test_claim_creates_root() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let candidate = project.path().join("tmp");

        let claimed = claim_persistent_root(&candidate)?;

        assert_eq!(claimed, Some(persistent_root(project.path())));
        Ok(())
    }

    #[test]
    fn test_claim_reports_lost_race() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let candidate = project.path().join("tmp");
        // Another process created it after our existence check.
        fs::create_dir(&candidate)?;

        assert_eq!(claim_persistent_root(&candidate)?, None);
        Ok(())
    }

    #[test]
    fn test_claim_failure_is_fatal() {
        let project = setup_project_dir();
        let candidate = project.path().join("missing").join("tmp");

        let result = claim_persistent_root(&candidate);

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}

#[cfg(test)]
mod ephemeral_root_tests {
    use super::*;

    #[test]
    fn test_unusable_base_falls_back() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let missing_base = project.path().join("does-not-exist");
        let config = AllocatorConfig::new().base_dir(&missing_base);

        let root = resolve_root(&config)?;

        assert!(root.is_ephemeral());
        let name = root.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(EPHEMERAL_PREFIX));
        assert!(!missing_base.exists());
        Ok(())
    }

    #[test]
    fn test_fallback_layout_and_unconditional_removal() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let missing_base = project.path().join("read-only-elsewhere");
        let mut allocator = allocator_in(&missing_base, TEST_IDENTITY);

        let dir = allocator.tempdir(Some("label"))?;
        assert!(allocator.is_ephemeral());

        let root = fs::canonicalize(allocator.root_dir().unwrap())?;
        assert_eq!(dir, root.join("t_foo_t").join("label_1"));

        // Even a failed run leaves nothing behind in the fallback location.
        assert_eq!(allocator.finish(Outcome::Failure(1)), Cleanup::Discarded);
        assert!(!dir.exists());
        assert!(!root.exists());
        Ok(())
    }

    #[test]
    fn test_fallback_removed_on_success() -> anyhow::Result<()> {
        let project = setup_project_dir();
        let mut allocator = allocator_in(&project.path().join("gone"), TEST_IDENTITY);

        let dir = allocator.tempdir(None)?;
        let root = allocator.root_dir().unwrap().to_path_buf();

        assert_eq!(allocator.finish(Outcome::Success), Cleanup::Discarded);
        assert!(!dir.exists());
        assert!(!root.exists());
        Ok(())
    }
}
