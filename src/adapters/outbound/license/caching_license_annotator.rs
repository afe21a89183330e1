use crate::license_compliance::domain::{LicenseInfo, PackageManifest};
use crate::ports::outbound::LicenseAnnotator;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CachingLicenseAnnotator wraps a LicenseAnnotator and memoizes results per install path.
///
/// A package shared by many parents is materialized once per occurrence in the
/// tree; the install path identifies the package instance, so its license only
/// has to be determined once. Failures are not cached.
pub struct CachingLicenseAnnotator<A: LicenseAnnotator> {
    inner: A,
    cache: Arc<DashMap<PathBuf, LicenseInfo>>,
}

impl<A: LicenseAnnotator> CachingLicenseAnnotator<A> {
    /// Creates a new caching annotator wrapping the given inner annotator
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<A: LicenseAnnotator> LicenseAnnotator for CachingLicenseAnnotator<A> {
    async fn annotate(
        &self,
        manifest: &PackageManifest,
        install_path: &Path,
    ) -> Result<LicenseInfo> {
        if let Some(cached) = self.cache.get(install_path) {
            return Ok(cached.clone());
        }

        let info = self.inner.annotate(manifest, install_path).await?;
        self.cache.insert(install_path.to_path_buf(), info.clone());

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock annotator that tracks call counts and fails for `/broken`
    struct CountingAnnotator {
        call_count: AtomicUsize,
    }

    impl CountingAnnotator {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LicenseAnnotator for CountingAnnotator {
        async fn annotate(
            &self,
            _manifest: &PackageManifest,
            install_path: &Path,
        ) -> Result<LicenseInfo> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if install_path == Path::new("/broken") {
                anyhow::bail!("permission denied");
            }
            Ok(LicenseInfo::declared(install_path.display().to_string()))
        }
    }

    #[tokio::test]
    async fn test_caching_annotator_returns_cached_value() {
        let annotator = CachingLicenseAnnotator::new(CountingAnnotator::new());
        let manifest = PackageManifest::default();

        let first = annotator
            .annotate(&manifest, Path::new("/store/react"))
            .await
            .unwrap();
        let second = annotator
            .annotate(&manifest, Path::new("/store/react"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(annotator.inner.get_call_count(), 1);
        assert_eq!(annotator.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_different_install_paths_cached_separately() {
        let annotator = CachingLicenseAnnotator::new(CountingAnnotator::new());
        let manifest = PackageManifest::default();

        annotator
            .annotate(&manifest, Path::new("/store/a"))
            .await
            .unwrap();
        annotator
            .annotate(&manifest, Path::new("/store/b"))
            .await
            .unwrap();

        assert_eq!(annotator.inner.get_call_count(), 2);
        assert_eq!(annotator.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let annotator = CachingLicenseAnnotator::new(CountingAnnotator::new());
        let manifest = PackageManifest::default();

        assert!(annotator
            .annotate(&manifest, Path::new("/broken"))
            .await
            .is_err());
        assert!(annotator
            .annotate(&manifest, Path::new("/broken"))
            .await
            .is_err());

        assert_eq!(annotator.inner.get_call_count(), 2);
        assert_eq!(annotator.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        let annotator = Arc::new(CachingLicenseAnnotator::new(CountingAnnotator::new()));

        let mut handles = vec![];
        for i in 0..10 {
            let annotator = annotator.clone();
            handles.push(tokio::spawn(async move {
                let path = PathBuf::from(format!("/store/pkg-{}", i % 3));
                annotator
                    .annotate(&PackageManifest::default(), &path)
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(annotator.cache_size(), 3);
    }
}
