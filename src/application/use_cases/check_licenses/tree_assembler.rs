use super::node_builder::{Ancestors, DependencyNodeBuilder};
use super::package_detail_resolver::PackageDetailResolver;
use crate::license_compliance::domain::{
    ComplianceTree, ImporterMap, ImporterNode, LicenseCheckOptions,
};
use crate::ports::outbound::{DependencyWalker, LicenseAnnotator, ManifestReader};
use crate::shared::Result;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

/// Tree plus the per-package warnings raised while building it
#[derive(Debug)]
pub struct AssembledTree {
    pub tree: ComplianceTree,
    pub warnings: Vec<String>,
}

/// TreeAssembler builds one importer entry per workspace member
pub struct TreeAssembler;

impl TreeAssembler {
    pub async fn assemble<W, MR, LA>(
        walker: &W,
        manifest_reader: &MR,
        annotator: &LA,
        options: &LicenseCheckOptions,
        processed: Arc<AtomicUsize>,
    ) -> Result<AssembledTree>
    where
        W: DependencyWalker,
        MR: ManifestReader,
        LA: LicenseAnnotator,
    {
        let importer_ids = walker.importer_ids();
        let importer_steps = walker.importer_steps(&importer_ids, options.include)?;

        let builder = DependencyNodeBuilder::new(
            walker,
            PackageDetailResolver::new(manifest_reader, options),
            annotator,
            options.include,
            processed,
        );

        let mut importers = ImporterMap::new();
        for importer in importer_steps {
            // each importer starts a fresh recursion stack
            let ancestors = Ancestors::new();
            let dependencies = builder.build(importer.step, &ancestors).await?;
            importers.insert(importer.importer_id, ImporterNode::new(dependencies));
        }

        Ok(AssembledTree {
            tree: ComplianceTree::new(importers),
            warnings: builder.into_warnings(),
        })
    }
}
