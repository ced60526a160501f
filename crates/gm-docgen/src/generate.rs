use std::path::PathBuf;

use gm_search::{write_search_directory, SearchIndex, SearchIndexError, SectionKind};

use crate::{Catalog, DocgenConfig};

/// Writes the search tables of the configured sections, then the manifest.
///
/// Sections listed more than once are only emitted the first time.
///
/// # Arguments
///
/// * `config` - Sections, anchor prefix and output directory.
/// * `catalog` - The documented API.
///
/// # Returns
///
/// The paths of the written files, the manifest last.
pub fn generate(
    config: &DocgenConfig,
    catalog: &Catalog,
) -> Result<Vec<PathBuf>, SearchIndexError> {
    let mut kinds: Vec<SectionKind> = Vec::with_capacity(config.sections.len());
    for kind in &config.sections {
        if kinds.contains(kind) {
            log::warn!("Section {kind} is listed more than once, skipping the duplicate");
            continue;
        }
        kinds.push(*kind);
    }

    let indices: Vec<SearchIndex> = kinds
        .iter()
        .map(|kind| catalog.search_index(*kind, &config.html_root))
        .collect();
    for index in &indices {
        index.validate()?;
    }

    let sections: Vec<(SectionKind, &SearchIndex)> = kinds.into_iter().zip(&indices).collect();
    log::info!(
        "Generating {} search sections into {}",
        sections.len(),
        config.output.display()
    );

    write_search_directory(&config.output, &sections)
}
