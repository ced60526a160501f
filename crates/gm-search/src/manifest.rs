use core::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{SearchIndex, SearchIndexError};

/// File name of the manifest announcing the populated sections.
pub const MANIFEST_FILE: &str = "searchdata.js";

/// A documentation section with its own search table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Every documented entity.
    All,
    /// Types.
    Classes,
    /// Header files.
    Files,
    /// Free functions.
    Functions,
}

impl SectionKind {
    /// Every section, in manifest order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::All,
        SectionKind::Classes,
        SectionKind::Files,
        SectionKind::Functions,
    ];

    /// Name prefixing the section scripts.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::All => "all",
            SectionKind::Classes => "classes",
            SectionKind::Files => "files",
            SectionKind::Functions => "functions",
        }
    }

    /// Title shown in the search box drop-down.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::All => "All",
            SectionKind::Classes => "Classes",
            SectionKind::Files => "Files",
            SectionKind::Functions => "Functions",
        }
    }

    /// Parses a section name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the manifest listing, for every section, its populated leading characters, its
/// script prefix and its title.
pub fn section_manifest(sections: &[(SectionKind, &SearchIndex)]) -> String {
    let table = |name: &str, value: &dyn Fn(SectionKind, &SearchIndex) -> String| {
        let rows: Vec<String> = sections
            .iter()
            .enumerate()
            .map(|(position, (kind, index))| format!("  {position}: \"{}\"", value(*kind, index)))
            .collect();
        format!("var {name} =\n{{\n{}\n}};\n", rows.join(",\n"))
    };

    [
        table("indexSectionsWithContent", &|_, index| index.characters()),
        table("indexSectionNames", &|kind, _| kind.name().to_string()),
        table("indexSectionLabels", &|kind, _| kind.label().to_string()),
    ]
    .join("\n")
}

/// Writes the scripts of every section and the manifest into `directory`.
///
/// # Returns
///
/// The paths of the written files, the manifest last.
pub fn write_search_directory(
    directory: &Path,
    sections: &[(SectionKind, &SearchIndex)],
) -> Result<Vec<PathBuf>, SearchIndexError> {
    std::fs::create_dir_all(directory)?;

    let mut paths = Vec::new();
    for (kind, index) in sections {
        if index.is_empty() {
            log::warn!("Section {kind} has no entry, only listing it in the manifest");
        }
        paths.extend(index.write_scripts(directory, kind.name())?);
    }

    let manifest = directory.join(MANIFEST_FILE);
    std::fs::write(&manifest, section_manifest(sections))?;
    log::info!(
        "Wrote {} search scripts and {}",
        paths.len(),
        manifest.display()
    );
    paths.push(manifest);

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_section_names() {
        assert_eq!(SectionKind::from_name("files"), Some(SectionKind::Files));
        assert_eq!(SectionKind::from_name("namespaces"), None);
        assert_eq!(SectionKind::Functions.to_string(), "functions");
    }

    #[test]
    fn should_serialize_lowercase_names() {
        let json = serde_json::to_string(&[SectionKind::All, SectionKind::Classes]).unwrap();
        assert_eq!(json, r#"["all","classes"]"#);
    }

    #[test]
    fn should_render_manifest() {
        let mut classes = SearchIndex::new();
        classes.insert("Mat3f", "../classMat3f.html", Some("Mat3f"));
        classes.insert("Vec3f", "../classVec3f.html", Some("Vec3f"));
        let mut files = SearchIndex::new();
        files.insert("min.h", "../min_8h.html", None);

        let manifest = section_manifest(&[
            (SectionKind::Classes, &classes),
            (SectionKind::Files, &files),
        ]);

        assert_eq!(
            manifest,
            "var indexSectionsWithContent =\n{\n  0: \"mv\",\n  1: \"m\"\n};\n\n\
             var indexSectionNames =\n{\n  0: \"classes\",\n  1: \"files\"\n};\n\n\
             var indexSectionLabels =\n{\n  0: \"Classes\",\n  1: \"Files\"\n};\n"
        );
    }
}
