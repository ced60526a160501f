mod functions;
mod types;

pub use functions::*;
pub use types::*;

use std::collections::BTreeSet;

use gm_search::{member_scope, SearchIndex, SectionKind};

/// A documented type with its public members.
#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct ClassDoc {
    /// Class name, such as `Vec3f`.
    pub name: String,
    /// Source file declaring the class, relative to the crate sources.
    pub file: String,
    /// Member signatures, qualified by the class name.
    pub members: Vec<String>,
}

/// Group of free functions sharing a documentation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FunctionCategory {
    /// Scalar and element-wise helpers.
    Basic,
    /// Vector and matrix operations.
    LinearAlgebra,
    /// Ray intersections.
    RayTracing,
}

impl FunctionCategory {
    /// Name of the category in page names.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionCategory::Basic => "basic",
            FunctionCategory::LinearAlgebra => "linearAlgebra",
            FunctionCategory::RayTracing => "rayTracing",
        }
    }

    /// Page documenting the functions of the category.
    pub fn page(&self) -> String {
        format!("group__gm__functions__{}.html", self.name())
    }
}

/// A documented free function with all its overloads.
#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct FunctionDoc {
    /// Function name.
    pub name: String,
    /// Page grouping the function.
    pub category: FunctionCategory,
    /// Source file defining the function, relative to the crate sources.
    pub file: String,
    /// One signature per overload.
    pub overloads: Vec<String>,
}

/// The documented public API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Documented types.
    pub classes: Vec<ClassDoc>,
    /// Documented free functions.
    pub functions: Vec<FunctionDoc>,
}

impl Catalog {
    /// The public API of the `gm` crate.
    pub fn gm() -> Self {
        Self {
            classes: classes(),
            functions: functions(),
        }
    }

    /// Every source file declaring a class or a function, sorted.
    pub fn files(&self) -> Vec<String> {
        self.classes
            .iter()
            .map(|class| class.file.clone())
            .chain(self.functions.iter().map(|function| function.file.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Builds the search table of a section.
    ///
    /// # Arguments
    ///
    /// * `kind` - The section to build.
    /// * `html_root` - Prefix of every anchor, relative to the search directory.
    ///
    /// # Returns
    ///
    /// The search index, `all` holding the entries of every other section.
    pub fn search_index(&self, kind: SectionKind, html_root: &str) -> SearchIndex {
        let mut index = SearchIndex::new();

        match kind {
            SectionKind::All => {
                self.insert_classes(&mut index, html_root);
                self.insert_members(&mut index, html_root);
                self.insert_functions(&mut index, html_root);
                self.insert_files(&mut index, html_root);
            }
            SectionKind::Classes => self.insert_classes(&mut index, html_root),
            SectionKind::Files => self.insert_files(&mut index, html_root),
            SectionKind::Functions => {
                self.insert_members(&mut index, html_root);
                self.insert_functions(&mut index, html_root);
            }
        }

        log::debug!("Built search index {kind} with {} entries", index.len());
        index
    }

    fn insert_classes(&self, index: &mut SearchIndex, html_root: &str) {
        for class in &self.classes {
            index.insert(
                &class.name,
                &format!("{html_root}{}", class_page(&class.name)),
                Some(&class.name),
            );
        }
    }

    fn insert_members(&self, index: &mut SearchIndex, html_root: &str) {
        for class in &self.classes {
            for member in &class.members {
                index.insert(
                    member_name(member),
                    &format!("{html_root}{}#a{}", class_page(&class.name), anchor_hash(member)),
                    Some(member),
                );
            }
        }
    }

    fn insert_functions(&self, index: &mut SearchIndex, html_root: &str) {
        for function in &self.functions {
            let header = file_name(&function.file);
            for overload in &function.overloads {
                index.insert(
                    &function.name,
                    &format!(
                        "{html_root}{}#ga{}",
                        function.category.page(),
                        anchor_hash(overload)
                    ),
                    Some(&member_scope(overload, header)),
                );
            }
        }
    }

    fn insert_files(&self, index: &mut SearchIndex, html_root: &str) {
        for file in self.files() {
            index.insert(
                file_name(&file),
                &format!("{html_root}{}", file_page(&file)),
                None,
            );
        }
    }
}

fn class_page(name: &str) -> String {
    format!("class{name}.html")
}

/// Page documenting a source file, `/` and `.` being escaped.
pub fn file_page(file: &str) -> String {
    format!("{}.html", file.replace('/', "_2").replace('.', "_8"))
}

fn file_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}

/// Name of the member declared by a qualified signature, such as `new` in `Vec2f::new(..)`.
fn member_name(signature: &str) -> &str {
    let unqualified = signature.split_once("::").map_or(signature, |(_, rest)| rest);
    unqualified
        .split_once('(')
        .map_or(unqualified, |(name, _)| name)
}

/// Deterministic anchor of a signature, as a 64-bit FNV-1a hash.
fn anchor_hash(signature: &str) -> String {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let hash = signature
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME));
    format!("{hash:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog {
            classes: vec![ClassDoc::new(
                "Vec2f".to_string(),
                "types/vector.rs".to_string(),
                vec![
                    "Vec2f::default() -> Vec2f".to_string(),
                    "Vec2f::new(x: f32, y: f32) -> Vec2f".to_string(),
                ],
            )],
            functions: vec![FunctionDoc::new(
                "min".to_string(),
                FunctionCategory::Basic,
                "functions/basic/compare.rs".to_string(),
                vec![
                    "min(value_a: f32, value_b: f32) -> f32".to_string(),
                    "min(value_a: Vec2f, value_b: Vec2f) -> Vec2f".to_string(),
                ],
            )],
        }
    }

    #[test]
    fn should_hash_signatures_deterministically() {
        assert_eq!(anchor_hash(""), "cbf29ce484222325");
        assert_eq!(anchor_hash("a"), "af63dc4c8601ec8c");
        assert_ne!(
            anchor_hash("min(value_a: f32, value_b: f32) -> f32"),
            anchor_hash("min(value_a: f64, value_b: f64) -> f64")
        );
    }

    #[test]
    fn should_escape_file_pages() {
        assert_eq!(file_page("types/vector.rs"), "types_2vector_8rs.html");
        assert_eq!(file_name("functions/basic/compare.rs"), "compare.rs");
    }

    #[test]
    fn should_extract_member_names() {
        assert_eq!(member_name("Vec2f::new(x: f32, y: f32) -> Vec2f"), "new");
        assert_eq!(member_name("Vec2f::x(&self) -> f32"), "x");
    }

    #[test]
    fn should_list_files_once() {
        let mut catalog = small_catalog();
        catalog.classes.push(ClassDoc::new(
            "Vec3f".to_string(),
            "types/vector.rs".to_string(),
            Vec::new(),
        ));

        assert_eq!(
            catalog.files(),
            ["functions/basic/compare.rs", "types/vector.rs"]
        );
    }

    #[test]
    fn should_build_function_section() {
        let index = small_catalog().search_index(SectionKind::Functions, "../");

        let min = index.get("min").unwrap();
        assert_eq!(min.refs.len(), 2);
        assert!(min.refs[0]
            .anchor
            .starts_with("../group__gm__functions__basic.html#ga"));
        assert_eq!(
            min.refs[0].scope.as_deref(),
            Some("min(value_a: f32, value_b: f32) -> f32:\u{a0}compare.rs")
        );

        let new = index.get("new").unwrap();
        assert!(new.refs[0].anchor.starts_with("../classVec2f.html#a"));
        assert!(index.get("vec2f").is_none());
    }

    #[test]
    fn should_build_class_and_file_sections() {
        let catalog = small_catalog();

        let classes = catalog.search_index(SectionKind::Classes, "");
        assert_eq!(classes.len(), 1);
        assert_eq!(classes.get("vec2f").unwrap().refs[0].anchor, "classVec2f.html");

        let files = catalog.search_index(SectionKind::Files, "../");
        assert!(files.get("functions_2fbasic_2fcompare_2ers").is_none());
        let compare = files.get("compare_2ers").unwrap();
        assert_eq!(compare.label, "compare.rs");
        assert_eq!(compare.refs[0].anchor, "../functions_2basic_2compare_8rs.html");
        assert_eq!(compare.refs[0].scope, None);
    }

    #[test]
    fn should_group_files_sharing_a_name() {
        let mut catalog = small_catalog();
        catalog.functions.push(FunctionDoc::new(
            "dot".to_string(),
            FunctionCategory::LinearAlgebra,
            "functions/linear_algebra/vector.rs".to_string(),
            vec!["dot(lhs: Vec2f, rhs: Vec2f) -> f32".to_string()],
        ));

        let files = catalog.search_index(SectionKind::Files, "../");
        let vector = files.get("vector_2ers").unwrap();

        assert_eq!(vector.label, "vector.rs");
        let anchors: Vec<_> = vector.refs.iter().map(|r| r.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            [
                "../functions_2linear_algebra_2vector_8rs.html",
                "../types_2vector_8rs.html"
            ]
        );
    }

    #[test]
    fn should_merge_every_section_into_all() {
        let catalog = small_catalog();
        let all = catalog.search_index(SectionKind::All, "../");

        let sections: usize = [SectionKind::Classes, SectionKind::Files, SectionKind::Functions]
            .into_iter()
            .map(|kind| catalog.search_index(kind, "../").len())
            .sum();
        assert_eq!(all.len(), sections);
        assert!(all.validate().is_ok());
    }

    #[test]
    fn should_catalog_whole_library() {
        let catalog = Catalog::gm();

        assert_eq!(catalog.classes.len(), 22);
        for kind in SectionKind::ALL {
            let index = catalog.search_index(kind, "../");
            assert!(!index.is_empty(), "{kind}");
            assert!(index.validate().is_ok(), "{kind}");
        }
    }
}
