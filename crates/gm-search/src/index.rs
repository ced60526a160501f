use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{
    entries_from_script, entries_to_script, is_valid_key, SearchEntry, SearchIndexError, SearchRef,
};

/// Search table of one documentation section, such as classes or functions.
///
/// Entries are kept sorted by key, which is the order the search box expects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: BTreeMap<String, SearchEntry>,
}

/// The entries of an index sharing the same leading key character.
#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct SearchPartition<'a> {
    /// Position of the partition among the populated characters of its index.
    pub index: usize,
    /// Leading key character shared by the entries.
    pub character: char,
    /// Entries, sorted by key.
    pub entries: Vec<&'a SearchEntry>,
}

impl SearchPartition<'_> {
    /// Name of the script holding this partition for the section `section`.
    ///
    /// ```
    /// let partition = gm_search::SearchPartition::new(11, 'm', Vec::new());
    /// assert_eq!(partition.file_name("all"), "all_b.js");
    /// ```
    pub fn file_name(&self, section: &str) -> String {
        format!("{section}_{:x}.js", self.index)
    }
}

impl SearchIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from complete entries.
    ///
    /// # Returns
    ///
    /// An error on the first invalid key, entry without references or duplicated key.
    pub fn from_entries<I>(entries: I) -> Result<Self, SearchIndexError>
    where
        I: IntoIterator<Item = SearchEntry>,
    {
        let mut index = Self::new();

        for entry in entries {
            check_entry(&entry)?;
            match index.entries.entry(entry.key.clone()) {
                Entry::Vacant(vacant) => {
                    vacant.insert(entry);
                }
                Entry::Occupied(occupied) => {
                    return Err(SearchIndexError::DuplicateKey(occupied.key().clone()));
                }
            }
        }

        Ok(index)
    }

    /// Adds a reference to the entry keyed after `label`, creating the entry when needed.
    ///
    /// Labels mapping onto an existing key share its entry, keeping the first label.
    pub fn insert(&mut self, label: &str, anchor: &str, scope: Option<&str>) {
        let entry = SearchEntry::new(label);
        self.entries
            .entry(entry.key.clone())
            .or_insert(entry)
            .refs
            .push(SearchRef::new(anchor.to_string(), scope.map(str::to_string)));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&SearchEntry> {
        self.entries.get(key)
    }

    /// Entries, sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = &SearchEntry> {
        self.entries.values()
    }

    /// Checks that every key is valid and unique and that no entry is empty.
    pub fn validate(&self) -> Result<(), SearchIndexError> {
        for (key, entry) in self.entries.iter() {
            if *key != entry.key {
                return Err(SearchIndexError::InvalidKey(entry.key.clone()));
            }
            check_entry(entry)?;
        }
        Ok(())
    }

    /// The populated leading characters, in key order.
    pub fn characters(&self) -> String {
        let mut characters = String::new();
        for character in self.entries().filter_map(SearchEntry::section_char) {
            if !characters.ends_with(character) {
                characters.push(character);
            }
        }
        characters
    }

    /// Groups the entries by leading key character.
    pub fn partitions(&self) -> Vec<SearchPartition<'_>> {
        let mut partitions: Vec<SearchPartition<'_>> = Vec::new();

        for entry in self.entries() {
            let Some(character) = entry.section_char() else {
                continue;
            };
            let starts_partition = partitions
                .last()
                .map_or(true, |partition| partition.character != character);
            if starts_partition {
                partitions.push(SearchPartition::new(partitions.len(), character, Vec::new()));
            }
            if let Some(partition) = partitions.last_mut() {
                partition.entries.push(entry);
            }
        }

        partitions
    }

    /// Renders the whole index as a single search script.
    pub fn to_script(&self) -> String {
        entries_to_script(self.entries())
    }

    /// Loads an index from a search script.
    pub fn from_script(script: &str) -> Result<Self, SearchIndexError> {
        Self::from_entries(entries_from_script(script)?)
    }

    /// Writes one script per partition into `directory`.
    ///
    /// # Arguments
    ///
    /// * `directory` - Existing directory receiving the scripts.
    /// * `section` - Section name prefixing the script names.
    ///
    /// # Returns
    ///
    /// The paths of the written scripts.
    pub fn write_scripts(
        &self,
        directory: &Path,
        section: &str,
    ) -> Result<Vec<PathBuf>, SearchIndexError> {
        self.validate()?;

        let mut paths = Vec::new();
        for partition in self.partitions() {
            let path = directory.join(partition.file_name(section));
            std::fs::write(&path, entries_to_script(partition.entries))?;
            log::debug!("Wrote search script {}", path.display());
            paths.push(path);
        }

        for stale in section_scripts(directory, section)? {
            if !paths.contains(&stale) {
                std::fs::remove_file(&stale)?;
                log::debug!("Removed stale search script {}", stale.display());
            }
        }

        Ok(paths)
    }

    /// Reads back every script written by [SearchIndex::write_scripts] for `section`.
    pub fn read_scripts(directory: &Path, section: &str) -> Result<Self, SearchIndexError> {
        let paths = section_scripts(directory, section)?;

        let mut entries = Vec::new();
        for path in paths {
            log::debug!("Reading search script {}", path.display());
            entries.extend(entries_from_script(&std::fs::read_to_string(&path)?)?);
        }

        Self::from_entries(entries)
    }
}

/// Scripts of `section` in `directory`, named `{section}_{hex}.js`, sorted.
fn section_scripts(directory: &Path, section: &str) -> Result<Vec<PathBuf>, SearchIndexError> {
    let prefix = format!("{section}_");
    let mut paths = Vec::new();

    for dir_entry in std::fs::read_dir(directory)? {
        let path = dir_entry?.path();
        let is_section_script = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(&prefix))
            .and_then(|name| name.strip_suffix(".js"))
            .is_some_and(|index| usize::from_str_radix(index, 16).is_ok());
        if is_section_script {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

fn check_entry(entry: &SearchEntry) -> Result<(), SearchIndexError> {
    if !is_valid_key(&entry.key) {
        return Err(SearchIndexError::InvalidKey(entry.key.clone()));
    }
    if entry.refs.is_empty() {
        return Err(SearchIndexError::EmptyEntry(entry.key.clone()));
    }
    Ok(())
}
