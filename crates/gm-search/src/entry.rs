use crate::search_key;

/// A link from a search result to a location in the documentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchRef {
    /// Page of the documented entity, relative to the search directory, with its fragment.
    pub anchor: String,
    /// Disambiguation shown next to the label, such as the full signature of an overload.
    pub scope: Option<String>,
}

impl SearchRef {
    /// Creates a reference, an empty scope being stored as no scope.
    pub fn new(anchor: String, scope: Option<String>) -> Self {
        Self {
            anchor,
            scope: scope.filter(|scope| !scope.is_empty()),
        }
    }
}

/// All documented entities sharing one search key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchEntry {
    /// Escaped, lowercase key matched against the search box input.
    pub key: String,
    /// Display label of the entities.
    pub label: String,
    /// Links to every entity, in insertion order.
    pub refs: Vec<SearchRef>,
}

impl SearchEntry {
    /// Creates an entry keyed after `label`, without any reference yet.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: search_key(&label),
            label,
            refs: Vec::new(),
        }
    }

    /// Adds a reference to the entry.
    pub fn with_ref(mut self, anchor: impl Into<String>, scope: Option<String>) -> Self {
        self.refs.push(SearchRef::new(anchor.into(), scope));
        self
    }

    /// The character grouping this entry into a section script.
    pub fn section_char(&self) -> Option<char> {
        self.key.chars().next()
    }
}
