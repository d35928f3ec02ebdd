use std::collections::BTreeMap;

/// Per-dictionary key sets: dictionary basename -> (key -> raw line).
///
/// A run owns two of these, one for used entries and one for ignored
/// entries. Inner maps are ordered so output files list keys lexically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DictionaryNamespace {
    dictionaries: BTreeMap<String, BTreeMap<String, String>>,
}

impl DictionaryNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary so it exists (possibly empty) when results are written.
    pub fn ensure(&mut self, dictionary: &str) {
        if !self.dictionaries.contains_key(dictionary) {
            self.dictionaries
                .insert(dictionary.to_string(), BTreeMap::new());
        }
    }

    /// Store `line` under `key`, replacing any previous line for that key.
    pub fn insert(&mut self, dictionary: &str, key: &str, line: &str) {
        self.dictionaries
            .entry(dictionary.to_string())
            .or_default()
            .insert(key.to_string(), line.to_string());
    }

    pub fn remove(&mut self, dictionary: &str, key: &str) -> Option<String> {
        self.dictionaries.get_mut(dictionary)?.remove(key)
    }

    pub fn contains(&self, dictionary: &str, key: &str) -> bool {
        self.dictionaries
            .get(dictionary)
            .is_some_and(|entries| entries.contains_key(key))
    }

    pub fn get(&self, dictionary: &str) -> Option<&BTreeMap<String, String>> {
        self.dictionaries.get(dictionary)
    }

    /// Raw lines stored for a dictionary, ordered by key.
    pub fn lines<'a>(&'a self, dictionary: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.dictionaries
            .get(dictionary)
            .into_iter()
            .flat_map(|entries| entries.values().map(String::as_str))
    }

    /// Number of keys stored for a dictionary (0 if unknown).
    pub fn len(&self, dictionary: &str) -> usize {
        self.dictionaries.get(dictionary).map_or(0, BTreeMap::len)
    }
}
