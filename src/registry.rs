use serde::Serialize;

/// Ordered, duplicate-free set of owned short codes plus the selected index.
///
/// `selection` is `Some(i)` with `i < codes.len()` whenever the set is
/// non-empty and `None` when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LinkRegistry {
    codes: Vec<String>,
    selection: Option<usize>,
}

impl LinkRegistry {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for code in codes {
            registry.observe(code);
        }
        registry
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection
            .and_then(|index| self.codes.get(index))
            .map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|existing| existing == code)
    }

    /// Appends `code` unless it is already present. Returns whether the set
    /// changed.
    pub fn observe(&mut self, code: impl Into<String>) -> bool {
        let code = code.into();
        if self.contains(&code) {
            return false;
        }
        self.codes.push(code);
        if self.selection.is_none() {
            self.selection = Some(0);
        }
        true
    }

    /// Returns whether the selection changed. Out-of-range indices are
    /// ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.codes.len() || self.selection == Some(index) {
            return false;
        }
        self.selection = Some(index);
        true
    }

    /// Drops `code` and resets the selection to the first link.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.codes.len();
        self.codes.retain(|existing| existing != code);
        let removed = self.codes.len() != before;
        if removed {
            self.selection = if self.codes.is_empty() { None } else { Some(0) };
        }
        removed
    }
}
