use crate::constants::DEFAULT_SECTIONS;
use fnv::FnvHashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub order: usize,
}

/// Ordered, immutable list of navigable page sections.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build from ids in page order. Empty and repeated ids are dropped so
    /// that `id` stays a unique key.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FnvHashSet::default();
        let mut sections = Vec::new();
        for id in ids {
            let id: String = id.into();
            if id.is_empty() || !seen.insert(id.clone()) {
                continue;
            }
            sections.push(Section {
                order: sections.len(),
                id,
            });
        }
        Self { sections }
    }

    pub fn default_layout() -> Self {
        Self::new(DEFAULT_SECTIONS)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Clamp an arbitrary index into the registry. `None` only when empty.
    pub fn clamp(&self, index: i64) -> Option<usize> {
        let last = self.sections.len().checked_sub(1)?;
        Some(index.clamp(0, last as i64) as usize)
    }
}
