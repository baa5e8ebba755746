//! Keyword-based step classification.
//!
//! Classification is a deterministic heuristic, not a model: a description is
//! lower-cased and tested against per-category keyword sets in a fixed
//! priority order, and the first match wins. The keyword table is data, not
//! logic — the default table carries the vocabulary observed in real
//! workflow descriptions (Indonesian with common English loans) and callers
//! can extend or replace it through the
//! [`GeneratorBuilder`](crate::generator::GeneratorBuilder).

use crate::diagram::StepCategory;

/// A priority-ordered table of category keyword sets.
///
/// Entry order is the tie-break contract: a description containing keywords
/// from several categories is assigned the earliest entry's category. The
/// default table checks `start` and `end` first.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

#[derive(Debug, Clone)]
struct KeywordEntry {
    category: StepCategory,
    keywords: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let mut table = KeywordTable::empty();
        table.add_rule(StepCategory::Start, ["mulai", "start", "buka"]);
        table.add_rule(StepCategory::End, ["selesai", "end", "tutup"]);
        table.add_rule(StepCategory::Preparation, ["siap", "persiapan"]);
        table.add_rule(StepCategory::Decision, ["cek", "periksa", "verifikasi"]);
        table.add_rule(StepCategory::Customer, ["pelanggan", "customer", "pembeli"]);
        table.add_rule(StepCategory::Document, ["laporan", "catat", "report"]);
        table
    }
}

impl KeywordTable {
    /// A table with no rules; every description classifies as `process`.
    pub fn empty() -> Self {
        KeywordTable {
            entries: Vec::new(),
        }
    }

    /// Appends a category with its keyword set at the lowest priority.
    ///
    /// If the category already has an entry, the keywords are merged into it
    /// and its priority is unchanged.
    pub fn add_rule<I, S>(&mut self, category: StepCategory, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = keywords.into_iter().map(|k| k.into().to_lowercase());
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.keywords.extend(keywords),
            None => self.entries.push(KeywordEntry {
                category,
                keywords: keywords.collect(),
            }),
        }
    }

    /// Classifies one step description.
    ///
    /// Pure: lower-cases the description, scans entries in priority order,
    /// and returns the first category with a contained keyword, or
    /// `process` when nothing matches.
    pub fn classify(&self, description: &str) -> StepCategory {
        let haystack = description.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| haystack.contains(k.as_str())))
            .map(|entry| entry.category)
            .unwrap_or_default()
    }
}
