//! Keyword lexicons for category and urgency classification
//!
//! Lexicons are immutable once built. The built-in lexicons are constructed
//! once per process and shared; custom lexicons come from `LexiconConfig`.

use aho_corasick::{AhoCorasick, MatchKind};
use campuswatch_core::{Category, Error, Result};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

const SANITATION_KEYWORDS: &[&str] = &[
    "washroom",
    "toilet",
    "bathroom",
    "dirty",
    "clean",
    "garbage",
    "trash",
    "smell",
    "odor",
    "leak",
    "water",
    "spill",
    "litter",
    "dust",
    "clogged",
    "plumbing",
    "hygiene",
    "sewage",
    "drain",
    "mop",
    "janitor",
    "waste",
    "bin",
    "overflowing",
];

const INFRASTRUCTURE_KEYWORDS: &[&str] = &[
    "bench",
    "broken",
    "chair",
    "table",
    "door",
    "window",
    "wall",
    "floor",
    "ceiling",
    "paint",
    "cracked",
    "tiles",
    "furniture",
    "desk",
    "stairs",
    "elevator",
    "pothole",
    "road",
    "pathway",
    "gate",
    "fence",
    "building",
    "roof",
    "collapse",
    "construction",
    "ramp",
    "railing",
    "parking",
];

const ELECTRICAL_KEYWORDS: &[&str] = &[
    "light",
    "electric",
    "power",
    "outlet",
    "switch",
    "bulb",
    "fan",
    "ac",
    "air conditioning",
    "wire",
    "socket",
    "fuse",
    "generator",
    "heater",
    "cooler",
    "projector",
    "computer",
    "server",
    "network",
    "wifi",
    "internet",
    "charging",
    "voltage",
    "short circuit",
    "spark",
];

const SECURITY_KEYWORDS: &[&str] = &[
    "security",
    "lock",
    "key",
    "theft",
    "stolen",
    "missing",
    "unsafe",
    "guard",
    "camera",
    "cctv",
    "harassment",
    "stranger",
    "suspicious",
    "emergency",
    "danger",
    "fire",
    "alarm",
    "evacuation",
    "threat",
    "violence",
];

const HIGH_URGENCY_KEYWORDS: &[&str] = &[
    "broken",
    "dirty",
    "urgent",
    "emergency",
    "dangerous",
    "not working",
    "damaged",
    "hazard",
    "fire",
    "flood",
    "collapse",
    "injury",
    "unsafe",
    "critical",
    "immediately",
    "severe",
    "terrible",
    "horrible",
    "worst",
    "stuck",
    "trapped",
    "leaking",
    "sparking",
    "smoking",
];

const MEDIUM_URGENCY_KEYWORDS: &[&str] = &[
    "issue",
    "problem",
    "concern",
    "need",
    "should",
    "fix",
    "repair",
    "replace",
    "noisy",
    "slow",
    "intermittent",
    "sometimes",
    "annoying",
];

/// Lowercase a raw description for matching.
///
/// Matching is substring containment over this form, so `"light"` matches
/// `"Flight"`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Strip surrounding whitespace, including the U+FEFF byte-order mark that
/// browsers treat as whitespace in form input
pub fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length of the trimmed input in UTF-16 code units.
///
/// This is the unit a browser reports for form fields, so characters
/// outside the Basic Multilingual Plane (most emoji) count as two.
pub fn input_length(text: &str) -> usize {
    trim_input(text).encode_utf16().count()
}

/// An ordered set of lowercase keywords with a prebuilt substring matcher
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

impl KeywordSet {
    /// Build a keyword set. Keywords are lowercased; empty or repeated
    /// keywords are rejected.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for keyword in keywords {
            let keyword = normalize(keyword.as_ref());
            if keyword.trim().is_empty() {
                return Err(Error::lexicon("keywords must not be empty"));
            }
            if !seen.insert(keyword.clone()) {
                return Err(Error::lexicon(format!("duplicate keyword: {keyword}")));
            }
            normalized.push(keyword);
        }

        // Standard semantics are required for overlapping iteration, which
        // is what lets "spark" and "sparking" both register in one pass.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&normalized)
            .map_err(|e| Error::lexicon(format!("Failed to build keyword matcher: {e}")))?;

        Ok(Self {
            keywords: normalized,
            matcher,
        })
    }

    /// Keywords contained in `normalized`, in set order
    pub fn matches_in<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        let mut hit = vec![false; self.keywords.len()];
        for m in self.matcher.find_overlapping_iter(normalized) {
            hit[m.pattern().as_usize()] = true;
        }

        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(keyword, hit)| hit.then_some(keyword.as_str()))
            .collect()
    }

    /// Number of distinct keywords contained in `normalized`
    pub fn count_in(&self, normalized: &str) -> usize {
        self.matches_in(normalized).len()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Ordered mapping from category to keywords.
///
/// Iteration order is registration order, which decides ties.
#[derive(Debug, Clone)]
pub struct CategoryLexicon {
    entries: Vec<(Category, KeywordSet)>,
}

impl CategoryLexicon {
    /// Build a lexicon from `(category, keywords)` pairs in priority order
    pub fn new<S: AsRef<str>>(entries: Vec<(Category, Vec<S>)>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(entries.len());

        for (category, keywords) in entries {
            if category == Category::General {
                return Err(Error::lexicon(
                    "general is the fallback category and cannot own keywords",
                ));
            }
            if !seen.insert(category) {
                return Err(Error::lexicon(format!("category {category} registered twice")));
            }
            let set = KeywordSet::new(keywords)
                .map_err(|e| Error::lexicon(format!("category {category}: {e}")))?;
            built.push((category, set));
        }

        Ok(Self { entries: built })
    }

    /// Shared built-in lexicon
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<CategoryLexicon>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let entries = vec![
                    (Category::Sanitation, SANITATION_KEYWORDS.to_vec()),
                    (Category::Infrastructure, INFRASTRUCTURE_KEYWORDS.to_vec()),
                    (Category::Electrical, ELECTRICAL_KEYWORDS.to_vec()),
                    (Category::Security, SECURITY_KEYWORDS.to_vec()),
                ];
                Arc::new(Self::new(entries).expect("built-in category lexicon is valid"))
            })
            .clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &KeywordSet)> {
        self.entries.iter().map(|(category, set)| (*category, set))
    }

    pub fn get(&self, category: Category) -> Option<&KeywordSet> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, set)| set)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Two-tier urgency vocabulary; no match at all means low urgency
#[derive(Debug, Clone)]
pub struct UrgencyLexicon {
    high: KeywordSet,
    medium: KeywordSet,
}

impl UrgencyLexicon {
    pub fn new<S: AsRef<str>>(high: Vec<S>, medium: Vec<S>) -> Result<Self> {
        Ok(Self {
            high: KeywordSet::new(high)
                .map_err(|e| Error::lexicon(format!("high urgency tier: {e}")))?,
            medium: KeywordSet::new(medium)
                .map_err(|e| Error::lexicon(format!("medium urgency tier: {e}")))?,
        })
    }

    /// Shared built-in lexicon
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<UrgencyLexicon>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(
                    Self::new(HIGH_URGENCY_KEYWORDS.to_vec(), MEDIUM_URGENCY_KEYWORDS.to_vec())
                        .expect("built-in urgency lexicon is valid"),
                )
            })
            .clone()
    }

    pub fn high(&self) -> &KeywordSet {
        &self.high
    }

    pub fn medium(&self) -> &KeywordSet {
        &self.medium
    }
}
