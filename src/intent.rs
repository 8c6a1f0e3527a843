// ABOUTME: Intent classification and destination term extraction for user queries
// ABOUTME: Pure functions over fixed keyword tables, no scoring or multi-intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Rule-based query understanding. A query maps to exactly one [`Intent`]
//! via case-insensitive substring checks against a priority-ordered
//! keyword table; destination names are extracted against a fixed list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling category derived from a user query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Hotel / accommodation lookup
    Hotel,
    /// Vehicle / transport lookup
    Vehicle,
    /// Activity / experience lookup
    Activity,
    /// Travel package lookup (the default)
    Package,
}

impl Intent {
    /// Lowercase name, matching the wire/serde representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Vehicle => "vehicle",
            Self::Activity => "activity",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority-ordered keyword table. The first category whose keyword list
/// matches wins; queries matching nothing fall through to `Package`.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Hotel, &["hotel", "stay", "accommodation", "resort"]),
    (Intent::Vehicle, &["vehicle", "car", "transport", "taxi"]),
    (
        Intent::Activity,
        &["activity", "tour", "things to do", "adventure", "experience"],
    ),
];

/// Destinations recognized by the extractor, in output order
pub const KNOWN_DESTINATIONS: &[&str] = &[
    "goa",
    "kerala",
    "manali",
    "bali",
    "kodaikanal",
    "ooty",
    "rajasthan",
    "andaman",
    "himachal",
    "shimla",
    "darjeeling",
];

/// Classify a free-text query into one handling category.
#[must_use]
pub fn classify(query: &str) -> Intent {
    let query_lower = query.to_lowercase();
    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|keyword| query_lower.contains(keyword)) {
            return *intent;
        }
    }
    Intent::Package
}

/// Extract known destination names from a query.
///
/// Matches are joined by a single space in the fixed list order (not the
/// order of appearance in the query). When nothing matches, the original
/// query is returned unchanged so it can serve as a raw search term.
#[must_use]
pub fn extract_search_terms(query: &str) -> String {
    let query_lower = query.to_lowercase();
    let found: Vec<&str> = KNOWN_DESTINATIONS
        .iter()
        .copied()
        .filter(|destination| query_lower.contains(destination))
        .collect();

    if found.is_empty() {
        query.to_owned()
    } else {
        found.join(" ")
    }
}
