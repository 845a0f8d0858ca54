// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// Display icon attached to a category. Serialized under the ionicon name the
/// renderer expects ("car-sport", "bag-handle", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Restaurant,
    CarSport,
    BagHandle,
    Ticket,
    Receipt,
    Medkit,
    Home,
    Pricetag,
}

impl IconTag {
    pub fn name(self) -> &'static str {
        match self {
            IconTag::Restaurant => "restaurant",
            IconTag::CarSport => "car-sport",
            IconTag::BagHandle => "bag-handle",
            IconTag::Ticket => "ticket",
            IconTag::Receipt => "receipt",
            IconTag::Medkit => "medkit",
            IconTag::Home => "home",
            IconTag::Pricetag => "pricetag",
        }
    }
}

impl std::fmt::Display for IconTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Ordered: substrings overlap, first match wins. A category literally named
// "Entertainment" must hit the "ent" rule before falling through.
const RULES: &[(&[&str], IconTag)] = &[
    (&["food", "eat", "lunch"], IconTag::Restaurant),
    (&["transport", "uber", "taxi"], IconTag::CarSport),
    (&["shop", "buy"], IconTag::BagHandle),
    (&["ent", "fun", "movie"], IconTag::Ticket),
    (&["bill", "util"], IconTag::Receipt),
    (&["health", "doctor"], IconTag::Medkit),
    (&["home", "rent"], IconTag::Home),
];

/// Map a category name to its display icon. Total: unknown names get the
/// generic price tag.
pub fn classify(category: &str) -> IconTag {
    let lower = category.to_lowercase();
    for (keywords, tag) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *tag;
        }
    }
    IconTag::Pricetag
}
