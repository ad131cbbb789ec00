// Copyright (C) 2025 The numplan Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read-only numbering-plan tables consumed by [`NumberPlanUtil`].
//!
//! The engine never loads or generates this data itself; a surrounding data
//! provider builds the tables once at startup and hands them over via shared
//! ownership. All patterns stored here are assumed to be pre-validated
//! regular expressions; a pattern that fails to compile is a data-integrity
//! fault of the provider, logged and treated as a non-match.
//!
//! [`NumberPlanUtil`]: super::numberplanutil::NumberPlanUtil

use std::collections::HashMap;

/// Validation patterns for one number category (general, fixed-line or
/// mobile): a full-match regex over the national significant number plus the
/// set of valid total digit lengths.
///
/// An empty `possible_lengths` set means all lengths are acceptable to the
/// pattern itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberDesc {
    pub national_number_pattern: Option<String>,
    pub possible_lengths: Vec<usize>,
}

impl NumberDesc {
    pub fn new(national_number_pattern: &str, possible_lengths: &[usize]) -> Self {
        Self {
            national_number_pattern: Some(national_number_pattern.to_owned()),
            possible_lengths: possible_lengths.to_vec(),
        }
    }
}

/// The numbering-plan rules for a single country.
///
/// Every field except `dial_code` and the three descriptors is optional;
/// absence means "this country has no such rule", never an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberingPlanDescriptor {
    /// The country dial code, e.g. "1" or "41". Never starts with '0'.
    pub dial_code: String,
    /// The prefix dialled before a national number for in-country calls,
    /// e.g. "0".
    pub national_prefix: String,
    /// Regex matched as a prefix of a locally-dialled national number to
    /// decide whether the local-to-international transform applies.
    pub national_prefix_for_parsing: Option<String>,
    /// Template the transform substitutes capture groups into; supports the
    /// positional placeholders `$1` and `$2`.
    pub national_prefix_transform_rule: Option<String>,
    /// Regex matching this country's international call prefix.
    pub international_prefix: Option<String>,
    /// Regex identifying this country by the first few digits of a national
    /// number; used to disambiguate countries sharing a dial code.
    pub leading_digits: Option<String>,
    pub general_desc: NumberDesc,
    pub fixed_line: NumberDesc,
    pub mobile: NumberDesc,
}

impl NumberingPlanDescriptor {
    pub fn new(dial_code: &str) -> Self {
        Self {
            dial_code: dial_code.to_owned(),
            ..Default::default()
        }
    }

    pub fn has_national_prefix(&self) -> bool {
        !self.national_prefix.is_empty()
    }
}

/// Immutable mapping from country id to its [`NumberingPlanDescriptor`].
#[derive(Debug, Default)]
pub struct NumberingPlanStore {
    country_to_descriptor_map: HashMap<String, NumberingPlanDescriptor>,
}

impl NumberingPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, country: &str, descriptor: NumberingPlanDescriptor) {
        self.country_to_descriptor_map
            .insert(country.to_owned(), descriptor);
    }

    pub fn lookup(&self, country: &str) -> Option<&NumberingPlanDescriptor> {
        self.country_to_descriptor_map.get(country)
    }
}

/// Immutable mapping from dial code to the countries using it.
///
/// The per-code country lists keep their insertion order; disambiguation
/// iterates them in exactly this order, so providers control which country
/// wins when several share a dial code and none can be told apart.
#[derive(Debug, Default)]
pub struct DialCodeIndex {
    dial_code_to_countries_map: HashMap<String, Vec<String>>,
}

impl DialCodeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dial_code: &str, country: &str) {
        self.dial_code_to_countries_map
            .entry(dial_code.to_owned())
            .or_default()
            .push(country.to_owned());
    }

    /// The countries sharing `dial_code`, in stored order. Empty when the
    /// dial code is unknown.
    pub fn countries_for_dial_code(&self, dial_code: &str) -> &[String] {
        self.dial_code_to_countries_map
            .get(dial_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_dial_code(&self, candidate: &str) -> bool {
        self.dial_code_to_countries_map.contains_key(candidate)
    }
}
