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

use std::{borrow::Cow, cmp::min, sync::Arc};

use log::{error, trace};
use regex::Regex;

use crate::{
    interfaces::MatcherApi,
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexConsume,
    regexp_cache::RegexCache,
};

use super::{
    enums::PhoneNumberType,
    helper_constants::{
        COMMON_INTERNATIONAL_PREFIXES, MAX_DIAL_CODE_LENGTH, MIN_LENGTH_FOR_NSN, PLUS_SIGN,
    },
    helper_types::ExtractionResult,
    metadata::{DialCodeIndex, NumberDesc, NumberingPlanStore},
};

/// Decomposes digit strings into their structural components and classifies
/// the remaining national number.
///
/// All operations are pure functions of their arguments and the two
/// read-only tables handed in at construction; the engine holds no mutable
/// state and is safe to share between threads.
pub struct NumberPlanUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Cache of compiled patterns from the numbering-plan tables.
    regexp_cache: RegexCache,

    /// A mapping from a country id to the numbering-plan rules for that
    /// country.
    plan_store: Arc<NumberingPlanStore>,

    /// A mapping from a dial code to the countries using it. Note several
    /// countries may share one dial code, e.g. the NANPA countries all share
    /// the dial code 1.
    dial_code_index: Arc<DialCodeIndex>,
}

impl NumberPlanUtil {
    pub fn new(plan_store: Arc<NumberingPlanStore>, dial_code_index: Arc<DialCodeIndex>) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            regexp_cache: RegexCache::new(),
            plan_store,
            dial_code_index,
        }
    }

    /// Strips the country dial code from the start of `number`, which is
    /// expected to have had any '+' and international prefix removed
    /// already.
    ///
    /// Candidate prefixes are tried in increasing length order and the first
    /// one present in the dial-code index wins, so a 1-digit code shadows
    /// any longer code it is a prefix of. Dial codes never start with '0',
    /// so a number with a leading zero yields no match.
    pub fn extract_dial_code<'a>(&self, number: &'a str) -> ExtractionResult<'a> {
        // Dial codes are plain ASCII digits; anything else cannot match and
        // would break the byte-wise candidate slicing below.
        if !number.is_ascii() || number.starts_with('0') {
            return ExtractionResult::unchanged(number);
        }
        let max_candidate_length = min(number.len(), MAX_DIAL_CODE_LENGTH);
        for length in 1..=max_candidate_length {
            let candidate = &number[..length];
            if self.dial_code_index.contains_dial_code(candidate) {
                return ExtractionResult {
                    remainder: Cow::Borrowed(&number[length..]),
                    matched_prefix: Some(candidate),
                };
            }
        }
        ExtractionResult::unchanged(number)
    }

    /// Strips the international call prefix from the start of `number`.
    ///
    /// A leading '+' already marks the number as international: it is
    /// dropped without being recorded as a prefix, since it is a marker and
    /// not dialled digits. Otherwise, when a default country is known its
    /// own prefix pattern decides; with no country to consult, the common
    /// "00"/"011" prefixes are tried.
    pub fn extract_international_prefix<'a>(
        &self,
        number: &'a str,
        default_country: Option<&str>,
    ) -> ExtractionResult<'a> {
        if let Some(rest) = number.strip_prefix(PLUS_SIGN) {
            return ExtractionResult {
                remainder: Cow::Borrowed(rest),
                matched_prefix: None,
            };
        }
        if let Some(country) = default_country {
            return self.extract_international_prefix_from_default_country(number, country);
        }
        for prefix in COMMON_INTERNATIONAL_PREFIXES {
            if number.starts_with(prefix) {
                return ExtractionResult {
                    remainder: Cow::Borrowed(&number[prefix.len()..]),
                    matched_prefix: Some(&number[..prefix.len()]),
                };
            }
        }
        ExtractionResult::unchanged(number)
    }

    /// Strips the international prefix of `country` from the start of
    /// `number`.
    ///
    /// One trunk-separator character following the prefix is dropped along
    /// with it, clamped at the end of the string. No match means the prefix
    /// is assumed absent, not that the number is malformed.
    pub fn extract_international_prefix_from_default_country<'a>(
        &self,
        number: &'a str,
        country: &str,
    ) -> ExtractionResult<'a> {
        let Some(descriptor) = self.plan_store.lookup(country) else {
            return ExtractionResult::unchanged(number);
        };
        let Some(pattern) = descriptor.international_prefix.as_deref() else {
            return ExtractionResult::unchanged(number);
        };
        let Some(regex) = self.get_plan_regex(pattern) else {
            return ExtractionResult::unchanged(number);
        };
        let Some(found) = regex.find_start(number) else {
            return ExtractionResult::unchanged(number);
        };
        // The separator may be any character, so the skip has to advance by
        // its full width; at end of input there is nothing to skip.
        let separator_width = number[found.end()..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        ExtractionResult {
            remainder: Cow::Borrowed(&number[found.end() + separator_width..]),
            matched_prefix: Some(found.as_str()),
        }
    }

    /// Strips the national prefix of `country` from the start of
    /// `national_number` and brings the rest into internationally valid
    /// form.
    ///
    /// `matched_prefix` reflects only the literal prefix strip; the
    /// local-to-international transform is applied to the remainder
    /// regardless of whether a prefix was present, and never shows up in the
    /// prefix field.
    pub fn extract_national_prefix<'a>(
        &self,
        national_number: &'a str,
        country: &str,
    ) -> ExtractionResult<'a> {
        let mut remainder = national_number;
        let mut matched_prefix = None;
        if let Some(descriptor) = self.plan_store.lookup(country) {
            if descriptor.has_national_prefix() {
                if let Some(rest) = national_number.strip_prefix(&descriptor.national_prefix) {
                    matched_prefix = Some(&national_number[..descriptor.national_prefix.len()]);
                    remainder = rest;
                }
            }
        }
        ExtractionResult {
            remainder: self.transform_local_nsn_to_international(remainder, country),
            matched_prefix,
        }
    }

    /// Picks the single country a national number belongs to when its dial
    /// code is shared by several.
    ///
    /// Candidates are tried in the dial-code index's stored order, which
    /// keeps the result deterministic. For each candidate the national
    /// prefix is stripped, the country's leading-digits pattern is tried
    /// first, and classification against its numbering plan serves as the
    /// fallback. `None` means the ambiguity could not be resolved; it is
    /// never silently defaulted to the first candidate.
    pub fn extract_country_of_national_number(
        &self,
        national_number: &str,
        dial_code: &str,
    ) -> Option<&str> {
        let candidates = self.dial_code_index.countries_for_dial_code(dial_code);
        if candidates.len() == 1 {
            return candidates.first().map(String::as_str);
        }
        for country in candidates {
            let Some(descriptor) = self.plan_store.lookup(country) else {
                continue;
            };
            let mut stripped = national_number;
            if descriptor.has_national_prefix() {
                if let Some(rest) = stripped.strip_prefix(&descriptor.national_prefix) {
                    stripped = rest;
                }
            }
            if let Some(pattern) = descriptor.leading_digits.as_deref() {
                if let Some(regex) = self.get_plan_regex(pattern) {
                    if regex.matches_start(stripped) {
                        trace!(
                            "Country {country} selected for '{national_number}' by leading digits"
                        );
                        return Some(country.as_str());
                    }
                }
            }
            let normalized = self.transform_local_nsn_to_international(stripped, country);
            if self.get_type(&normalized, country).is_some() {
                trace!("Country {country} selected for '{national_number}' by classification");
                return Some(country.as_str());
            }
        }
        trace!("No country determined for '{national_number}' with dial code {dial_code}");
        None
    }

    /// Determines the type of a national number that has had its national
    /// prefix removed and the local-to-international transform applied.
    ///
    /// `None` means the number is unclassified for this country, not that
    /// anything went wrong.
    pub fn get_type(&self, national_number: &str, country: &str) -> Option<PhoneNumberType> {
        if national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("Number '{national_number}' too short to classify");
            return None;
        }
        let descriptor = self.plan_store.lookup(country)?;
        if !self.is_number_matching_desc(national_number, &descriptor.general_desc) {
            trace!(
                "Number '{national_number}' unclassified - doesn't match the general pattern of {country}"
            );
            return None;
        }
        if self.is_number_matching_desc(national_number, &descriptor.fixed_line) {
            trace!("Number '{national_number}' is a fixed line number.");
            return Some(PhoneNumberType::FixedLine);
        }
        if self.is_number_matching_desc(national_number, &descriptor.mobile) {
            // Mobile matches are reported as fixed-line: the two branches
            // are deliberately identical.
            // TODO: return PhoneNumberType::Mobile here once callers are
            // ready to distinguish the two categories.
            trace!("Number '{national_number}' matches the mobile pattern.");
            return Some(PhoneNumberType::FixedLine);
        }
        trace!("Number '{national_number}' unclassified - doesn't match any specific type pattern.");
        None
    }

    /// Converts a locally-dialled national number into its internationally
    /// valid form using the country's prefix-transform rule.
    ///
    /// Countries without a national-prefix-for-parsing pattern, inputs the
    /// pattern does not match, and matches that captured no groups all pass
    /// through unchanged. At most two capture groups are substituted into
    /// the `$1`/`$2` placeholders of the transform template.
    pub fn transform_local_nsn_to_international<'a>(
        &self,
        national_number: &'a str,
        country: &str,
    ) -> Cow<'a, str> {
        let Some(descriptor) = self.plan_store.lookup(country) else {
            return Cow::Borrowed(national_number);
        };
        let Some(pattern) = descriptor.national_prefix_for_parsing.as_deref() else {
            return Cow::Borrowed(national_number);
        };
        let Some(regex) = self.get_plan_regex(pattern) else {
            return Cow::Borrowed(national_number);
        };
        let Some(captures) = regex.captures_start(national_number) else {
            return Cow::Borrowed(national_number);
        };
        let Some(template) = descriptor.national_prefix_transform_rule.as_deref() else {
            // A parsing pattern without a transform rule means "strip
            // nothing beyond what was already removed".
            return Cow::Borrowed(national_number);
        };
        let Some(group_one) = captures.get(1) else {
            return Cow::Borrowed(national_number);
        };
        let mut transformed = template.replace("$1", group_one.as_str());
        if let Some(group_two) = captures.get(2) {
            transformed = transformed.replace("$2", group_two.as_str());
        }
        Cow::Owned(transformed)
    }

    fn is_number_matching_desc(&self, national_number: &str, number_desc: &NumberDesc) -> bool {
        // Check possible lengths first to avoid running the validation
        // pattern when they can't match.
        let actual_length = national_number.len();
        if !number_desc.possible_lengths.is_empty()
            && !number_desc.possible_lengths.contains(&actual_length)
        {
            return false;
        }
        self.matcher_api
            .match_national_number(national_number, number_desc, false)
    }

    /// Compiles a pattern from the numbering-plan tables. Patterns are
    /// pre-validated by the data provider, so a failure here is a
    /// data-integrity fault: it is logged and degrades to "no match".
    fn get_plan_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        match self.regexp_cache.get_regex(pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                error!("Invalid pattern in numbering-plan data: {err}");
                None
            }
        }
    }
}
