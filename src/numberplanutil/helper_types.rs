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

use std::borrow::Cow;

/// Outcome of a single extraction step.
///
/// `remainder` is the input with at most a leading prefix removed; it only
/// becomes owned when the local-to-international transform rewrote the
/// digits. `matched_prefix` is the exact leading substring that was removed,
/// or `None` when the step consumed nothing it needs to report (note that
/// stripping a leading '+' is deliberately not reported as a prefix).
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractionResult<'a> {
    pub remainder: Cow<'a, str>,
    pub matched_prefix: Option<&'a str>,
}

impl<'a> ExtractionResult<'a> {
    /// A step that found nothing to strip.
    pub fn unchanged(number: &'a str) -> Self {
        Self {
            remainder: Cow::Borrowed(number),
            matched_prefix: None,
        }
    }
}
