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

use strum::EnumIter;

/// Categorizes national numbers based on their primary use.
///
/// A number that matches no category for its country is simply
/// unclassified, represented as `None` at the API boundary rather than as a
/// variant here.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// Numbers assigned to wireless devices like mobile phones.
    Mobile,
}
