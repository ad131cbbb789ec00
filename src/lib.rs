mod interfaces;
mod numberplanutil;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use numberplanutil::{
    DialCodeIndex, ExtractionResult, NumberDesc, NumberPlanUtil, NumberingPlanDescriptor,
    NumberingPlanStore, PhoneNumberType,
};
