//! Fixture numbering-plan tables for tests.
//!
//! The patterns are simplified versions of real-world rules, small enough to
//! reason about in assertions but shaped like the data a real provider would
//! load: shared dial codes, optional prefixes, transform rules.

use std::sync::Arc;

use crate::{
    DialCodeIndex, NumberDesc, NumberPlanUtil, NumberingPlanDescriptor, NumberingPlanStore,
};

pub struct Country;

#[allow(unused)]
impl Country {
    pub fn us() -> &'static str {
        "US"
    }
    pub fn ca() -> &'static str {
        "CA"
    }
    pub fn ch() -> &'static str {
        "CH"
    }
    pub fn gb() -> &'static str {
        "GB"
    }
    pub fn ar() -> &'static str {
        "AR"
    }
    pub fn kz() -> &'static str {
        "KZ"
    }
}

fn us_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "1".to_owned(),
        national_prefix: "1".to_owned(),
        international_prefix: Some("011".to_owned()),
        general_desc: NumberDesc::new(r"[2-9]\d{9}", &[10]),
        fixed_line: NumberDesc::new(r"[2-9]\d{9}", &[10]),
        mobile: NumberDesc::new(r"[2-9]\d{9}", &[10]),
        ..Default::default()
    }
}

fn ca_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "1".to_owned(),
        national_prefix: "1".to_owned(),
        international_prefix: Some("011".to_owned()),
        leading_digits: Some("(?:204|226|236|249)".to_owned()),
        general_desc: NumberDesc::new(r"(?:204|226|236|249)\d{7}", &[10]),
        fixed_line: NumberDesc::new(r"(?:204|226|236|249)\d{7}", &[10]),
        mobile: NumberDesc::new(r"(?:204|226|236|249)\d{7}", &[10]),
        ..Default::default()
    }
}

fn ch_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "41".to_owned(),
        national_prefix: "0".to_owned(),
        international_prefix: Some("00".to_owned()),
        general_desc: NumberDesc::new(r"[2-9]\d{8}", &[9]),
        fixed_line: NumberDesc::new(r"[2-6]\d{8}", &[9]),
        mobile: NumberDesc::new(r"7[5-9]\d{7}", &[9]),
        ..Default::default()
    }
}

fn gb_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "44".to_owned(),
        national_prefix: "0".to_owned(),
        international_prefix: Some("00".to_owned()),
        general_desc: NumberDesc::new(r"[1-9]\d{8,9}", &[9, 10]),
        fixed_line: NumberDesc::new(r"2\d{9}", &[10]),
        mobile: NumberDesc::new(r"7[4-9]\d{8}", &[10]),
        ..Default::default()
    }
}

// The transform rule mirrors the Argentinian mobile-token scheme: a local
// "<area>15<subscriber>" form becomes "9<area><subscriber>".
fn ar_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "54".to_owned(),
        national_prefix: "0".to_owned(),
        international_prefix: Some("00".to_owned()),
        national_prefix_for_parsing: Some(r"(11|22|33)15(\d{6})".to_owned()),
        national_prefix_transform_rule: Some("9$1$2".to_owned()),
        general_desc: NumberDesc::new(r"9(?:11|22|33)\d{6}", &[9]),
        fixed_line: NumberDesc::new(r"9(?:11|22|33)\d{6}", &[9]),
        mobile: NumberDesc::new(r"9(?:11|22|33)\d{6}", &[9]),
        ..Default::default()
    }
}

// A parsing pattern without a transform rule: matching it strips nothing
// beyond the literal national prefix.
fn kz_descriptor() -> NumberingPlanDescriptor {
    NumberingPlanDescriptor {
        dial_code: "7".to_owned(),
        national_prefix: "8".to_owned(),
        international_prefix: Some("810".to_owned()),
        national_prefix_for_parsing: Some("8".to_owned()),
        general_desc: NumberDesc::new(r"7\d{9}", &[10]),
        fixed_line: NumberDesc::new(r"7[01]\d{8}", &[10]),
        mobile: NumberDesc::new(r"7[67]\d{8}", &[10]),
        ..Default::default()
    }
}

pub fn get_plan_util() -> NumberPlanUtil {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut store = NumberingPlanStore::new();
    store.insert(Country::us(), us_descriptor());
    store.insert(Country::ca(), ca_descriptor());
    store.insert(Country::ch(), ch_descriptor());
    store.insert(Country::gb(), gb_descriptor());
    store.insert(Country::ar(), ar_descriptor());
    store.insert(Country::kz(), kz_descriptor());

    let mut index = DialCodeIndex::new();
    // CA is listed before US so that its leading-digits rule gets a chance;
    // US acts as the catch-all for the shared dial code 1.
    index.insert("1", Country::ca());
    index.insert("1", Country::us());
    index.insert("41", Country::ch());
    index.insert("44", Country::gb());
    index.insert("54", Country::ar());
    index.insert("7", Country::kz());

    NumberPlanUtil::new(Arc::new(store), Arc::new(index))
}
