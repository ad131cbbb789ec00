mod helper_constants;
pub mod enums;
pub mod helper_types;
pub mod metadata;
pub mod numberplanutil;

pub use enums::PhoneNumberType;
pub use helper_types::ExtractionResult;
pub use metadata::{DialCodeIndex, NumberDesc, NumberingPlanDescriptor, NumberingPlanStore};
pub use numberplanutil::NumberPlanUtil;
