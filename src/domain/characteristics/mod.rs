//! Architecture quality characteristics: the standard catalog and the
//! validation of caller-supplied selections.

mod catalog;
mod characteristic;
mod tag;

pub use catalog::{
    CharacteristicCatalog, InputValidationError, StandardCharacteristic, MAX_TOP_CHARACTERISTICS,
    STANDARD_CATALOG,
};
pub use characteristic::{Characteristic, CharacteristicsInput};
pub use tag::{Category, CharacteristicTag};
