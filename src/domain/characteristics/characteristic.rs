//! Characteristic records supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Rating;

use super::tag::{Category, CharacteristicTag};

/// One architecture quality characteristic as supplied in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    /// Unique identifier within one input document.
    pub id: String,
    /// Display name; one of the 14 standard names or a custom one.
    pub name: String,
    pub category: Category,
    /// Candidate for analysis.
    #[serde(default)]
    pub selected: bool,
    /// One of the prioritized drivers ("top" characteristics, at most 7).
    #[serde(default)]
    pub is_top: bool,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl Characteristic {
    /// Creates a selected characteristic with the tag's canonical name and
    /// category.
    pub fn standard(id: impl Into<String>, tag: &CharacteristicTag, rating: Rating) -> Self {
        Self {
            id: id.into(),
            name: tag.name().to_string(),
            category: tag.category(),
            selected: true,
            is_top: false,
            rating,
            notes: String::new(),
            is_custom: !tag.is_standard(),
        }
    }

    /// Marks this characteristic as a top driver.
    pub fn as_top(mut self) -> Self {
        self.is_top = true;
        self
    }

    /// The dispatch tag derived from the name.
    pub fn tag(&self) -> CharacteristicTag {
        CharacteristicTag::parse(&self.name)
    }
}

/// The characteristics input document: project metadata, characteristic
/// records, and the prioritized top list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicsInput {
    pub project: String,
    #[serde(default)]
    pub description: String,
    pub characteristics: Vec<Characteristic>,
    /// Ids of the characteristics flagged `isTop`, in any order.
    #[serde(default)]
    pub top_characteristics: Vec<String>,
}

impl CharacteristicsInput {
    /// Characteristics selected for analysis, in input order.
    pub fn selected(&self) -> impl Iterator<Item = &Characteristic> {
        self.characteristics.iter().filter(|c| c.selected)
    }

    /// Characteristics flagged as top drivers.
    pub fn top(&self) -> impl Iterator<Item = &Characteristic> {
        self.characteristics.iter().filter(|c| c.is_top)
    }
}
