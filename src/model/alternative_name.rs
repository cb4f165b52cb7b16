use serde::{Deserialize, Serialize};

/// A name for a place in a specific language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeName {
    pub id: i32,
    pub name: String,
    /// Free-form tag, matched on its first two characters (ISO 639-1).
    pub language: String,
    pub is_preferred: bool,
    pub is_short: bool,
    pub is_colloquial: bool,
    pub active: bool,
    pub deleted: bool,
    pub geonames: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlternativeName {
    pub name: String,
    pub language: String,
    pub is_preferred: bool,
    pub is_short: bool,
    pub is_colloquial: bool,
    pub active: bool,
    pub geonames: bool,
}

impl AlternativeName {
    /// Whether the two versions could translate a place differently.
    pub fn display_changed(&self, other: &AlternativeName) -> bool {
        self.name != other.name
            || self.language != other.language
            || self.is_preferred != other.is_preferred
            || self.active != other.active
            || self.deleted != other.deleted
    }

    pub fn is_visible(&self) -> bool {
        self.active && !self.deleted
    }
}

impl From<entity::alternative_name::Model> for AlternativeName {
    fn from(model: entity::alternative_name::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            language: model.language,
            is_preferred: model.is_preferred,
            is_short: model.is_short,
            is_colloquial: model.is_colloquial,
            active: model.active,
            deleted: model.deleted,
            geonames: model.geonames,
        }
    }
}
