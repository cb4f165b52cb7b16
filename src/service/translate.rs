use sea_orm::DatabaseConnection;

use crate::{
    data::alternative_name::AlternativeNameRepository,
    error::Error,
    model::{
        alternative_name::AlternativeName,
        place::{Place, SlugPath},
    },
    service::hierarchy::HierarchyResolver,
};

/// Separator between the names of a chain in a full name.
pub const FULL_NAME_SEPARATOR: &str = ", ";

pub struct NameTranslator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NameTranslator<'a> {
    /// Creates a new instance of [`NameTranslator`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Name of a place in the given language, falling back to its canonical name.
    pub async fn translate(&self, place: &Place, language: &str) -> Result<String, Error> {
        let names = AlternativeNameRepository::new(self.db)
            .find_for_place(place.id)
            .await?;

        Ok(pick_translation(&place.name, &names, language).to_string())
    }

    /// Translated names of the whole chain joined root first, e.g.
    /// `Europa, Franca, Paris`.
    pub async fn translated_full_name(
        &self,
        place: &Place,
        language: &str,
    ) -> Result<String, Error> {
        let chain = HierarchyResolver::new(self.db).resolve(place).await?;
        let names = self.chain_alternative_names(&chain).await?;

        Ok(full_name(&chain, &names, language))
    }

    pub async fn absolute_slug(&self, place: &Place) -> Result<SlugPath, Error> {
        let chain = HierarchyResolver::new(self.db).resolve(place).await?;

        Ok(SlugPath::from_chain(&chain))
    }

    /// Alternative names of every place in a chain, in chain order.
    ///
    /// Loaded once so the same chain can be rendered in several languages.
    pub async fn chain_alternative_names(
        &self,
        chain: &[Place],
    ) -> Result<Vec<Vec<AlternativeName>>, Error> {
        let alternative_name_repo = AlternativeNameRepository::new(self.db);

        let mut names = Vec::with_capacity(chain.len());
        for place in chain {
            names.push(alternative_name_repo.find_for_place(place.id).await?);
        }

        Ok(names)
    }
}

/// Renders a chain in one language from preloaded alternative names.
pub fn full_name(chain: &[Place], names: &[Vec<AlternativeName>], language: &str) -> String {
    chain
        .iter()
        .zip(names)
        .map(|(place, names)| pick_translation(&place.name, names, language))
        .collect::<Vec<_>>()
        .join(FULL_NAME_SEPARATOR)
}

/// Picks the best visible alternative name for a language.
///
/// Languages are compared on their first two characters, ignoring ASCII case. A preferred
/// name wins over a plain match; ties go to the lowest ID. Without a match the canonical
/// name is returned.
pub fn pick_translation<'n>(
    canonical: &'n str,
    names: &'n [AlternativeName],
    language: &str,
) -> &'n str {
    let wanted = language_prefix(language);

    names
        .iter()
        .filter(|n| n.is_visible() && language_prefix(&n.language) == wanted)
        .min_by_key(|n| (!n.is_preferred, n.id))
        .map(|n| n.name.as_str())
        .unwrap_or(canonical)
}

fn language_prefix(language: &str) -> String {
    language
        .chars()
        .take(2)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
