//! Place domain model.
//!
//! A [`Place`] carries the columns shared by every subtype plus a [`PlaceDetails`] tagged
//! union. Subtype fields are only reachable by matching on the variant, and the parent
//! relation of each subtype is exposed through [`PlaceDetails::parent`].

use serde::{Deserialize, Serialize};

pub use entity::place::PlaceKind;

/// A node in the geographic hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: i32,
    /// Canonical ASCII display name.
    pub name: String,
    /// URL path segment, unique only within the parent's namespace.
    pub slug: String,
    pub ranking: i32,
    pub active: bool,
    pub deleted: bool,
    /// Still matches the bulk-imported source. Cleared by every edit.
    pub geonames: bool,
    pub details: PlaceDetails,
}

/// Fields for a place that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlace {
    pub name: String,
    pub slug: String,
    pub ranking: i32,
    pub active: bool,
    pub geonames: bool,
    pub details: PlaceDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaceDetails {
    Continent(ContinentDetails),
    Country(CountryDetails),
    Region(RegionDetails),
    Subregion(SubregionDetails),
    City(CityDetails),
    District(DistrictDetails),
    PostalCode(PostalCodeDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinentDetails {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetails {
    /// ISO 3166-1 alpha-2
    pub code: String,
    /// ISO 3166-1 alpha-3
    pub code3: String,
    pub population: i64,
    pub area: Option<i64>,
    pub currency: Option<String>,
    pub currency_name: Option<String>,
    pub languages: Option<String>,
    pub phone: String,
    /// Code of the parent continent.
    pub continent: String,
    pub tld: String,
    pub capital: String,
    /// Place IDs of neighbouring countries.
    #[serde(default)]
    pub neighbours: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDetails {
    pub name_std: String,
    pub code: String,
    pub country_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubregionDetails {
    pub name_std: String,
    pub code: String,
    pub region_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityDetails {
    pub name_std: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
    /// A city without a region ends its own hierarchy chain.
    pub region_id: Option<i32>,
    pub subregion_id: Option<i32>,
    pub country_id: i32,
    pub elevation: Option<i32>,
    pub feature_code: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictDetails {
    pub name_std: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
    pub city_id: i32,
}

/// Postal codes hang directly off their country; the intermediate levels are kept as plain
/// strings since those places may not exist in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalCodeDetails {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_id: i32,
    pub region_name: Option<String>,
    pub subregion_name: Option<String>,
    pub district_name: Option<String>,
}

/// The parent edge defined by a place's subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef<'a> {
    /// No parent, the place is the root of its chain.
    Root,
    /// Countries reference their continent by code rather than by ID.
    ContinentCode(&'a str),
    /// Direct reference to a place that must be of the given kind.
    Place { id: i32, kind: PlaceKind },
}

/// Slug path of a place: every slug of its chain joined root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugPath {
    /// Joined with `/`, e.g. `europe/france/paris`.
    pub path: String,
    /// Joined with `-`, e.g. `europe-france-paris`.
    pub flat: String,
}

impl SlugPath {
    /// Builds the path from a root-first chain.
    pub fn from_chain(chain: &[Place]) -> Self {
        let slugs: Vec<&str> = chain.iter().map(|p| p.slug.as_str()).collect();

        Self {
            path: slugs.join("/"),
            flat: slugs.join("-"),
        }
    }
}

impl PlaceDetails {
    pub fn kind(&self) -> PlaceKind {
        match self {
            PlaceDetails::Continent(_) => PlaceKind::Continent,
            PlaceDetails::Country(_) => PlaceKind::Country,
            PlaceDetails::Region(_) => PlaceKind::Region,
            PlaceDetails::Subregion(_) => PlaceKind::Subregion,
            PlaceDetails::City(_) => PlaceKind::City,
            PlaceDetails::District(_) => PlaceKind::District,
            PlaceDetails::PostalCode(_) => PlaceKind::PostalCode,
        }
    }

    pub fn parent(&self) -> ParentRef<'_> {
        match self {
            PlaceDetails::Continent(_) => ParentRef::Root,
            PlaceDetails::Country(c) => ParentRef::ContinentCode(&c.continent),
            PlaceDetails::Region(r) => ParentRef::Place {
                id: r.country_id,
                kind: PlaceKind::Country,
            },
            PlaceDetails::Subregion(s) => ParentRef::Place {
                id: s.region_id,
                kind: PlaceKind::Region,
            },
            PlaceDetails::City(c) => match c.region_id {
                Some(id) => ParentRef::Place {
                    id,
                    kind: PlaceKind::Region,
                },
                None => ParentRef::Root,
            },
            PlaceDetails::District(d) => ParentRef::Place {
                id: d.city_id,
                kind: PlaceKind::City,
            },
            PlaceDetails::PostalCode(p) => ParentRef::Place {
                id: p.country_id,
                kind: PlaceKind::Country,
            },
        }
    }

    /// The subtype's own code, for the subtypes that have one.
    pub fn code(&self) -> Option<&str> {
        match self {
            PlaceDetails::Continent(c) => Some(&c.code),
            PlaceDetails::Country(c) => Some(&c.code),
            PlaceDetails::Region(r) => Some(&r.code),
            PlaceDetails::Subregion(s) => Some(&s.code),
            PlaceDetails::PostalCode(p) => Some(&p.code),
            PlaceDetails::City(_) | PlaceDetails::District(_) => None,
        }
    }
}

impl Place {
    pub fn kind(&self) -> PlaceKind {
        self.details.kind()
    }

    pub fn parent(&self) -> ParentRef<'_> {
        self.details.parent()
    }

    /// Whether the fields embedded into descendants' display strings differ.
    pub fn display_changed(&self, other: &Place) -> bool {
        self.name != other.name || self.slug != other.slug || self.parent() != other.parent()
    }
}
