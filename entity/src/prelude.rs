pub use super::alternative_name::Entity as AlternativeName;
pub use super::city::Entity as City;
pub use super::continent::Entity as Continent;
pub use super::country::Entity as Country;
pub use super::country_neighbour::Entity as CountryNeighbour;
pub use super::district::Entity as District;
pub use super::place::Entity as Place;
pub use super::place_alternative_name::Entity as PlaceAlternativeName;
pub use super::postal_code::Entity as PostalCode;
pub use super::region::Entity as Region;
pub use super::subregion::Entity as Subregion;
