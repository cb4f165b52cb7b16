use placetree_test_utils::prelude::*;

use crate::{
    data::alternative_name::AlternativeNameRepository,
    model::alternative_name::NewAlternativeName,
};

mod associate;
mod create;

fn new_alternative_name(name: &str, language: &str) -> NewAlternativeName {
    NewAlternativeName {
        name: name.to_string(),
        language: language.to_string(),
        is_preferred: false,
        is_short: false,
        is_colloquial: false,
        active: true,
        geonames: true,
    }
}
