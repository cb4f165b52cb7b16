use placetree_test_utils::prelude::*;

use crate::{
    data::autocomplete::AutocompleteRepository,
    model::autocomplete::{AutocompleteRow, UpsertMode},
};

mod search_prefix;
mod upsert_many;

fn row(id: i32, name: &str, slug: &str, ranking: i32) -> AutocompleteRow {
    AutocompleteRow {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        active: true,
        deleted: false,
        ranking,
    }
}
