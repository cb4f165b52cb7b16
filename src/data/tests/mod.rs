mod alternative_name;
mod autocomplete;
mod place;
