//! Distinct values available for each filter

use crate::record::{is_known, FilterField, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selectable values per field. `end_years` is newest first, the rest
/// are ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub end_years: Vec<String>,
    pub topics: Vec<String>,
    pub sectors: Vec<String>,
    pub regions: Vec<String>,
    pub pests: Vec<String>,
    pub sources: Vec<String>,
    pub countries: Vec<String>,
    pub cities: Vec<String>,
}

fn distinct(records: &[Record], field: FilterField) -> Vec<String> {
    records
        .iter()
        .map(|r| field.value_of(r))
        .filter(|v| is_known(v))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn collect_filter_options(records: &[Record]) -> FilterOptions {
    let mut end_years = distinct(records, FilterField::EndYear);
    end_years.reverse();

    FilterOptions {
        end_years,
        topics: distinct(records, FilterField::Topic),
        sectors: distinct(records, FilterField::Sector),
        regions: distinct(records, FilterField::Region),
        pests: distinct(records, FilterField::Pestle),
        sources: distinct(records, FilterField::Source),
        countries: distinct(records, FilterField::Country),
        cities: distinct(records, FilterField::City),
    }
}
