//! Curated catalog browsing

use crate::backends::{CommandRunner, WingetManager};
use crate::commands::print_records;
use crate::core::catalog::Catalog;
use crate::core::types::PackageRecord;
use crate::error::{PkgdeckError, Result};
use crate::project_identity;
use crate::ui as output;
use crate::utils::machine_output;
use std::collections::BTreeMap;

pub struct CatalogOptions {
    pub category: Option<String>,
    pub filter: Option<String>,
    pub with_search: Option<String>,
    pub json: bool,
}

/// Catalog entries grouped by sorted category, narrowed by category and text filter.
/// Categories left empty by the filter are dropped.
pub(crate) fn select_groups<'a>(
    catalog: &'a Catalog,
    category: Option<&str>,
    filter: Option<&str>,
) -> Result<BTreeMap<&'a str, Vec<&'a PackageRecord>>> {
    if let Some(wanted) = category
        && !catalog
            .categories()
            .iter()
            .any(|c| c.eq_ignore_ascii_case(wanted))
    {
        return Err(PkgdeckError::Other(format!(
            "Unknown category '{}'. Use `{}` to list them.",
            wanted,
            project_identity::cli_with("categories")
        )));
    }

    let needle = filter.unwrap_or("");
    let groups = catalog
        .by_category()
        .into_iter()
        .filter(|(name, _)| category.is_none_or(|wanted| name.eq_ignore_ascii_case(wanted)))
        .map(|(name, entries)| {
            let kept: Vec<&PackageRecord> =
                entries.into_iter().filter(|e| e.matches(needle)).collect();
            (name, kept)
        })
        .filter(|(_, entries)| !entries.is_empty())
        .collect();

    Ok(groups)
}

pub fn run<R: CommandRunner>(
    options: CatalogOptions,
    mut catalog: Catalog,
    manager: &WingetManager<R>,
) -> Result<()> {
    if let Some(term) = options.with_search.as_deref() {
        let added = catalog.inject_search_results(manager.search(term));
        output::verbose(&format!("Added {} live result(s) for '{}'", added, term));
    }

    let groups = select_groups(
        &catalog,
        options.category.as_deref(),
        options.filter.as_deref(),
    )?;

    if options.json {
        return machine_output::emit_v1("catalog", &groups, Vec::new(), Vec::new());
    }

    if groups.is_empty() {
        output::info("No catalog entries match.");
        return Ok(());
    }

    for (category, entries) in &groups {
        output::header(category);
        print_records(entries);
    }

    Ok(())
}

pub fn categories(catalog: &Catalog, json: bool) -> Result<()> {
    let categories = catalog.categories();

    if json {
        return machine_output::emit_v1("categories", &categories, Vec::new(), Vec::new());
    }

    for category in &categories {
        println!("{}", category);
    }

    Ok(())
}
