//! The enriched, read-only food catalog.
//!
//! A [`Catalog`] is built once from the full row set and never mutated.
//! [`CatalogHandle`] owns the built-once state: it starts out not built,
//! the first `build` fills it, and later `build` calls return the existing
//! catalog untouched.

use crate::{Error, FoodRecord, RawRow, Result};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::path::Path;

pub const DATABASE_VERSION: &str = "INDB 2024.11";

/// All food records, in dataset order
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    foods: Vec<FoodRecord>,
}

/// One page of catalog entries
#[derive(Clone, Debug, Serialize)]
pub struct Page<'a> {
    pub pagination: Pagination,
    pub data: &'a [FoodRecord],
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_foods: usize,
    pub vegetarian: usize,
    pub non_vegetarian: usize,
    pub database_version: &'static str,
}

impl Catalog {
    /// Enrich every row and collect the results
    ///
    /// The whole row set is consumed before this returns. Duplicate food codes
    /// are kept side by side.
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        let foods: Vec<FoodRecord> = rows
            .into_iter()
            .map(|row| FoodRecord::from_row(&row))
            .collect();

        tracing::info!("Loaded {} food items", foods.len());
        Catalog { foods }
    }

    /// Read a CSV dataset and build a catalog from it
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading food database from {:?}", path);
        let rows = crate::ingest::read_rows(path)?;
        Ok(Self::build(rows))
    }

    pub fn all(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// First record with this exact code
    pub fn find_by_code(&self, code: &str) -> Option<&FoodRecord> {
        self.foods.iter().find(|food| food.food_code == code)
    }

    /// Case-insensitive name search, first `limit` hits in catalog order
    pub fn search(&self, query: &str, limit: usize) -> Vec<&FoodRecord> {
        let query_lower = query.to_lowercase();
        self.foods
            .iter()
            .filter(|food| food.food_name.to_lowercase().contains(&query_lower))
            .take(limit)
            .collect()
    }

    /// 1-based page of the full listing
    pub fn page(&self, page: usize, per_page: usize) -> Page<'_> {
        let total_items = self.foods.len();
        let total_pages = if per_page == 0 {
            0
        } else {
            total_items.div_ceil(per_page)
        };

        let data = if page == 0 || per_page == 0 {
            &self.foods[..0]
        } else {
            let start = (page - 1).saturating_mul(per_page).min(total_items);
            let end = start.saturating_add(per_page).min(total_items);
            &self.foods[start..end]
        };

        Page {
            pagination: Pagination {
                current_page: page,
                total_pages,
                total_items,
                items_per_page: per_page,
            },
            data,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        let vegetarian = self.foods.iter().filter(|f| f.is_vegetarian).count();
        CatalogStats {
            total_foods: self.foods.len(),
            vegetarian,
            non_vegetarian: self.foods.len() - vegetarian,
            database_version: DATABASE_VERSION,
        }
    }
}

/// Owner of the build-once catalog
///
/// Shared read access is safe from any number of threads once built.
#[derive(Debug, Default)]
pub struct CatalogHandle {
    cell: OnceCell<Catalog>,
}

impl CatalogHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from `rows`, or return the already-built one
    ///
    /// On a built handle the rows are dropped without being read.
    pub fn build<I>(&self, rows: I) -> &Catalog
    where
        I: IntoIterator<Item = RawRow>,
    {
        if let Some(catalog) = self.cell.get() {
            tracing::debug!("Catalog already built, ignoring repeated build");
            return catalog;
        }
        self.cell.get_or_init(|| Catalog::build(rows))
    }

    /// Load the dataset at `path` unless the catalog is already built
    pub fn load(&self, path: &Path) -> Result<&Catalog> {
        self.cell.get_or_try_init(|| Catalog::load(path))
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The built catalog, or [`Error::CatalogNotReady`]
    pub fn get(&self) -> Result<&Catalog> {
        self.cell.get().ok_or(Error::CatalogNotReady)
    }
}
