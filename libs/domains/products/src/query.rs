//! Filtering, sorting and pagination over a product snapshot.
//!
//! The pipeline always runs in the same order: category, subcategory,
//! min price, max price, free-text search, sort, paginate.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Product;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

/// Product field used for ordering
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Category,
    SubCategory,
    Price,
    Stock,
    Brand,
    Description,
    ImageUrl,
    Rating,
    Reviews,
}

impl SortField {
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::SubCategory => a.sub_category.cmp(&b.sub_category),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::Brand => a.brand.cmp(&b.brand),
            SortField::Description => a.description.cmp(&b.description),
            SortField::ImageUrl => a.image_url.cmp(&b.image_url),
            SortField::Rating => a.rating.total_cmp(&b.rating),
            SortField::Reviews => a.reviews.cmp(&b.reviews),
        }
    }
}

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Query parameters for listing products. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// 1-based page number (default 1)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Page size (default 10)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
    /// Case-insensitive category match
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    /// Case-insensitive subcategory match
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sub_category: Option<String>,
    /// Inclusive lower price bound
    #[serde(default, deserialize_with = "finite_price")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[serde(default, deserialize_with = "finite_price")]
    pub max_price: Option<f64>,
    /// Substring searched in name, description and brand
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    /// Field to sort by (default id)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(inline)]
    pub sort: Option<SortField>,
    /// asc (default) or desc
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[param(inline)]
    pub order: Option<SortOrder>,
}

fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

// f64::from_str accepts "NaN" and "inf", which would empty or disable a bound.
fn finite_price<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    match empty_string_as_none::<D, f64>(de)? {
        Some(price) if !price.is_finite() => {
            Err(de::Error::custom("price bound must be a finite number"))
        }
        other => Ok(other),
    }
}

/// A page of products plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products matching the filters, before pagination
    pub total_products: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub products: Vec<Product>,
}

impl ProductQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Run the full pipeline over a snapshot.
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let mut matched: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();

        let field = self.sort.unwrap_or_default();
        let order = self.order.unwrap_or_default();
        // Vec::sort_by is stable, ties keep insertion order
        matched.sort_by(|a, b| {
            let ordering = field.compare(a, b);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let page = self.page();
        let limit = self.limit().max(1);
        let total_products = matched.len();
        let start = (page.saturating_sub(1)).saturating_mul(limit);

        ProductPage {
            total_products,
            total_pages: total_products.div_ceil(limit),
            current_page: page,
            products: matched.into_iter().skip(start).take(limit).collect(),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(sub_category) = &self.sub_category {
            if product.sub_category.to_lowercase() != sub_category.to_lowercase() {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let found = [&product.name, &product.description, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }
        true
    }
}

/// Category name mapped to its distinct subcategories
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// Group subcategories by category, keeping first-seen order within each.
pub fn categories(products: &[Product]) -> CategoryMap {
    let mut map = CategoryMap::new();
    for product in products {
        let subs = map.entry(product.category.clone()).or_default();
        if !subs.contains(&product.sub_category) {
            subs.push(product.sub_category.clone());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_products;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(pairs: &str) -> Option<ProductQuery> {
        let uri: Uri = format!("/products?{pairs}").parse().unwrap();
        Query::try_from_uri(&uri).ok().map(|Query(q)| q)
    }

    fn query(pairs: &str) -> ProductQuery {
        parse(pairs).unwrap()
    }

    fn ids(page: &ProductPage) -> Vec<u64> {
        page.products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_defaults_return_first_page_by_id() {
        let page = ProductQuery::default().apply(default_products());
        assert_eq!(page.total_products, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let page = query("category=electronics").apply(default_products());
        assert_eq!(ids(&page), vec![1, 2, 3]);
    }

    #[test]
    fn test_sub_category_filter() {
        let page = query("subCategory=KITCHEN%20APPLIANCES").apply(default_products());
        assert_eq!(ids(&page), vec![5]);
    }

    #[test]
    fn test_search_matches_name_description_or_brand() {
        assert_eq!(ids(&query("search=shoes").apply(default_products())), vec![4]);
        assert_eq!(
            ids(&query("search=SprintMaster").apply(default_products())),
            vec![4]
        );
        assert_eq!(ids(&query("search=laptop").apply(default_products())), vec![1]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let page = query("minPrice=129.99&maxPrice=899.99").apply(default_products());
        assert_eq!(ids(&page), vec![2, 3, 4]);
    }

    #[test]
    fn test_sort_by_price_desc() {
        let page = query("sort=price&order=desc").apply(default_products());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);

        let page = query("sort=price").apply(default_products());
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_string_field() {
        let page = query("sort=brand").apply(default_products());
        // BrewGenius, Galactica, SoundWave, SprintMaster, TechMaster
        assert_eq!(ids(&page), vec![5, 2, 3, 4, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let page = query("sort=category&order=desc").apply(default_products());
        // Sports, Home, then the three Electronics in insertion order
        assert_eq!(ids(&page), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_pagination_slices_and_counts_pages() {
        let page = query("limit=2&page=2").apply(default_products());
        assert_eq!(page.total_products, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(ids(&page), vec![3, 4]);

        let last = query("limit=2&page=3").apply(default_products());
        assert_eq!(ids(&last), vec![5]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page = query("page=9").apply(default_products());
        assert!(page.products.is_empty());
        assert_eq!(page.total_products, 5);
        assert_eq!(page.current_page, 9);
    }

    #[test]
    fn test_page_never_exceeds_limit() {
        for limit in 1..=6 {
            for page in 1..=6 {
                let result = query(&format!("limit={limit}&page={page}"))
                    .apply(default_products());
                assert!(result.products.len() <= limit);
                assert_eq!(result.total_pages, result.total_products.div_ceil(limit));
            }
        }
    }

    #[test]
    fn test_empty_params_are_ignored() {
        let q = query("category=&minPrice=&sort=&page=");
        assert!(q.category.is_none());
        assert!(q.min_price.is_none());
        assert!(q.sort.is_none());
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        assert!(parse("minPrice=cheap").is_none());
        assert!(parse("sort=colour").is_none());
    }

    #[test]
    fn test_non_finite_price_bounds_are_rejected() {
        assert!(parse("minPrice=NaN").is_none());
        assert!(parse("maxPrice=inf").is_none());
        assert!(parse("minPrice=-inf").is_none());
        assert_eq!(query("maxPrice=1e3").max_price, Some(1000.0));
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        assert!(query("limit=0").validate().is_err());
        assert!(query("page=0").validate().is_err());
        assert!(query("limit=5&page=1").validate().is_ok());
    }

    #[test]
    fn test_categories_groups_distinct_subcategories() {
        let mut products = default_products();
        products.push(products[0].clone());

        let map = categories(&products);
        assert_eq!(map.len(), 3);
        assert_eq!(map["Electronics"], vec!["Computers", "Phones", "Audio"]);
        assert_eq!(map["Sports"], vec!["Footwear"]);
        assert_eq!(map["Home"], vec!["Kitchen Appliances"]);
    }
}
