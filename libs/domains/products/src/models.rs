use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

/// Free-form product attributes, e.g. `{"screenSize": "6.5 inches", "wireless": true}`.
pub type Specifications = BTreeMap<String, SpecValue>;

/// A single specification value. Only scalars are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SpecValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::Text(value.to_string())
    }
}

impl From<bool> for SpecValue {
    fn from(value: bool) -> Self {
        SpecValue::Bool(value)
    }
}

/// Product entity as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: u64,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Average rating between 0 and 5
    pub rating: f64,
    /// Number of reviews
    pub reviews: u32,
    #[serde(default)]
    pub specifications: Specifications,
    /// Default catalog entries cannot be modified or removed
    #[serde(skip)]
    pub(crate) seed: bool,
}

impl Product {
    /// Build a freshly created product. Ratings and reviews start at zero.
    pub fn new(id: u64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            sub_category: input.sub_category,
            price: input.price,
            stock: input.stock,
            brand: input.brand,
            description: input.description,
            image_url: input.image_url,
            rating: 0.0,
            reviews: 0,
            specifications: input.specifications,
            seed: false,
        }
    }

    /// Whether this is one of the protected default products
    pub fn is_seed(&self) -> bool {
        self.seed
    }

    /// Merge the provided fields into this product. `id` and the seed flag
    /// are never touched. A new `specifications` map replaces the old one.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(sub_category) = update.sub_category {
            self.sub_category = sub_category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(reviews) = update.reviews {
            self.reviews = reviews;
        }
        if let Some(specifications) = update.specifications {
            self.specifications = specifications;
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub category: String,
    pub sub_category: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub stock: u32,
    pub brand: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub specifications: Specifications,
}

/// DTO for updating an existing product. Absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    pub specifications: Option<Specifications>,
}
