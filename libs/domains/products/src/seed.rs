//! Default catalog loaded at startup.

use crate::models::{Product, SpecValue, Specifications};

fn specs<const N: usize>(pairs: [(&str, SpecValue); N]) -> Specifications {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn seed_product(
    id: u64,
    name: &str,
    category: &str,
    sub_category: &str,
    price: f64,
    stock: u32,
    brand: &str,
    description: &str,
    image: &str,
    rating: f64,
    reviews: u32,
    specifications: Specifications,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        price,
        stock,
        brand: brand.to_string(),
        description: description.to_string(),
        image_url: format!("https://example.com/images/{}.jpg", image),
        rating,
        reviews,
        specifications,
        seed: true,
    }
}

/// The five protected products every fresh store starts with (ids 1-5).
pub fn default_products() -> Vec<Product> {
    vec![
        seed_product(
            1,
            "Ultra-Slim Laptop Pro",
            "Electronics",
            "Computers",
            1299.99,
            50,
            "TechMaster",
            "Powerful and lightweight laptop with 16GB RAM, 512GB SSD, and a 4K display.",
            "laptop-pro",
            4.7,
            128,
            specs([
                ("processor", "Intel Core i7".into()),
                ("screenSize", "15.6 inches".into()),
                ("weight", "1.8 kg".into()),
                ("battery", "Up to 12 hours".into()),
            ]),
        ),
        seed_product(
            2,
            "SmartPhone X",
            "Electronics",
            "Phones",
            899.99,
            100,
            "Galactica",
            "5G-enabled smartphone with a triple-lens camera system and all-day battery life.",
            "smartphone-x",
            4.5,
            256,
            specs([
                ("screenSize", "6.5 inches".into()),
                ("storage", "256GB".into()),
                ("camera", "Triple 12MP Ultra Wide".into()),
                ("waterResistant", "IP68".into()),
            ]),
        ),
        seed_product(
            3,
            "Noise-Cancelling Headphones",
            "Electronics",
            "Audio",
            249.99,
            200,
            "SoundWave",
            "Over-ear headphones with active noise cancellation and 30-hour battery life.",
            "headphones",
            4.6,
            89,
            specs([
                ("type", "Over-ear".into()),
                ("wireless", true.into()),
                ("batteryLife", "30 hours".into()),
                ("weight", "250g".into()),
            ]),
        ),
        seed_product(
            4,
            "Pro Runner 3000",
            "Sports",
            "Footwear",
            129.99,
            75,
            "SprintMaster",
            "Lightweight running shoes with responsive cushioning and breathable mesh upper.",
            "running-shoes",
            4.4,
            62,
            specs([
                ("type", "Road running".into()),
                ("weight", "255g".into()),
                ("dropHeight", "8mm".into()),
                ("material", "Synthetic mesh".into()),
            ]),
        ),
        seed_product(
            5,
            "Smart Coffee Maker",
            "Home",
            "Kitchen Appliances",
            79.99,
            30,
            "BrewGenius",
            "Wi-Fi enabled coffee maker with scheduling and customizable brew strength.",
            "coffee-maker",
            4.2,
            45,
            specs([
                ("capacity", "12 cups".into()),
                ("programmable", true.into()),
                ("filterType", "Permanent".into()),
                ("warranty", "2 years".into()),
            ]),
        ),
    ]
}
