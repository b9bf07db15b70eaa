//! Mock product supply.
//!
//! The storefront ships with a fixed eight-product catalog instead of a
//! backend; same records, same ids, same suggested alternatives.

use ecocart_catalog::{Product, ProductSource};
use ecocart_core::{EcoRating, Price};

/// Static in-process catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockProductSource;

impl ProductSource for MockProductSource {
    fn list_products(&self) -> Vec<Product> {
        mock_products()
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: u64,
    image: &str,
    eco_rating: EcoRating,
    category: &str,
    brand: &str,
    materials: &[&str],
    alternatives: &[&str],
) -> Product {
    Product {
        id: id.parse().expect("mock product id"),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: image.to_string(),
        eco_rating,
        category: category.to_string(),
        brand: brand.to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        alternatives: alternatives
            .iter()
            .map(|a| a.parse().expect("mock alternative id"))
            .collect(),
    }
}

fn mock_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Eco-Friendly Water Bottle",
            "Made from 100% recycled materials, this water bottle is BPA-free and environmentally friendly.",
            2499,
            "https://images.unsplash.com/photo-1602143407151-7111542de6e8",
            EcoRating::A,
            "Kitchenware",
            "EcoLife",
            &["Recycled Stainless Steel", "Plant-based Plastic"],
            &["2", "3"],
        ),
        product(
            "2",
            "Bamboo Toothbrush",
            "Biodegradable bamboo toothbrush with plant-based bristles.",
            499,
            "https://images.unsplash.com/photo-1607613009820-a29f7bb81c04",
            EcoRating::A,
            "Personal Care",
            "GreenSmile",
            &["Bamboo", "Plant-based Nylon"],
            &["4"],
        ),
        product(
            "3",
            "Organic Cotton T-shirt",
            "Soft and comfortable t-shirt made from 100% organic cotton.",
            2999,
            "https://images.unsplash.com/photo-1581655353564-df123a1eb820",
            EcoRating::B,
            "Clothing",
            "EarthWear",
            &["Organic Cotton"],
            &["6"],
        ),
        product(
            "4",
            "Plastic Toothbrush",
            "Standard toothbrush with nylon bristles.",
            199,
            "https://images.unsplash.com/photo-1559381313-e3c99451063a",
            EcoRating::D,
            "Personal Care",
            "CleanDent",
            &["Plastic", "Nylon"],
            &["2"],
        ),
        product(
            "5",
            "Reusable Shopping Bag",
            "Durable shopping bag made from recycled plastic bottles.",
            1299,
            "https://images.unsplash.com/photo-1595460879157-4ff13989d27f",
            EcoRating::A,
            "Home Goods",
            "EcoTote",
            &["Recycled Polyester"],
            &[],
        ),
        product(
            "6",
            "Fast Fashion T-shirt",
            "Trendy t-shirt made from conventional cotton.",
            999,
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab",
            EcoRating::F,
            "Clothing",
            "TrendFast",
            &["Conventional Cotton", "Polyester"],
            &["3"],
        ),
        product(
            "7",
            "Recycled Paper Notebook",
            "Notebook made from 100% post-consumer recycled paper.",
            799,
            "https://images.unsplash.com/photo-1531346680769-a1e79e0d31cc",
            EcoRating::A,
            "Stationery",
            "GreenWrite",
            &["Recycled Paper", "Soy-based Ink"],
            &[],
        ),
        product(
            "8",
            "Sustainable Yoga Mat",
            "Eco-friendly yoga mat made from natural rubber and recycled materials.",
            6899,
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f",
            EcoRating::B,
            "Fitness",
            "EcoYoga",
            &["Natural Rubber", "Recycled Microfiber"],
            &[],
        ),
    ]
}
