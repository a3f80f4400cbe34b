//! Products and 3D showcase entries.
//!
//! Prices are kept as the strings the catalog is authored with and parsed on
//! use (see [`crate::util::price::parse_price`]). The cart identifies a line
//! by product name, so names must be unique.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use viewer::math::Vec3;
use viewer::presets::{PresetSet, ProductPresets, ViewPreset};
use viewer::scene::CarDimensions;

/// A product card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    /// URL slug for `/product/{id}`.
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub scale: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub discount: Option<&'static str>,
}

/// 3D viewer data for a product.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Showcase {
    pub product_id: &'static str,
    /// Mesh assets for a future loader; the viewer draws a procedural stand-in.
    pub garage_asset: &'static str,
    pub car_asset: &'static str,
    pub car: CarDimensions,
    pub presets: ProductPresets,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "bmw-e34",
        name: "BMW E34",
        tagline: "M5 Touring in Mauritius Blue",
        scale: "1:18",
        image: "/assets/cars/bmw-e34.svg",
        price: "24",
        original_price: Some("30"),
        discount: Some("-20%"),
    },
    Product {
        id: "nissan-skyline-r34",
        name: "Nissan Skyline R34",
        tagline: "GT-R V-Spec II Nür, Millennium Jade",
        scale: "1:18",
        image: "/assets/cars/nissan-skyline-r34.svg",
        price: "32",
        original_price: None,
        discount: None,
    },
    Product {
        id: "porsche-964",
        name: "Porsche 911 (964)",
        tagline: "Carrera RS in Grand Prix White",
        scale: "1:18",
        image: "/assets/cars/porsche-964.svg",
        price: "45",
        original_price: Some("50"),
        discount: Some("-10%"),
    },
    Product {
        id: "toyota-supra-a80",
        name: "Toyota Supra A80",
        tagline: "Twin-turbo RZ, Super White",
        scale: "1:24",
        image: "/assets/cars/toyota-supra-a80.svg",
        price: "28",
        original_price: None,
        discount: None,
    },
    Product {
        id: "mercedes-190e-evo2",
        name: "Mercedes 190E Evo II",
        tagline: "DTM homologation special",
        scale: "1:18",
        image: "/assets/cars/mercedes-190e-evo2.svg",
        price: "36",
        original_price: None,
        discount: None,
    },
    Product {
        id: "lancia-delta-integrale",
        name: "Lancia Delta Integrale",
        tagline: "Evo 2 in Martini colours",
        scale: "1:18",
        image: "/assets/cars/lancia-delta-integrale.svg",
        price: "30",
        original_price: Some("38"),
        discount: Some("-21%"),
    },
];

// Cars sit at the origin with the nose toward +X and the roof at +Y.
const TARGET: Vec3 = Vec3::new(0.0, 0.6, 0.0);

const DESKTOP_FULL_SET: PresetSet = PresetSet {
    front: Some(ViewPreset::new(Vec3::new(7.0, 1.2, 0.0), TARGET)),
    side: Some(ViewPreset::new(Vec3::new(0.0, 1.0, 6.5), TARGET)),
    back: Some(ViewPreset::new(Vec3::new(-7.0, 1.3, 0.0), TARGET)),
    interior: Some(ViewPreset::new(Vec3::new(-0.2, 1.1, 0.35), Vec3::new(2.0, 0.9, 0.35)).with_fov(75.0)),
};

const MOBILE_FULL_SET: PresetSet = PresetSet {
    front: Some(ViewPreset::new(Vec3::new(9.0, 1.5, 0.0), TARGET).with_fov(55.0)),
    side: Some(ViewPreset::new(Vec3::new(0.0, 1.3, 8.5), TARGET).with_fov(55.0)),
    back: Some(ViewPreset::new(Vec3::new(-9.0, 1.6, 0.0), TARGET).with_fov(55.0)),
    interior: Some(ViewPreset::new(Vec3::new(-0.2, 1.1, 0.35), Vec3::new(2.0, 0.9, 0.35)).with_fov(85.0)),
};

pub static SHOWCASES: &[Showcase] = &[
    Showcase {
        product_id: "bmw-e34",
        garage_asset: "/assets/models/garage.gltf",
        car_asset: "/assets/models/bmw-e34.gltf",
        car: CarDimensions { length: 4.72, width: 1.75, height: 1.41 },
        presets: ProductPresets { desktop: DESKTOP_FULL_SET, mobile: MOBILE_FULL_SET },
    },
    Showcase {
        product_id: "nissan-skyline-r34",
        garage_asset: "/assets/models/garage.gltf",
        car_asset: "/assets/models/nissan-skyline-r34.gltf",
        car: CarDimensions { length: 4.6, width: 1.785, height: 1.36 },
        presets: ProductPresets {
            desktop: DESKTOP_FULL_SET,
            mobile: PresetSet { back: None, ..MOBILE_FULL_SET },
        },
    },
    Showcase {
        product_id: "porsche-964",
        garage_asset: "/assets/models/garage.gltf",
        car_asset: "/assets/models/porsche-964.gltf",
        car: CarDimensions { length: 4.25, width: 1.65, height: 1.31 },
        presets: ProductPresets {
            desktop: PresetSet { interior: None, ..DESKTOP_FULL_SET },
            mobile: PresetSet { interior: None, ..MOBILE_FULL_SET },
        },
    },
];

/// Launch of the featured model, Unix milliseconds (2026-12-20 18:00 UTC).
pub const LAUNCH_AT_MS: f64 = 1_797_789_600_000.0;

#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[must_use]
pub fn showcase_for(product_id: &str) -> Option<&'static Showcase> {
    SHOWCASES.iter().find(|s| s.product_id == product_id)
}

/// The model shown in the hero poster.
#[must_use]
pub fn featured() -> Option<(&'static Product, &'static Showcase)> {
    let showcase = SHOWCASES.first()?;
    Some((find_product(showcase.product_id)?, showcase))
}
