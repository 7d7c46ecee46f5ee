//! Product records and the built-in catalog.

use serde::Serialize;

/// A single (fake) product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Stable identifier used in URLs.
    pub id: &'static str,
    pub name: &'static str,
    /// Display price, already formatted.
    pub price: &'static str,
    /// Teaser shown on the listing page.
    pub short: &'static str,
    pub desc: &'static str,
    /// Disclaimer explaining why the listing is a scam.
    pub scam_note: &'static str,
}

/// The built-in catalog. Order is the listing order.
pub static PRODUCTS: &[Product] = &[
    Product {
        id: "1",
        name: "Sunlight in a Jar",
        price: "$199.99",
        short: "Guaranteed 100% sunlight — bottled fresh!",
        desc: "Contains: air, optimism, and a hint of citrus. Not responsible for cloud cover.",
        scam_note: "This is a parody product used to teach how ridiculous some listings can be. It's not real.",
    },
    Product {
        id: "2",
        name: "Invisible Ink Anti-Theft Spray",
        price: "$299.99",
        short: "Spray your valuables and they become 'invisible' to thieves.",
        desc: "Also works as a mild room freshener if you like the scent of mystery.",
        scam_note: "Parody item; invisibility not scientifically verified.",
    },
    Product {
        id: "3",
        name: "Guaranteed Riches Ebook — Click Now!",
        price: "$999.99",
        short: "Secrets to instant wealth (results may vary).",
        desc: "Includes 10 steps, 3 magical rituals, and one coupon code.",
        scam_note: "Educational parody: real financial advice requires work, not a single ebook.",
    },
];
