// Product lineup shown after the doors open, and the text of their floating price labels.

use serde::{Deserialize, Serialize};

use crate::phase::PhaseWindow;
use crate::types::Vec3;

/// One product that rises into view inside its own phase window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub title: String,
    /// Whole naira.
    #[serde(default)]
    pub price_naira: u64,
    #[serde(default)]
    pub specs: Vec<String>,
    pub window: PhaseWindow,
    /// Height reached when the window saturates.
    pub rise_height: f32,
    /// Resting position before the rise.
    #[serde(default)]
    pub anchor: Vec3,
    /// Height of the price label above the item.
    #[serde(default = "default_label_offset")]
    pub label_offset: f32,
}

fn default_label_offset() -> f32 {
    0.9
}

/// Text of a floating price label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLabel {
    pub title: String,
    pub price: String,
    pub details: String,
}

impl ProductSpec {
    pub fn label(&self) -> PriceLabel {
        PriceLabel {
            title: self.title.clone(),
            price: format_naira(self.price_naira),
            details: self.specs.join(" · "),
        }
    }
}

/// Formats a whole-naira amount with the currency sign and thousands separators.
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₦');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Shelf group sits at (0, -0.8, -0.6); anchors below already include it.
const SHELF_Y: f32 = -0.8;
const SHELF_Z: f32 = -0.6;

fn product(
    title: &str,
    price_naira: u64,
    specs: &[&str],
    (start, end): (f64, f64),
    rise_height: f32,
    (x, z): (f32, f32),
    label_offset: f32,
) -> ProductSpec {
    ProductSpec {
        title: title.to_string(),
        price_naira,
        specs: specs.iter().map(|s| s.to_string()).collect(),
        window: PhaseWindow::fixed(start, end),
        rise_height,
        anchor: Vec3::new(x, SHELF_Y, SHELF_Z + z),
        label_offset,
    }
}

/// The storefront's seven gadgets, staggered roughly 0.02 apart over the last quarter.
pub fn default_lineup() -> Vec<ProductSpec> {
    vec![
        product(
            "Smartphone",
            385_000,
            &["8GB RAM", "256GB", "5G"],
            (0.76, 0.90),
            1.2,
            (-2.2, -1.0),
            1.0,
        ),
        product(
            "Smartwatch",
            155_000,
            &["AMOLED", "GPS", "NFC"],
            (0.78, 0.92),
            1.1,
            (-0.8, -1.2),
            0.9,
        ),
        product(
            "Earbuds",
            45_000,
            &["ANC", "24h Battery"],
            (0.80, 0.95),
            0.9,
            (0.8, -1.1),
            0.8,
        ),
        product(
            "Fast Charger",
            18_000,
            &["65W", "USB-C PD"],
            (0.82, 0.97),
            0.8,
            (2.0, -1.0),
            0.7,
        ),
        product(
            "Power Bank",
            32_000,
            &["20,000mAh", "PD 30W"],
            (0.84, 0.99),
            0.9,
            (-1.6, -1.3),
            1.0,
        ),
        product(
            "Case",
            9_000,
            &["Shock-proof"],
            (0.86, 1.0),
            0.7,
            (1.6, -1.4),
            0.9,
        ),
        product(
            "Speaker",
            78_000,
            &["Bluetooth 5.3", "IPX6"],
            (0.86, 1.0),
            1.0,
            (0.0, -1.6),
            0.9,
        ),
    ]
}
