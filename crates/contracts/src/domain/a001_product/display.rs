//! Display-only derivations for product cards: star-rating glyphs, stock
//! badges and the price string. Pure and total over their numeric domains so
//! the grid rendering stays a dumb projection.

use serde::{Deserialize, Serialize};

/// One of the five glyph slots in a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

/// Converts a rating in [0, 5] into five glyph slots: `floor(rating)` full
/// stars, one half star when the fractional part is >= 0.5, empty for the
/// rest.
pub fn star_glyphs(rating: f64) -> [StarGlyph; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let has_half = rating - rating.floor() >= 0.5;

    let mut glyphs = [StarGlyph::Empty; 5];
    for slot in glyphs.iter_mut().take(full) {
        *slot = StarGlyph::Full;
    }
    if has_half && full < 5 {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockSeverity {
    /// Plenty in stock (> 50); the card carries an "In Stock" badge.
    Ok,
    /// Nearly gone (< 10); the card carries a "Low Stock" badge.
    Low,
    /// Everything in between; no badge.
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatus {
    /// Stock line shown under the price.
    pub label: String,
    pub severity: StockSeverity,
}

impl StockStatus {
    /// Badge text for the card corner, if the severity warrants one.
    pub fn badge(&self) -> Option<&'static str> {
        match self.severity {
            StockSeverity::Ok => Some("In Stock"),
            StockSeverity::Low => Some("Low Stock"),
            StockSeverity::Normal => None,
        }
    }
}

/// Derives the stock line and badge severity from a stock count.
///
/// The badge thresholds (> 50, < 10) and the label threshold (> 20) are
/// independent on purpose; a product with stock 15 gets the "Only 15 left!"
/// label but no badge.
pub fn stock_status(stock: u32) -> StockStatus {
    let severity = if stock > 50 {
        StockSeverity::Ok
    } else if stock < 10 {
        StockSeverity::Low
    } else {
        StockSeverity::Normal
    };
    let label = if stock > 20 {
        "In Stock • Ready to Ship".to_string()
    } else {
        format!("Only {stock} left!")
    };
    StockStatus { label, severity }
}

/// Formats a price the way the catalog shows it: taka sign, two decimals.
pub fn format_price(price: f64) -> String {
    format!("৳{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use StarGlyph::{Empty, Full, Half};

    #[test]
    fn star_glyphs_boundaries() {
        assert_eq!(star_glyphs(0.0), [Empty; 5]);
        assert_eq!(star_glyphs(5.0), [Full; 5]);
    }

    #[test]
    fn star_glyphs_half_star() {
        assert_eq!(star_glyphs(3.5), [Full, Full, Full, Half, Empty]);
        assert_eq!(star_glyphs(4.7), [Full, Full, Full, Full, Half]);
        // Fractional part below .5 rounds down to no half star.
        assert_eq!(star_glyphs(4.3), [Full, Full, Full, Full, Empty]);
    }

    #[test]
    fn star_glyphs_clamps_out_of_range() {
        assert_eq!(star_glyphs(-1.0), [Empty; 5]);
        assert_eq!(star_glyphs(9.9), [Full; 5]);
    }

    #[test]
    fn stock_status_labels() {
        assert_eq!(stock_status(5).label, "Only 5 left!");
        assert_eq!(stock_status(25).label, "In Stock • Ready to Ship");
    }

    #[test]
    fn stock_status_badges() {
        assert_eq!(stock_status(100).badge(), Some("In Stock"));
        assert_eq!(stock_status(5).badge(), Some("Low Stock"));
        assert_eq!(stock_status(25).badge(), None);
        // Label and badge thresholds are independent.
        let mid = stock_status(15);
        assert_eq!(mid.label, "Only 15 left!");
        assert_eq!(mid.badge(), None);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(1245.0), "৳1245.00");
        assert_eq!(format_price(5.5), "৳5.50");
    }
}
