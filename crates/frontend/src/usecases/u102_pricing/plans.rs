//! Static plan matrix and the sample price-history series, plus the pure
//! scaling math for the SVG chart.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    /// Price per month; `None` means "contact sales".
    pub monthly: Option<f64>,
    /// Price per month when billed annually.
    pub annual: Option<f64>,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta: &'static str,
}

impl Plan {
    pub fn price_for(&self, cycle: BillingCycle) -> Option<f64> {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }
}

pub static PLANS: Lazy<Vec<Plan>> = Lazy::new(|| {
    vec![
        Plan {
            name: "Free",
            monthly: Some(0.0),
            annual: Some(0.0),
            features: &[
                "Browse the full catalog",
                "5 part identifications per month",
                "Community support",
            ],
            highlighted: false,
            cta: "Sign up free",
        },
        Plan {
            name: "Pro",
            monthly: Some(1990.0),
            annual: Some(1590.0),
            features: &[
                "Unlimited part identifications",
                "Price history and alerts",
                "Priority vendor contact",
                "Email support",
            ],
            highlighted: true,
            cta: "Start 14-day trial",
        },
        Plan {
            name: "Enterprise",
            monthly: None,
            annual: None,
            features: &[
                "Volume purchasing workflow",
                "Dedicated account manager",
                "API access",
            ],
            highlighted: false,
            cta: "Contact sales",
        },
    ]
});

#[derive(Debug, Clone, Copy)]
pub struct PricePoint {
    pub month: &'static str,
    pub price: f64,
}

/// Twelve months of price history for the showcased part
/// (Siemens 6ES7 315-2EH14-0AB0).
pub static PRICE_HISTORY: Lazy<Vec<PricePoint>> = Lazy::new(|| {
    [
        ("Jul", 1450.0),
        ("Aug", 1420.0),
        ("Sep", 1380.0),
        ("Oct", 1350.0),
        ("Nov", 1320.0),
        ("Dec", 1290.0),
        ("Jan", 1245.0),
        ("Feb", 1180.0),
        ("Mar", 950.0),
        ("Apr", 980.0),
        ("May", 1120.0),
        ("Jun", 1245.0),
    ]
    .into_iter()
    .map(|(month, price)| PricePoint { month, price })
    .collect()
});

/// Scales a price series into SVG polyline points: x spreads evenly over the
/// padded width, y maps the series minimum to the bottom edge and the
/// maximum to the top. Returns an empty string for fewer than two points.
pub fn polyline_points(series: &[PricePoint], width: f64, height: f64, padding: f64) -> String {
    if series.len() < 2 {
        return String::new();
    }
    let min = series.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = inner_w / (series.len() - 1) as f64;

    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = padding + step * i as f64;
            let y = padding + (max - p.price) / span * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub mod faq {
    pub static ITEMS: &[(&str, &str)] = &[
        (
            "Can I change plans later?",
            "Yes, upgrades and downgrades apply from the next billing cycle.",
        ),
        (
            "Do identifications roll over?",
            "Unused identifications on the Free plan do not carry into the next month.",
        ),
        (
            "Which payment methods are supported?",
            "Cards and mobile banking; enterprise accounts can pay by invoice.",
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_prices_per_cycle() {
        let pro = PLANS.iter().find(|p| p.name == "Pro").expect("Pro plan");
        assert_eq!(pro.price_for(BillingCycle::Monthly), Some(1990.0));
        assert_eq!(pro.price_for(BillingCycle::Annual), Some(1590.0));

        let enterprise = PLANS
            .iter()
            .find(|p| p.name == "Enterprise")
            .expect("Enterprise plan");
        assert_eq!(enterprise.price_for(BillingCycle::Monthly), None);
    }

    #[test]
    fn polyline_spans_padded_area() {
        let series = &PRICE_HISTORY;
        let points = polyline_points(series, 600.0, 200.0, 10.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), series.len());
        assert!(pairs[0].starts_with("10.0,"));
        assert!(pairs.last().unwrap().starts_with("590.0,"));
    }

    #[test]
    fn polyline_maps_extremes_to_edges() {
        let series = vec![
            PricePoint { month: "a", price: 100.0 },
            PricePoint { month: "b", price: 200.0 },
            PricePoint { month: "c", price: 150.0 },
        ];
        let points = polyline_points(&series, 100.0, 100.0, 0.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        // Minimum sits on the bottom edge, maximum on the top edge.
        assert_eq!(pairs[0], "0.0,100.0");
        assert_eq!(pairs[1], "50.0,0.0");
        assert_eq!(pairs[2], "100.0,50.0");
    }

    #[test]
    fn degenerate_series_yield_no_points() {
        assert_eq!(polyline_points(&[], 100.0, 100.0, 0.0), "");
        let single = vec![PricePoint { month: "a", price: 5.0 }];
        assert_eq!(polyline_points(&single, 100.0, 100.0, 0.0), "");
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let flat = vec![
            PricePoint { month: "a", price: 7.0 },
            PricePoint { month: "b", price: 7.0 },
        ];
        let points = polyline_points(&flat, 100.0, 100.0, 0.0);
        assert!(!points.is_empty());
        assert!(!points.contains("NaN"));
    }
}
