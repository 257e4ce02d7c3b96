//! Static content for the vendor onboarding page: account tiers, the hero
//! stats and the benefit cards.

#[derive(Debug, Clone, Copy)]
pub struct VendorTier {
    pub name: &'static str,
    /// Commission on each sale, in percent.
    pub commission: f64,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub cta: &'static str,
    /// Shown when the tier is selected.
    pub signup_message: &'static str,
}

pub static TIERS: &[VendorTier] = &[
    VendorTier {
        name: "Standard",
        commission: 8.0,
        features: &[
            "List up to 100 products",
            "Standard search placement",
            "Monthly payouts",
        ],
        highlighted: false,
        cta: "Start selling",
        signup_message: "Starting Standard vendor account setup...",
    },
    VendorTier {
        name: "Professional",
        commission: 5.0,
        features: &[
            "Unlimited product listings",
            "Boosted search placement",
            "Weekly payouts",
            "Sales analytics dashboard",
        ],
        highlighted: true,
        cta: "Go professional",
        signup_message: "Starting Professional vendor account setup with enhanced features!",
    },
    VendorTier {
        name: "Enterprise",
        commission: 3.0,
        features: &[
            "Custom integration support",
            "Dedicated account manager",
            "Negotiated commission rates",
        ],
        highlighted: false,
        cta: "Talk to sales",
        signup_message:
            "Our sales team will contact you within 24 hours to discuss custom enterprise pricing.",
    },
];

pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "12K+", label: "Active buyers" },
    HeroStat { value: "$4.2M", label: "Monthly volume" },
    HeroStat { value: "96%", label: "Order fulfilment" },
    HeroStat { value: "4.6★", label: "Average vendor rating" },
];

pub struct Benefit {
    pub title: &'static str,
    pub body: &'static str,
}

pub static BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Reach industrial buyers",
        body: "Maintenance teams and procurement departments search the catalog daily for parts they need right now.",
    },
    Benefit {
        title: "Identification-driven demand",
        body: "Buyers who identify a part from a photo see your offer first when you stock that part.",
    },
    Benefit {
        title: "Simple logistics",
        body: "Ship from your own warehouse; we handle payment collection and dispute resolution.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commissions_decrease_with_tier() {
        let commissions: Vec<f64> = TIERS.iter().map(|t| t.commission).collect();
        assert!(commissions.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn exactly_one_highlighted_tier() {
        assert_eq!(TIERS.iter().filter(|t| t.highlighted).count(), 1);
    }
}
