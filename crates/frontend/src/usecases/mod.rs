pub mod u101_identify_part;
pub mod u102_pricing;
pub mod u103_vendor_onboarding;
