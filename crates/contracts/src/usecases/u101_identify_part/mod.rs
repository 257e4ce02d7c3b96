pub mod contract;

pub use contract::{
    prettify_spec_key, IdentificationResult, IdentifiedPart, PricingInfo, VendorOffer,
};
