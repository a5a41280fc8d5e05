pub mod base;
pub mod discount;
pub mod engine;
pub mod extra;
pub mod freight;
pub mod location;


pub use base::{BaseCost, FullTruckload, LessThanTruckload, ModeCostStrategy};
pub use engine::{BaseQuote, PricedQuote, PricingEngine, QuoteBreakdown};
