pub mod quote_service;

pub use quote_service::{QuoteFetch, QuoteService, QuoteServiceTrait, UnavailableReason};
