//! Fantasy provider clients

mod yahoo;

pub use yahoo::{YahooPlayerProvider, YAHOO_FANTASY_BASE_URL};
