//! Unofficial client for GAMCO's closed-end fund NAV API.
//!
//! [`Client`] fetches the `nav_closed_ends` payload and [`decode`] turns it
//! into a [`FundCollection`] keyed by ticker symbol.

mod client;
mod decode;
mod errors;
pub mod types;
pub use self::client::Client;
pub use self::decode::{decode, decode_funds};
pub use self::errors::Error;
pub use self::types::{Fund, FundCollection};
