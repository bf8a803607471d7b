//! Single-pass aggregations over the event log
//!
//! Views by country/continent, views by browser and top readers. Each one
//! reads the whole snapshot from an `EventStore` and returns a `CountTable`.

pub mod browser;
pub mod continent;
pub mod geo;
pub mod readers;

pub use browser::{browser_counts, browser_family, BrowserClassifier, BrowserDetail};
pub use continent::continent_of;
pub use geo::{continent_counts, country_counts};
pub use readers::top_readers;
