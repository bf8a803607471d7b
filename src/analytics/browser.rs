//! Views by browser
//!
//! Family detection uses the woothee user-agent database. Its names are
//! folded onto the ua-parser family names the reports have always used
//! ("IE", "Mobile Safari", "Chrome Mobile", "Other").

use crate::event::{EventStore, StoreResult};
use crate::rank::CountTable;
use woothee::parser::Parser;

/// Label used for events without a user agent
pub const UNKNOWN: &str = "Unknown";

/// Family of agents the database does not recognise
pub const OTHER: &str = "Other";

/// How user agents are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserDetail {
    /// The full user-agent string
    Raw,
    /// The browser family parsed from it
    Family,
}

/// Reusable browser-family classifier
pub struct BrowserClassifier {
    parser: Parser,
}

impl BrowserClassifier {
    pub fn new() -> Self {
        BrowserClassifier {
            parser: Parser::new(),
        }
    }

    /// Browser family of a user-agent string
    pub fn family(&self, user_agent: &str) -> String {
        let Some(parsed) = self.parser.parse(user_agent) else {
            return OTHER.to_string();
        };

        let ios = matches!(parsed.os, "iPhone" | "iPad" | "iPod");
        let mobile = ios || matches!(parsed.category, "smartphone" | "mobilephone");
        let family = match parsed.name {
            "UNKNOWN" | "" => OTHER,
            "Internet Explorer" => "IE",
            "Safari" if ios => "Mobile Safari",
            "Chrome" if ios => "Chrome Mobile iOS",
            "Chrome" if mobile => "Chrome Mobile",
            "Firefox" if mobile => "Firefox Mobile",
            name => name,
        };
        family.to_string()
    }
}

impl Default for BrowserClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser family of a single user-agent string
pub fn browser_family(user_agent: &str) -> String {
    BrowserClassifier::new().family(user_agent)
}

/// Views per browser
pub fn browser_counts<S: EventStore + ?Sized>(
    store: &S,
    detail: BrowserDetail,
) -> StoreResult<CountTable<String>> {
    let events = store.events()?;
    let classifier = BrowserClassifier::new();
    Ok(CountTable::tally(events.into_iter().map(|e| {
        match (e.user_agent.as_deref(), detail) {
            (None, _) => UNKNOWN.to_string(),
            (Some(ua), BrowserDetail::Raw) => ua.to_string(),
            (Some(ua), BrowserDetail::Family) => classifier.family(ua),
        }
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventLog, EventType};

    const CHROME: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/33.0.1750.146 Safari/537.36";
    const FIREFOX: &str = "Mozilla/5.0 (Windows NT 6.1; rv:27.0) Gecko/20100101 Firefox/27.0";
    const SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_2) AppleWebKit/537.74.9 (KHTML, like Gecko) Version/7.0.2 Safari/537.74.9";
    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 7_0_6 like Mac OS X) AppleWebKit/537.51.1 (KHTML, like Gecko) Version/7.0 Mobile/11B651 Safari/9537.53";
    const IE11: &str = "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko";
    const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
    const CHROME_ANDROID: &str = "Mozilla/5.0 (Linux; Android 4.4.2; Nexus 5 Build/KOT49H) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/33.0.1750.136 Mobile Safari/537.36";

    #[test]
    fn test_browser_family() {
        assert_eq!(browser_family(CHROME), "Chrome");
        assert_eq!(browser_family(FIREFOX), "Firefox");
        assert_eq!(browser_family(SAFARI), "Safari");
        assert_eq!(browser_family(IPHONE), "Mobile Safari");
        assert_eq!(browser_family(IE11), "IE");
        assert_eq!(browser_family(CHROME_ANDROID), "Chrome Mobile");
        assert_eq!(browser_family(GOOGLEBOT), "Googlebot");
        assert_eq!(browser_family("not a browser at all"), OTHER);
        assert_eq!(browser_family(""), OTHER);
    }

    #[test]
    fn test_browser_counts() {
        let log: EventLog = vec![
            Event::new("v1", "d1", EventType::Pageview).with_user_agent(CHROME),
            Event::new("v2", "d1", EventType::Pageview).with_user_agent(FIREFOX),
            Event::new("v3", "d1", EventType::Pageview).with_user_agent(CHROME),
            Event::new("v4", "d1", EventType::Pageview).with_user_agent(SAFARI),
            Event::new("v5", "d1", EventType::Pageview),
        ]
        .into_iter()
        .collect();

        let family = browser_counts(&log, BrowserDetail::Family).unwrap();
        assert_eq!(family.get(&"Chrome".to_string()), Some(2));
        assert_eq!(family.get(&"Safari".to_string()), Some(1));
        assert_eq!(family.get(&UNKNOWN.to_string()), Some(1));

        let raw = browser_counts(&log, BrowserDetail::Raw).unwrap();
        assert_eq!(raw.len(), 4);
        assert_eq!(raw.keys().next().map(String::as_str), Some(CHROME));
    }
}
