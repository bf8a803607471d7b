use docviews::analytics::{browser_counts, continent_counts, country_counts, top_readers, BrowserDetail};
use docviews::event::{DocumentId, EventLog, EventStore, VisitorId};
use docviews::recommend::also_likes;
use docviews::{AnalyzerConfig, RecommendConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const LOG: &str = r#"{"ts":1393631989,"visitor_uuid":"745409913574d4c6","visitor_useragent":"Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/33.0.1750.146 Safari/537.36","visitor_country":"GB","event_type":"impression","subject_doc_id":"140222143932-91796b01f94327ee809bd759fd0f6c76"}
{"ts":1393631990,"visitor_uuid":"745409913574d4c6","visitor_useragent":"Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/33.0.1750.146 Safari/537.36","visitor_country":"GB","event_type":"pagereadtime","event_readtime":4500,"subject_doc_id":"140222143932-91796b01f94327ee809bd759fd0f6c76"}
{"ts":1393631991,"visitor_uuid":"64bf70296da2f9fd","visitor_useragent":"Mozilla/5.0 (Windows NT 6.1; rv:27.0) Gecko/20100101 Firefox/27.0","visitor_country":"US","event_type":"pageview","subject_doc_id":"140222143932-91796b01f94327ee809bd759fd0f6c76"}
{"ts":1393631992,"visitor_uuid":"64bf70296da2f9fd","visitor_useragent":"Mozilla/5.0 (Windows NT 6.1; rv:27.0) Gecko/20100101 Firefox/27.0","visitor_country":"US","event_type":"pagereadtime","event_readtime":9000,"subject_doc_id":"131203020306-6e3bba1b4d1efae1d0a4cf0fc3fb2a3c"}
{"ts":1393631993,"visitor_uuid":"3f9dd8c3d7b4e2d1","visitor_country":"BR","event_type":"pageview","event_readtime":100000,"subject_doc_id":"131203020306-6e3bba1b4d1efae1d0a4cf0fc3fb2a3c"}
{"ts":1393631994,"visitor_useragent":"Mozilla/5.0","visitor_country":"DE","event_type":"pageview","subject_doc_id":"131203020306-6e3bba1b4d1efae1d0a4cf0fc3fb2a3c"}
{"ts":1393631995,"visitor_uuid":"745409913574d4c6","visitor_country":"GB","event_type":"pageview","subject_doc_id":"131203020306-6e3bba1b4d1efae1d0a4cf0fc3fb2a3c"}
"#;

const DOC_A: &str = "140222143932-91796b01f94327ee809bd759fd0f6c76";
const DOC_B: &str = "131203020306-6e3bba1b4d1efae1d0a4cf0fc3fb2a3c";

fn load() -> EventLog {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LOG.as_bytes()).unwrap();
    let (log, report) = EventLog::open(file.path()).unwrap();
    assert_eq!(report.accepted, 6);
    assert_eq!(report.skipped, 1);
    log
}

#[test]
fn test_open_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(EventLog::open(dir.path().join("absent.json")).is_err());
}

#[test]
fn test_country_and_continent_views() {
    let log = load();
    let countries = country_counts(&log).unwrap();
    assert_eq!(countries.get(&"GB".to_string()), Some(3));
    assert_eq!(countries.get(&"DE".to_string()), None);

    let continents = continent_counts(&log).unwrap();
    assert_eq!(continents.keys().next().map(String::as_str), Some("Europe"));
    assert_eq!(continents.get(&"North America".to_string()), Some(2));
    assert_eq!(continents.get(&"South America".to_string()), Some(1));
}

#[test]
fn test_document_filter_restricts_views() {
    let log = load();
    let view = log.for_document(&DocumentId::new(DOC_A));
    assert_eq!(view.events().unwrap().len(), 3);

    let countries = country_counts(&view).unwrap();
    assert_eq!(countries.get(&"GB".to_string()), Some(2));
    assert_eq!(countries.get(&"US".to_string()), Some(1));
    assert_eq!(countries.get(&"BR".to_string()), None);
}

#[test]
fn test_browser_views() {
    let log = load();
    let families = browser_counts(&log, BrowserDetail::Family).unwrap();
    assert_eq!(families.get(&"Chrome".to_string()), Some(2));
    assert_eq!(families.get(&"Firefox".to_string()), Some(2));
    assert_eq!(families.get(&"Unknown".to_string()), Some(2));
}

#[test]
fn test_top_readers_ignore_other_event_types() {
    let log = load();
    let top = top_readers(&log, AnalyzerConfig::default().top_readers).unwrap();
    let rows: Vec<(&str, u64)> = top.iter().map(|(v, t)| (v.as_str(), t)).collect();
    assert_eq!(rows, vec![("64bf70296da2f9fd", 9000), ("745409913574d4c6", 4500)]);
    assert_eq!(top.get(&VisitorId::new("3f9dd8c3d7b4e2d1")), None);
}

#[test]
fn test_also_likes_on_loaded_log() {
    let log = load();
    let ranked = also_likes(&log, &DocumentId::new(DOC_A), &RecommendConfig::default()).unwrap();
    let rows: Vec<(&str, u64)> = ranked.iter().map(|(d, c)| (d.as_str(), c)).collect();
    assert_eq!(rows, vec![(DOC_A, 2), (DOC_B, 2)]);
}
