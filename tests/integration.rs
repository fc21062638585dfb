//! Integration tests for chatlens.
//!
//! These tests drive the whole pipeline (format resolution, parsing,
//! filtering, analytics, reporting) through the public API, using fixture
//! exports written to temporary files.

use std::fs;
use std::path::PathBuf;

use chatlens::analytics::{Polarity, analyze};
use chatlens::config::{AnalysisConfig, ChatLanguage, MalformedPolicy, OperatingSystem, SystemLanguage};
use chatlens::core::{FilterConfig, apply_filters};
use chatlens::parser::ChatLogParser;
use chatlens::registry::{FormatRegistry, FormatSpec};
use chatlens::report::ConsoleReport;
use chatlens::{ChatTime, MessageCorpus};
use chrono::NaiveDate;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Fixtures
// ============================================================================

const GER_APPLE: &str = "\
[14/03/2023 09:00:00] Alice: Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
[15/03/2023 20:22:06] Alice: Hello there
[15/03/2023 20:23:10] Bob: Hallo! Wie geht's? 😀
[15/03/2023 20:25:00] Alice: Super, danke 😀🎉
this line continues the previous message
[16/03/2023 07:01:59] Bob: Guten Morgen
";

const ENG_APPLE: &str = "\
[15.03.23, 8:17:43 AM] Bob: Good morning
[15.03.23, 8:20:00 AM] Alice: Morning! Great weather today 😀
[15.03.23, 12:01:00 PM] Bob: Carol joined using this group's invite link
[15.03.23, 12:30:15 AM] Alice: Can't sleep
[16.03.23, 9:45:00 PM] Bob: I hate traffic 🙄
";

const GER_ANDROID: &str = "\
15.03.23, 20:22 - Alice: Hallo zusammen
15.03.23, 20:24 - Bob: Das ist richtig gut 👍
16.03.23, 08:00 - Alice: <Medien ausgeschlossen>
16.03.23, 08:05 - Bob: Schlecht geschlafen
";

fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config(language: SystemLanguage, os: OperatingSystem) -> AnalysisConfig {
    AnalysisConfig::new()
        .with_system_language(language)
        .with_operating_system(os)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_bracketed_slash_seconds() {
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Apple)).unwrap();
    let outcome = parser
        .parse_str("[15/03/2023 20:22:06] Alice: Hello there")
        .unwrap();

    let records = outcome.corpus.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date(), date(2023, 3, 15));
    assert_eq!(records[0].time().to_string(), "20:22");
    assert_eq!(records[0].time().second(), Some(6));
    assert_eq!(records[0].author(), "Alice");
    assert_eq!(records[0].message(), "Hello there");
}

#[test]
fn test_scenario_twelve_hour() {
    let parser = ChatLogParser::new(&config(SystemLanguage::Eng, OperatingSystem::Apple)).unwrap();
    let outcome = parser
        .parse_str("[15.03.23, 8:17:43 AM] Bob: Good morning")
        .unwrap();

    let record = &outcome.corpus.records()[0];
    assert_eq!(record.date(), date(2023, 3, 15));
    assert_eq!(record.time().to_string(), "08:17");
    assert_eq!(record.author(), "Bob");
    assert_eq!(record.message(), "Good morning");
}

#[test]
fn test_scenario_invite_link_dropped() {
    let parser = ChatLogParser::new(&config(SystemLanguage::Eng, OperatingSystem::Apple)).unwrap();
    let outcome = parser
        .parse_str("[15.03.23, 12:01:00 PM] Bob: Carol joined using this group's invite link")
        .unwrap();

    assert!(outcome.corpus.is_empty());
    assert_eq!(outcome.stats.system, 1);
}

#[test]
fn test_scenario_empty_corpus_reports_no_data() {
    let config = AnalysisConfig::default();
    let report = analyze(&MessageCorpus::default(), &config);
    let text = ConsoleReport::new(&report).to_string();

    assert!(report.sentiment.is_none());
    assert!(report.authors.is_empty());
    assert!(text.contains("Sentiment:\n  (no data)"));
    assert!(text.contains("messages written:\n  (no data)"));
}

// ============================================================================
// Full pipeline per format
// ============================================================================

#[test]
fn test_ger_apple_file() {
    let dir = tempdir().unwrap();
    let path = fixture(&dir, "chat.txt", GER_APPLE);
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Apple)).unwrap();
    let outcome = parser.parse(&path).unwrap();

    assert_eq!(outcome.corpus.len(), 4);
    assert_eq!(outcome.stats.total_lines, 6);
    assert_eq!(outcome.stats.system, 1);
    assert_eq!(outcome.stats.unmatched, 1);

    let authors: Vec<_> = outcome.corpus.iter().map(|r| r.author()).collect();
    assert_eq!(authors, vec!["Alice", "Bob", "Alice", "Bob"]);
    assert_eq!(
        outcome.corpus.date_range(),
        Some((date(2023, 3, 15), date(2023, 3, 16)))
    );
}

#[test]
fn test_eng_apple_file() {
    let dir = tempdir().unwrap();
    let path = fixture(&dir, "chat.txt", ENG_APPLE);
    let parser = ChatLogParser::new(&config(SystemLanguage::Eng, OperatingSystem::Apple)).unwrap();
    let outcome = parser.parse(&path).unwrap();

    let times: Vec<String> = outcome.corpus.iter().map(|r| r.time().to_string()).collect();
    assert_eq!(times, vec!["08:17", "08:20", "00:30", "21:45"]);
}

#[test]
fn test_eng_android_uses_twelve_hour_format() {
    let spec = FormatRegistry::lookup(SystemLanguage::Eng, OperatingSystem::Android).unwrap();
    assert_eq!(spec, FormatSpec::BracketedDotTwelveHour);

    let parser = ChatLogParser::new(&config(SystemLanguage::Eng, OperatingSystem::Android)).unwrap();
    assert_eq!(parser.parse_str(ENG_APPLE).unwrap().corpus.len(), 4);
}

#[test]
fn test_ger_android_file() {
    let dir = tempdir().unwrap();
    let path = fixture(&dir, "chat.txt", GER_ANDROID);
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Android)).unwrap();
    let outcome = parser.parse(&path).unwrap();

    assert_eq!(outcome.corpus.len(), 3);
    let last = &outcome.corpus.records()[2];
    assert_eq!(last.time(), ChatTime::new(8, 5).unwrap());
    assert_eq!(last.line(), 4);
}

#[test]
fn test_wrong_format_yields_no_records() {
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Android)).unwrap();
    let outcome = parser.parse_str(GER_APPLE).unwrap();

    assert!(outcome.corpus.is_empty());
    assert_eq!(outcome.stats.unmatched + outcome.stats.system, 6);
}

#[test]
fn test_unsupported_format_string() {
    let err = FormatRegistry::lookup_str("fra", "apple").unwrap_err();
    assert!(err.is_unsupported_format());
    assert!(FormatRegistry::lookup_str("eng", "windows").is_err());
}

// ============================================================================
// Malformed timestamps
// ============================================================================

#[test]
fn test_malformed_timestamp_aborts_with_line() {
    let content = "[15/03/2023 20:22:06] Alice: ok\n[31/02/2023 10:00:00] Bob: impossible date\n";
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Apple)).unwrap();

    let err = parser.parse_str(content).unwrap_err();
    assert!(err.is_malformed_timestamp());
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("31/02/2023"));
}

#[test]
fn test_malformed_timestamp_skipped() {
    let content = "[15/03/2023 20:22:06] Alice: ok\n[15/03/2023 25:00:00] Bob: bad hour\n[16/03/2023 08:00:00] Bob: fine\n";
    let config = config(SystemLanguage::Ger, OperatingSystem::Apple)
        .with_on_malformed(MalformedPolicy::Skip);
    let outcome = ChatLogParser::new(&config).unwrap().parse_str(content).unwrap();

    assert_eq!(outcome.corpus.len(), 2);
    assert_eq!(outcome.stats.malformed, 1);
    let lines: Vec<usize> = outcome.corpus.iter().map(|r| r.line()).collect();
    assert_eq!(lines, vec![1, 3]);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_drives_pipeline() {
    let dir = tempdir().unwrap();
    let config_path = fixture(
        &dir,
        "chatlens.toml",
        r#"
chat_language = "ger"
system_language = "ger"
operating_system = "android"
system_messages = ["Schlecht"]
"#,
    );
    let config = AnalysisConfig::load(&config_path).unwrap();
    let outcome = ChatLogParser::new(&config).unwrap().parse_str(GER_ANDROID).unwrap();

    // Only the custom marker applies; the media placeholder is now a record
    assert_eq!(outcome.corpus.len(), 3);
    assert!(outcome.corpus.iter().all(|r| !r.message().contains("Schlecht")));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let path = fixture(&dir, "bad.toml", "operating_system = \"windows\"");
    let err = AnalysisConfig::load(&path).unwrap_err();
    assert!(err.is_config());
}

// ============================================================================
// Filtering and analytics
// ============================================================================

#[test]
fn test_filter_then_analyze() {
    let parser = ChatLogParser::new(&config(SystemLanguage::Ger, OperatingSystem::Apple)).unwrap();
    let corpus = parser.parse_str(GER_APPLE).unwrap().corpus;

    let filter = FilterConfig::new().with_date_to("2023-03-15").unwrap();
    let filtered = apply_filters(&corpus, &filter);
    assert_eq!(filtered.len(), 3);
    assert_eq!(corpus.len(), 4);

    let filter = FilterConfig::new().with_author("BOB");
    let bob = apply_filters(&corpus, &filter);
    assert!(bob.iter().all(|r| r.author() == "Bob"));
    assert_eq!(bob.len(), 2);
}

#[test]
fn test_english_analysis() {
    let config = config(SystemLanguage::Eng, OperatingSystem::Apple);
    let corpus = ChatLogParser::new(&config).unwrap().parse_str(ENG_APPLE).unwrap().corpus;
    let report = analyze(&corpus, &config);

    assert_eq!(report.authors[0].author, "Bob");
    assert_eq!(report.authors[0].count, 2);
    assert_eq!(report.emojis.len(), 2);
    assert_eq!(report.activity.by_hour[8], 2);
    assert_eq!(report.activity.by_date.len(), 2);

    let sentiment = report.sentiment.unwrap();
    assert_eq!(sentiment.messages, 4);
    assert!(sentiment.dominant_share.is_some() || sentiment.polarity == Polarity::Neutral);
}

#[test]
fn test_german_analysis() {
    let config = config(SystemLanguage::Ger, OperatingSystem::Android)
        .with_chat_language(ChatLanguage::Ger);
    let corpus = ChatLogParser::new(&config).unwrap().parse_str(GER_ANDROID).unwrap().corpus;
    let report = analyze(&corpus, &config);

    let sentiment = report.sentiment.unwrap();
    assert_eq!(sentiment.messages, 3);
    assert!(sentiment.average.is_some());
    assert_eq!(sentiment.positive, 1.0);
    assert_eq!(sentiment.negative, 1.0);
    assert_eq!(sentiment.polarity, Polarity::Neutral);

    // German stopwords are gone from the word list
    assert!(report.words.iter().all(|w| w.word != "das" && w.word != "ist"));
}

#[test]
fn test_report_renders_all_sections() {
    let config = config(SystemLanguage::Eng, OperatingSystem::Apple);
    let corpus = ChatLogParser::new(&config).unwrap().parse_str(ENG_APPLE).unwrap().corpus;
    let text = ConsoleReport::new(&analyze(&corpus, &config)).to_string();

    for section in [
        "Sentiment:",
        "Ranking of most frequent emojis:",
        "Ranking in terms of the number of messages written:",
        "Busiest hours:",
        "Most frequent words:",
    ] {
        assert!(text.contains(section), "missing section {section}");
    }
    assert!(!text.contains("no data"));
}
