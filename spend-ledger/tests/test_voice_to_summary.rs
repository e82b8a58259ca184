use chrono::{Duration, TimeZone, Utc};
use spend_core::{Currency, ScriptedTranscript, Window};
use spend_ledger::settings::{load_categories, load_settings, set_main_currency};
use spend_ledger::{summarize, DebugEntry, DebugLog, ExpenseBook, KvStore, QuickAdd};
use spend_parse::parse_spend;

/// Spoken phrases go through capture, review and storage, then show up in the weekly summary.
#[test]
fn test_utterances_end_up_in_summary() {
    let dir = tempfile::tempdir().unwrap();
    let store = KvStore::open(dir.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();

    let mut src = ScriptedTranscript::new();
    for u in [
        "bbq hogfather 1200 baht ribs with Dasha",
        "karaoke 800 baht",
        "50 eur netflix subscription",
        "coffee",
    ] {
        src.push_utterance(u);
    }

    let mut qa = QuickAdd::new(src);
    let mut book = ExpenseBook::open(store.clone());
    let categories = load_categories(&store);
    let settings = load_settings(&store);

    let mut saved = 0;
    let mut rejected = 0;
    while qa.source_mut().pending() > 0 {
        qa.start_listening().unwrap();
        qa.stop_listening();
        qa.drain();
        let Some(draft) = qa.current_draft() else { continue };
        match draft.confirm(&categories) {
            Ok(input) => {
                book.add(input, settings.main_currency, now).unwrap();
                saved += 1;
            }
            Err(_) => rejected += 1,
        }
    }

    // "coffee" has no amount, so it needs manual editing
    assert_eq!(saved, 3);
    assert_eq!(rejected, 1);

    let reopened = ExpenseBook::open(store.clone());
    assert_eq!(reopened.len(), 3);

    let s = summarize(reopened.all(), &categories, Currency::Thb, Window::Week, now);
    assert_eq!(s.total, 2000.0);
    assert_eq!(s.by_group.get("Food"), Some(&1200.0));
    assert_eq!(s.by_group.get("Fun"), Some(&800.0));

    let eur = summarize(reopened.all(), &categories, Currency::Eur, Window::Week, now);
    assert_eq!(eur.total, 50.0);
    assert_eq!(eur.by_group.get("Bills"), Some(&50.0));
}

/// A cleared currency falls back to the configured main currency at save time.
#[test]
fn test_main_currency_applies_at_save_time() {
    let dir = tempfile::tempdir().unwrap();
    let store = KvStore::open(dir.path()).unwrap();
    let settings = set_main_currency(&store, Currency::Eur).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();

    let mut qa = QuickAdd::new(ScriptedTranscript::new());
    qa.type_text("bakery 6.50 croissant");
    let mut draft = qa.current_draft().unwrap();
    assert_eq!(draft.currency, Some(Currency::Thb));
    draft.currency = None;
    draft.occurred_at = Some(now - Duration::days(40));

    let mut book = ExpenseBook::open(store.clone());
    let e = book
        .add(draft.confirm(&load_categories(&store)).unwrap(), settings.main_currency, now)
        .unwrap();
    assert_eq!(e.currency, Currency::Eur);
    assert_eq!(e.amount, 6.5);

    // Too old for either window
    let s = summarize(book.all(), &load_categories(&store), Currency::Eur, Window::Month, now);
    assert_eq!(s.count, 0);
}

/// Debug feedback records the parse without changing what the parser returns.
#[test]
fn test_debug_feedback_is_side_channel() {
    let dir = tempfile::tempdir().unwrap();
    let store = KvStore::open(dir.path()).unwrap();
    let log = DebugLog::new(store);
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 20, 0, 0).unwrap();

    let phrase = "hogfather twelve hundred baht";
    let before = parse_spend(phrase);
    log.record(DebugEntry::from_parse("1200 baht at hogfather", phrase, Some(&before), now))
        .unwrap();

    assert_eq!(parse_spend(phrase), before);
    assert_eq!(log.entries()[0].parsed_amount, None);
}
