//! Plain-text rendering for terminal output.

use spend_core::category::find_by_id;
use spend_core::{Category, Expense};
use spend_ledger::{Draft, Summary};
use spend_parse::ParsedSpend;

fn or_dash(v: Option<&str>) -> &str {
    v.filter(|s| !s.is_empty()).unwrap_or("-")
}

pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

pub fn parsed_lines(p: &ParsedSpend) -> String {
    let amount = p.amount.map(format_amount);
    let currency = p.currency.map(|c| c.code());
    let group = p.group_guess.map(|g| g.as_str());
    format!(
        "amount:     {}\ncurrency:   {}\nmerchant:   {}\nnote:       {}\ngroup:      {}\nconfidence: {:.0}%",
        or_dash(amount.as_deref()),
        or_dash(currency),
        or_dash(p.merchant.as_deref()),
        or_dash(p.note.as_deref()),
        or_dash(group),
        p.confidence * 100.0
    )
}

pub fn draft_line(d: &Draft) -> String {
    let amount = d.amount.map(format_amount);
    let currency = d.currency.map(|c| c.code()).unwrap_or("main");
    format!(
        "{} {} | {} | {} | {} ({:.0}%)",
        or_dash(amount.as_deref()),
        currency,
        or_dash(Some(&d.merchant)),
        or_dash(Some(&d.note)),
        or_dash(d.category_key.as_deref()),
        d.confidence * 100.0
    )
}

pub fn expense_line(e: &Expense, categories: &[Category]) -> String {
    let category = e
        .category_id
        .as_deref()
        .and_then(|id| find_by_id(categories, id))
        .map(|c| c.label.as_str());
    format!(
        "{} | {:>10} {} | {} | {} | {}",
        e.occurred_at.format("%Y-%m-%d"),
        format_amount(e.amount),
        e.currency,
        e.merchant,
        or_dash(category),
        e.note.as_deref().unwrap_or("No note")
    )
}

pub fn summary_lines(s: &Summary) -> String {
    let mut out = format!(
        "Last {} days: {} {} ({} spends)\n",
        s.window.days(),
        format_amount(s.total),
        s.currency,
        s.count
    );
    if s.by_group.is_empty() {
        out.push_str("  (nothing yet)\n");
    }
    for (label, amount) in &s.by_group {
        out.push_str(&format!("  {label}: {} {}\n", format_amount(*amount), s.currency));
    }
    out
}
