//! Ticket eligibility rules.
//!
//! Pure functions over a ticket tier and a caller-supplied "now": whether a
//! ticket can be bought, the status label to show, which quantities are
//! selectable, and what an order totals to. Nothing here performs I/O or
//! reads the clock, so every rule is testable with a fixed timestamp.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::EventTicket;
use crate::utils::CheckoutError;

/// Per-user purchase cap applied when a tier does not set one.
pub const DEFAULT_MAX_PER_USER: u32 = 5;

/// Currency assumed when a tier or session omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

const ACTIVE_STATUS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// Disabled by the operator, or carrying a sales date that does not parse.
    Disabled,
    /// Sales have not started yet.
    Upcoming,
    /// Sales are over.
    Ended,
    Available,
}

/// Verdict for one tier: machine code plus the label shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketStatus {
    pub code: StatusCode,
    pub label: String,
}

/// A sales-window bound as found on the wire.
enum Bound {
    Absent,
    At(DateTime<Utc>),
    Unparseable,
}

fn bound(raw: Option<&str>) -> Bound {
    match raw {
        None => Bound::Absent,
        Some(text) => match parse_timestamp(text) {
            Some(ts) => Bound::At(ts),
            None => Bound::Unparseable,
        },
    }
}

/// Accepts RFC 3339 timestamps and bare dates (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Whether the tier can be purchased at `now`.
///
/// A present-but-unparseable sales date fails closed: the tier is reported
/// unavailable rather than the call erroring.
pub fn is_available(ticket: &EventTicket, now: DateTime<Utc>) -> bool {
    if ticket.status != ACTIVE_STATUS {
        return false;
    }
    match bound(ticket.sales_start_date.as_deref()) {
        Bound::Unparseable => return false,
        Bound::At(start) if start > now => return false,
        _ => {}
    }
    match bound(ticket.sales_end_date.as_deref()) {
        Bound::Unparseable => return false,
        Bound::At(end) if end < now => return false,
        _ => {}
    }
    true
}

/// Classifies the tier for display, first match wins.
///
/// The start check precedes the end check, so an inverted window (end before
/// start) reports `Upcoming`, never `Ended`. Callers depend on this ordering.
pub fn classify(ticket: &EventTicket, now: DateTime<Utc>) -> TicketStatus {
    if ticket.status != ACTIVE_STATUS {
        return TicketStatus {
            code: StatusCode::Disabled,
            label: "Unavailable".to_string(),
        };
    }
    match bound(ticket.sales_start_date.as_deref()) {
        Bound::Unparseable => {
            return TicketStatus {
                code: StatusCode::Disabled,
                label: "Unavailable".to_string(),
            }
        }
        Bound::At(start) if start > now => {
            return TicketStatus {
                code: StatusCode::Upcoming,
                label: format!("Sales start {}", format_date(start)),
            }
        }
        _ => {}
    }
    match bound(ticket.sales_end_date.as_deref()) {
        Bound::Unparseable => {
            return TicketStatus {
                code: StatusCode::Disabled,
                label: "Unavailable".to_string(),
            }
        }
        Bound::At(end) if end < now => {
            return TicketStatus {
                code: StatusCode::Ended,
                label: "Sales ended".to_string(),
            }
        }
        _ => {}
    }
    TicketStatus {
        code: StatusCode::Available,
        label: "Available".to_string(),
    }
}

/// Selectable quantities for the tier: `1..=cap`.
pub fn available_quantities(ticket: &EventTicket) -> Vec<u32> {
    let cap = if ticket.max_tickets_per_user > 0 {
        ticket.max_tickets_per_user
    } else {
        DEFAULT_MAX_PER_USER
    };
    (1..=cap).collect()
}

/// Order total: `unit_price * quantity`, rounded half-up to cents.
///
/// The unit price arrives as text from the API and is multiplied as an exact
/// decimal, so no float error can creep in before rounding.
pub fn compute_total(unit_price: &str, quantity: u32) -> Result<Decimal, CheckoutError> {
    if quantity < 1 {
        return Err(CheckoutError::InvalidAmount(format!(
            "Quantity must be at least 1, got {quantity}"
        )));
    }
    let price = Decimal::from_str(unit_price.trim()).map_err(|_| {
        CheckoutError::InvalidAmount(format!("'{unit_price}' is not a valid price"))
    })?;
    if price.is_sign_negative() {
        return Err(CheckoutError::InvalidAmount(format!(
            "Price must not be negative, got {unit_price}"
        )));
    }
    Ok((price * Decimal::from(quantity))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Renders an amount as an en-US currency string, e.g. `$1,234.50`.
/// Currencies without a conventional symbol render as `CODE amount`.
/// An empty code falls back to [`DEFAULT_CURRENCY`].
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let trimmed = currency.trim();
    let code = if trimmed.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        trimmed.to_uppercase()
    };

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(int_part);

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{frac_part}"),
        None => format!("{sign}{code} {grouped}.{frac_part}"),
    }
}

/// Label-style date, e.g. `Sep 5, 2026` (rendered in UTC).
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
