//! Per-performance pricing and volume credit rules.
//!
//! All amounts are in cents.

use playbill_core::DomainResult;

use crate::invoice::Performance;
use crate::play::{Genre, Play};

const TRAGEDY_BASE: u64 = 40_000;
const TRAGEDY_PER_EXTRA_SEAT: u64 = 1_000;

const COMEDY_BASE: u64 = 30_000;
const COMEDY_LARGE_HOUSE_FLAT: u64 = 1_000;
const COMEDY_PER_SEAT_OVER_TWENTY: u64 = 500;
const COMEDY_SEAT_OFFSET: u64 = 20;

/// Audience size above which surcharges apply and volume credits accrue.
const AUDIENCE_THRESHOLD: u64 = 30;

/// Comedy earns one bonus credit per this many attendees.
const COMEDY_CREDIT_GROUP: u64 = 5;

/// Charge for one performance of `play`.
///
/// Fails with `UnknownGenre` when the play's genre has no pricing rule.
pub fn amount_for(performance: &Performance, play: &Play) -> DomainResult<u64> {
    let audience = u64::from(performance.audience);

    let amount = match play.genre()? {
        Genre::Tragedy => {
            let mut result = TRAGEDY_BASE;
            if audience > AUDIENCE_THRESHOLD {
                result += TRAGEDY_PER_EXTRA_SEAT * (audience - AUDIENCE_THRESHOLD);
            }
            result
        }
        Genre::Comedy => {
            let mut result = COMEDY_BASE;
            // Surcharge kicks in above 30 seats but is computed from seat 20.
            if audience > AUDIENCE_THRESHOLD {
                result += COMEDY_LARGE_HOUSE_FLAT
                    + COMEDY_PER_SEAT_OVER_TWENTY * (audience - COMEDY_SEAT_OFFSET);
            }
            result
        }
    };

    Ok(amount)
}

/// Loyalty credits earned by one performance.
///
/// Never fails: a play with an unrecognised genre only earns the base credits.
pub fn volume_credits_for(performance: &Performance, play: &Play) -> u64 {
    let audience = u64::from(performance.audience);

    let mut result = audience.saturating_sub(AUDIENCE_THRESHOLD);
    if matches!(play.genre(), Ok(Genre::Comedy)) {
        result += audience / COMEDY_CREDIT_GROUP;
    }
    result
}
