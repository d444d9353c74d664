//! Statement generation: price every performance of an invoice, total it up,
//! and render the result.
//!
//! Building and rendering are separate steps so hosts can serialize the
//! computed [`Statement`] instead of (or as well as) printing it.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use playbill_core::{DomainError, DomainResult};

use crate::config::StatementConfig;
use crate::invoice::{Invoice, Performance};
use crate::money::usd;
use crate::play::{Play, PlayCatalogue};
use crate::pricing::{amount_for, volume_credits_for};

/// One billed performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub play_name: String,
    /// Charge in cents.
    pub amount: u64,
    pub audience: u32,
    pub volume_credits: u64,
}

/// Fully priced invoice. Lines keep invoice order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    customer: String,
    lines: Vec<StatementLine>,
    total_amount: u64,
    total_volume_credits: u64,
}

impl Statement {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    /// Sum of all line amounts, in cents.
    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }
}

/// Resolve the play a performance refers to.
pub fn play_for<'a>(plays: &'a PlayCatalogue, performance: &Performance) -> DomainResult<&'a Play> {
    plays
        .get(&performance.play_id)
        .ok_or_else(|| DomainError::play_not_found(performance.play_id.as_str()))
}

/// Price every performance and accumulate totals.
///
/// The first failing performance aborts the whole statement; no partial
/// result is returned.
#[instrument(
    skip_all,
    fields(customer = %invoice.customer, performances = invoice.performances.len())
)]
pub fn build_statement(invoice: &Invoice, plays: &PlayCatalogue) -> DomainResult<Statement> {
    fold_performances(invoice, plays).inspect_err(|err| {
        warn!(error = %err, "statement generation aborted");
    })
}

fn fold_performances(invoice: &Invoice, plays: &PlayCatalogue) -> DomainResult<Statement> {
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut total_amount: u64 = 0;
    let mut total_volume_credits: u64 = 0;

    for performance in &invoice.performances {
        let play = play_for(plays, performance)?;
        let amount = amount_for(performance, play)?;
        let volume_credits = volume_credits_for(performance, play);

        debug!(
            play_id = %performance.play_id,
            audience = performance.audience,
            amount,
            volume_credits,
            "priced performance"
        );

        total_amount = total_amount
            .checked_add(amount)
            .ok_or_else(|| DomainError::invariant("statement total amount overflow"))?;
        total_volume_credits = total_volume_credits
            .checked_add(volume_credits)
            .ok_or_else(|| DomainError::invariant("statement volume credits overflow"))?;

        lines.push(StatementLine {
            play_name: play.name.clone(),
            amount,
            audience: performance.audience,
            volume_credits,
        });
    }

    Ok(Statement {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_volume_credits,
    })
}

/// Render a statement as newline-terminated text.
pub fn render_plain_text(statement: &Statement, config: &StatementConfig) -> String {
    let locale = config.locale;
    let indent = config.line_indent();

    let mut result = locale.header(statement.customer());
    result.push('\n');

    for line in statement.lines() {
        result.push_str(&format!(
            "{indent}{}: {} ({})\n",
            line.play_name,
            usd(line.amount),
            locale.seats(line.audience)
        ));
    }

    result.push_str(&locale.amount_owed(&usd(statement.total_amount())));
    result.push('\n');
    result.push_str(&locale.credits_earned(statement.total_volume_credits()));
    result.push('\n');
    result
}

/// Generate the plain-text statement for `invoice` with the default layout.
pub fn statement(invoice: &Invoice, plays: &PlayCatalogue) -> DomainResult<String> {
    statement_with(invoice, plays, &StatementConfig::default())
}

/// Generate the plain-text statement for `invoice` using `config`.
pub fn statement_with(
    invoice: &Invoice,
    plays: &PlayCatalogue,
    config: &StatementConfig,
) -> DomainResult<String> {
    let statement = build_statement(invoice, plays)?;
    Ok(render_plain_text(&statement, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatementLocale;
    use proptest::prelude::*;

    fn test_plays() -> PlayCatalogue {
        PlayCatalogue::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"))
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ],
        )
    }

    #[test]
    fn build_statement_prices_each_performance_in_order() {
        let statement = build_statement(&big_co(), &test_plays()).unwrap();

        assert_eq!(statement.customer(), "BigCo");
        assert_eq!(
            statement.lines(),
            &[
                StatementLine {
                    play_name: "Hamlet".to_string(),
                    amount: 65_000,
                    audience: 55,
                    volume_credits: 25,
                },
                StatementLine {
                    play_name: "As You Like It".to_string(),
                    amount: 38_500,
                    audience: 35,
                    volume_credits: 12,
                },
            ]
        );
        assert_eq!(statement.total_amount(), 65_000 + 38_500);
        assert_eq!(statement.total_volume_credits(), 25 + 12);
    }

    #[test]
    fn statement_renders_english_layout() {
        let text = statement(&big_co(), &test_plays()).unwrap();

        assert_eq!(
            text,
            "Statement for BigCo\n\
             \x20 Hamlet: $650.00 (55 seats)\n\
             \x20 As You Like It: $385.00 (35 seats)\n\
             Amount owed is $1,035.00\n\
             You earned 37 credits\n"
        );
    }

    #[test]
    fn statement_renders_korean_layout() {
        let config = StatementConfig::default().with_locale(StatementLocale::Ko);
        let text = statement_with(&big_co(), &test_plays(), &config).unwrap();

        assert_eq!(
            text,
            "청구 내역 (고객명 BigCo)\n \
             Hamlet: $650.00 (55석)\n \
             As You Like It: $385.00 (35석)\n\
             총액: $1,035.00\n\
             적립 포인트: 37점\n"
        );
    }

    #[test]
    fn empty_invoice_has_zero_totals() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let text = statement(&invoice, &test_plays()).unwrap();

        assert_eq!(
            text,
            "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
    }

    #[test]
    fn unknown_genre_aborts_whole_statement() {
        let plays = test_plays().with_play("henry-v", Play::new("Henry V", "historical"));
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("henry-v", 20),
                Performance::new("as-like", 35),
            ],
        );

        let err = statement(&invoice, &plays).unwrap_err();
        assert_eq!(err, DomainError::UnknownGenre("historical".to_string()));
    }

    #[test]
    fn missing_play_is_a_lookup_failure() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("lear", 10)]);

        let err = build_statement(&invoice, &test_plays()).unwrap_err();
        match err {
            DomainError::PlayNotFound(id) if id == "lear" => {}
            other => panic!("Expected PlayNotFound, got {other:?}"),
        }
    }

    #[test]
    fn play_for_resolves_from_catalogue() {
        let plays = test_plays();
        let play = play_for(&plays, &Performance::new("othello", 40)).unwrap();
        assert_eq!(play, &Play::tragedy("Othello"));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals are the sums of the per-line values, whatever the order.
        #[test]
        fn totals_equal_sum_of_lines(
            performances in prop::collection::vec(
                (prop::sample::select(vec!["hamlet", "as-like", "othello"]), 0u32..10_000),
                0..20,
            )
        ) {
            let invoice = Invoice::new(
                "PropCo",
                performances
                    .iter()
                    .map(|(id, audience)| Performance::new(*id, *audience))
                    .collect(),
            );

            let statement = build_statement(&invoice, &test_plays()).unwrap();

            prop_assert_eq!(statement.lines().len(), invoice.performances.len());
            let amount: u64 = statement.lines().iter().map(|l| l.amount).sum();
            let credits: u64 = statement.lines().iter().map(|l| l.volume_credits).sum();
            prop_assert_eq!(statement.total_amount(), amount);
            prop_assert_eq!(statement.total_volume_credits(), credits);

            for (line, perf) in statement.lines().iter().zip(&invoice.performances) {
                prop_assert_eq!(line.audience, perf.audience);
            }
        }
    }
}
