//! Order submission pipeline
//!
//! Drives a material-order submission end to end: extraction filter,
//! validation, the high-quantity confirmation gate, the final confirmation
//! gate, and on acceptance the ledger write. The whole flow is synchronous
//! and all-or-nothing: declining any gate aborts with no side effects.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::models::{Order, OrderEntry, ShippingMethod};

use super::errors::OrderError;
use super::ledger::OrderLedger;
use super::validation::{check_order_validity, extract_entries, partition_high_quantity};

/// Modal interaction seam between the pipeline and the presentation layer.
///
/// Prompts are modal: the pipeline blocks on `confirm` and resumes
/// synchronously with the user's choice.
pub trait Prompt {
    /// Show a message the user can only acknowledge
    fn notify(&mut self, title: &str, body: &str);

    /// Ask a yes/no question; `true` means the user accepted
    fn confirm(&mut self, title: &str, body: &str) -> bool;
}

/// How a submission attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The forwarded batch was empty; the validator was never invoked
    NoEntries,
    /// One or more pairs failed validation; nothing was committed
    Rejected { errors: Vec<String> },
    /// The user declined a confirmation gate; a normal abort, not an error
    Declined,
    /// The order was confirmed and recorded in the ledger
    Placed {
        order_id: String,
        entries: Vec<OrderEntry>,
    },
}

/// Run the full submission pipeline over raw (SKU, quantity) form input.
///
/// # Flow
/// 1. [`extract_entries`] filters unusable pairs; an empty batch is
///    reported as `NoEntries` without invoking the validator.
/// 2. [`check_order_validity`] collects every per-pair error; any error
///    rejects the whole batch.
/// 3. Entries at or above `high_quantity_threshold` must be explicitly
///    confirmed; declining aborts the whole submission.
/// 4. The full accepted list gets one last accept/decline.
/// 5. On acceptance a `Pending` order is recorded in the ledger, priced
///    against the catalog, and the caller should clear its form.
pub fn submit_order(
    raw: &[(String, String)],
    ledger: &mut OrderLedger,
    catalog: &Catalog,
    prompt: &mut dyn Prompt,
    high_quantity_threshold: u32,
) -> Result<SubmissionOutcome, OrderError> {
    let entries = extract_entries(raw);
    if entries.is_empty() {
        prompt.notify(
            "Invalid Input",
            "Please enter at least one valid SKU and quantity.",
        );
        return Ok(SubmissionOutcome::NoEntries);
    }

    let result = check_order_validity(&entries, None);
    if !result.is_valid() {
        tracing::debug!(errors = result.errors.len(), "order validation failed");
        prompt.notify("Order Validation Failed", &result.errors.join("\n"));
        return Ok(SubmissionOutcome::Rejected {
            errors: result.errors,
        });
    }

    let (high_quantity, _) = partition_high_quantity(&result.valid, high_quantity_threshold);
    if !high_quantity.is_empty() {
        let high_qty_text = entry_lines(&high_quantity);
        let confirmed = prompt.confirm(
            "High Quantity Confirmation",
            &format!(
                "These SKUs have a quantity of {high_quantity_threshold} or more:\n\n{high_qty_text}\n\nProceed?"
            ),
        );
        if !confirmed {
            tracing::debug!("high-quantity confirmation declined");
            return Ok(SubmissionOutcome::Declined);
        }
    }

    let order_summary = entry_lines(&result.valid);
    let confirmed = prompt.confirm(
        "Confirm Order",
        &format!("Do you want to place this order?\n\n{order_summary}"),
    );
    if !confirmed {
        tracing::debug!("final confirmation declined");
        return Ok(SubmissionOutcome::Declined);
    }

    let order_id = ledger.next_order_id();
    let order = Order::new(
        order_id.clone(),
        chrono::Local::now().date_naive(),
        ShippingMethod::Standard,
        price_entries(&result.valid, catalog),
    );
    ledger.insert(order)?;

    tracing::info!(order_id = %order_id, entries = result.valid.len(), "order placed");
    prompt.notify("Order Placed", &format!("Order {order_id} has been recorded."));

    Ok(SubmissionOutcome::Placed {
        order_id,
        entries: result.valid,
    })
}

/// One "SKU: quantity" line per entry
fn entry_lines(entries: &[OrderEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.sku, entry.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Total order price. Entries without a catalog price contribute nothing.
fn price_entries(entries: &[OrderEntry], catalog: &Catalog) -> Decimal {
    entries
        .iter()
        .filter_map(|entry| {
            catalog
                .find_by_sku(&entry.sku)
                .map(|item| item.price * Decimal::from(entry.quantity))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validation::HIGH_QUANTITY_THRESHOLD;
    use rust_decimal_macros::dec;

    /// Prompt stub that answers confirmations from a script and records
    /// everything it was shown
    struct ScriptedPrompt {
        answers: Vec<bool>,
        notices: Vec<(String, String)>,
        confirms: Vec<(String, String)>,
    }

    impl ScriptedPrompt {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.to_vec(),
                notices: Vec::new(),
                confirms: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn notify(&mut self, title: &str, body: &str) {
            self.notices.push((title.to_string(), body.to_string()));
        }

        fn confirm(&mut self, title: &str, body: &str) -> bool {
            self.confirms.push((title.to_string(), body.to_string()));
            self.answers.remove(0)
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(s, q)| (s.to_string(), q.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_batch_reports_no_entries() {
        let mut ledger = OrderLedger::new();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[]);

        let outcome = submit_order(
            &raw(&[("", "5"), ("ABC-1234", "abc")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        assert_eq!(outcome, SubmissionOutcome::NoEntries);
        assert_eq!(prompt.notices[0].0, "Invalid Input");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_batch_is_rejected_with_all_errors() {
        let mut ledger = OrderLedger::new();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[]);

        let outcome = submit_order(
            &raw(&[("bad-sku", "5"), ("ham-0001", "2")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        match outcome {
            SubmissionOutcome::Rejected { errors } => assert_eq!(errors.len(), 2),
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(prompt.notices[0].0, "Order Validation Failed");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_declining_high_quantity_gate_aborts_whole_submission() {
        let mut ledger = OrderLedger::new();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[false]);

        let outcome = submit_order(
            &raw(&[("ABC-1234", "150"), ("XYZ-9999", "5")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Declined);
        assert!(ledger.is_empty());

        // The gate listed only the high-quantity entry
        let (title, body) = &prompt.confirms[0];
        assert_eq!(title, "High Quantity Confirmation");
        assert!(body.contains("ABC-1234: 150"));
        assert!(!body.contains("XYZ-9999"));
    }

    #[test]
    fn test_declining_final_gate_leaves_ledger_unchanged() {
        let mut ledger = OrderLedger::seeded();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[true, false]);

        let outcome = submit_order(
            &raw(&[("ABC-1234", "150"), ("XYZ-9999", "5")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        assert_eq!(outcome, SubmissionOutcome::Declined);
        assert_eq!(ledger.len(), 33);
    }

    #[test]
    fn test_accepting_both_gates_places_order() {
        let mut ledger = OrderLedger::seeded();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[true, true]);

        let outcome = submit_order(
            &raw(&[("ABC-1234", "150"), ("XYZ-9999", "5")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        match outcome {
            SubmissionOutcome::Placed { order_id, entries } => {
                assert_eq!(order_id, "ORD156");
                assert_eq!(entries.len(), 2);
                assert!(ledger.find_by_id("ORD156").is_some());
            }
            other => panic!("expected Placed, got {other:?}"),
        }
        assert_eq!(ledger.len(), 34);
        assert_eq!(prompt.confirms[1].0, "Confirm Order");
    }

    #[test]
    fn test_no_high_quantity_gate_below_threshold() {
        let mut ledger = OrderLedger::new();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[true]);

        let outcome = submit_order(
            &raw(&[("HAM-0001", "2")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        // Only the final confirmation fired
        assert_eq!(prompt.confirms.len(), 1);
        assert_eq!(prompt.confirms[0].0, "Confirm Order");
        assert!(matches!(outcome, SubmissionOutcome::Placed { .. }));
    }

    #[test]
    fn test_placed_order_priced_from_catalog() {
        let mut ledger = OrderLedger::new();
        let catalog = Catalog::seeded();
        let mut prompt = ScriptedPrompt::answering(&[true]);

        // HAM-0001 is 14.99 in the seeded catalog; XYZ-9999 has no price
        let outcome = submit_order(
            &raw(&[("HAM-0001", "3"), ("XYZ-9999", "1")]),
            &mut ledger,
            &catalog,
            &mut prompt,
            HIGH_QUANTITY_THRESHOLD,
        )
        .unwrap();

        assert!(matches!(outcome, SubmissionOutcome::Placed { .. }));
        let order = ledger.find_by_id("ORD100").unwrap();
        assert_eq!(order.price, dec!(44.97));
    }
}
