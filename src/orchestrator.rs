//! Sequences ledger mutations with the two recalculation passes.
//!
//! Totals must be recomputed before per-expense percentages because the
//! percentages are a function of total income. The [Orchestrator] is the only
//! type that can run the passes at all, so callers can never observe a state
//! where the records changed but the aggregates did not follow.

use crate::ledger::{BudgetSnapshot, Category, Ledger, Record};

/// Everything the web layer needs to render the result of an add: the newly
/// created record plus both derived views.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// The record that was created, with its assigned id.
    pub record: Record,
    /// The aggregate figures after recalculation.
    pub snapshot: BudgetSnapshot,
    /// Per-expense percentages, in expense list order.
    pub expense_percentages: Vec<i32>,
}

/// The derived views after a delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    /// The aggregate figures after recalculation.
    pub snapshot: BudgetSnapshot,
    /// Per-expense percentages, in expense list order.
    pub expense_percentages: Vec<i32>,
}

/// Owns the session's [Ledger] and guarantees that every mutation is followed
/// by a totals pass and then a percentages pass, in that order, before the
/// caller gets the results back.
#[derive(Debug)]
pub struct Orchestrator {
    ledger: Ledger,
}

impl Orchestrator {
    /// Wrap a ledger. One orchestrator per session; the web layer shares it
    /// behind the app state.
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Read access for rendering. Mutations go through [Orchestrator::apply_add]
    /// and [Orchestrator::apply_delete] only.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Add a record, recalculate, and return the fresh views.
    ///
    /// The caller has already validated `description` and `value` (see the
    /// add endpoint); the orchestrator passes them straight through.
    pub fn apply_add(&mut self, category: Category, description: &str, value: f64) -> AddOutcome {
        self.ledger.add_item(category, description, value);

        self.ledger.recalculate_totals();
        self.ledger.recalculate_percentages();

        // Cloned after the passes so an expense carries its fresh percentage.
        let record = match category {
            Category::Income => self.ledger.incomes().last(),
            Category::Expense => self.ledger.expenses().last(),
        }
        .cloned()
        .expect("the record was appended above");

        AddOutcome {
            record,
            snapshot: self.ledger.snapshot(),
            expense_percentages: self.ledger.expense_percentages(),
        }
    }

    /// Delete a record, recalculate, and return the fresh views.
    ///
    /// Deleting an id that does not exist succeeds silently and returns the
    /// unchanged aggregates.
    pub fn apply_delete(&mut self, category: Category, id: u32) -> DeleteOutcome {
        self.ledger.delete_item(category, id);

        self.ledger.recalculate_totals();
        self.ledger.recalculate_percentages();

        DeleteOutcome {
            snapshot: self.ledger.snapshot(),
            expense_percentages: self.ledger.expense_percentages(),
        }
    }
}

#[cfg(test)]
mod orchestrator_tests {
    use super::Orchestrator;
    use crate::ledger::{BudgetSnapshot, Category, Ledger, NO_PERCENTAGE};

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(Ledger::new())
    }

    #[test]
    fn adding_income_updates_the_budget() {
        let mut orchestrator = orchestrator();

        let outcome = orchestrator.apply_add(Category::Income, "salary", 1000.0);

        assert_eq!(outcome.record.id, 0);
        assert_eq!(outcome.record.description, "salary");
        assert_eq!(
            outcome.snapshot,
            BudgetSnapshot {
                budget: 1000.0,
                total_income: 1000.0,
                total_expense: 0.0,
                overall_percentage: NO_PERCENTAGE,
            }
        );
        assert!(outcome.expense_percentages.is_empty());
    }

    #[test]
    fn adding_an_expense_computes_its_percentage_of_income() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Income, "salary", 1000.0);

        let outcome = orchestrator.apply_add(Category::Expense, "rent", 300.0);

        assert_eq!(
            outcome.snapshot,
            BudgetSnapshot {
                budget: 700.0,
                total_income: 1000.0,
                total_expense: 300.0,
                overall_percentage: 30,
            }
        );
        assert_eq!(outcome.expense_percentages, vec![30]);
        assert_eq!(outcome.record.percentage_of_income(), 30);
    }

    #[test]
    fn every_expense_percentage_is_refreshed_on_each_add() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Income, "salary", 1000.0);
        orchestrator.apply_add(Category::Expense, "rent", 300.0);

        let outcome = orchestrator.apply_add(Category::Expense, "food", 200.0);

        assert_eq!(outcome.expense_percentages, vec![30, 20]);
        assert_eq!(outcome.snapshot.overall_percentage, 50);
    }

    #[test]
    fn deleting_an_expense_recomputes_the_remaining_percentages() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Income, "salary", 1000.0);
        orchestrator.apply_add(Category::Expense, "rent", 300.0);
        orchestrator.apply_add(Category::Expense, "food", 200.0);

        let outcome = orchestrator.apply_delete(Category::Expense, 0);

        assert_eq!(outcome.expense_percentages, vec![20]);
        assert_eq!(
            outcome.snapshot,
            BudgetSnapshot {
                budget: 800.0,
                total_income: 1000.0,
                total_expense: 200.0,
                overall_percentage: 20,
            }
        );
    }

    #[test]
    fn deleting_all_income_pushes_percentages_back_to_the_sentinel() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Income, "salary", 1000.0);
        orchestrator.apply_add(Category::Expense, "rent", 300.0);

        let outcome = orchestrator.apply_delete(Category::Income, 0);

        assert_eq!(outcome.snapshot.overall_percentage, NO_PERCENTAGE);
        assert_eq!(outcome.expense_percentages, vec![NO_PERCENTAGE]);
        assert_eq!(outcome.snapshot.budget, -300.0);
    }

    #[test]
    fn an_expense_with_no_income_gets_the_sentinel() {
        let mut orchestrator = orchestrator();

        let outcome = orchestrator.apply_add(Category::Expense, "rent", 50.0);

        assert_eq!(outcome.record.percentage_of_income(), NO_PERCENTAGE);
        assert_eq!(outcome.expense_percentages, vec![NO_PERCENTAGE]);
        assert_eq!(outcome.snapshot.overall_percentage, NO_PERCENTAGE);
        assert_eq!(outcome.snapshot.budget, -50.0);
    }

    #[test]
    fn deleting_an_unknown_id_returns_the_unchanged_aggregates() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Income, "salary", 1000.0);
        let before = orchestrator.apply_add(Category::Expense, "rent", 300.0);

        let outcome = orchestrator.apply_delete(Category::Expense, 99);

        assert_eq!(outcome.snapshot, before.snapshot);
        assert_eq!(outcome.expense_percentages, before.expense_percentages);
    }

    #[test]
    fn re_adding_after_a_delete_continues_from_the_max_surviving_id() {
        let mut orchestrator = orchestrator();
        orchestrator.apply_add(Category::Expense, "rent", 300.0);
        orchestrator.apply_add(Category::Expense, "food", 200.0);
        orchestrator.apply_delete(Category::Expense, 0);

        let outcome = orchestrator.apply_add(Category::Expense, "petrol", 100.0);

        assert_eq!(outcome.record.id, 2);
    }
}
