//! Defines the core data model for the budget: income and expense records,
//! running totals, and the derived percentage figures.
//!
//! The [Ledger] is the single source of truth for all financial state. It has
//! no knowledge of presentation; the web layer only ever reads from it through
//! [Ledger::snapshot], [Ledger::expense_percentages] and the record accessors,
//! and only ever writes to it through the
//! [Orchestrator](crate::orchestrator::Orchestrator).

use serde::{Deserialize, Serialize};

/// Marker meaning "no meaningful percentage", e.g. when the total income is
/// zero. Distinct from a computed zero.
pub const NO_PERCENTAGE: i32 = -1;

/// Whether a record is money coming in or money going out.
///
/// The category of a record is fixed at creation and determines which list
/// the record lives in. The serialized form is the short code (`inc`/`exp`)
/// used by the add form and by composite element ids such as `exp-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Money earned.
    #[serde(rename = "inc")]
    Income,
    /// Money spent.
    #[serde(rename = "exp")]
    Expense,
}

impl Category {
    /// The short code used in element ids and form values.
    pub fn code(self) -> &'static str {
        match self {
            Category::Income => "inc",
            Category::Expense => "exp",
        }
    }

    /// Parse a short code back into a category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inc" => Some(Category::Income),
            "exp" => Some(Category::Expense),
            _ => None,
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier unique within the record's category. Income ids and expense
    /// ids are independent sequences.
    pub id: u32,
    /// Whether this record is income or an expense.
    pub category: Category,
    /// A text description of what the money was for.
    pub description: String,
    /// The non-negative amount of money.
    pub value: f64,
    /// Only meaningful for expenses. Kept at [NO_PERCENTAGE] for income
    /// records, which never display a percentage.
    percentage_of_income: i32,
}

impl Record {
    /// This expense's share of total income as a whole-number percentage,
    /// or [NO_PERCENTAGE] when no income exists (and always for income
    /// records).
    pub fn percentage_of_income(&self) -> i32 {
        self.percentage_of_income
    }
}

/// The sums of record values, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// The sum over all income records.
    pub income: f64,
    /// The sum over all expense records.
    pub expense: f64,
}

/// A read-only view of the aggregate figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSnapshot {
    /// Total income minus total expenses. May be negative.
    pub budget: f64,
    /// The sum over all income records.
    pub total_income: f64,
    /// The sum over all expense records.
    pub total_expense: f64,
    /// Total expenses as a whole-number percentage of total income, or
    /// [NO_PERCENTAGE] when there is no income.
    pub overall_percentage: i32,
}

/// The in-memory store of income and expense records plus the derived
/// aggregates.
///
/// Mutations leave the aggregates stale on purpose: [Ledger::add_item] and
/// [Ledger::delete_item] never recalculate as a side effect. The two
/// recalculation passes are crate-private and are only ever run, in the
/// correct order, by the [Orchestrator](crate::orchestrator::Orchestrator).
#[derive(Debug)]
pub struct Ledger {
    incomes: Vec<Record>,
    expenses: Vec<Record>,
    totals: Totals,
    budget: f64,
    overall_percentage: i32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger. The budget starts at zero and the overall
    /// percentage at [NO_PERCENTAGE].
    pub fn new() -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            totals: Totals::default(),
            budget: 0.0,
            overall_percentage: NO_PERCENTAGE,
        }
    }

    /// The income records in insertion order.
    pub fn incomes(&self) -> &[Record] {
        &self.incomes
    }

    /// The expense records in insertion order.
    pub fn expenses(&self) -> &[Record] {
        &self.expenses
    }

    /// Append a new record to `category`'s list and return it.
    ///
    /// The id is derived from the current contents: one more than the last
    /// surviving id, or 0 for an empty list. Ids are never reused after a
    /// deletion because the last record always carries the largest id.
    ///
    /// The caller is expected to have validated `description` (non-empty) and
    /// `value` (finite, greater than zero); the ledger itself rejects
    /// nothing. Aggregates are stale after this call until the next
    /// recalculation.
    pub fn add_item(&mut self, category: Category, description: &str, value: f64) -> &Record {
        let records = self.records_mut(category);
        let id = match records.last() {
            Some(record) => record.id + 1,
            None => 0,
        };

        records.push(Record {
            id,
            category,
            description: description.to_owned(),
            value,
            percentage_of_income: NO_PERCENTAGE,
        });

        let index = records.len() - 1;
        &records[index]
    }

    /// Remove the record with `id` from `category`'s list, keeping the order
    /// of the remaining records.
    ///
    /// Deleting an id that does not exist is a no-op: delete requests carry
    /// ids parsed from rendered elements, so a miss means the record is
    /// already gone (e.g. a double-click), not a fault.
    pub fn delete_item(&mut self, category: Category, id: u32) {
        let records = self.records_mut(category);

        if let Some(index) = records.iter().position(|record| record.id == id) {
            records.remove(index);
        }
    }

    /// Recompute the totals, the budget and the overall percentage from the
    /// current records.
    ///
    /// Only the orchestrator calls this, always before
    /// [Ledger::recalculate_percentages].
    pub(crate) fn recalculate_totals(&mut self) {
        self.totals.income = self.incomes.iter().map(|record| record.value).sum();
        self.totals.expense = self.expenses.iter().map(|record| record.value).sum();
        self.budget = self.totals.income - self.totals.expense;

        self.overall_percentage = if self.totals.income > 0.0 {
            (self.totals.expense / self.totals.income * 100.0).round() as i32
        } else {
            NO_PERCENTAGE
        };
    }

    /// Recompute each expense's percentage of total income.
    ///
    /// Uses the income total fixed by the most recent
    /// [Ledger::recalculate_totals]; running it against stale totals is a
    /// sequencing bug, which is why only the orchestrator may call it.
    pub(crate) fn recalculate_percentages(&mut self) {
        let total_income = self.totals.income;

        for record in &mut self.expenses {
            record.percentage_of_income = if total_income > 0.0 {
                (record.value / total_income * 100.0).round() as i32
            } else {
                NO_PERCENTAGE
            };
        }
    }

    /// A read-only view of the aggregate figures as of the most recent
    /// recalculation.
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            overall_percentage: self.overall_percentage,
        }
    }

    /// Each expense's percentage of income, in the same order as
    /// [Ledger::expenses] so the web layer can line them up with the
    /// rendered rows.
    pub fn expense_percentages(&self) -> Vec<i32> {
        self.expenses
            .iter()
            .map(|record| record.percentage_of_income)
            .collect()
    }

    fn records_mut(&mut self, category: Category) -> &mut Vec<Record> {
        match category {
            Category::Income => &mut self.incomes,
            Category::Expense => &mut self.expenses,
        }
    }
}

#[cfg(test)]
mod ledger_tests {
    use super::{Category, Ledger, NO_PERCENTAGE};

    #[test]
    fn ids_count_up_from_zero_within_a_category() {
        let mut ledger = Ledger::new();

        for (i, description) in ["salary", "bonus", "dividends"].iter().enumerate() {
            let record = ledger.add_item(Category::Income, description, 100.0);
            assert_eq!(record.id, i as u32);
        }
    }

    #[test]
    fn income_and_expense_ids_are_independent_sequences() {
        let mut ledger = Ledger::new();

        ledger.add_item(Category::Income, "salary", 1000.0);
        let expense = ledger.add_item(Category::Expense, "rent", 300.0);

        assert_eq!(expense.id, 0);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Expense, "rent", 300.0);
        ledger.add_item(Category::Expense, "food", 200.0);

        ledger.delete_item(Category::Expense, 1);
        let record = ledger.add_item(Category::Expense, "petrol", 50.0);

        // Max surviving id is 0, so the new id must be 1, not 2.
        assert_eq!(record.id, 1);
    }

    #[test]
    fn next_id_restarts_at_zero_when_category_is_emptied() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 1000.0);

        ledger.delete_item(Category::Income, 0);
        let record = ledger.add_item(Category::Income, "bonus", 500.0);

        assert_eq!(record.id, 0);
    }

    #[test]
    fn totals_and_budget_match_record_values() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 1500.0);
        ledger.add_item(Category::Income, "bonus", 500.0);
        ledger.add_item(Category::Expense, "rent", 750.0);

        ledger.recalculate_totals();
        let snapshot = ledger.snapshot();

        assert_eq!(snapshot.total_income, 2000.0);
        assert_eq!(snapshot.total_expense, 750.0);
        assert_eq!(snapshot.budget, 1250.0);
    }

    #[test]
    fn budget_may_go_negative() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "pocket money", 100.0);
        ledger.add_item(Category::Expense, "rent", 400.0);

        ledger.recalculate_totals();

        assert_eq!(ledger.snapshot().budget, -300.0);
    }

    #[test]
    fn zero_income_yields_the_sentinel_everywhere() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Expense, "rent", 50.0);

        ledger.recalculate_totals();
        ledger.recalculate_percentages();

        assert_eq!(ledger.snapshot().overall_percentage, NO_PERCENTAGE);
        assert_eq!(ledger.expense_percentages(), vec![NO_PERCENTAGE]);
    }

    #[test]
    fn expense_percentages_are_rounded_to_the_nearest_whole_number() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 3000.0);
        // 1/3 of income: 33.33...% must round down to 33.
        ledger.add_item(Category::Expense, "rent", 1000.0);
        // 2/3 of income: 66.66...% must round up to 67.
        ledger.add_item(Category::Expense, "car", 2000.0);

        ledger.recalculate_totals();
        ledger.recalculate_percentages();

        assert_eq!(ledger.expense_percentages(), vec![33, 67]);
    }

    #[test]
    fn expense_percentages_follow_expense_list_order() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 1000.0);
        ledger.add_item(Category::Expense, "rent", 300.0);
        ledger.add_item(Category::Expense, "food", 200.0);
        ledger.add_item(Category::Expense, "petrol", 100.0);

        ledger.recalculate_totals();
        ledger.recalculate_percentages();

        assert_eq!(ledger.expense_percentages(), vec![30, 20, 10]);
    }

    #[test]
    fn deleting_a_missing_id_changes_nothing() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 1000.0);
        ledger.add_item(Category::Expense, "rent", 300.0);
        ledger.recalculate_totals();
        let before = ledger.snapshot();

        ledger.delete_item(Category::Expense, 42);
        ledger.recalculate_totals();

        assert_eq!(ledger.snapshot(), before);
        assert_eq!(ledger.expenses().len(), 1);
    }

    #[test]
    fn deletion_preserves_the_order_of_remaining_records() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Expense, "rent", 300.0);
        ledger.add_item(Category::Expense, "food", 200.0);
        ledger.add_item(Category::Expense, "petrol", 100.0);

        ledger.delete_item(Category::Expense, 1);

        let descriptions: Vec<&str> = ledger
            .expenses()
            .iter()
            .map(|record| record.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["rent", "petrol"]);
    }

    #[test]
    fn income_records_report_the_sentinel_percentage() {
        let mut ledger = Ledger::new();
        ledger.add_item(Category::Income, "salary", 1000.0);

        ledger.recalculate_totals();
        ledger.recalculate_percentages();

        assert_eq!(ledger.incomes()[0].percentage_of_income(), NO_PERCENTAGE);
    }

    #[test]
    fn category_codes_round_trip() {
        assert_eq!(Category::from_code("inc"), Some(Category::Income));
        assert_eq!(Category::from_code("exp"), Some(Category::Expense));
        assert_eq!(Category::from_code("income"), None);
        assert_eq!(Category::Income.code(), "inc");
        assert_eq!(Category::Expense.code(), "exp");
    }
}
