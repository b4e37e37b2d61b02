//! The budget fragment: summary labels, the add form, and both item lists.
//!
//! Every mutation endpoint responds with this fragment so htmx can swap the
//! whole thing in one go. Re-rendering the add form along with the lists is
//! what clears the input fields after a successful add.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{format_amount, format_budget, format_percentage},
    ledger::{Category, Ledger, Record},
};

use super::slug::ItemSlug;

/// Render the `#budget-app` fragment from the current ledger state.
///
/// The expense percentages are read in expense list order, so each rendered
/// row lines up with its own figure.
pub fn budget_view(ledger: &Ledger) -> Markup {
    let snapshot = ledger.snapshot();

    html! {
        div id="budget-app" class="budget-app"
        {
            section class="summary"
            {
                div class="summary__budget"
                {
                    span class="summary__label" { "Budget" }
                    span id="budget-value" class="summary__value"
                    {
                        (format_budget(snapshot.budget))
                    }
                }

                div class="summary__row summary__row--income"
                {
                    span class="summary__row-label" { "Income" }
                    span id="income-total" class="summary__row-value"
                    {
                        (format_amount(snapshot.total_income, Category::Income))
                    }
                }

                div class="summary__row summary__row--expense"
                {
                    span class="summary__row-label" { "Expenses" }
                    span id="expense-total" class="summary__row-value"
                    {
                        (format_amount(snapshot.total_expense, Category::Expense))
                    }
                    span id="overall-percentage" class="summary__percentage"
                    {
                        (format_percentage(snapshot.overall_percentage))
                    }
                }
            }

            (add_form())

            div class="lists"
            {
                section class="list list--income"
                {
                    h2 class="list__title" { "Income" }
                    div class="list__items"
                    {
                        @for record in ledger.incomes()
                        {
                            (item_row(record, None))
                        }
                    }
                }

                section class="list list--expense"
                {
                    h2 class="list__title" { "Expenses" }
                    div class="list__items"
                    {
                        @for (record, percentage) in
                            ledger.expenses().iter().zip(ledger.expense_percentages())
                        {
                            (item_row(record, Some(percentage)))
                        }
                    }
                }
            }
        }
    }
}

/// The add form. The category select defaults to income, and a plain Enter
/// in either field submits the form.
fn add_form() -> Markup {
    html! {
        form class="add"
            hx-post=(endpoints::POST_ITEM)
            hx-target="#budget-app"
            hx-swap="outerHTML"
        {
            select class="add__type" name="category"
            {
                option value="inc" { "+" }
                option value="exp" { "-" }
            }
            input class="add__description"
                name="description"
                type="text"
                placeholder="Add description";
            input class="add__value"
                name="value"
                type="number"
                step="0.01"
                placeholder="Value";
            button class="add__btn" type="submit" { "\u{2713}" }
        }
    }
}

/// One list row, tagged with the composite element id (`inc-0`, `exp-3`) that
/// the delete endpoint parses back into `(category, id)`.
fn item_row(record: &Record, percentage: Option<i32>) -> Markup {
    let slug = ItemSlug::new(record.category, record.id);

    html! {
        div id=(slug) class="item"
        {
            div class="item__description" { (record.description) }
            div class="item__value" { (format_amount(record.value, record.category)) }
            @if let Some(percentage) = percentage
            {
                div class="item__percentage" { (format_percentage(percentage)) }
            }
            button class="item__delete"
                hx-delete=(endpoints::format_endpoint(endpoints::DELETE_ITEM, &slug.to_string()))
                hx-target="#budget-app"
                hx-swap="outerHTML"
            {
                "\u{00d7}"
            }
        }
    }
}
