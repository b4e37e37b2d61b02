//! The shared page layout and the display formatting for amounts and
//! percentages.
//!
//! Formatting is a pure presentation transform: the ledger stores plain
//! numbers and the sentinel, and everything below turns them into display
//! strings at render time.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

use crate::ledger::Category;

/// The base HTML document that every page is rendered into.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Budgety" }
                link href="/static/main.css" rel="stylesheet";

                script src="https://unpkg.com/htmx.org@2.0.8" {}
            }

            body
            {
                (content)
            }
        }
    }
}

/// Format an amount for display with a sign, grouped thousands and two
/// decimals, e.g. `+ 2,303.33` for income and `- 450.00` for an expense.
pub fn format_amount(value: f64, category: Category) -> String {
    match category {
        Category::Income => format_magnitude(value.abs(), Sign::Plus),
        Category::Expense => format_magnitude(value.abs(), Sign::Minus),
    }
}

/// Format the headline budget figure. The sign follows the figure itself:
/// `+` when the budget is positive, `-` otherwise (including zero, matching
/// the all-zero display on a fresh ledger).
pub fn format_budget(value: f64) -> String {
    if value > 0.0 {
        format_magnitude(value.abs(), Sign::Plus)
    } else {
        format_magnitude(value.abs(), Sign::Minus)
    }
}

/// Format a percentage figure for display.
///
/// Anything that is not a positive number, the sentinel included, renders as
/// the explicit "no percentage" indicator `---`.
pub fn format_percentage(percentage: i32) -> String {
    if percentage > 0 {
        format!("{percentage}%")
    } else {
        "---".to_owned()
    }
}

enum Sign {
    Plus,
    Minus,
}

fn format_magnitude(magnitude: f64, sign: Sign) -> String {
    static PLUS_FMT: OnceLock<Formatter> = OnceLock::new();
    static MINUS_FMT: OnceLock<Formatter> = OnceLock::new();

    let formatter = match sign {
        Sign::Plus => PLUS_FMT.get_or_init(|| {
            Formatter::currency("+ ")
                .unwrap()
                .precision(Precision::Decimals(2))
        }),
        Sign::Minus => MINUS_FMT.get_or_init(|| {
            Formatter::currency("- ")
                .unwrap()
                .precision(Precision::Decimals(2))
        }),
    };

    // Zero is hardcoded as "0" by numfmt, so we must build the formatted
    // string for zero ourselves.
    if magnitude == 0.0 {
        return match sign {
            Sign::Plus => "+ 0.00".to_owned(),
            Sign::Minus => "- 0.00".to_owned(),
        };
    }

    let mut formatted_string = formatter.fmt_string(magnitude);

    // numfmt omits the last trailing zero, so we must add it ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
