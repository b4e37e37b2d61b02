//! The endpoint URIs.
//!
//! For the endpoint that takes a parameter, use [format_endpoint].

/// The budget page, the only view in the app.
pub const BUDGET_VIEW: &str = "/";
/// The route to add an income or expense item.
pub const POST_ITEM: &str = "/api/items";
/// The route to delete an item.
///
/// The parameter is the composite element id rendered into the list row,
/// e.g. `inc-0` or `exp-3`.
pub const DELETE_ITEM: &str = "/api/items/{item_slug}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `param`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in the endpoint path '/api/items/{item_slug}', '{item_slug}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. If no parameter is found in `endpoint_path`, the
/// function returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, param: &str) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        param,
        &endpoint_path[param_end..]
    )
}
