use crate::aggregate::Total;
use crate::config::DisplayConfig;

/// Render a total as a fiat figure, e.g. `$1,234.5`.
///
/// Absent totals render as the configured placeholder. Fractional digits are
/// kept exactly unless `max_decimals` is set, in which case they are
/// truncated toward zero.
pub fn format_fiat(total: Total, display: &DisplayConfig) -> String {
    let Some(mut value) = total.quantity() else {
        return display.placeholder.clone();
    };

    if let Some(decimals) = display.max_decimals {
        value = value.truncate(decimals);
    }

    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, frac) = match unsigned.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = format!("{sign}{}{}", display.currency_symbol, group_thousands(whole));
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Header title: the selected account's name, or the configured fallback
pub fn account_title(selected: Option<&str>, display: &DisplayConfig) -> String {
    match selected.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => display.default_account_title.clone(),
    }
}
