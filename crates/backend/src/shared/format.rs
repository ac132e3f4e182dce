/// Форматирует число с разделителями тысяч (точками)
///
/// `1234567` -> `"1.234.567"`, `42` -> `"42"`
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Форматирует сумму в локали id_ID: точки между триадами, запятая перед копейками
///
/// `1234567.891` -> `"1.234.567,89"`
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    if cents == 0 {
        return "0,00".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = group_thousands(&(cents / 100).to_string());
    format!("{}{},{:02}", sign, whole, cents % 100)
}

/// Currency symbol for an ISO code, `None` for unknown codes
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.trim().to_ascii_uppercase().as_str() {
        "IDR" => Some("Rp"),
        "USD" => Some("US$"),
        "EUR" => Some("€"),
        "BRL" => Some("R$"),
        "RUB" => Some("₽"),
        _ => None,
    }
}

/// Сумма с символом валюты: `format_currency(1500.0, "IDR")` -> `"Rp1.500,00"`
///
/// Unknown codes are written as a prefix followed by a space (`"XYZ 1,00"`).
pub fn format_currency(value: f64, currency: &str) -> String {
    let amount = format_amount(value);
    let (sign, digits) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount.as_str()),
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, digits),
        None => format!("{}{} {}", sign, currency.trim().to_ascii_uppercase(), digits),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
