pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// "Free" for 0, otherwise the symbol followed by the amount in Indian digit
/// grouping: the last three digits, then groups of two (`₹1,23,456`).
pub fn format_price(price: u64, currency_symbol: &str) -> String {
    if price == 0 {
        return "Free".to_string();
    }
    format!("{}{}", currency_symbol, group_indian(price))
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_free() {
        assert_eq!(format_price(0, "₹"), "Free");
    }

    #[test]
    fn groups_in_indian_style() {
        assert_eq!(format_price(300, "₹"), "₹300");
        assert_eq!(format_price(1200, "₹"), "₹1,200");
        assert_eq!(format_price(123456, "₹"), "₹1,23,456");
        assert_eq!(format_price(12345678, "₹"), "₹1,23,45,678");
        assert_eq!(format_price(100000, "Rs "), "Rs 1,00,000");
    }
}
