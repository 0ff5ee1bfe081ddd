//! 數值容錯處理
//!
//! 計劃畫面在輸入途中會不斷重算，任何欄位都可能是空白、負數或非數字。
//! 這裡集中所有「寬鬆解析、夾限到合法範圍」的規則，計算層因此不會失敗。

use rust_decimal::Decimal;
use std::str::FromStr;

/// 寬鬆解析數值欄位
///
/// 空白、無法解析的字串一律視為 0；支援科學記號（如 `1e3`）。
pub fn parse_decimal_lenient(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// 負數夾限為 0
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// 百分比夾限到 [0, 100]
pub fn clamp_pct(pct: Decimal) -> Decimal {
    pct.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
}

/// 百分比轉為比例（10 → 0.1）
pub fn pct_to_ratio(pct: Decimal) -> Decimal {
    pct / Decimal::ONE_HUNDRED
}

/// 安全除法：分母 <= 0 時回傳 0，商溢出時飽和到 `Decimal::MAX`（或 `Decimal::MIN`）
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match numerator.checked_div(denominator) {
        Some(quotient) => quotient,
        None if numerator.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// 安全整除：`floor(numerator / denominator)`，分母 <= 0 時為 0
pub fn safe_floor_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    safe_div(numerator, denominator).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Decimal::from(12))]
    #[case(" 2.5 ", Decimal::new(25, 1))]
    #[case("", Decimal::ZERO)]
    #[case("   ", Decimal::ZERO)]
    #[case("abc", Decimal::ZERO)]
    #[case("1e3", Decimal::from(1000))]
    #[case("-4", Decimal::from(-4))]
    fn test_parse_decimal_lenient(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal_lenient(raw), expected);
    }

    #[rstest]
    #[case(Decimal::from(-5), Decimal::ZERO)]
    #[case(Decimal::from(95), Decimal::from(95))]
    #[case(Decimal::from(150), Decimal::ONE_HUNDRED)]
    fn test_clamp_pct(#[case] pct: Decimal, #[case] expected: Decimal) {
        assert_eq!(clamp_pct(pct), expected);
    }

    #[test]
    fn test_safe_div_guards_zero() {
        assert_eq!(safe_div(Decimal::from(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(safe_div(Decimal::from(10), Decimal::from(-1)), Decimal::ZERO);
        assert_eq!(safe_div(Decimal::from(10), Decimal::from(4)), Decimal::new(25, 1));
    }

    #[test]
    fn test_safe_div_saturates_on_overflow() {
        let huge = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let tiny = Decimal::new(1, 10);

        assert_eq!(safe_div(huge, tiny), Decimal::MAX);
        assert_eq!(safe_div(-huge, tiny), Decimal::MIN);
        assert_eq!(safe_floor_div(huge, tiny), Decimal::MAX);
    }

    #[test]
    fn test_safe_floor_div() {
        // 5000 / 2200 = 2.27... → 2
        assert_eq!(
            safe_floor_div(Decimal::from(5000), Decimal::from(2200)),
            Decimal::from(2)
        );
        assert_eq!(safe_floor_div(Decimal::from(5000), Decimal::ZERO), Decimal::ZERO);
    }
}
