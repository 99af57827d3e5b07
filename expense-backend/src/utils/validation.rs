// src/utils/validation.rs

//! 共通バリデーション定数と検証関数
//!
//! リクエストボディは型付け前の JSON 値として受け取り、ここでフィールドごとに
//! 検証・変換します。失敗時は validator の `ValidationError` を返し、呼び出し側で
//! `ValidationErrors` にまとめます。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use validator::ValidationError;

// =============================================================================
// バリデーション定数
// =============================================================================

/// 経費関連の制約
pub mod expense {
    pub const DESCRIPTION_MAX_LENGTH: usize = 255;
    pub const CATEGORY_MAX_LENGTH: usize = 100;
    /// numeric(15,2) に収まる整数部の桁数
    pub const AMOUNT_INTEGER_DIGITS: u32 = 13;
    pub const AMOUNT_SCALE: u32 = 2;
}

// =============================================================================
// カスタムバリデーション関数
// =============================================================================

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

pub fn required_error(field: &str) -> ValidationError {
    error_with_message("required", format!("The {} field is required.", field))
}

/// 空でない文字列フィールドを検証する（前後の空白は除去）
pub fn validate_required_string(
    field: &str,
    value: Option<&Value>,
    max_length: usize,
) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(required_error(field)),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(required_error(field))
            } else if trimmed.chars().count() > max_length {
                let mut error = error_with_message(
                    "max",
                    format!(
                        "The {} field must not be greater than {} characters.",
                        field, max_length
                    ),
                );
                error.add_param(Cow::from("max"), &max_length);
                Err(error)
            } else {
                Ok(trimmed.to_string())
            }
        }
        Some(_) => Err(error_with_message(
            "string",
            format!("The {} field must be a string.", field),
        )),
    }
}

/// 金額を検証する。JSON の数値と数値文字列の両方を受け付ける
pub fn validate_amount(field: &str, value: Option<&Value>) -> Result<Decimal, ValidationError> {
    let raw = match value {
        None | Some(Value::Null) => return Err(required_error(field)),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(required_error(field)),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(numeric_error(field)),
    };

    let amount = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| numeric_error(field))?;

    // カラムへの格納時と同じ丸めを行った値で桁あふれを判定する
    let stored = amount.round_dp_with_strategy(
        expense::AMOUNT_SCALE,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let limit = Decimal::from(10_i64.pow(expense::AMOUNT_INTEGER_DIGITS));
    if stored.abs() >= limit {
        let mut error = error_with_message(
            "max",
            format!("The {} field must be less than {}.", field, limit),
        );
        error.add_param(Cow::from("max"), &limit.to_string());
        return Err(error);
    }

    Ok(amount)
}

fn numeric_error(field: &str) -> ValidationError {
    error_with_message("numeric", format!("The {} field must be a number.", field))
}

/// 日付を検証する。`YYYY-MM-DD` のほか、日時文字列は日付部分を採用する
pub fn validate_date(field: &str, value: Option<&Value>) -> Result<NaiveDate, ValidationError> {
    let raw = match value {
        None | Some(Value::Null) => return Err(required_error(field)),
        Some(Value::String(s)) if s.trim().is_empty() => return Err(required_error(field)),
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(date_error(field)),
    };

    parse_date(raw).ok_or_else(|| date_error(field))
}

fn date_error(field: &str) -> ValidationError {
    error_with_message("date", format!("The {} field must be a valid date.", field))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}
