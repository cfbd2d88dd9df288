//! 共通型定義
//!
//! Receipt等のコアデータ型

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// レシート
///
/// `total` はJSON上では数値ではなく文字列（`"35.35"`）としてやり取りする。
/// キーはASCIIの大文字小文字を区別せずに照合し、同じフィールドが重複した場合は最後の値を採用する。
/// フィールドが欠けている、または `null` の場合は値を変更しない（初期値はゼロ値）。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Receipt {
    /// 自由形式のテキスト
    pub receipts: String,
    /// 合計金額
    #[serde(serialize_with = "serialize_total")]
    pub total: f64,
}

impl Receipt {
    /// 新しいレシートを作成
    pub fn new(receipts: impl Into<String>, total: f64) -> Self {
        Self {
            receipts: receipts.into(),
            total,
        }
    }
}

/// `{Receipts:<text> Total:<number>}` 形式で出力する
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Receipts:{} Total:{}}}",
            self.receipts,
            format_number(self.total)
        )
    }
}

/// 数値を最短表現で整形する
///
/// 10進指数が -4 未満または 6 以上の場合は `1.234567e+06` のような指数表記になる。
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };

    if (-4..6).contains(&exp) {
        value.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

fn serialize_total<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_number(*value))
}

impl<'de> Deserialize<'de> for Receipt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ReceiptVisitor)
    }
}

struct ReceiptVisitor;

impl<'de> Visitor<'de> for ReceiptVisitor {
    type Value = Receipt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a receipt object")
    }

    // トップレベルの `null` は何もしない
    fn visit_unit<E: de::Error>(self) -> Result<Receipt, E> {
        Ok(Receipt::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Receipt, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut receipt = Receipt::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("receipts") {
                if let Some(receipts) = map.next_value::<Option<String>>()? {
                    receipt.receipts = receipts;
                }
            } else if key.eq_ignore_ascii_case("total") {
                if let Some(StringNumber(total)) = map.next_value::<Option<StringNumber>>()? {
                    receipt.total = total;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(receipt)
    }
}

/// 文字列に埋め込まれた数値
struct StringNumber(f64);

impl<'de> Deserialize<'de> for StringNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StringNumberVisitor)
    }
}

struct StringNumberVisitor;

impl<'de> Visitor<'de> for StringNumberVisitor {
    type Value = StringNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string-encoded total")
    }

    fn visit_str<E: de::Error>(self, raw: &str) -> Result<StringNumber, E> {
        let invalid = || {
            E::custom(format!(
                "invalid use of string-encoded total, trying to unmarshal {:?} into number",
                raw
            ))
        };
        // JSONの数値リテラルとして解釈できる文字列のみ受け付ける
        if raw.is_empty() || raw.trim().len() != raw.len() {
            return Err(invalid());
        }
        serde_json::from_str::<f64>(raw)
            .map(StringNumber)
            .map_err(|_| invalid())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<StringNumber, E> {
        Err(unquoted_total(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<StringNumber, E> {
        Err(unquoted_total(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<StringNumber, E> {
        Err(unquoted_total(value))
    }
}

fn unquoted_total<E: de::Error>(value: impl fmt::Display) -> E {
    E::custom(format!(
        "invalid use of string-encoded total, trying to unmarshal unquoted value {} into number",
        value
    ))
}
