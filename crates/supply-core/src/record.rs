//! 供應記錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::value::{decimal_from_f64, non_empty, parse_decimal};

/// 已知欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Item,
    Stock,
    Price,
    RequestedDate,
    ReceivedDate,
}

impl RecordField {
    /// 所有已知欄位（匯出時的欄位順序）
    pub const ALL: [RecordField; 5] = [
        RecordField::Item,
        RecordField::Stock,
        RecordField::Price,
        RecordField::RequestedDate,
        RecordField::ReceivedDate,
    ];

    /// 試算表欄位名稱
    pub fn column_name(self) -> &'static str {
        match self {
            RecordField::Item => "item",
            RecordField::Stock => "stock",
            RecordField::Price => "price",
            RecordField::RequestedDate => "requestedDate",
            RecordField::ReceivedDate => "receivedDate",
        }
    }

    /// 由欄位名稱查找（名稱需完全相符，前後空白除外）
    pub fn from_column_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|f| f.column_name() == name)
    }
}

/// 供應記錄
///
/// 來自試算表匯入或手動編輯，不保證有唯一識別欄位，
/// 只以在序列中的位置定位。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRecord {
    /// 品項名稱（可重複）
    #[serde(default)]
    pub item: String,

    /// 現有庫存
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub stock: Option<Decimal>,

    /// 單價
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,

    /// 請購日期（原始文字，預期為 `YYYY-MM-DD...`）
    #[serde(default, deserialize_with = "lenient_text")]
    pub requested_date: Option<String>,

    /// 到貨日期（存在即表示已到貨）
    #[serde(default, deserialize_with = "lenient_text")]
    pub received_date: Option<String>,

    /// 其他匯入欄位（保留欄位順序，匯出時原樣寫回）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl SupplyRecord {
    /// 創建新的供應記錄
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    /// 建構器模式：設置庫存
    pub fn with_stock(mut self, stock: Decimal) -> Self {
        self.stock = Some(stock);
        self
    }

    /// 建構器模式：設置單價
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// 建構器模式：設置請購日期
    pub fn with_requested_date(mut self, date: impl Into<String>) -> Self {
        self.requested_date = non_empty(Some(date.into()));
        self
    }

    /// 建構器模式：設置到貨日期
    pub fn with_received_date(mut self, date: impl Into<String>) -> Self {
        self.received_date = non_empty(Some(date.into()));
        self
    }

    /// 建構器模式：附加其他欄位
    pub fn with_extra(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_extra(column.into(), value.into());
        self
    }

    /// 行內編輯：依欄位名稱寫入值
    ///
    /// 已知欄位寫入對應的型別欄位（數值寬鬆解析，無法解析即清空），
    /// 未知欄位寫入 `extra`。此操作不會失敗。
    pub fn set_field(&mut self, field: &str, value: &str) {
        match RecordField::from_column_name(field) {
            Some(RecordField::Item) => self.item = value.to_string(),
            Some(RecordField::Stock) => self.stock = parse_decimal(value),
            Some(RecordField::Price) => self.price = parse_decimal(value),
            Some(RecordField::RequestedDate) => {
                self.requested_date = non_empty(Some(value.to_string()))
            }
            Some(RecordField::ReceivedDate) => {
                self.received_date = non_empty(Some(value.to_string()))
            }
            None => self.set_extra(field.trim().to_string(), value.to_string()),
        }
    }

    /// 讀取欄位的顯示文字（缺值回傳 `None`）
    pub fn field_text(&self, field: &str) -> Option<String> {
        match RecordField::from_column_name(field) {
            Some(RecordField::Item) => Some(self.item.clone()),
            Some(RecordField::Stock) => self.stock.map(|d| d.to_string()),
            Some(RecordField::Price) => self.price.map(|d| d.to_string()),
            Some(RecordField::RequestedDate) => self.requested_date.clone(),
            Some(RecordField::ReceivedDate) => self.received_date.clone(),
            None => self
                .extra
                .iter()
                .find(|(column, _)| column == field.trim())
                .map(|(_, value)| value.clone()),
        }
    }

    fn set_extra(&mut self, column: String, value: String) {
        match self.extra.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.extra.push((column, value)),
        }
    }

    /// 本筆金額：庫存 × 單價（缺值視為 0）
    pub fn line_cost(&self) -> Decimal {
        let stock = self.stock.unwrap_or(Decimal::ZERO);
        let price = self.price.unwrap_or(Decimal::ZERO);
        stock.saturating_mul(price)
    }

    /// 請購月份：請購日期的前 7 個字元（`YYYY-MM`）
    pub fn requested_month(&self) -> Option<String> {
        self.requested_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.chars().take(7).collect())
    }

    /// 是否已到貨
    pub fn is_received(&self) -> bool {
        self.received_date.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// 數值欄位：接受 JSON 數字或數值字串，其餘一律視為缺值
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(n)) => decimal_from_f64(n),
        Some(RawNumber::Text(s)) => parse_decimal(&s),
        Some(RawNumber::Other(_)) | None => None,
    })
}

/// 文字欄位：空字串、`false`、`0` 視為缺值，其他非字串值轉為文字
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => non_empty(Some(s)),
        Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) | None => None,
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(other.to_string()),
    })
}
