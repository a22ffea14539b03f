//! 寬鬆輸入邊界
//!
//! 表單送來的 payload 常有缺欄、空字串、數字字串混用。
//! 這裡先吃下任何形狀（[`RawLineItem`] / [`RawRabOrder`]），
//! 再用 `coerce()` 一次性轉成嚴格類型：解析不出來的一律補 0，
//! 不丟錯誤。計算引擎因此不必再防禦輸入。

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

use crate::line_item::{CostComponent, LineItem};
use crate::order::RabOrder;
use crate::percentage::AllocationPercentages;

/// 缺值補 0
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("數字、數字字串或空值")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // NaN/Infinity 轉不進 Decimal，視為缺值
        Ok(Decimal::from_f64(v))
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(trimmed
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_scientific(trimmed).ok()))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

/// 寬鬆解析單一數值欄位
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientDecimalVisitor)
}

struct Lenient(Option<Decimal>);

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_decimal(deserializer).map(Lenient)
    }
}

/// 寬鬆解析數值陣列欄位
pub fn lenient_decimal_vec<'de, D>(deserializer: D) -> Result<Vec<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Lenient>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|l| l.0).collect())
}

/// 未驗證的成本行項 payload
///
/// 成本組件以平行陣列進來（names 與 values 各一條），
/// 長度不一致時以較長者為準：多出的名稱補值 0，多出的值補空名稱。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLineItem {
    #[serde(alias = "productName")]
    pub product_name: Option<String>,

    pub size: Option<String>,

    #[serde(alias = "qty", deserialize_with = "lenient_decimal")]
    pub quantity: Option<Decimal>,

    #[serde(alias = "materialNeedPerUnit", deserialize_with = "lenient_decimal")]
    pub material_need_per_unit: Option<Decimal>,

    #[serde(alias = "materialPricePerUnit", deserialize_with = "lenient_decimal")]
    pub material_price_per_unit: Option<Decimal>,

    #[serde(alias = "operationalServiceNames")]
    pub operational_names: Vec<String>,

    #[serde(
        alias = "operationalServiceValues",
        deserialize_with = "lenient_decimal_vec"
    )]
    pub operational_values: Vec<Option<Decimal>>,

    #[serde(alias = "utilityNames")]
    pub utility_names: Vec<String>,

    #[serde(alias = "utilityValues", deserialize_with = "lenient_decimal_vec")]
    pub utility_values: Vec<Option<Decimal>>,

    #[serde(alias = "priceOff", deserialize_with = "lenient_decimal")]
    pub price_off: Option<Decimal>,

    #[serde(alias = "marginPercentage", deserialize_with = "lenient_decimal")]
    pub margin_percentage: Option<Decimal>,
}

fn zip_components(names: &[String], values: &[Option<Decimal>]) -> Vec<CostComponent> {
    let len = names.len().max(values.len());
    (0..len)
        .map(|i| {
            let name = names.get(i).cloned().unwrap_or_default();
            let value = or_zero(values.get(i).copied().flatten());
            CostComponent::new(name, value)
        })
        .collect()
}

impl RawLineItem {
    /// 轉成嚴格類型的 [`LineItem`]
    pub fn coerce(&self) -> LineItem {
        let quantity = or_zero(self.quantity)
            .clamp(Decimal::ZERO, Decimal::from(u32::MAX))
            .trunc()
            .to_u32()
            .unwrap_or(0);

        let mut item = LineItem::new(self.product_name.clone().unwrap_or_default(), quantity)
            .with_material(
                or_zero(self.material_need_per_unit),
                or_zero(self.material_price_per_unit),
            )
            .with_price_off(or_zero(self.price_off))
            .with_margin_percentage(or_zero(self.margin_percentage));

        if let Some(size) = &self.size {
            let trimmed = size.trim();
            if !trimmed.is_empty() {
                item = item.with_size(trimmed.to_string());
            }
        }

        item.operational_services = zip_components(&self.operational_names, &self.operational_values);
        item.utilities = zip_components(&self.utility_names, &self.utility_values);
        item
    }
}

/// 未驗證的 RAB 訂單 payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRabOrder {
    #[serde(alias = "orderNumber")]
    pub order_number: Option<String>,

    pub buyer: Option<String>,

    /// 訂單日期字串（`YYYY-MM-DD`，解析失敗視為無日期）
    #[serde(alias = "orderDate")]
    pub order_date: Option<String>,

    pub locked: Option<bool>,

    #[serde(alias = "lineItems")]
    pub line_items: Vec<RawLineItem>,

    #[serde(alias = "maintenanceDevelopPct", deserialize_with = "lenient_decimal")]
    pub maintenance_develop_pct: Option<Decimal>,

    #[serde(alias = "incentivePct", deserialize_with = "lenient_decimal")]
    pub incentive_pct: Option<Decimal>,

    #[serde(alias = "marketingPct", deserialize_with = "lenient_decimal")]
    pub marketing_pct: Option<Decimal>,
}

impl RawRabOrder {
    /// 轉成嚴格類型的 [`RabOrder`]
    pub fn coerce(&self) -> RabOrder {
        let mut order = RabOrder::new(self.order_number.clone().unwrap_or_default())
            .with_percentages(AllocationPercentages::new(
                or_zero(self.maintenance_develop_pct),
                or_zero(self.incentive_pct),
                or_zero(self.marketing_pct),
            ));

        if let Some(buyer) = &self.buyer {
            let trimmed = buyer.trim();
            if !trimmed.is_empty() {
                order = order.with_buyer(trimmed.to_string());
            }
        }

        if let Some(raw_date) = &self.order_date {
            if let Ok(date) = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") {
                order = order.with_order_date(date);
            }
        }

        order.locked = self.locked.unwrap_or(false);
        order.line_items = self.line_items.iter().map(RawLineItem::coerce).collect();
        order
    }
}
