use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Сырая запись фикстуры: одно наблюдение (магазин, код продаж, неделя)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub sales_code: String,
    pub shop: String,
    /// Категория товара: null, "20/80", "promo", "sensible"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub week: u32,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sold: Option<f64>,
    /// Выручка (CA)
    #[serde(default, deserialize_with = "lenient_number")]
    pub ca: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shrinkage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub gross_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub net_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub flow: Option<f64>,
}

/// Одна точка графика на неделю (после дедупликации)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPoint {
    pub week: u32,
    pub sold: Option<f64>,
    pub ca: Option<f64>,
    pub shrinkage: Option<f64>,
    pub gross_margin: Option<f64>,
    pub net_margin: Option<f64>,
    pub stock: Option<f64>,
    pub flow: Option<f64>,
}

impl From<&RawRecord> for WeeklyPoint {
    fn from(raw: &RawRecord) -> Self {
        Self {
            week: raw.week,
            sold: raw.sold,
            ca: raw.ca,
            shrinkage: raw.shrinkage,
            gross_margin: raw.gross_margin,
            net_margin: raw.net_margin,
            stock: raw.stock,
            flow: raw.flow,
        }
    }
}

/// Числовое поле: всё, что не число (null, строка, объект), превращается в None,
/// чтобы одна битая запись не ломала загрузку всей фикстуры.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}
