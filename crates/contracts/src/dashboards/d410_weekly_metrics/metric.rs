use super::dto::WeeklyPoint;
use serde::{Deserialize, Serialize};

/// Показатель, выбираемый для оси графика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Sold,
    Ca,
    Shrinkage,
    GrossMargin,
    NetMargin,
    Stock,
    Flow,
}

impl Metric {
    /// Порядок, в котором показатели выводятся в селекторах осей
    pub const ALL: [Metric; 7] = [
        Metric::Sold,
        Metric::Ca,
        Metric::Shrinkage,
        Metric::GrossMargin,
        Metric::NetMargin,
        Metric::Stock,
        Metric::Flow,
    ];

    /// Получить ключ поля (совпадает с именем поля в фикстуре)
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Sold => "sold",
            Metric::Ca => "ca",
            Metric::Shrinkage => "shrinkage",
            Metric::GrossMargin => "grossMargin",
            Metric::NetMargin => "netMargin",
            Metric::Stock => "stock",
            Metric::Flow => "flow",
        }
    }

    /// Получить подпись для селектора, оси и легенды
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sold => "Vendus",
            Metric::Ca => "CA (€)",
            Metric::Shrinkage => "Casse",
            Metric::GrossMargin => "Marge brute",
            Metric::NetMargin => "Marge nette",
            Metric::Stock => "Stock",
            Metric::Flow => "Flux",
        }
    }

    pub fn all() -> Vec<Metric> {
        Self::ALL.to_vec()
    }

    /// Парсинг из ключа поля
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }

    /// Значение показателя в точке
    pub fn value(&self, point: &WeeklyPoint) -> Option<f64> {
        match self {
            Metric::Sold => point.sold,
            Metric::Ca => point.ca,
            Metric::Shrinkage => point.shrinkage,
            Metric::GrossMargin => point.gross_margin,
            Metric::NetMargin => point.net_margin,
            Metric::Stock => point.stock,
            Metric::Flow => point.flow,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
