//! # Report Module
//!
//! Aggregations behind the admin dashboard.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pendapatan   Keuntungan   Transaksi   Produk   Nilai Stok              │
//! │  Σ total      Σ profit     count       count    Σ cost × stock          │
//! │                                                                         │
//! │  ┌──────────────────────────────────┐   ┌──────────────────────────┐    │
//! │  │  daily chart (last 10 days)      │   │  low stock (< 10)        │    │
//! │  │  ▇ ▅ ▆ ▃ ▇ █ ▆ ▄ ▅ ▇              │   │  Red Velvet Cake   4     │    │
//! │  └──────────────────────────────────┘   └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Transaction};
use crate::{CHART_DAYS, LOW_STOCK_THRESHOLD};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Money,
    pub total_profit: Money,
    pub transaction_count: usize,
    pub product_count: usize,
    pub stock_value: Money,
    pub low_stock_products: Vec<Product>,
}

/// One bar group of the daily chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Axis label, e.g. `05 Agu`.
    pub name: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub revenue: Money,
    pub profit: Money,
}

pub fn dashboard_stats(products: &[Product], transactions: &[Transaction]) -> DashboardStats {
    DashboardStats {
        total_revenue: transactions.iter().map(|t| t.total).sum(),
        total_profit: transactions.iter().map(|t| t.profit).sum(),
        transaction_count: transactions.len(),
        product_count: products.len(),
        stock_value: products.iter().map(Product::stock_value).sum(),
        low_stock_products: low_stock(products),
    }
}

/// Products with stock below [`LOW_STOCK_THRESHOLD`].
pub fn low_stock(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
        .cloned()
        .collect()
}

/// Revenue and profit per calendar day (UTC), oldest first, limited to the
/// last [`CHART_DAYS`] days that had at least one transaction.
pub fn daily_chart(transactions: &[Transaction]) -> Vec<ChartPoint> {
    let mut by_day: BTreeMap<NaiveDate, (Money, Money)> = BTreeMap::new();

    for t in transactions {
        let entry = by_day.entry(t.date.date_naive()).or_default();
        entry.0 += t.total;
        entry.1 += t.profit;
    }

    let skip = by_day.len().saturating_sub(CHART_DAYS);
    by_day
        .into_iter()
        .skip(skip)
        .map(|(date, (revenue, profit))| ChartPoint {
            name: day_label(date),
            date,
            revenue,
            profit,
        })
        .collect()
}

/// `dd Mon` with Indonesian month abbreviations.
pub fn day_label(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), MONTHS_ID[date.month0() as usize])
}

/// Transactions newest first, as the history screen lists them.
pub fn newest_first(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn product(stock: u32, cost: i64) -> Product {
        Product {
            id: format!("prod_{}", stock),
            name: "Item".to_string(),
            sku: "IT-001".to_string(),
            selling_price: Money::from_rupiah(cost * 2),
            cost_price: Money::from_rupiah(cost),
            stock,
            image: None,
        }
    }

    fn txn(id: &str, day: u32, total: i64, profit: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            items: Vec::new(),
            total: Money::from_rupiah(total),
            profit: Money::from_rupiah(profit),
            date: Utc.with_ymd_and_hms(2024, 8, day, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_dashboard_stats() {
        let products = vec![product(50, 10_000), product(9, 20_000)];
        let transactions = vec![txn("a", 1, 36_000, 16_000), txn("b", 2, 22_000, 10_000)];

        let stats = dashboard_stats(&products, &transactions);
        assert_eq!(stats.total_revenue.rupiah(), 58_000);
        assert_eq!(stats.total_profit.rupiah(), 26_000);
        assert_eq!(stats.transaction_count, 2);
        assert_eq!(stats.product_count, 2);
        assert_eq!(stats.stock_value.rupiah(), 680_000);
        assert_eq!(stats.low_stock_products.len(), 1);
        assert_eq!(stats.low_stock_products[0].stock, 9);
    }

    #[test]
    fn test_empty_dashboard() {
        let stats = dashboard_stats(&[], &[]);
        assert!(stats.total_revenue.is_zero());
        assert!(stats.low_stock_products.is_empty());
        assert!(daily_chart(&[]).is_empty());
    }

    #[test]
    fn test_daily_chart_groups_and_orders() {
        let transactions = vec![
            txn("c", 5, 10_000, 4_000),
            txn("a", 3, 18_000, 8_000),
            txn("b", 5, 15_000, 8_000),
        ];

        let chart = daily_chart(&transactions);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].name, "03 Agu");
        assert_eq!(chart[1].name, "05 Agu");
        assert_eq!(chart[1].revenue.rupiah(), 25_000);
        assert_eq!(chart[1].profit.rupiah(), 12_000);
    }

    #[test]
    fn test_daily_chart_keeps_last_ten_days() {
        let transactions: Vec<Transaction> = (1..=12)
            .map(|d| txn(&d.to_string(), d, 1_000, 500))
            .collect();

        let chart = daily_chart(&transactions);
        assert_eq!(chart.len(), 10);
        assert_eq!(chart[0].name, "03 Agu");
        assert_eq!(chart[9].name, "12 Agu");
    }

    #[test]
    fn test_newest_first() {
        let sorted = newest_first(&[txn("old", 1, 1, 0), txn("new", 9, 1, 0)]);
        assert_eq!(sorted[0].id, "new");
    }

    #[test]
    fn test_month_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(day_label(date), "07 Mei");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(day_label(date), "25 Des");
    }
}
