use crate::config::{GeneratorConfig, ShopConfig};
use contracts::dashboards::d410_weekly_metrics::RawRecord;
use rand::Rng;

/// Price per unit used to derive revenue from units sold
const UNIT_PRICE: i64 = 10;
const MAX_SOLD: i64 = 100;
const MAX_CA: i64 = 1000;

/// Generate records for every product × shop × week, in that nesting order
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<RawRecord> {
    let capacity = (config.products as usize) * config.shops.len() * (config.weeks as usize);
    let mut records = Vec::with_capacity(capacity);

    for i in 1..=config.products {
        let sales_code = format!("{}-{:03}", config.product_prefix, i);
        for shop in &config.shops {
            for week in 1..=config.weeks {
                records.push(generate_record(rng, &sales_code, shop, week));
            }
        }
    }

    records
}

fn generate_record<R: Rng>(rng: &mut R, sales_code: &str, shop: &ShopConfig, week: u32) -> RawRecord {
    let kind = product_type(rng.gen::<f64>());

    let base_sold: i64 = rng.gen_range(0..=MAX_SOLD);
    let sold = ((base_sold as f64 * shop.sales_factor) as i64).clamp(0, MAX_SOLD);

    let ca = (sold * UNIT_PRICE + rng.gen_range(-100..=100)).clamp(0, MAX_CA);

    let shrinkage: i64 = rng.gen_range(0..=50);
    let gross_margin: i64 = rng.gen_range(5..=50);
    let net_margin = gross_margin.min(rng.gen_range(5..=50));
    let stock: i64 = rng.gen_range(0..=100);
    let flow: i64 = rng.gen_range(50..=400);

    RawRecord {
        sales_code: sales_code.to_string(),
        shop: shop.name.clone(),
        kind,
        week,
        sold: Some(sold as f64),
        ca: Some(ca as f64),
        shrinkage: Some(shrinkage as f64),
        gross_margin: Some(gross_margin as f64),
        net_margin: Some(net_margin as f64),
        stock: Some(stock as f64),
        flow: Some(flow as f64),
    }
}

/// Category draw: none 50%, "20/80" 20%, "promo" 15%, "sensible" 15%
fn product_type(roll: f64) -> Option<String> {
    if roll < 0.5 {
        None
    } else if roll < 0.7 {
        Some("20/80".to_string())
    } else if roll < 0.85 {
        Some("promo".to_string())
    } else {
        Some("sensible".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(products: u32, weeks: u32) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(7),
            products,
            product_prefix: "FRUIT".to_string(),
            weeks,
            output: "fixtures.json".to_string(),
            shops: vec![
                ShopConfig { name: "Nantes".to_string(), sales_factor: 1.0 },
                ShopConfig { name: "Paris".to_string(), sales_factor: 1.2 },
                ShopConfig { name: "Saint-herblain".to_string(), sales_factor: 0.8 },
            ],
        }
    }

    #[test]
    fn test_record_count_and_order() {
        let cfg = config(2, 4);
        let records = generate(&cfg, &mut StdRng::seed_from_u64(1));
        assert_eq!(records.len(), 2 * 3 * 4);

        assert_eq!(records[0].sales_code, "FRUIT-001");
        assert_eq!(records[0].shop, "Nantes");
        assert_eq!(records[0].week, 1);
        assert_eq!(records[3].week, 4);
        assert_eq!(records[4].shop, "Paris");
        assert_eq!(records[12].sales_code, "FRUIT-002");
    }

    #[test]
    fn test_values_within_bounds() {
        let records = generate(&config(5, 52), &mut StdRng::seed_from_u64(42));
        for r in &records {
            let sold = r.sold.unwrap();
            let gross = r.gross_margin.unwrap();
            let net = r.net_margin.unwrap();
            assert!((0.0..=100.0).contains(&sold));
            assert!((0.0..=1000.0).contains(&r.ca.unwrap()));
            assert!((0.0..=50.0).contains(&r.shrinkage.unwrap()));
            assert!((5.0..=50.0).contains(&gross));
            assert!(net >= 5.0 && net <= gross);
            assert!((0.0..=100.0).contains(&r.stock.unwrap()));
            assert!((50.0..=400.0).contains(&r.flow.unwrap()));
            assert!((1..=52).contains(&r.week));
            if let Some(kind) = &r.kind {
                assert!(["20/80", "promo", "sensible"].contains(&kind.as_str()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let cfg = config(3, 10);
        let a = generate(&cfg, &mut StdRng::seed_from_u64(99));
        let b = generate(&cfg, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_sales_factor_zeroes_sales() {
        let mut cfg = config(2, 8);
        cfg.shops = vec![ShopConfig { name: "Closed".to_string(), sales_factor: 0.0 }];
        let records = generate(&cfg, &mut StdRng::seed_from_u64(3));
        assert!(records.iter().all(|r| r.sold == Some(0.0)));
        assert!(records.iter().all(|r| r.ca.unwrap() <= 100.0));
    }

    #[test]
    fn test_product_type_thresholds() {
        assert_eq!(product_type(0.0), None);
        assert_eq!(product_type(0.49), None);
        assert_eq!(product_type(0.5).as_deref(), Some("20/80"));
        assert_eq!(product_type(0.7).as_deref(), Some("promo"));
        assert_eq!(product_type(0.85).as_deref(), Some("sensible"));
        assert_eq!(product_type(0.99).as_deref(), Some("sensible"));
    }
}
