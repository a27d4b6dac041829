//! 产品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Color")]
    pub color: String,
    #[serde(alias = "Price")]
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, color: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            price,
        }
    }

    /// 颜色比较忽略大小写，但必须完全相等
    pub fn has_color(&self, color: &str) -> bool {
        self.color.to_lowercase() == color.to_lowercase()
    }

    /// 用另一产品的名称、颜色、价格覆盖自身，`id` 保持不变
    pub fn overwrite_with(&mut self, other: Product) {
        self.name = other.name;
        self.color = other.color;
        self.price = other.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_match_ignores_case_only() {
        let product = Product::new(1, "A", "Red", Decimal::new(105, 1));
        assert!(product.has_color("red"));
        assert!(product.has_color("RED"));
        assert!(!product.has_color("Reddish"));
        assert!(!product.has_color("re"));
    }

    #[test]
    fn overwrite_keeps_id() {
        let mut product = Product::new(1, "A", "Red", Decimal::new(105, 1));
        product.overwrite_with(Product::new(7, "A2", "Green", Decimal::from(99)));
        assert_eq!(product, Product::new(1, "A2", "Green", Decimal::from(99)));
    }

    #[test]
    fn accepts_pascal_case_fields() {
        let json = r#"{"Id": 2, "Name": "B", "Color": "Blue", "Price": 15.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, Product::new(2, "B", "Blue", Decimal::new(155, 1)));
    }

    #[test]
    fn price_serializes_as_number() {
        let product = Product::new(3, "New", "Purple", Decimal::new(250, 1));
        let value = serde_json::to_value(&product).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn prices_round_trip_exactly() {
        for price in ["12345678901234567.89", "0.1234567890123456789", "10.50"] {
            let product = Product::new(1, "A", "Red", price.parse().unwrap());
            let json = serde_json::to_string(&product).unwrap();
            assert!(json.contains(&format!("\"price\":{}", price)));

            let back: Product = serde_json::from_str(&json).unwrap();
            assert_eq!(back, product);
            assert_eq!(back.price.to_string(), price);
        }

        let product = Product::new(1, "A", "Red", Decimal::MAX);
        let back: Product =
            serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(back.price, Decimal::MAX);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"id": 2, "name": "B", "price": 15.5}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
