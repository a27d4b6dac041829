//! 产品存储抽象

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Product;
use crate::core::error::StorageError;

/// 产品集合的存储能力
///
/// 每个修改操作都是对整个集合的“读取-修改-整体写回”。`id` 不做唯一性检查，
/// 更新与删除只作用于按存储顺序找到的第一个匹配项。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 读取全部产品；文档不存在时返回空列表
    async fn get_all(&self) -> Result<Vec<Product>, StorageError>;

    /// 按颜色过滤（忽略大小写的完全匹配）
    async fn get_by_color(&self, color: &str) -> Result<Vec<Product>, StorageError> {
        let mut products = self.get_all().await?;
        products.retain(|p| p.has_color(color));
        Ok(products)
    }

    async fn add(&self, product: Product) -> Result<(), StorageError>;

    /// 整体替换存储内容
    async fn save(&self, products: Vec<Product>) -> Result<(), StorageError>;

    /// 未找到返回 `false`，且不写入
    async fn update(&self, id: i32, updated: Product) -> Result<bool, StorageError>;

    /// 未找到返回 `false`，且不写入
    async fn delete(&self, id: i32) -> Result<bool, StorageError>;
}

/// 覆盖第一个 `id` 匹配的产品
pub(crate) fn update_first(products: &mut [Product], id: i32, updated: Product) -> bool {
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) => {
            product.overwrite_with(updated);
            true
        }
        None => false,
    }
}

/// 移除第一个 `id` 匹配的产品
pub(crate) fn remove_first(products: &mut Vec<Product>, id: i32) -> bool {
    match products.iter().position(|p| p.id == id) {
        Some(index) => {
            products.remove(index);
            true
        }
        None => false,
    }
}

/// 内存实现，用于测试与演示
#[derive(Default)]
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.products.read().await.clone())
    }

    async fn add(&self, product: Product) -> Result<(), StorageError> {
        self.products.write().await.push(product);
        Ok(())
    }

    async fn save(&self, products: Vec<Product>) -> Result<(), StorageError> {
        *self.products.write().await = products;
        Ok(())
    }

    async fn update(&self, id: i32, updated: Product) -> Result<bool, StorageError> {
        Ok(update_first(&mut *self.products.write().await, id, updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        Ok(remove_first(&mut *self.products.write().await, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn seeded() -> MemoryProductRepository {
        MemoryProductRepository::with_products(vec![
            Product::new(1, "A", "Red", Decimal::new(105, 1)),
            Product::new(2, "B", "Blue", Decimal::new(155, 1)),
            Product::new(3, "C", "red", Decimal::new(120, 1)),
            Product::new(4, "D", "Reddish", Decimal::from(5)),
        ])
    }

    #[tokio::test]
    async fn color_filter_via_default_method() {
        let repo = seeded();
        let lower = repo.get_by_color("red").await.unwrap();
        let upper = repo.get_by_color("RED").await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(repo.get_by_color("green").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_ids_are_kept_and_first_removed() {
        let repo = MemoryProductRepository::new();
        repo.add(Product::new(5, "first", "Red", Decimal::ONE)).await.unwrap();
        repo.add(Product::new(5, "second", "Red", Decimal::TWO)).await.unwrap();

        assert!(repo.delete(5).await.unwrap());
        let remaining = repo.get_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "second");
    }

    #[tokio::test]
    async fn update_missing_id_is_false() {
        let repo = seeded();
        let before = repo.get_all().await.unwrap();

        let found = repo
            .update(42, Product::new(42, "X", "Black", Decimal::ZERO))
            .await
            .unwrap();

        assert!(!found);
        assert_eq!(repo.get_all().await.unwrap(), before);
    }

    #[test]
    fn update_first_touches_only_first_match() {
        let mut products = vec![
            Product::new(1, "A", "Red", Decimal::ONE),
            Product::new(1, "A-dup", "Red", Decimal::ONE),
        ];

        assert!(update_first(
            &mut products,
            1,
            Product::new(9, "A2", "Green", Decimal::from(99))
        ));
        assert_eq!(products[0], Product::new(1, "A2", "Green", Decimal::from(99)));
        assert_eq!(products[1].name, "A-dup");
    }
}
