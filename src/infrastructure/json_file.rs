//! 基于 JSON 文件的产品存储
//!
//! 整个产品集合保存在一个格式化的 JSON 数组文档中。每次读取都加载整个文档，
//! 每次修改都整体写回。写入先落到同目录的临时文件，再重命名覆盖原文档。
//!
//! 读写锁只在本进程内生效：多个进程同时写同一文档时，最后完成的写入覆盖整个文档。

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt, sync::RwLock};
use tracing::{debug, info, warn};

use crate::app::products::{
    model::Product,
    repository::{remove_first, update_first, ProductRepository},
};
use crate::core::error::StorageError;

pub const DEFAULT_FILE_NAME: &str = "products.json";

pub struct JsonFileRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// 调用方需持有锁
    async fn load(&self) -> Result<Vec<Product>, StorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("产品文件不存在，返回空列表: {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // `null` 文档视为空集合
        let products: Option<Vec<Product>> =
            serde_json::from_slice(&content).map_err(|source| StorageError::Corrupted {
                path: self.path.clone(),
                source,
            })?;
        let products = products.unwrap_or_default();

        debug!("已加载 {} 个产品: {}", products.len(), self.path.display());
        Ok(products)
    }

    /// 调用方需持有写锁
    async fn persist(&self, products: &[Product]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(products)?;
        let temp_path = self.temp_path();

        if let Err(source) = write_synced(&temp_path, json.as_bytes()).await {
            discard(&temp_path).await;
            return Err(StorageError::Write {
                path: temp_path,
                source,
            });
        }

        if let Err(source) = fs::rename(&temp_path, &self.path).await {
            discard(&temp_path).await;
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!("已写入 {} 个产品: {}", products.len(), self.path.display());
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

/// 写入失败后清理临时文件
async fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path).await {
        if e.kind() != ErrorKind::NotFound {
            warn!("清理临时文件失败 {}: {}", temp_path.display(), e);
        }
    }
}

#[async_trait]
impl ProductRepository for JsonFileRepository {
    async fn get_all(&self) -> Result<Vec<Product>, StorageError> {
        let _guard = self.lock.read().await;
        self.load().await
    }

    async fn add(&self, product: Product) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        let mut products = self.load().await?;
        let id = product.id;
        products.push(product);
        self.persist(&products).await?;
        info!("产品 {} 已写入 {}", id, self.path.display());
        Ok(())
    }

    async fn save(&self, products: Vec<Product>) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        self.persist(&products).await
    }

    async fn update(&self, id: i32, updated: Product) -> Result<bool, StorageError> {
        let _guard = self.lock.write().await;
        let mut products = self.load().await?;
        if !update_first(&mut products, id, updated) {
            return Ok(false);
        }
        self.persist(&products).await?;
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        let _guard = self.lock.write().await;
        let mut products = self.load().await?;
        if !remove_first(&mut products, id) {
            return Ok(false);
        }
        self.persist(&products).await?;
        Ok(true)
    }
}
