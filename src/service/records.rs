use crate::db::queries;
use crate::error::FarmResult;
use crate::models::{
    Created, CropFilter, CropPayload, CropRecord, InputFilter, InputPayload, InputRecord,
    PoultryFilter, PoultryPayload, PoultryRecord, StockUpdate,
};
use sqlx::SqlitePool;

/// 农场记录服务: 家禽 / 作物 / 农资的增删改查及报表
#[derive(Clone)]
pub struct FarmService {
    pool: SqlitePool,
}

impl FarmService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ============ 家禽 ============

    pub async fn list_poultry(&self, filter: &PoultryFilter) -> FarmResult<Vec<PoultryRecord>> {
        queries::list_poultry(&self.pool, filter).await
    }

    pub async fn add_poultry(&self, payload: PoultryPayload) -> FarmResult<Created> {
        let record = payload.validate()?;
        let id = queries::insert_poultry(&self.pool, &record).await?;
        tracing::info!("Poultry record {} added ({} x {})", id, record.count, record.bird_type);
        Ok(Created {
            id,
            message: "Poultry record added successfully".to_string(),
        })
    }

    /// 删除不存在的 ID 视为成功
    pub async fn remove_poultry(&self, id: i64) -> FarmResult<()> {
        let affected = queries::delete_poultry(&self.pool, id).await?;
        log_mutation("poultry delete", id, affected);
        Ok(())
    }

    // ============ 作物 ============

    pub async fn list_crops(&self, filter: &CropFilter) -> FarmResult<Vec<CropRecord>> {
        queries::list_crops(&self.pool, filter).await
    }

    pub async fn add_crop(&self, payload: CropPayload) -> FarmResult<Created> {
        let record = payload.validate()?;
        let id = queries::insert_crop(&self.pool, &record).await?;
        tracing::info!("Crop record {} added ({}, area {})", id, record.crop, record.area);
        Ok(Created {
            id,
            message: "Crop record added successfully".to_string(),
        })
    }

    pub async fn remove_crop(&self, id: i64) -> FarmResult<()> {
        let affected = queries::delete_crop(&self.pool, id).await?;
        log_mutation("crop delete", id, affected);
        Ok(())
    }

    // ============ 农资 ============

    pub async fn list_inputs(&self, filter: &InputFilter) -> FarmResult<Vec<InputRecord>> {
        queries::list_inputs(&self.pool, filter).await
    }

    pub async fn add_input(&self, payload: InputPayload) -> FarmResult<Created> {
        let record = payload.validate()?;
        let id = queries::insert_input(&self.pool, &record).await?;
        tracing::info!("Input record {} added ({}/{})", id, record.category, record.name);
        Ok(Created {
            id,
            message: "Input record added successfully".to_string(),
        })
    }

    /// 覆盖库存值; ID 不存在时不报错
    pub async fn update_input_stock(&self, id: i64, update: &StockUpdate) -> FarmResult<()> {
        let current_stock = update.value()?;
        let affected = queries::update_input_stock(&self.pool, id, current_stock).await?;
        log_mutation("stock update", id, affected);
        Ok(())
    }

    pub async fn remove_input(&self, id: i64) -> FarmResult<()> {
        let affected = queries::delete_input(&self.pool, id).await?;
        log_mutation("input delete", id, affected);
        Ok(())
    }
}

fn log_mutation(action: &str, id: i64, affected: u64) {
    if affected == 0 {
        tracing::debug!("{} on id {} matched no rows", action, id);
    } else {
        tracing::info!("{} on id {} ({} row)", action, id, affected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::error::FarmError;

    async fn service() -> FarmService {
        FarmService::new(create_memory_pool().await.unwrap())
    }

    #[tokio::test]
    async fn layer_example_reads_back_with_defaults() {
        let service = service().await;
        let created = service
            .add_poultry(PoultryPayload {
                date: Some("2024-01-01".into()),
                bird_type: Some("layer".into()),
                count: Some(10),
                eggs: Some(8),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.message, "Poultry record added successfully");

        let filter = PoultryFilter {
            bird_type: Some("layer".into()),
            ..Default::default()
        };
        let rows = service.list_poultry(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, created.id);
        assert_eq!(rows[0].count, 10);
        assert_eq!(rows[0].eggs, 8);
        assert_eq!(rows[0].feed, 0.0);
        assert_eq!(rows[0].mortality, 0);
    }

    #[tokio::test]
    async fn delete_twice_is_idempotent() {
        let service = service().await;
        let created = service
            .add_crop(CropPayload {
                date: Some("2024-01-01".into()),
                crop: Some("beans".into()),
                area: Some(0.25),
                ..Default::default()
            })
            .await
            .unwrap();

        service.remove_crop(created.id).await.unwrap();
        service.remove_crop(created.id).await.unwrap();
        assert!(service.list_crops(&CropFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn low_stock_listing_picks_up_corn() {
        let service = service().await;
        service
            .add_input(InputPayload {
                date: Some("2024-01-01".into()),
                category: Some("feed".into()),
                name: Some("corn".into()),
                quantity: Some(50.0),
                current_stock: Some(5.0),
                min_stock: Some(10.0),
                ..Default::default()
            })
            .await
            .unwrap();
        service
            .add_input(InputPayload {
                date: Some("2024-01-02".into()),
                category: Some("feed".into()),
                name: Some("soy".into()),
                quantity: Some(20.0),
                current_stock: Some(30.0),
                min_stock: Some(10.0),
                ..Default::default()
            })
            .await
            .unwrap();

        let filter = InputFilter {
            low_stock: Some("true".into()),
            ..Default::default()
        };
        let rows = service.list_inputs(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "corn");
    }

    #[tokio::test]
    async fn invalid_payload_writes_nothing() {
        let service = service().await;
        let err = service
            .add_input(InputPayload {
                date: Some("2024-01-01".into()),
                category: Some("feed".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, FarmError::Validation(_)));
        assert!(service.list_inputs(&InputFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stock_update_without_value_is_rejected() {
        let service = service().await;
        let err = service
            .update_input_stock(1, &StockUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FarmError::Validation(_)));
        service
            .update_input_stock(1, &StockUpdate { current_stock: Some(4.0) })
            .await
            .unwrap();
    }
}
