use super::FarmService;
use crate::db::reports;
use crate::error::FarmResult;
use crate::models::{CategoryCost, CropCost, PerformanceFilter, PoultryPerformance, Summary};

/// 报表: 只读统计, 除家禽表现外均覆盖全部记录
impl FarmService {
    pub async fn summary(&self) -> FarmResult<Summary> {
        reports::summary(self.pool()).await
    }

    pub async fn poultry_performance(
        &self,
        filter: &PerformanceFilter,
    ) -> FarmResult<Vec<PoultryPerformance>> {
        reports::poultry_performance(self.pool(), filter).await
    }

    pub async fn inputs_by_category(&self) -> FarmResult<Vec<CategoryCost>> {
        reports::inputs_by_category(self.pool()).await
    }

    pub async fn crop_costs(&self) -> FarmResult<Vec<CropCost>> {
        reports::crop_costs(self.pool()).await
    }
}
