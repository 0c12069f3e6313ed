use sea_orm::entity::prelude::*;

/// One pre-computed forecast row for a (country, region) pair.
/// Rows are produced by the upstream forecasting pipeline and imported
/// in bulk; the dashboard never writes them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiry_forecast")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub country: String,
    pub region: String,
    /// Date the prediction applies to.
    pub forecast_date: Date,
    /// Point forecast.
    pub yhat: f64,
    /// Lower confidence bound. Assumed `yhat_lower <= yhat <= yhat_upper`;
    /// the bound ordering is the upstream pipeline's contract, not ours.
    pub yhat_lower: f64,
    /// Upper confidence bound.
    pub yhat_upper: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
