use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the forecast table
        manager
            .create_table(
                Table::create()
                    .table(InquiryForecast::Table)
                    .if_not_exists()
                    .col(pk_auto(InquiryForecast::Id))
                    .col(string(InquiryForecast::Country))
                    .col(string(InquiryForecast::Region))
                    .col(date(InquiryForecast::ForecastDate))
                    .col(double(InquiryForecast::Yhat))
                    .col(double(InquiryForecast::YhatLower))
                    .col(double(InquiryForecast::YhatUpper))
                    .to_owned(),
            )
            .await?;

        // Every dashboard query filters on (country, region) and sorts by date
        manager
            .create_index(
                Index::create()
                    .name("idx_inquiry_forecast_selection")
                    .table(InquiryForecast::Table)
                    .col(InquiryForecast::Country)
                    .col(InquiryForecast::Region)
                    .col(InquiryForecast::ForecastDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InquiryForecast::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InquiryForecast {
    Table,
    Id,
    Country,
    Region,
    ForecastDate,
    Yhat,
    YhatLower,
    YhatUpper,
}
