use common::ForecastSeries;
use yew::prelude::*;

use crate::api_client::forecast;

#[derive(Properties, PartialEq)]
pub struct ForecastTableProps {
    pub series: ForecastSeries,
}

/// Collapsible raw-data view of the forecast plus the CSV download action.
#[function_component(ForecastTable)]
pub fn forecast_table(props: &ForecastTableProps) -> Html {
    let series = &props.series;
    let download_url = forecast::export_url(&series.country, &series.region);

    html! {
        <div class="collapse collapse-arrow bg-base-100 shadow mt-6">
            <input type="checkbox" />
            <div class="collapse-title text-lg font-medium">
                {format!("Raw forecast data ({} rows)", series.len())}
            </div>
            <div class="collapse-content overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Forecast"}</th>
                            <th>{"Lower Bound"}</th>
                            <th>{"Upper Bound"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for series.points.iter().map(|point| {
                            html! {
                                <tr key={point.forecast_date.to_string()}>
                                    <td>{point.forecast_date.format("%Y-%m-%d").to_string()}</td>
                                    <td>{format!("{:.2}", point.yhat)}</td>
                                    <td>{format!("{:.2}", point.yhat_lower)}</td>
                                    <td>{format!("{:.2}", point.yhat_upper)}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
                <a
                    class="btn btn-primary btn-sm mt-4"
                    href={download_url}
                    download={series.export_filename()}
                >
                    {"Download CSV"}
                </a>
            </div>
        </div>
    }
}
