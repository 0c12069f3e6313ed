use common::ForecastSeries;
use plotly::common::{Fill, Line, Mode, Title};
use plotly::layout::{Axis, HoverMode};
use plotly::{Layout, Plot, Scatter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Assemble the forecast chart: a line plus a shaded confidence band.
///
/// Three traces share the date axis. The upper bound MUST be added before
/// the lower bound: the lower trace fills "to the previous trace", so the
/// band spans [lower, upper] only in this order.
pub fn build_forecast_plot(series: &ForecastSeries) -> Plot {
    let dates: Vec<String> = series
        .points
        .iter()
        .map(|p| p.forecast_date.to_string())
        .collect();
    let yhat: Vec<f64> = series.points.iter().map(|p| p.yhat).collect();
    let upper: Vec<f64> = series.points.iter().map(|p| p.yhat_upper).collect();
    let lower: Vec<f64> = series.points.iter().map(|p| p.yhat_lower).collect();

    let forecast_trace = Scatter::new(dates.clone(), yhat)
        .mode(Mode::Lines)
        .name("Forecast");

    // Invisible boundary for the fill; keeps no legend entry
    let upper_trace = Scatter::new(dates.clone(), upper)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .show_legend(false);

    let lower_trace = Scatter::new(dates, lower)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .fill(Fill::ToNextY)
        .name("Confidence Interval");

    let layout = Layout::new()
        .title(Title::with_text(format!(
            "{} / {}",
            series.country, series.region
        )))
        .x_axis(Axis::new().title("Date"))
        .y_axis(Axis::new().title("Inquiries"))
        .hover_mode(HoverMode::XUnified)
        .height(450);

    let mut plot = Plot::new();
    plot.add_trace(forecast_trace);
    plot.add_trace(upper_trace);
    plot.add_trace(lower_trace);
    plot.set_layout(layout);
    plot
}

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    /// Never empty; the dashboard short-circuits to a notice instead of
    /// rendering this component for an empty series.
    pub series: ForecastSeries,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = props.series.clone();

    use_effect_with(
        (container_ref.clone(), series.clone()),
        move |(container_ref, series)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("forecast-chart");

                let plot = build_forecast_plot(series);

                let data_js = serde_wasm_bindgen::to_value(&plot.data()).unwrap();
                let layout_js = serde_wasm_bindgen::to_value(&plot.layout()).unwrap();

                newPlot("forecast-chart", data_js, layout_js);
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div ref={container_ref} style="width: 100%; height: 450px;"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::ForecastPoint;

    fn point(date: &str, yhat: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint::new(date.parse::<NaiveDate>().unwrap(), yhat, lower, upper)
    }

    fn bavaria_series() -> ForecastSeries {
        ForecastSeries::new(
            "Germany",
            "Bavaria",
            vec![
                point("2024-01-01", 10.0, 8.0, 12.0),
                point("2024-01-02", 12.0, 9.0, 15.0),
                point("2024-01-03", 11.0, 9.0, 13.0),
            ],
        )
    }

    #[test]
    fn plot_has_three_traces_with_all_points() {
        let plot = build_forecast_plot(&bavaria_series());
        let data = serde_json::to_value(plot.data()).unwrap();

        let traces = data.as_array().unwrap();
        assert_eq!(traces.len(), 3);

        for trace in traces {
            assert_eq!(trace["x"].as_array().unwrap().len(), 3);
            assert_eq!(trace["y"].as_array().unwrap().len(), 3);
        }
    }

    #[test]
    fn only_the_confidence_interval_trace_fills() {
        let plot = build_forecast_plot(&bavaria_series());
        let data = serde_json::to_value(plot.data()).unwrap();
        let traces = data.as_array().unwrap();

        assert_eq!(traces[0]["name"], "Forecast");
        assert!(traces[0].get("fill").is_none());

        // Upper bound: invisible stroke, no legend, no fill
        assert!(traces[1].get("fill").is_none());
        assert_eq!(traces[1]["showlegend"], false);
        assert_eq!(traces[1]["line"]["width"], 0.0);

        // Lower bound fills up to the trace before it (the upper bound)
        assert_eq!(traces[2]["name"], "Confidence Interval");
        assert_eq!(traces[2]["fill"], "tonexty");
        assert_eq!(traces[2]["line"]["width"], 0.0);
    }

    #[test]
    fn band_boundaries_keep_upper_before_lower() {
        let plot = build_forecast_plot(&bavaria_series());
        let data = serde_json::to_value(plot.data()).unwrap();
        let traces = data.as_array().unwrap();

        let upper: Vec<f64> = traces[1]["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let lower: Vec<f64> = traces[2]["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();

        assert_eq!(upper, vec![12.0, 15.0, 13.0]);
        assert_eq!(lower, vec![8.0, 9.0, 9.0]);
    }

    #[test]
    fn layout_labels_axes_and_unifies_hover() {
        let plot = build_forecast_plot(&bavaria_series());
        let layout = serde_json::to_value(plot.layout()).unwrap();

        assert_eq!(layout["xaxis"]["title"]["text"], "Date");
        assert_eq!(layout["yaxis"]["title"]["text"], "Inquiries");
        assert_eq!(layout["hovermode"], "x unified");
    }
}
