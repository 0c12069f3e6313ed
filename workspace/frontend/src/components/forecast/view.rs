use common::ForecastSeries;
use yew::prelude::*;

use super::chart::ForecastChart;
use super::table::ForecastTable;
use crate::api_client::forecast;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::fetch_hook::use_fetch_with_refetch;
use crate::components::common::loading::Loading;
use crate::components::common::toast::ToastContext;
use crate::hooks::FetchState;

/// The dashboard page: two dependent selections driving the forecast view.
///
/// Selection flow: no country -> country selected (regions load) -> region
/// selected (forecast loads). Changing the country resets the region and
/// reloads the region list.
#[function_component(ForecastDashboard)]
pub fn forecast_dashboard() -> Html {
    let selected_country = use_state(|| None::<String>);
    let selected_region = use_state(|| None::<String>);
    let regions = use_state(FetchState::<Vec<String>>::default);
    let forecast_state = use_state(FetchState::<ForecastSeries>::default);
    let retry_counter = use_state(|| 0u32);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let (countries, refetch_countries) = use_fetch_with_refetch(|| forecast::get_countries());

    // Load regions whenever the selected country changes
    {
        let regions = regions.clone();
        let toast_ctx = toast_ctx.clone();
        use_effect_with((*selected_country).clone(), move |country| {
            match country.clone() {
                Some(country) => {
                    regions.set(FetchState::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        match forecast::get_regions(&country).await {
                            Ok(data) => regions.set(FetchState::Success(data)),
                            Err(err) => {
                                regions.set(FetchState::Error(err.clone()));
                                toast_ctx.show_error(err);
                            }
                        }
                    });
                }
                None => regions.set(FetchState::NotStarted),
            }
            || ()
        });
    }

    // Load the forecast once both selections resolve
    {
        let forecast_state = forecast_state.clone();
        let toast_ctx = toast_ctx.clone();
        use_effect_with(
            (
                (*selected_country).clone(),
                (*selected_region).clone(),
                *retry_counter,
            ),
            move |(country, region, _)| {
                match (country.clone(), region.clone()) {
                    (Some(country), Some(region)) => {
                        forecast_state.set(FetchState::Loading);
                        wasm_bindgen_futures::spawn_local(async move {
                            match forecast::get_forecast(&country, &region).await {
                                Ok(series) => forecast_state.set(FetchState::Success(series)),
                                Err(err) => {
                                    forecast_state.set(FetchState::Error(err.clone()));
                                    toast_ctx.show_error(err);
                                }
                            }
                        });
                    }
                    _ => forecast_state.set(FetchState::NotStarted),
                }
                || ()
            },
        );
    }

    let on_country_change = {
        let selected_country = selected_country.clone();
        let selected_region = selected_region.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                log::debug!("Country selection changed to: {:?}", value);
                // A new country invalidates the region selection
                selected_region.set(None);
                if value.is_empty() {
                    selected_country.set(None);
                } else {
                    selected_country.set(Some(value));
                }
            }
        })
    };

    let on_region_change = {
        let selected_region = selected_region.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                log::debug!("Region selection changed to: {:?}", value);
                if value.is_empty() {
                    selected_region.set(None);
                } else {
                    selected_region.set(Some(value));
                }
            }
        })
    };

    let country_select = match &*countries {
        FetchState::Success(countries) => html! {
            <select
                class="select select-bordered w-full"
                onchange={on_country_change}
                value={(*selected_country).clone().unwrap_or_default()}
            >
                <option value="" selected={selected_country.is_none()}>{"Select a country"}</option>
                {for countries.iter().map(|country| html! {
                    <option
                        value={country.clone()}
                        selected={selected_country.as_deref() == Some(country.as_str())}
                    >
                        {country}
                    </option>
                })}
            </select>
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={Some(refetch_countries.clone())} />
        },
        _ => html! {
            <select class="select select-bordered w-full" disabled=true>
                <option>{"Loading countries..."}</option>
            </select>
        },
    };

    let region_select = match &*regions {
        FetchState::Success(region_list) => html! {
            <select
                class="select select-bordered w-full"
                onchange={on_region_change}
                value={(*selected_region).clone().unwrap_or_default()}
            >
                <option value="" selected={selected_region.is_none()}>{"Select a region"}</option>
                {for region_list.iter().map(|region| html! {
                    <option
                        value={region.clone()}
                        selected={selected_region.as_deref() == Some(region.as_str())}
                    >
                        {region}
                    </option>
                })}
            </select>
        },
        FetchState::Loading => html! {
            <select class="select select-bordered w-full" disabled=true>
                <option>{"Loading regions..."}</option>
            </select>
        },
        _ => html! {
            <select class="select select-bordered w-full" disabled=true>
                <option>{"Select a country first"}</option>
            </select>
        },
    };

    let on_retry_forecast = {
        let retry_counter = retry_counter.clone();
        Callback::from(move |_| retry_counter.set(*retry_counter + 1))
    };

    let content = match &*forecast_state {
        FetchState::NotStarted => html! {
            <div class="text-center py-12 text-gray-500">
                <p>{"Select a country and region to see the inquiry forecast."}</p>
            </div>
        },
        FetchState::Loading => html! { <Loading text="Loading forecast..." /> },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={Some(on_retry_forecast)} />
        },
        FetchState::Success(series) if series.is_empty() => html! {
            <div class="alert alert-warning mt-6">
                <span>{"No forecast data for this selection."}</span>
            </div>
        },
        FetchState::Success(series) => html! {
            <>
                <ForecastChart series={series.clone()} />
                <ForecastTable series={series.clone()} />
            </>
        },
    };

    html! {
        <>
            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Country"}</span></label>
                            {country_select}
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Region"}</span></label>
                            {region_select}
                        </div>
                    </div>
                </div>
            </div>
            {content}
        </>
    }
}
