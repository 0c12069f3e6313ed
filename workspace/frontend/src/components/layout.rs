use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                        {"Inquiry Forecast"}
                    </Link<Route>>
                </div>
                <div class="flex-none">
                    <ul class="menu menu-horizontal px-1">
                        <li><Link<Route> to={Route::Home}>{"Dashboard"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <main class="container mx-auto p-6">
                <h1 class="text-2xl font-bold mb-6">{props.title.clone()}</h1>
                {props.children.clone()}
            </main>
        </div>
    }
}
