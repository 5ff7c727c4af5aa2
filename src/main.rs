mod api;
mod components;
mod config;
mod state;
mod timefmt;

use yew::prelude::*;

use components::{GreetingView, Shell};
use config::AppConfig;

#[function_component(App)]
fn app() -> Html {
    let config = use_state(AppConfig::load);

    html! {
        <Shell meta={config.page.clone()}>
            <GreetingView endpoint={config.hello_url()} />
        </Shell>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    yew::Renderer::<App>::new().render();
}
