use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::panels::{StatePanel, TechStackPanel};
use crate::api::GlooTransport;
use crate::state::{load_greeting, FetchState};

#[derive(Properties, PartialEq)]
pub struct GreetingViewProps {
    /// Full URL of the greeting endpoint
    pub endpoint: AttrValue,
}

#[function_component(GreetingView)]
pub fn greeting_view(props: &GreetingViewProps) -> Html {
    let state = use_state(FetchState::default);

    // Fetch once on mount. A response that lands after unmount is dropped.
    {
        let state = state.clone();
        let endpoint = props.endpoint.clone();

        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let still_mounted = alive.clone();

            state.set(FetchState::Loading);

            spawn_local(async move {
                let next = load_greeting(&GlooTransport, &endpoint).await;
                if still_mounted.get() {
                    state.set(next);
                } else {
                    log::debug!("greeting view unmounted, discarding response");
                }
            });

            move || alive.set(false)
        });
    }

    html! {
      <div class="wrap">
        <header class="hero">
          <h1>{ "Full-Stack Hello World" }</h1>
          <p>{ "Rust + Yew + WebAssembly + FastAPI" }</p>
        </header>

        <section class="card" aria-busy={state.is_loading().to_string()}>
          <StatePanel state={(*state).clone()} />
        </section>

        <TechStackPanel />
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn first_render_is_loading_with_tech_stack() {
        let props = GreetingViewProps {
            endpoint: "http://localhost:8000/api/hello".into(),
        };
        let html = block_on(LocalServerRenderer::<GreetingView>::with_props(props).render());

        assert!(html.contains("Full-Stack Hello World"));
        assert!(html.contains("Fetching data from backend..."));
        assert!(html.contains("aria-busy=\"true\""));
        assert!(html.contains("Tech Stack"));
        assert!(!html.contains("Error connecting to backend"));
        assert!(!html.contains("Successfully connected to backend!"));
    }
}
