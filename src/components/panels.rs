//! The state-specific panels and the static tech stack card.

use yew::prelude::*;

use crate::api::GreetingResponse;
use crate::state::FetchState;
use crate::timefmt::format_timestamp;

pub const BACKEND_HINT: &str = "Make sure the FastAPI backend is running on port 8000";

struct TechItem {
    label: &'static str,
    role: &'static str,
}

const TECH_STACK: &[TechItem] = &[
    TechItem { label: "Rust", role: "Language" },
    TechItem { label: "Yew", role: "UI" },
    TechItem { label: "WebAssembly", role: "Runtime" },
    TechItem { label: "gloo-net", role: "HTTP" },
    TechItem { label: "FastAPI", role: "Backend" },
    TechItem { label: "Pydantic", role: "Validation" },
];

#[derive(Properties, PartialEq)]
pub struct StatePanelProps {
    pub state: FetchState,
}

/// Exactly one of loading, error or success.
#[function_component(StatePanel)]
pub fn state_panel(props: &StatePanelProps) -> Html {
    let state = &props.state;

    if let Some(response) = state.result() {
        html! { <SuccessPanel response={response.clone()} /> }
    } else if let Some(message) = state.error_message() {
        html! { <ErrorPanel message={message.to_string()} /> }
    } else {
        html! { <LoadingPanel /> }
    }
}

#[function_component(LoadingPanel)]
pub fn loading_panel() -> Html {
    html! {
      <div class="loading" role="status" aria-live="polite">
        <div class="spinner" aria-hidden="true"></div>
        <p class="small">{ "Fetching data from backend..." }</p>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
      <div class="err" role="alert">
        <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
          <path
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
          />
        </svg>
        <div>
          <h3>{ "Error connecting to backend" }</h3>
          <p class="err-text">{ props.message.to_string() }</p>
          <p class="hint">{ BACKEND_HINT }</p>
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessPanelProps {
    pub response: GreetingResponse,
}

#[function_component(SuccessPanel)]
pub fn success_panel(props: &SuccessPanelProps) -> Html {
    let r = &props.response;

    html! {
      <div class="success">
        <div class="greeting">{ r.message.clone() }</div>

        <div class="grid">
          <div class="kv">
            <div class="label">{ "Timestamp" }</div>
            <div class="value">{ format_timestamp(&r.timestamp) }</div>
          </div>
          <div class="kv">
            <div class="label">{ "API Version" }</div>
            <div class="value">{ r.version.clone() }</div>
          </div>
        </div>

        <div class="ok">
          <svg class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path
              stroke-linecap="round"
              stroke-linejoin="round"
              stroke-width="2"
              d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"
            />
          </svg>
          <span>{ "Successfully connected to backend!" }</span>
        </div>
      </div>
    }
}

#[function_component(TechStackPanel)]
pub fn tech_stack_panel() -> Html {
    html! {
      <section class="card tech" aria-label="Tech stack">
        <h2>{ "Tech Stack" }</h2>
        <div class="grid">
          { for TECH_STACK.iter().map(|t| html!{
            <div class="tech-item">
              <div class="title">{ t.label }</div>
              <div class="small">{ t.role }</div>
            </div>
          })}
        </div>
      </section>
    }
}
