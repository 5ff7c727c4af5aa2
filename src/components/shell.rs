//! Document-level wrapper: language, title and description, then the page.

use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::config::PageMeta;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub meta: PageMeta,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    use_effect_with(props.meta.clone(), |meta| {
        if let Err(e) = apply_page_meta(meta) {
            log::warn!("could not apply page metadata: {}", e);
        }
        || ()
    });

    html! {
      <main class="shell">
        { props.children.clone() }
      </main>
    }
}

fn apply_page_meta(meta: &PageMeta) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;

    if let Some(root) = document.document_element() {
        root.set_attribute("lang", &meta.lang).map_err(js_err)?;
    }
    document.set_title(&meta.title);

    // index.html ships one, but don't rely on it
    let description = match document
        .query_selector("meta[name=\"description\"]")
        .map_err(js_err)?
    {
        Some(el) => el,
        None => {
            let el = document.create_element("meta").map_err(js_err)?;
            el.set_attribute("name", "description").map_err(js_err)?;
            document
                .head()
                .ok_or("no <head>")?
                .append_child(&el)
                .map_err(js_err)?;
            el
        }
    };
    description
        .set_attribute("content", &meta.description)
        .map_err(js_err)?;

    Ok(())
}

fn js_err(v: JsValue) -> String {
    format!("{:?}", v)
}
