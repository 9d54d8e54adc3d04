use anyhow::{anyhow, Context, Result};
use app::{RecipeApp, RecipeAppProps};

/// Element holding the JSON props written by the server.
const PROPS_ELEMENT: &str = "recipe-props";
/// Element the server rendered the page into.
const ROOT_ELEMENT: &str = "app";

fn start() -> Result<()> {
    let document = gloo_utils::document();

    let payload = document
        .get_element_by_id(PROPS_ELEMENT)
        .and_then(|element| element.text_content())
        .ok_or_else(|| anyhow!("#{PROPS_ELEMENT} is missing"))?;

    let props: RecipeAppProps =
        serde_json::from_str(&payload).context("Could not decode page props")?;

    let root = document
        .get_element_by_id(ROOT_ELEMENT)
        .ok_or_else(|| anyhow!("#{ROOT_ELEMENT} is missing"))?;

    yew::Renderer::<RecipeApp>::with_root_and_props(root, props).hydrate();

    Ok(())
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = start() {
        log::error!("{:#}", err);
    }
}
