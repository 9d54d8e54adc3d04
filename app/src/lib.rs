pub mod client;
pub mod components;
pub mod flow;
pub mod pages;

#[cfg(test)]
mod testing;

use client::{ApiHandle, HttpApi};
use models::{ApiConfig, RecipeCard};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Everything the browser needs to take over a server-rendered recipe page.
#[derive(Clone, Debug, PartialEq, Properties, Deserialize, Serialize)]
pub struct RecipeAppProps {
    pub recipe: RecipeCard,
    pub api: ApiConfig,
}

#[function_component(RecipeApp)]
pub fn recipe_app(RecipeAppProps { recipe, api }: &RecipeAppProps) -> Html {
    let handle = use_memo(api.clone(), |api| ApiHandle::new(HttpApi::new(api.clone())));
    let on_deleted = Callback::from(|_| navigate_to_root());

    html! {
        <main>
            <pages::RecipePage recipe={recipe.clone()} api={(*handle).clone()} {on_deleted} />
        </main>
    }
}

fn navigate_to_root() {
    if let Err(err) = gloo_utils::window().location().set_href("/") {
        log::error!("Navigating to / failed: {:?}", err);
    }
}
