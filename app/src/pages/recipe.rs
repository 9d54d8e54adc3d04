use crate::client::ApiHandle;
use crate::components::RecipeView;
use crate::flow::{delete_recipe, DeleteEvent, DeleteFlow, Effect, Outcome};
use models::RecipeId;
use std::cell::RefCell;
use std::future::Future;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: models::RecipeCard,
    pub api: ApiHandle,
    /// Called once the backend answered the DELETE.
    pub on_deleted: Callback<()>,
}

/// Apply `event` to `flow`. If that starts the deletion, returns the request to run, which
/// emits `on_deleted` only when the backend answered.
pub fn handle_event(
    flow: &RefCell<DeleteFlow>,
    event: DeleteEvent,
    api: &ApiHandle,
    id: &RecipeId,
    on_deleted: &Callback<()>,
) -> Option<impl Future<Output = ()> + 'static> {
    let Effect::Delete = flow.borrow_mut().handle(event)?;

    let api = api.clone();
    let id = id.clone();
    let on_deleted = on_deleted.clone();

    Some(async move {
        if let Outcome::Deleted = delete_recipe(&*api, &id).await {
            on_deleted.emit(());
        }
    })
}

#[function_component(RecipePage)]
pub fn recipe_page(Props { recipe, api, on_deleted }: &Props) -> Html {
    // Updated synchronously from the event handler, so a second click can never observe a
    // stale state and fire another DELETE.
    let flow = use_mut_ref(DeleteFlow::default);
    let update = use_force_update();

    let on_event = {
        let flow = flow.clone();
        let api = api.clone();
        let id = recipe.id.clone();
        let on_deleted = on_deleted.clone();

        Callback::from(move |event: DeleteEvent| {
            let request = handle_event(&flow, event, &api, &id, &on_deleted);
            update.force_update();

            if let Some(request) = request {
                spawn_local(request);
            }
        })
    };

    let current = *flow.borrow();

    html! {
        <RecipeView recipe={recipe.clone()} flow={current} {on_event} />
    }
}
