use crate::components::{ConfirmPanel, RecipeImage};
use crate::flow::{DeleteEvent, DeleteFlow};
use models::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: models::RecipeCard,
    pub flow: DeleteFlow,
    pub on_event: Callback<DeleteEvent>,
}

#[function_component(RecipeView)]
pub fn recipe_view(Props { recipe, flow, on_event }: &Props) -> Html {
    if flow.is_deleting() {
        return html! {
            <div class="show-recipe">
                <h1>{ "Loading..." }</h1>
            </div>
        };
    }

    let delete = if flow.confirm() {
        html! {
            <ConfirmPanel
                on_cancel={on_event.reform(|_: MouseEvent| DeleteEvent::Cancel)}
                on_confirm={on_event.reform(|_: MouseEvent| DeleteEvent::Confirm)}
            />
        }
    } else {
        html! {
            <button
                class="show-recipe__delete"
                onclick={on_event.reform(|_: MouseEvent| DeleteEvent::Request)}
            >
                { "Delete" }
            </button>
        }
    };

    html! {
        <div class="show-recipe">
            <p class="heading">{ recipe.name.clone() }</p>
            <div class="line-divide"></div>
            <div class="show-recipe__image">
                <div class="show-recipe__image-times">
                    <p>{ "Prep Time: " }<span>{ format!("{} min", format_number(recipe.prep_time)) }</span></p>
                    <p>{ "Cook Time: " }<span>{ format!("{} min", format_number(recipe.cook_time)) }</span></p>
                </div>
                <RecipeImage src={recipe.image_url.clone()} alt={recipe.name.clone()} />
            </div>
            <h1 class="show-recipe__subheading">{ "Ingredients" }</h1>
            <p class="show-recipe__p">{ recipe.ingredients.clone() }</p>
            <h1 class="show-recipe__subheading">{ "Instructions" }</h1>
            <p class="show-recipe__p">{ recipe.instructions.clone() }</p>
            if let Some(servings) = recipe.visible_servings() {
                <p class="show-recipe__serves">{ "Serves: " }<span>{ format_number(servings) }</span></p>
            }
            { delete }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{RecipeCard, RecipeId};
    use yew::ServerRenderer;

    fn soup(servings: Option<f64>) -> RecipeCard {
        RecipeCard {
            id: RecipeId::from("42"),
            name: "Soup".to_string(),
            image_url: "/soup.png".to_string(),
            prep_time: 5.0,
            cook_time: 20.0,
            servings,
            ingredients: "Water, salt".to_string(),
            instructions: "Boil.".to_string(),
        }
    }

    async fn render(recipe: RecipeCard, flow: DeleteFlow) -> String {
        ServerRenderer::<RecipeView>::with_props(move || Props {
            recipe,
            flow,
            on_event: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn shows_recipe() {
        let html = render(soup(Some(4.0)), DeleteFlow::Idle).await;

        assert!(html.contains("Soup"));
        assert!(html.contains("Prep Time: "));
        assert!(html.contains("5 min"));
        assert!(html.contains("Cook Time: "));
        assert!(html.contains("20 min"));
        assert!(html.contains("Serves: "));
        assert!(html.contains("<span>4</span>"));
        assert!(html.contains("Water, salt"));
        assert!(html.contains("Boil."));
        assert!(html.contains(r#"src="/soup.png""#));
        assert!(html.contains(r#"alt="Soup""#));
        assert!(html.contains(r#"width="400""#));
        assert!(html.contains(r#"height="200""#));
        assert!(html.contains(r#"loading="eager""#));
        assert!(html.contains("show-recipe__delete"));
        assert!(!html.contains("Are you sure?"));
    }

    #[tokio::test]
    async fn same_input_renders_identically() {
        let first = render(soup(Some(4.0)), DeleteFlow::Idle).await;
        let second = render(soup(Some(4.0)), DeleteFlow::Idle).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn hides_unknown_servings() {
        for servings in [Some(0.0), None] {
            let html = render(soup(servings), DeleteFlow::Idle).await;
            assert!(!html.contains("Serves"));
        }
    }

    #[tokio::test]
    async fn shows_exact_servings() {
        let html = render(soup(Some(12.0)), DeleteFlow::Idle).await;
        assert!(html.contains("<span>12</span>"));
    }

    #[tokio::test]
    async fn fractional_and_negative_numbers_render() {
        let mut recipe = soup(Some(-1.0));
        recipe.prep_time = 2.5;
        let html = render(recipe, DeleteFlow::Idle).await;

        assert!(html.contains("2.5 min"));
        assert!(html.contains("20 min"));
        assert!(html.contains("<span>-1</span>"));
    }

    #[tokio::test]
    async fn confirming_replaces_delete_button() {
        let html = render(soup(Some(4.0)), DeleteFlow::Confirming).await;

        assert!(html.contains("Are you sure?"));
        assert!(html.contains("Cancel"));
        assert!(!html.contains("show-recipe__delete"));
        assert!(html.contains("Soup"));
    }

    #[tokio::test]
    async fn deleting_shows_only_loading() {
        let html = render(soup(Some(4.0)), DeleteFlow::Deleting).await;

        assert!(html.contains("Loading..."));
        assert!(!html.contains("Soup"));
        assert!(!html.contains("Delete"));
    }
}
