//! HTML document around the server-rendered recipe page.

use crate::Result;
use app::{RecipeApp, RecipeAppProps};
use maud::{html, PreEscaped, DOCTYPE};
use tracing::instrument;
use yew::ServerRenderer;

/// Loads the wasm bundle, which hydrates `#app` from the props in `#recipe-props`.
const BOOTSTRAP: &str = r#"import init from "/static/app.js"; init();"#;

/// Render the full page for `props`.
#[instrument(skip_all, fields(id = %props.recipe.id))]
pub async fn page(props: RecipeAppProps) -> Result<String> {
    // `<` never appears raw, so the payload cannot close its script element.
    let payload = serde_json::to_string(&props)?.replace('<', "\\u003c");
    let title = props.recipe.name.clone();

    let body = ServerRenderer::<RecipeApp>::with_props(move || props)
        .render()
        .await;

    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/static/app.css";
                script type="module" { (PreEscaped(BOOTSTRAP)) }
            }
            body {
                div id="app" { (PreEscaped(body)) }
                script id="recipe-props" type="application/json" { (PreEscaped(payload)) }
            }
        }
    };

    Ok(document.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{ApiConfig, RecipeCard, RecipeId};

    fn props(name: &str) -> RecipeAppProps {
        RecipeAppProps {
            recipe: RecipeCard {
                id: RecipeId::from("42"),
                name: name.to_string(),
                image_url: "/soup.png".to_string(),
                prep_time: 5.0,
                cook_time: 20.0,
                servings: Some(4.0),
                ingredients: "Water".to_string(),
                instructions: "Boil.".to_string(),
            },
            api: ApiConfig::new("/api/recipes"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn wraps_rendered_page() {
        let page = page(props("Soup")).await.unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Soup</title>"));
        assert!(page.contains(r#"<div id="app">"#));
        assert!(page.contains("5 min"));
        assert!(page.contains(BOOTSTRAP));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn embeds_props_for_hydration() {
        let page = page(props("Soup")).await.unwrap();

        let start = page.find(r#"<script id="recipe-props" type="application/json">"#).unwrap();
        let json = &page[start..];
        let json = &json[json.find('>').unwrap() + 1..json.find("</script>").unwrap()];
        let decoded: RecipeAppProps = serde_json::from_str(json).unwrap();

        assert_eq!(decoded, props("Soup"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn markup_in_names_stays_inert() {
        let page = page(props("</script><b>Soup</b>")).await.unwrap();

        assert!(!page.contains("</script><b>"));
        assert!(page.contains(r#"\u003c/script>\u003cb>Soup\u003c/b>"#));
        assert!(page.contains("<title>&lt;/script&gt;&lt;b&gt;Soup&lt;/b&gt;</title>"));
    }
}
