use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub src: String,
    pub alt: String,
    #[prop_or(400)]
    pub width: u32,
    #[prop_or(200)]
    pub height: u32,
}

/// Fixed-size, cropped image that the browser fetches right away.
#[function_component(RecipeImage)]
pub fn recipe_image(Props { src, alt, width, height }: &Props) -> Html {
    html! {
        <img
            src={src.clone()}
            alt={alt.clone()}
            width={width.to_string()}
            height={height.to_string()}
            loading="eager"
            fetchpriority="high"
            style="object-fit: cover; border-radius: 10px;"
        />
    }
}
