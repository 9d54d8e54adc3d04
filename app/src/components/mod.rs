mod confirm;
mod image;
mod recipe_view;

pub use confirm::ConfirmPanel;
pub use image::RecipeImage;
pub use recipe_view::RecipeView;
