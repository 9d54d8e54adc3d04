mod recipe;

pub use recipe::RecipePage;
