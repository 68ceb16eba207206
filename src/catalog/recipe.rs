// src/catalog/recipe.rs
use serde::Serialize;

/// A validated recipe. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    title: String,
    full_ingredients: Vec<String>,
    instructions: String,
    image_name: String,
    ingredients: Vec<String>,
    price: f64,
}

impl Recipe {
    /// `ingredients` is the canonical list; `price` is its summed cost.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        full_ingredients: Vec<String>,
        instructions: impl Into<String>,
        image_name: impl Into<String>,
        ingredients: Vec<String>,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            full_ingredients,
            instructions: instructions.into(),
            image_name: image_name.into(),
            ingredients,
            price,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ingredient lines as written in the source, quantities included.
    #[must_use]
    pub fn full_ingredients(&self) -> &[String] {
        &self.full_ingredients
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    /// Canonical ingredient names.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}
