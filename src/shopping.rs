use serde::{Deserialize, Serialize};

/// A checkable shopping list projected from a recipe's cleaned ingredients.
///
/// Pure state: rendering and persistence belong to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub checked: bool,
}

impl ShoppingList {
    /// Build a list from a newline-separated ingredient block, skipping
    /// blank lines. Usually fed `ParsedRecipe::cleaned_ingredients`.
    pub fn from_ingredients(ingredients: &str) -> Self {
        let items = ingredients
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| ShoppingItem {
                name: line.to_string(),
                checked: false,
            })
            .collect();
        ShoppingList { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip one item's checked state. Returns the new state, or `false`
    /// when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.checked = !item.checked;
                item.checked
            }
            None => false,
        }
    }
}
