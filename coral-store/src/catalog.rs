//! MenuCatalogStore - category and dish catalog
//!
//! Categories are keyed by id internally; the name index used by
//! `ADD_DISH` is a derived lookup rebuilt on every catalog change, and
//! duplicate names are warned about (the first match wins).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;
use shared::command::{CatalogCommand, Command};
use shared::models::{MenuCategory, MenuDish};
use shared::util::{IdGen, to_cents};
use tracing::{debug, warn};

/// Menu catalog slice
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuCatalogStore {
    categories: Vec<MenuCategory>,
    /// Derived: category name -> id of the first category with that name
    #[serde(skip)]
    name_index: HashMap<String, i64>,
    #[serde(skip)]
    ids: IdGen,
}

impl MenuCatalogStore {
    /// Apply a command. Commands addressed to other stores are ignored.
    pub fn apply(&mut self, command: &Command) {
        let Command::Catalog(command) = command else {
            return;
        };
        match command {
            CatalogCommand::AddCategory(create) => {
                self.categories.push(MenuCategory {
                    id: self.ids.next_id(),
                    name: create.name.clone(),
                    bg_color: create
                        .bg_color
                        .clone()
                        .unwrap_or_else(shared::models::catalog::default_bg_color),
                    icon: create
                        .icon
                        .clone()
                        .unwrap_or_else(shared::models::catalog::default_icon),
                    items: Vec::new(),
                });
                self.rebuild_index();
            }
            CatalogCommand::AddDish {
                category_name,
                dish,
            } => {
                let dish_id = self.ids.next_id();
                let Some(&category_id) = self.name_index.get(category_name) else {
                    debug!(category_name = %category_name, "add_dish: category not found, ignoring");
                    return;
                };
                let Some(category) = self.category_mut(category_id) else {
                    return;
                };
                let name = category.name.clone();
                category.items.push(MenuDish {
                    id: dish_id,
                    name: dish.name.clone(),
                    price: to_cents(dish.price),
                    category: name,
                });
            }
            CatalogCommand::RemoveCategory { category_id } => {
                self.categories.retain(|category| category.id != *category_id);
                self.rebuild_index();
            }
            CatalogCommand::RemoveDish {
                category_id,
                dish_id,
            } => {
                let Some(category) = self.category_mut(*category_id) else {
                    debug!(category_id = %category_id, "remove_dish: category not found, ignoring");
                    return;
                };
                category.items.retain(|dish| dish.id != *dish_id);
            }
            CatalogCommand::UpdateCategory { category_id, patch } => {
                let Some(category) = self.category_mut(*category_id) else {
                    debug!(category_id = %category_id, "update_category: not found, ignoring");
                    return;
                };
                if let Some(name) = &patch.name {
                    category.name = name.clone();
                    // Dish back-references follow the rename
                    for dish in &mut category.items {
                        dish.category = name.clone();
                    }
                }
                if let Some(bg_color) = &patch.bg_color {
                    category.bg_color = bg_color.clone();
                }
                if let Some(icon) = &patch.icon {
                    category.icon = icon.clone();
                }
                self.rebuild_index();
            }
            CatalogCommand::UpdateDish {
                category_id,
                dish_id,
                patch,
            } => {
                let Some(category) = self.category_mut(*category_id) else {
                    debug!(category_id = %category_id, "update_dish: category not found, ignoring");
                    return;
                };
                let Some(dish) = category.items.iter_mut().find(|dish| dish.id == *dish_id)
                else {
                    debug!(dish_id = %dish_id, "update_dish: dish not found, ignoring");
                    return;
                };
                if let Some(name) = &patch.name {
                    dish.name = name.clone();
                }
                if let Some(price) = patch.price {
                    dish.price = to_cents(price);
                }
            }
            CatalogCommand::ReplaceAll { categories } => {
                self.categories = categories.clone();
                self.rebuild_index();
            }
        }
    }

    fn category_mut(&mut self, category_id: i64) -> Option<&mut MenuCategory> {
        self.categories
            .iter_mut()
            .find(|category| category.id == category_id)
    }

    fn rebuild_index(&mut self) {
        self.name_index.clear();
        for category in &self.categories {
            match self.name_index.entry(category.name.clone()) {
                Entry::Occupied(_) => {
                    warn!(
                        name = %category.name,
                        "duplicate category name, name lookups resolve to the first match"
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(category.id);
                }
            }
        }
    }

    // ===== Selectors =====

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: i64) -> Option<&MenuCategory> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    /// First category carrying `name`, via the derived index
    pub fn category_by_name(&self, name: &str) -> Option<&MenuCategory> {
        self.name_index
            .get(name)
            .and_then(|&category_id| self.category(category_id))
    }
}
