//! Export Snapshot
//!
//! Flattens a list into header/item rows for the document renderer.
//! Categories without sub-ingredients produce no rows at all.

use crate::model::{Ingredient, IngredientId, IngredientList};
use crate::scaling::compute_display_quantity;

/// One row handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum ExportRow<'a> {
    /// Category header (name only)
    Category { name: &'a str },
    /// Sub-ingredient with its scaled quantity
    Item {
        name: &'a str,
        quantity: f64,
        unit: &'a str,
    },
}

impl ExportRow<'_> {
    pub fn is_category(&self) -> bool {
        matches!(self, ExportRow::Category { .. })
    }
}

/// Restartable view over a list's export rows
#[derive(Debug, Clone, Copy)]
pub struct ExportSnapshot<'a> {
    list: &'a IngredientList,
    number_of_people: u32,
}

/// Snapshot of `list` scaled for `number_of_people`
pub fn export_snapshot(list: &IngredientList, number_of_people: u32) -> ExportSnapshot<'_> {
    ExportSnapshot { list, number_of_people }
}

impl<'a> ExportSnapshot<'a> {
    pub fn list(&self) -> &'a IngredientList {
        self.list
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    /// Fresh lazy iterator; each call starts from the beginning
    pub fn rows(&self) -> ExportRows<'a> {
        ExportRows {
            ingredients: &self.list.ingredients,
            number_of_people: self.number_of_people,
            next_category: 0,
            current: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().next().is_none()
    }
}

impl<'a> IntoIterator for &ExportSnapshot<'a> {
    type Item = ExportRow<'a>;
    type IntoIter = ExportRows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

/// Lazy row iterator produced by [`ExportSnapshot::rows`]
#[derive(Debug, Clone)]
pub struct ExportRows<'a> {
    ingredients: &'a [Ingredient],
    number_of_people: u32,
    /// Index to resume the category scan from
    next_category: usize,
    /// Category being emitted and the index to resume its item scan from
    current: Option<(&'a IngredientId, usize)>,
}

impl<'a> Iterator for ExportRows<'a> {
    type Item = ExportRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let ingredients = self.ingredients;
        loop {
            if let Some((parent, from)) = self.current {
                match ingredients[from..].iter().position(|i| i.belongs_to(parent)) {
                    Some(offset) => {
                        let item = &ingredients[from + offset];
                        self.current = Some((parent, from + offset + 1));
                        return Some(ExportRow::Item {
                            name: &item.name,
                            quantity: compute_display_quantity(item, self.number_of_people),
                            unit: &item.base_unit,
                        });
                    }
                    None => self.current = None,
                }
            }

            let (index, category) = ingredients
                .iter()
                .enumerate()
                .skip(self.next_category)
                .find(|(_, i)| i.is_category())?;
            self.next_category = index + 1;

            if ingredients.iter().any(|i| i.belongs_to(&category.id)) {
                self.current = Some((&category.id, 0));
                return Some(ExportRow::Category { name: &category.name });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn list_with(ingredients: Vec<Ingredient>) -> IngredientList {
        let mut list = IngredientList::new("l".into(), "Party".into(), Utc::now());
        list.ingredients = ingredients;
        list
    }

    fn sub(id: &str, name: &str, parent: &str, qty: f64, unit: &str) -> Ingredient {
        Ingredient::sub_ingredient(id.into(), name.into(), parent.into(), qty, unit.into())
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let list = list_with(vec![
            Ingredient::category("a".into(), "A".into()),
            Ingredient::category("b".into(), "B".into()),
            sub("b1", "Milk", "b", 1.0, "liters"),
        ]);
        let rows: Vec<_> = export_snapshot(&list, 1).rows().collect();
        assert_eq!(
            rows,
            vec![
                ExportRow::Category { name: "B" },
                ExportRow::Item { name: "Milk", quantity: 1.0, unit: "liters" },
            ]
        );
    }

    #[test]
    fn test_rows_group_by_category_and_scale() {
        // Sub-ingredients interleaved with categories in storage order
        let list = list_with(vec![
            Ingredient::category("a".into(), "Spices".into()),
            Ingredient::category("b".into(), "Veg".into()),
            sub("b1", "Onion", "b", 2.0, "pieces"),
            sub("a1", "Salt", "a", 0.5, "g"),
            sub("a2", "Pepper", "a", 1.0, "g"),
        ]);
        let rows: Vec<_> = export_snapshot(&list, 4).rows().collect();
        assert_eq!(
            rows,
            vec![
                ExportRow::Category { name: "Spices" },
                ExportRow::Item { name: "Salt", quantity: 2.0, unit: "g" },
                ExportRow::Item { name: "Pepper", quantity: 4.0, unit: "g" },
                ExportRow::Category { name: "Veg" },
                ExportRow::Item { name: "Onion", quantity: 8.0, unit: "pieces" },
            ]
        );
    }

    #[test]
    fn test_snapshot_is_restartable() {
        let list = list_with(vec![
            Ingredient::category("a".into(), "A".into()),
            sub("a1", "Flour", "a", 0.2, "kg"),
        ]);
        let snapshot = export_snapshot(&list, 2);
        let first: Vec<_> = snapshot.rows().collect();
        let second: Vec<_> = (&snapshot).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let list = list_with(vec![Ingredient::category("a".into(), "A".into())]);
        assert!(export_snapshot(&list, 3).is_empty());
        assert!(export_snapshot(&list_with(Vec::new()), 1).is_empty());
    }
}
