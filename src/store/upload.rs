//! Validation of the "add recipe" form.
//!
//! The form arrives as ordered `(name, value)` pairs. Ingredient fields are
//! named `ingredient-1`, `ingredient-2`, ... and hold `quantity,unit,description`.

use crate::recipe::{Ingredient, NewRecipePayload};
use crate::store::StoreError;

const INGREDIENT_PREFIX: &str = "ingredient";

fn field<'a>(form: &'a [(String, String)], name: &str) -> &'a str {
    form.iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// Parse one `quantity,unit,description` triple.
///
/// An empty quantity means "no quantity", never zero.
pub fn parse_ingredient(field_name: &str, value: &str) -> Result<Ingredient, StoreError> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();

    let [quantity, unit, description] = parts.as_slice() else {
        return Err(StoreError::validation(
            field_name,
            format!(
                "Wrong ingredient format in '{}'! Please use the format 'quantity,unit,description'.",
                field_name
            ),
        ));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        match quantity.parse::<f64>() {
            Ok(q) if q.is_finite() => Some(q),
            _ => {
                return Err(StoreError::validation(
                    field_name,
                    format!("Invalid quantity '{}' in '{}'", quantity, field_name),
                ))
            }
        }
    };

    Ok(Ingredient::new(quantity, unit, description))
}

/// Every non-empty `ingredient*` field, in form order.
pub fn parse_ingredients(form: &[(String, String)]) -> Result<Vec<Ingredient>, StoreError> {
    form.iter()
        .filter(|(key, value)| key.starts_with(INGREDIENT_PREFIX) && !value.is_empty())
        .map(|(key, value)| parse_ingredient(key, value))
        .collect()
}

fn parse_count(form: &[(String, String)], name: &str) -> Result<u32, StoreError> {
    let raw = field(form, name).trim();
    raw.parse::<u32>().map_err(|_| {
        StoreError::validation(name, format!("'{}' must be a whole number, got '{}'", name, raw))
    })
}

/// Build the outbound upload body from raw form fields.
pub fn build_payload(form: &[(String, String)]) -> Result<NewRecipePayload, StoreError> {
    let ingredients = parse_ingredients(form)?;

    let cooking_time = parse_count(form, "cookingTime")?;
    let servings = parse_count(form, "servings")?;
    if servings == 0 {
        return Err(StoreError::validation(
            "servings",
            "'servings' must be greater than zero",
        ));
    }

    Ok(NewRecipePayload {
        title: field(form, "title").to_string(),
        source_url: field(form, "sourceUrl").to_string(),
        image_url: field(form, "image").to_string(),
        publisher: field(form, "publisher").to_string(),
        cooking_time,
        servings,
        ingredients,
    })
}
