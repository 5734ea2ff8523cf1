use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Highest `strIngredientN` / `strMeasureN` index the service returns.
pub const MAX_INGREDIENTS: usize = 20;

/// Response envelope shared by the search and lookup endpoints.
///
/// The service answers `{"meals": null}` when nothing matches.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct RawSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Everything else, including the indexed ingredient and measure pairs
    #[serde(flatten)]
    pub rest: HashMap<String, Value>,
}

/// Minimal record shown as a card in the results grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub measure: Option<String>,
    pub name: String,
}

/// Full record shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub video_url: Option<String>,
    pub source_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn trimmed(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl From<RawSummary> for RecipeSummary {
    fn from(raw: RawSummary) -> Self {
        RecipeSummary {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            thumbnail_url: raw.thumbnail.unwrap_or_default(),
        }
    }
}

impl RawDetail {
    /// Collects `strIngredientN` / `strMeasureN` pairs for N = 1..=20.
    ///
    /// Stops at the first index without an ingredient name.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        let mut ingredients = Vec::new();
        for i in 1..=MAX_INGREDIENTS {
            let Some(name) = trimmed(self.rest.get(&format!("strIngredient{i}"))) else {
                break;
            };
            let measure = trimmed(self.rest.get(&format!("strMeasure{i}")));
            ingredients.push(Ingredient { measure, name });
        }
        ingredients
    }
}

impl From<RawDetail> for RecipeDetail {
    fn from(raw: RawDetail) -> Self {
        let ingredients = raw.ingredients();
        RecipeDetail {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            thumbnail_url: raw.thumbnail.unwrap_or_default(),
            category: present(raw.category),
            area: present(raw.area),
            instructions: present(raw.instructions),
            video_url: present(raw.youtube),
            source_url: present(raw.source),
            ingredients,
        }
    }
}

impl Ingredient {
    /// `"<measure> <name>"`, or just the name when there is no measure.
    pub fn display(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_from(json: &str) -> RecipeDetail {
        let raw: RawDetail = serde_json::from_str(json).unwrap();
        raw.into()
    }

    #[test]
    fn test_null_meals_is_empty() {
        let envelope: MealsEnvelope<RawSummary> = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.into_meals().is_empty());
    }

    #[test]
    fn test_missing_meals_key_is_empty() {
        let envelope: MealsEnvelope<RawDetail> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_meals().is_empty());
    }

    #[test]
    fn test_ingredients_stop_at_first_gap() {
        let detail = detail_from(
            r#"{
                "idMeal": "1",
                "strMeal": "Soup",
                "strIngredient1": "Water",
                "strMeasure1": "1 l",
                "strIngredient2": "Salt",
                "strMeasure2": "pinch",
                "strIngredient3": "Leek",
                "strMeasure3": "2",
                "strIngredient4": "",
                "strMeasure4": "",
                "strIngredient5": "Pepper",
                "strMeasure5": "1 tsp"
            }"#,
        );
        let names: Vec<_> = detail.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Salt", "Leek"]);
    }

    #[test]
    fn test_null_ingredient_ends_list() {
        let detail = detail_from(
            r#"{"idMeal": "1", "strIngredient1": "Egg", "strIngredient2": null, "strIngredient3": "Milk"}"#,
        );
        assert_eq!(detail.ingredients.len(), 1);
    }

    #[test]
    fn test_missing_measure_renders_bare_name() {
        let detail = detail_from(
            r#"{"idMeal": "1", "strIngredient1": " Garlic ", "strMeasure1": " "}"#,
        );
        assert_eq!(detail.ingredients[0].measure, None);
        assert_eq!(detail.ingredients[0].display(), "Garlic");
    }

    #[test]
    fn test_measure_is_trimmed_and_prefixed() {
        let detail = detail_from(
            r#"{"idMeal": "1", "strIngredient1": "Flour", "strMeasure1": " 200g "}"#,
        );
        assert_eq!(detail.ingredients[0].display(), "200g Flour");
    }

    #[test]
    fn test_empty_optional_fields_are_none() {
        let detail = detail_from(
            r#"{"idMeal": "7", "strMeal": "Toast", "strCategory": "", "strArea": null, "strYoutube": "", "strSource": null}"#,
        );
        assert_eq!(detail.category, None);
        assert_eq!(detail.area, None);
        assert_eq!(detail.video_url, None);
        assert_eq!(detail.source_url, None);
        assert_eq!(detail.instructions, None);
        assert!(detail.ingredients.is_empty());
    }

    #[test]
    fn test_twenty_ingredients_are_all_kept() {
        let mut fields = vec![r#""idMeal": "9""#.to_string()];
        for i in 1..=MAX_INGREDIENTS {
            fields.push(format!(r#""strIngredient{i}": "item{i}""#));
        }
        let detail = detail_from(&format!("{{{}}}", fields.join(",")));
        assert_eq!(detail.ingredients.len(), MAX_INGREDIENTS);
        assert_eq!(detail.ingredients[19].name, "item20");
    }
}
