// Menu catalog: the static JSON document, lookups, and the view model the
// DOM renderer walks.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("menu data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu request failed: {0}")]
    Fetch(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub menu_categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category_name")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nutritional_info: String,
}

impl MenuItem {
    pub fn nutrition(&self) -> Vec<NutritionFact> {
        parse_nutrition(&self.nutritional_info)
    }

    /// Empty image references count as no image.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }
}

impl MenuCatalog {
    pub fn from_json(text: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn categories(&self) -> &[Category] {
        &self.menu_categories
    }

    pub fn item_count(&self) -> usize {
        self.menu_categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn find_item(&self, item_id: &str, category_name: &str) -> Option<&MenuItem> {
        self.menu_categories
            .iter()
            .find(|c| c.name == category_name)?
            .items
            .iter()
            .find(|i| i.id == item_id)
    }

    /// Items whose nutrition string has entries without a `": "` separator.
    pub fn malformed_nutrition(&self) -> Vec<&MenuItem> {
        self.menu_categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.nutrition().iter().any(|f| f.value.is_none()))
            .collect()
    }

    pub fn view(&self) -> MenuView {
        MenuView {
            sections: self
                .menu_categories
                .iter()
                .map(|c| SectionView {
                    anchor: category_anchor(&c.name),
                    title: c.name.clone(),
                    cards: c
                        .items
                        .iter()
                        .map(|i| CardView {
                            item_id: i.id.clone(),
                            category_name: c.name.clone(),
                            name: i.name.clone(),
                            image: i.image().map(str::to_owned),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// `"Hot Drinks"` -> `"category-hot-drinks"`
pub fn category_anchor(name: &str) -> String {
    format!("category-{}", name.to_lowercase().replace(' ', "-"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct NutritionFact {
    pub key: String,
    pub value: Option<String>,
}

/// Parse `"Key: Value, Key: Value"`.
///
/// Entries without `": "` keep their text as the key and have no value.
pub fn parse_nutrition(info: &str) -> Vec<NutritionFact> {
    if info.trim().is_empty() {
        return Vec::new();
    }
    info.split(", ")
        .map(|part| match part.split_once(": ") {
            Some((k, v)) => NutritionFact {
                key: k.to_string(),
                value: Some(v.to_string()),
            },
            None => NutritionFact {
                key: part.to_string(),
                value: None,
            },
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuView {
    pub sections: Vec<SectionView>,
}

impl MenuView {
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub anchor: String,
    pub title: String,
    pub cards: Vec<CardView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub item_id: String,
    pub category_name: String,
    pub name: String,
    pub image: Option<String>,
}

impl CardView {
    pub fn inner_html(&self) -> String {
        let name = escape_html(&self.name);
        match &self.image {
            Some(src) => format!(
                "<div class=\"h-48 bg-tan\"><img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\"></div>\
                 <div class=\"p-4 flex-grow flex flex-col justify-between\"><h3 class=\"text-xl font-semibold text-coffee-dark\">{}</h3></div>",
                escape_html(src),
                name,
                name
            ),
            None => format!(
                "<div class=\"p-4 flex-grow flex flex-col justify-center text-center h-48\"><h3 class=\"text-xl font-semibold text-coffee-dark\">{}</h3></div>",
                name
            ),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Which item, if any, the detail modal is showing.
#[derive(Clone, Debug, Default)]
pub struct ItemDetailModal {
    current: Option<MenuItem>,
}

impl ItemDetailModal {
    /// Look the item up and hold it. Unknown ids leave the modal unchanged.
    pub fn open<'a>(
        &mut self,
        catalog: &'a MenuCatalog,
        item_id: &str,
        category_name: &str,
    ) -> Option<&'a MenuItem> {
        let item = catalog.find_item(item_id, category_name)?;
        self.current = Some(item.clone());
        Some(item)
    }

    pub fn close(&mut self) -> Option<MenuItem> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&MenuItem> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
