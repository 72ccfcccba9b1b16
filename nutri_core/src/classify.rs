//! Keyword tables and name-based classification.
//!
//! Diet tags and meal slots are both derived by plain case-insensitive
//! substring containment against fixed keyword lists (English plus
//! transliterated Hindi). There is no stemming and no word-boundary check,
//! so "ham" also matches "Shami" and "egg" matches "Eggplant".

use crate::MealCategory;

/// Names containing any of these are not vegetarian
pub const NON_VEG_KEYWORDS: &[&str] = &[
    "chicken", "mutton", "lamb", "beef", "pork", "fish", "prawn", "shrimp",
    "crab", "lobster", "meat", "keema", "kebab", "tikka", "tandoori",
    "salami", "bacon", "ham", "sausage", "egg", "ande", "omelette",
    "murgh", "gosht", "machli", "jhinga",
];

/// Names containing any of these are not vegan
pub const NON_VEGAN_KEYWORDS: &[&str] = &[
    "milk", "doodh", "curd", "dahi", "yogurt", "cheese", "paneer",
    "butter", "makhan", "ghee", "cream", "malai", "lassi", "kheer",
    "ice cream", "milkshake", "egg", "ande", "honey", "shahad",
    "chicken", "mutton", "fish", "meat", "prawn",
];

const BREAKFAST_KEYWORDS: &[&str] = &[
    "porridge", "daliya", "paratha", "poha", "upma", "idli", "dosa",
    "toast", "sandwich", "cereal", "cornflakes", "oatmeal", "egg",
    "omelette", "pancake", "cheela", "uttapam",
];

const LUNCH_KEYWORDS: &[&str] = &[
    "rice", "chawal", "roti", "chapati", "dal", "curry", "sabzi",
    "biryani", "pulao", "khichdi", "thali", "rajma", "chole",
];

const DINNER_KEYWORDS: &[&str] = &[
    "rice", "roti", "chapati", "dal", "curry", "sabzi", "khichdi",
    "soup", "salad",
];

const SNACK_KEYWORDS: &[&str] = &[
    "samosa", "pakora", "bhaji", "chaat", "namkeen", "biscuit",
    "cookie", "cake", "ladoo", "barfi", "halwa", "nuts", "chips",
];

const BEVERAGE_KEYWORDS: &[&str] = &[
    "tea", "chai", "coffee", "juice", "lassi", "milkshake", "sharbat",
    "drink", "smoothie", "water", "lemonade", "nimbu", "cooler",
];

/// Keyword list for a meal slot (slots overlap, e.g. "rice" is lunch and dinner)
pub fn category_keywords(category: MealCategory) -> &'static [&'static str] {
    match category {
        MealCategory::Breakfast => BREAKFAST_KEYWORDS,
        MealCategory::Lunch => LUNCH_KEYWORDS,
        MealCategory::Dinner => DINNER_KEYWORDS,
        MealCategory::Snack => SNACK_KEYWORDS,
        MealCategory::Beverage => BEVERAGE_KEYWORDS,
    }
}

/// True if the lower-cased `name` contains any keyword
pub fn contains_any(name: &str, keywords: &[&str]) -> bool {
    let name_lower = name.to_lowercase();
    keywords.iter().any(|keyword| name_lower.contains(keyword))
}

/// False when the name mentions meat, fish or egg
pub fn classify_vegetarian(name: &str) -> bool {
    !contains_any(name, NON_VEG_KEYWORDS)
}

/// False when the name mentions any animal product
pub fn classify_vegan(name: &str) -> bool {
    !contains_any(name, NON_VEGAN_KEYWORDS)
}
