use crate::domain::entities::{Catalog, Category, Ingredient};

// Emojis offered by the admin page when adding an ingredient.
pub const AVAILABLE_EMOJIS: [&str; 44] = [
    "🍅", "🧀", "🥛", "🔥", "🌿", "🐐", "🍖", "🐷", "🥓", "🌭", "🍗", "🍄",
    "🧅", "🫑", "🫒", "🥬", "🌶️", "🍍", "🥗", "🧄", "🌱", "✨", "🥚", "🐟",
    "🦐", "🥩", "🌽", "🥒", "🍆", "🥦", "🍋", "🥜", "🍯", "🫛", "🥕", "🍇",
    "🥑", "🌰", "🧈", "🥫", "🍳", "❤️", "⭐", "🔶",
];

// Catalog written on first start when no ingredients file exists.
pub fn default_catalog() -> Catalog {
    let entry = |id, name_en, name_sk, emoji| Ingredient::new(id, name_en, name_sk, emoji);

    Catalog::from_entries([
        (
            Category::Bases,
            vec![
                entry("tomato", "Tomato Sauce", "Paradajkový základ", "🍅"),
                entry("white", "White/Cream Sauce", "Smotanový základ", "🥛"),
                entry("bbq", "BBQ Sauce", "BBQ omáčka", "🔥"),
                entry("pesto", "Pesto", "Pesto", "🌿"),
            ],
        ),
        (
            Category::Cheeses,
            vec![
                entry("mozzarella", "Mozzarella", "Mozzarella", "🧀"),
                entry("parmesan", "Parmesan", "Parmezán", "🧀"),
                entry("gorgonzola", "Gorgonzola", "Gorgonzola", "🧀"),
                entry("goat", "Goat Cheese", "Kozí syr", "🐐"),
            ],
        ),
        (
            Category::Meats,
            vec![
                entry("pepperoni", "Pepperoni", "Pepperoni", "🍖"),
                entry("ham", "Ham", "Šunka", "🐷"),
                entry("bacon", "Bacon", "Slanina", "🥓"),
                entry("sausage", "Italian Sausage", "Talianská klobása", "🌭"),
                entry("chicken", "Chicken", "Kura", "🍗"),
            ],
        ),
        (
            Category::Veggies,
            vec![
                entry("mushrooms", "Mushrooms", "Huby", "🍄"),
                entry("onions", "Onions", "Cibuľa", "🧅"),
                entry("peppers", "Bell Peppers", "Papriky", "🫑"),
                entry("olives", "Olives", "Olivy", "🫒"),
                entry("tomatoes", "Fresh Tomatoes", "Čerstvé paradajky", "🍅"),
                entry("spinach", "Spinach", "Špenát", "🥬"),
                entry("jalapenos", "Jalapeños", "Jalapeños", "🌶️"),
                entry("pineapple", "Pineapple", "Ananás", "🍍"),
                entry("arugula", "Arugula", "Rukola", "🥗"),
            ],
        ),
        (
            Category::Extras,
            vec![
                entry("garlic", "Extra Garlic", "Extra cesnak", "🧄"),
                entry("basil", "Fresh Basil", "Čerstvá bazalka", "🌿"),
                entry("oregano", "Oregano", "Oregano", "🌱"),
                entry("chili", "Chili Flakes", "Chilli vločky", "🌶️"),
                entry("truffle", "Truffle Oil", "Hľuzovkový olej", "✨"),
            ],
        ),
    ])
}
