#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One entry in the static product catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Integer amount in `currency` units.
    pub price: u32,
    pub currency: &'static str,
    pub category: &'static str,
    pub color: &'static str,
    pub sizes: &'static [&'static str],
}

/// The Jacferdi Studios catalog.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: "hoodie-001",
        name: "Jacferdi Hoodie",
        description: "Unisex minimalist hoodie by Jacferdi Studios",
        price: 1800,
        currency: "INR",
        category: "hoodie",
        color: "black",
        sizes: &["S", "M", "L", "XL"],
    },
    Product {
        id: "tshirt-001",
        name: "Jacferdi T-Shirt",
        description: "Unisex classic t-shirt by Jacferdi Studios",
        price: 1200,
        currency: "INR",
        category: "tshirt",
        color: "white",
        sizes: &["S", "M", "L", "XL"],
    },
    Product {
        id: "jeans-001",
        name: "Straight Fit Jeans",
        description: "Slim fit jeans by Jacferdi Studios",
        price: 2200,
        currency: "INR",
        category: "jeans",
        color: "indigo",
        sizes: &["S", "M", "L", "XL"],
    },
    Product {
        id: "shoes-001",
        name: "Converse Sneakers",
        description: "Casual sneakers by Jacferdi Studios",
        price: 3000,
        currency: "INR",
        category: "shoes",
        color: "gray",
        sizes: &["S", "M", "L"],
    },
];

/// Look up a product by id.
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Filter criteria for catalog searches. All fields are optional; an empty
/// filter matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the category.
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name.
    pub name: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<u32>,
    /// Case-insensitive exact match on the color.
    pub color: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product
                .category
                .to_lowercase()
                .contains(&category.to_lowercase())
            {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if !product.color.eq_ignore_ascii_case(color) {
                return false;
            }
        }
        true
    }
}

/// Products matching the filter, in catalog order.
pub fn search(filter: &ProductFilter) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| filter.matches(p)).collect()
}
