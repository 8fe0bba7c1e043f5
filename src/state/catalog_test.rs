use super::*;

// =============================================================
// Catalog contents
// =============================================================

#[test]
fn catalog_has_four_products() {
    assert_eq!(PRODUCTS.len(), 4);
}

#[test]
fn find_known_product() {
    let product = find("hoodie-001").unwrap();
    assert_eq!(product.name, "Jacferdi Hoodie");
    assert_eq!(product.price, 1800);
}

#[test]
fn find_unknown_product_is_none() {
    assert!(find("socks-999").is_none());
}

// =============================================================
// ProductFilter
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    assert_eq!(search(&ProductFilter::default()).len(), PRODUCTS.len());
}

#[test]
fn category_filter_is_case_insensitive_substring() {
    let filter = ProductFilter {
        category: Some("SHIRT".to_owned()),
        ..ProductFilter::default()
    };
    let results = search(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "tshirt-001");
}

#[test]
fn name_filter_is_case_insensitive_substring() {
    let filter = ProductFilter {
        name: Some("jeans".to_owned()),
        ..ProductFilter::default()
    };
    let results = search(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "jeans-001");
}

#[test]
fn max_price_is_inclusive() {
    let filter = ProductFilter {
        max_price: Some(1800),
        ..ProductFilter::default()
    };
    let ids = search(&filter).iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids, vec!["hoodie-001", "tshirt-001"]);
}

#[test]
fn color_filter_is_exact_match() {
    let filter = ProductFilter {
        color: Some("Black".to_owned()),
        ..ProductFilter::default()
    };
    let results = search(&filter);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "hoodie-001");

    let filter = ProductFilter {
        color: Some("bla".to_owned()),
        ..ProductFilter::default()
    };
    assert!(search(&filter).is_empty());
}

#[test]
fn filters_combine() {
    let filter = ProductFilter {
        category: Some("hoodie".to_owned()),
        max_price: Some(1000),
        ..ProductFilter::default()
    };
    assert!(search(&filter).is_empty());
}
