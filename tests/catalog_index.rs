use ad_core::catalog::{default_catalog, CatalogIndex};
use ad_core::types::{Ad, Category};

fn urls(ads: &[Ad]) -> Vec<&str> {
    ads.iter().map(|ad| ad.redirect_url.as_str()).collect()
}

#[test]
fn known_category_returns_registered_ads_in_order() {
    let catalog = default_catalog();

    let accessories = catalog.lookup(&Category::from("accessories"));
    assert_eq!(
        urls(accessories),
        vec!["/product/0PUK6V6EV0", "/product/6E92ZMYYFZ", "/product/L9ECAV7KIM"]
    );
    assert_eq!(accessories[0].text, "Solar System Color Imager for sale. 30% off.");

    for key in ["binoculars", "telescopes", "assembly", "travel"] {
        assert_eq!(catalog.lookup(&Category::from(key)).len(), 1, "{key} has one ad");
    }
}

#[test]
fn lookup_is_stable_across_calls() {
    let catalog = default_catalog();
    let key = Category::from("telescopes");

    let first = catalog.lookup(&key).to_vec();
    for _ in 0..10 {
        assert_eq!(catalog.lookup(&key), first.as_slice());
    }
}

#[test]
fn unknown_category_returns_empty() {
    let catalog = default_catalog();
    assert!(catalog.lookup(&Category::from("not-a-real-category")).is_empty());
    assert!(catalog.lookup(&Category::from("")).is_empty());
    // Keys are case sensitive.
    assert!(catalog.lookup(&Category::from("Binoculars")).is_empty());
}

#[test]
fn all_ads_follows_build_order() {
    let catalog = default_catalog();
    assert_eq!(catalog.len(), 7);
    assert_eq!(
        urls(catalog.all_ads()),
        vec![
            "/product/2ZYFJ3GM2N",
            "/product/66VCHSJNUP",
            "/product/0PUK6V6EV0",
            "/product/6E92ZMYYFZ",
            "/product/L9ECAV7KIM",
            "/product/9SIQT8TOJO",
            "/product/1YMWWN1N4O",
        ]
    );

    let keys: Vec<&str> = catalog.categories().iter().map(Category::as_str).collect();
    assert_eq!(keys, vec!["binoculars", "telescopes", "accessories", "assembly", "travel"]);
}

#[test]
fn duplicate_entries_accumulate() {
    let ad = Ad::new("/product/X", "same ad");
    let catalog = CatalogIndex::builder()
        .add("a", ad.clone())
        .add("a", ad.clone())
        .add("b", ad.clone())
        .build();

    assert_eq!(catalog.lookup(&Category::from("a")), &[ad.clone(), ad.clone()]);
    assert_eq!(catalog.all_ads().len(), 3);
    assert!(catalog.all_ads().iter().all(|a| a == &ad));
}

#[test]
fn empty_build_is_empty() {
    let catalog = CatalogIndex::builder().build();
    assert!(catalog.is_empty());
    assert!(catalog.all_ads().is_empty());
    assert!(catalog.categories().is_empty());
    assert!(catalog.lookup(&Category::from("binoculars")).is_empty());
}

#[test]
fn version_tracks_content() {
    let seed_a = default_catalog();
    let seed_b = default_catalog();
    assert_eq!(seed_a.version(), seed_b.version());
    assert_eq!(seed_a.version().len(), "sha256:".len() + 64);

    let changed = CatalogIndex::builder()
        .add("binoculars", Ad::new("/product/2ZYFJ3GM2N", "Roof Binoculars for sale. 60% off."))
        .build();
    assert_ne!(seed_a.version(), changed.version());

    // Same ad under a different category is a different catalog.
    let moved = CatalogIndex::builder().add("x", Ad::new("/1", "t")).build();
    let other = CatalogIndex::builder().add("y", Ad::new("/1", "t")).build();
    assert_ne!(moved.version(), other.version());
}
