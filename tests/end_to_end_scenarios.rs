use std::sync::Arc;

use ad_core::catalog::{default_catalog, CatalogIndex};
use ad_core::selection::{AdSelector, NoopObserver, SeededRandom, SelectionError};
use ad_core::service::{AdService, ServiceError};
use ad_core::types::AdRequest;

fn service() -> AdService<SeededRandom> {
    AdService::with_selector(AdSelector::with_random(
        Arc::new(default_catalog()),
        SeededRandom::new(2024),
    ))
}

#[test]
fn scenario_a_binoculars() {
    let response = service()
        .get_ads(&AdRequest::new(["binoculars"]), &NoopObserver)
        .unwrap();

    assert_eq!(response.ads.len(), 1);
    assert_eq!(response.ads[0].redirect_url, "/product/2ZYFJ3GM2N");
    assert_eq!(response.ads[0].text, "Roof Binoculars for sale. 50% off.");
}

#[test]
fn scenario_b_accessories() {
    let response = service()
        .get_ads(&AdRequest::new(["accessories"]), &NoopObserver)
        .unwrap();

    let texts: Vec<&str> = response.ads.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Solar System Color Imager for sale. 30% off.",
            "Solar Filter for sale. Buy two, get third one for free",
            "Lens Cleaning Kit for sale. Buy one, get second one for free",
        ]
    );
}

#[test]
fn scenario_c_no_context() {
    let service = service();
    let catalog = default_catalog();

    for _ in 0..50 {
        let response = service.get_ads(&AdRequest::default(), &NoopObserver).unwrap();
        assert_eq!(response.ads.len(), 2);
        for ad in &response.ads {
            assert!(catalog.all_ads().contains(ad));
        }
    }
}

#[test]
fn scenario_d_unknown_category() {
    let service = service();
    for _ in 0..50 {
        let response = service
            .get_ads(&AdRequest::new(["not-a-real-category"]), &NoopObserver)
            .unwrap();
        assert_eq!(response.ads.len(), 2);
    }
}

#[test]
fn mixed_known_and_unknown_keys_only_return_matches() {
    let response = service()
        .get_ads(&AdRequest::new(["bogus", "assembly", "bogus"]), &NoopObserver)
        .unwrap();
    assert_eq!(response.ads.len(), 1);
    assert_eq!(response.ads[0].redirect_url, "/product/9SIQT8TOJO");
}

#[test]
fn empty_catalog_surfaces_service_failure() {
    let service = AdService::new(Arc::new(CatalogIndex::builder().build()));

    for request in [AdRequest::default(), AdRequest::new(["binoculars"])] {
        let err = service.get_ads(&request, &NoopObserver).unwrap_err();
        assert_eq!(err, ServiceError::Failure(SelectionError::EmptyCatalog));
        assert!(err.to_string().starts_with("service failure"));
    }
}
