use crate::types::Ad;

use super::index::{CatalogBuilder, CatalogIndex};

/// The fixed seed catalog served in production.
pub fn default_catalog() -> CatalogIndex {
    seed_builder().build()
}

fn seed_builder() -> CatalogBuilder {
    let binoculars = Ad::new("/product/2ZYFJ3GM2N", "Roof Binoculars for sale. 50% off.");
    let explorer_telescope = Ad::new(
        "/product/66VCHSJNUP",
        "Starsense Explorer Refractor Telescope for sale. 20% off.",
    );
    let color_imager = Ad::new(
        "/product/0PUK6V6EV0",
        "Solar System Color Imager for sale. 30% off.",
    );
    let optical_tube = Ad::new("/product/9SIQT8TOJO", "Optical Tube Assembly for sale. 10% off.");
    let travel_telescope = Ad::new(
        "/product/1YMWWN1N4O",
        "Eclipsmart Travel Refractor Telescope for sale. Buy one, get second kit for free",
    );
    let solar_filter = Ad::new(
        "/product/6E92ZMYYFZ",
        "Solar Filter for sale. Buy two, get third one for free",
    );
    let cleaning_kit = Ad::new(
        "/product/L9ECAV7KIM",
        "Lens Cleaning Kit for sale. Buy one, get second one for free",
    );

    CatalogBuilder::new()
        .add("binoculars", binoculars)
        .add("telescopes", explorer_telescope)
        .add_all("accessories", [color_imager, solar_filter, cleaning_kit])
        .add("assembly", optical_tube)
        .add("travel", travel_telescope)
}
