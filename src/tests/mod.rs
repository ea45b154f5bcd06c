mod region_code;
mod composed_tests;
mod codec_tests;

use std::sync::{Arc, Once};

use crate::{CompositeCodec, CountryCodeEntry, InMemoryCatalog};

use region_code::RegionCode;

static ONCE: Once = Once::new();

pub(crate) fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}

/// NANPA regions share 1, Russia and Kazakhstan share 7 next to a generic
/// +7 entry, 800 has no region at all, Germany is switched off.
pub(crate) fn test_catalog() -> Arc<InMemoryCatalog> {
    init_logger();
    let entries = vec![
        CountryCodeEntry::regional("1", RegionCode::us(), "United States").unwrap(),
        CountryCodeEntry::regional("1", RegionCode::ca(), "Canada").unwrap(),
        CountryCodeEntry::generic("7").unwrap(),
        CountryCodeEntry::regional("7", RegionCode::ru(), "Russia").unwrap(),
        CountryCodeEntry::regional("7", RegionCode::kz(), "Kazakhstan").unwrap(),
        CountryCodeEntry::regional("44", RegionCode::gb(), "United Kingdom").unwrap(),
        CountryCodeEntry::generic("800").unwrap(),
        CountryCodeEntry::regional("49", RegionCode::de(), "Germany")
            .unwrap()
            .with_active(false),
    ];
    Arc::new(InMemoryCatalog::from_entries(entries).expect("fixture has no duplicate regions"))
}

pub(crate) fn test_codec(catalog: Arc<InMemoryCatalog>) -> CompositeCodec {
    CompositeCodec::new(catalog)
}
