pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn kz() -> &'static str {
        "KZ"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
