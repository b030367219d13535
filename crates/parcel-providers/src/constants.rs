//! Carrier keys and display names

/// Key of the UPS carrier
pub const UPS_KEY: &str = "UPS";

/// Display name of the UPS carrier
pub const UPS_NAME: &str = "United Parcel Service";

/// Key of the FedEx carrier
pub const FEDEX_KEY: &str = "FedEx";

/// Display name of the FedEx carrier
pub const FEDEX_NAME: &str = "Federal Express";

/// Key of the USPS carrier
pub const USPS_KEY: &str = "USPS";

/// Display name of the USPS carrier
pub const USPS_NAME: &str = "United States Postal Service";
