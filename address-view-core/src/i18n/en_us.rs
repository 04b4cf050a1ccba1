//! 英文翻译 (en-US)

use super::keys::{AddressTexts, ErrorTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    address: AddressTexts {
        address_details: "Address Details",
        no_profile: "No primary name set",
        view_profile: "View Profile",
    },
    errors: ErrorTexts {
        names: "There was an error loading names for this address",
    },
};
