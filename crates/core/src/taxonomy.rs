//! Static reference data: Tunisian administrative taxonomy, pet species and
//! breeds, and the language list offered by the professional profile forms.
//!
//! All lists are closed. Location fields in the wizard are only valid when
//! they name an entry of these tables.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Governorates and delegations
// ---------------------------------------------------------------------------

/// Governorate used whenever a location cannot be determined.
pub const DEFAULT_GOVERNORATE: &str = "Tunis";

/// The 24 governorates, in display order.
pub const GOVERNORATES: &[&str] = &[
    "Ariana",
    "Béja",
    "Ben Arous",
    "Bizerte",
    "Gabès",
    "Gafsa",
    "Jendouba",
    "Kairouan",
    "Kasserine",
    "Kébili",
    "Le Kef",
    "Mahdia",
    "Manouba",
    "Médenine",
    "Monastir",
    "Nabeul",
    "Sfax",
    "Sidi Bouzid",
    "Siliana",
    "Sousse",
    "Tataouine",
    "Tozeur",
    "Tunis",
    "Zaghouan",
];

const DELEGATIONS_BY_GOVERNORATE: &[(&str, &[&str])] = &[
    (
        "Ariana",
        &[
            "Ariana Ville",
            "Ettadhamen",
            "Kalâat el-Andalous",
            "La Soukra",
            "Mnihla",
            "Raoued",
            "Sidi Thabet",
        ],
    ),
    (
        "Béja",
        &[
            "Amdoun",
            "Béja Nord",
            "Béja Sud",
            "Goubellat",
            "Medjez El Bab",
            "Nefza",
            "Téboursouk",
            "Testour",
            "Thibar",
        ],
    ),
    (
        "Ben Arous",
        &[
            "Ben Arous",
            "Bou Mhel el-Bassatine",
            "El Mourouj",
            "Ezzahra",
            "Fouchana",
            "Hammam Chott",
            "Hammam Lif",
            "Medina Jedida",
            "Mégrine",
            "Mohamedia",
            "Mornag",
            "Radès",
        ],
    ),
    (
        "Bizerte",
        &[
            "Bizerte Nord",
            "Bizerte Sud",
            "Djoumine",
            "El Alia",
            "Ghar El Melh",
            "Ghezala",
            "Mateur",
            "Menzel Bourguiba",
            "Menzel Jemil",
            "Ras Jebel",
            "Sejnane",
            "Tinja",
            "Utique",
            "Zarzouna",
        ],
    ),
    (
        "Gabès",
        &[
            "El Hamma",
            "Gabès Médina",
            "Gabès Ouest",
            "Gabès Sud",
            "Ghannouch",
            "Mareth",
            "Matmata",
            "Menzel El Habib",
            "Métouia",
            "Nouvelle Matmata",
        ],
    ),
    (
        "Gafsa",
        &[
            "Belkhir",
            "El Guettar",
            "El Ksar",
            "Gafsa Nord",
            "Gafsa Sud",
            "Mdhilla",
            "Métlaoui",
            "Moularès",
            "Redeyef",
            "Sidi Aïch",
            "Sned",
        ],
    ),
    (
        "Jendouba",
        &[
            "Aïn Draham",
            "Balta-Bou Aouane",
            "Bou Salem",
            "Fernana",
            "Ghardimaou",
            "Jendouba",
            "Jendouba Nord",
            "Oued Meliz",
            "Tabarka",
        ],
    ),
    (
        "Kairouan",
        &[
            "Bou Hajla",
            "Chebika",
            "Echrarda",
            "El Alâa",
            "Haffouz",
            "Hajeb El Ayoun",
            "Kairouan Nord",
            "Kairouan Sud",
            "Nasrallah",
            "Oueslatia",
            "Sbikha",
        ],
    ),
    (
        "Kasserine",
        &[
            "El Ayoun",
            "Ezzouhour",
            "Fériana",
            "Foussana",
            "Haïdra",
            "Hassi El Ferid",
            "Jedelienne",
            "Kasserine Nord",
            "Kasserine Sud",
            "Majel Bel Abbès",
            "Sbeïtla",
            "Sbiba",
            "Thala",
        ],
    ),
    (
        "Kébili",
        &[
            "Douz Nord",
            "Douz Sud",
            "Faouar",
            "Kébili Nord",
            "Kébili Sud",
            "Souk Lahad",
        ],
    ),
    (
        "Le Kef",
        &[
            "Dahmani",
            "Djerissa",
            "El Ksour",
            "Es-Sers",
            "Kalaat Khasba",
            "Kalaat Senan",
            "Kef Est",
            "Kef Ouest",
            "Nebeur",
            "Sakiet Sidi Youssef",
            "Tajerouine",
        ],
    ),
    (
        "Mahdia",
        &[
            "Bou Merdes",
            "Chebba",
            "Chorbane",
            "El Djem",
            "Essouassi",
            "Hebira",
            "Ksour Essef",
            "Mahdia",
            "Melloulèche",
            "Ouled Chamekh",
            "Sidi Alouane",
        ],
    ),
    (
        "Manouba",
        &[
            "Borj El Amri",
            "Djedeida",
            "Douar Hicher",
            "El Battan",
            "Manouba",
            "Mornaguia",
            "Oued Ellil",
            "Tebourba",
        ],
    ),
    (
        "Médenine",
        &[
            "Ben Gardane",
            "Beni Khedache",
            "Djerba Ajim",
            "Djerba Houmt Souk",
            "Djerba Midoun",
            "Médenine Nord",
            "Médenine Sud",
            "Sidi Makhlouf",
            "Zarzis",
        ],
    ),
    (
        "Monastir",
        &[
            "Bekalta",
            "Bembla",
            "Beni Hassen",
            "Jemmal",
            "Ksar Hellal",
            "Ksibet el-Médiouni",
            "Moknine",
            "Monastir",
            "Ouerdanine",
            "Sahline",
            "Sayada-Lamta-Bou Hajar",
            "Téboulba",
            "Zéramdine",
        ],
    ),
    (
        "Nabeul",
        &[
            "Béni Khalled",
            "Béni Khiar",
            "Bou Argoub",
            "Dar Chaâbane El Fehri",
            "El Haouaria",
            "El Mida",
            "Grombalia",
            "Hammam Ghezèze",
            "Hammamet",
            "Kélibia",
            "Korba",
            "Menzel Bouzelfa",
            "Menzel Temime",
            "Nabeul",
            "Soliman",
            "Takelsa",
        ],
    ),
    (
        "Sfax",
        &[
            "Agareb",
            "Bir Ali Ben Khalifa",
            "El Amra",
            "El Hencha",
            "Graïba",
            "Jebiniana",
            "Kerkennah",
            "Mahrès",
            "Menzel Chaker",
            "Sakiet Eddaïer",
            "Sakiet Ezzit",
            "Sfax Ouest",
            "Sfax Sud",
            "Sfax Ville",
            "Skhira",
            "Thyna",
        ],
    ),
    (
        "Sidi Bouzid",
        &[
            "Bir El Hafey",
            "Cebbala Ouled Asker",
            "Jilma",
            "Meknassy",
            "Menzel Bouzaiane",
            "Mezzouna",
            "Ouled Haffouz",
            "Regueb",
            "Sidi Ali Ben Aoun",
            "Sidi Bouzid Est",
            "Sidi Bouzid Ouest",
            "Souk Jedid",
        ],
    ),
    (
        "Siliana",
        &[
            "Bargou",
            "Bou Arada",
            "El Aroussa",
            "El Krib",
            "Gaâfour",
            "Kesra",
            "Makthar",
            "Rouhia",
            "Sidi Bou Rouis",
            "Siliana Nord",
            "Siliana Sud",
        ],
    ),
    (
        "Sousse",
        &[
            "Akouda",
            "Bouficha",
            "Enfida",
            "Hammam Sousse",
            "Hergla",
            "Kalâa Kebira",
            "Kalâa Seghira",
            "Kondar",
            "M'saken",
            "Sidi Bou Ali",
            "Sidi El Hani",
            "Sousse Jawhara",
            "Sousse Médina",
            "Sousse Riadh",
            "Sousse Sidi Abdelhamid",
            "Zaouit-Ksibat Thrayett",
        ],
    ),
    (
        "Tataouine",
        &[
            "Bir Lahmar",
            "Dehiba",
            "Ghomrassen",
            "Remada",
            "Smâr",
            "Tataouine Nord",
            "Tataouine Sud",
        ],
    ),
    (
        "Tozeur",
        &[
            "Degache",
            "Hamet Jerid",
            "Hazoua",
            "Nefta",
            "Tameghza",
            "Tozeur",
        ],
    ),
    (
        "Tunis",
        &[
            "Bab El Bhar",
            "Bab Souika",
            "Carthage",
            "Cité El Khadra",
            "Djebel Jelloud",
            "El Kabaria",
            "El Menzah",
            "El Omrane",
            "El Omrane Supérieur",
            "El Ouardia",
            "Ettahrir",
            "Ezzouhour",
            "Hraïria",
            "La Goulette",
            "La Marsa",
            "Le Bardo",
            "Le Kram",
            "Médina",
            "Séjoumi",
            "Sidi El Béchir",
            "Sidi Hassine",
        ],
    ),
    (
        "Zaghouan",
        &[
            "Bir Mcherga",
            "El Fahs",
            "Nadhour",
            "Saouaf",
            "Zaghouan",
            "Zriba",
        ],
    ),
];

/// Check whether `name` is one of the 24 governorates (exact spelling).
pub fn is_governorate(name: &str) -> bool {
    GOVERNORATES.contains(&name)
}

/// Delegations of a governorate, in display order.
pub fn delegations(governorate: &str) -> Result<&'static [&'static str], CoreError> {
    DELEGATIONS_BY_GOVERNORATE
        .iter()
        .find(|(name, _)| *name == governorate)
        .map(|(_, list)| *list)
        .ok_or_else(|| CoreError::NotFound {
            entity: "governorate",
            key: governorate.to_string(),
        })
}

/// Check whether `delegation` belongs to `governorate`.
pub fn is_delegation_of(governorate: &str, delegation: &str) -> bool {
    delegations(governorate).is_ok_and(|list| list.contains(&delegation))
}

/// First delegation of the default governorate; the last-resort location.
pub fn default_delegation() -> &'static str {
    delegations(DEFAULT_GOVERNORATE)
        .ok()
        .and_then(|list| list.first().copied())
        .unwrap_or(DEFAULT_GOVERNORATE)
}

// ---------------------------------------------------------------------------
// Species and breeds
// ---------------------------------------------------------------------------

/// A selectable species in breed pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SPECIES_OPTIONS: &[SpeciesOption] = &[
    SpeciesOption { value: "dog", label: "Dog" },
    SpeciesOption { value: "cat", label: "Cat" },
    SpeciesOption { value: "bird", label: "Bird" },
    SpeciesOption { value: "rabbit", label: "Rabbit" },
    SpeciesOption { value: "horse", label: "Horse" },
];

const BREEDS_BY_SPECIES: &[(&str, &[&str])] = &[
    (
        "dog",
        &[
            "Beagle",
            "Belgian Malinois",
            "Boxer",
            "Bulldog",
            "Cane Corso",
            "Chihuahua",
            "Doberman",
            "German Shepherd",
            "Golden Retriever",
            "Husky",
            "Labrador",
            "Pitbull",
            "Poodle",
            "Rottweiler",
            "Mixed Breed",
        ],
    ),
    (
        "cat",
        &[
            "Bengal",
            "British Shorthair",
            "Maine Coon",
            "Persian",
            "Siamese",
            "Sphynx",
            "Mixed Breed",
        ],
    ),
    (
        "bird",
        &["Budgerigar", "Canary", "Cockatiel", "African Grey Parrot", "Lovebird"],
    ),
    ("rabbit", &["Angora", "Dutch", "Lionhead", "Mini Lop"]),
    ("horse", &["Arabian", "Barb", "Thoroughbred", "Mixed Breed"]),
];

/// Breeds offered for `species`; empty for unknown species.
pub fn breeds(species: &str) -> &'static [&'static str] {
    BREEDS_BY_SPECIES
        .iter()
        .find(|(name, _)| *name == species)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

pub const LANGUAGES: &[&str] = &["Arabic", "French", "English", "Italian", "German", "Spanish"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_governorate_has_delegations() {
        assert_eq!(GOVERNORATES.len(), 24);
        for gov in GOVERNORATES {
            let list = delegations(gov).unwrap();
            assert!(!list.is_empty(), "{gov} has no delegations");
        }
    }

    #[test]
    fn unknown_governorate_is_not_found() {
        assert!(matches!(
            delegations("Atlantis"),
            Err(CoreError::NotFound { entity: "governorate", .. })
        ));
        assert!(!is_governorate("Atlantis"));
    }

    #[test]
    fn delegation_membership() {
        assert!(is_delegation_of("Tunis", "La Marsa"));
        assert!(!is_delegation_of("Sfax", "La Marsa"));
        assert!(!is_delegation_of("Atlantis", "La Marsa"));
    }

    #[test]
    fn default_delegation_is_first_tunis_entry() {
        assert_eq!(default_delegation(), delegations("Tunis").unwrap()[0]);
    }

    #[test]
    fn breeds_lookup() {
        assert!(breeds("dog").contains(&"Labrador"));
        assert!(breeds("lizard").is_empty());
        for option in SPECIES_OPTIONS {
            assert!(!breeds(option.value).is_empty());
        }
    }
}
