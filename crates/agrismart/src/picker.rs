//! Manual location selection.
//!
//! A catalog of countries and their farming regions, plus approximate
//! coordinates for the regions that have them. Selecting a region builds a
//! [`LocationContext`] to hand to [`LocationStore::set`](crate::LocationStore::set).

use serde::Serialize;

use crate::location::{Coordinates, LocationContext};

/// A selectable country.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CountryEntry {
    /// ISO country code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Main farming regions.
    pub regions: &'static [&'static str],
}

/// Coordinates used for regions missing from the coordinate table.
pub const DEFAULT_REGION_COORDINATES: Coordinates = at(23.2599, 77.4126);

/// Every selectable country.
#[must_use]
pub fn countries() -> &'static [CountryEntry] {
    COUNTRIES
}

/// Look up a country by code, ignoring case.
#[must_use]
pub fn find_country(code: &str) -> Option<&'static CountryEntry> {
    let code = code.trim();
    COUNTRIES
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
}

/// Countries whose name or code contains `query`, ignoring case.
///
/// An empty query matches everything.
#[must_use]
pub fn search(query: &str) -> Vec<&'static CountryEntry> {
    let query = query.trim().to_lowercase();
    COUNTRIES
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&query)
                || entry.code.to_lowercase().contains(&query)
        })
        .collect()
}

/// Approximate coordinates of `region` in the country `code`.
#[must_use]
pub fn region_coordinates(code: &str, region: &str) -> Option<Coordinates> {
    let region = region.trim();
    REGION_COORDINATES
        .iter()
        .find(|(country, name, _)| {
            country.eq_ignore_ascii_case(code.trim()) && name.eq_ignore_ascii_case(region)
        })
        .map(|(_, _, coordinates)| *coordinates)
}

/// Build the context for a manually picked region.
///
/// Unknown regions get [`DEFAULT_REGION_COORDINATES`]; an unknown country
/// becomes `Unknown`/`XX`. The region name is used for both city and state.
#[must_use]
pub fn select_region(country_code: &str, region: &str) -> LocationContext {
    let region = region.trim();
    let entry = find_country(country_code);
    let coordinates = region_coordinates(country_code, region).unwrap_or_else(|| {
        tracing::debug!(country_code, region, "no coordinates for region, using default");
        DEFAULT_REGION_COORDINATES
    });

    LocationContext {
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        city: region.to_string(),
        state: region.to_string(),
        country: entry.map_or("Unknown", |e| e.name).to_string(),
        country_code: entry.map_or("XX", |e| e.code).to_string(),
        loading: false,
    }
}

const fn at(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
    }
}

static REGION_COORDINATES: &[(&str, &str, Coordinates)] = &[
    ("IN", "Madhya Pradesh", at(23.2599, 77.4126)),
    ("IN", "Maharashtra", at(19.7515, 75.7139)),
    ("IN", "Punjab", at(31.1471, 75.3412)),
    ("IN", "Karnataka", at(15.3173, 75.7139)),
    ("IN", "Tamil Nadu", at(11.1271, 78.6569)),
    ("IN", "Uttar Pradesh", at(26.8467, 80.9462)),
    ("IN", "Gujarat", at(22.2587, 71.1924)),
    ("IN", "Rajasthan", at(27.0238, 74.2179)),
    ("IN", "West Bengal", at(22.9868, 87.855)),
    ("IN", "Kerala", at(10.8505, 76.2711)),
    ("US", "California", at(36.7783, -119.4179)),
    ("US", "Texas", at(31.9686, -99.9018)),
    ("US", "Florida", at(27.6648, -81.5158)),
    ("US", "Iowa", at(41.878, -93.0977)),
    ("US", "Nebraska", at(41.4925, -99.9018)),
    ("US", "Kansas", at(39.0119, -98.4842)),
    ("US", "Illinois", at(40.6331, -89.3985)),
    ("US", "Wisconsin", at(43.7844, -88.7879)),
    ("US", "Minnesota", at(46.7296, -94.6859)),
    ("US", "Ohio", at(40.4173, -82.9071)),
    ("CN", "Heilongjiang", at(47.862, 127.7615)),
    ("CN", "Henan", at(34.7657, 113.7536)),
    ("CN", "Shandong", at(36.3427, 118.1498)),
    ("CN", "Jiangsu", at(32.9711, 119.455)),
    ("CN", "Sichuan", at(30.6516, 104.0759)),
    ("BR", "São Paulo", at(-23.5505, -46.6333)),
    ("BR", "Mato Grosso", at(-12.6819, -56.9211)),
    ("BR", "Paraná", at(-25.2521, -52.0216)),
    ("BR", "Goiás", at(-15.827, -49.8362)),
    ("AU", "New South Wales", at(-31.8406, 145.6128)),
    ("AU", "Victoria", at(-36.9848, 143.3906)),
    ("AU", "Queensland", at(-22.5752, 144.085)),
    ("AU", "Western Australia", at(-25.0423, 117.7933)),
];

static COUNTRIES: &[CountryEntry] = &[
    CountryEntry {
        code: "IN",
        name: "India",
        regions: &[
            "Madhya Pradesh",
            "Maharashtra",
            "Punjab",
            "Karnataka",
            "Tamil Nadu",
            "Uttar Pradesh",
            "Gujarat",
            "Rajasthan",
            "West Bengal",
            "Kerala",
        ],
    },
    CountryEntry {
        code: "US",
        name: "United States",
        regions: &[
            "California",
            "Texas",
            "Florida",
            "Iowa",
            "Nebraska",
            "Kansas",
            "Illinois",
            "Wisconsin",
            "Minnesota",
            "Ohio",
        ],
    },
    CountryEntry {
        code: "CN",
        name: "China",
        regions: &[
            "Heilongjiang",
            "Henan",
            "Shandong",
            "Jiangsu",
            "Sichuan",
            "Anhui",
            "Hubei",
            "Hunan",
            "Jiangxi",
            "Guangdong",
        ],
    },
    CountryEntry {
        code: "BR",
        name: "Brazil",
        regions: &[
            "São Paulo",
            "Mato Grosso",
            "Paraná",
            "Goiás",
            "Rio Grande do Sul",
            "Minas Gerais",
            "Bahia",
            "Maranhão",
            "Piauí",
            "Tocantins",
        ],
    },
    CountryEntry {
        code: "AU",
        name: "Australia",
        regions: &[
            "New South Wales",
            "Victoria",
            "Queensland",
            "Western Australia",
            "South Australia",
            "Tasmania",
            "Northern Territory",
            "ACT",
        ],
    },
    CountryEntry {
        code: "RU",
        name: "Russia",
        regions: &[
            "Krasnodar",
            "Rostov",
            "Stavropol",
            "Volgograd",
            "Saratov",
            "Samara",
            "Orenburg",
            "Altai",
            "Novosibirsk",
            "Omsk",
        ],
    },
    CountryEntry {
        code: "CA",
        name: "Canada",
        regions: &[
            "Saskatchewan",
            "Alberta",
            "Manitoba",
            "Ontario",
            "Quebec",
            "British Columbia",
            "Prince Edward Island",
            "New Brunswick",
            "Nova Scotia",
        ],
    },
    CountryEntry {
        code: "FR",
        name: "France",
        regions: &[
            "Île-de-France",
            "Nouvelle-Aquitaine",
            "Occitanie",
            "Auvergne-Rhône-Alpes",
            "Grand Est",
            "Hauts-de-France",
            "Brittany",
            "Normandy",
        ],
    },
    CountryEntry {
        code: "DE",
        name: "Germany",
        regions: &[
            "Bavaria",
            "Lower Saxony",
            "Baden-Württemberg",
            "North Rhine-Westphalia",
            "Saxony",
            "Schleswig-Holstein",
            "Brandenburg",
            "Mecklenburg",
        ],
    },
    CountryEntry {
        code: "GB",
        name: "United Kingdom",
        regions: &[
            "England",
            "Scotland",
            "Wales",
            "Northern Ireland",
            "East Anglia",
            "Yorkshire",
            "Midlands",
            "Cornwall",
        ],
    },
    CountryEntry {
        code: "JP",
        name: "Japan",
        regions: &[
            "Hokkaido",
            "Tohoku",
            "Kanto",
            "Chubu",
            "Kinki",
            "Chugoku",
            "Shikoku",
            "Kyushu",
            "Okinawa",
        ],
    },
    CountryEntry {
        code: "KR",
        name: "South Korea",
        regions: &[
            "Gyeonggi",
            "North Chungcheong",
            "South Chungcheong",
            "North Jeolla",
            "South Jeolla",
            "North Gyeongsang",
            "South Gyeongsang",
            "Gangwon",
        ],
    },
    CountryEntry {
        code: "MX",
        name: "Mexico",
        regions: &[
            "Jalisco",
            "Sinaloa",
            "Sonora",
            "Chihuahua",
            "Michoacán",
            "Veracruz",
            "Guanajuato",
            "Tamaulipas",
            "Nuevo León",
            "Durango",
        ],
    },
    CountryEntry {
        code: "AR",
        name: "Argentina",
        regions: &[
            "Buenos Aires",
            "Córdoba",
            "Santa Fe",
            "Entre Ríos",
            "La Pampa",
            "Mendoza",
            "San Juan",
            "Tucumán",
            "Salta",
            "Chaco",
        ],
    },
    CountryEntry {
        code: "ZA",
        name: "South Africa",
        regions: &[
            "Free State",
            "Western Cape",
            "KwaZulu-Natal",
            "Mpumalanga",
            "Limpopo",
            "North West",
            "Eastern Cape",
            "Gauteng",
            "Northern Cape",
        ],
    },
    CountryEntry {
        code: "NG",
        name: "Nigeria",
        regions: &[
            "Kano",
            "Kaduna",
            "Niger",
            "Benue",
            "Plateau",
            "Taraba",
            "Adamawa",
            "Oyo",
            "Osun",
            "Ekiti",
        ],
    },
    CountryEntry {
        code: "EG",
        name: "Egypt",
        regions: &[
            "Nile Delta",
            "Upper Egypt",
            "Sinai",
            "Western Desert",
            "Faiyum",
            "Aswan",
            "Luxor",
            "Alexandria",
        ],
    },
    CountryEntry {
        code: "PK",
        name: "Pakistan",
        regions: &[
            "Punjab",
            "Sindh",
            "Khyber Pakhtunkhwa",
            "Balochistan",
            "Gilgit-Baltistan",
            "Azad Kashmir",
        ],
    },
    CountryEntry {
        code: "ID",
        name: "Indonesia",
        regions: &[
            "Java",
            "Sumatra",
            "Kalimantan",
            "Sulawesi",
            "Papua",
            "Bali",
            "Nusa Tenggara",
            "Maluku",
        ],
    },
    CountryEntry {
        code: "TH",
        name: "Thailand",
        regions: &[
            "Central Thailand",
            "Northern Thailand",
            "Northeastern Thailand",
            "Southern Thailand",
            "Eastern Thailand",
        ],
    },
    CountryEntry {
        code: "VN",
        name: "Vietnam",
        regions: &[
            "Mekong Delta",
            "Red River Delta",
            "Central Highlands",
            "Southeast",
            "North Central Coast",
            "South Central Coast",
        ],
    },
    CountryEntry {
        code: "PH",
        name: "Philippines",
        regions: &[
            "Luzon",
            "Visayas",
            "Mindanao",
            "Metro Manila",
            "Central Luzon",
            "Calabarzon",
            "Ilocos Region",
        ],
    },
    CountryEntry {
        code: "BD",
        name: "Bangladesh",
        regions: &[
            "Dhaka",
            "Chittagong",
            "Khulna",
            "Rajshahi",
            "Sylhet",
            "Rangpur",
            "Barisal",
            "Mymensingh",
        ],
    },
    CountryEntry {
        code: "IT",
        name: "Italy",
        regions: &[
            "Emilia-Romagna",
            "Lombardy",
            "Veneto",
            "Piedmont",
            "Tuscany",
            "Puglia",
            "Sicily",
            "Sardinia",
            "Campania",
        ],
    },
    CountryEntry {
        code: "ES",
        name: "Spain",
        regions: &[
            "Andalusia",
            "Castile and León",
            "Extremadura",
            "Aragon",
            "Catalonia",
            "Murcia",
            "Valencia",
            "La Rioja",
        ],
    },
    CountryEntry {
        code: "UA",
        name: "Ukraine",
        regions: &[
            "Kyiv",
            "Kharkiv",
            "Odessa",
            "Dnipro",
            "Lviv",
            "Poltava",
            "Chernihiv",
            "Zaporizhzhia",
            "Vinnytsia",
        ],
    },
    CountryEntry {
        code: "PL",
        name: "Poland",
        regions: &[
            "Greater Poland",
            "Masovia",
            "Lesser Poland",
            "Silesia",
            "Lublin",
            "Podlaskie",
            "Warmian-Masurian",
            "Pomerania",
        ],
    },
    CountryEntry {
        code: "TR",
        name: "Turkey",
        regions: &[
            "Central Anatolia",
            "Southeastern Anatolia",
            "Mediterranean",
            "Aegean",
            "Marmara",
            "Black Sea",
            "Eastern Anatolia",
        ],
    },
    CountryEntry {
        code: "IR",
        name: "Iran",
        regions: &[
            "Khuzestan",
            "Fars",
            "Kerman",
            "Khorasan",
            "Isfahan",
            "East Azerbaijan",
            "West Azerbaijan",
            "Gilan",
            "Mazandaran",
        ],
    },
    CountryEntry {
        code: "SA",
        name: "Saudi Arabia",
        regions: &[
            "Riyadh",
            "Eastern Province",
            "Mecca",
            "Medina",
            "Asir",
            "Jizan",
            "Tabuk",
            "Ha'il",
        ],
    },
    CountryEntry {
        code: "ET",
        name: "Ethiopia",
        regions: &[
            "Oromia",
            "Amhara",
            "SNNPR",
            "Tigray",
            "Somali",
            "Afar",
            "Benishangul-Gumuz",
            "Gambela",
        ],
    },
    CountryEntry {
        code: "KE",
        name: "Kenya",
        regions: &[
            "Rift Valley",
            "Central",
            "Eastern",
            "Western",
            "Nyanza",
            "Coast",
            "North Eastern",
            "Nairobi",
        ],
    },
    CountryEntry {
        code: "TZ",
        name: "Tanzania",
        regions: &[
            "Dar es Salaam",
            "Arusha",
            "Mwanza",
            "Morogoro",
            "Dodoma",
            "Kilimanjaro",
            "Mbeya",
            "Tanga",
        ],
    },
    CountryEntry {
        code: "MY",
        name: "Malaysia",
        regions: &[
            "Johor",
            "Kedah",
            "Perak",
            "Pahang",
            "Sabah",
            "Sarawak",
            "Selangor",
            "Penang",
            "Kelantan",
        ],
    },
    CountryEntry {
        code: "NZ",
        name: "New Zealand",
        regions: &[
            "Canterbury",
            "Waikato",
            "Otago",
            "Southland",
            "Manawatu-Wanganui",
            "Hawke's Bay",
            "Taranaki",
            "Bay of Plenty",
        ],
    },
    CountryEntry {
        code: "CL",
        name: "Chile",
        regions: &[
            "O'Higgins",
            "Maule",
            "Biobío",
            "Araucanía",
            "Los Ríos",
            "Los Lagos",
            "Valparaíso",
            "Metropolitan",
        ],
    },
    CountryEntry {
        code: "CO",
        name: "Colombia",
        regions: &[
            "Antioquia",
            "Valle del Cauca",
            "Cundinamarca",
            "Santander",
            "Boyacá",
            "Tolima",
            "Meta",
            "Huila",
        ],
    },
    CountryEntry {
        code: "PE",
        name: "Peru",
        regions: &[
            "Lima",
            "Arequipa",
            "La Libertad",
            "Piura",
            "Lambayeque",
            "Junín",
            "Cusco",
            "Ica",
            "Ancash",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(countries().len(), 38);
        assert!(countries().iter().all(|entry| !entry.regions.is_empty()));
    }

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<_> = countries().iter().map(|entry| entry.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), countries().len());
    }

    #[test]
    fn test_coordinate_table_regions_exist_in_catalog() {
        for (code, region, _) in REGION_COORDINATES {
            let entry = find_country(code).unwrap();
            assert!(entry.regions.contains(region), "{code}/{region}");
        }
    }

    #[test]
    fn test_search_by_name_and_code() {
        let names = |query| search(query).iter().map(|e| e.name).collect::<Vec<_>>();
        assert_eq!(names("india"), vec!["India"]);
        assert!(names("IN").contains(&"India"));
        assert!(names("united").contains(&"United States"));
        assert!(names("united").contains(&"United Kingdom"));
        assert!(names("zzzz").is_empty());
    }

    #[test]
    fn test_empty_search_returns_all() {
        assert_eq!(search("").len(), countries().len());
    }

    #[test]
    fn test_select_known_region() {
        let ctx = select_region("us", "Iowa");
        assert_eq!(ctx.city, "Iowa");
        assert_eq!(ctx.state, "Iowa");
        assert_eq!(ctx.country, "United States");
        assert_eq!(ctx.country_code, "US");
        assert!((ctx.latitude - 41.878).abs() < f64::EPSILON);
        assert!(!ctx.loading);
    }

    #[test]
    fn test_select_region_without_coordinates() {
        let ctx = select_region("KE", "Rift Valley");
        assert_eq!(ctx.country, "Kenya");
        assert_eq!(ctx.coordinates(), DEFAULT_REGION_COORDINATES);
    }

    #[test]
    fn test_same_region_name_in_two_countries() {
        let india = select_region("IN", "Punjab");
        let pakistan = select_region("PK", "Punjab");
        assert!((india.latitude - 31.1471).abs() < f64::EPSILON);
        assert_eq!(pakistan.coordinates(), DEFAULT_REGION_COORDINATES);
        assert_eq!(pakistan.country, "Pakistan");
    }

    #[test]
    fn test_select_unknown_country() {
        let ctx = select_region("ZZ", "Nowhere");
        assert_eq!(ctx.country, "Unknown");
        assert_eq!(ctx.country_code, "XX");
        assert_eq!(ctx.city, "Nowhere");
    }
}
