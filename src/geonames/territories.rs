//! Territory name resolution
//!
//! Gazetteer entries carry ISO-3166 country codes and geonames admin1 state
//! codes. These tables turn them into display names.

/// Trait for country / state name lookup tables
pub trait TerritoryNames: Send + Sync {
    /// Display name for an ISO-3166 alpha-2 country code
    fn country(&self, country_code: &str) -> Option<&str>;

    /// Display name for a country, falling back to the code itself
    fn country_or_code<'a>(&'a self, country_code: &'a str) -> &'a str {
        self.country(country_code).unwrap_or(country_code)
    }

    /// Display name for a first-level division within a country
    fn state(&self, country_code: &str, state_code: &str) -> Option<&str>;
}

/// Built-in territory tables
///
/// Country names cover the ISO-3166 codes most commonly seen in the
/// gazetteer; state names cover the United States and Canada.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTerritories;

impl TerritoryNames for BuiltinTerritories {
    fn country(&self, country_code: &str) -> Option<&str> {
        country_name(country_code)
    }

    fn state(&self, country_code: &str, state_code: &str) -> Option<&str> {
        match country_code {
            "US" => us_state_name(state_code),
            "CA" => canadian_province_name(state_code),
            _ => None,
        }
    }
}

fn country_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "AD" => "Andorra",
        "AE" => "United Arab Emirates",
        "AF" => "Afghanistan",
        "AL" => "Albania",
        "AM" => "Armenia",
        "AO" => "Angola",
        "AR" => "Argentina",
        "AT" => "Austria",
        "AU" => "Australia",
        "AZ" => "Azerbaijan",
        "BA" => "Bosnia and Herzegovina",
        "BD" => "Bangladesh",
        "BE" => "Belgium",
        "BG" => "Bulgaria",
        "BO" => "Bolivia",
        "BR" => "Brazil",
        "BY" => "Belarus",
        "CA" => "Canada",
        "CH" => "Switzerland",
        "CL" => "Chile",
        "CN" => "China",
        "CO" => "Colombia",
        "CR" => "Costa Rica",
        "CU" => "Cuba",
        "CY" => "Cyprus",
        "CZ" => "Czech Republic",
        "DE" => "Germany",
        "DK" => "Denmark",
        "DO" => "Dominican Republic",
        "DZ" => "Algeria",
        "EC" => "Ecuador",
        "EE" => "Estonia",
        "EG" => "Egypt",
        "ES" => "Spain",
        "ET" => "Ethiopia",
        "FI" => "Finland",
        "FR" => "France",
        "GB" => "United Kingdom",
        "GE" => "Georgia",
        "GH" => "Ghana",
        "GR" => "Greece",
        "GT" => "Guatemala",
        "HK" => "Hong Kong",
        "HR" => "Croatia",
        "HU" => "Hungary",
        "ID" => "Indonesia",
        "IE" => "Ireland",
        "IL" => "Israel",
        "IN" => "India",
        "IQ" => "Iraq",
        "IR" => "Iran",
        "IS" => "Iceland",
        "IT" => "Italy",
        "JM" => "Jamaica",
        "JO" => "Jordan",
        "JP" => "Japan",
        "KE" => "Kenya",
        "KH" => "Cambodia",
        "KR" => "South Korea",
        "KZ" => "Kazakhstan",
        "LB" => "Lebanon",
        "LK" => "Sri Lanka",
        "LT" => "Lithuania",
        "LU" => "Luxembourg",
        "LV" => "Latvia",
        "MA" => "Morocco",
        "MD" => "Moldova",
        "MK" => "Macedonia",
        "MN" => "Mongolia",
        "MT" => "Malta",
        "MX" => "Mexico",
        "MY" => "Malaysia",
        "NG" => "Nigeria",
        "NL" => "Netherlands",
        "NO" => "Norway",
        "NP" => "Nepal",
        "NZ" => "New Zealand",
        "PA" => "Panama",
        "PE" => "Peru",
        "PH" => "Philippines",
        "PK" => "Pakistan",
        "PL" => "Poland",
        "PR" => "Puerto Rico",
        "PT" => "Portugal",
        "PY" => "Paraguay",
        "QA" => "Qatar",
        "RO" => "Romania",
        "RS" => "Serbia",
        "RU" => "Russia",
        "SA" => "Saudi Arabia",
        "SE" => "Sweden",
        "SG" => "Singapore",
        "SI" => "Slovenia",
        "SK" => "Slovakia",
        "SN" => "Senegal",
        "SY" => "Syria",
        "TH" => "Thailand",
        "TN" => "Tunisia",
        "TR" => "Turkey",
        "TW" => "Taiwan",
        "TZ" => "Tanzania",
        "UA" => "Ukraine",
        "UG" => "Uganda",
        "US" => "United States",
        "UY" => "Uruguay",
        "UZ" => "Uzbekistan",
        "VE" => "Venezuela",
        "VN" => "Vietnam",
        "ZA" => "South Africa",
        "ZM" => "Zambia",
        "ZW" => "Zimbabwe",
        _ => return None,
    };
    Some(name)
}

fn us_state_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "AK" => "Alaska",
        "AL" => "Alabama",
        "AR" => "Arkansas",
        "AZ" => "Arizona",
        "CA" => "California",
        "CO" => "Colorado",
        "CT" => "Connecticut",
        "DC" => "District of Columbia",
        "DE" => "Delaware",
        "FL" => "Florida",
        "GA" => "Georgia",
        "HI" => "Hawaii",
        "IA" => "Iowa",
        "ID" => "Idaho",
        "IL" => "Illinois",
        "IN" => "Indiana",
        "KS" => "Kansas",
        "KY" => "Kentucky",
        "LA" => "Louisiana",
        "MA" => "Massachusetts",
        "MD" => "Maryland",
        "ME" => "Maine",
        "MI" => "Michigan",
        "MN" => "Minnesota",
        "MO" => "Missouri",
        "MS" => "Mississippi",
        "MT" => "Montana",
        "NC" => "North Carolina",
        "ND" => "North Dakota",
        "NE" => "Nebraska",
        "NH" => "New Hampshire",
        "NJ" => "New Jersey",
        "NM" => "New Mexico",
        "NV" => "Nevada",
        "NY" => "New York",
        "OH" => "Ohio",
        "OK" => "Oklahoma",
        "OR" => "Oregon",
        "PA" => "Pennsylvania",
        "RI" => "Rhode Island",
        "SC" => "South Carolina",
        "SD" => "South Dakota",
        "TN" => "Tennessee",
        "TX" => "Texas",
        "UT" => "Utah",
        "VA" => "Virginia",
        "VT" => "Vermont",
        "WA" => "Washington",
        "WI" => "Wisconsin",
        "WV" => "West Virginia",
        "WY" => "Wyoming",
        _ => return None,
    };
    Some(name)
}

/// Canadian provinces by geonames admin1 code
fn canadian_province_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "01" => "Alberta",
        "02" => "British Columbia",
        "03" => "Manitoba",
        "04" => "New Brunswick",
        "05" => "Newfoundland and Labrador",
        "07" => "Nova Scotia",
        "08" => "Ontario",
        "09" => "Prince Edward Island",
        "10" => "Quebec",
        "11" => "Saskatchewan",
        "12" => "Yukon",
        "13" => "Northwest Territories",
        "14" => "Nunavut",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countries() {
        let names = BuiltinTerritories;
        assert_eq!(names.country("FR"), Some("France"));
        assert_eq!(names.country("CA"), Some("Canada"));
        assert_eq!(names.country("XX"), None);
    }

    #[test]
    fn test_country_or_code() {
        let names = BuiltinTerritories;
        assert_eq!(names.country_or_code("FR"), "France");
        assert_eq!(names.country_or_code("XK"), "XK");
    }

    #[test]
    fn test_states() {
        let names = BuiltinTerritories;
        assert_eq!(names.state("US", "CA"), Some("California"));
        assert_eq!(names.state("CA", "01"), Some("Alberta"));
        assert_eq!(names.state("CA", "10"), Some("Quebec"));
        assert_eq!(names.state("FR", "11"), None);
        assert_eq!(names.state("US", ""), None);
    }
}
