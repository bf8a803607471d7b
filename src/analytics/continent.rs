//! ISO 3166-1 alpha-2 country code to continent name

pub const AFRICA: &str = "Africa";
pub const ANTARCTICA: &str = "Antarctica";
pub const ASIA: &str = "Asia";
pub const EUROPE: &str = "Europe";
pub const NORTH_AMERICA: &str = "North America";
pub const OCEANIA: &str = "Oceania";
pub const SOUTH_AMERICA: &str = "South America";
pub const UNKNOWN: &str = "Unknown";

/// Continent of a country code; `None` for codes outside the table
pub fn continent_of(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    let continent = match code.as_str() {
        "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CV" | "CM" | "CF" | "TD" | "KM" | "CG"
        | "CD" | "CI" | "DJ" | "EG" | "GQ" | "ER" | "SZ" | "ET" | "GA" | "GM" | "GH" | "GN"
        | "GW" | "KE" | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT" | "MA"
        | "MZ" | "NA" | "NE" | "NG" | "RE" | "RW" | "SH" | "ST" | "SN" | "SC" | "SL" | "SO"
        | "ZA" | "SS" | "SD" | "TZ" | "TG" | "TN" | "UG" | "EH" | "ZM" | "ZW" => AFRICA,

        "AQ" | "BV" | "GS" | "HM" | "TF" => ANTARCTICA,

        "AF" | "AM" | "AZ" | "BH" | "BD" | "BT" | "IO" | "BN" | "KH" | "CN" | "CX" | "CC"
        | "CY" | "GE" | "HK" | "IN" | "ID" | "IR" | "IQ" | "IL" | "JP" | "JO" | "KZ" | "KP"
        | "KR" | "KW" | "KG" | "LA" | "LB" | "MO" | "MY" | "MV" | "MN" | "MM" | "NP" | "OM"
        | "PK" | "PS" | "PH" | "QA" | "SA" | "SG" | "LK" | "SY" | "TW" | "TJ" | "TH" | "TL"
        | "TR" | "TM" | "AE" | "UZ" | "VN" | "YE" => ASIA,

        "AX" | "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CZ" | "DK" | "EE"
        | "FO" | "FI" | "FR" | "DE" | "GI" | "GR" | "GG" | "VA" | "HU" | "IS" | "IE" | "IM"
        | "IT" | "JE" | "XK" | "LV" | "LI" | "LT" | "LU" | "MT" | "MD" | "MC" | "ME" | "NL"
        | "MK" | "NO" | "PL" | "PT" | "RO" | "RU" | "SM" | "RS" | "SK" | "SI" | "ES" | "SJ"
        | "SE" | "CH" | "UA" | "GB" => EUROPE,

        "AI" | "AG" | "AW" | "BS" | "BB" | "BZ" | "BM" | "BQ" | "VG" | "CA" | "KY" | "CR"
        | "CU" | "CW" | "DM" | "DO" | "SV" | "GL" | "GD" | "GP" | "GT" | "HT" | "HN" | "JM"
        | "MQ" | "MX" | "MS" | "NI" | "PA" | "PR" | "BL" | "KN" | "LC" | "MF" | "PM" | "VC"
        | "SX" | "TT" | "TC" | "US" | "VI" | "UM" => NORTH_AMERICA,

        "AS" | "AU" | "CK" | "FJ" | "PF" | "GU" | "KI" | "MH" | "FM" | "NR" | "NC" | "NZ"
        | "NU" | "NF" | "MP" | "PW" | "PG" | "PN" | "WS" | "SB" | "TK" | "TO" | "TV" | "VU"
        | "WF" => OCEANIA,

        "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "FK" | "GF" | "GY" | "PY" | "PE" | "SR"
        | "UY" | "VE" => SOUTH_AMERICA,

        _ => return None,
    };
    Some(continent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(continent_of("GB"), Some(EUROPE));
        assert_eq!(continent_of("us"), Some(NORTH_AMERICA));
        assert_eq!(continent_of("BR"), Some(SOUTH_AMERICA));
        assert_eq!(continent_of("JP"), Some(ASIA));
        assert_eq!(continent_of("NG"), Some(AFRICA));
        assert_eq!(continent_of("AU"), Some(OCEANIA));
        assert_eq!(continent_of("AQ"), Some(ANTARCTICA));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(continent_of("ZZ"), None);
        assert_eq!(continent_of(""), None);
        assert_eq!(continent_of("GBR"), None);
    }
}
