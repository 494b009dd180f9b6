//! ISO-3166-1 country codes.
//!
//! Each officially assigned alpha-2 code is a variant of [`CountryCode`],
//! carrying its alpha-3 code and English short name.

use std::fmt;
use std::str::FromStr;

/// Error returned for strings that are not an assigned alpha-2 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No enum constant CountryCode.{0}")]
pub struct ParseCountryCodeError(pub String);

macro_rules! country_codes {
    ($( $code:ident, $alpha3:literal, $name:literal; )*) => {
        /// ISO-3166-1 alpha-2 country code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum CountryCode {
            $( $code, )*
        }

        impl CountryCode {
            /// Every assigned code, in alphabetical order.
            pub const ALL: &'static [CountryCode] = &[ $( CountryCode::$code, )* ];

            /// The two-letter code, e.g. `DE`.
            #[must_use]
            pub fn alpha2(&self) -> &'static str {
                match self {
                    $( CountryCode::$code => stringify!($code), )*
                }
            }

            /// The three-letter code, e.g. `DEU`.
            #[must_use]
            pub fn alpha3(&self) -> &'static str {
                match self {
                    $( CountryCode::$code => $alpha3, )*
                }
            }

            #[must_use]
            pub fn name(&self) -> &'static str {
                match self {
                    $( CountryCode::$code => $name, )*
                }
            }

            /// Exact, case-sensitive lookup of an alpha-2 code.
            pub fn from_alpha2(code: &str) -> Option<Self> {
                match code {
                    $( stringify!($code) => Some(CountryCode::$code), )*
                    _ => None,
                }
            }
        }
    };
}

impl CountryCode {
    pub fn parse(code: &str) -> Result<Self, ParseCountryCodeError> {
        Self::from_alpha2(code).ok_or_else(|| ParseCountryCodeError(code.to_string()))
    }

    pub fn from_alpha3(code: &str) -> Option<Self> {
        Self::ALL.iter().find(|c| c.alpha3() == code).copied()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha2())
    }
}

impl FromStr for CountryCode {
    type Err = ParseCountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

country_codes! {
    AD, "AND", "Andorra";
    AE, "ARE", "United Arab Emirates";
    AF, "AFG", "Afghanistan";
    AG, "ATG", "Antigua and Barbuda";
    AI, "AIA", "Anguilla";
    AL, "ALB", "Albania";
    AM, "ARM", "Armenia";
    AO, "AGO", "Angola";
    AQ, "ATA", "Antarctica";
    AR, "ARG", "Argentina";
    AS, "ASM", "American Samoa";
    AT, "AUT", "Austria";
    AU, "AUS", "Australia";
    AW, "ABW", "Aruba";
    AX, "ALA", "Aland Islands";
    AZ, "AZE", "Azerbaijan";
    BA, "BIH", "Bosnia and Herzegovina";
    BB, "BRB", "Barbados";
    BD, "BGD", "Bangladesh";
    BE, "BEL", "Belgium";
    BF, "BFA", "Burkina Faso";
    BG, "BGR", "Bulgaria";
    BH, "BHR", "Bahrain";
    BI, "BDI", "Burundi";
    BJ, "BEN", "Benin";
    BL, "BLM", "Saint Barthelemy";
    BM, "BMU", "Bermuda";
    BN, "BRN", "Brunei Darussalam";
    BO, "BOL", "Bolivia";
    BQ, "BES", "Bonaire, Sint Eustatius and Saba";
    BR, "BRA", "Brazil";
    BS, "BHS", "Bahamas";
    BT, "BTN", "Bhutan";
    BV, "BVT", "Bouvet Island";
    BW, "BWA", "Botswana";
    BY, "BLR", "Belarus";
    BZ, "BLZ", "Belize";
    CA, "CAN", "Canada";
    CC, "CCK", "Cocos (Keeling) Islands";
    CD, "COD", "Congo, the Democratic Republic of the";
    CF, "CAF", "Central African Republic";
    CG, "COG", "Congo";
    CH, "CHE", "Switzerland";
    CI, "CIV", "Cote d'Ivoire";
    CK, "COK", "Cook Islands";
    CL, "CHL", "Chile";
    CM, "CMR", "Cameroon";
    CN, "CHN", "China";
    CO, "COL", "Colombia";
    CR, "CRI", "Costa Rica";
    CU, "CUB", "Cuba";
    CV, "CPV", "Cabo Verde";
    CW, "CUW", "Curacao";
    CX, "CXR", "Christmas Island";
    CY, "CYP", "Cyprus";
    CZ, "CZE", "Czechia";
    DE, "DEU", "Germany";
    DJ, "DJI", "Djibouti";
    DK, "DNK", "Denmark";
    DM, "DMA", "Dominica";
    DO, "DOM", "Dominican Republic";
    DZ, "DZA", "Algeria";
    EC, "ECU", "Ecuador";
    EE, "EST", "Estonia";
    EG, "EGY", "Egypt";
    EH, "ESH", "Western Sahara";
    ER, "ERI", "Eritrea";
    ES, "ESP", "Spain";
    ET, "ETH", "Ethiopia";
    FI, "FIN", "Finland";
    FJ, "FJI", "Fiji";
    FK, "FLK", "Falkland Islands (Malvinas)";
    FM, "FSM", "Micronesia, Federated States of";
    FO, "FRO", "Faroe Islands";
    FR, "FRA", "France";
    GA, "GAB", "Gabon";
    GB, "GBR", "United Kingdom";
    GD, "GRD", "Grenada";
    GE, "GEO", "Georgia";
    GF, "GUF", "French Guiana";
    GG, "GGY", "Guernsey";
    GH, "GHA", "Ghana";
    GI, "GIB", "Gibraltar";
    GL, "GRL", "Greenland";
    GM, "GMB", "Gambia";
    GN, "GIN", "Guinea";
    GP, "GLP", "Guadeloupe";
    GQ, "GNQ", "Equatorial Guinea";
    GR, "GRC", "Greece";
    GS, "SGS", "South Georgia and the South Sandwich Islands";
    GT, "GTM", "Guatemala";
    GU, "GUM", "Guam";
    GW, "GNB", "Guinea-Bissau";
    GY, "GUY", "Guyana";
    HK, "HKG", "Hong Kong";
    HM, "HMD", "Heard Island and McDonald Islands";
    HN, "HND", "Honduras";
    HR, "HRV", "Croatia";
    HT, "HTI", "Haiti";
    HU, "HUN", "Hungary";
    ID, "IDN", "Indonesia";
    IE, "IRL", "Ireland";
    IL, "ISR", "Israel";
    IM, "IMN", "Isle of Man";
    IN, "IND", "India";
    IO, "IOT", "British Indian Ocean Territory";
    IQ, "IRQ", "Iraq";
    IR, "IRN", "Iran";
    IS, "ISL", "Iceland";
    IT, "ITA", "Italy";
    JE, "JEY", "Jersey";
    JM, "JAM", "Jamaica";
    JO, "JOR", "Jordan";
    JP, "JPN", "Japan";
    KE, "KEN", "Kenya";
    KG, "KGZ", "Kyrgyzstan";
    KH, "KHM", "Cambodia";
    KI, "KIR", "Kiribati";
    KM, "COM", "Comoros";
    KN, "KNA", "Saint Kitts and Nevis";
    KP, "PRK", "Korea, Democratic People's Republic of";
    KR, "KOR", "Korea, Republic of";
    KW, "KWT", "Kuwait";
    KY, "CYM", "Cayman Islands";
    KZ, "KAZ", "Kazakhstan";
    LA, "LAO", "Lao People's Democratic Republic";
    LB, "LBN", "Lebanon";
    LC, "LCA", "Saint Lucia";
    LI, "LIE", "Liechtenstein";
    LK, "LKA", "Sri Lanka";
    LR, "LBR", "Liberia";
    LS, "LSO", "Lesotho";
    LT, "LTU", "Lithuania";
    LU, "LUX", "Luxembourg";
    LV, "LVA", "Latvia";
    LY, "LBY", "Libya";
    MA, "MAR", "Morocco";
    MC, "MCO", "Monaco";
    MD, "MDA", "Moldova";
    ME, "MNE", "Montenegro";
    MF, "MAF", "Saint Martin (French part)";
    MG, "MDG", "Madagascar";
    MH, "MHL", "Marshall Islands";
    MK, "MKD", "North Macedonia";
    ML, "MLI", "Mali";
    MM, "MMR", "Myanmar";
    MN, "MNG", "Mongolia";
    MO, "MAC", "Macao";
    MP, "MNP", "Northern Mariana Islands";
    MQ, "MTQ", "Martinique";
    MR, "MRT", "Mauritania";
    MS, "MSR", "Montserrat";
    MT, "MLT", "Malta";
    MU, "MUS", "Mauritius";
    MV, "MDV", "Maldives";
    MW, "MWI", "Malawi";
    MX, "MEX", "Mexico";
    MY, "MYS", "Malaysia";
    MZ, "MOZ", "Mozambique";
    NA, "NAM", "Namibia";
    NC, "NCL", "New Caledonia";
    NE, "NER", "Niger";
    NF, "NFK", "Norfolk Island";
    NG, "NGA", "Nigeria";
    NI, "NIC", "Nicaragua";
    NL, "NLD", "Netherlands";
    NO, "NOR", "Norway";
    NP, "NPL", "Nepal";
    NR, "NRU", "Nauru";
    NU, "NIU", "Niue";
    NZ, "NZL", "New Zealand";
    OM, "OMN", "Oman";
    PA, "PAN", "Panama";
    PE, "PER", "Peru";
    PF, "PYF", "French Polynesia";
    PG, "PNG", "Papua New Guinea";
    PH, "PHL", "Philippines";
    PK, "PAK", "Pakistan";
    PL, "POL", "Poland";
    PM, "SPM", "Saint Pierre and Miquelon";
    PN, "PCN", "Pitcairn";
    PR, "PRI", "Puerto Rico";
    PS, "PSE", "Palestine, State of";
    PT, "PRT", "Portugal";
    PW, "PLW", "Palau";
    PY, "PRY", "Paraguay";
    QA, "QAT", "Qatar";
    RE, "REU", "Reunion";
    RO, "ROU", "Romania";
    RS, "SRB", "Serbia";
    RU, "RUS", "Russian Federation";
    RW, "RWA", "Rwanda";
    SA, "SAU", "Saudi Arabia";
    SB, "SLB", "Solomon Islands";
    SC, "SYC", "Seychelles";
    SD, "SDN", "Sudan";
    SE, "SWE", "Sweden";
    SG, "SGP", "Singapore";
    SH, "SHN", "Saint Helena, Ascension and Tristan da Cunha";
    SI, "SVN", "Slovenia";
    SJ, "SJM", "Svalbard and Jan Mayen";
    SK, "SVK", "Slovakia";
    SL, "SLE", "Sierra Leone";
    SM, "SMR", "San Marino";
    SN, "SEN", "Senegal";
    SO, "SOM", "Somalia";
    SR, "SUR", "Suriname";
    SS, "SSD", "South Sudan";
    ST, "STP", "Sao Tome and Principe";
    SV, "SLV", "El Salvador";
    SX, "SXM", "Sint Maarten (Dutch part)";
    SY, "SYR", "Syrian Arab Republic";
    SZ, "SWZ", "Eswatini";
    TC, "TCA", "Turks and Caicos Islands";
    TD, "TCD", "Chad";
    TF, "ATF", "French Southern Territories";
    TG, "TGO", "Togo";
    TH, "THA", "Thailand";
    TJ, "TJK", "Tajikistan";
    TK, "TKL", "Tokelau";
    TL, "TLS", "Timor-Leste";
    TM, "TKM", "Turkmenistan";
    TN, "TUN", "Tunisia";
    TO, "TON", "Tonga";
    TR, "TUR", "Turkiye";
    TT, "TTO", "Trinidad and Tobago";
    TV, "TUV", "Tuvalu";
    TW, "TWN", "Taiwan";
    TZ, "TZA", "Tanzania, United Republic of";
    UA, "UKR", "Ukraine";
    UG, "UGA", "Uganda";
    UM, "UMI", "United States Minor Outlying Islands";
    US, "USA", "United States of America";
    UY, "URY", "Uruguay";
    UZ, "UZB", "Uzbekistan";
    VA, "VAT", "Holy See";
    VC, "VCT", "Saint Vincent and the Grenadines";
    VE, "VEN", "Venezuela";
    VG, "VGB", "Virgin Islands (British)";
    VI, "VIR", "Virgin Islands (U.S.)";
    VN, "VNM", "Viet Nam";
    VU, "VUT", "Vanuatu";
    WF, "WLF", "Wallis and Futuna";
    WS, "WSM", "Samoa";
    YE, "YEM", "Yemen";
    YT, "MYT", "Mayotte";
    ZA, "ZAF", "South Africa";
    ZM, "ZMB", "Zambia";
    ZW, "ZWE", "Zimbabwe";
}
