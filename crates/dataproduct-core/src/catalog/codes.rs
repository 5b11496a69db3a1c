//! Code lists shared by the Nordic Smart Government definitions

/// ISO 3166-1 alpha-3 country codes
pub(super) const ISO_3166_ALPHA_3: [&str; 244] = [
    "AFG", "ALB", "DZA", "ASM", "AND", "AGO", "AIA", "ATA", "ATG", "ARG", "ARM", "ABW", "AUS",
    "AUT", "AZE", "BHS", "BHR", "BGD", "BRB", "BLR", "BEL", "BLZ", "BEN", "BMU", "BTN", "BOL",
    "BIH", "BWA", "BVT", "BRA", "IOT", "BRN", "BGR", "BFA", "BDI", "KHM", "CMR", "CAN", "CPV",
    "CYM", "CAF", "TCD", "CHL", "CHN", "CXR", "CCK", "COL", "COM", "COG", "COD", "COK", "CRI",
    "CIV", "HRV", "CUB", "CYP", "CZE", "DNK", "DJI", "DMA", "DOM", "ECU", "EGY", "SLV", "GNQ",
    "ERI", "EST", "ETH", "FLK", "FRO", "FJI", "FIN", "FRA", "GUF", "PYF", "ATF", "GAB", "GMB",
    "GEO", "DEU", "GHA", "GIB", "GRC", "GRL", "GRD", "GLP", "GUM", "GTM", "GGY", "GIN", "GNB",
    "GUY", "HTI", "HMD", "VAT", "HND", "HKG", "HUN", "ISL", "IND", "IDN", "IRN", "IRQ", "IRL",
    "IMN", "ISR", "ITA", "JAM", "JPN", "JEY", "JOR", "KAZ", "KEN", "KIR", "PRK", "KOR", "KWT",
    "KGZ", "LAO", "LVA", "LBN", "LSO", "LBR", "LBY", "LIE", "LTU", "LUX", "MAC", "MKD", "MDG",
    "MWI", "MYS", "MDV", "MLI", "MLT", "MHL", "MTQ", "MRT", "MUS", "MYT", "MEX", "FSM", "MDA",
    "MCO", "MNG", "MNE", "MSR", "MAR", "MOZ", "MMR", "NAM", "NRU", "NPL", "NLD", "ANT", "NCL",
    "NZL", "NIC", "NER", "NGA", "NIU", "NFK", "MNP", "NOR", "OMN", "PAK", "PLW", "PSE", "PAN",
    "PNG", "PRY", "PER", "PHL", "PCN", "POL", "PRT", "PRI", "QAT", "REU", "ROU", "RUS", "RWA",
    "SHN", "KNA", "LCA", "SPM", "VCT", "WSM", "SMR", "STP", "SAU", "SEN", "SRB", "SYC", "SLE",
    "SGP", "SVK", "SVN", "SLB", "SOM", "ZAF", "SGS", "SSD", "ESP", "LKA", "SDN", "SUR", "SJM",
    "SWZ", "SWE", "CHE", "SYR", "TWN", "TJK", "TZA", "THA", "TLS", "TGO", "TKL", "TON", "TTO",
    "TUN", "TUR", "TKM", "TCA", "TUV", "UGA", "UKR", "ARE", "GBR", "USA", "UMI", "URY", "UZB",
    "VUT", "VEN", "VNM", "VGB", "VIR", "WLF", "ESH", "YEM", "ZMB", "ZWE",
];

/// ISO 4217 currencies of the Nordic countries
pub(super) const ISO_4217_CURRENCIES: [&str; 5] = [
    "EUR", "SEK", "NOK", "DKK", "ISK",
];

/// Nordic legal form codes, prefixed with the issuing country
pub(super) const NORDIC_LEGAL_FORMS: [&str; 136] = [
    "NO_AAFY", "NO_ADOS", "NO_ANNA", "NO_ANS", "NO_AS", "NO_ASA", "NO_BA", "NO_BBL", "NO_BEDR",
    "NO_BO", "NO_BRL", "NO_DA", "NO_ENK", "NO_ESEK", "NO_EOEFG", "NO_FKF", "NO_FLI", "NO_FYLK",
    "NO_GFS", "NO_IKJP", "NO_IKS", "NO_KBO", "NO_KF", "NO_KIRK", "NO_KOMM", "NO_KS", "NO_KTRF",
    "NO_NUF", "NO_OPMV", "NO_ORGL", "NO_PERS", "NO_PK", "NO_PRE", "NO_SA", "NO_SAM", "NO_SE",
    "NO_SF", "NO_SPA", "NO_STAT", "NO_STI", "NO_SAER", "NO_TVAM", "NO_VPFO", "SE_I", "SE_TSF",
    "SE_MB", "SE_SE", "SE_SCE", "SE_SF", "SE_HB", "SE_BAB", "SE_EK", "SE_KB", "SE_SB", "SE_FOF",
    "SE_OFB", "SE_FAB", "SE_KHF", "SE_EEIG", "SE_EGTS", "SE_BRF", "SE_BF", "SE_AB", "SE_BFL",
    "SE_E", "SE_EB", "SE_FL", "SE_S", "FI_AYH", "FI_AHVELL", "FI_AHVE", "FI_ASH", "FI_ASY",
    "FI_AOY", "FI_AY", "FI_EYHT", "FI_ESAA", "FI_EVL", "FI_ELSYH", "FI_ETS", "FI_ETY", "FI_EUOKKT",
    "FI_SCE", "FI_SCP", "FI_SE", "FI_EVLUT", "FI_HYYH", "FI_KVJ", "FI_OYJ", "FI_VOJ", "FI_KK",
    "FI_KOY", "FI_KVAKYH", "FI_KVY", "FI_KY", "FI_KONK", "FI_KUNTLL", "FI_KUNT", "FI_KUNTLLL",
    "FI_KUNTYHT", "FI_KP", "FI_LIY", "FI_MHY", "FI_MJUO", "FI_MUUKOY", "FI_MSAA", "FI_MTYH",
    "FI_MUVE", "FI_MYH", "FI_MUYP", "FI_MUU", "FI_MOHLO", "FI_ORTO", "FI_OY", "FI_OK", "FI_OP",
    "FI_PY", "FI_PK", "FI_SL", "FI_SP", "FI_SAA", "FI_TYH", "FI_TEKA", "FI_TYKA", "FI_ULKO",
    "FI_VAKK", "FI_VOY", "FI_VY", "FI_VALT", "FI_VALTLL", "FI_VEYHT", "FI_YHTE", "FI_YHME",
    "FI_YEH", "FI_YO", "FI_UYK",
];

/// NACE Rev. 2 sections, divisions, groups and classes in dotted notation
pub(super) const NACE_CODES: [&str; 975] = [
    "01", "01.1", "01.11", "01.12", "01.13", "01.14", "01.15", "01.16", "01.19", "01.2", "01.21",
    "01.22", "01.23", "01.24", "01.25", "01.26", "01.27", "01.28", "01.29", "01.3", "01.30",
    "01.4", "01.41", "01.42", "01.43", "01.44", "01.45", "01.46", "01.47", "01.49", "01.5",
    "01.50", "01.6", "01.61", "01.62", "01.63", "01.64", "01.7", "01.70", "02", "02.1", "02.10",
    "02.2", "02.20", "02.3", "02.30", "02.4", "02.40", "03", "03.1", "03.11", "03.12", "03.2",
    "03.21", "03.22", "05", "05.1", "05.10", "05.2", "05.20", "06", "06.1", "06.10", "06.2",
    "06.20", "07", "07.1", "07.10", "07.2", "07.21", "07.29", "08", "08.1", "08.11", "08.12",
    "08.9", "08.91", "08.92", "08.93", "08.99", "09", "09.1", "09.10", "09.9", "09.90", "10",
    "10.1", "10.11", "10.12", "10.13", "10.2", "10.20", "10.3", "10.31", "10.32", "10.39", "10.4",
    "10.41", "10.42", "10.5", "10.51", "10.52", "10.6", "10.61", "10.62", "10.7", "10.71", "10.72",
    "10.73", "10.8", "10.81", "10.82", "10.83", "10.84", "10.85", "10.86", "10.89", "10.9",
    "10.91", "10.92", "11", "11.0", "11.01", "11.02", "11.03", "11.04", "11.05", "11.06", "11.07",
    "12", "12.0", "12.00", "13", "13.1", "13.10", "13.2", "13.20", "13.3", "13.30", "13.9",
    "13.91", "13.92", "13.93", "13.94", "13.95", "13.96", "13.99", "14", "14.1", "14.11", "14.12",
    "14.13", "14.14", "14.19", "14.2", "14.20", "14.3", "14.31", "14.39", "15", "15.1", "15.11",
    "15.12", "15.2", "15.20", "16", "16.1", "16.10", "16.2", "16.21", "16.22", "16.23", "16.24",
    "16.29", "17", "17.1", "17.11", "17.12", "17.2", "17.21", "17.22", "17.23", "17.24", "17.29",
    "18", "18.1", "18.11", "18.12", "18.13", "18.14", "18.2", "18.20", "19", "19.1", "19.10",
    "19.2", "19.20", "20", "20.1", "20.11", "20.12", "20.13", "20.14", "20.15", "20.16", "20.17",
    "20.2", "20.20", "20.3", "20.30", "20.4", "20.41", "20.42", "20.5", "20.51", "20.52", "20.53",
    "20.59", "20.6", "20.60", "21", "21.1", "21.10", "21.2", "21.20", "22", "22.1", "22.11",
    "22.19", "22.2", "22.21", "22.22", "22.23", "22.29", "23", "23.1", "23.11", "23.12", "23.13",
    "23.14", "23.19", "23.2", "23.20", "23.3", "23.31", "23.32", "23.4", "23.41", "23.42", "23.43",
    "23.44", "23.49", "23.5", "23.51", "23.52", "23.6", "23.61", "23.62", "23.63", "23.64",
    "23.65", "23.69", "23.7", "23.70", "23.9", "23.91", "23.99", "24", "24.1", "24.10", "24.2",
    "24.20", "24.3", "24.31", "24.32", "24.33", "24.34", "24.4", "24.41", "24.42", "24.43",
    "24.44", "24.45", "24.46", "24.5", "24.51", "24.52", "24.53", "24.54", "25", "25.1", "25.11",
    "25.12", "25.2", "25.21", "25.29", "25.3", "25.30", "25.4", "25.40", "25.5", "25.50", "25.6",
    "25.61", "25.62", "25.7", "25.71", "25.72", "25.73", "25.9", "25.91", "25.92", "25.93",
    "25.94", "25.99", "26", "26.1", "26.11", "26.12", "26.2", "26.20", "26.3", "26.30", "26.4",
    "26.40", "26.5", "26.51", "26.52", "26.6", "26.60", "26.7", "26.70", "26.8", "26.80", "27",
    "27.1", "27.11", "27.12", "27.2", "27.20", "27.3", "27.31", "27.32", "27.33", "27.4", "27.40",
    "27.5", "27.51", "27.52", "27.9", "27.90", "28", "28.1", "28.11", "28.12", "28.13", "28.14",
    "28.15", "28.2", "28.21", "28.22", "28.23", "28.24", "28.25", "28.29", "28.3", "28.30", "28.4",
    "28.41", "28.49", "28.9", "28.91", "28.92", "28.93", "28.94", "28.95", "28.96", "28.99", "29",
    "29.1", "29.10", "29.2", "29.20", "29.3", "29.31", "29.32", "30", "30.1", "30.11", "30.12",
    "30.2", "30.20", "30.3", "30.30", "30.4", "30.40", "30.9", "30.91", "30.92", "30.99", "31",
    "31.0", "31.01", "31.02", "31.03", "31.09", "32", "32.1", "32.11", "32.12", "32.13", "32.2",
    "32.20", "32.3", "32.30", "32.4", "32.40", "32.5", "32.50", "32.9", "32.91", "32.99", "33",
    "33.1", "33.11", "33.12", "33.13", "33.14", "33.15", "33.16", "33.17", "33.19", "33.2",
    "33.20", "35", "35.1", "35.11", "35.12", "35.13", "35.14", "35.2", "35.21", "35.22", "35.23",
    "35.3", "35.30", "36", "36.0", "36.00", "37", "37.0", "37.00", "38", "38.1", "38.11", "38.12",
    "38.2", "38.21", "38.22", "38.3", "38.31", "38.32", "39", "39.0", "39.00", "41", "41.1",
    "41.10", "41.2", "41.20", "42", "42.1", "42.11", "42.12", "42.13", "42.2", "42.21", "42.22",
    "42.9", "42.91", "42.99", "43", "43.1", "43.11", "43.12", "43.13", "43.2", "43.21", "43.22",
    "43.29", "43.3", "43.31", "43.32", "43.33", "43.34", "43.39", "43.9", "43.91", "43.99", "45",
    "45.1", "45.11", "45.19", "45.2", "45.20", "45.3", "45.31", "45.32", "45.4", "45.40", "46",
    "46.1", "46.11", "46.12", "46.13", "46.14", "46.15", "46.16", "46.17", "46.18", "46.19",
    "46.2", "46.21", "46.22", "46.23", "46.24", "46.3", "46.31", "46.32", "46.33", "46.34",
    "46.35", "46.36", "46.37", "46.38", "46.39", "46.4", "46.41", "46.42", "46.43", "46.44",
    "46.45", "46.46", "46.47", "46.48", "46.49", "46.5", "46.51", "46.52", "46.6", "46.61",
    "46.62", "46.63", "46.64", "46.65", "46.66", "46.69", "46.7", "46.71", "46.72", "46.73",
    "46.74", "46.75", "46.76", "46.77", "46.9", "46.90", "47", "47.1", "47.11", "47.19", "47.2",
    "47.21", "47.22", "47.23", "47.24", "47.25", "47.26", "47.29", "47.3", "47.30", "47.4",
    "47.41", "47.42", "47.43", "47.5", "47.51", "47.52", "47.53", "47.54", "47.59", "47.6",
    "47.61", "47.62", "47.63", "47.64", "47.65", "47.7", "47.71", "47.72", "47.73", "47.74",
    "47.75", "47.76", "47.77", "47.78", "47.79", "47.8", "47.81", "47.82", "47.89", "47.9",
    "47.91", "47.99", "49", "49.1", "49.10", "49.2", "49.20", "49.3", "49.31", "49.32", "49.39",
    "49.4", "49.41", "49.42", "49.5", "49.50", "50", "50.1", "50.10", "50.2", "50.20", "50.3",
    "50.30", "50.4", "50.40", "51", "51.1", "51.10", "51.2", "51.21", "51.22", "52", "52.1",
    "52.10", "52.2", "52.21", "52.22", "52.23", "52.24", "52.29", "53", "53.1", "53.10", "53.2",
    "53.20", "55", "55.1", "55.10", "55.2", "55.20", "55.3", "55.30", "55.9", "55.90", "56",
    "56.1", "56.10", "56.2", "56.21", "56.29", "56.3", "56.30", "58", "58.1", "58.11", "58.12",
    "58.13", "58.14", "58.19", "58.2", "58.21", "58.29", "59", "59.1", "59.11", "59.12", "59.13",
    "59.14", "59.2", "59.20", "60", "60.1", "60.10", "60.2", "60.20", "61", "61.1", "61.10",
    "61.2", "61.20", "61.3", "61.30", "61.9", "61.90", "62", "62.0", "62.01", "62.02", "62.03",
    "62.09", "63", "63.1", "63.11", "63.12", "63.9", "63.91", "63.99", "64", "64.1", "64.11",
    "64.19", "64.2", "64.20", "64.3", "64.30", "64.9", "64.91", "64.92", "64.99", "65", "65.1",
    "65.11", "65.12", "65.2", "65.20", "65.3", "65.30", "66", "66.1", "66.11", "66.12", "66.19",
    "66.2", "66.21", "66.22", "66.29", "66.3", "66.30", "68", "68.1", "68.10", "68.2", "68.20",
    "68.3", "68.31", "68.32", "69", "69.1", "69.10", "69.2", "69.20", "70", "70.1", "70.10",
    "70.2", "70.21", "70.22", "71", "71.1", "71.11", "71.12", "71.2", "71.20", "72", "72.1",
    "72.11", "72.19", "72.2", "72.20", "73", "73.1", "73.11", "73.12", "73.2", "73.20", "74",
    "74.1", "74.10", "74.2", "74.20", "74.3", "74.30", "74.9", "74.90", "75", "75.0", "75.00",
    "77", "77.1", "77.11", "77.12", "77.2", "77.21", "77.22", "77.29", "77.3", "77.31", "77.32",
    "77.33", "77.34", "77.35", "77.39", "77.4", "77.40", "78", "78.1", "78.10", "78.2", "78.20",
    "78.3", "78.30", "79", "79.1", "79.11", "79.12", "79.9", "79.90", "80", "80.1", "80.10",
    "80.2", "80.20", "80.3", "80.30", "81", "81.1", "81.10", "81.2", "81.21", "81.22", "81.29",
    "81.3", "81.30", "82", "82.1", "82.11", "82.19", "82.2", "82.20", "82.3", "82.30", "82.9",
    "82.91", "82.92", "82.99", "84", "84.1", "84.11", "84.12", "84.13", "84.2", "84.21", "84.22",
    "84.23", "84.24", "84.25", "84.3", "84.30", "85", "85.1", "85.10", "85.2", "85.20", "85.3",
    "85.31", "85.32", "85.4", "85.41", "85.42", "85.5", "85.51", "85.52", "85.53", "85.59", "85.6",
    "85.60", "86", "86.1", "86.10", "86.2", "86.21", "86.22", "86.23", "86.9", "86.90", "87",
    "87.1", "87.10", "87.2", "87.20", "87.3", "87.30", "87.9", "87.90", "88", "88.1", "88.10",
    "88.9", "88.91", "88.99", "90", "90.0", "90.01", "90.02", "90.03", "90.04", "91", "91.0",
    "91.01", "91.02", "91.03", "91.04", "92", "92.0", "92.00", "93", "93.1", "93.11", "93.12",
    "93.13", "93.19", "93.2", "93.21", "93.29", "94", "94.1", "94.11", "94.12", "94.2", "94.20",
    "94.9", "94.91", "94.92", "94.99", "95", "95.1", "95.11", "95.12", "95.2", "95.21", "95.22",
    "95.23", "95.24", "95.25", "95.29", "96", "96.0", "96.01", "96.02", "96.03", "96.04", "96.09",
    "97", "97.0", "97.00", "98", "98.1", "98.10", "98.2", "98.20", "99", "99.0", "99.00",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn distinct(values: &[&str]) -> usize {
        values.iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_code_lists_have_no_repeats() {
        assert_eq!(distinct(&ISO_3166_ALPHA_3), ISO_3166_ALPHA_3.len());
        assert_eq!(distinct(&NORDIC_LEGAL_FORMS), NORDIC_LEGAL_FORMS.len());
        assert_eq!(distinct(&NACE_CODES), NACE_CODES.len());
        assert!(ISO_3166_ALPHA_3.iter().all(|c| c.len() == 3));
        assert!(ISO_4217_CURRENCIES.contains(&"EUR"));
    }
}
