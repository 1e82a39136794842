//! Code tables shared with the front-end selection widgets
//!
//! Each table maps a short code to a display name. The same data is served as
//! JSON and as the `iemdata` client script.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::Serialize;
use utoipa::ToSchema;

pub type Entry = (&'static str, &'static str);

pub const NWS_PRODUCTS: &[Entry] = &[
    ("AFD", "Area Forecast Discussion"),
    ("HWO", "Hazardous Weather Outlook"),
    ("NOW", "Nowcast"),
];

pub const VTEC_PHENOMENA: &[Entry] = &[
    ("SV", "Severe Thunderstorm"),
    ("TO", "Tornado"),
    ("MA", "Marine"),
    ("AF", "Volcanic Ashfall"),
    ("AS", "Air Stagnation"),
    ("AV", "Avalanche"),
    ("BS", "Blowing Snow"),
    ("BW", "Brisk Wind"),
    ("BZ", "Blizzard"),
    ("CF", "Coastal Flood"),
    ("DU", "Blowing Dust"),
    ("DS", "Dust Storm"),
    ("EC", "Extreme Cold"),
    ("EH", "Excessive Heat"),
    ("EW", "Extreme Wind"),
    ("FA", "Areal Flood"),
    ("FF", "Flash Flood"),
    ("FL", "Flood"),
    ("FR", "Frost"),
    ("FZ", "Freeze"),
    ("FG", "Dense Fog"),
    ("FW", "Red Flag"),
    ("GL", "Gale"),
    ("HF", "Hurricane Force Wind"),
    ("HI", "Inland Hurricane Wind"),
    ("HS", "Heavy Snow"),
    ("HP", "Heavy Sleet"),
    ("HT", "Heat"),
    ("HU", "Hurricane"),
    ("HW", "High Wind"),
    ("HY", "Hydrologic"),
    ("HZ", "Hard Freeze"),
    ("IS", "Ice Storm"),
    ("IP", "Sleet"),
    ("LB", "Lake Effect Snow and Blowing Snow"),
    ("LE", "Lake Effect Snow"),
    ("LO", "Low Water"),
    ("LS", "Lakeshore Flood"),
    ("LW", "Lake Wind"),
    ("RB", "Small Craft for Rough Bar"),
    ("RH", "Radiological Hazard"),
    ("SB", "Snow and Blowing Snow"),
    ("SC", "Small Craft"),
    ("SE", "Hazardous Seas"),
    ("SI", "Small Craft for Winds"),
    ("SM", "Dense Smoke"),
    ("SN", "Snow"),
    ("SR", "Storm"),
    ("SU", "High Surf"),
    ("TI", "Inland Tropical Storm Wind"),
    ("TR", "Tropical Storm"),
    ("TS", "Tsunami"),
    ("TY", "Typhoon"),
    ("UP", "Ice Accretion"),
    ("VO", "Volcano"),
    ("WC", "Wind Chill"),
    ("WI", "Wind"),
    ("WS", "Winter Storm"),
    ("WW", "Winter Weather"),
    ("ZF", "Freezing Fog"),
    ("ZR", "Freezing Rain"),
    ("ZY", "Freezing Spray"),
];

pub const VTEC_SIGNIFICANCE: &[Entry] = &[
    ("W", "Warning"),
    ("Y", "Advisory"),
    ("A", "Watch"),
    ("S", "Statement"),
    ("F", "Forecast"),
    ("O", "Outlook"),
    ("N", "Synopsis"),
];

pub const WFOS: &[Entry] = &[
    ("ABQ", "ALBUQUERQUE"),
    ("ABR", "ABERDEEN"),
    ("AFC", "ANCHORAGE"),
    ("AFG", "FAIRBANKS"),
    ("AJK", "JUNEAU"),
    ("AKQ", "WAKEFIELD"),
    ("ALY", "ALBANY"),
    ("AMA", "AMARILLO"),
    ("APX", "GAYLORD"),
    ("ARX", "LA_CROSSE"),
    ("BGM", "BINGHAMTON"),
    ("BIS", "BISMARCK"),
    ("BMX", "BIRMINGHAM"),
    ("BOI", "BOISE"),
    ("BOU", "DENVER"),
    ("BOX", "TAUNTON"),
    ("BRO", "BROWNSVILLE"),
    ("BTV", "BURLINGTON"),
    ("BUF", "BUFFALO"),
    ("BYZ", "BILLINGS"),
    ("CAE", "COLUMBIA"),
    ("CAR", "CARIBOU"),
    ("CHS", "CHARLESTON"),
    ("CLE", "CLEVELAND"),
    ("CRP", "CORPUS_CHRISTI"),
    ("CTP", "STATE_COLLEGE"),
    ("CYS", "CHEYENNE"),
    ("DDC", "DODGE_CITY"),
    ("DLH", "DULUTH"),
    ("DMX", "DES_MOINES"),
    ("DTX", "DETROIT"),
    ("DVN", "QUAD_CITIES_IA"),
    ("EAX", "KANSAS_CITY/PLEASANT_HILL"),
    ("EKA", "EUREKA"),
    ("EPZ", "EL_PASO_TX/SANTA_TERESA"),
    ("EWX", "AUSTIN/SAN_ANTONIO"),
    ("EYW", "KEY WEST (EYW, pre 5/18/06)"),
    ("FFC", "PEACHTREE_CITY"),
    ("FGF", "EASTERN_NORTH_DAKOTA"),
    ("FGZ", "FLAGSTAFF"),
    ("FSD", "SIOUX_FALLS"),
    ("FWD", "DALLAS/FORT_WORTH"),
    ("GGW", "GLASGOW"),
    ("GID", "HASTINGS"),
    ("GJT", "GRAND_JUNCTION"),
    ("GLD", "GOODLAND"),
    ("GRB", "GREEN_BAY"),
    ("GRR", "GRAND_RAPIDS"),
    ("GSP", "GREENVILLE/SPARTANBURG"),
    ("GYX", "GRAY"),
    ("HFO", "HONOLULU"),
    ("HGX", "HOUSTON/GALVESTON"),
    ("HNX", "SAN_JOAQUIN_VALLEY/HANFORD"),
    ("HUN", "HUNTSVILLE"),
    ("ICT", "WICHITA"),
    ("ILM", "WILMINGTON"),
    ("ILN", "WILMINGTON"),
    ("ILX", "LINCOLN"),
    ("IND", "INDIANAPOLIS"),
    ("IWX", "NORTHERN_INDIANA"),
    ("JAN", "JACKSON"),
    ("JAX", "JACKSONVILLE"),
    ("JKL", "JACKSON"),
    ("KEY", "KEY WEST (KEY, post 5/18/06)"),
    ("LBF", "NORTH_PLATTE"),
    ("LCH", "LAKE_CHARLES"),
    ("LIX", "NEW_ORLEANS"),
    ("LKN", "ELKO"),
    ("LMK", "LOUISVILLE"),
    ("LOT", "CHICAGO"),
    ("LOX", "LOS_ANGELES/OXNARD"),
    ("LSX", "ST_LOUIS"),
    ("LUB", "LUBBOCK"),
    ("LWX", "BALTIMORE_MD/_WASHINGTON_DC"),
    ("LZK", "LITTLE_ROCK"),
    ("MAF", "MIDLAND/ODESSA"),
    ("MEG", "MEMPHIS"),
    ("MFL", "MIAMI"),
    ("MFR", "MEDFORD"),
    ("MHX", "NEWPORT/MOREHEAD_CITY"),
    ("MKX", "MILWAUKEE/SULLIVAN"),
    ("MLB", "MELBOURNE"),
    ("MOB", "MOBILE"),
    ("MPX", "TWIN_CITIES/CHANHASSEN"),
    ("MQT", "MARQUETTE"),
    ("MRX", "MORRISTOWN"),
    ("MSO", "MISSOULA"),
    ("MTR", "SAN_FRANCISCO"),
    ("OAX", "OMAHA/VALLEY"),
    ("OHX", "NASHVILLE"),
    ("OKX", "NEW_YORK"),
    ("OTX", "SPOKANE"),
    ("OUN", "NORMAN"),
    ("PAH", "PADUCAH"),
    ("PBZ", "PITTSBURGH"),
    ("PDT", "PENDLETON"),
    ("PHI", "MOUNT_HOLLY"),
    ("PIH", "POCATELLO/IDAHO_FALLS"),
    ("PQR", "PORTLAND"),
    ("PSR", "PHOENIX"),
    ("PUB", "PUEBLO"),
    ("RAH", "RALEIGH"),
    ("REV", "RENO"),
    ("RIW", "RIVERTON"),
    ("RLX", "CHARLESTON"),
    ("RNK", "BLACKSBURG"),
    ("SEW", "SEATTLE"),
    ("SGF", "SPRINGFIELD"),
    ("SGX", "SAN_DIEGO"),
    ("SHV", "SHREVEPORT"),
    ("SJT", "SAN_ANGELO"),
    ("SJU", "SAN_JUAN"),
    ("SLC", "SALT_LAKE_CITY"),
    ("STO", "SACRAMENTO"),
    ("TAE", "TALLAHASSEE"),
    ("TBW", "TAMPA_BAY_AREA/RUSKIN"),
    ("TFX", "GREAT_FALLS"),
    ("TOP", "TOPEKA"),
    ("TSA", "TULSA"),
    ("TWC", "TUCSON"),
    ("UNR", "RAPID_CITY"),
    ("VEF", "LAS_VEGAS"),
];

pub const US_STATES: &[Entry] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Tables the front end can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTable {
    NwsProducts,
    VtecPhenomena,
    VtecSignificance,
    Wfos,
    States,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReferenceEntry {
    pub code: &'static str,
    pub name: &'static str,
}

impl ReferenceTable {
    pub const ALL: [ReferenceTable; 5] = [
        ReferenceTable::NwsProducts,
        ReferenceTable::VtecPhenomena,
        ReferenceTable::VtecSignificance,
        ReferenceTable::Wfos,
        ReferenceTable::States,
    ];

    pub fn entries(&self) -> &'static [Entry] {
        match self {
            ReferenceTable::NwsProducts => NWS_PRODUCTS,
            ReferenceTable::VtecPhenomena => VTEC_PHENOMENA,
            ReferenceTable::VtecSignificance => VTEC_SIGNIFICANCE,
            ReferenceTable::Wfos => WFOS,
            ReferenceTable::States => US_STATES,
        }
    }

    /// Identifier used in URLs
    pub fn slug(&self) -> &'static str {
        match self {
            ReferenceTable::NwsProducts => "nws_products",
            ReferenceTable::VtecPhenomena => "vtec_phenomena",
            ReferenceTable::VtecSignificance => "vtec_significance",
            ReferenceTable::Wfos => "wfos",
            ReferenceTable::States => "states",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReferenceTable::NwsProducts => "NWS Products",
            ReferenceTable::VtecPhenomena => "VTEC Phenomena",
            ReferenceTable::VtecSignificance => "VTEC Significance",
            ReferenceTable::Wfos => "Weather Forecast Offices",
            ReferenceTable::States => "U.S. States",
        }
    }

    /// Property name on the client side `iemdata` namespace
    fn script_name(&self) -> &'static str {
        match self {
            ReferenceTable::NwsProducts => "nws_products",
            ReferenceTable::VtecPhenomena => "vtec_phenomena_dict",
            ReferenceTable::VtecSignificance => "vtec_sig_dict",
            ReferenceTable::Wfos => "wfos",
            ReferenceTable::States => "states",
        }
    }

    /// Combo box store wrapping the table, for the tables the VTEC widgets use
    fn store_name(&self) -> Option<&'static str> {
        match self {
            ReferenceTable::VtecPhenomena => Some("vtecPhenomenaStore"),
            ReferenceTable::VtecSignificance => Some("vtecSignificanceStore"),
            _ => None,
        }
    }

    pub fn rows(&self) -> Vec<ReferenceEntry> {
        self.entries()
            .iter()
            .map(|&(code, name)| ReferenceEntry { code, name })
            .collect()
    }

    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReferenceTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceTable::ALL
            .into_iter()
            .find(|table| table.slug() == s)
            .ok_or_else(|| format!("unknown reference table: {}", s))
    }
}

/// Human readable name for a network id, `IA_ASOS` becomes `Iowa ASOS`
pub fn network_label(network: &str) -> String {
    if network == "ISUSM" {
        return String::from("ISU Soil Moisture");
    }
    if let Some((state, kind)) = network.split_once('_') {
        if let Some(name) = ReferenceTable::States.lookup(state) {
            return format!("{} {}", name, kind);
        }
    }
    if let Some(state) = network.strip_suffix("CLIMATE") {
        if let Some(name) = ReferenceTable::States.lookup(state) {
            return format!("{} Climate", name);
        }
    }
    network.to_string()
}

/// Client script defining every table under the `iemdata` namespace
pub fn reference_script() -> String {
    let mut script = String::from("Ext.namespace('iemdata');\n");

    for table in ReferenceTable::ALL {
        let rows = table
            .entries()
            .iter()
            .map(|(code, name)| format!(" [{},{}]", js_string(code), js_string(name)))
            .join(",\n");
        script.push_str(&format!(
            "\niemdata.{} = [\n{}\n];\n",
            table.script_name(),
            rows
        ));

        if let Some(store) = table.store_name() {
            script.push_str(&format!(
                "\niemdata.{} = new Ext.data.SimpleStore({{\n  fields : ['abbr', 'name'],\n  idIndex: 0,\n  data   : iemdata.{}\n}});\n",
                store,
                table.script_name()
            ));
        }
    }

    script
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}
