//! Static controlled-vocabulary tables.
//!
//! Pure data: code -> display-name lookups built once at first use. Lookups
//! return `None` for unknown codes; callers pass the raw code through.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The one disease code with a friendly name. Everything else passes through.
pub const DISEASE_COVID19: &str = "840539006";

pub fn disease_name(code: &str) -> Option<&'static str> {
    (code == DISEASE_COVID19).then_some("COVID-19")
}

pub fn vaccine_type_name(code: &str) -> Option<&'static str> {
    VACCINE_TYPES.get(code).copied()
}

pub fn vaccine_product_name(code: &str) -> Option<&'static str> {
    VACCINE_PRODUCTS.get(code).copied()
}

pub fn vaccine_manufacturer_name(code: &str) -> Option<&'static str> {
    VACCINE_MANUFACTURERS.get(code).copied()
}

pub fn test_type_name(code: &str) -> Option<&'static str> {
    TEST_TYPES.get(code).copied()
}

pub fn test_device_name(code: &str) -> Option<&'static str> {
    TEST_DEVICES.get(code).copied()
}

pub fn test_result_name(code: &str) -> Option<&'static str> {
    TEST_RESULTS.get(code).copied()
}

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAMES.get(code).copied()
}

static VACCINE_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1119349007", "SARS-CoV-2 mRNA vaccine"),
        ("1119305005", "SARS-CoV-2 antigen vaccine"),
        ("J07BX03", "covid-19 vaccines"),
    ])
});

static VACCINE_PRODUCTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("EU/1/20/1528", "Comirnaty"),
        ("EU/1/20/1507", "COVID-19 Vaccine Moderna"),
        ("EU/1/21/1529", "Vaxzevria"),
        ("EU/1/20/1525", "COVID-19 Vaccine Janssen"),
    ])
});

static VACCINE_MANUFACTURERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ORG-100001699", "AstraZeneca AB"),
        ("ORG-100030215", "Biontech Manufacturing GmbH"),
        ("ORG-100001417", "Janssen-Cilag International"),
        ("ORG-100031184", "Moderna Biotech Spain S.L."),
        ("ORG-100006270", "Curevac AG"),
        ("ORG-100013793", "CanSino Biologics"),
        ("ORG-100020693", "China Sinopharm International Corp. - Beijing location"),
        ("ORG-100010771", "Sinopharm Weiqida Europe Pharmaceutical s.r.o. - Prague location"),
        ("ORG-100024420", "Sinopharm Zhijun (Shenzhen) Pharmaceutical Co. Ltd. - Shenzhen location"),
        ("ORG-100032020", "Novavax CZ AS"),
    ])
});

static TEST_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("LP6464-4", "Nucleic acid amplification with probe detection"),
        ("LP217198-3", "Rapid immunoassay"),
    ])
});

static TEST_RESULTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("260415000", "Not detected"),
        ("260373001", "Detected"),
    ])
});

static TEST_DEVICES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1833", "AAZ-LMB, COVID-VIRO"),
        ("1232", "Abbott Rapid Diagnostics, Panbio COVID-19 Ag Rapid Test"),
        ("1468", "ACON Laboratories, Inc, Flowflex SARS-CoV-2 Antigen rapid test"),
        ("1304", "AMEDA Labordiagnostik GmbH, AMP Rapid Test SARS-CoV-2 Ag"),
        ("1822", "Anbio (Xiamen) Biotechnology Co., Ltd, Rapid COVID-19 Antigen Test(Colloidal Gold)"),
        ("1815", "Anhui Deep Blue Medical Technology Co., Ltd, COVID-19 (SARS-CoV-2) Antigen Test Kit (Colloidal Gold) - Nasal Swab"),
        ("1736", "Anhui Deep Blue Medical Technology Co., Ltd, COVID-19 (SARS-CoV-2) Antigen Test Kit(Colloidal Gold)"),
        ("768", "ArcDia International Ltd, mariPOC SARS-CoV-2"),
        ("1654", "Asan Pharmaceutical CO., LTD, Asan Easy Test COVID-19 Ag"),
        ("2010", "Atlas Link Technology Co., Ltd., NOVA Test® SARS-CoV-2 Antigen Rapid Test Kit (Colloidal Gold Immunochromatography)"),
        ("1906", "Azure Biotech Inc, COVID-19 Antigen Rapid Test Device"),
        ("1870", "Beijing Hotgen Biotech Co., Ltd, Novel Coronavirus 2019-nCoV Antigen Test (Colloidal Gold)"),
        ("1331", "Beijing Lepu Medical Technology Co., Ltd, SARS-CoV-2 Antigen Rapid Test Kit"),
        ("1484", "Beijing Wantai Biological Pharmacy Enterprise Co., Ltd, Wantai SARS-CoV-2 Ag Rapid Test (FIA)"),
        ("1223", "BIOSYNEX S.A., BIOSYNEX COVID-19 Ag BSS"),
        ("1236", "BTNX Inc, Rapid Response COVID-19 Antigen Rapid Test"),
        ("1173", "CerTest Biotec, CerTest SARS-CoV-2 Card test"),
        ("1919", "Core Technology Co., Ltd, Coretests COVID-19 Ag Test"),
        ("1225", "DDS DIAGNOSTIC, Test Rapid Covid-19 Antigen (tampon nazofaringian)"),
        ("1375", "DIALAB GmbH, DIAQUICK COVID-19 Ag Cassette"),
        ("1244", "GenBody, Inc, Genbody COVID-19 Ag Test"),
        ("1253", "GenSure Biotech Inc, GenSure COVID-19 Antigen Rapid Kit (REF: P2004)"),
        ("1144", "Green Cross Medical Science Corp., GENEDIA W COVID-19 Ag"),
        ("1747", "Guangdong Hecin Scientific, Inc., 2019-nCoV Antigen Test Kit (colloidal gold method)"),
        ("1360", "Guangdong Wesail Biotech Co., Ltd, COVID-19 Ag Test Kit"),
        ("1437", "Guangzhou Wondfo Biotech Co., Ltd, Wondfo 2019-nCoV Antigen Test (Lateral Flow Method)"),
        ("1256", "Hangzhou AllTest Biotech Co., Ltd, COVID-19 and Influenza A+B Antigen Combo Rapid Test"),
        ("1363", "Hangzhou Clongene Biotech Co., Ltd, Covid-19 Antigen Rapid Test Kit"),
        ("1365", "Hangzhou Clongene Biotech Co., Ltd, COVID-19/Influenza A+B Antigen Combo Rapid Test"),
        ("1844", "Hangzhou Immuno Biotech Co.,Ltd, Immunobio SARS-CoV-2 Antigen ANTERIOR NASAL Rapid Test Kit (minimal invasive)"),
        ("1215", "Hangzhou Laihe Biotech Co., Ltd, LYHER Novel Coronavirus (COVID-19) Antigen Test Kit(Colloidal Gold)"),
        ("1392", "Hangzhou Testsea Biotechnology Co., Ltd, COVID-19 Antigen Test Cassette"),
        ("1767", "Healgen Scientific, Coronavirus Ag Rapid Test Cassette"),
        ("1263", "Humasis, Humasis COVID-19 Ag Test"),
        ("1333", "Joinstar Biomedical Technology Co., Ltd, COVID-19 Rapid Antigen Test (Colloidal Gold)"),
        ("1764", "JOYSBIO (Tianjin) Biotechnology Co., Ltd, SARS-CoV-2 Antigen Rapid Test Kit (Colloidal Gold)"),
        ("1266", "Labnovation Technologies Inc, SARS-CoV-2 Antigen Rapid Test Kit"),
        ("1267", "LumiQuick Diagnostics Inc, QuickProfile COVID-19 Antigen Test"),
        ("1268", "LumiraDX, LumiraDx SARS-CoV-2 Ag Test"),
        ("1180", "MEDsan GmbH, MEDsan SARS-CoV-2 Antigen Rapid Test"),
        ("1190", "möLab, COVID-19 Rapid Antigen Test"),
        ("1481", "MP Biomedicals, Rapid SARS-CoV-2 Antigen Test Card"),
        ("1162", "Nal von minden GmbH, NADAL COVID-19 Ag Test"),
        ("1420", "NanoEntek, FREND COVID-19 Ag"),
        ("1199", "Oncosem Onkolojik Sistemler San. ve Tic. A.S., CAT"),
        ("308", "PCL Inc, PCL COVID19 Ag Rapid FIA"),
        ("1271", "Precision Biosensor, Inc, Exdia COVID-19 Ag"),
        ("1341", "Qingdao Hightop Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test (Immunochromatography)"),
        ("1097", "Quidel Corporation, Sofia SARS Antigen FIA"),
        ("1606", "RapiGEN Inc, BIOCREDIT COVID-19 Ag - SARS-CoV 2 Antigen test"),
        ("1604", "Roche (SD BIOSENSOR), SARS-CoV-2 Antigen Rapid Test"),
        ("1489", "Safecare Biotech (Hangzhou) Co. Ltd, COVID-19 Antigen Rapid Test Kit (Swab)"),
        ("1490", "Safecare Biotech (Hangzhou) Co. Ltd, Multi-Respiratory Virus Antigen Test Kit(Swab)  (Influenza A+B/ COVID-19)"),
        ("344", "SD BIOSENSOR Inc, STANDARD F COVID-19 Ag FIA"),
        ("345", "SD BIOSENSOR Inc, STANDARD Q COVID-19 Ag Test"),
        ("1319", "SGA Medikal, V-Chek SARS-CoV-2 Ag Rapid Test Kit (Colloidal Gold)"),
        ("2017", "Shenzhen Ultra-Diagnostics Biotec.Co.,Ltd, SARS-CoV-2 Antigen Test Kit"),
        ("1246", "VivaChek Biotech (Hangzhou) Co., Ltd, Vivadiag SARS CoV 2 Ag Rapid Test"),
        ("1763", "Xiamen AmonMed Biotechnology Co., Ltd, COVID-19 Antigen Rapid Test Kit (Colloidal Gold)"),
        ("1278", "Xiamen Boson Biotech Co. Ltd, Rapid SARS-CoV-2 Antigen Test Card"),
        ("1456", "Xiamen Wiz Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test"),
        ("1884", "Xiamen Wiz Biotech Co., Ltd, SARS-CoV-2 Antigen Rapid Test (Colloidal Gold)"),
        ("1296", "Zhejiang Anji Saianfu Biotech Co., Ltd, AndLucky COVID-19 Antigen Rapid Test"),
        ("1295", "Zhejiang Anji Saianfu Biotech Co., Ltd, reOpenTest COVID-19 Antigen Rapid Test"),
        ("1343", "Zhezhiang Orient Gene Biotech Co., Ltd, Coronavirus Ag Rapid Test Cassette (Swab)"),
    ])
});

// Countries participating in the EU DCC trust framework; other ISO 3166-1
// codes pass through as-is.
static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AT", "Austria"),
        ("BE", "Belgium"),
        ("BG", "Bulgaria"),
        ("HR", "Croatia"),
        ("CY", "Cyprus"),
        ("CZ", "Czechia"),
        ("DK", "Denmark"),
        ("EE", "Estonia"),
        ("FI", "Finland"),
        ("FR", "France"),
        ("DE", "Germany"),
        ("GR", "Greece"),
        ("HU", "Hungary"),
        ("IE", "Ireland"),
        ("IT", "Italy"),
        ("LV", "Latvia"),
        ("LT", "Lithuania"),
        ("LU", "Luxembourg"),
        ("MT", "Malta"),
        ("NL", "Netherlands"),
        ("PL", "Poland"),
        ("PT", "Portugal"),
        ("RO", "Romania"),
        ("SK", "Slovakia"),
        ("SI", "Slovenia"),
        ("ES", "Spain"),
        ("SE", "Sweden"),
        ("IS", "Iceland"),
        ("LI", "Liechtenstein"),
        ("NO", "Norway"),
        ("CH", "Switzerland"),
        ("AD", "Andorra"),
        ("AL", "Albania"),
        ("AM", "Armenia"),
        ("CV", "Cabo Verde"),
        ("FO", "Faroe Islands"),
        ("GB", "United Kingdom"),
        ("GE", "Georgia"),
        ("IL", "Israel"),
        ("JO", "Jordan"),
        ("LB", "Lebanon"),
        ("MA", "Morocco"),
        ("MC", "Monaco"),
        ("MD", "Moldova"),
        ("ME", "Montenegro"),
        ("MK", "North Macedonia"),
        ("NZ", "New Zealand"),
        ("PA", "Panama"),
        ("RS", "Serbia"),
        ("SG", "Singapore"),
        ("SM", "San Marino"),
        ("TG", "Togo"),
        ("TH", "Thailand"),
        ("TN", "Tunisia"),
        ("TR", "Turkey"),
        ("TW", "Taiwan"),
        ("UA", "Ukraine"),
        ("UY", "Uruguay"),
        ("VA", "Holy See"),
    ])
});
