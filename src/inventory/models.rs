// src/inventory/models.rs
use serde::{Serialize, Serializer};
use std::fmt;

/// A table the exporter writes: one file, one fixed header.
pub trait TableRow: Serialize {
    /// File name of the table inside the output directory.
    const FILE_NAME: &'static str;
    /// Literal header row, in serialization order.
    const HEADERS: &'static [&'static str];
}

/// Federal site identifier.
///
/// Mostly numeric-looking ("00012345") but alphanumeric for some sites, so it is
/// never parsed. It serializes as a quoted token (`"00012345"`) to stop
/// spreadsheet tools from reinterpreting it as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as it appears in an output cell.
    pub fn text_token(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SiteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text_token())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingOrganization {
    pub code: String,
    pub name: String,
}

impl TableRow for ReportingOrganization {
    const FILE_NAME: &'static str = "reporting_organization.csv";
    const HEADERS: &'static [&'static str] = &["ReportingOrganizationCode", "ReportingOrganizationName"];
}

/// One row per `<Site>`. Optional fields hold an empty string when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    pub federal_site_id: SiteId,
    pub reporting_organization_code: String,
    pub created: String,
    pub last_modified: String,
    pub name: String,
    pub site_status: String,
    pub status_description: String,
    pub classification_code: String,
    pub classification_name: String,
    pub property_number: String,
    pub reason_for_federal_involvement: String,
    pub location_sgc_code: String,
    pub location_fed_code: String,
    pub location_mini_map_url: String,
    pub location_latitude: String,
    pub location_longitude: String,
    pub location_municipality: String,
    pub location_province: String,
    pub location_federal_electoral_district: String,
    pub location_country: String,
    pub contamination_estimate_cubic_metres: String,
    pub contamination_estimate_hectares: String,
    pub contamination_estimate_tons: String,
    pub action_plan: String,
    pub additional_information: String,
    pub population_km1: String,
    pub population_km5: String,
    pub population_km10: String,
    pub population_km25: String,
    pub population_km50: String,
}

impl TableRow for Site {
    const FILE_NAME: &'static str = "site.csv";
    const HEADERS: &'static [&'static str] = &[
        "FederalSiteID",
        "ReportingOrganizationCode",
        "Created",
        "LastModified",
        "Name",
        "SiteStatus",
        "StatusDescription",
        "ClassificationCode",
        "ClassificationName",
        "PropertyNumber",
        "ReasonForFederalInvolvement",
        "LocationSGCCode",
        "LocationFEDCode",
        "LocationMiniMapURL",
        "LocationLatitude",
        "LocationLongitude",
        "LocationMunicipality",
        "LocationProvince",
        "LocationFederalElectoralDistrict",
        "LocationCountry",
        "ContaminationEstimateCubicMetres",
        "ContaminationEstimateHectares",
        "ContaminationEstimateTons",
        "ActionPlan",
        "AdditionalInformation",
        "PopulationKM1",
        "PopulationKM5",
        "PopulationKM10",
        "PopulationKM25",
        "PopulationKM50",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagementStrategyEntry {
    pub federal_site_id: SiteId,
    pub management_type_code: String,
    pub management_type_name: String,
}

impl TableRow for ManagementStrategyEntry {
    const FILE_NAME: &'static str = "management_strategy.csv";
    const HEADERS: &'static [&'static str] = &["FederalSiteID", "ManagementTypeCode", "ManagementTypeName"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContaminatedMediumEntry {
    pub federal_site_id: SiteId,
    pub contamination_code: String,
    pub contamination_name: String,
    pub contaminated_medium_code: String,
    pub contaminated_medium_name: String,
}

impl TableRow for ContaminatedMediumEntry {
    const FILE_NAME: &'static str = "contaminated_medium.csv";
    const HEADERS: &'static [&'static str] = &[
        "FederalSiteID",
        "ContaminationCode",
        "ContaminationName",
        "ContaminatedMediumCode",
        "ContaminatedMediumName",
    ];
}

/// One fiscal year of financial and remediation progress for a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualDataEntry {
    pub federal_site_id: SiteId,
    pub fiscal_year: String,
    pub reporting_organization_code: String,
    pub highest_step_completed: String,
    pub total_assessment_expenditure: String,
    pub total_remediation_expenditure: String,
    pub total_care_maintenance_expenditure: String,
    pub total_monitoring_expenditure: String,
    pub fcsap_assessment_expenditure: String,
    pub fcsap_remediation_expenditure: String,
    pub fcsap_care_maintenance_expenditure: String,
    pub fcsap_monitoring_expenditure: String,
    pub remediation_amount_cubic_metres: String,
    pub remediation_amount_hectares: String,
    pub remediation_amount_tons: String,
    pub closed: String,
}

impl TableRow for AnnualDataEntry {
    const FILE_NAME: &'static str = "annual_data.csv";
    const HEADERS: &'static [&'static str] = &[
        "FederalSiteID",
        "FiscalYear",
        "ReportingOrganizationCode",
        "HighestStepCompleted",
        "TotalAssessmentExpenditure",
        "TotalRemediationExpenditure",
        "TotalCareMaintenanceExpenditure",
        "TotalMonitoringExpenditure",
        "FCSAPAssessmentExpenditure",
        "FCSAPRemediationExpenditure",
        "FCSAPCareMaintenanceExpenditure",
        "FCSAPMonitoringExpenditure",
        "RemediationAmountCubicMetres",
        "RemediationAmountHectares",
        "RemediationAmountTons",
        "Closed",
    ];
}

/// Every row sequence produced from one document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlattenedInventory {
    pub reporting_organizations: Vec<ReportingOrganization>,
    pub sites: Vec<Site>,
    pub management_strategies: Vec<ManagementStrategyEntry>,
    pub contaminated_media: Vec<ContaminatedMediumEntry>,
    pub annual_data: Vec<AnnualDataEntry>,
}
