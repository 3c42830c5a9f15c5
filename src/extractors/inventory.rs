// src/extractors/inventory.rs

// --- Imports ---
use crate::extractors::resolve::{find_child, find_children, optional_text, required_attr, required_child, required_text};
use crate::inventory::models::{
    AnnualDataEntry, ContaminatedMediumEntry, FlattenedInventory, ManagementStrategyEntry, ReportingOrganization,
    Site, SiteId,
};
use crate::inventory::Language;
use crate::utils::error::ExtractError;
use roxmltree::{Document, Node};

// --- Element names ---
const ORGANIZATIONS: &str = "ReportingOrganizations";
const ORGANIZATION: &str = "ReportingOrganization";
const SITES: &str = "Sites";
const SITE: &str = "Site";
const ANNUAL_DATA: &str = "AnnualData";

// --- Main Extractor Structure ---
/// Flattens the inventory tree into relational rows.
///
/// Every table is extracted independently from a read-only document, so the
/// per-table methods can be called in any order.
pub struct InventoryExtractor {
    language: Language,
}

impl InventoryExtractor {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Produces every table from the document.
    pub fn flatten(&self, document: &Document) -> Result<FlattenedInventory, ExtractError> {
        let root = document.root_element();
        tracing::info!("Flattening inventory (language {})", self.language.tag());

        let inventory = FlattenedInventory {
            reporting_organizations: self.reporting_organizations(root)?,
            sites: self.sites(root)?,
            management_strategies: self.management_strategies(root)?,
            contaminated_media: self.contaminated_media(root)?,
            annual_data: self.annual_data(root)?,
        };

        tracing::info!(
            "Flattened {} organizations, {} sites, {} management strategies, {} contaminated media, {} annual data rows",
            inventory.reporting_organizations.len(),
            inventory.sites.len(),
            inventory.management_strategies.len(),
            inventory.contaminated_media.len(),
            inventory.annual_data.len()
        );
        Ok(inventory)
    }

    /// One row per `ReportingOrganizations/ReportingOrganization`.
    pub fn reporting_organizations(&self, root: Node) -> Result<Vec<ReportingOrganization>, ExtractError> {
        find_children(root, ORGANIZATIONS)
            .flat_map(|orgs| find_children(orgs, ORGANIZATION))
            .map(|org| -> Result<_, ExtractError> {
                Ok(ReportingOrganization {
                    code: required_text(org, &["Code"])?,
                    name: required_text(org, &[self.language.tag()])?,
                })
            })
            .collect()
    }

    /// One row per `<Site>`.
    pub fn sites(&self, root: Node) -> Result<Vec<Site>, ExtractError> {
        site_nodes(root).map(|site| self.site(site)).collect()
    }

    /// Builds the main record for a single `<Site>` node.
    pub fn site(&self, site: Node) -> Result<Site, ExtractError> {
        let lang = self.language.tag();
        let location = required_child(site, "Location")?;

        let row = Site {
            // Guaranteed fields: a miss here means the format changed.
            federal_site_id: site_id(site)?,
            reporting_organization_code: required_attr(site, "ReportingOrganization")?,
            created: required_attr(site, "Created")?,
            last_modified: required_attr(site, "LastModified")?,
            name: optional_text(site, &["Name", lang]),
            site_status: required_text(site, &["SiteStatus", "Status", lang])?,
            status_description: required_text(site, &["SiteStatus", "Description", lang])?,
            classification_code: optional_text(site, &["Classification", "Code"]),
            classification_name: optional_text(site, &["Classification", "Name", lang]),
            property_number: optional_text(site, &["PropertyNumber"]),
            reason_for_federal_involvement: required_text(site, &["ReasonForFederalInvolvement", lang])?,
            location_sgc_code: required_attr(location, "sgc")?,
            location_fed_code: required_attr(location, "fed")?,
            // Coordinates are passed through as found, even when a map URL exists without them.
            location_mini_map_url: optional_text(location, &["MiniMapURL"]),
            location_latitude: optional_text(location, &["Latitude"]),
            location_longitude: optional_text(location, &["Longitude"]),
            location_municipality: optional_text(location, &["Municipality"]),
            location_province: optional_text(location, &["Province"]),
            location_federal_electoral_district: optional_text(location, &["FederalElectoralDistrict", lang]),
            location_country: required_text(location, &["Country", lang])?,
            contamination_estimate_cubic_metres: optional_text(
                site,
                &["ContaminationDetails", "ContaminationEstimates", "CubicMetres"],
            ),
            contamination_estimate_hectares: optional_text(
                site,
                &["ContaminationDetails", "ContaminationEstimates", "Hectares"],
            ),
            contamination_estimate_tons: optional_text(site, &["ContaminationDetails", "ContaminationEstimates", "Tons"]),
            action_plan: optional_text(site, &["ActionPlan", lang]),
            additional_information: optional_text(site, &["AdditionalInformation", lang]),
            population_km1: optional_text(site, &["PopulationCounts", "KM1"]),
            population_km5: optional_text(site, &["PopulationCounts", "KM5"]),
            population_km10: optional_text(site, &["PopulationCounts", "KM10"]),
            population_km25: optional_text(site, &["PopulationCounts", "KM25"]),
            population_km50: optional_text(site, &["PopulationCounts", "KM50"]),
        };

        tracing::trace!("Extracted site {}", row.federal_site_id);
        Ok(row)
    }

    pub fn management_strategies(&self, root: Node) -> Result<Vec<ManagementStrategyEntry>, ExtractError> {
        collect_per_site(root, |site| self.site_management_strategies(site))
    }

    /// Rows for one site's `ManagementStrategy` block; none if the block is absent.
    pub fn site_management_strategies(&self, site: Node) -> Result<Vec<ManagementStrategyEntry>, ExtractError> {
        let Some(strategy) = find_child(site, "ManagementStrategy") else {
            return Ok(Vec::new());
        };
        let federal_site_id = site_id(site)?;

        find_children(strategy, "ManagementType")
            .map(|management_type| -> Result<_, ExtractError> {
                Ok(ManagementStrategyEntry {
                    federal_site_id: federal_site_id.clone(),
                    management_type_code: required_attr(management_type, "code")?,
                    management_type_name: required_text(management_type, &[self.language.tag()])?,
                })
            })
            .collect()
    }

    pub fn contaminated_media(&self, root: Node) -> Result<Vec<ContaminatedMediumEntry>, ExtractError> {
        collect_per_site(root, |site| self.site_contaminated_media(site))
    }

    /// Rows for one site's `ContaminationDetails/ContaminatedMedia` entries.
    /// Entries themselves are assumed well formed once present.
    pub fn site_contaminated_media(&self, site: Node) -> Result<Vec<ContaminatedMediumEntry>, ExtractError> {
        let Some(details) = find_child(site, "ContaminationDetails") else {
            return Ok(Vec::new());
        };
        let lang = self.language.tag();
        let federal_site_id = site_id(site)?;

        find_children(details, "ContaminatedMedia")
            .map(|entry| -> Result<_, ExtractError> {
                let contamination = required_child(entry, "Contamination")?;
                let medium = required_child(entry, "Medium")?;
                Ok(ContaminatedMediumEntry {
                    federal_site_id: federal_site_id.clone(),
                    contamination_code: required_attr(contamination, "code")?,
                    contamination_name: required_text(contamination, &[lang])?,
                    contaminated_medium_code: required_attr(medium, "code")?,
                    contaminated_medium_name: required_text(medium, &[lang])?,
                })
            })
            .collect()
    }

    pub fn annual_data(&self, root: Node) -> Result<Vec<AnnualDataEntry>, ExtractError> {
        collect_per_site(root, |site| self.site_annual_data(site))
    }

    /// One row per `<AnnualData>` child of the site.
    pub fn site_annual_data(&self, site: Node) -> Result<Vec<AnnualDataEntry>, ExtractError> {
        let federal_site_id = site_id(site)?;
        let mut rows = Vec::new();

        for year in find_children(site, ANNUAL_DATA) {
            rows.push(AnnualDataEntry {
                federal_site_id: federal_site_id.clone(),
                fiscal_year: required_attr(year, "FiscalYear")?,
                reporting_organization_code: required_attr(year, "ReportingOrganization")?,
                highest_step_completed: required_text(year, &["HighestStepCompleted"])?,
                total_assessment_expenditure: required_text(year, &["TotalAssessmentExpenditure"])?,
                total_remediation_expenditure: required_text(year, &["TotalRemediationExpenditure"])?,
                total_care_maintenance_expenditure: required_text(year, &["TotalCareMaintenanceExpenditure"])?,
                total_monitoring_expenditure: required_text(year, &["TotalMonitoringExpenditure"])?,
                fcsap_assessment_expenditure: required_text(year, &["FCSAPAssessmentExpenditure"])?,
                fcsap_remediation_expenditure: required_text(year, &["FCSAPRemediationExpenditure"])?,
                fcsap_care_maintenance_expenditure: required_text(year, &["FCSAPCareMaintenanceExpenditure"])?,
                fcsap_monitoring_expenditure: required_text(year, &["FCSAPMonitoringExpenditure"])?,
                // The whole RemediationAmounts block may be missing for a year.
                remediation_amount_cubic_metres: optional_text(year, &["RemediationAmounts", "CubicMetres"]),
                remediation_amount_hectares: optional_text(year, &["RemediationAmounts", "Hectares"]),
                remediation_amount_tons: optional_text(year, &["RemediationAmounts", "Tons"]),
                closed: required_text(year, &["Closed"])?,
            });
        }

        Ok(rows)
    }
}

// --- Helpers ---

/// Every `Sites/Site` node under the root, in document order.
fn site_nodes<'a, 'input: 'a>(root: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    find_children(root, SITES).flat_map(|sites| find_children(sites, SITE))
}

fn site_id(site: Node) -> Result<SiteId, ExtractError> {
    required_attr(site, "FederalSiteIdentifier").map(SiteId::new)
}

/// Runs a per-site extraction over every site and concatenates the rows.
fn collect_per_site<T>(
    root: Node,
    mut extract: impl FnMut(Node) -> Result<Vec<T>, ExtractError>,
) -> Result<Vec<T>, ExtractError> {
    let mut rows = Vec::new();
    for site in site_nodes(root) {
        rows.extend(extract(site)?);
    }
    Ok(rows)
}

// --- Tests ---
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Three sites covering the shapes seen in the published dump.
    pub(crate) const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<FCSI>
  <ReportingOrganizations>
    <ReportingOrganization><Code>DND</Code><EN>Department of National Defence</EN><FR>Ministère de la Défense nationale</FR></ReportingOrganization>
    <ReportingOrganization><Code>TC</Code><EN>Transport Canada</EN><FR>Transports Canada</FR></ReportingOrganization>
  </ReportingOrganizations>
  <Sites>
    <Site FederalSiteIdentifier="00012345" ReportingOrganization="DND" Created="2005-04-01" LastModified="2017-06-30">
      <Name><EN>Former Radar Station</EN><FR>Ancienne station radar</FR></Name>
      <SiteStatus>
        <Status><EN>Active</EN><FR>Actif</FR></Status>
        <Description><EN>Remediation in progress</EN><FR>Assainissement en cours</FR></Description>
      </SiteStatus>
      <Classification><Code>1</Code><Name><EN>High priority for action</EN><FR>Priorité élevée</FR></Name></Classification>
      <PropertyNumber>09876</PropertyNumber>
      <ReasonForFederalInvolvement><EN>Federal property</EN><FR>Propriété fédérale</FR></ReasonForFederalInvolvement>
      <Location sgc="6204" fed="62001">
        <MiniMapURL>https://maps.example/12345</MiniMapURL>
        <Latitude>63.75</Latitude>
        <Longitude>-68.52</Longitude>
        <Municipality>Iqaluit</Municipality>
        <Province>NU</Province>
        <FederalElectoralDistrict><EN>Nunavut</EN><FR>Nunavut</FR></FederalElectoralDistrict>
        <Country><EN>Canada</EN><FR>Canada</FR></Country>
      </Location>
      <ContaminationDetails>
        <ContaminationEstimates><CubicMetres>1500</CubicMetres><Hectares/><Tons>20</Tons></ContaminationEstimates>
        <ContaminatedMedia>
          <Contamination code="PHC"><EN>Petroleum Hydrocarbons</EN><FR>Hydrocarbures pétroliers</FR></Contamination>
          <Medium code="S"><EN>Soil</EN><FR>Sol</FR></Medium>
        </ContaminatedMedia>
        <ContaminatedMedia>
          <Contamination code="MET"><EN>Metals</EN><FR>Métaux</FR></Contamination>
          <Medium code="GW"><EN>Groundwater</EN><FR>Eaux souterraines</FR></Medium>
        </ContaminatedMedia>
      </ContaminationDetails>
      <ManagementStrategy>
        <ManagementType code="R"><EN>Remediation</EN><FR>Assainissement</FR></ManagementType>
        <ManagementType code="RM"><EN>Risk Management</EN><FR>Gestion des risques</FR></ManagementType>
      </ManagementStrategy>
      <ActionPlan><EN>Excavate and treat.</EN><FR>Excaver et traiter.</FR></ActionPlan>
      <AdditionalInformation/>
      <PopulationCounts><KM1>0</KM1><KM5>12</KM5><KM10>7740</KM10><KM25>7740</KM25><KM50>7740</KM50></PopulationCounts>
      <AnnualData FiscalYear="2015" ReportingOrganization="DND">
        <HighestStepCompleted>Step 7</HighestStepCompleted>
        <TotalAssessmentExpenditure>1000</TotalAssessmentExpenditure>
        <TotalRemediationExpenditure>25000</TotalRemediationExpenditure>
        <TotalCareMaintenanceExpenditure>0</TotalCareMaintenanceExpenditure>
        <TotalMonitoringExpenditure>300</TotalMonitoringExpenditure>
        <FCSAPAssessmentExpenditure>500</FCSAPAssessmentExpenditure>
        <FCSAPRemediationExpenditure>20000</FCSAPRemediationExpenditure>
        <FCSAPCareMaintenanceExpenditure>0</FCSAPCareMaintenanceExpenditure>
        <FCSAPMonitoringExpenditure>0</FCSAPMonitoringExpenditure>
        <RemediationAmounts><CubicMetres>400</CubicMetres><Hectares></Hectares><Tons>5</Tons></RemediationAmounts>
        <Closed>N</Closed>
      </AnnualData>
      <AnnualData FiscalYear="2016" ReportingOrganization="DND">
        <HighestStepCompleted>Step 8</HighestStepCompleted>
        <TotalAssessmentExpenditure>0</TotalAssessmentExpenditure>
        <TotalRemediationExpenditure>5000</TotalRemediationExpenditure>
        <TotalCareMaintenanceExpenditure>0</TotalCareMaintenanceExpenditure>
        <TotalMonitoringExpenditure>150</TotalMonitoringExpenditure>
        <FCSAPAssessmentExpenditure>0</FCSAPAssessmentExpenditure>
        <FCSAPRemediationExpenditure>4000</FCSAPRemediationExpenditure>
        <FCSAPCareMaintenanceExpenditure>0</FCSAPCareMaintenanceExpenditure>
        <FCSAPMonitoringExpenditure>0</FCSAPMonitoringExpenditure>
        <Closed>Y</Closed>
      </AnnualData>
    </Site>
    <Site FederalSiteIdentifier="N00417001" ReportingOrganization="TC" Created="2008-11-12" LastModified="2016-03-31">
      <Name><EN>Airport Fuel Farm</EN><FR>Parc à carburant de l'aéroport</FR></Name>
      <SiteStatus>
        <Status><EN>Suspected</EN><FR>Soupçonné</FR></Status>
        <Description><EN>Not yet assessed</EN><FR>Pas encore évalué</FR></Description>
      </SiteStatus>
      <ReasonForFederalInvolvement><EN>Federal property</EN><FR>Propriété fédérale</FR></ReasonForFederalInvolvement>
      <Location sgc="4806" fed="48004">
        <MiniMapURL>https://maps.example/417001</MiniMapURL>
        <Country><EN>Canada</EN><FR>Canada</FR></Country>
      </Location>
      <ContaminationDetails>
        <ContaminationEstimates/>
      </ContaminationDetails>
      <AnnualData FiscalYear="2016" ReportingOrganization="TC">
        <HighestStepCompleted>Step 1</HighestStepCompleted>
        <TotalAssessmentExpenditure>0</TotalAssessmentExpenditure>
        <TotalRemediationExpenditure>0</TotalRemediationExpenditure>
        <TotalCareMaintenanceExpenditure>0</TotalCareMaintenanceExpenditure>
        <TotalMonitoringExpenditure>0</TotalMonitoringExpenditure>
        <FCSAPAssessmentExpenditure>0</FCSAPAssessmentExpenditure>
        <FCSAPRemediationExpenditure>0</FCSAPRemediationExpenditure>
        <FCSAPCareMaintenanceExpenditure>0</FCSAPCareMaintenanceExpenditure>
        <FCSAPMonitoringExpenditure>0</FCSAPMonitoringExpenditure>
        <Closed/>
      </AnnualData>
    </Site>
    <Site FederalSiteIdentifier="77001234" ReportingOrganization="TC" Created="2010-01-05" LastModified="2010-01-05">
      <SiteStatus>
        <Status><EN>Closed</EN><FR>Fermé</FR></Status>
        <Description><EN>No further action</EN><FR>Aucune autre mesure</FR></Description>
      </SiteStatus>
      <ReasonForFederalInvolvement><EN>Federal responsibility</EN><FR>Responsabilité fédérale</FR></ReasonForFederalInvolvement>
      <Location sgc="3506" fed="35075">
        <Country><EN>Canada</EN><FR>Canada</FR></Country>
      </Location>
    </Site>
  </Sites>
</FCSI>"#;

    fn flatten(xml: &str, language: Language) -> Result<FlattenedInventory, ExtractError> {
        let doc = Document::parse(xml).unwrap();
        InventoryExtractor::new(language).flatten(&doc)
    }

    #[test]
    fn test_reporting_organizations() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        assert_eq!(
            inventory.reporting_organizations[0],
            ReportingOrganization {
                code: "DND".to_string(),
                name: "Department of National Defence".to_string(),
            }
        );
        assert_eq!(inventory.reporting_organizations.len(), 2);
    }

    #[test]
    fn test_full_site_row() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let site = &inventory.sites[0];
        assert_eq!(site.federal_site_id.as_str(), "00012345");
        assert_eq!(site.reporting_organization_code, "DND");
        assert_eq!(site.created, "2005-04-01");
        assert_eq!(site.last_modified, "2017-06-30");
        assert_eq!(site.name, "Former Radar Station");
        assert_eq!(site.site_status, "Active");
        assert_eq!(site.status_description, "Remediation in progress");
        assert_eq!(site.classification_code, "1");
        assert_eq!(site.classification_name, "High priority for action");
        assert_eq!(site.property_number, "09876");
        assert_eq!(site.reason_for_federal_involvement, "Federal property");
        assert_eq!(site.location_sgc_code, "6204");
        assert_eq!(site.location_fed_code, "62001");
        assert_eq!(site.location_latitude, "63.75");
        assert_eq!(site.location_longitude, "-68.52");
        assert_eq!(site.location_federal_electoral_district, "Nunavut");
        assert_eq!(site.location_country, "Canada");
        assert_eq!(site.contamination_estimate_cubic_metres, "1500");
        assert_eq!(site.contamination_estimate_hectares, "");
        assert_eq!(site.contamination_estimate_tons, "20");
        assert_eq!(site.action_plan, "Excavate and treat.");
        assert_eq!(site.additional_information, "");
        assert_eq!(
            [
                site.population_km1.as_str(),
                site.population_km5.as_str(),
                site.population_km10.as_str(),
                site.population_km25.as_str(),
                site.population_km50.as_str(),
            ],
            ["0", "12", "7740", "7740", "7740"]
        );
    }

    #[test]
    fn test_sparse_site_degrades_to_empty() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let site = &inventory.sites[1];
        assert_eq!(site.federal_site_id.as_str(), "N00417001");
        assert_eq!(site.classification_code, "");
        assert_eq!(site.classification_name, "");
        assert_eq!(site.property_number, "");
        // Map URL without coordinates is passed through unchanged.
        assert_eq!(site.location_mini_map_url, "https://maps.example/417001");
        assert_eq!(site.location_latitude, "");
        assert_eq!(site.location_longitude, "");
        assert_eq!(site.contamination_estimate_cubic_metres, "");
        assert_eq!(site.population_km50, "");

        let bare = &inventory.sites[2];
        assert_eq!(bare.name, "");
        assert_eq!(bare.location_federal_electoral_district, "");
    }

    #[test]
    fn test_site_count_matches_input() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let doc = Document::parse(SAMPLE_XML).unwrap();
        assert_eq!(inventory.sites.len(), site_nodes(doc.root_element()).count());
        assert_eq!(inventory.sites.len(), 3);
    }

    #[test]
    fn test_management_strategies_only_for_sites_with_block() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let ids: Vec<_> = inventory.management_strategies.iter().map(|r| r.federal_site_id.as_str()).collect();
        assert_eq!(ids, vec!["00012345", "00012345"]);
        assert_eq!(inventory.management_strategies[1].management_type_code, "RM");
        assert_eq!(inventory.management_strategies[1].management_type_name, "Risk Management");
    }

    #[test]
    fn test_contaminated_media() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        assert_eq!(
            inventory.contaminated_media,
            vec![
                ContaminatedMediumEntry {
                    federal_site_id: SiteId::new("00012345"),
                    contamination_code: "PHC".into(),
                    contamination_name: "Petroleum Hydrocarbons".into(),
                    contaminated_medium_code: "S".into(),
                    contaminated_medium_name: "Soil".into(),
                },
                ContaminatedMediumEntry {
                    federal_site_id: SiteId::new("00012345"),
                    contamination_code: "MET".into(),
                    contamination_name: "Metals".into(),
                    contaminated_medium_code: "GW".into(),
                    contaminated_medium_name: "Groundwater".into(),
                },
            ]
        );
    }

    #[test]
    fn test_annual_data_rows() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let doc = Document::parse(SAMPLE_XML).unwrap();
        let expected: usize = site_nodes(doc.root_element())
            .map(|site| find_children(site, ANNUAL_DATA).count())
            .sum();
        assert_eq!(inventory.annual_data.len(), expected);

        let first_site: Vec<_> = inventory
            .annual_data
            .iter()
            .filter(|row| row.federal_site_id.as_str() == "00012345")
            .collect();
        assert_eq!(first_site.len(), 2);
        assert_eq!(first_site[0].fiscal_year, "2015");
        assert_eq!(first_site[1].fiscal_year, "2016");
        assert_eq!(first_site[0].remediation_amount_cubic_metres, "400");
        assert_eq!(first_site[0].remediation_amount_hectares, "");
        assert_eq!(first_site[0].fcsap_remediation_expenditure, "20000");
        // No RemediationAmounts block at all for 2016.
        assert_eq!(first_site[1].remediation_amount_tons, "");
        assert_eq!(first_site[1].closed, "Y");

        let empty_closed = &inventory.annual_data[2];
        assert_eq!(empty_closed.federal_site_id.as_str(), "N00417001");
        assert_eq!(empty_closed.closed, "");
    }

    #[test]
    fn test_child_rows_share_parent_id() {
        let inventory = flatten(SAMPLE_XML, Language::En).unwrap();
        let site_ids: Vec<_> = inventory.sites.iter().map(|s| s.federal_site_id.clone()).collect();
        let child_ids = inventory
            .management_strategies
            .iter()
            .map(|r| &r.federal_site_id)
            .chain(inventory.contaminated_media.iter().map(|r| &r.federal_site_id))
            .chain(inventory.annual_data.iter().map(|r| &r.federal_site_id));
        for id in child_ids {
            assert!(site_ids.contains(id), "orphan child row for {}", id);
        }
    }

    #[test]
    fn test_french_variant_applies_everywhere() {
        let inventory = flatten(SAMPLE_XML, Language::Fr).unwrap();
        assert_eq!(inventory.reporting_organizations[1].name, "Transports Canada");
        assert_eq!(inventory.sites[0].name, "Ancienne station radar");
        assert_eq!(inventory.sites[0].site_status, "Actif");
        assert_eq!(inventory.management_strategies[0].management_type_name, "Assainissement");
        assert_eq!(inventory.contaminated_media[0].contaminated_medium_name, "Sol");
    }

    #[test]
    fn test_missing_guaranteed_field_is_fatal() {
        let xml = r#"<FCSI><Sites>
            <Site FederalSiteIdentifier="1" ReportingOrganization="DND" Created="a" LastModified="b">
              <ReasonForFederalInvolvement><EN>x</EN></ReasonForFederalInvolvement>
              <Location sgc="1" fed="2"><Country><EN>Canada</EN></Country></Location>
            </Site>
        </Sites></FCSI>"#;
        match flatten(xml, Language::En) {
            Err(ExtractError::MissingElement { element, context }) => {
                assert_eq!(element, "SiteStatus");
                assert!(context.starts_with("<Site>"));
            }
            other => panic!("expected MissingElement, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fiscal_year_is_fatal() {
        let xml = r#"<Site FederalSiteIdentifier="1"><AnnualData ReportingOrganization="DND"/></Site>"#;
        let doc = Document::parse(xml).unwrap();
        let result = InventoryExtractor::new(Language::En).site_annual_data(doc.root_element());
        assert!(matches!(result, Err(ExtractError::MissingAttribute { ref attribute, .. }) if attribute == "FiscalYear"));
    }

    #[test]
    fn test_empty_collections() {
        let inventory = flatten("<FCSI><ReportingOrganizations/><Sites/></FCSI>", Language::En).unwrap();
        assert_eq!(inventory, FlattenedInventory::default());
    }
}
