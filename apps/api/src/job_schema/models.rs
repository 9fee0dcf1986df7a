use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Input: job record as stored by the platform
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contractor,
    Temporary,
    Intern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryPeriod {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(default)]
    pub street_address: Option<String>,
    pub address_locality: String,
    pub address_region: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub address_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
    pub period: SalaryPeriod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRequirementsSummary {
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobData {
    pub title: String,
    pub description: String,
    pub company_name: String,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub location: JobLocation,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    pub employment_type: EmploymentType,
    pub date_posted: DateTime<Utc>,
    pub valid_through: DateTime<Utc>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub requirements: Option<JobRequirementsSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Output: schema.org JSON-LD
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    pub address_locality: String,
    pub address_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

/// Remote postings carry `applicant_location_requirements`, on-site ones `address`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_location_requirements: Option<Country>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub min_value: f64,
    pub max_value: f64,
    pub unit_text: SalaryPeriod,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonetaryAmount {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub currency: String,
    pub value: QuantitativeValue,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub title: String,
    pub description: String,
    pub identifier: PropertyValue,
    pub date_posted: String,
    pub valid_through: String,
    pub employment_type: EmploymentType,
    pub hiring_organization: Organization,
    pub job_location: Place,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<MonetaryAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_location_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_benefits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_requirements: Option<String>,
}
