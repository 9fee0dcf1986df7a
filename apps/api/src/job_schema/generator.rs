//! Builds schema.org `JobPosting` documents from platform job records.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::job_schema::models::{
    Country, JobData, JobPostingSchema, MonetaryAmount, Organization, Place, PostalAddress,
    PropertyValue, QuantitativeValue,
};

const SCHEMA_CONTEXT: &str = "https://schema.org/";
const TELECOMMUTE: &str = "TELECOMMUTE";

/// Generates the JSON-LD document with a fresh posting identifier.
pub fn generate_job_posting_schema(job: &JobData) -> JobPostingSchema {
    build_schema(job, generate_job_id())
}

const JOB_ID_SUFFIX_LEN: usize = 9;

/// `job_<epoch millis>_<9 random base-36 chars>`
pub fn generate_job_id() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let suffix: String = (0..JOB_ID_SUFFIX_LEN)
        .map(|_| {
            let digit = (bits % 36) as u32;
            bits /= 36;
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect();
    format!("job_{}_{}", Utc::now().timestamp_millis(), suffix)
}

pub fn build_schema(job: &JobData, identifier: String) -> JobPostingSchema {
    let job_location = if job.remote {
        Place {
            schema_type: "Place",
            address: None,
            applicant_location_requirements: Some(Country {
                schema_type: "Country",
                name: job.location.address_country.clone(),
            }),
        }
    } else {
        Place {
            schema_type: "Place",
            address: Some(PostalAddress {
                schema_type: "PostalAddress",
                street_address: non_empty(&job.location.street_address),
                address_locality: job.location.address_locality.clone(),
                address_region: job.location.address_region.clone(),
                postal_code: non_empty(&job.location.postal_code),
                address_country: job.location.address_country.clone(),
            }),
            applicant_location_requirements: None,
        }
    };

    let base_salary = job.salary.as_ref().map(|salary| MonetaryAmount {
        schema_type: "MonetaryAmount",
        currency: salary.currency.clone(),
        value: QuantitativeValue {
            schema_type: "QuantitativeValue",
            min_value: salary.min,
            max_value: salary.max,
            unit_text: salary.period,
        },
    });

    let job_benefits = if job.benefits.is_empty() {
        None
    } else {
        Some(job.benefits.join(", "))
    };

    let requirements = job.requirements.as_ref();

    JobPostingSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "JobPosting",
        title: job.title.clone(),
        description: job.description.clone(),
        identifier: PropertyValue {
            schema_type: "PropertyValue",
            name: job.company_name.clone(),
            value: identifier,
        },
        date_posted: iso_millis(&job.date_posted),
        valid_through: iso_millis(&job.valid_through),
        employment_type: job.employment_type,
        hiring_organization: Organization {
            schema_type: "Organization",
            name: job.company_name.clone(),
            same_as: non_empty(&job.company_website),
            logo: non_empty(&job.company_logo),
        },
        job_location,
        base_salary,
        job_location_type: job.remote.then_some(TELECOMMUTE),
        job_benefits,
        education_requirements: requirements.and_then(|r| non_empty(&r.education)),
        experience_requirements: requirements.and_then(|r| non_empty(&r.experience)),
    }
}

fn iso_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
