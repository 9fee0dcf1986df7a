// Job Posting Schema: schema.org JobPosting JSON-LD for search-engine job listings.

pub mod generator;
pub mod handlers;
pub mod models;
