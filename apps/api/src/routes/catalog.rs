//! Read-only option lists backing the personal-info and education forms.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::catalog::{self, Country, COUNTRIES, DEGREE_OPTIONS, SCHOOL_OPTIONS};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationOptions {
    pub degrees: &'static [&'static str],
    pub schools: &'static [&'static str],
}

/// GET /api/v1/catalog/countries
pub async fn handle_countries() -> Json<&'static [Country]> {
    Json(COUNTRIES)
}

/// GET /api/v1/catalog/countries/:country/cities
pub async fn handle_cities(
    Path(country): Path<String>,
) -> Result<Json<&'static [&'static str]>, AppError> {
    catalog::find_country(&country)
        .map(|c| Json(c.cities))
        .ok_or_else(|| AppError::NotFound(format!("country '{country}' not found")))
}

/// GET /api/v1/catalog/education
pub async fn handle_education_options() -> Json<EducationOptions> {
    Json(EducationOptions {
        degrees: DEGREE_OPTIONS,
        schools: SCHOOL_OPTIONS,
    })
}
