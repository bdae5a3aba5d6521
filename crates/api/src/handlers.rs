// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the category use cases.
//!
//! Each handler takes the repository it operates on, so the same code runs
//! against the in-memory store and the database-backed one.

use admin_catalog::CategoryRepository;
use admin_catalog_domain::{Category, SearchParams, SearchResult, UniqueEntityId};
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CategoryOutput, CreateCategoryRequest, DeleteCategoryRequest, GetCategoryRequest,
    ListCategoriesRequest, PaginationOutput, UpdateCategoryRequest,
};

const CATEGORY_RESOURCE: &str = "Category";

fn parse_id(id: &str) -> Result<UniqueEntityId, ApiError> {
    UniqueEntityId::parse(id).map_err(translate_domain_error)
}

/// Creates and stores a new category.
///
/// # Arguments
///
/// * `repository` - The repository to store the category in
/// * `request` - The submitted fields
///
/// # Returns
///
/// * `Ok(CategoryOutput)` - The stored category
/// * `Err(ApiError)` - If validation or storage fails
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails entity validation
/// - The repository fails
pub fn create_category<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    request: CreateCategoryRequest,
) -> Result<CategoryOutput, ApiError> {
    let is_active: bool = request.is_active_or_default();
    let category: Category = Category::new(request.name, request.description, is_active)
        .map_err(translate_domain_error)?;

    let output: CategoryOutput = CategoryOutput::from_category(&category)?;
    repository
        .insert(category)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    info!(id = %output.id, name = %output.name, "Created category");
    Ok(output)
}

/// Fetches one category by id.
///
/// # Errors
///
/// Returns an error if the id is malformed or no category has it.
pub fn get_category<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    request: &GetCategoryRequest,
) -> Result<CategoryOutput, ApiError> {
    let id: UniqueEntityId = parse_id(&request.id)?;
    let category: Category = repository
        .find_by_id(&id)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    debug!(id = %id, "Fetched category");
    CategoryOutput::from_category(&category)
}

/// Lists one page of categories.
///
/// The raw request is normalized first; see [`SearchParams::new`].
///
/// # Errors
///
/// Returns an error if the repository fails.
pub fn list_categories<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    request: &ListCategoriesRequest,
) -> Result<PaginationOutput<CategoryOutput>, ApiError> {
    let params: SearchParams = SearchParams::new(request);
    let result: SearchResult<Category> = repository
        .search(&params)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    debug!(
        page = result.current_page(),
        per_page = result.per_page(),
        total = result.total(),
        "Listed categories"
    );
    PaginationOutput::try_from_result(result, CategoryOutput::from_category)
}

/// Changes a category's name, description and active flag.
///
/// # Errors
///
/// Returns an error if:
/// - The id is malformed
/// - No category has the id
/// - The new values fail entity validation
/// - The repository fails
pub fn update_category<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    request: UpdateCategoryRequest,
) -> Result<CategoryOutput, ApiError> {
    let id: UniqueEntityId = parse_id(&request.id)?;
    let mut category: Category = repository
        .find_by_id(&id)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    category
        .update(request.name, request.description)
        .map_err(translate_domain_error)?;

    match request.is_active {
        Some(true) => category.activate(),
        Some(false) => category.deactivate(),
        None => {}
    }

    let output: CategoryOutput = CategoryOutput::from_category(&category)?;
    repository
        .update(category)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    info!(id = %output.id, is_active = output.is_active, "Updated category");
    Ok(output)
}

/// Removes a category.
///
/// # Errors
///
/// Returns an error if the id is malformed or no category has it.
pub fn delete_category<R: CategoryRepository + ?Sized>(
    repository: &mut R,
    request: &DeleteCategoryRequest,
) -> Result<(), ApiError> {
    let id: UniqueEntityId = parse_id(&request.id)?;
    repository
        .delete(&id)
        .map_err(|e| translate_core_error(e, CATEGORY_RESOURCE))?;

    info!(id = %id, "Deleted category");
    Ok(())
}
