use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::categories_model::{Category, CategoryRequest, CategoryResponse, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::constants::DEFAULT_CATEGORY_NAMES;
use crate::errors::{DatabaseError, Error, Result};
use crate::users::User;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { category_repo }
    }

    fn name_taken(&self, name: &str, user_id: i64) -> Result<bool> {
        Ok(self.category_repo.exists_default_by_name(name)?
            || self.category_repo.exists_by_name_and_user(name, user_id)?)
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_categories(&self, user: &User) -> Result<Vec<CategoryResponse>> {
        let mut categories: Vec<Category> = self.category_repo.get_default_categories()?;
        categories.extend(self.category_repo.get_user_categories(user.id)?);
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn create_category(
        &self,
        user: &User,
        request: CategoryRequest,
    ) -> Result<CategoryResponse> {
        request.validate()?;
        if self.name_taken(&request.name, user.id)? {
            return Err(Error::AlreadyExists(
                "Category name already exists".to_string(),
            ));
        }
        let created = self
            .category_repo
            .create_category(NewCategory {
                name: request.name,
                description: request.description,
                user_id: Some(user.id),
            })
            .await
            .map_err(|e| match e {
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    Error::AlreadyExists("Category name already exists".to_string())
                }
                other => other,
            })?;
        debug!("User {} created category {}", user.id, created.id);
        Ok(CategoryResponse::from(created))
    }

    async fn delete_category(&self, user: &User, category_id: i64) -> Result<()> {
        let category = self
            .category_repo
            .get_category_by_id(category_id)?
            .ok_or_else(|| Error::not_found("Category not found"))?;
        if category.is_default() {
            return Err(Error::OperationNotAllowed(
                "Default categories cannot be deleted".to_string(),
            ));
        }
        if !category.is_owned_by(user.id) {
            return Err(Error::OperationNotAllowed(
                "Cannot delete another user's category".to_string(),
            ));
        }
        self.category_repo.delete_category(category_id).await?;
        debug!("User {} deleted category {}", user.id, category_id);
        Ok(())
    }

    async fn seed_default_categories(&self) -> Result<usize> {
        let mut created = 0;
        for name in DEFAULT_CATEGORY_NAMES {
            if self.category_repo.exists_default_by_name(name)? {
                continue;
            }
            self.category_repo
                .create_category(NewCategory {
                    name: name.to_string(),
                    description: Some(format!("{name} expenses")),
                    user_id: None,
                })
                .await?;
            created += 1;
        }
        if created > 0 {
            info!("Seeded {} default categories", created);
        }
        Ok(created)
    }
}
