use crate::categories::categories_model::{
    Category, CategoryRequest, CategoryResponse, NewCategory,
};
use crate::errors::Result;
use crate::users::User;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_default_categories(&self) -> Result<Vec<Category>>;
    fn get_user_categories(&self, user_id: i64) -> Result<Vec<Category>>;
    fn get_category_by_id(&self, category_id: i64) -> Result<Option<Category>>;
    fn exists_default_by_name(&self, name: &str) -> Result<bool>;
    fn exists_by_name_and_user(&self, name: &str, user_id: i64) -> Result<bool>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn delete_category(&self, category_id: i64) -> Result<usize>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Defaults plus the user's own categories, sorted by name.
    fn get_categories(&self, user: &User) -> Result<Vec<CategoryResponse>>;
    async fn create_category(
        &self,
        user: &User,
        request: CategoryRequest,
    ) -> Result<CategoryResponse>;
    async fn delete_category(&self, user: &User, category_id: i64) -> Result<()>;
    /// Inserts any missing default categories. Returns how many were created.
    async fn seed_default_categories(&self) -> Result<usize>;
}
