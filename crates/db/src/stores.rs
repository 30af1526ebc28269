//! Store adapter traits.
//!
//! One trait per entity, each exposing key-indexed lookup plus the scans its
//! service needs. Implementations must be `Send + Sync` so a single instance
//! can sit behind an `Arc` shared by every request.

use async_trait::async_trait;
use quill_core::pagination::PageRequest;
use quill_core::types::DbId;

use crate::models::category::{Category, NewCategory};
use crate::models::comment::{Comment, NewComment};
use crate::models::post::{NewPost, Post, PostSortField};
use crate::StoreError;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError>;

    /// Every category in store order.
    async fn find_all(&self) -> Result<Vec<Category>, StoreError>;

    /// Persist a new category and return it with its assigned id.
    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError>;

    /// Overwrite an existing category.
    async fn update(&self, category: &Category) -> Result<Category, StoreError>;

    async fn delete(&self, category: &Category) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError>;

    /// Every post in store order.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// One sorted page of posts plus the total number of posts.
    ///
    /// Text fields order by byte value in every adapter, so `"Zed"` comes
    /// before `"apple"`. Ties break on ascending id.
    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<(Vec<Post>, i64), StoreError>;

    /// Posts whose category reference equals `category_id`, in store order.
    async fn find_by_category_id(&self, category_id: DbId) -> Result<Vec<Post>, StoreError>;

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Overwrite title, description, content and category of an existing post.
    /// `created_at` is never written.
    async fn update(&self, post: &Post) -> Result<Post, StoreError>;

    async fn delete(&self, post: &Post) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, StoreError>;

    /// Comments whose parent reference equals `post_id`, in store order.
    async fn find_by_post_id(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError>;

    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError>;

    /// Overwrite the text fields of an existing comment. `post_id` is never written.
    async fn update(&self, comment: &Comment) -> Result<Comment, StoreError>;

    async fn delete(&self, comment: &Comment) -> Result<(), StoreError>;
}
