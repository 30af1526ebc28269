//! Process-local store adapters.
//!
//! Rows live in a `BTreeMap` keyed by id behind a `tokio::sync::RwLock`, so
//! store order is insertion order. Ids come from a per-store sequence that
//! starts at 1 and is never reused. Stores are independent: deleting a post
//! here does not touch its comments.
//!
//! Every adapter counts the calls made against it. Tests use [`calls`] to
//! assert that a store was never consulted.
//!
//! [`calls`]: MemoryCommentStore::calls

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quill_core::pagination::PageRequest;
use quill_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::category::{Category, NewCategory};
use crate::models::comment::{Comment, NewComment};
use crate::models::post::{NewPost, Post, PostSortField};
use crate::stores::{CategoryStore, CommentStore, PostStore};
use crate::StoreError;

// ---------------------------------------------------------------------------
// Shared table
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    last_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }

    fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> T {
        let id = self.next_id();
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn replace(&mut self, entity: &'static str, id: DbId, row: T) -> Result<T, StoreError> {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => {
                tracing::warn!(entity, id, "Update addressed a row that is not in the table");
                Err(StoreError::RowMissing { entity, id })
            }
        }
    }

    fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }
}

#[derive(Debug, Default)]
struct CallCounter(AtomicUsize);

impl CallCounter {
    fn hit(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// In-memory [`CategoryStore`].
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    table: RwLock<Table<Category>>,
    calls: CallCounter,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, StoreError> {
        self.calls.hit();
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, StoreError> {
        self.calls.hit();
        Ok(self.table.read().await.filtered(|_| true))
    }

    async fn insert(&self, category: NewCategory) -> Result<Category, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Category {
            id,
            name: category.name,
            description: category.description,
        }))
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        table.replace("Category", category.id, category.clone())
    }

    async fn delete(&self, category: &Category) -> Result<(), StoreError> {
        self.calls.hit();
        self.table.write().await.rows.remove(&category.id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// In-memory [`PostStore`].
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    table: RwLock<Table<Post>>,
    calls: CallCounter,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError> {
        self.calls.hit();
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        self.calls.hit();
        Ok(self.table.read().await.filtered(|_| true))
    }

    async fn find_page(
        &self,
        request: &PageRequest<PostSortField>,
    ) -> Result<(Vec<Post>, i64), StoreError> {
        self.calls.hit();
        let mut posts = self.table.read().await.filtered(|_| true);
        let total = i64::try_from(posts.len()).unwrap_or(i64::MAX);

        let field = *request.sort_by();
        let direction = request.direction();
        posts.sort_by(|a, b| {
            direction
                .apply(field.compare(a, b))
                .then_with(|| a.id.cmp(&b.id))
        });

        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        let page = posts.into_iter().skip(skip).take(take).collect();

        Ok((page, total))
    }

    async fn find_by_category_id(&self, category_id: DbId) -> Result<Vec<Post>, StoreError> {
        self.calls.hit();
        Ok(self
            .table
            .read()
            .await
            .filtered(|post| post.category_id == category_id))
    }

    async fn insert(&self, post: NewPost) -> Result<Post, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Post {
            id,
            title: post.title,
            description: post.description,
            content: post.content,
            created_at: post.created_at,
            category_id: post.category_id,
        }))
    }

    async fn update(&self, post: &Post) -> Result<Post, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        let created_at = match table.rows.get(&post.id) {
            Some(existing) => existing.created_at,
            None => {
                return Err(StoreError::RowMissing {
                    entity: "Post",
                    id: post.id,
                })
            }
        };
        let row = Post {
            created_at,
            ..post.clone()
        };
        table.replace("Post", post.id, row)
    }

    async fn delete(&self, post: &Post) -> Result<(), StoreError> {
        self.calls.hit();
        self.table.write().await.rows.remove(&post.id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// In-memory [`CommentStore`].
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    table: RwLock<Table<Comment>>,
    calls: CallCounter,
}

impl MemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<Comment>, StoreError> {
        self.calls.hit();
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_post_id(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError> {
        self.calls.hit();
        Ok(self
            .table
            .read()
            .await
            .filtered(|comment| comment.post_id == post_id))
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Comment {
            id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
            post_id: comment.post_id,
        }))
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, StoreError> {
        self.calls.hit();
        let mut table = self.table.write().await;
        let post_id = match table.rows.get(&comment.id) {
            Some(existing) => existing.post_id,
            None => {
                return Err(StoreError::RowMissing {
                    entity: "Comment",
                    id: comment.id,
                })
            }
        };
        let row = Comment {
            post_id,
            ..comment.clone()
        };
        table.replace("Comment", comment.id, row)
    }

    async fn delete(&self, comment: &Comment) -> Result<(), StoreError> {
        self.calls.hit();
        self.table.write().await.rows.remove(&comment.id);
        Ok(())
    }
}
