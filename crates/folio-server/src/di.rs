//! Dependency injection modules using Shaku.
//!
//! Two wiring variants exist, chosen from configuration at startup:
//! - `LocalCacheModule`: full stack with the in-process cache
//! - `RedisCacheModule`: full stack with the Redis cache backend

use folio_config::RedisConfig;
use folio_core::{FolioError, FolioResult};
use folio_repository::{
    AuthorRepository, BookRepository, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    MySqlAuthorRepository, MySqlBookRepository,
};
use folio_service::{
    AuthorService, AuthorServiceComponent, BookService, BookServiceComponent, CacheInterface,
    MemoryCacheService, RedisCacheService, RedisCacheServiceParameters,
};
use shaku::{module, HasComponent};
use sqlx::mysql::MySqlPool;
use std::sync::Arc;

// Single-process wiring with the in-process cache.
module! {
    pub LocalCacheModule {
        components = [
            DatabasePool,
            MySqlBookRepository,
            MySqlAuthorRepository,
            MemoryCacheService,
            BookServiceComponent,
            AuthorServiceComponent,
        ],
        providers = [],
    }
}

// Single-process wiring with a shared Redis cache, for multi-instance
// deployments where invalidations must be visible across processes.
module! {
    pub RedisCacheModule {
        components = [
            DatabasePool,
            MySqlBookRepository,
            MySqlAuthorRepository,
            RedisCacheService,
            BookServiceComponent,
            AuthorServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the module wired to the in-process cache.
pub fn build_local_module(pool: MySqlPool) -> Arc<LocalCacheModule> {
    Arc::new(
        LocalCacheModule::builder()
            .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
            .build(),
    )
}

/// Builds the module wired to Redis.
///
/// The Redis pool is created lazily by deadpool; connection failures surface
/// on first use, not here.
pub fn build_redis_module(
    pool: MySqlPool,
    redis_config: &RedisConfig,
) -> FolioResult<Arc<RedisCacheModule>> {
    let cache_pool = if redis_config.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&redis_config.url);
        let redis_pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| FolioError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Some(Arc::new(redis_pool))
    } else {
        None
    };

    Ok(Arc::new(
        RedisCacheModule::builder()
            .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool })
            .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
                pool: cache_pool,
            })
            .build(),
    ))
}

/// Trait for resolving the application services from any module.
pub trait ServiceResolver {
    /// Resolves the book service from the module.
    fn book_service(&self) -> Arc<dyn BookService>;

    /// Resolves the author service from the module.
    fn author_service(&self) -> Arc<dyn AuthorService>;
}

impl ServiceResolver for LocalCacheModule {
    fn book_service(&self) -> Arc<dyn BookService> {
        self.resolve()
    }

    fn author_service(&self) -> Arc<dyn AuthorService> {
        self.resolve()
    }
}

impl ServiceResolver for RedisCacheModule {
    fn book_service(&self) -> Arc<dyn BookService> {
        self.resolve()
    }

    fn author_service(&self) -> Arc<dyn AuthorService> {
        self.resolve()
    }
}

/// Trait for resolving the repositories from any module.
pub trait RepositoryResolver {
    /// Resolves the book repository from the module.
    fn book_repository(&self) -> Arc<dyn BookRepository>;

    /// Resolves the author repository from the module.
    fn author_repository(&self) -> Arc<dyn AuthorRepository>;
}

impl RepositoryResolver for LocalCacheModule {
    fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.resolve()
    }

    fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.resolve()
    }
}

impl RepositoryResolver for RedisCacheModule {
    fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.resolve()
    }

    fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_types_exist() {
        fn _assert_service_resolver<T: ServiceResolver>() {}
        fn _assert_repository_resolver<T: RepositoryResolver>() {}

        _assert_service_resolver::<LocalCacheModule>();
        _assert_service_resolver::<RedisCacheModule>();
        _assert_repository_resolver::<LocalCacheModule>();
        _assert_repository_resolver::<RedisCacheModule>();
    }

    #[test]
    fn test_has_component_trait_bounds() {
        fn _assert_has_book_service<T: HasComponent<dyn BookService>>() {}
        fn _assert_has_author_service<T: HasComponent<dyn AuthorService>>() {}
        fn _assert_has_book_repository<T: HasComponent<dyn BookRepository>>() {}
        fn _assert_has_author_repository<T: HasComponent<dyn AuthorRepository>>() {}
        fn _assert_has_database_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}

        _assert_has_book_service::<LocalCacheModule>();
        _assert_has_author_service::<LocalCacheModule>();
        _assert_has_book_repository::<LocalCacheModule>();
        _assert_has_author_repository::<LocalCacheModule>();
        _assert_has_database_pool::<LocalCacheModule>();
        _assert_has_cache::<LocalCacheModule>();

        _assert_has_book_service::<RedisCacheModule>();
        _assert_has_author_service::<RedisCacheModule>();
        _assert_has_book_repository::<RedisCacheModule>();
        _assert_has_author_repository::<RedisCacheModule>();
        _assert_has_database_pool::<RedisCacheModule>();
        _assert_has_cache::<RedisCacheModule>();
    }

    #[test]
    fn test_resolver_traits_are_object_safe() {
        fn _use_service_resolver(_r: &dyn ServiceResolver) {}
        fn _use_repository_resolver(_r: &dyn RepositoryResolver) {}
    }
}
