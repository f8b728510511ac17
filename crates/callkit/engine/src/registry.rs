//! Schema registry: one frozen declaration per call type.
//!
//! A type's declaration is evaluated the first time an instance of it is
//! built and reused afterwards. Failed declarations are not cached, so every
//! attempt to build the type reports the same configuration error.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use callkit_types::ConfigurationError;
use parking_lot::RwLock;

use crate::call::Call;
use crate::schema::{CallSchema, SchemaBuilder};

type SchemaMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

static SCHEMAS: OnceLock<RwLock<SchemaMap>> = OnceLock::new();

fn schemas() -> &'static RwLock<SchemaMap> {
    SCHEMAS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Process-wide cache of call schemas, keyed by call type.
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// The schema for `C`, declaring it on first use.
    pub fn schema_for<C: Call>() -> Result<Arc<CallSchema<C>>, ConfigurationError> {
        let id = TypeId::of::<C>();

        let cached = schemas().read().get(&id).cloned();
        if let Some(schema) = cached.and_then(|entry| entry.downcast::<CallSchema<C>>().ok()) {
            return Ok(schema);
        }

        let built = Arc::new(C::declare(SchemaBuilder::new(C::name())).build()?);
        let (schema, inserted) = Self::insert(built);

        if inserted {
            tracing::info!(
                call = C::name(),
                attributes = schema.attributes().len(),
                validators = schema.validators().len(),
                "Call schema registered"
            );
        }
        Ok(schema)
    }

    /// Cache `built` unless another thread registered `C` first. Returns the
    /// cached schema and whether it is `built`.
    fn insert<C: Call>(built: Arc<CallSchema<C>>) -> (Arc<CallSchema<C>>, bool) {
        let mut map = schemas().write();
        let inserted = !map.contains_key(&TypeId::of::<C>());
        let entry = map
            .entry(TypeId::of::<C>())
            .or_insert_with(|| built.clone() as Arc<dyn Any + Send + Sync>)
            .clone();
        drop(map);

        match entry.downcast::<CallSchema<C>>() {
            Ok(schema) => (schema, inserted),
            Err(_) => (built, inserted),
        }
    }

    /// Whether `C` has a cached schema.
    pub fn is_registered<C: Call>() -> bool {
        schemas().read().contains_key(&TypeId::of::<C>())
    }
}
