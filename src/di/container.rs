use crate::error::{Result, StoreError};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type Instance = Arc<dyn Any + Send + Sync>;

/// Thread-safe dependency injection container.
///
/// Concrete services are stored as `Arc<T>`. Trait bindings are stored as
/// `Arc<Arc<dyn Trait>>` keyed by the trait object's `TypeId`, so resolving a
/// binding never needs to know the implementing type.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, Instance>,
    bindings: DashMap<TypeId, Instance>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    pub fn bind<T: ?Sized + 'static + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        self.bindings.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| StoreError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        entry
            .value()
            .clone()
            .downcast::<T>()
            .map_err(|_| StoreError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .bindings
            .get(&TypeId::of::<T>())
            .ok_or_else(|| StoreError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        let wrapper = entry
            .value()
            .clone()
            .downcast::<Arc<T>>()
            .map_err(|_| StoreError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn contains_trait<T: ?Sized + 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }
}
