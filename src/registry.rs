// Worker and endpoint registries.
// The supervisor owns the write side (workers starting/stopping, endpoints
// opening/closing); the status assembler only ever takes momentary copies.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::ServiceStats;

/// Read side of a worker pool. The returned list is a copy; the live pool may
/// change immediately after.
pub trait WorkerRegistry: Send + Sync {
    fn stats(&self) -> Vec<ServiceStats>;
}

/// Read side of the endpoint table, keyed by the worker's listen port.
/// Port is a stable identity for the worker's lifetime, so a lookup stays
/// valid even if the worker list reorders between the two registry reads.
pub trait EndpointRegistry: Send + Sync {
    /// (active endpoints, connected clients) for the worker on `port`;
    /// (0, 0) when the worker has no endpoint entry.
    fn service_counts(&self, port: u16) -> (u32, u32);
}

fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    // A poisoned registry still holds valid data for a monitoring read.
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

/// In-process worker pool backed by an RwLock. The supervisor replaces or
/// edits entries as it spawns and reaps workers.
#[derive(Debug, Default)]
pub struct SharedWorkerRegistry {
    workers: RwLock<Vec<ServiceStats>>,
}

impl SharedWorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, stats: ServiceStats) {
        let mut workers = write_lock(&self.workers);
        workers.retain(|w| w.port != stats.port);
        workers.push(stats);
    }

    pub fn remove(&self, port: u16) {
        write_lock(&self.workers).retain(|w| w.port != port);
    }

    pub fn replace(&self, stats: Vec<ServiceStats>) {
        *write_lock(&self.workers) = stats;
    }
}

impl WorkerRegistry for SharedWorkerRegistry {
    fn stats(&self) -> Vec<ServiceStats> {
        read_lock(&self.workers).clone()
    }
}

/// In-process endpoint table: port -> (endpoints, clients).
#[derive(Debug, Default)]
pub struct SharedEndpointRegistry {
    counts: RwLock<HashMap<u16, (u32, u32)>>,
}

impl SharedEndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_counts(&self, port: u16, endpoints: u32, clients: u32) {
        write_lock(&self.counts).insert(port, (endpoints, clients));
    }

    pub fn clear(&self, port: u16) {
        write_lock(&self.counts).remove(&port);
    }
}

impl EndpointRegistry for SharedEndpointRegistry {
    fn service_counts(&self, port: u16) -> (u32, u32) {
        read_lock(&self.counts).get(&port).copied().unwrap_or((0, 0))
    }
}
