use std::sync::Arc;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Flat row-major element buffer behind a shared handle.
///
/// `share` hands out another handle on the same buffer; `duplicate` allocates
/// a new one. Storage intentionally has no `Clone` impl so callers must pick.
#[derive(Debug)]
pub struct Storage {
    data: Arc<RwLock<Box<[i32]>>>,
    len: usize,
}

impl Storage {
    /// Allocate `len` elements set to `value`
    pub fn filled(len: usize, value: i32) -> Self {
        Self::from_vec(vec![value; len])
    }

    pub fn from_vec(data: Vec<i32>) -> Self {
        let len = data.len();
        Self {
            data: Arc::new(RwLock::new(data.into_boxed_slice())),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Box<[i32]>> {
        self.data.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Box<[i32]>> {
        self.data.write()
    }

    /// Another handle on the same buffer
    pub fn share(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            len: self.len,
        }
    }

    /// Independent buffer with the same contents
    pub fn duplicate(&self) -> Self {
        Self::from_vec(self.snapshot())
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Vec<i32> {
        self.data.read().to_vec()
    }

    /// Whether both handles point at the same buffer
    pub fn ptr_eq(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of live handles on this buffer
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }
}
