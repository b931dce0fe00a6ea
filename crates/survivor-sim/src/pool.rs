//! Fixed-capacity entity pools with generational handles.
//!
//! A released slot bumps its generation, so handles held by deferred
//! actions stop resolving once the slot is reused.

/// Reference to a pooled entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub index: u32,
    pub generation: u32,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// A pool of at most `capacity` active values.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free_indices: Vec<u32>,
    active: usize,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot {
                generation: 0,
                value: None,
            })
            .collect();
        // Popped from the back, so slot 0 is handed out first.
        let free_indices = (0..capacity as u32).rev().collect();
        Self {
            slots,
            free_indices,
            active: 0,
        }
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn is_full(&self) -> bool {
        self.free_indices.is_empty()
    }

    /// Activate `value` in a free slot. Returns `None` when the pool is exhausted.
    pub fn acquire(&mut self, value: T) -> Option<Handle> {
        let index = self.free_indices.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        self.active += 1;
        Some(Handle {
            index,
            generation: slot.generation,
        })
    }

    /// Deactivate the value behind `handle`. Stale handles are ignored.
    pub fn release(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_indices.push(handle.index);
        self.active -= 1;
        Some(value)
    }

    pub fn is_live(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Active values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.value.as_ref().map(|v| {
                (
                    Handle {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    v,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.value.as_mut().map(|v| {
                (
                    Handle {
                        index: i as u32,
                        generation,
                    },
                    v,
                )
            })
        })
    }

    /// Handles of every active value, in slot order.
    pub fn handles(&self) -> Vec<Handle> {
        self.iter().map(|(h, _)| h).collect()
    }

    /// Release everything. Outstanding handles all go stale.
    pub fn clear(&mut self) {
        for handle in self.handles() {
            self.release(handle);
        }
    }
}
