///
/// PrePersist
/// runs once, before a record is first stored
///

pub trait PrePersist {
    fn pre_persist(&mut self);
}

///
/// PreUpdate
/// runs before every subsequent write
///

pub trait PreUpdate {
    fn pre_update(&mut self);
}

/// Run the hooks for an insert.
pub fn before_insert<T: PrePersist>(record: &mut T) {
    record.pre_persist();
}

/// Run the hooks for an update.
pub fn before_update<T: PreUpdate>(record: &mut T) {
    record.pre_update();
}
