use std::hash::{Hash, Hasher};

use crate::SandId;

/// A [`SandId`] which may be NULL.
///
/// Models a nullable database column. When `valid` is `false` the value is
/// NULL and `sand_id` must be ignored; the API keeps it at zero in that case.
///
/// In plain Rust code an [`Option<SandId>`] is usually the better choice;
/// both convert into each other.
///
/// # Example
///
/// ```
/// use sand_id::{NullSandId, SandId};
///
/// let null = NullSandId::default();
/// assert!(null.is_null());
/// assert_eq!(null.get(), None);
///
/// let id = SandId::MAX;
/// let present = NullSandId::from(id);
/// assert!(present.valid);
/// assert_eq!(Option::<SandId>::from(present), Some(id));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSandId {
    /// The identifier, only meaningful if `valid` is set.
    pub sand_id: SandId,
    /// Whether `sand_id` holds a value (i.e. is not NULL).
    pub valid: bool,
}

impl NullSandId {
    /// The NULL value.
    pub const NULL: Self = Self {
        sand_id: SandId::NIL,
        valid: false,
    };

    /// Creates a non-NULL `NullSandId` holding `sand_id`.
    #[must_use]
    pub const fn new(sand_id: SandId) -> Self {
        Self { sand_id, valid: true }
    }

    /// Tests if the value is NULL.
    #[must_use]
    pub const fn is_null(self) -> bool {
        !self.valid
    }

    /// Returns the identifier, or `None` for NULL.
    #[must_use]
    pub const fn get(self) -> Option<SandId> {
        if self.valid { Some(self.sand_id) } else { None }
    }
}

// Two NULLs are equal regardless of a stale `sand_id`.
impl PartialEq for NullSandId {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl Eq for NullSandId {}

impl Hash for NullSandId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl From<SandId> for NullSandId {
    fn from(sand_id: SandId) -> Self {
        Self::new(sand_id)
    }
}

impl From<Option<SandId>> for NullSandId {
    fn from(sand_id: Option<SandId>) -> Self {
        sand_id.map_or(Self::NULL, Self::new)
    }
}

impl From<NullSandId> for Option<SandId> {
    fn from(null_sand_id: NullSandId) -> Self {
        null_sand_id.get()
    }
}
