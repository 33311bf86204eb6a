pub mod bloom;
pub mod cuckoo;

/// Answer of an approximate membership query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    PossiblyPresent,
    DefinitelyAbsent,
}

impl Membership {
    pub fn is_possibly_present(self) -> bool {
        self == Membership::PossiblyPresent
    }
}

impl From<bool> for Membership {
    fn from(present: bool) -> Self {
        if present {
            Membership::PossiblyPresent
        } else {
            Membership::DefinitelyAbsent
        }
    }
}

/// Read-only membership test shared by the filters and the exact baselines.
///
/// Exact structures never report `PossiblyPresent` for an absent item;
/// filters may, but never report `DefinitelyAbsent` for a stored one.
pub trait SetMembership<T: ?Sized> {
    fn contains(&self, item: &T) -> bool;

    fn query(&self, item: &T) -> Membership {
        self.contains(item).into()
    }
}
