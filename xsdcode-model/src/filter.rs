//! Typed member filtering.
//!
//! [`TypeDeclaration::members_of`] narrows the heterogeneous member list to a
//! single member kind without reordering it.

use crate::types::{Constructor, Field, Member, Method, Property, TypeDeclaration};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice;

/// A member variant that can be selected out of a [`Member`].
pub trait MemberKind: Sized {
    /// Narrows a member to this kind, or `None` if it is another kind.
    fn from_member(member: &Member) -> Option<&Self>;
}

impl MemberKind for Field {
    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl MemberKind for Property {
    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Property(prop) => Some(prop),
            _ => None,
        }
    }
}

impl MemberKind for Constructor {
    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Constructor(ctor) => Some(ctor),
            _ => None,
        }
    }
}

impl MemberKind for Method {
    fn from_member(member: &Member) -> Option<&Self> {
        match member {
            Member::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// Lazy view over the members of kind `T`, in declaration order.
///
/// A clone continues independently from the position of the original.
/// Calling [`TypeDeclaration::members_of`] again starts a fresh pass; the
/// underlying model is never touched.
pub struct MembersOf<'a, T> {
    inner: slice::Iter<'a, Member>,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for MembersOf<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for MembersOf<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembersOf")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, T: MemberKind + 'a> Iterator for MembersOf<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(T::from_member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<'a, T: MemberKind + 'a> DoubleEndedIterator for MembersOf<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(T::from_member)
    }
}

impl<'a, T: MemberKind + 'a> FusedIterator for MembersOf<'a, T> {}

impl TypeDeclaration {
    /// Returns the members of kind `T`, preserving declaration order.
    ///
    /// A type with no members of that kind yields an empty sequence.
    #[must_use]
    pub fn members_of<T: MemberKind>(&self) -> MembersOf<'_, T> {
        MembersOf {
            inner: self.members.iter(),
            _kind: PhantomData,
        }
    }

    /// Returns the declared fields.
    #[must_use]
    pub fn fields(&self) -> MembersOf<'_, Field> {
        self.members_of()
    }

    /// Returns the declared properties.
    #[must_use]
    pub fn properties(&self) -> MembersOf<'_, Property> {
        self.members_of()
    }

    /// Returns the declared constructors.
    #[must_use]
    pub fn constructors(&self) -> MembersOf<'_, Constructor> {
        self.members_of()
    }

    /// Returns the declared methods.
    #[must_use]
    pub fn methods(&self) -> MembersOf<'_, Method> {
        self.members_of()
    }

    /// Looks up the first field with the given name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|f| f.name == name)
    }
}
