//! Curve context ownership.
//!
//! libsecp256k1 operations run against a context holding precomputed tables. A
//! context is either allocated by the recoverer and destroyed with it, or lent by
//! the caller, who keeps ownership and stays responsible for destroying it. The
//! mode is picked once at construction.
use core::{fmt, ops::Deref};
use secp256k1::{Context, Secp256k1, VerifyOnly};

/// A secp256k1 context that is either owned or borrowed.
///
/// Dropping an [`Owned`](RecoveryContext::Owned) context destroys it, dropping a
/// [`Borrowed`](RecoveryContext::Borrowed) one leaves it untouched.
pub enum RecoveryContext<'a, C: Context = VerifyOnly> {
    /// Allocated by this component, destroyed on drop.
    Owned(Secp256k1<C>),
    /// Supplied by the caller, never destroyed here.
    Borrowed(&'a Secp256k1<C>),
}

impl<'a, C: Context> RecoveryContext<'a, C> {
    /// Allocates a fresh context that is destroyed together with this value.
    pub fn owned() -> Self {
        tracing::trace!(context = C::DESCRIPTION, "allocating secp256k1 context");
        Self::Owned(Secp256k1::gen_new())
    }

    /// Wraps a caller supplied context. It will not be destroyed by this value.
    pub const fn borrowed(ctx: &'a Secp256k1<C>) -> Self {
        Self::Borrowed(ctx)
    }

    /// Borrows `ctx` if given, otherwise allocates an owned context.
    pub fn from_option(ctx: Option<&'a Secp256k1<C>>) -> Self {
        match ctx {
            Some(ctx) => Self::borrowed(ctx),
            None => Self::owned(),
        }
    }

    /// Returns `true` if the context is destroyed when this value is dropped.
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns `true` if the context belongs to the caller.
    #[inline]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed(_))
    }

    /// Returns the underlying context.
    #[inline]
    pub fn get(&self) -> &Secp256k1<C> {
        match self {
            Self::Owned(ctx) => ctx,
            Self::Borrowed(ctx) => ctx,
        }
    }

    /// Takes the context out if it is owned.
    pub fn into_owned(self) -> Option<Secp256k1<C>> {
        match self {
            Self::Owned(ctx) => Some(ctx),
            Self::Borrowed(_) => None,
        }
    }
}

impl<C: Context> Default for RecoveryContext<'_, C> {
    fn default() -> Self {
        Self::owned()
    }
}

impl<'a, C: Context> From<&'a Secp256k1<C>> for RecoveryContext<'a, C> {
    fn from(ctx: &'a Secp256k1<C>) -> Self {
        Self::borrowed(ctx)
    }
}

impl<C: Context> From<Secp256k1<C>> for RecoveryContext<'_, C> {
    fn from(ctx: Secp256k1<C>) -> Self {
        Self::Owned(ctx)
    }
}

impl<C: Context> Deref for RecoveryContext<'_, C> {
    type Target = Secp256k1<C>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.get()
    }
}

impl<C: Context> fmt::Debug for RecoveryContext<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_owned() { "Owned" } else { "Borrowed" };
        f.debug_tuple(mode).field(self.get()).finish()
    }
}
